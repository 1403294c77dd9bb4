//! Problem manager: initialization and the explicit time-stepping driver.
//!
//! Owns the particle set and the nodal scratch fields for the duration of a
//! solve; borrows the mesh, the material table and the boundary conditions.

pub mod g2p;
pub mod grid_update;
pub mod p2g;

use std::path::Path;

use tracing::info;

use crate::boundary::BoundarySet;
use crate::core::{Grid, ParticleSet};
use crate::error::{Result, SolverError};
use crate::geometry::Geometry;
use crate::materials::StressModel;
use crate::math::Real;
use crate::mesh::{NUM_FACES, UniformMesh};
use crate::output::SnapshotWriter;

pub struct MpmSolver<'a> {
    mesh: &'a UniformMesh,
    materials: &'a [Box<dyn StressModel>],
    boundary_conditions: &'a BoundarySet,
    has_gravity: bool,
    particles: ParticleSet,
}

impl<'a> MpmSolver<'a> {
    pub fn new(
        mesh: &'a UniformMesh,
        materials: &'a [Box<dyn StressModel>],
        boundary_conditions: &'a BoundarySet,
        has_gravity: bool,
    ) -> Self {
        Self {
            mesh,
            materials,
            boundary_conditions,
            has_gravity,
            particles: ParticleSet::new(),
        }
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut ParticleSet {
        &mut self.particles
    }

    /// Populate the particle set from the given geometries.
    ///
    /// Every cell seeds its quadrature candidates in deterministic order;
    /// each candidate joins the first geometry (in list order) that contains
    /// it and is discarded if none does. Returns the particle count.
    pub fn initialize(
        &mut self,
        geometries: &[Box<dyn Geometry>],
        order: usize,
    ) -> Result<usize> {
        use crate::core::Particle;

        let mut candidates = Vec::with_capacity(self.mesh.particles_per_cell(order));
        for cell_index in 0..self.mesh.total_num_cells() {
            let cell = self.mesh.cell_coords(cell_index);
            self.mesh.seed_cell_candidates(cell, order, &mut candidates)?;
            for candidate in &candidates {
                for geometry in geometries {
                    if geometry.contains(&candidate.position) {
                        let mut particle =
                            Particle::at_candidate(candidate.position, candidate.volume);
                        geometry.initialize_particle(&mut particle);
                        self.particles.push(particle);
                        break;
                    }
                }
            }
        }

        info!(
            particles = self.particles.len(),
            cells = self.mesh.total_num_cells(),
            order,
            "initialized particle set"
        );
        Ok(self.particles.len())
    }

    fn validate(&self, dt: Real, write_frequency: usize) -> Result<()> {
        if self.mesh.total_num_cells() == 0 {
            return Err(SolverError::InvalidConfig(
                "mesh has no cells".into(),
            ));
        }
        if !(self.mesh.cell_width() > 0.0) {
            return Err(SolverError::InvalidConfig(
                "mesh cell width must be positive".into(),
            ));
        }
        if !(dt > 0.0) {
            return Err(SolverError::InvalidConfig(
                "time step size must be positive".into(),
            ));
        }
        if write_frequency == 0 {
            return Err(SolverError::InvalidConfig(
                "write frequency must be positive".into(),
            ));
        }
        if self.materials.is_empty() {
            return Err(SolverError::InvalidConfig(
                "material table is empty".into(),
            ));
        }
        for particle in self.particles.iter() {
            if particle.material >= self.materials.len() {
                return Err(SolverError::InvalidMaterial {
                    index: particle.material,
                    count: self.materials.len(),
                });
            }
        }
        Ok(())
    }

    /// Run `num_steps` explicit steps of size `dt`, writing a snapshot at
    /// step 0, after every `write_frequency`-th step, and once more after
    /// the final step.
    pub fn solve(
        &mut self,
        num_steps: usize,
        dt: Real,
        output_file: &Path,
        write_frequency: usize,
    ) -> Result<()> {
        self.validate(dt, write_frequency)?;

        let mut grid = Grid::new(self.mesh.total_num_nodes());
        let mut writer = SnapshotWriter::new(output_file);

        info!(
            num_steps,
            dt,
            write_frequency,
            particles = self.particles.len(),
            nodes = grid.num_nodes(),
            "starting solve"
        );

        writer.write(self.particles.particles())?;
        for step in 0..num_steps {
            self.step(&mut grid, dt);
            if (step + 1) % write_frequency == 0 {
                writer.write(self.particles.particles())?;
            }
        }
        writer.write(self.particles.particles())?;

        info!(snapshots = writer.snapshots_written(), "solve finished");
        Ok(())
    }

    // One explicit step. Stage order is fixed: the kinematics update must
    // read the pre-integration nodal momentum, and the nodal velocity field
    // is rebuilt only afterwards, from the basis values cached at locate.
    fn step(&mut self, grid: &mut Grid, dt: Real) {
        let particles = self.particles.particles_mut();

        p2g::locate_particles(self.mesh, particles);

        p2g::scatter_mass(particles, grid);

        p2g::scatter_momentum(particles, grid);
        for face in 0..NUM_FACES {
            self.boundary_conditions[face].evaluate_momentum_condition(
                self.mesh,
                face,
                &grid.mass,
                &mut grid.momentum,
            );
        }

        p2g::scatter_internal_forces(particles, grid);

        grid_update::integrate_impulse(grid, dt, self.has_gravity);
        for face in 0..NUM_FACES {
            self.boundary_conditions[face].evaluate_impulse_condition(
                self.mesh,
                face,
                &grid.mass,
                &mut grid.impulse,
            );
        }

        g2p::update_particle_kinematics(particles, grid, dt);

        grid_update::compute_nodal_velocities(particles, grid);
        for face in 0..NUM_FACES {
            self.boundary_conditions[face].evaluate_velocity_condition(
                self.mesh,
                face,
                &grid.mass,
                &mut grid.velocity,
            );
        }

        g2p::update_deformation_state(particles, grid, dt);

        for particle in particles.iter_mut() {
            debug_assert!(particle.material < self.materials.len());
            self.materials[particle.material].calculate_stress(particle);
        }
    }
}
