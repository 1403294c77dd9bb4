//! Particle-to-Grid (P2G) transfer operations
//!
//! Locates particles on the mesh and scatters mass, momentum and the
//! stress-divergence internal forces onto the nodal fields.

use crate::core::{Grid, Particle};
use crate::mesh::UniformMesh;

/// Cache each particle's containing-cell node ids, shape function values
/// and world-frame gradients for the current step.
pub fn locate_particles(mesh: &UniformMesh, particles: &mut [Particle]) {
    for particle in particles.iter_mut() {
        let cell = mesh.locate_particle(&particle.position);
        mesh.cell_node_ids(cell, &mut particle.node_ids);
        let reference = mesh.map_to_reference(&particle.position, cell);
        mesh.shape_values(&reference, &mut particle.basis_values);
        mesh.shape_gradients(&reference, &mut particle.basis_gradients);
    }
}

/// Scatter particle mass onto the nodes: m_n += N_k m_p.
pub fn scatter_mass(particles: &[Particle], grid: &mut Grid) {
    grid.zero_mass();
    for particle in particles {
        for (k, &node) in particle.node_ids.iter().enumerate() {
            grid.mass[node] += particle.basis_values[k] * particle.mass;
        }
    }
}

/// Scatter particle momentum onto the nodes: p_n += m_p v_p N_k.
pub fn scatter_momentum(particles: &[Particle], grid: &mut Grid) {
    grid.zero_momentum();
    for particle in particles {
        let momentum = particle.mass * particle.velocity;
        for (k, &node) in particle.node_ids.iter().enumerate() {
            grid.momentum[node] += momentum * particle.basis_values[k];
        }
    }
}

/// Assemble nodal internal forces from the discrete divergence of the
/// Cauchy stress: f_n[i] -= V_p dN_k/dx_j sigma_p[j][i].
pub fn scatter_internal_forces(particles: &[Particle], grid: &mut Grid) {
    grid.zero_internal_force();
    for particle in particles {
        let weighted_stress = particle.stress.transpose() * particle.volume;
        for (k, &node) in particle.node_ids.iter().enumerate() {
            grid.internal_force[node] -= weighted_stress * particle.basis_gradients[k];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Matrix, Real, Vector};

    fn single_particle_setup() -> (UniformMesh, Vec<Particle>, Grid) {
        let mesh = UniformMesh::new([1, 1, 1], 1.0);
        let particle = Particle::at_candidate(Vector::new(0.25, 0.5, 0.75), 1.0)
            .with_mass(2.0)
            .with_velocity(Vector::new(1.0, -1.0, 0.5));
        let grid = Grid::new(mesh.total_num_nodes());
        (mesh, vec![particle], grid)
    }

    #[test]
    fn scattered_mass_sums_to_particle_mass() {
        let (mesh, mut particles, mut grid) = single_particle_setup();
        locate_particles(&mesh, &mut particles);
        scatter_mass(&particles, &mut grid);
        assert!((grid.total_mass() - 2.0).abs() < 1e-14);
    }

    #[test]
    fn scattered_momentum_sums_to_particle_momentum() {
        let (mesh, mut particles, mut grid) = single_particle_setup();
        locate_particles(&mesh, &mut particles);
        scatter_momentum(&particles, &mut grid);
        let expected = Vector::new(2.0, -2.0, 1.0);
        assert!((grid.total_momentum() - expected).norm() < 1e-14);
    }

    #[test]
    fn uniform_pressure_forces_cancel_in_total() {
        let (mesh, mut particles, mut grid) = single_particle_setup();
        particles[0].stress = Matrix::identity() * -5.0;
        locate_particles(&mesh, &mut particles);
        scatter_internal_forces(&particles, &mut grid);

        // Gradients sum to zero, so the net internal force vanishes.
        let total: Vector = grid.internal_force.iter().sum();
        assert!(total.norm() < 1e-12);
        // Individual nodes still see a force.
        let max: Real = grid
            .internal_force
            .iter()
            .map(|f| f.norm())
            .fold(0.0, Real::max);
        assert!(max > 0.0);
    }
}
