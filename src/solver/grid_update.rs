//! Nodal update stage
//!
//! Integrates internal forces into nodal impulses (with the optional body
//! force) and reconstructs the mass-weighted nodal velocity field used by
//! the deformation update.

use crate::config::GRAVITY;
use crate::core::{Grid, Particle};
use crate::math::{Real, inv_exact};

/// Integrate the nodal impulse: imp_n = dt f_n, minus dt m_n g on the
/// z-component when gravity is enabled.
pub fn integrate_impulse(grid: &mut Grid, dt: Real, has_gravity: bool) {
    for (node, impulse) in grid.impulse.iter_mut().enumerate() {
        *impulse = grid.internal_force[node] * dt;
        if has_gravity {
            impulse[2] -= dt * grid.mass[node] * GRAVITY;
        }
    }
}

/// Recompute nodal velocities by re-scattering particle momentum with the
/// basis values cached at the locate stage and dividing by nodal mass.
/// Massless nodes get zero velocity.
pub fn compute_nodal_velocities(particles: &[Particle], grid: &mut Grid) {
    grid.zero_velocity();
    for particle in particles {
        let momentum = particle.mass * particle.velocity;
        for (k, &node) in particle.node_ids.iter().enumerate() {
            grid.velocity[node] += momentum * particle.basis_values[k];
        }
    }
    for (node, velocity) in grid.velocity.iter_mut().enumerate() {
        *velocity *= inv_exact(grid.mass[node]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Vector, zero_vector};
    use crate::mesh::UniformMesh;
    use crate::solver::p2g::{locate_particles, scatter_mass};

    #[test]
    fn impulse_is_scaled_internal_force() {
        let mut grid = Grid::new(2);
        grid.internal_force[0] = Vector::new(10.0, 0.0, -4.0);
        integrate_impulse(&mut grid, 0.5, false);
        assert_eq!(grid.impulse[0], Vector::new(5.0, 0.0, -2.0));
        assert_eq!(grid.impulse[1], zero_vector());
    }

    #[test]
    fn gravity_pulls_massive_nodes_down() {
        let mut grid = Grid::new(1);
        grid.mass[0] = 2.0;
        integrate_impulse(&mut grid, 0.1, true);
        assert!((grid.impulse[0][2] + 0.1 * 2.0 * GRAVITY).abs() < 1e-12);
        assert_eq!(grid.impulse[0][0], 0.0);
    }

    #[test]
    fn nodal_velocity_reproduces_uniform_particle_velocity() {
        let mesh = UniformMesh::new([2, 2, 2], 0.5);
        let velocity = Vector::new(0.3, -0.2, 0.1);
        let mut particles = vec![
            Particle::at_candidate(Vector::new(0.4, 0.4, 0.4), 1.0)
                .with_mass(1.5)
                .with_velocity(velocity),
            Particle::at_candidate(Vector::new(0.6, 0.5, 0.4), 1.0)
                .with_mass(0.5)
                .with_velocity(velocity),
        ];
        let mut grid = Grid::new(mesh.total_num_nodes());

        locate_particles(&mesh, &mut particles);
        scatter_mass(&particles, &mut grid);
        compute_nodal_velocities(&particles, &mut grid);

        for node in 0..grid.num_nodes() {
            if grid.mass[node] > 0.0 {
                assert!((grid.velocity[node] - velocity).norm() < 1e-12);
            } else {
                assert_eq!(grid.velocity[node], zero_vector());
            }
        }
    }
}
