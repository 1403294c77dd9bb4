//! Grid-to-Particle (G2P) transfer operations
//!
//! FLIP-style particle update: positions advance with the corrected nodal
//! momentum, velocities accumulate the nodal impulse increments, and the
//! deformation state integrates the gathered velocity gradient.

use crate::core::{Grid, Particle};
use crate::math::{self, Matrix, Real};

/// Update particle position and velocity from nodal momentum and impulse.
///
/// Runs on the pre-integration nodal momentum plus the freshly integrated
/// impulse, and must precede the nodal-velocity recomputation so the
/// velocity gradient reflects the momentum state at the start of the step.
/// Massless nodes contribute nothing.
pub fn update_particle_kinematics(particles: &mut [Particle], grid: &Grid, dt: Real) {
    for particle in particles.iter_mut() {
        for (k, &node) in particle.node_ids.iter().enumerate() {
            let node_mass = grid.mass[node];
            if node_mass > 0.0 {
                let weight = particle.basis_values[k] / node_mass;
                particle.position += (grid.momentum[node] + grid.impulse[node]) * (dt * weight);
                particle.velocity += grid.impulse[node] * weight;
            }
        }
    }
}

/// Gather the nodal velocity gradient and integrate deformation:
/// grad_v[i][j] = sum_k dN_k/dx[i] v_n[j], W = dt grad_v,
/// F <- F + W F, volume <- volume det(I + W).
pub fn update_deformation_state(particles: &mut [Particle], grid: &Grid, dt: Real) {
    for particle in particles.iter_mut() {
        let mut velocity_gradient = math::zero_matrix();
        for (k, &node) in particle.node_ids.iter().enumerate() {
            velocity_gradient +=
                math::outer_product(&particle.basis_gradients[k], &grid.velocity[node]);
        }
        particle.velocity_gradient = velocity_gradient;

        let incremental = velocity_gradient * dt;
        particle.deformation_gradient += incremental * particle.deformation_gradient;
        particle.volume *=
            math::matrix_determinant(&(Matrix::identity() + incremental));
    }
}
