//! Material particles for MPM simulation
//!
//! Particles carry position, velocity, mass and constitutive state, plus the
//! per-step transfer scratch (containing-cell node ids, shape function values
//! and gradients) cached by the locate stage.

use crate::math::{
    Matrix, Real, Vector, identity_matrix, matrix_determinant, zero_matrix, zero_vector,
};
use crate::mesh::NODES_PER_CELL;

#[derive(Clone)]
pub struct Particle {
    pub position: Vector,
    pub velocity: Vector,
    pub mass: Real,
    pub volume: Real,
    pub deformation_gradient: Matrix,
    pub velocity_gradient: Matrix,
    pub stress: Matrix,
    pub strain: Matrix,
    /// Index into the material-model table.
    pub material: usize,

    // Transfer scratch, overwritten by each step's locate stage.
    pub node_ids: [usize; NODES_PER_CELL],
    pub basis_values: [Real; NODES_PER_CELL],
    pub basis_gradients: [Vector; NODES_PER_CELL],
}

impl Particle {
    /// A particle at a candidate position, before any geometry stamps it.
    pub fn at_candidate(position: Vector, volume: Real) -> Self {
        Self {
            position,
            velocity: zero_vector(),
            mass: 1.0,
            volume,
            deformation_gradient: identity_matrix(),
            velocity_gradient: zero_matrix(),
            stress: zero_matrix(),
            strain: zero_matrix(),
            material: 0,
            node_ids: [0; NODES_PER_CELL],
            basis_values: [0.0; NODES_PER_CELL],
            basis_gradients: [zero_vector(); NODES_PER_CELL],
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_mass(mut self, mass: Real) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_material(mut self, material: usize) -> Self {
        self.material = material;
        self
    }

    /// det(F), the local volume ratio since initialization.
    #[inline(always)]
    pub fn jacobian(&self) -> Real {
        matrix_determinant(&self.deformation_gradient)
    }

    #[inline(always)]
    pub fn velocity_magnitude(&self) -> Real {
        self.velocity.norm()
    }
}
