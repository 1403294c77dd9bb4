//! Boundary conditions on the mesh faces
//!
//! One condition per face, ordered -x, +x, -y, +y, -z, +z. The same
//! interface corrects momentum-like and impulse-like nodal fields; the
//! nodal velocity field is corrected through the momentum callback.

use crate::math::{Real, Vector};
use crate::mesh::{NUM_FACES, UniformMesh};

pub trait BoundaryCondition {
    /// Correct a momentum-like nodal vector field on `face`.
    fn evaluate_momentum_condition(
        &self,
        mesh: &UniformMesh,
        face: usize,
        node_mass: &[Real],
        field: &mut [Vector],
    );

    /// Correct the nodal impulse on `face`.
    fn evaluate_impulse_condition(
        &self,
        mesh: &UniformMesh,
        face: usize,
        node_mass: &[Real],
        impulse: &mut [Vector],
    );

    /// The nodal velocity field is corrected exactly like momentum.
    fn evaluate_velocity_condition(
        &self,
        mesh: &UniformMesh,
        face: usize,
        node_mass: &[Real],
        velocity: &mut [Vector],
    ) {
        self.evaluate_momentum_condition(mesh, face, node_mass, velocity);
    }
}

pub type BoundarySet = [Box<dyn BoundaryCondition>; NUM_FACES];

/// Open face: leaves every nodal field untouched.
pub struct FreeSurface;

impl BoundaryCondition for FreeSurface {
    fn evaluate_momentum_condition(
        &self,
        _mesh: &UniformMesh,
        _face: usize,
        _node_mass: &[Real],
        _field: &mut [Vector],
    ) {
    }

    fn evaluate_impulse_condition(
        &self,
        _mesh: &UniformMesh,
        _face: usize,
        _node_mass: &[Real],
        _impulse: &mut [Vector],
    ) {
    }
}

/// Frictionless wall: zeroes the face-normal component, material slides
/// along the face.
pub struct SlipWall;

impl SlipWall {
    fn zero_normal(mesh: &UniformMesh, face: usize, field: &mut [Vector]) {
        let axis = face / 2;
        for node in mesh.face_nodes(face) {
            field[node][axis] = 0.0;
        }
    }
}

impl BoundaryCondition for SlipWall {
    fn evaluate_momentum_condition(
        &self,
        mesh: &UniformMesh,
        face: usize,
        _node_mass: &[Real],
        field: &mut [Vector],
    ) {
        Self::zero_normal(mesh, face, field);
    }

    fn evaluate_impulse_condition(
        &self,
        mesh: &UniformMesh,
        face: usize,
        _node_mass: &[Real],
        impulse: &mut [Vector],
    ) {
        Self::zero_normal(mesh, face, impulse);
    }
}

/// Sticky wall: zeroes the full nodal vector on the face.
pub struct NoSlipWall;

impl NoSlipWall {
    fn zero_all(mesh: &UniformMesh, face: usize, field: &mut [Vector]) {
        for node in mesh.face_nodes(face) {
            field[node] = Vector::zeros();
        }
    }
}

impl BoundaryCondition for NoSlipWall {
    fn evaluate_momentum_condition(
        &self,
        mesh: &UniformMesh,
        face: usize,
        _node_mass: &[Real],
        field: &mut [Vector],
    ) {
        Self::zero_all(mesh, face, field);
    }

    fn evaluate_impulse_condition(
        &self,
        mesh: &UniformMesh,
        face: usize,
        _node_mass: &[Real],
        impulse: &mut [Vector],
    ) {
        Self::zero_all(mesh, face, impulse);
    }
}

/// Six open faces.
pub fn free_walls() -> BoundarySet {
    std::array::from_fn(|_| Box::new(FreeSurface) as Box<dyn BoundaryCondition>)
}

/// Six frictionless walls.
pub fn slip_walls() -> BoundarySet {
    std::array::from_fn(|_| Box::new(SlipWall) as Box<dyn BoundaryCondition>)
}

/// Six sticky walls.
pub fn no_slip_walls() -> BoundarySet {
    std::array::from_fn(|_| Box::new(NoSlipWall) as Box<dyn BoundaryCondition>)
}
