//! Explicit 3-D Material Point Method solver
//!
//! Lagrangian particles carry mass, velocity, volume, deformation gradient
//! and stress; a fixed background mesh serves as per-step scratch space for
//! the momentum balance. Each step scatters particle quantities to the mesh
//! nodes, integrates the equations of motion there, and gathers the result
//! back into particle kinematics and constitutive state (FLIP transfer).

pub mod boundary;
pub mod config;
pub mod core;
pub mod error;
pub mod geometry;
pub mod materials;
pub mod math;
pub mod mesh;
pub mod output;
pub mod solver;

// Clean public API - everything you need to set up a simulation
pub use boundary::{BoundaryCondition, BoundarySet, FreeSurface, NoSlipWall, SlipWall};
pub use config::{GRAVITY, SolverConfig, read_json};
pub use crate::core::{Grid, Particle, ParticleSet};
pub use error::{Result, SolverError};
pub use geometry::{Brick, Geometry, Sphere};
pub use materials::{LinearElastic, MaterialTable, NeoHookean, StressModel};
pub use mesh::UniformMesh;
pub use output::SnapshotWriter;
pub use solver::MpmSolver;
