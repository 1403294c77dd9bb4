// Physical constants for MPM simulation
use crate::math::Real;

// Default gravitational acceleration, applied along -z when enabled.
pub const GRAVITY: Real = 9.81;
