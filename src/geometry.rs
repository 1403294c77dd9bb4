//! Initialization geometries
//!
//! A geometry answers point membership for seeded candidates and stamps the
//! initial state (velocity, density, material) of the particles it claims.
//! Candidates are offered to geometries in list order; the first match wins.

use crate::core::Particle;
use crate::math::{Real, Vector};

pub trait Geometry {
    /// Does this geometry contain the given position?
    fn contains(&self, position: &Vector) -> bool;

    /// Stamp the initial particle state. The particle arrives with its
    /// candidate position and volume set and `F = I`; mass is derived from
    /// the geometry's density and the candidate volume.
    fn initialize_particle(&self, particle: &mut Particle);
}

/// Solid sphere.
pub struct Sphere {
    pub center: Vector,
    pub radius: Real,
    pub density: Real,
    pub velocity: Vector,
    pub material: usize,
}

impl Geometry for Sphere {
    fn contains(&self, position: &Vector) -> bool {
        (position - self.center).norm_squared() <= self.radius * self.radius
    }

    fn initialize_particle(&self, particle: &mut Particle) {
        particle.mass = self.density * particle.volume;
        particle.velocity = self.velocity;
        particle.material = self.material;
    }
}

/// Axis-aligned box.
pub struct Brick {
    pub min_corner: Vector,
    pub max_corner: Vector,
    pub density: Real,
    pub velocity: Vector,
    pub material: usize,
}

impl Geometry for Brick {
    fn contains(&self, position: &Vector) -> bool {
        (0..3).all(|axis| {
            position[axis] >= self.min_corner[axis] && position[axis] <= self.max_corner[axis]
        })
    }

    fn initialize_particle(&self, particle: &mut Particle) {
        particle.mass = self.density * particle.volume;
        particle.velocity = self.velocity;
        particle.material = self.material;
    }
}
