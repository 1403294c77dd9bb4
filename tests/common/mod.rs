//! Shared builders for the integration suites.

use std::path::PathBuf;

use mpm3d::math::{Real, Vector};
use mpm3d::{BoundarySet, LinearElastic, Particle, StressModel, UniformMesh, boundary};

pub const TOL: Real = 1e-10;

pub fn unit_mesh() -> UniformMesh {
    UniformMesh::new([1, 1, 1], 1.0)
}

pub fn free_boundaries() -> BoundarySet {
    boundary::free_walls()
}

/// A material table whose single entry never produces stress.
pub fn stress_free_materials() -> Vec<Box<dyn StressModel>> {
    vec![Box::new(LinearElastic::new(0.0, 0.0))]
}

pub fn particle_at(position: [Real; 3]) -> Particle {
    Particle::at_candidate(Vector::new(position[0], position[1], position[2]), 1.0)
}

/// Unique scratch directory for snapshot-producing tests.
pub fn scratch_prefix(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("mpm3d_integration").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir.join("particles")
}

/// Snapshot files present for a prefix, as (index, path) pairs.
pub fn snapshot_files(prefix: &PathBuf) -> Vec<(usize, PathBuf)> {
    let dir = prefix.parent().unwrap();
    let stem = format!("{}.csv.", prefix.file_name().unwrap().to_str().unwrap());
    let mut files: Vec<(usize, PathBuf)> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_name()?.to_str()?.to_owned();
            let index = name.strip_prefix(&stem)?.parse().ok()?;
            Some((index, path))
        })
        .collect();
    files.sort_by_key(|(index, _)| *index);
    files
}
