//! End-to-end driver scenarios with closed-form expectations.

mod common;

use common::{free_boundaries, particle_at, scratch_prefix, stress_free_materials};
use mpm3d::math::{Matrix, Real, Vector};
use mpm3d::solver::p2g;
use mpm3d::{Brick, Geometry, Grid, MpmSolver, UniformMesh};

#[test]
fn single_particle_free_fall() {
    let mesh = UniformMesh::new([1, 1, 1], 1.0);
    let materials = stress_free_materials();
    let boundary_conditions = free_boundaries();
    let mut solver = MpmSolver::new(&mesh, &materials, &boundary_conditions, true);

    solver
        .particles_mut()
        .push(particle_at([0.5, 0.5, 0.9]).with_mass(1.0));

    let dt = 0.01;
    let steps = 10;
    let prefix = scratch_prefix("free_fall");
    solver.solve(steps, dt, &prefix, steps).unwrap();

    let particle = solver.particles().get(0).unwrap();

    // v_z(k) = -k g dt; after 10 steps -0.981.
    assert!((particle.velocity[2] + 0.981).abs() < 1e-6);
    assert!(particle.velocity[0].abs() < 1e-12);
    assert!(particle.velocity[1].abs() < 1e-12);

    // r_z drops by sum_k dt v_z(k) = -0.053955.
    assert!((particle.position[2] - (0.9 - 0.053955)).abs() < 1e-6);
    assert!((particle.position[0] - 0.5).abs() < 1e-12);
}

#[test]
fn symmetric_pair_conserves_momentum() {
    let mesh = UniformMesh::new([1, 1, 1], 1.0);
    let materials = stress_free_materials();
    let boundary_conditions = free_boundaries();

    let left = particle_at([0.4, 0.5, 0.5])
        .with_mass(1.0)
        .with_velocity(Vector::new(0.5, 0.0, 0.0));
    let right = particle_at([0.6, 0.5, 0.5])
        .with_mass(1.0)
        .with_velocity(Vector::new(-0.5, 0.0, 0.0));

    // Mid-step check: nodal momentum sums to zero on every axis.
    let mut particles = vec![left.clone(), right.clone()];
    let mut grid = Grid::new(mesh.total_num_nodes());
    p2g::locate_particles(&mesh, &mut particles);
    p2g::scatter_mass(&particles, &mut grid);
    p2g::scatter_momentum(&particles, &mut grid);
    assert!(grid.total_momentum().norm() < 1e-14);

    // Full step: motion stays mirror-symmetric about x = 0.5.
    let mut solver = MpmSolver::new(&mesh, &materials, &boundary_conditions, false);
    solver.particles_mut().push(left);
    solver.particles_mut().push(right);
    let prefix = scratch_prefix("symmetric_pair");
    solver.solve(1, 0.01, &prefix, 1).unwrap();

    let a = solver.particles().get(0).unwrap();
    let b = solver.particles().get(1).unwrap();
    assert!((a.position[0] + b.position[0] - 1.0).abs() < 1e-14);
    assert!((a.velocity[0] + b.velocity[0]).abs() < 1e-14);
    assert_eq!(a.position[1], 0.5);
    assert_eq!(b.position[2], 0.5);
}

#[test]
fn rigid_translation_leaves_deformation_untouched() {
    let mesh = UniformMesh::new([4, 4, 4], 0.25);
    let materials = stress_free_materials();
    let boundary_conditions = free_boundaries();
    let mut solver = MpmSolver::new(&mesh, &materials, &boundary_conditions, false);

    let translation_velocity = Vector::new(1.0, 0.0, 0.0);
    let geometries: Vec<Box<dyn Geometry>> = vec![Box::new(Brick {
        min_corner: Vector::new(0.3, 0.3, 0.3),
        max_corner: Vector::new(0.6, 0.7, 0.7),
        density: 1000.0,
        velocity: translation_velocity,
        material: 0,
    })];
    let count = solver.initialize(&geometries, 2).unwrap();
    assert!(count > 0);

    let positions_before: Vec<Vector> =
        solver.particles().iter().map(|p| p.position).collect();

    let dt = 0.01;
    let steps = 5;
    let prefix = scratch_prefix("rigid_translation");
    solver.solve(steps, dt, &prefix, steps).unwrap();

    let shift = steps as Real * dt;
    for (particle, before) in solver.particles().iter().zip(&positions_before) {
        let expected = before + Vector::new(shift, 0.0, 0.0);
        assert!((particle.position - expected).norm() < 1e-12);
        assert!((particle.velocity - translation_velocity).norm() < 1e-12);
        assert!((particle.deformation_gradient - Matrix::identity()).norm() < 1e-12);
        assert!((particle.jacobian() - 1.0).abs() < 1e-12);
    }
}
