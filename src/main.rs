//! Demo driver: two elastic spheres launched at each other inside a box
//! with frictionless walls. Reads the solver configuration from a JSON
//! file (first CLI argument, defaulting to `problem.json`).

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use mpm3d::math::Vector;
use mpm3d::{
    Geometry, MpmSolver, NeoHookean, SolverConfig, Sphere, StressModel, UniformMesh, boundary,
    read_json,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("problem.json"));

    let config: SolverConfig = read_json(&config_path)
        .with_context(|| format!("reading config {}", config_path.display()))?;
    config.validate()?;

    let mesh = UniformMesh::new(
        [
            config.mesh_num_cells_x,
            config.mesh_num_cells_y,
            config.mesh_num_cells_z,
        ],
        config.mesh_cell_width,
    );
    let extent = mesh.domain_extent();

    let materials: Vec<Box<dyn StressModel>> =
        vec![Box::new(NeoHookean::from_young_poisson(1e5, 0.3))];

    let radius = 0.15 * extent[0].min(extent[1]).min(extent[2]);
    let impact_speed = 0.1 * extent[0];
    let geometries: Vec<Box<dyn Geometry>> = vec![
        Box::new(Sphere {
            center: Vector::new(0.3 * extent[0], 0.5 * extent[1], 0.5 * extent[2]),
            radius,
            density: 1000.0,
            velocity: Vector::new(impact_speed, 0.0, 0.0),
            material: 0,
        }),
        Box::new(Sphere {
            center: Vector::new(0.7 * extent[0], 0.5 * extent[1], 0.5 * extent[2]),
            radius,
            density: 1000.0,
            velocity: Vector::new(-impact_speed, 0.0, 0.0),
            material: 0,
        }),
    ];

    let boundary_conditions = boundary::slip_walls();

    let output_file = PathBuf::from(&config.output_file);
    if let Some(parent) = output_file.parent() {
        if parent != Path::new("") {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output directory {}", parent.display()))?;
        }
    }

    let mut solver = MpmSolver::new(&mesh, &materials, &boundary_conditions, config.has_gravity);
    solver.initialize(&geometries, 2)?;
    solver.solve(
        config.num_time_steps,
        config.time_step_size,
        &output_file,
        config.write_frequency,
    )?;

    Ok(())
}
