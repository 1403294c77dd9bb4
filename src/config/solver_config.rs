use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SolverError};
use crate::math::Real;

/// Solver configuration recognized by the problem manager.
///
/// Mirrors the options of the driver surface: mesh extent, step control and
/// snapshot cadence. Loaded from a JSON file via [`read_json`].
#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    pub mesh_num_cells_x: usize,
    pub mesh_num_cells_y: usize,
    pub mesh_num_cells_z: usize,
    pub mesh_cell_width: Real,

    #[serde(default = "default_has_gravity")]
    pub has_gravity: bool,

    pub num_time_steps: usize,
    pub time_step_size: Real,

    pub output_file: String,
    #[serde(default = "default_write_frequency")]
    pub write_frequency: usize,
}

fn default_has_gravity() -> bool {
    true
}

fn default_write_frequency() -> usize {
    1
}

impl SolverConfig {
    /// Reject configurations the solver must not start from.
    pub fn validate(&self) -> Result<()> {
        if self.mesh_num_cells_x == 0 || self.mesh_num_cells_y == 0 || self.mesh_num_cells_z == 0 {
            return Err(SolverError::InvalidConfig(
                "mesh cell counts must be positive".into(),
            ));
        }
        if !(self.mesh_cell_width > 0.0) {
            return Err(SolverError::InvalidConfig(
                "mesh_cell_width must be positive".into(),
            ));
        }
        if !(self.time_step_size > 0.0) {
            return Err(SolverError::InvalidConfig(
                "time_step_size must be positive".into(),
            ));
        }
        if self.write_frequency == 0 {
            return Err(SolverError::InvalidConfig(
                "write_frequency must be positive".into(),
            ));
        }
        if self.output_file.is_empty() {
            return Err(SolverError::InvalidConfig("output_file is empty".into()));
        }
        Ok(())
    }
}

/// Read a JSON config file, skipping `//` comment lines.
pub fn read_json<T>(file: &Path) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let contents = fs::read_to_string(file)?;
    let stripped: String = contents
        .lines()
        .filter(|l| !l.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n");

    let data: T = serde_json::from_str(&stripped)?;
    Ok(data)
}
