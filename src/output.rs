//! Snapshot output
//!
//! Writes one CSV file per snapshot, named `<prefix>.csv.<index>` with a
//! monotonically increasing index. Files are opened, written and closed
//! within a single call; IO failures propagate and abort the run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::Particle;
use crate::error::Result;

pub struct SnapshotWriter {
    prefix: PathBuf,
    index: usize,
}

impl SnapshotWriter {
    pub fn new(prefix: &Path) -> Self {
        Self {
            prefix: prefix.to_path_buf(),
            index: 0,
        }
    }

    pub fn snapshots_written(&self) -> usize {
        self.index
    }

    /// Write particle positions and velocity magnitudes in storage order.
    pub fn write(&mut self, particles: &[Particle]) -> Result<()> {
        let path = PathBuf::from(format!("{}.csv.{}", self.prefix.display(), self.index));
        let mut writer = BufWriter::new(File::create(&path)?);

        writeln!(writer, "x, y, z, velocity magnitude")?;
        for particle in particles {
            writeln!(
                writer,
                "{}, {}, {}, {}",
                particle.position[0],
                particle.position[1],
                particle.position[2],
                particle.velocity_magnitude()
            )?;
        }
        writer.flush()?;

        debug!(path = %path.display(), particles = particles.len(), "wrote snapshot");
        self.index += 1;
        Ok(())
    }
}
