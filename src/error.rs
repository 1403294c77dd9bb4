//! Error types for the library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("material index {index} out of range ({count} materials registered)")]
    InvalidMaterial { index: usize, count: usize },

    #[error("unsupported quadrature order {0} (supported: 1..=3)")]
    UnsupportedOrder(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for Results with [`SolverError`]
pub type Result<T> = std::result::Result<T, SolverError>;
