//! Error types for the bloch crate.

use thiserror::Error;

/// Errors produced by Bloch-sphere geometry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BlochError {
    /// Bloch coordinates need at least the first two amplitudes.
    #[error("state has dimension {dim}, need at least 2 for Bloch coordinates")]
    StateTooSmall {
        /// Dimension of the offending state.
        dim: usize,
    },

    /// Underlying operator/state error.
    #[error("quant error: {0}")]
    Quant(#[from] shed_quant::QuantError),

    /// Figure serialization failed.
    #[error("figure serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Bloch-sphere operations.
pub type BlochResult<T> = Result<T, BlochError>;
