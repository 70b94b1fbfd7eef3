//! Error types for the quant crate.

use thiserror::Error;

/// Errors produced by operator and state manipulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuantError {
    /// Tried to build an operator from a non-square matrix.
    #[error("operator matrix must be square, got {rows}×{cols}")]
    NonSquareMatrix {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },

    /// Two objects with incompatible Hilbert-space dimensions were combined.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Dimension of the left-hand operand.
        left: usize,
        /// Dimension of the right-hand operand.
        right: usize,
    },

    /// A basis index is outside the Hilbert space.
    #[error("basis index {index} out of range for dimension {dim}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Hilbert-space dimension.
        dim: usize,
    },

    /// Hilbert-space dimension must be ≥ 1.
    #[error("dimension must be at least 1, got {0}")]
    InvalidDimension(usize),

    /// Tried to normalize (or sample from) the zero vector.
    #[error("state has zero norm")]
    ZeroNorm,
}

/// Result type for quant operations.
pub type QuantResult<T> = Result<T, QuantError>;
