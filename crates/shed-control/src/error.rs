//! Error types for the control crate.

use thiserror::Error;

/// Errors produced by Hamiltonian assembly and time evolution.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ControlError {
    /// The solver was given no Hamiltonian terms.
    #[error("no Hamiltonian terms — nothing to evolve under")]
    NoTerms,

    /// The sample-time grid is empty.
    #[error("time grid is empty")]
    EmptyTimeGrid,

    /// The sample-time grid must be strictly increasing.
    #[error("time grid is not strictly increasing at index {index}: {prev} ≥ {next}")]
    NonMonotonicTimeGrid {
        /// Index of the offending sample point.
        index: usize,
        /// Time at `index − 1`.
        prev: f64,
        /// Time at `index`.
        next: f64,
    },

    /// Integration substeps per sample interval must be ≥ 1.
    #[error("substeps must be at least 1, got {0}")]
    InvalidSubsteps(usize),

    /// A Hamiltonian term's dimension does not match the initial state.
    #[error("Hamiltonian term {term} has dimension {term_dim} but state has dimension {state_dim}")]
    TermDimensionMismatch {
        /// Index of the offending term.
        term: usize,
        /// Dimension of that term's operator.
        term_dim: usize,
        /// Dimension of the initial state.
        state_dim: usize,
    },

    /// Underlying operator/state error.
    #[error("quant error: {0}")]
    Quant(#[from] shed_quant::QuantError),
}

/// Result type for control operations.
pub type ControlResult<T> = Result<T, ControlError>;
