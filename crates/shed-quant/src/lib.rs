//! `shed-quant` — dense operator/state substrate for the shed utilities.
//!
//! Provides the small amount of linear-algebra machinery the rest of the
//! workspace builds on:
//!
//! - [`Operator`] — dense square complex matrices, with constructors for the
//!   Pauli matrices and truncated ladder operators
//! - [`Ket`] — complex state vectors with basis-state constructors
//! - [`measure`] — computational-basis probabilities, sampling, and shot
//!   aggregation
//!
//! # Quick start
//!
//! ```rust
//! use shed_quant::{Ket, Operator};
//!
//! // Number operator expectation on the two-photon Fock state.
//! let n = Operator::number(5).unwrap();
//! let two = Ket::basis(5, 2).unwrap();
//! let e = n.expect(&two).unwrap();
//! assert!((e.re - 2.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod measure;
pub mod operator;
pub mod state;

pub use error::{QuantError, QuantResult};
pub use operator::Operator;
pub use state::Ket;
