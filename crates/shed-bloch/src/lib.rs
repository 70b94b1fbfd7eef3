//! `shed-bloch` — Bloch-sphere geometry for quantum states.
//!
//! Maps any ket of dimension ≥ 2 onto the Bloch sphere — leakage outside
//! the qubit subspace shows up as a shortened radius — and builds
//! JSON-serializable figure geometry (sphere, equator, labeled poles,
//! state-vector markers) for a 3-D plotting frontend.
//!
//! # Quick start
//!
//! ```rust
//! use shed_bloch::{BlochFigure, bloch_vector};
//! use shed_quant::Ket;
//!
//! let mut fig = BlochFigure::new();
//! let v = bloch_vector(&Ket::basis(2, 0).unwrap()).unwrap();
//! fig.add_vector(&v);
//! assert_eq!(fig.num_vectors(), 1);
//! ```

pub mod coords;
pub mod error;
pub mod figure;

pub use coords::{BlochCoords, BlochVector, bloch_vector, spherical_coords};
pub use error::{BlochError, BlochResult};
pub use figure::{BlochFigure, Trace};
