//! `shed-control` — Hamiltonians, drives, and Schrödinger time evolution.
//!
//! Builds the Hamiltonians of the systems worth having intuition for (a
//! bare qubit, a Duffing-oscillator transmon), attaches time-dependent
//! drive terms to them, and integrates the Schrödinger equation to watch
//! what pulses actually do to the state:
//!
//! - [`hamiltonians`] — `qubit_hamiltonian`, `transmon_hamiltonian`
//! - [`drive`] — static operators with `Constant`/`Cosine` coefficients
//! - [`solver`] — fixed-step RK4 integration sampled on a time grid
//! - [`pulse`] — the assembled experiments: XY-driven qubit Rabi flopping
//!   and a resonant transmon π pulse
//!
//! # Quick start
//!
//! ```rust
//! use shed_control::pulse::evolve_xy_driven_qubit;
//!
//! // Rotating-frame Rabi flopping: a π pulse takes |0⟩ to |1⟩.
//! let times: Vec<f64> = (0..=50).map(|i| i as f64 * 0.05).collect();
//! let result = evolve_xy_driven_qubit(&times, 0.0, 0.1, 0.0, 0.0).unwrap();
//! let p1 = result.final_state().population(1).unwrap();
//! assert!(p1 > 0.99);
//! ```

pub mod drive;
pub mod error;
pub mod hamiltonians;
pub mod pulse;
pub mod solver;

pub use drive::{DriveTerm, TimeDependence};
pub use error::{ControlError, ControlResult};
pub use hamiltonians::{qubit_hamiltonian, transmon_hamiltonian, transmon_hamiltonian_default};
pub use pulse::{evolve_xy_driven_qubit, simulate_pi_pulse};
pub use solver::{EvolveResult, SchrodingerSolver};
