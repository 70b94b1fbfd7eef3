//! Pulse-level control experiments.
//!
//! These helpers wire the Hamiltonian builders, drive terms, and solver
//! together into the two experiments the shed utilities are built to
//! explain: Rabi flopping of an XY-driven qubit, and a π pulse on a
//! resonantly driven transmon.
//!
//! Frequencies are linear; the 2π conversion to angular units happens here.

use std::f64::consts::TAU;

use num_complex::Complex64;
use tracing::debug;

use shed_quant::{Ket, Operator};

use crate::drive::DriveTerm;
use crate::error::ControlResult;
use crate::hamiltonians::{qubit_hamiltonian, transmon_hamiltonian};
use crate::solver::{EvolveResult, SchrodingerSolver};

/// Transmon truncation used by [`simulate_pi_pulse`]. Ten levels is enough
/// that the truncation edge never matters for a resonant qubit-subspace
/// drive.
const PI_PULSE_LEVELS: usize = 10;

/// Time-evolve a qubit under an XY drive.
///
/// The qubit starts in |0⟩ and evolves under
///
///   H(t) = 2π·H₀  +  2π·rabi_freq·σy · cos(2π·drive_freq·t + 2π·drive_phase)
///
/// with `H₀ = qubit_hamiltonian(qubit_freq)`. Set `qubit_freq` to zero to
/// work in the rotating frame.
///
/// * `time_points` — times at which to capture the wavefunction
/// * `qubit_freq` — qubit frequency
/// * `rabi_freq` — frequency of Rabi oscillations
/// * `drive_freq` — frequency of the qubit drive
/// * `drive_phase` — phase of the drive, relative to the qubit phase which
///   is zero (in cycles, like the frequencies)
pub fn evolve_xy_driven_qubit(
    time_points: &[f64],
    qubit_freq: f64,
    rabi_freq: f64,
    drive_freq: f64,
    drive_phase: f64,
) -> ControlResult<EvolveResult> {
    debug!(
        qubit_freq,
        rabi_freq, drive_freq, drive_phase, "evolving XY-driven qubit"
    );

    let h0 = qubit_hamiltonian(qubit_freq);
    let h1 = rabi_freq * Operator::sigma_y();

    let solver = SchrodingerSolver::new(vec![
        DriveTerm::constant(TAU * h0),
        DriveTerm::cosine(TAU * h1, TAU * drive_freq, TAU * drive_phase),
    ]);

    solver.evolve(&Ket::basis(2, 0)?, time_points)
}

/// Simulate a π pulse on a transmon driven on resonance.
///
/// Assuming a resonant drive (rotating frame) keeps the Hamiltonian
/// time-independent:
///
///   H = H₀(0, anharm)  +  0.5·rabi_freq·(cosφ·(a + a†) − i·sinφ·(a − a†))
///
/// evolved as `2π·H` from |0⟩ on a ten-level transmon. The finite
/// anharmonicity leaks a little population out of the qubit subspace, which
/// is the point of the exercise.
///
/// * `anharm` — anharmonicity of the transmon, in linear frequency; should
///   be negative
/// * `rabi_freq` — frequency of Rabi oscillations, proportional to drive
///   strength and in the same units as `anharm`
/// * `time_points` — times at which to capture the wavefunction
/// * `drive_phase` — phase of the drive tone, in radians
pub fn simulate_pi_pulse(
    anharm: f64,
    rabi_freq: f64,
    time_points: &[f64],
    drive_phase: f64,
) -> ControlResult<EvolveResult> {
    debug!(anharm, rabi_freq, drive_phase, "simulating transmon π pulse");

    let dim = PI_PULSE_LEVELS;
    let a = Operator::destroy(dim)?;
    let at = a.dag();

    let h0 = transmon_hamiltonian(0.0, anharm, dim)?;
    let sum = a.add_op(&at)?;
    let diff = a.sub_op(&at)?;
    let h1 = (0.5 * rabi_freq)
        * (Complex64::new(drive_phase.cos(), 0.0) * &sum)
            .sub_op(&(Complex64::new(0.0, drive_phase.sin()) * &diff))?;
    let h = h0.add_op(&h1)?;

    let solver = SchrodingerSolver::new(vec![DriveTerm::constant(TAU * h)]);
    solver.evolve(&Ket::basis(dim, 0)?, time_points)
}
