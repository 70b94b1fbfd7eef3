//! Integration tests for pulse-level time evolution.

use std::f64::consts::TAU;

use proptest::prelude::*;
use shed_control::pulse::{evolve_xy_driven_qubit, simulate_pi_pulse};
use shed_control::solver::SchrodingerSolver;
use shed_control::{DriveTerm, qubit_hamiltonian};
use shed_quant::{Ket, Operator};

fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

// ---------------------------------------------------------------------------
// XY-driven qubit
// ---------------------------------------------------------------------------

#[test]
fn lab_frame_resonant_drive_inverts_qubit() {
    // Drive on resonance in the lab frame. The counter-rotating term only
    // perturbs at O((Ω/f)²), so a π pulse still gets essentially all the
    // population across.
    let qubit_freq = 1.0;
    let rabi = 0.05;
    let times = linspace(0.0, 12.0, 241);
    let result = evolve_xy_driven_qubit(&times, qubit_freq, rabi, qubit_freq, 0.0).unwrap();
    let max_p1 = result
        .population(1)
        .unwrap()
        .into_iter()
        .fold(0.0_f64, f64::max);
    assert!(max_p1 > 0.9, "resonant drive peaked at p1 = {max_p1}");
}

#[test]
fn first_sampled_state_is_the_initial_state() {
    let times = linspace(0.0, 1.0, 11);
    let result = evolve_xy_driven_qubit(&times, 0.3, 0.1, 0.3, 0.0).unwrap();
    let first = &result.states()[0];
    assert!((first.population(0).unwrap() - 1.0).abs() < 1e-12);
    assert_eq!(result.times().len(), result.states().len());
}

#[test]
fn quarter_cycle_phase_gates_the_rotating_frame_drive_off() {
    // With zero drive frequency the coefficient is the constant cos(2π·φ),
    // so a quarter-cycle phase nulls the drive entirely.
    let times = linspace(0.0, 1.0, 21);
    let in_phase = evolve_xy_driven_qubit(&times, 0.0, 0.1, 0.0, 0.0).unwrap();
    let quadrature = evolve_xy_driven_qubit(&times, 0.0, 0.1, 0.0, 0.25).unwrap();
    let p_in = in_phase.population(1).unwrap();
    let p_quad = quadrature.population(1).unwrap();
    assert!(p_in[10] > 0.05, "in-phase drive should transfer population");
    assert!(p_quad[10] < 1e-6, "nulled drive should not transfer population");
}

// ---------------------------------------------------------------------------
// Transmon π pulse
// ---------------------------------------------------------------------------

#[test]
fn slower_pulses_leak_less() {
    let anharm = -0.3;
    let leak_at = |rabi: f64| {
        let t_pi = 1.0 / (2.0 * rabi);
        let times = linspace(0.0, t_pi, 101);
        let result = simulate_pi_pulse(anharm, rabi, &times, 0.0).unwrap();
        result
            .states()
            .iter()
            .map(|s| 1.0 - s.population(0).unwrap() - s.population(1).unwrap())
            .fold(0.0_f64, f64::max)
    };
    let fast = leak_at(0.15);
    let slow = leak_at(0.03);
    assert!(
        slow < fast,
        "slow pulse leaked {slow}, fast pulse leaked {fast}"
    );
}

#[test]
fn pi_pulse_phase_does_not_change_populations() {
    // The drive phase rotates the axis in the xy plane; populations after a
    // full π pulse are phase-independent.
    let rabi = 0.05;
    let times = linspace(0.0, 1.0 / (2.0 * rabi), 101);
    let a = simulate_pi_pulse(-0.3, rabi, &times, 0.0).unwrap();
    let b = simulate_pi_pulse(-0.3, rabi, &times, std::f64::consts::FRAC_PI_2).unwrap();
    let pa = a.final_state().population(1).unwrap();
    let pb = b.final_state().population(1).unwrap();
    assert!((pa - pb).abs() < 1e-3, "p1 differed: {pa} vs {pb}");
}

// ---------------------------------------------------------------------------
// Solver properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_sampled_states_stay_normalized(
        rabi in 0.01f64..0.3,
        qubit_freq in 0.0f64..2.0,
    ) {
        let times = linspace(0.0, 3.0, 31);
        let result = evolve_xy_driven_qubit(&times, qubit_freq, rabi, qubit_freq, 0.0).unwrap();
        for state in result.states() {
            prop_assert!((state.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_population_is_conserved_overall(
        rabi in 0.01f64..0.2,
    ) {
        let times = linspace(0.0, 1.0 / (2.0 * rabi), 51);
        let result = simulate_pi_pulse(-0.3, rabi, &times, 0.0).unwrap();
        for state in result.states() {
            let total: f64 = (0..state.dim())
                .map(|n| state.population(n).unwrap())
                .sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
        }
    }
}

#[test]
fn raising_substeps_converges_on_the_same_answer() {
    let h = DriveTerm::constant(TAU * qubit_hamiltonian(0.7));
    let drive = DriveTerm::cosine(TAU * 0.1 * Operator::sigma_y(), TAU * 0.7, 0.0);
    let times = linspace(0.0, 4.0, 41);
    let initial = Ket::basis(2, 0).unwrap();

    let coarse = SchrodingerSolver::new(vec![h.clone(), drive.clone()])
        .with_substeps(64)
        .evolve(&initial, &times)
        .unwrap();
    let fine = SchrodingerSolver::new(vec![h, drive])
        .with_substeps(256)
        .evolve(&initial, &times)
        .unwrap();

    let pc = coarse.final_state().population(1).unwrap();
    let pf = fine.final_state().population(1).unwrap();
    assert!((pc - pf).abs() < 1e-7, "coarse {pc} vs fine {pf}");
}
