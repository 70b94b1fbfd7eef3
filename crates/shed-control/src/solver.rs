//! Fixed-step Schrödinger integration.
//!
//! Integrates `i dψ/dt = H(t) ψ` (units ħ = 1) with classic fourth-order
//! Runge-Kutta, where `H(t) = Σ_k f_k(t) · A_k` is a list of
//! [`DriveTerm`]s. The wavefunction is sampled at the caller's time grid,
//! with a configurable number of integration substeps between consecutive
//! sample points.

use ndarray::Array1;
use num_complex::Complex64;
use tracing::debug;

use shed_quant::{Ket, Operator};

use crate::drive::DriveTerm;
use crate::error::{ControlError, ControlResult};

/// Default number of RK4 substeps between consecutive sample points.
pub const DEFAULT_SUBSTEPS: usize = 32;

/// Sampled wavefunctions from a time evolution.
///
/// `states[i]` is the (renormalized) wavefunction at `times[i]`; the first
/// entry is the initial state itself.
#[derive(Debug, Clone)]
pub struct EvolveResult {
    times: Vec<f64>,
    states: Vec<Ket>,
}

impl EvolveResult {
    /// The sample times.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The sampled wavefunctions, one per sample time.
    pub fn states(&self) -> &[Ket] {
        &self.states
    }

    /// The wavefunction at the last sample time.
    pub fn final_state(&self) -> &Ket {
        // `evolve` guarantees at least one sample.
        &self.states[self.states.len() - 1]
    }

    /// Population of basis `level` at every sample time.
    pub fn population(&self, level: usize) -> ControlResult<Vec<f64>> {
        self.states
            .iter()
            .map(|s| s.population(level).map_err(ControlError::from))
            .collect()
    }

    /// Expectation value of `op` at every sample time.
    pub fn expect(&self, op: &Operator) -> ControlResult<Vec<Complex64>> {
        self.states
            .iter()
            .map(|s| op.expect(s).map_err(ControlError::from))
            .collect()
    }
}

/// Fixed-step RK4 Schrödinger solver.
pub struct SchrodingerSolver {
    terms: Vec<DriveTerm>,
    substeps: usize,
}

impl SchrodingerSolver {
    /// Build a solver for `H(t) = Σ_k f_k(t) · A_k`.
    pub fn new(terms: Vec<DriveTerm>) -> Self {
        Self {
            terms,
            substeps: DEFAULT_SUBSTEPS,
        }
    }

    /// Override the number of RK4 substeps per sample interval.
    ///
    /// The default is [`DEFAULT_SUBSTEPS`]; raise it when the Hamiltonian
    /// norm is large relative to the sample spacing.
    #[must_use]
    pub fn with_substeps(mut self, n: usize) -> Self {
        self.substeps = n;
        self
    }

    /// Evolve `initial` across `time_points`, sampling at each point.
    ///
    /// Integration starts at `time_points[0]`; the returned result has one
    /// state per sample time, the first being `initial` itself. Each sampled
    /// state is renormalized to shave off integrator norm drift.
    pub fn evolve(&self, initial: &Ket, time_points: &[f64]) -> ControlResult<EvolveResult> {
        self.validate(initial, time_points)?;

        debug!(
            n_terms = self.terms.len(),
            n_samples = time_points.len(),
            substeps = self.substeps,
            dim = initial.dim(),
            "integrating Schrödinger evolution"
        );

        let mut psi: Array1<Complex64> = initial.amplitudes().to_owned();
        let mut states = Vec::with_capacity(time_points.len());
        states.push(renormalized_ket(&psi)?);

        for w in time_points.windows(2) {
            let (t0, t1) = (w[0], w[1]);
            let dt = (t1 - t0) / self.substeps as f64;
            for s in 0..self.substeps {
                let t = t0 + s as f64 * dt;
                psi = self.rk4_step(t, dt, &psi);
            }
            states.push(renormalized_ket(&psi)?);
        }

        Ok(EvolveResult {
            times: time_points.to_vec(),
            states,
        })
    }

    /// `dψ/dt = −i H(t) ψ`.
    fn deriv(&self, t: f64, psi: &Array1<Complex64>) -> Array1<Complex64> {
        let mut h_psi: Array1<Complex64> = Array1::zeros(psi.len());
        for term in &self.terms {
            let f = term.coeff.eval(t);
            if f != 0.0 {
                h_psi = h_psi + term.operator.matrix().dot(psi) * Complex64::new(f, 0.0);
            }
        }
        h_psi * Complex64::new(0.0, -1.0)
    }

    fn rk4_step(&self, t: f64, dt: f64, psi: &Array1<Complex64>) -> Array1<Complex64> {
        let half = Complex64::new(dt / 2.0, 0.0);
        let full = Complex64::new(dt, 0.0);

        let k1 = self.deriv(t, psi);
        let k2 = self.deriv(t + dt / 2.0, &(psi + &(&k1 * half)));
        let k3 = self.deriv(t + dt / 2.0, &(psi + &(&k2 * half)));
        let k4 = self.deriv(t + dt, &(psi + &(&k3 * full)));

        let sixth = Complex64::new(dt / 6.0, 0.0);
        let two = Complex64::new(2.0, 0.0);
        psi + &((k1 + &k2 * two + &k3 * two + k4) * sixth)
    }

    fn validate(&self, initial: &Ket, time_points: &[f64]) -> ControlResult<()> {
        if self.terms.is_empty() {
            return Err(ControlError::NoTerms);
        }
        if self.substeps == 0 {
            return Err(ControlError::InvalidSubsteps(0));
        }
        if time_points.is_empty() {
            return Err(ControlError::EmptyTimeGrid);
        }
        for (i, w) in time_points.windows(2).enumerate() {
            if w[1] <= w[0] {
                return Err(ControlError::NonMonotonicTimeGrid {
                    index: i + 1,
                    prev: w[0],
                    next: w[1],
                });
            }
        }
        for (i, term) in self.terms.iter().enumerate() {
            if term.operator.dim() != initial.dim() {
                return Err(ControlError::TermDimensionMismatch {
                    term: i,
                    term_dim: term.operator.dim(),
                    state_dim: initial.dim(),
                });
            }
        }
        Ok(())
    }
}

fn renormalized_ket(psi: &Array1<Complex64>) -> ControlResult<Ket> {
    let ket = Ket::from_amplitudes(psi.to_vec())?;
    Ok(ket.normalized()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn free_precession_leaves_populations_alone() {
        // H = 2π·σz/2 is diagonal, so populations never change.
        let h = DriveTerm::constant(PI * Operator::sigma_z());
        let solver = SchrodingerSolver::new(vec![h]);
        let plus = Ket::from_amplitudes(vec![
            Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
            Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0),
        ])
        .unwrap();
        let times: Vec<f64> = (0..=20).map(|i| i as f64 * 0.1).collect();
        let result = solver.evolve(&plus, &times).unwrap();
        for p in result.population(0).unwrap() {
            assert!((p - 0.5).abs() < 1e-8);
        }
    }

    #[test]
    fn rejects_non_monotonic_grid() {
        let solver = SchrodingerSolver::new(vec![DriveTerm::constant(Operator::sigma_x())]);
        let k = Ket::basis(2, 0).unwrap();
        let err = solver.evolve(&k, &[0.0, 0.5, 0.5]).unwrap_err();
        assert!(matches!(
            err,
            ControlError::NonMonotonicTimeGrid { index: 2, .. }
        ));
    }

    #[test]
    fn rejects_empty_grid_and_terms() {
        let k = Ket::basis(2, 0).unwrap();
        let empty = SchrodingerSolver::new(vec![]);
        assert!(matches!(
            empty.evolve(&k, &[0.0]),
            Err(ControlError::NoTerms)
        ));
        let solver = SchrodingerSolver::new(vec![DriveTerm::constant(Operator::sigma_x())]);
        assert!(matches!(
            solver.evolve(&k, &[]),
            Err(ControlError::EmptyTimeGrid)
        ));
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let term = DriveTerm::constant(Operator::identity(3).unwrap());
        let solver = SchrodingerSolver::new(vec![term]);
        let k = Ket::basis(2, 0).unwrap();
        assert!(matches!(
            solver.evolve(&k, &[0.0, 1.0]),
            Err(ControlError::TermDimensionMismatch {
                term: 0,
                term_dim: 3,
                state_dim: 2,
            })
        ));
    }

    #[test]
    fn cosine_term_with_zero_frequency_is_constant_drive() {
        // cos(0·t) ≡ 1: a σx drive of angular strength π/2 is a π pulse at t = 1.
        let term = DriveTerm::cosine(0.5 * PI * Operator::sigma_x(), 0.0, 0.0);
        let solver = SchrodingerSolver::new(vec![term]);
        let result = solver
            .evolve(&Ket::basis(2, 0).unwrap(), &[0.0, 0.5, 1.0])
            .unwrap();
        let p1 = result.final_state().population(1).unwrap();
        assert!((p1 - 1.0).abs() < 1e-6, "expected full transfer, got {p1}");
    }
}
