//! Time-dependent Hamiltonian terms.
//!
//! A Hamiltonian handed to the solver is a list of [`DriveTerm`]s, each a
//! static operator scaled by a real coefficient that may vary in time:
//!
//!   H(t) = Σ_k  f_k(t) · A_k

use shed_quant::Operator;

/// Real scalar coefficient `f(t)` attached to a drive operator.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeDependence {
    /// A time-independent coefficient.
    Constant(f64),
    /// `cos(angular_freq · t + phase)`, both arguments in radians.
    Cosine {
        /// Angular frequency (rad per unit time).
        angular_freq: f64,
        /// Phase offset (rad).
        phase: f64,
    },
}

impl TimeDependence {
    /// Evaluate the coefficient at time `t`.
    pub fn eval(&self, t: f64) -> f64 {
        match self {
            Self::Constant(c) => *c,
            Self::Cosine {
                angular_freq,
                phase,
            } => (angular_freq * t + phase).cos(),
        }
    }
}

/// One term of a (possibly time-dependent) Hamiltonian.
#[derive(Debug, Clone)]
pub struct DriveTerm {
    /// The static operator part.
    pub operator: Operator,
    /// The scalar coefficient applied to it.
    pub coeff: TimeDependence,
}

impl DriveTerm {
    /// A term that is on at full strength for all time.
    pub fn constant(operator: Operator) -> Self {
        Self {
            operator,
            coeff: TimeDependence::Constant(1.0),
        }
    }

    /// A term modulated by `cos(angular_freq · t + phase)`.
    pub fn cosine(operator: Operator, angular_freq: f64, phase: f64) -> Self {
        Self {
            operator,
            coeff: TimeDependence::Cosine {
                angular_freq,
                phase,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn constant_ignores_time() {
        let c = TimeDependence::Constant(0.25);
        assert_eq!(c.eval(0.0), 0.25);
        assert_eq!(c.eval(100.0), 0.25);
    }

    #[test]
    fn cosine_phase_and_frequency() {
        let c = TimeDependence::Cosine {
            angular_freq: 2.0 * PI,
            phase: 0.0,
        };
        assert!((c.eval(0.0) - 1.0).abs() < 1e-12);
        assert!(c.eval(0.25).abs() < 1e-12);
        assert!((c.eval(0.5) + 1.0).abs() < 1e-12);

        let shifted = TimeDependence::Cosine {
            angular_freq: 2.0 * PI,
            phase: PI,
        };
        assert!((shifted.eval(0.0) + 1.0).abs() < 1e-12);
    }
}
