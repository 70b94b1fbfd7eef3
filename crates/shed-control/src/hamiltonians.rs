//! Hamiltonians for the systems the shed utilities care about.
//!
//! All frequencies are linear (cycles per unit time); the evolution helpers
//! in [`crate::pulse`] apply the 2π conversion to angular units.

use shed_quant::Operator;

use crate::error::ControlResult;

/// Default truncation for transmon Hamiltonians where the caller does not
/// care about higher levels.
pub const DEFAULT_TRANSMON_LEVELS: usize = 3;

/// A qubit (two-level system) quantized by an energy difference on the z axis.
///
/// `H = 0.5 · freq · σz`, with `freq` the qubit frequency arising from the
/// energy quantization.
pub fn qubit_hamiltonian(freq: f64) -> Operator {
    0.5 * freq * Operator::sigma_z()
}

/// A transmon truncated to `dim` levels.
///
/// Represented as a Duffing oscillator, where the Kerr term is assumed
/// small:
///
///   H = freq · a†a  +  0.5 · anharm · a†a†aa
///
/// `anharm` is the anharmonicity and should be negative for a transmon.
pub fn transmon_hamiltonian(freq: f64, anharm: f64, dim: usize) -> ControlResult<Operator> {
    let a = Operator::destroy(dim)?;
    let at = a.dag();

    let number = at.matmul(&a)?;
    let kerr = at.matmul(&at)?.matmul(&a)?.matmul(&a)?;

    Ok((freq * number).add_op(&(0.5 * anharm * kerr))?)
}

/// [`transmon_hamiltonian`] truncated to [`DEFAULT_TRANSMON_LEVELS`].
///
/// Three levels is the smallest truncation that still shows the
/// anharmonicity.
pub fn transmon_hamiltonian_default(freq: f64, anharm: f64) -> ControlResult<Operator> {
    transmon_hamiltonian(freq, anharm, DEFAULT_TRANSMON_LEVELS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shed_quant::Ket;

    #[test]
    fn qubit_level_splitting() {
        // E₁ − E₀ = freq.
        let h = qubit_hamiltonian(4.7);
        let e0 = h.expect(&Ket::basis(2, 0).unwrap()).unwrap().re;
        let e1 = h.expect(&Ket::basis(2, 1).unwrap()).unwrap().re;
        assert!((e0 - e1 - 4.7).abs() < 1e-12);
    }

    #[test]
    fn transmon_levels_are_anharmonic() {
        let freq = 5.0;
        let anharm = -0.3;
        let h = transmon_hamiltonian(freq, anharm, 4).unwrap();
        let e = |n: usize| h.expect(&Ket::basis(4, n).unwrap()).unwrap().re;

        // E₁ − E₀ = freq, E₂ − E₁ = freq + anharm.
        assert!((e(1) - e(0) - freq).abs() < 1e-12);
        assert!((e(2) - e(1) - (freq + anharm)).abs() < 1e-12);
    }

    #[test]
    fn transmon_is_hermitian() {
        let h = transmon_hamiltonian(5.0, -0.3, DEFAULT_TRANSMON_LEVELS).unwrap();
        assert!(h.is_hermitian(1e-12));
    }

    #[test]
    fn default_truncation_matches_explicit_dim() {
        let explicit = transmon_hamiltonian(5.0, -0.3, 3).unwrap();
        let default = transmon_hamiltonian_default(5.0, -0.3).unwrap();
        assert_eq!(default.dim(), DEFAULT_TRANSMON_LEVELS);
        assert_eq!(default, explicit);
    }

    #[test]
    fn transmon_rejects_zero_dim() {
        assert!(transmon_hamiltonian(5.0, -0.3, 0).is_err());
    }
}
