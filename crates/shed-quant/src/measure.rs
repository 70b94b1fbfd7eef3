//! Projective measurement and shot aggregation.
//!
//! Measurement in the computational basis: per-index probabilities, single
//! sampled outcomes, and counts aggregated over many shots.

use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{QuantError, QuantResult};
use crate::state::Ket;

/// Basis-state probabilities `|⟨i|ψ⟩|²`, normalized to sum to 1.
///
/// Fails on the zero vector; an unnormalized but nonzero state is fine.
pub fn probabilities(state: &Ket) -> QuantResult<Vec<f64>> {
    let norm_sq: f64 = state.amplitudes().iter().map(|a| a.norm_sqr()).sum();
    if norm_sq == 0.0 {
        return Err(QuantError::ZeroNorm);
    }
    Ok(state
        .amplitudes()
        .iter()
        .map(|a| a.norm_sqr() / norm_sq)
        .collect())
}

/// Sample one projective outcome in the computational basis.
pub fn sample<R: Rng + ?Sized>(state: &Ket, rng: &mut R) -> QuantResult<usize> {
    let probs = probabilities(state)?;
    let r: f64 = rng.r#gen();

    let mut cumulative = 0.0;
    for (i, p) in probs.iter().enumerate() {
        cumulative += p;
        if r < cumulative {
            return Ok(i);
        }
    }

    // Rounding can leave the cumulative sum a hair below 1.
    Ok(probs.len() - 1)
}

/// Aggregate `shots` projective measurements into outcome counts.
pub fn sample_counts<R: Rng + ?Sized>(
    state: &Ket,
    shots: u64,
    rng: &mut R,
) -> QuantResult<FxHashMap<usize, u64>> {
    debug!(shots, dim = state.dim(), "sampling measurement outcomes");
    let mut counts = FxHashMap::default();
    for _ in 0..shots {
        *counts.entry(sample(state, rng)?).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Render an outcome index as a little-endian bitstring over `num_qubits`.
pub fn outcome_bitstring(outcome: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", outcome, width = num_qubits)
        .chars()
        .rev()
        .collect()
}
