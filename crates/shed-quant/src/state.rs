//! State vectors (kets) on a finite Hilbert space.

use ndarray::{Array1, ArrayView1};
use num_complex::Complex64;

use crate::error::{QuantError, QuantResult};

/// A complex column vector `|ψ⟩` on a `dim`-level Hilbert space.
///
/// Kets are not forcibly normalized; solvers and measurement helpers check
/// or restore the norm where it matters.
#[derive(Debug, Clone, PartialEq)]
pub struct Ket {
    amplitudes: Array1<Complex64>,
}

impl Ket {
    /// The basis state `|n⟩` on a `dim`-level space.
    pub fn basis(dim: usize, n: usize) -> QuantResult<Self> {
        if dim == 0 {
            return Err(QuantError::InvalidDimension(0));
        }
        if n >= dim {
            return Err(QuantError::IndexOutOfRange { index: n, dim });
        }
        let mut amplitudes = Array1::zeros(dim);
        amplitudes[n] = Complex64::new(1.0, 0.0);
        Ok(Self { amplitudes })
    }

    /// Build a ket from explicit amplitudes.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> QuantResult<Self> {
        if amplitudes.is_empty() {
            return Err(QuantError::InvalidDimension(0));
        }
        Ok(Self {
            amplitudes: Array1::from_vec(amplitudes),
        })
    }

    /// Hilbert-space dimension.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Borrow the amplitude vector.
    pub fn amplitudes(&self) -> ArrayView1<'_, Complex64> {
        self.amplitudes.view()
    }

    /// The amplitude on basis index `i`.
    pub fn amp(&self, i: usize) -> QuantResult<Complex64> {
        self.amplitudes
            .get(i)
            .copied()
            .ok_or(QuantError::IndexOutOfRange {
                index: i,
                dim: self.dim(),
            })
    }

    /// Population `|⟨i|ψ⟩|²` of basis index `i`.
    pub fn population(&self, i: usize) -> QuantResult<f64> {
        Ok(self.amp(i)?.norm_sqr())
    }

    /// Euclidean norm `√⟨ψ|ψ⟩`.
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Rescale in place to unit norm. Fails on the zero vector.
    pub fn normalize(&mut self) -> QuantResult<()> {
        let n = self.norm();
        if n == 0.0 {
            return Err(QuantError::ZeroNorm);
        }
        self.amplitudes.mapv_inplace(|a| a / n);
        Ok(())
    }

    /// A unit-norm copy. Fails on the zero vector.
    pub fn normalized(&self) -> QuantResult<Self> {
        let mut out = self.clone();
        out.normalize()?;
        Ok(out)
    }

    /// Inner product `⟨self|other⟩` (conjugate-linear in `self`).
    pub fn overlap(&self, other: &Ket) -> QuantResult<Complex64> {
        if self.dim() != other.dim() {
            return Err(QuantError::DimensionMismatch {
                left: self.dim(),
                right: other.dim(),
            });
        }
        Ok(self
            .amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum())
    }
}
