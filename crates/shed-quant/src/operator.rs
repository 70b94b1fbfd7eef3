//! Dense operators on a finite Hilbert space.
//!
//! An [`Operator`] is a square matrix of `Complex64` amplitudes acting on a
//! `dim`-level system. The constructors cover the small menagerie the shed
//! utilities need: the Pauli matrices for a qubit, and the truncated ladder
//! operators for an oscillator-like mode (e.g. a transmon).
//!
//! # Example
//!
//! ```rust
//! use shed_quant::{Ket, Operator};
//!
//! // ⟨0| σz |0⟩ = +1
//! let sz = Operator::sigma_z();
//! let ground = Ket::basis(2, 0).unwrap();
//! let e = sz.expect(&ground).unwrap();
//! assert!((e.re - 1.0).abs() < 1e-12);
//! ```

use ndarray::{Array1, Array2, ArrayView2};
use num_complex::Complex64;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{QuantError, QuantResult};
use crate::state::Ket;

/// A dense square operator on a `dim`-level Hilbert space.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    matrix: Array2<Complex64>,
}

impl Operator {
    /// The zero operator on a `dim`-level space.
    pub fn zeros(dim: usize) -> QuantResult<Self> {
        if dim == 0 {
            return Err(QuantError::InvalidDimension(0));
        }
        Ok(Self {
            matrix: Array2::zeros((dim, dim)),
        })
    }

    /// The identity operator on a `dim`-level space.
    pub fn identity(dim: usize) -> QuantResult<Self> {
        if dim == 0 {
            return Err(QuantError::InvalidDimension(0));
        }
        Ok(Self {
            matrix: Array2::eye(dim),
        })
    }

    /// Wrap an explicit matrix. Fails unless the matrix is square and
    /// non-empty.
    pub fn from_matrix(matrix: Array2<Complex64>) -> QuantResult<Self> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(QuantError::NonSquareMatrix { rows, cols });
        }
        if rows == 0 {
            return Err(QuantError::InvalidDimension(0));
        }
        Ok(Self { matrix })
    }

    /// Hilbert-space dimension.
    pub fn dim(&self) -> usize {
        self.matrix.nrows()
    }

    /// Borrow the underlying matrix.
    pub fn matrix(&self) -> ArrayView2<'_, Complex64> {
        self.matrix.view()
    }

    /// Conjugate transpose (the dagger).
    pub fn dag(&self) -> Self {
        let mut m = self.matrix.t().to_owned();
        m.mapv_inplace(|z| z.conj());
        Self { matrix: m }
    }

    /// Operator product `self · other`.
    pub fn matmul(&self, other: &Operator) -> QuantResult<Operator> {
        self.check_dim(other.dim())?;
        Ok(Self {
            matrix: self.matrix.dot(&other.matrix),
        })
    }

    /// Operator sum `self + other` with a dimension check.
    pub fn add_op(&self, other: &Operator) -> QuantResult<Operator> {
        self.check_dim(other.dim())?;
        Ok(Self {
            matrix: &self.matrix + &other.matrix,
        })
    }

    /// Operator difference `self − other` with a dimension check.
    pub fn sub_op(&self, other: &Operator) -> QuantResult<Operator> {
        self.check_dim(other.dim())?;
        Ok(Self {
            matrix: &self.matrix - &other.matrix,
        })
    }

    /// Apply the operator to a ket: `|φ⟩ = A|ψ⟩`.
    pub fn apply(&self, state: &Ket) -> QuantResult<Ket> {
        self.check_dim(state.dim())?;
        let amps: Array1<Complex64> = self.matrix.dot(&state.amplitudes());
        Ket::from_amplitudes(amps.to_vec())
    }

    /// Expectation value `⟨ψ|A|ψ⟩`.
    ///
    /// The result is complex in general; for a Hermitian operator on a
    /// normalized state the imaginary part is zero up to rounding.
    pub fn expect(&self, state: &Ket) -> QuantResult<Complex64> {
        let applied = self.apply(state)?;
        state.overlap(&applied)
    }

    /// True if `A = A†` within `tol` on every entry.
    pub fn is_hermitian(&self, tol: f64) -> bool {
        let d = self.dag();
        self.matrix
            .iter()
            .zip(d.matrix.iter())
            .all(|(a, b)| (a - b).norm() <= tol)
    }

    fn check_dim(&self, other: usize) -> QuantResult<()> {
        if self.dim() != other {
            return Err(QuantError::DimensionMismatch {
                left: self.dim(),
                right: other,
            });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Standard operators
    // -----------------------------------------------------------------------

    /// Pauli-X.
    pub fn sigma_x() -> Self {
        let z = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        Self {
            matrix: ndarray::arr2(&[[z, one], [one, z]]),
        }
    }

    /// Pauli-Y.
    pub fn sigma_y() -> Self {
        let z = Complex64::new(0.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        Self {
            matrix: ndarray::arr2(&[[z, -i], [i, z]]),
        }
    }

    /// Pauli-Z.
    pub fn sigma_z() -> Self {
        let z = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        Self {
            matrix: ndarray::arr2(&[[one, z], [z, -one]]),
        }
    }

    /// Annihilation (lowering) operator truncated to `dim` levels.
    ///
    /// Matrix elements `⟨n−1| a |n⟩ = √n`.
    pub fn destroy(dim: usize) -> QuantResult<Self> {
        if dim == 0 {
            return Err(QuantError::InvalidDimension(0));
        }
        let mut m = Array2::zeros((dim, dim));
        for n in 1..dim {
            m[(n - 1, n)] = Complex64::new((n as f64).sqrt(), 0.0);
        }
        Ok(Self { matrix: m })
    }

    /// Creation (raising) operator truncated to `dim` levels.
    pub fn create(dim: usize) -> QuantResult<Self> {
        Ok(Self::destroy(dim)?.dag())
    }

    /// Number operator `a†a` truncated to `dim` levels.
    pub fn number(dim: usize) -> QuantResult<Self> {
        if dim == 0 {
            return Err(QuantError::InvalidDimension(0));
        }
        let mut m = Array2::zeros((dim, dim));
        for n in 0..dim {
            m[(n, n)] = Complex64::new(n as f64, 0.0);
        }
        Ok(Self { matrix: m })
    }
}

// ---------------------------------------------------------------------------
// Scalar arithmetic — infallible, so plain operator impls
// ---------------------------------------------------------------------------

impl Mul<Operator> for f64 {
    type Output = Operator;

    fn mul(self, rhs: Operator) -> Operator {
        Operator {
            matrix: rhs.matrix * Complex64::new(self, 0.0),
        }
    }
}

impl Mul<&Operator> for f64 {
    type Output = Operator;

    fn mul(self, rhs: &Operator) -> Operator {
        Operator {
            matrix: &rhs.matrix * Complex64::new(self, 0.0),
        }
    }
}

impl Mul<Operator> for Complex64 {
    type Output = Operator;

    fn mul(self, rhs: Operator) -> Operator {
        Operator {
            matrix: rhs.matrix * self,
        }
    }
}

impl Mul<&Operator> for Complex64 {
    type Output = Operator;

    fn mul(self, rhs: &Operator) -> Operator {
        Operator {
            matrix: &rhs.matrix * self,
        }
    }
}

impl Neg for Operator {
    type Output = Operator;

    fn neg(self) -> Operator {
        Operator {
            matrix: -self.matrix,
        }
    }
}

// Same-dimension sums come up constantly when assembling Hamiltonians; the
// panicking std-ops forms are reserved for tests and demos, library code uses
// the checked `add_op`/`sub_op`.
impl Add for &Operator {
    type Output = Operator;

    fn add(self, rhs: &Operator) -> Operator {
        assert_eq!(self.dim(), rhs.dim(), "operator dimension mismatch");
        Operator {
            matrix: &self.matrix + &rhs.matrix,
        }
    }
}

impl Sub for &Operator {
    type Output = Operator;

    fn sub(self, rhs: &Operator) -> Operator {
        assert_eq!(self.dim(), rhs.dim(), "operator dimension mismatch");
        Operator {
            matrix: &self.matrix - &rhs.matrix,
        }
    }
}
