//! Bloch coordinates of a quantum state.
//!
//! Both forms use only the first two amplitudes of the state, so they work
//! on any ket of dimension ≥ 2. Population outside the qubit subspace
//! (leakage) shows up as a radius shorter than 1.

use serde::{Deserialize, Serialize};

use shed_quant::Ket;

use crate::error::{BlochError, BlochResult};

/// Spherical Bloch coordinates `(r, θ, φ)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlochCoords {
    /// Radius; 1 for a normalized pure qubit state, shorter under leakage.
    pub r: f64,
    /// Polar angle from the |0⟩ pole, in [0, π].
    pub theta: f64,
    /// Azimuthal angle, the relative phase arg(b) − arg(a).
    pub phi: f64,
}

/// Cartesian Bloch vector `(x, y, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// x component.
    pub x: f64,
    /// y component.
    pub y: f64,
    /// z component; +1 at |0⟩, −1 at |1⟩.
    pub z: f64,
}

/// Compute spherical Bloch coordinates `(r, θ, φ)` of any quantum state.
pub fn spherical_coords(state: &Ket) -> BlochResult<BlochCoords> {
    if state.dim() < 2 {
        return Err(BlochError::StateTooSmall { dim: state.dim() });
    }
    let a = state.amp(0)?;
    let b = state.amp(1)?;

    let r = (a.norm_sqr() + b.norm_sqr()).sqrt();
    let theta = 2.0 * b.norm().atan2(a.norm());
    let phi = b.arg() - a.arg();

    Ok(BlochCoords { r, theta, phi })
}

/// Compute the Cartesian Bloch vector `(x, y, z)` of any quantum state.
pub fn bloch_vector(state: &Ket) -> BlochResult<BlochVector> {
    let BlochCoords { r, theta, phi } = spherical_coords(state)?;
    Ok(BlochVector {
        x: r * theta.sin() * phi.cos(),
        y: r * theta.sin() * phi.sin(),
        z: r * theta.cos(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn ground_state_points_at_north_pole() {
        let v = bloch_vector(&Ket::basis(2, 0).unwrap()).unwrap();
        assert!(v.x.abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
        assert!((v.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn excited_state_points_at_south_pole() {
        let c = spherical_coords(&Ket::basis(2, 1).unwrap()).unwrap();
        assert!((c.theta - PI).abs() < 1e-12);
        assert!((c.r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn plus_i_state_points_along_y() {
        let s = 1.0 / 2.0_f64.sqrt();
        let k = Ket::from_amplitudes(vec![
            Complex64::new(s, 0.0),
            Complex64::new(0.0, s),
        ])
        .unwrap();
        let c = spherical_coords(&k).unwrap();
        assert!((c.theta - FRAC_PI_2).abs() < 1e-12);
        assert!((c.phi - FRAC_PI_2).abs() < 1e-12);
        let v = bloch_vector(&k).unwrap();
        assert!((v.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn leakage_shortens_the_radius() {
        // A three-level state with weight outside the qubit subspace.
        let k = Ket::from_amplitudes(vec![
            Complex64::new(0.8, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.6, 0.0),
        ])
        .unwrap();
        let c = spherical_coords(&k).unwrap();
        assert!((c.r - 0.8).abs() < 1e-12);
    }

    #[test]
    fn one_level_state_is_rejected() {
        let k = Ket::basis(1, 0).unwrap();
        assert!(matches!(
            spherical_coords(&k),
            Err(BlochError::StateTooSmall { dim: 1 })
        ));
    }
}
