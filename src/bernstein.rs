//! Cubic Bernstein basis tables.

use nalgebra::Vector4;

use crate::Float;

/// Evaluate the four cubic Bernstein polynomials at `x`, along with their first derivatives.
///
/// Returns `(B, B')`, where `B[i]` = B<sub>i,3</sub>(x).
#[inline]
pub fn bernstein3<Real: Float>(x: Real) -> (Vector4<Real>, Vector4<Real>) {
    let inv = Real::ONE - x;
    let (inv2, x2) = (inv * inv, x * x);
    (
        Vector4::new(
            inv * inv2,
            Real::THREE * x * inv2,
            Real::THREE * x2 * inv,
            x * x2,
        ),
        Vector4::new(
            -(Real::THREE * inv2),
            Real::THREE * inv2 - Real::SIX * x * inv,
            Real::SIX * x * inv - Real::THREE * x2,
            Real::THREE * x2,
        ),
    )
}

/// Bernstein basis values and first derivatives, sampled at `n` evenly-spaced parameter values
/// across `[0, 1]` (both ends included).
///
/// Depends only on `n`; the same table serves every patch at every scale.
#[derive(Debug, Clone, PartialEq)]
pub struct BernsteinTable<Real: Float> {
    basis: Vec<Vector4<Real>>,
    deriv: Vec<Vector4<Real>>,
}

impl<Real: Float> BernsteinTable<Real> {
    /// Sample the basis `n` times.
    ///
    /// # Panics
    ///
    /// * `n` < 2
    pub fn new(n: usize) -> Self {
        assert!(n > 1, "a subdivision grid needs at least two samples per edge");
        let last: Real = nalgebra::convert((n - 1) as f64);
        let (basis, deriv) = (0..n)
            .map(|s| bernstein3(nalgebra::convert::<f64, Real>(s as f64) / last))
            .unzip();
        Self { basis, deriv }
    }

    /// The number of samples per patch edge.
    #[inline]
    pub fn subdivisions(&self) -> usize {
        self.basis.len()
    }

    /// B<sub>0..4</sub> at sample `s`.
    #[inline]
    pub fn basis(&self, s: usize) -> &Vector4<Real> {
        &self.basis[s]
    }

    /// B'<sub>0..4</sub> at sample `s`.
    #[inline]
    pub fn deriv(&self, s: usize) -> &Vector4<Real> {
        &self.deriv[s]
    }

    pub fn basis_rows(&self) -> &[Vector4<Real>] {
        &self.basis
    }

    pub fn deriv_rows(&self) -> &[Vector4<Real>] {
        &self.deriv
    }
}
