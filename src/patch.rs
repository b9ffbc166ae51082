//! Bicubic Bézier patches.

use nalgebra::{Point3, Vector3, Vector4};

use crate::{bernstein3, log, BernsteinTable, Float};

/// Override applied to the first row (`u = 0`) of a patch's normals.
///
/// Patches which close off a pole of the surface have all four control points of their first row
/// at the same place, so both tangents vanish there and the computed normal is garbage. For those,
/// the whole row is replaced with a fixed vector instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalFix {
    #[default]
    None,
    /// The pole points up; `(0, 1, 0)`.
    ForcePositiveY,
    /// The pole points down; `(0, -1, 0)`.
    ForceNegativeY,
}

impl NormalFix {
    /// The replacement normal, if any.
    #[inline]
    pub fn normal<Real: Float>(self) -> Option<Vector3<Real>> {
        match self {
            NormalFix::None => None,
            NormalFix::ForcePositiveY => Some(Vector3::new(Real::ZERO, Real::ONE, Real::ZERO)),
            NormalFix::ForceNegativeY => Some(Vector3::new(Real::ZERO, -Real::ONE, Real::ZERO)),
        }
    }
}

/// A 4×4 grid of control points defining a bicubic Bézier surface.
///
/// `self.0[i][j]` is weighted by B<sub>i</sub>(u)·B<sub>j</sub>(v).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPatch<Real: Float>(pub [[Point3<Real>; 4]; 4]);

/// Position & both partial derivatives at a single parameter pair.
struct Sample<Real: Float> {
    position: Vector3<Real>,
    /// ∂/∂u
    tan_u: Vector3<Real>,
    /// ∂/∂v
    tan_v: Vector3<Real>,
}

impl<Real: Float> Sample<Real> {
    /// `∂/∂v × ∂/∂u`, normalized.
    ///
    /// Not guarded against zero-length results. The only place the model produces those is the
    /// polar rows, and those never get here; see [NormalFix].
    #[inline]
    fn normal(&self) -> Vector3<Real> {
        let n = self.tan_v.cross(&self.tan_u);
        let len = n.norm();
        debug_assert!(len != Real::ZERO, "degenerate surface normal");
        n / len
    }
}

impl<Real: Float> ControlPatch<Real> {
    /// Construct a patch from a function of `(i, j)` control grid coordinates.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Point3<Real>) -> Self {
        Self(std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))))
    }

    /// Tensor-product sum over the control grid, given basis weights `(bu, dbu)` along `u` and
    /// `(bv, dbv)` along `v`.
    ///
    /// Each control row is first collapsed along `v`, then the four row results are blended along
    /// `u`. When `with_tangents` is false, only `position` is filled in.
    #[inline]
    fn sample(
        &self,
        (bu, dbu): (&Vector4<Real>, &Vector4<Real>),
        (bv, dbv): (&Vector4<Real>, &Vector4<Real>),
        with_tangents: bool,
    ) -> Sample<Real> {
        let mut res = Sample {
            position: Vector3::zeros(),
            tan_u: Vector3::zeros(),
            tan_v: Vector3::zeros(),
        };
        for (i, row) in self.0.iter().enumerate() {
            let mut along_v = Vector3::zeros();
            let mut along_dv = Vector3::zeros();
            for (j, cp) in row.iter().enumerate() {
                along_v += cp.coords * bv[j];
                if with_tangents {
                    along_dv += cp.coords * dbv[j];
                }
            }
            res.position += along_v * bu[i];
            if with_tangents {
                res.tan_v += along_dv * bu[i];
                res.tan_u += along_v * dbu[i];
            }
        }
        res
    }

    /// Evaluate the surface at a single `(u, v)` ∈ [0, 1]², returning the position and the
    /// (unnormalized) normal `∂/∂v × ∂/∂u`.
    pub fn eval(&self, u: Real, v: Real) -> (Point3<Real>, Vector3<Real>) {
        let (bu, dbu) = bernstein3(u);
        let (bv, dbv) = bernstein3(v);
        let s = self.sample((&bu, &dbu), (&bv, &dbv), true);
        (Point3::from(s.position), s.tan_v.cross(&s.tan_u))
    }

    /// Evaluate the surface over the `N`×`N` grid described by `table`, writing positions into the
    /// first `N²` entries of `positions`, row-major by `u`.
    ///
    /// Every written entry is assigned, so `positions` can hold anything beforehand.
    ///
    /// # Panics
    ///
    /// * `positions.len()` < `N²`
    pub fn tessellate(&self, table: &BernsteinTable<Real>, positions: &mut [Point3<Real>]) {
        let n = table.subdivisions();
        for (o, p) in positions[..n * n].iter_mut().enumerate() {
            let (u, v) = (o / n, o % n);
            let s = self.sample(
                (table.basis(u), table.deriv(u)),
                (table.basis(v), table.deriv(v)),
                false,
            );
            *p = Point3::from(s.position);
        }
    }

    /// As [tessellate](Self::tessellate), but also writes unit normals into the first `N²`
    /// entries of `normals`. If `fix` says so, the first row of normals is replaced outright.
    ///
    /// # Panics
    ///
    /// * `positions.len()` < `N²` or `normals.len()` < `N²`
    pub fn tessellate_with_normals(
        &self,
        table: &BernsteinTable<Real>,
        fix: NormalFix,
        positions: &mut [Point3<Real>],
        normals: &mut [Vector3<Real>],
    ) {
        let n = table.subdivisions();
        let fixed = fix.normal();
        if fixed.is_some() {
            log::trace!(?fix, "replacing polar normals");
        }
        let cells = positions[..n * n].iter_mut().zip(normals[..n * n].iter_mut());
        for (o, (p, nrm)) in cells.enumerate() {
            let (u, v) = (o / n, o % n);
            let s = self.sample(
                (table.basis(u), table.deriv(u)),
                (table.basis(v), table.deriv(v)),
                true,
            );
            *p = Point3::from(s.position);
            *nrm = match fixed {
                // both tangents vanish at the pole; skip the cross product
                Some(f) if u == 0 => f,
                _ => s.normal(),
            };
        }
    }
}
