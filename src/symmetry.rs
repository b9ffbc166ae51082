//! Expanding one evaluated patch into its symmetric copies.

use nalgebra::{Point3, Vector3};

use crate::Float;

/// How a single patch is copied around the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Replication {
    /// Three more copies, at 90°, 180°, & 270° about the vertical (`Y`) axis.
    RotateFourWay,
    /// One more copy, mirrored across the `Z = 0` plane.
    MirrorTwoWay,
}

impl Replication {
    /// The number of copies this produces, including the original.
    #[inline]
    pub const fn copies(self) -> usize {
        match self {
            Replication::RotateFourWay => 4,
            Replication::MirrorTwoWay => 2,
        }
    }

    /// Fill in the copies of the base block.
    ///
    /// `block` holds `copies() * n²` entries; the first `n²` are the base patch (row-major, `n`
    /// entries per row), and the rest are overwritten.
    ///
    /// Mirroring reverses the order of rows, so that triangles built on the copy wind the same
    /// way as on the original.
    ///
    /// # Panics
    ///
    /// * `block.len()` != `self.copies() * n * n`
    pub fn replicate<V: Symmetric>(self, block: &mut [V], n: usize) {
        let len = n * n;
        assert_eq!(block.len(), len * self.copies(), "replication block size mismatch");
        let (base, rest) = block.split_at_mut(len);
        match self {
            Replication::RotateFourWay => {
                for (turn, copy) in rest.chunks_exact_mut(len).enumerate() {
                    let quarters = turn as u8 + 1;
                    for (dst, src) in copy.iter_mut().zip(base.iter()) {
                        *dst = src.quarter_turns(quarters);
                    }
                }
            }
            Replication::MirrorTwoWay => {
                for (dst_row, src_row) in rest.chunks_exact_mut(n).zip(base.chunks_exact(n).rev()) {
                    for (dst, src) in dst_row.iter_mut().zip(src_row) {
                        *dst = src.mirror_z();
                    }
                }
            }
        }
    }
}

/// Things which can be rotated about the `Y` axis in quarter turns & reflected across `Z = 0`,
/// exactly (i.e. by swapping & negating components rather than multiplying by a rotation matrix).
pub trait Symmetric: Copy {
    /// Rotate by `quarters` × 90° about `Y`.
    ///
    /// One quarter turn maps `(x, y, z)` → `(z, y, -x)`.
    fn quarter_turns(&self, quarters: u8) -> Self;

    /// `(x, y, z)` → `(x, y, -z)`
    fn mirror_z(&self) -> Self;
}

#[inline]
fn turn<Real: Float>(v: &Vector3<Real>, quarters: u8) -> Vector3<Real> {
    match quarters % 4 {
        0 => *v,
        1 => Vector3::new(v.z, v.y, -v.x),
        2 => Vector3::new(-v.x, v.y, -v.z),
        3 => Vector3::new(-v.z, v.y, v.x),
        _ => unreachable!(),
    }
}

impl<Real: Float> Symmetric for Vector3<Real> {
    #[inline]
    fn quarter_turns(&self, quarters: u8) -> Self {
        turn(self, quarters)
    }

    #[inline]
    fn mirror_z(&self) -> Self {
        Vector3::new(self.x, self.y, -self.z)
    }
}

impl<Real: Float> Symmetric for Point3<Real> {
    #[inline]
    fn quarter_turns(&self, quarters: u8) -> Self {
        Point3::from(turn(&self.coords, quarters))
    }

    #[inline]
    fn mirror_z(&self) -> Self {
        Point3::new(self.x, self.y, -self.z)
    }
}
