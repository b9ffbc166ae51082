//! The fixed patch layout of the teapot, and the transform from its control data into render
//! space.

mod data;
pub use data::*;

use nalgebra::Point3;

use crate::{ControlPatch, Float, NormalFix, Replication};

/// Everything about a stored patch other than its control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatchKind {
    pub replication: Replication,
    pub normal_fix: NormalFix,
}

impl PatchKind {
    #[inline]
    pub const fn new(replication: Replication, normal_fix: NormalFix) -> Self {
        Self {
            replication,
            normal_fix,
        }
    }
}

const fn count_copies() -> usize {
    let mut res = 0;
    let mut p = 0;
    while p < PATCH_COUNT {
        res += PATCH_KINDS[p].replication.copies();
        p += 1;
    }
    res
}

/// The number of patches in the tessellated model, after symmetric copies are made.
pub const COPY_COUNT: usize = count_copies();

/// A stored patch, plus where its copies land in a vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSlot {
    /// Index into [PATCHES].
    pub patch: usize,
    pub kind: PatchKind,
    /// Index of the first copy among all [COPY_COUNT] copies.
    pub first_copy: usize,
}

impl PatchSlot {
    /// The vertex range covered by this patch & all its copies, given `n` samples per edge.
    #[inline]
    pub fn vertices(&self, n: usize) -> std::ops::Range<usize> {
        let per_copy = n * n;
        let start = self.first_copy * per_copy;
        start..start + self.kind.replication.copies() * per_copy
    }
}

/// Iterate through every stored patch in buffer order.
pub fn slots() -> impl Iterator<Item = PatchSlot> {
    PATCH_KINDS
        .iter()
        .enumerate()
        .scan(0, |first_copy, (patch, kind)| {
            let slot = PatchSlot {
                patch,
                kind: *kind,
                first_copy: *first_copy,
            };
            *first_copy += kind.replication.copies();
            Some(slot)
        })
}

/// The control points of stored patch `patch`, in render space at uniform `scale`.
///
/// The model data is `Z`-up and sits on `Z = 0`; the render frame is `Y`-up and centered. Rather
/// than transform every tessellated vertex, the rotation (270° about `X`), the half-`scale`
/// scaling, & the `-1.5` shift along the original `Z` are folded into the control points:
///
/// ```text
/// x' =  x          * scale / 2
/// y' = (z - 1.5)   * scale / 2
/// z' = -y          * scale / 2
/// ```
///
/// # Panics
///
/// * `patch` ≥ [PATCH_COUNT]
pub fn control_patch<Real: Float>(patch: usize, scale: Real) -> ControlPatch<Real> {
    let indices = &PATCHES[patch];
    let shift: Real = nalgebra::convert(1.5f32);
    ControlPatch::from_fn(|i, j| {
        let [x, y, z] = CONTROL_POINTS[indices[i * 4 + j] as usize].map(nalgebra::convert::<f32, Real>);
        Point3::new(
            x * scale / Real::TWO,
            (z - shift) * scale / Real::TWO,
            -y * scale / Real::TWO,
        )
    })
}
