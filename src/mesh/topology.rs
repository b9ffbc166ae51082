//! Scale-invariant mesh data: index buffers & texture coordinates.
//!
//! Every function here lays out `copies` patch copies back to back, each an `n`×`n` grid of
//! vertices stored row-major (row `r`, column `c` at `r * n + c`).

use nalgebra::Point2;
use teapot_common::VertexIndex;

use crate::Float;

/// Two triangles per grid cell, for every cell of every copy.
///
/// Cell `(r, c)` is split along its `(r, c)`–`(r + 1, c + 1)` diagonal, as
/// `[(r, c), (r + 1, c), (r + 1, c + 1)]` & `[(r, c), (r + 1, c + 1), (r, c + 1)]`. On the
/// teapot, that winds the triangles clockwise when viewed along the patch normals, so hosts should
/// treat clockwise faces as front-facing.
pub fn triangles<Idx: VertexIndex>(n: usize, copies: usize) -> impl Iterator<Item = [Idx; 3]> {
    let cells = n.saturating_sub(1);
    (0..copies).flat_map(move |p| {
        let base = p * n * n;
        (0..cells).flat_map(move |r| {
            (0..cells).flat_map(move |c| {
                let row1 = base + r * n + c;
                let row2 = row1 + n;
                [
                    [row1, row2, row2 + 1].map(Idx::from_vertex),
                    [row1, row2 + 1, row1 + 1].map(Idx::from_vertex),
                ]
            })
        })
    })
}

/// Vertex indices for drawing every copy as `n`-vertex line strips.
///
/// All strips of constant `v` (down each column) come first, for every copy; then all strips of
/// constant `u` (along each row).
pub fn line_strips<Idx: VertexIndex>(n: usize, copies: usize) -> impl Iterator<Item = Idx> {
    let columns = (0..copies).flat_map(move |p| {
        let base = p * n * n;
        (0..n).flat_map(move |c| (0..n).map(move |r| Idx::from_vertex(base + r * n + c)))
    });
    let rows = (0..copies).flat_map(move |p| {
        let base = p * n * n;
        (0..n * n).map(move |o| Idx::from_vertex(base + o))
    });
    columns.chain(rows)
}

/// `(u, v)` texture coordinates, identical for every copy: `u` runs 0 → 1 down the rows, & `v`
/// runs 0 → 1 along the columns.
pub fn grid_texcoords<Real: Float>(
    n: usize,
    copies: usize,
) -> impl Iterator<Item = Point2<Real>> {
    let last: Real = nalgebra::convert(n.saturating_sub(1).max(1) as f64);
    let step = move |s: usize| nalgebra::convert::<f64, Real>(s as f64) / last;
    (0..copies).flat_map(move |_| (0..n * n).map(move |o| Point2::new(step(o / n), step(o % n))))
}
