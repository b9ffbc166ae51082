//! Shared helpers for the teapot workspace.

use num_traits::{AsPrimitive, PrimInt};

pub mod macros;

/// Trait for integer types which can address a vertex within a vertex buffer; i.e. the element
/// type of an index buffer.
///
/// Implemented for every primitive integer that `usize` can be cast into. Whether a given type
/// is *wide* enough for a particular mesh is the caller's problem; see [`VertexIndex::fits`].
pub trait VertexIndex: PrimInt + AsPrimitive<usize> + std::fmt::Debug + 'static {
    /// Convert a vertex offset into an index, truncating if it doesn't fit.
    fn from_vertex(vertex: usize) -> Self;

    /// Whether every vertex offset in `0..count` is representable.
    #[inline]
    fn fits(count: usize) -> bool {
        count == 0 || Self::max_value().as_() >= count - 1
    }
}

impl<P> VertexIndex for P
where
    P: PrimInt + AsPrimitive<usize> + std::fmt::Debug + 'static,
    usize: AsPrimitive<P>,
{
    #[inline]
    fn from_vertex(vertex: usize) -> Self {
        vertex.as_()
    }
}
