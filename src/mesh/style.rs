use std::fmt::Display;

use crate::{PartLayout, PrimitiveMode, COPY_COUNT};

/// The two ways the teapot can be drawn. Each has its own subdivision density & topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshStyle {
    /// Lit & textured triangles.
    Solid,
    /// Line strips along both parameter directions of every patch.
    Wire,
}

impl MeshStyle {
    /// Samples per patch edge.
    #[inline]
    pub const fn subdivisions(self) -> usize {
        match self {
            MeshStyle::Solid => 10,
            MeshStyle::Wire => 7,
        }
    }

    /// Vertices in the finished mesh: `N²` per patch copy.
    #[inline]
    pub const fn vertex_count(self) -> usize {
        let n = self.subdivisions();
        n * n * COPY_COUNT
    }

    /// Triangles in the finished mesh; zero for [Wire](MeshStyle::Wire).
    #[inline]
    pub const fn triangle_count(self) -> usize {
        match self {
            MeshStyle::Solid => {
                let cells = self.subdivisions() - 1;
                cells * cells * COPY_COUNT * 2
            }
            MeshStyle::Wire => 0,
        }
    }

    /// Length of the finished index buffer.
    #[inline]
    pub const fn index_count(self) -> usize {
        self.part_layout().len()
    }

    /// How the index buffer splits into draw parts.
    ///
    /// Solid meshes are one big triangle list; wire meshes are one strip per grid row & column
    /// of each patch copy.
    #[inline]
    pub const fn part_layout(self) -> PartLayout {
        match self {
            MeshStyle::Solid => PartLayout::new(1, self.triangle_count() * 3),
            MeshStyle::Wire => {
                let n = self.subdivisions();
                PartLayout::new(COPY_COUNT * n * 2, n)
            }
        }
    }

    #[inline]
    pub const fn primitive_mode(self) -> PrimitiveMode {
        match self {
            MeshStyle::Solid => PrimitiveMode::Triangles,
            MeshStyle::Wire => PrimitiveMode::LineStrip,
        }
    }

    #[inline]
    pub const fn has_texcoords(self) -> bool {
        matches!(self, MeshStyle::Solid)
    }
}

impl Display for MeshStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeshStyle::Solid => f.write_str("solid"),
            MeshStyle::Wire => f.write_str("wire"),
        }
    }
}
