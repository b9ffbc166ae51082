//! The boundary between mesh generation & whatever actually puts pixels on a screen.

use crate::{Normal, Position, Texcoord};

/// The method by which vertices are interpreted as topological primitives.
///
/// Discriminants are the values used by glTF & OpenGL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveMode {
    Points = 0,
    Lines = 1,
    LineLoop = 2,
    LineStrip = 3,
    Triangles = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}

impl PrimitiveMode {
    /// Convert self to a value usable within a glTF asset (or passed straight to GL).
    #[inline]
    pub fn to_gltf(self) -> u32 {
        self as u32
    }
}

/// A run of equally-sized parts within an index buffer: `parts` consecutive groups of
/// `per_part` indices each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartLayout {
    pub parts: usize,
    pub per_part: usize,
}

impl PartLayout {
    #[inline]
    pub const fn new(parts: usize, per_part: usize) -> Self {
        Self { parts, per_part }
    }

    /// The number of indices covered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.parts * self.per_part
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Buffers for a filled, lit, textured triangle mesh.
#[derive(Debug, Clone, Copy)]
pub struct SolidGeometry<'mesh> {
    pub positions: &'mesh [Position],
    pub normals: &'mesh [Normal],
    pub texcoords: &'mesh [Texcoord],
    /// Triangle list; three indices per triangle.
    pub indices: &'mesh [u32],
    pub layout: PartLayout,
}

impl SolidGeometry<'_> {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Buffers for a line mesh.
///
/// `indices` is split into parts according to `layout`, each of which is drawn as `mode`.
/// `secondary`, if present, is a second index buffer drawn the same way with its own layout.
#[derive(Debug, Clone, Copy)]
pub struct WireGeometry<'mesh> {
    pub positions: &'mesh [Position],
    pub normals: &'mesh [Normal],
    pub indices: &'mesh [u32],
    pub layout: PartLayout,
    pub mode: PrimitiveMode,
    pub secondary: Option<(&'mesh [u32], PartLayout)>,
}

impl WireGeometry<'_> {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Something which can draw finished meshes.
///
/// Implementors decide what "draw" means (issue GL calls, record a command buffer, write a file,
/// etc.); meshes only promise that the buffers have the shapes described by [SolidGeometry] &
/// [WireGeometry].
pub trait DrawGeometry {
    /// Whether the host is ready to draw. Rendering entry points refuse to do anything otherwise.
    #[inline]
    fn is_initialized(&self) -> bool {
        true
    }

    fn draw_solid(&mut self, geometry: SolidGeometry<'_>);

    fn draw_wire(&mut self, geometry: WireGeometry<'_>);
}

impl<D: DrawGeometry + ?Sized> DrawGeometry for &mut D {
    #[inline]
    fn is_initialized(&self) -> bool {
        (**self).is_initialized()
    }

    #[inline]
    fn draw_solid(&mut self, geometry: SolidGeometry<'_>) {
        (**self).draw_solid(geometry)
    }

    #[inline]
    fn draw_wire(&mut self, geometry: WireGeometry<'_>) {
        (**self).draw_wire(geometry)
    }
}
