//! Cached, scale-keyed tessellations of the teapot.

mod debug;
mod style;
mod topology;

pub use style::*;
pub use topology::*;

use nalgebra::{Point2, Point3, Vector3};
use teapot_common::VertexIndex;

use crate::{log, model, BernsteinTable, DrawGeometry, SolidGeometry, WireGeometry};

pub type Position = Point3<f32>;
pub type Normal = Vector3<f32>;
pub type Texcoord = Point2<f32>;

/// Vertex attributes & indices for one [MeshStyle].
///
/// Buffers are allocated at their final size up front; rebuilding never reallocates.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    positions: Vec<Position>,
    normals: Vec<Normal>,
    /// Empty for styles without texture coordinates.
    texcoords: Vec<Texcoord>,
    indices: Vec<u32>,
}

impl MeshBuffers {
    fn new(style: MeshStyle) -> Self {
        let vertices = style.vertex_count();
        Self {
            positions: vec![Position::origin(); vertices],
            normals: vec![Normal::zeros(); vertices],
            texcoords: Vec::with_capacity(if style.has_texcoords() { vertices } else { 0 }),
            indices: Vec::with_capacity(style.index_count()),
        }
    }

    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[inline]
    pub fn normals(&self) -> &[Normal] {
        &self.normals
    }

    #[inline]
    pub fn texcoords(&self) -> &[Texcoord] {
        &self.texcoords
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Where a [MeshCache] is in its lifecycle.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum CacheState {
    /// Nothing has been generated yet.
    #[default]
    Uninitialized,
    /// Topology & normals exist; positions reflect `scale`.
    Built { scale: f32 },
}

/// What a call to [MeshCache::generate] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refresh {
    /// First use: normals, positions, indices, & texture coordinates were all generated.
    Built,
    /// The scale changed, so positions were regenerated.
    Rescaled,
    /// Nothing; the buffers already matched the requested scale.
    Cached,
}

/// A tessellated teapot in a single [MeshStyle], regenerated only when the requested scale
/// changes.
///
/// Index buffers, texture coordinates, & normals don't depend on scale, so they're generated once,
/// on first use.
#[derive(Debug, Clone)]
pub struct MeshCache {
    style: MeshStyle,
    table: BernsteinTable<f32>,
    buffers: MeshBuffers,
    state: CacheState,
}

impl MeshCache {
    pub fn new(style: MeshStyle) -> Self {
        Self {
            style,
            table: BernsteinTable::new(style.subdivisions()),
            buffers: MeshBuffers::new(style),
            state: CacheState::Uninitialized,
        }
    }

    #[inline]
    pub fn style(&self) -> MeshStyle {
        self.style
    }

    #[inline]
    pub fn state(&self) -> CacheState {
        self.state
    }

    /// Whether topology has been generated.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, CacheState::Built { .. })
    }

    /// The scale currently reflected by the position buffer.
    #[inline]
    pub fn last_scale(&self) -> Option<f32> {
        match self.state {
            CacheState::Uninitialized => None,
            CacheState::Built { scale } => Some(scale),
        }
    }

    #[inline]
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    #[inline]
    pub fn table(&self) -> &BernsteinTable<f32> {
        &self.table
    }

    /// Bring the buffers up to date for `scale`.
    ///
    /// Scales are compared exactly; a NaN scale therefore regenerates every time.
    pub fn generate(&mut self, scale: f32) -> Refresh {
        let refresh = match self.state {
            CacheState::Built { scale: last } if last == scale => {
                log::trace!(style = %self.style, scale, "mesh cache hit");
                return Refresh::Cached;
            }
            CacheState::Built { .. } => Refresh::Rescaled,
            CacheState::Uninitialized => Refresh::Built,
        };
        log::debug!(style = %self.style, scale, ?refresh, "regenerating mesh");

        if refresh == Refresh::Built {
            self.build_normals();
        }
        self.build_positions(scale);
        if refresh == Refresh::Built {
            self.build_topology();
        }

        self.state = CacheState::Built { scale };
        refresh
    }

    /// Normals are scale-invariant (for any nonzero scale), so they're always taken from the
    /// unit-scale model; a first call at scale 0 still gets usable normals.
    ///
    /// Also scribbles over `positions`, which [build_positions](Self::build_positions) then
    /// overwrites.
    fn build_normals(&mut self) {
        let n = self.style.subdivisions();
        for slot in model::slots() {
            let range = slot.vertices(n);
            let positions = &mut self.buffers.positions[range.clone()];
            let normals = &mut self.buffers.normals[range];
            model::control_patch(slot.patch, 1.0f32).tessellate_with_normals(
                &self.table,
                slot.kind.normal_fix,
                positions,
                normals,
            );
            slot.kind.replication.replicate(normals, n);
        }
    }

    fn build_positions(&mut self, scale: f32) {
        let n = self.style.subdivisions();
        for slot in model::slots() {
            let positions = &mut self.buffers.positions[slot.vertices(n)];
            model::control_patch(slot.patch, scale).tessellate(&self.table, positions);
            slot.kind.replication.replicate(positions, n);
        }
    }

    fn build_topology(&mut self) {
        let n = self.style.subdivisions();
        let copies = model::COPY_COUNT;
        debug_assert!(u32::fits(self.buffers.vertex_count()));
        let MeshBuffers {
            texcoords, indices, ..
        } = &mut self.buffers;

        indices.clear();
        match self.style {
            MeshStyle::Solid => indices.extend(triangles::<u32>(n, copies).flatten()),
            MeshStyle::Wire => indices.extend(line_strips::<u32>(n, copies)),
        }

        texcoords.clear();
        if self.style.has_texcoords() {
            texcoords.extend(grid_texcoords::<f32>(n, copies));
        }

        log::debug!(
            style = %self.style,
            vertices = self.buffers.vertex_count(),
            indices = self.buffers.indices.len(),
            "built mesh topology"
        );
    }

    /// Hand the current buffers to `gateway`, as whichever kind of geometry matches this cache's
    /// style.
    ///
    /// Call [generate](Self::generate) first; before that, there's nothing to draw but an empty
    /// index buffer.
    pub fn draw<D: DrawGeometry + ?Sized>(&self, gateway: &mut D) {
        let MeshBuffers {
            positions,
            normals,
            texcoords,
            indices,
        } = &self.buffers;
        let layout = self.style.part_layout();
        match self.style {
            MeshStyle::Solid => gateway.draw_solid(SolidGeometry {
                positions,
                normals,
                texcoords,
                indices,
                layout,
            }),
            MeshStyle::Wire => gateway.draw_wire(WireGeometry {
                positions,
                normals,
                indices,
                layout,
                mode: self.style.primitive_mode(),
                secondary: None,
            }),
        }
    }
}
