//! Tessellation of the Utah teapot from its bicubic Bézier control patches.
//!
//! Only ten of the teapot's patches are stored; the rest are produced by rotating or mirroring
//! those (see [model]). A [Teapot] keeps one [MeshCache] per [MeshStyle], so drawing the same
//! teapot at the same size over & over only costs a [DrawGeometry] call.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod bernstein;
mod draw;
pub mod error;
mod log;
pub mod mesh;
pub mod model;
mod patch;
mod symmetry;
mod traits;

pub use bernstein::*;
pub use draw::*;
pub use mesh::*;
pub use model::{PatchKind, COPY_COUNT, PATCH_COUNT};
pub use patch::*;
pub use symmetry::*;
pub use traits::*;

use error::Error;

/// Solid & wire tessellations of the teapot, each cached independently.
///
/// Caches live exactly as long as this does; separate `Teapot`s share nothing.
#[derive(Debug, Clone)]
pub struct Teapot {
    solid: MeshCache,
    wire: MeshCache,
}

impl Default for Teapot {
    fn default() -> Self {
        Self::new()
    }
}

impl Teapot {
    /// Construct a teapot with both caches uninitialized. Nothing is tessellated until the first
    /// draw.
    pub fn new() -> Self {
        Self {
            solid: MeshCache::new(MeshStyle::Solid),
            wire: MeshCache::new(MeshStyle::Wire),
        }
    }

    #[inline]
    pub fn solid(&self) -> &MeshCache {
        &self.solid
    }

    #[inline]
    pub fn wire(&self) -> &MeshCache {
        &self.wire
    }

    #[inline]
    pub fn cache(&self, style: MeshStyle) -> &MeshCache {
        match style {
            MeshStyle::Solid => &self.solid,
            MeshStyle::Wire => &self.wire,
        }
    }

    /// Draw a lit, textured teapot `size` units tall-ish.
    ///
    /// # Errors
    ///
    /// * [`NotInitialized`](Error::NotInitialized) if `gateway` isn't ready to draw. Nothing is
    ///   generated in that case.
    pub fn render_solid<D: DrawGeometry + ?Sized>(
        &mut self,
        size: f32,
        gateway: &mut D,
    ) -> Result<Refresh, Error> {
        Self::render(&mut self.solid, "render_solid", size, gateway)
    }

    /// Draw a wireframe teapot.
    ///
    /// # Errors
    ///
    /// * [`NotInitialized`](Error::NotInitialized) if `gateway` isn't ready to draw. Nothing is
    ///   generated in that case.
    pub fn render_wire<D: DrawGeometry + ?Sized>(
        &mut self,
        size: f32,
        gateway: &mut D,
    ) -> Result<Refresh, Error> {
        Self::render(&mut self.wire, "render_wire", size, gateway)
    }

    fn render<D: DrawGeometry + ?Sized>(
        cache: &mut MeshCache,
        entry_point: &'static str,
        size: f32,
        gateway: &mut D,
    ) -> Result<Refresh, Error> {
        if !gateway.is_initialized() {
            return Err(Error::NotInitialized { entry_point });
        }
        let refresh = cache.generate(size);
        cache.draw(gateway);
        Ok(refresh)
    }
}

/// Draw `teapot` as a wireframe at `size`. See [Teapot::render_wire].
#[inline]
pub fn render_wire_teapot<D: DrawGeometry + ?Sized>(
    teapot: &mut Teapot,
    size: f64,
    gateway: &mut D,
) -> Result<Refresh, Error> {
    teapot.render_wire(size as f32, gateway)
}

/// Draw `teapot` as a solid at `size`. See [Teapot::render_solid].
#[inline]
pub fn render_solid_teapot<D: DrawGeometry + ?Sized>(
    teapot: &mut Teapot,
    size: f64,
    gateway: &mut D,
) -> Result<Refresh, Error> {
    teapot.render_solid(size as f32, gateway)
}
