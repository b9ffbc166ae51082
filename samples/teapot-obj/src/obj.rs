//! A [DrawGeometry] gateway which writes whatever it's asked to draw as Wavefront OBJ.

use std::io::{self, Write};

use teapot::{DrawGeometry, Normal, Position, SolidGeometry, Texcoord, WireGeometry};

/// Errors related to exporting a teapot.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Render(#[from] teapot::error::Error),
    #[error("nothing was drawn")]
    Empty,
    #[error("{parts} parts of {per_part} indices overrun an index buffer of length {len}")]
    LayoutOverrun {
        parts: usize,
        per_part: usize,
        len: usize,
    },
}

/// Writes each draw call as its own OBJ object.
///
/// [DrawGeometry] can't report failures, so the first error (I/O, or geometry that doesn't match
/// its own layout) is held until [finish](Self::finish); everything drawn after it is dropped.
#[derive(Debug)]
pub struct ObjWriter<W: Write> {
    out: W,
    /// OBJ indices are global & 1-based; this is the index of the next vertex written.
    next_vertex: usize,
    objects: usize,
    error: Option<ExportError>,
}

impl<W: Write> ObjWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_vertex: 1,
            objects: 0,
            error: None,
        }
    }

    /// Flush & return the underlying writer, or the first error encountered while drawing.
    pub fn finish(mut self) -> Result<W, ExportError> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        if self.objects == 0 {
            return Err(ExportError::Empty);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn record(&mut self, f: impl FnOnce(&mut W, usize) -> Result<(), ExportError>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = f(&mut self.out, self.next_vertex) {
            tracing::error!(error = %e, "failed to write OBJ data");
            self.error = Some(e);
        }
    }
}

fn write_vertices(
    out: &mut impl Write,
    positions: &[Position],
    normals: &[Normal],
    texcoords: &[Texcoord],
) -> io::Result<()> {
    for p in positions {
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for n in normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for t in texcoords {
        writeln!(out, "vt {} {}", t.x, t.y)?;
    }
    Ok(())
}

impl<W: Write> DrawGeometry for ObjWriter<W> {
    fn draw_solid(&mut self, g: SolidGeometry<'_>) {
        tracing::debug!(
            vertices = g.vertex_count(),
            triangles = g.indices.len() / 3,
            "writing solid teapot"
        );
        let object = self.objects;
        self.record(|out, first| {
            writeln!(out, "o teapot.solid.{object}")?;
            write_vertices(out, g.positions, g.normals, g.texcoords)?;
            let textured = !g.texcoords.is_empty();
            for tri in g.indices.chunks_exact(3) {
                out.write_all(b"f")?;
                for &i in tri {
                    let i = first + i as usize;
                    if textured {
                        write!(out, " {i}/{i}/{i}")?;
                    } else {
                        write!(out, " {i}//{i}")?;
                    }
                }
                out.write_all(b"\n")?;
            }
            Ok(())
        });
        self.next_vertex += g.vertex_count();
        self.objects += 1;
    }

    fn draw_wire(&mut self, g: WireGeometry<'_>) {
        tracing::debug!(
            vertices = g.vertex_count(),
            strips = g.layout.parts,
            mode = g.mode.to_gltf(),
            "writing wire teapot"
        );
        let object = self.objects;
        self.record(|out, first| {
            writeln!(out, "o teapot.wire.{object}")?;
            write_vertices(out, g.positions, g.normals, &[])?;
            let parts = std::iter::once((g.indices, g.layout)).chain(g.secondary);
            for (indices, layout) in parts {
                if layout.is_empty() {
                    continue;
                }
                let used = indices
                    .get(..layout.len())
                    .ok_or(ExportError::LayoutOverrun {
                        parts: layout.parts,
                        per_part: layout.per_part,
                        len: indices.len(),
                    })?;
                for strip in used.chunks_exact(layout.per_part) {
                    out.write_all(b"l")?;
                    for &i in strip {
                        write!(out, " {}", first + i as usize)?;
                    }
                    out.write_all(b"\n")?;
                }
            }
            Ok(())
        });
        self.next_vertex += g.vertex_count();
        self.objects += 1;
    }
}
