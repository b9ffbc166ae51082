//! A [DrawGeometry] which just keeps a copy of whatever it's asked to draw.
#![allow(dead_code)]

use teapot::{
    DrawGeometry, Normal, PartLayout, Position, PrimitiveMode, SolidGeometry, Texcoord,
    WireGeometry,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SolidDraw {
    pub positions: Vec<Position>,
    pub normals: Vec<Normal>,
    pub texcoords: Vec<Texcoord>,
    pub indices: Vec<u32>,
    pub vertex_count: usize,
    pub layout: PartLayout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WireDraw {
    pub positions: Vec<Position>,
    pub normals: Vec<Normal>,
    pub indices: Vec<u32>,
    pub vertex_count: usize,
    pub layout: PartLayout,
    pub mode: PrimitiveMode,
    pub secondary: Option<(Vec<u32>, PartLayout)>,
}

#[derive(Debug, Default)]
pub struct Recorder {
    /// Pretend the host hasn't been set up yet.
    pub uninitialized: bool,
    pub solid: Vec<SolidDraw>,
    pub wire: Vec<WireDraw>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uninitialized() -> Self {
        Self {
            uninitialized: true,
            ..Default::default()
        }
    }

    pub fn last_solid(&self) -> &SolidDraw {
        self.solid.last().expect("nothing drawn as solid")
    }

    pub fn last_wire(&self) -> &WireDraw {
        self.wire.last().expect("nothing drawn as wire")
    }
}

impl DrawGeometry for Recorder {
    fn is_initialized(&self) -> bool {
        !self.uninitialized
    }

    fn draw_solid(&mut self, g: SolidGeometry<'_>) {
        self.solid.push(SolidDraw {
            positions: g.positions.to_vec(),
            normals: g.normals.to_vec(),
            texcoords: g.texcoords.to_vec(),
            indices: g.indices.to_vec(),
            vertex_count: g.vertex_count(),
            layout: g.layout,
        });
    }

    fn draw_wire(&mut self, g: WireGeometry<'_>) {
        self.wire.push(WireDraw {
            positions: g.positions.to_vec(),
            normals: g.normals.to_vec(),
            indices: g.indices.to_vec(),
            vertex_count: g.vertex_count(),
            layout: g.layout,
            mode: g.mode,
            secondary: g.secondary.map(|(i, l)| (i.to_vec(), l)),
        });
    }
}

pub fn assert_close(a: &Position, b: &Position, tol: f32) {
    assert!(
        (a - b).norm() <= tol,
        "{a:?} and {b:?} differ by more than {tol}"
    );
}
