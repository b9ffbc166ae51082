use std::fmt::Display;

use crate::{CacheState, MeshCache};

impl Display for MeshCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let buffers = self.buffers();
        write!(f, "MeshCache ({}, ", self.style())?;
        match self.state() {
            CacheState::Uninitialized => f.write_str("uninitialized")?,
            CacheState::Built { scale } => write!(f, "built @ scale {scale}")?,
        }
        write!(
            f,
            "; {} vertices, {} indices, {} texcoords)",
            buffers.vertex_count(),
            buffers.indices().len(),
            buffers.texcoords().len()
        )
    }
}
