/*!
# Glint Core

Systems-level core beneath Glint's graphics object wrappers.

The wrappers themselves (samplers, textures, framebuffers, shaders, viewport
controls) forward to native calls. This crate holds the parts with real
invariants:

## Architecture

- **buffer**: bounds validation for `(offset, stride, count)` sub-range
  access, and a staging buffer that routes all access through it
- **mesh**: vertex deduplication, smooth normals, tangent frames, bounding
  spheres, and a descriptor-driven preparation pipeline
- **sharing**: thread-safe named reference counts for GPU objects shared by
  several context groups

Everything is passive: no threads, no global registries. The only process
state is the logger held by `Engine`.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod buffer;
pub mod mesh;
pub mod sharing;

// Main glint namespace module
pub mod glint {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Buffer access sub-module
    pub mod buffer {
        pub use crate::buffer::*;
    }

    // Mesh preparation sub-module
    pub mod mesh {
        pub use crate::mesh::*;
    }

    // Shared resource tracking sub-module
    pub mod sharing {
        pub use crate::sharing::*;
    }
}

// Re-export math library at crate root
pub use glam;
