//! Mesh data preparation
//!
//! Algorithms run by mesh-loading code before buffers are handed to the
//! upload layer:
//! - **indexing**: vertex deduplication into vertex + index buffers
//! - **attributes**: smooth normals and tangent/bitangent frames
//! - **bounding**: axis-extent bounding sphere for culling
//! - **mesh_data**: descriptor-driven pipeline chaining the above
//!
//! All functions are synchronous and hold no state between calls.

pub mod indexing;
pub mod attributes;
pub mod bounding;
pub mod mesh_data;

pub use indexing::{
    IndexedMesh,
    build_indexed_mesh, build_indexed_mesh_by_key, generate_trivial_indices,
};
pub use attributes::{
    TangentFrames,
    compute_smooth_normals, compute_tangents_bitangents, validate_triangle_indices,
};
pub use bounding::{Aabb, BoundingSphere, generate_bounding_sphere};
pub use mesh_data::{MeshData, MeshDataDesc, MeshDataOptions, MeshVertex};
