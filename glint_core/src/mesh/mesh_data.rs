//! Descriptor-driven mesh preparation.
//!
//! `MeshData::from_desc` takes the flat triangle-list stream a loader
//! produces and runs the preparation steps in order:
//! 1. deduplicate into vertex + index buffers (or trivial indices)
//! 2. smooth normals
//! 3. tangent frames
//! 4. bounding sphere
//!
//! The result exposes byte views ready for the upload layer.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use crate::buffer::StagingBuffer;
use crate::engine_bail;
use crate::error::Result;
use crate::mesh::attributes::{compute_smooth_normals, compute_tangents_bitangents};
use crate::mesh::bounding::{generate_bounding_sphere, BoundingSphere};
use crate::mesh::indexing::{build_indexed_mesh, IndexedMesh};

const SOURCE: &str = "glint::MeshData";

// ============================================================================
// MESH VERTEX
// ============================================================================

/// Interleaved vertex layout uploaded to the GPU
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub tangent: [f32; 3],
    pub bitangent: [f32; 3],
}

impl MeshVertex {
    /// Vertex with position and UV; the other attributes start at zero
    pub fn new(position: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            uv: uv.to_array(),
            ..Self::zeroed()
        }
    }

    /// Same vertex with an explicit normal
    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = normal.to_array();
        self
    }

    pub fn position(&self) -> Vec3 { Vec3::from_array(self.position) }
    pub fn normal(&self) -> Vec3 { Vec3::from_array(self.normal) }
    pub fn uv(&self) -> Vec2 { Vec2::from_array(self.uv) }
    pub fn tangent(&self) -> Vec3 { Vec3::from_array(self.tangent) }
    pub fn bitangent(&self) -> Vec3 { Vec3::from_array(self.bitangent) }
}

// ============================================================================
// DESCRIPTORS
// ============================================================================

/// Which preparation steps to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshDataOptions {
    /// Merge identical vertices (otherwise indices are `0..n`)
    pub deduplicate: bool,
    /// Overwrite normals with area-weighted smooth normals
    pub generate_normals: bool,
    /// Overwrite tangents and bitangents from the UV mapping
    pub generate_tangents: bool,
}

impl Default for MeshDataOptions {
    fn default() -> Self {
        Self {
            deduplicate: true,
            generate_normals: true,
            generate_tangents: true,
        }
    }
}

/// Descriptor for creating MeshData
#[derive(Debug, Clone, Default)]
pub struct MeshDataDesc {
    /// Flat triangle list: every 3 vertices form one triangle
    pub vertices: Vec<MeshVertex>,
    pub options: MeshDataOptions,
}

// ============================================================================
// MESH DATA
// ============================================================================

/// Prepared, upload-ready mesh
#[derive(Debug, Clone)]
pub struct MeshData {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
    bounding_sphere: BoundingSphere,
}

impl MeshData {
    pub fn from_desc(desc: MeshDataDesc) -> Result<Self> {
        // ========== VALIDATION ==========
        if desc.vertices.is_empty() {
            engine_bail!(InvalidMesh => SOURCE, "Mesh must have at least one triangle");
        }
        if desc.vertices.len() % 3 != 0 {
            engine_bail!(InvalidMesh => SOURCE,
                "Vertex count {} is not a multiple of 3", desc.vertices.len());
        }
        let input_count = desc.vertices.len();

        // ========== INDEXING ==========
        let indexed = if desc.options.deduplicate {
            if u32::try_from(input_count).is_err() {
                engine_bail!(InvalidMesh => SOURCE,
                    "Vertex count {} exceeds 32-bit indexing", input_count);
            }
            build_indexed_mesh(&desc.vertices)
        } else {
            match IndexedMesh::from_unique(desc.vertices) {
                Some(indexed) => indexed,
                None => engine_bail!(InvalidMesh => SOURCE,
                    "Vertex count {} exceeds 32-bit indexing", input_count),
            }
        };
        let (mut vertices, indices) = indexed.into_parts();
        let positions: Vec<Vec3> = vertices.iter().map(MeshVertex::position).collect();

        // ========== ATTRIBUTES ==========
        if desc.options.generate_normals {
            let normals = compute_smooth_normals(&positions, &indices);
            for (vertex, normal) in vertices.iter_mut().zip(normals) {
                vertex.normal = normal.to_array();
            }
        }

        if desc.options.generate_tangents {
            let normals: Vec<Vec3> = vertices.iter().map(MeshVertex::normal).collect();
            let uvs: Vec<Vec2> = vertices.iter().map(MeshVertex::uv).collect();
            let frames = compute_tangents_bitangents(&positions, &normals, &uvs, &indices);
            for ((vertex, tangent), bitangent) in vertices
                .iter_mut()
                .zip(frames.tangents)
                .zip(frames.bitangents)
            {
                vertex.tangent = tangent.to_array();
                vertex.bitangent = bitangent.to_array();
            }
        }

        // ========== BOUNDS ==========
        let bounding_sphere = generate_bounding_sphere(&positions);

        crate::engine_debug!(SOURCE,
            "Prepared mesh: {} input vertices -> {} unique, {} triangles, radius {}",
            input_count, vertices.len(), indices.len() / 3, bounding_sphere.radius);

        Ok(Self {
            vertices,
            indices,
            bounding_sphere,
        })
    }

    // ===== ACCESSORS =====

    pub fn vertices(&self) -> &[MeshVertex] { &self.vertices }

    pub fn indices(&self) -> &[u32] { &self.indices }

    pub fn bounding_sphere(&self) -> BoundingSphere { self.bounding_sphere }

    pub fn vertex_count(&self) -> usize { self.vertices.len() }

    pub fn triangle_count(&self) -> usize { self.indices.len() / 3 }

    /// Vertex buffer contents
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents (u32 indices)
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    // ===== UPLOAD =====

    /// Copy the vertices into a staging buffer at `offset`
    pub fn write_vertices(&self, staging: &mut StagingBuffer, offset: isize) -> Result<()> {
        staging.write_elements(offset, &self.vertices)
    }

    /// Copy the indices into a staging buffer at `offset`
    pub fn write_indices(&self, staging: &mut StagingBuffer, offset: isize) -> Result<()> {
        staging.write_elements(offset, &self.indices)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mesh_data_tests.rs"]
mod tests;
