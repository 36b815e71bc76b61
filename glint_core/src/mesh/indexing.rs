//! Vertex deduplication.
//!
//! Turns a flat vertex stream into a compact vertex list plus an index list.
//! Distinct vertices keep their first-occurrence order, so the output is
//! fully determined by the input.

use std::hash::Hash;
use bytemuck::Pod;
use rustc_hash::FxHashMap;

// ============================================================================
// INDEXED MESH
// ============================================================================

/// Deduplicated vertices plus one index per input vertex
///
/// Every index is smaller than `vertices().len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh<V> {
    vertices: Vec<V>,
    indices: Vec<u32>,
}

impl<V> IndexedMesh<V> {
    /// Wrap vertices known to be unique, with indices `0..len`
    ///
    /// Returns `None` if there are more vertices than a `u32` index can address.
    pub fn from_unique(vertices: Vec<V>) -> Option<Self> {
        let count = u32::try_from(vertices.len()).ok()?;
        Some(Self {
            vertices,
            indices: generate_trivial_indices(count),
        })
    }

    /// Deduplicated vertices, in first-occurrence order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Mutable access to the vertices (the count cannot change)
    pub fn vertices_mut(&mut self) -> &mut [V] {
        &mut self.vertices
    }

    /// One index per input vertex
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of complete triangles described by the indices
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Split into `(vertices, indices)`
    pub fn into_parts(self) -> (Vec<V>, Vec<u32>) {
        (self.vertices, self.indices)
    }
}

impl<V: Clone> IndexedMesh<V> {
    /// Rebuild the original flat vertex stream
    pub fn expand(&self) -> Vec<V> {
        self.indices
            .iter()
            .map(|&index| self.vertices[index as usize].clone())
            .collect()
    }
}

// ============================================================================
// DEDUPLICATION
// ============================================================================

/// Deduplicate a vertex stream by exact value
///
/// Two vertices are equal when their bytes are equal: there is no epsilon,
/// `0.0` and `-0.0` are distinct, and identical NaN payloads merge. Callers
/// wanting fuzzy merging quantize first or use [`build_indexed_mesh_by_key`].
///
/// # Example
///
/// ```
/// use glint_core::glint::mesh::build_indexed_mesh;
///
/// let stream = [[0.0f32, 0.0], [1.0, 0.0], [0.0, 0.0]];
/// let mesh = build_indexed_mesh(&stream);
/// assert_eq!(mesh.vertices(), &[[0.0, 0.0], [1.0, 0.0]]);
/// assert_eq!(mesh.indices(), &[0, 1, 0]);
/// ```
pub fn build_indexed_mesh<V: Pod>(vertices: &[V]) -> IndexedMesh<V> {
    debug_assert!(vertices.len() <= u32::MAX as usize);

    let mut lookup: FxHashMap<&[u8], u32> = FxHashMap::default();
    lookup.reserve(vertices.len());
    let mut unique = Vec::new();
    let mut indices = Vec::with_capacity(vertices.len());

    for vertex in vertices {
        let index = *lookup.entry(bytemuck::bytes_of(vertex)).or_insert_with(|| {
            unique.push(*vertex);
            (unique.len() - 1) as u32
        });
        indices.push(index);
    }

    IndexedMesh { vertices: unique, indices }
}

/// Deduplicate a vertex stream using a caller-provided key
///
/// Vertices with equal keys merge into the first one seen.
pub fn build_indexed_mesh_by_key<V, K, F>(vertices: &[V], mut key_fn: F) -> IndexedMesh<V>
where
    V: Clone,
    K: Eq + Hash,
    F: FnMut(&V) -> K,
{
    debug_assert!(vertices.len() <= u32::MAX as usize);

    let mut lookup: FxHashMap<K, u32> = FxHashMap::default();
    let mut unique = Vec::new();
    let mut indices = Vec::with_capacity(vertices.len());

    for vertex in vertices {
        let index = *lookup.entry(key_fn(vertex)).or_insert_with(|| {
            unique.push(vertex.clone());
            (unique.len() - 1) as u32
        });
        indices.push(index);
    }

    IndexedMesh { vertices: unique, indices }
}

/// Indices `0..count`, for vertex streams already known to be unique
pub fn generate_trivial_indices(count: u32) -> Vec<u32> {
    (0..count).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "indexing_tests.rs"]
mod tests;
