//! Per-vertex attribute accumulation.
//!
//! Smooth normals and tangent/bitangent frames are built the same way: every
//! triangle adds an unnormalized face vector to its three corners, and the
//! sums are normalized once all triangles have been visited. Larger faces
//! therefore weigh more. Vertices no triangle touches stay at zero.
//!
//! Degenerate input is expected and never fails the pass:
//! - zero-area triangles contribute a zero vector
//! - triangles with a singular UV mapping are skipped
//! - triangles referencing a missing vertex are skipped
//! - a trailing partial triangle is ignored

use glam::{Vec2, Vec3};
use crate::engine_bail;
use crate::error::Result;

const SOURCE: &str = "glint::Attributes";

/// Per-vertex tangents and bitangents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TangentFrames {
    pub tangents: Vec<Vec3>,
    pub bitangents: Vec<Vec3>,
}

/// Visit every complete triangle whose corners are all `< vertex_count`
///
/// Skipped triangles and a trailing remainder are reported once at WARN.
fn for_each_triangle<F>(triangle_indices: &[u32], vertex_count: usize, mut visit: F)
where
    F: FnMut([usize; 3]),
{
    let triangles = triangle_indices.chunks_exact(3);
    let remainder = triangles.remainder().len();
    let mut skipped = 0usize;

    for triangle in triangles {
        let corners = [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize];
        if corners.iter().any(|&corner| corner >= vertex_count) {
            skipped += 1;
            continue;
        }
        visit(corners);
    }

    if skipped > 0 {
        crate::engine_warn!(SOURCE,
            "Skipped {} triangles referencing vertices beyond {}", skipped, vertex_count);
    }
    if remainder > 0 {
        crate::engine_warn!(SOURCE,
            "Ignored {} trailing indices (index count {} is not a multiple of 3)",
            remainder, triangle_indices.len());
    }
}

// ============================================================================
// NORMALS
// ============================================================================

/// Area-weighted smooth normals, one per position
///
/// # Example
///
/// ```
/// use glint_core::glam::Vec3;
/// use glint_core::glint::mesh::compute_smooth_normals;
///
/// let positions = [Vec3::ZERO, Vec3::X, Vec3::Y];
/// let normals = compute_smooth_normals(&positions, &[0, 1, 2]);
/// assert_eq!(normals, vec![Vec3::Z; 3]);
/// ```
pub fn compute_smooth_normals(positions: &[Vec3], triangle_indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for_each_triangle(triangle_indices, positions.len(), |[a, b, c]| {
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        if !face.is_finite() {
            return;
        }
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    });

    for normal in &mut normals {
        *normal = normal.normalize_or_zero();
    }
    normals
}

// ============================================================================
// TANGENTS
// ============================================================================

/// Face tangent and bitangent from the triangle's UV gradients
///
/// Returns `None` for a singular UV mapping or a non-finite result.
fn face_tangent_bitangent(p: [Vec3; 3], uv: [Vec2; 3]) -> Option<(Vec3, Vec3)> {
    let edge1 = p[1] - p[0];
    let edge2 = p[2] - p[0];
    let duv1 = uv[1] - uv[0];
    let duv2 = uv[2] - uv[0];

    let det = duv1.x * duv2.y - duv2.x * duv1.y;
    if det == 0.0 {
        return None;
    }
    let r = 1.0 / det;
    if !r.is_finite() {
        return None;
    }

    let tangent = (edge1 * duv2.y - edge2 * duv1.y) * r;
    let bitangent = (edge2 * duv1.x - edge1 * duv2.x) * r;
    if !tangent.is_finite() || !bitangent.is_finite() {
        return None;
    }
    Some((tangent, bitangent))
}

/// Gram-Schmidt the accumulated tangent against the vertex normal
///
/// Falls back to the plain normalized tangent when there is no usable
/// normal or the tangent is parallel to it.
fn finalize_tangent(tangent: Vec3, normal: Vec3) -> Vec3 {
    let normal = normal.normalize_or_zero();
    if normal == Vec3::ZERO {
        return tangent.normalize_or_zero();
    }
    (tangent - normal * normal.dot(tangent))
        .try_normalize()
        .unwrap_or_else(|| tangent.normalize_or_zero())
}

/// Per-vertex tangent frames for normal mapping
///
/// `normals` and `uvs` are indexed like `positions`. A triangle needs a UV
/// for each corner; missing normals only disable orthogonalization.
/// Both output vectors have `positions.len()` entries.
pub fn compute_tangents_bitangents(
    positions: &[Vec3],
    normals: &[Vec3],
    uvs: &[Vec2],
    triangle_indices: &[u32],
) -> TangentFrames {
    let mut tangents = vec![Vec3::ZERO; positions.len()];
    let mut bitangents = vec![Vec3::ZERO; positions.len()];
    let mut singular = 0usize;

    let vertex_count = positions.len().min(uvs.len());
    for_each_triangle(triangle_indices, vertex_count, |[a, b, c]| {
        let Some((tangent, bitangent)) = face_tangent_bitangent(
            [positions[a], positions[b], positions[c]],
            [uvs[a], uvs[b], uvs[c]],
        ) else {
            singular += 1;
            return;
        };
        for corner in [a, b, c] {
            tangents[corner] += tangent;
            bitangents[corner] += bitangent;
        }
    });

    if singular > 0 {
        crate::engine_debug!(SOURCE, "Skipped {} triangles with degenerate UV mapping", singular);
    }

    for (index, tangent) in tangents.iter_mut().enumerate() {
        let normal = normals.get(index).copied().unwrap_or(Vec3::ZERO);
        *tangent = finalize_tangent(*tangent, normal);
    }
    for bitangent in &mut bitangents {
        *bitangent = bitangent.normalize_or_zero();
    }

    TangentFrames { tangents, bitangents }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Reject index lists that are not a well-formed triangle list
///
/// The accumulation functions tolerate such input; this is for callers that
/// want misuse reported instead of silently skipped.
pub fn validate_triangle_indices(triangle_indices: &[u32], vertex_count: usize) -> Result<()> {
    if triangle_indices.len() % 3 != 0 {
        engine_bail!(InvalidMesh => SOURCE,
            "Index count {} is not a multiple of 3", triangle_indices.len());
    }
    if let Some(position) = triangle_indices
        .iter()
        .position(|&index| index as usize >= vertex_count)
    {
        engine_bail!(InvalidMesh => SOURCE,
            "Index {} at position {} is out of range (vertex count: {})",
            triangle_indices[position], position, vertex_count);
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "attributes_tests.rs"]
mod tests;
