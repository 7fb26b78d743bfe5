//! Core data types for the OBJ conversion pipeline.

use nalgebra::{Point2, Point3};

/// A 3D position on the mesh surface.
pub type Position = Point3<f64>;

/// A 2D texture coordinate (u, v).
pub type TexCoord = Point2<f64>;

/// One corner of a face: a position index paired with a texcoord index.
///
/// Indices are 0-based into [`ObjData::positions`] and [`ObjData::texcoords`];
/// the 1-based indices from the source text are converted once at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    pub position: usize,
    pub texcoord: usize,
}

/// A triangular face as three corners, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRecord {
    pub corners: [Corner; 3],
}

/// Parsed OBJ content: the three independently-indexed streams.
#[derive(Debug, Clone, Default)]
pub struct ObjData {
    pub positions: Vec<Position>,
    pub texcoords: Vec<TexCoord>,
    pub faces: Vec<FaceRecord>,
}

impl ObjData {
    /// Create empty OBJ data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of positions.
    #[inline]
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of texture coordinates.
    #[inline]
    pub fn texcoord_count(&self) -> usize {
        self.texcoords.len()
    }

    /// Number of faces (triangles).
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// A deduplicated (position, UV) pair.
///
/// The UV is stored with the v-axis already flipped (`v' = 1 - v`) to match
/// the target pipeline's texture convention. No two entries of an expanded
/// mesh's vertex list are field-wise equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnifiedVertex {
    pub position: Position,
    pub uv: TexCoord,
}

/// The expansion result: a unified vertex stream plus re-indexed faces.
///
/// Each face is `[v0, v1, v2]` indexing into `vertices`, corner order
/// preserved from the source face.
#[derive(Debug, Clone, Default)]
pub struct ExpandedMesh {
    pub vertices: Vec<UnifiedVertex>,
    pub faces: Vec<[u32; 3]>,
}

impl ExpandedMesh {
    /// Number of unified vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces (triangles).
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices or faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }
}
