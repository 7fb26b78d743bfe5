//! Vertex deduplication and face re-indexing.
//!
//! OBJ faces index positions and texture coordinates independently; the
//! target pipeline wants a single vertex stream. Expansion walks the faces
//! in order and builds a unified list where each distinct (position, UV)
//! pair appears exactly once, re-expressing every face as indices into it.

use hashbrown::HashMap;
use tracing::debug;

use crate::error::{ConvertError, ConvertResult, IndexKind};
use crate::types::{ExpandedMesh, ObjData, TexCoord, UnifiedVertex};

/// Hash key for a unified vertex: the exact bit patterns of its components.
///
/// Key equality must agree with field-wise `==` on the floats, so `-0.0` is
/// normalized to `0.0` before taking bits (`-0.0 + 0.0` is `+0.0` in IEEE
/// round-to-nearest). NaN components cannot reach this point: the parser
/// rejects non-finite floats.
type VertexKey = [u64; 5];

fn vertex_key(vertex: &UnifiedVertex) -> VertexKey {
    let bits = |c: f64| (c + 0.0).to_bits();
    [
        bits(vertex.position.x),
        bits(vertex.position.y),
        bits(vertex.position.z),
        bits(vertex.uv.x),
        bits(vertex.uv.y),
    ]
}

/// Expand parsed OBJ data into a unified vertex stream plus re-indexed faces.
///
/// Vertices appear in first-discovery order: faces in original order, corners
/// in order 0,1,2. The v-axis of each texture coordinate is flipped
/// (`v' = 1 - v`) here, at the point of use, since the flip is a property of
/// the target pipeline rather than of the source format. Inputs are not
/// mutated.
///
/// A corner index past the end of its stream is a fatal
/// [`ConvertError::IndexOutOfRange`].
pub fn expand(data: &ObjData) -> ConvertResult<ExpandedMesh> {
    let mut mesh = ExpandedMesh::default();
    let mut lookup: HashMap<VertexKey, u32> = HashMap::new();

    for (face_idx, face) in data.faces.iter().enumerate() {
        let mut expanded = [0u32; 3];

        for (corner_idx, corner) in face.corners.iter().enumerate() {
            let position = *data.positions.get(corner.position).ok_or_else(|| {
                ConvertError::IndexOutOfRange {
                    face: face_idx,
                    corner: corner_idx,
                    kind: IndexKind::Position,
                    index: corner.position,
                    count: data.positions.len(),
                }
            })?;
            let raw_uv = *data.texcoords.get(corner.texcoord).ok_or_else(|| {
                ConvertError::IndexOutOfRange {
                    face: face_idx,
                    corner: corner_idx,
                    kind: IndexKind::TexCoord,
                    index: corner.texcoord,
                    count: data.texcoords.len(),
                }
            })?;

            let candidate = UnifiedVertex {
                position,
                uv: TexCoord::new(raw_uv.x, 1.0 - raw_uv.y),
            };

            let index = *lookup
                .entry(vertex_key(&candidate))
                .or_insert_with(|| {
                    let index = mesh.vertices.len() as u32;
                    mesh.vertices.push(candidate);
                    index
                });
            expanded[corner_idx] = index;
        }

        mesh.faces.push(expanded);
    }

    debug!(
        "Expanded {} faces into {} unified vertices ({} corners total)",
        mesh.face_count(),
        mesh.vertex_count(),
        mesh.face_count() * 3
    );

    Ok(mesh)
}
