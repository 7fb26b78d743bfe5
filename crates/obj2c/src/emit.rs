//! C array-literal emitter.
//!
//! Writes the four arrays the target pipeline consumes: `vertices` (positions
//! with a constant homogeneous 1.0), `points` (flat triangle indices),
//! `coordinates` (UVs padded to four components), and `colours` (constant
//! white). The layout is fixed and the output is byte-stable across runs:
//! same input, same bytes.

use std::io::Write;

use crate::types::ExpandedMesh;

/// Separator after each element: a comma everywhere but the last line.
fn sep(index: usize, count: usize) -> &'static str {
    if index + 1 == count {
        ""
    } else {
        ","
    }
}

/// Write the expanded mesh as C array literals.
pub fn write_arrays<W: Write>(writer: &mut W, mesh: &ExpandedMesh) -> std::io::Result<()> {
    let vertex_count = mesh.vertex_count();
    let point_count = mesh.face_count() * 3;

    // Positions, fourth component fixed at 1.0.
    writeln!(writer, "int vertex_count = {vertex_count};")?;
    writeln!(writer, "VECTOR vertices[{vertex_count}] = {{")?;
    for (i, vertex) in mesh.vertices.iter().enumerate() {
        writeln!(
            writer,
            "  {{ {:.2}f, {:.2}f, {:.2}f, 1.00f }}{}",
            vertex.position.x,
            vertex.position.y,
            vertex.position.z,
            sep(i, vertex_count)
        )?;
    }
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    // Triangle corner indices, one face per line.
    writeln!(writer, "int points_count = {point_count};")?;
    writeln!(writer, "int points[{point_count}] = {{")?;
    for (i, face) in mesh.faces.iter().enumerate() {
        writeln!(
            writer,
            "  {}, {}, {}{}",
            face[0],
            face[1],
            face[2],
            sep(i, mesh.face_count())
        )?;
    }
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    // UVs (v already flipped during expansion), padded with two zeros.
    writeln!(writer, "VECTOR coordinates[{vertex_count}] = {{")?;
    for (i, vertex) in mesh.vertices.iter().enumerate() {
        writeln!(
            writer,
            "  {{ {:.6}f, {:.6}f, 0.00f, 0.00f }}{}",
            vertex.uv.x,
            vertex.uv.y,
            sep(i, vertex_count)
        )?;
    }
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    // Per-vertex colours, all white.
    writeln!(writer, "VECTOR colours[{vertex_count}] = {{")?;
    for i in 0..vertex_count {
        writeln!(
            writer,
            "  {{ 1.00f, 1.00f, 1.00f, 1.00f }}{}",
            sep(i, vertex_count)
        )?;
    }
    writeln!(writer, "}};")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Position, TexCoord, UnifiedVertex};

    fn triangle_mesh() -> ExpandedMesh {
        let mut mesh = ExpandedMesh::default();
        mesh.vertices.push(UnifiedVertex {
            position: Position::new(0.0, 0.0, 0.0),
            uv: TexCoord::new(0.0, 1.0),
        });
        mesh.vertices.push(UnifiedVertex {
            position: Position::new(1.0, 0.0, 0.0),
            uv: TexCoord::new(1.0, 1.0),
        });
        mesh.vertices.push(UnifiedVertex {
            position: Position::new(0.0, 1.0, 0.0),
            uv: TexCoord::new(0.0, 0.0),
        });
        mesh.faces.push([0, 1, 2]);
        mesh
    }

    fn emit(mesh: &ExpandedMesh) -> String {
        let mut buf = Vec::new();
        write_arrays(&mut buf, mesh).expect("write to Vec cannot fail");
        String::from_utf8(buf).expect("output is ASCII")
    }

    #[test]
    fn test_triangle_layout_is_exact() {
        let expected = "\
int vertex_count = 3;
VECTOR vertices[3] = {
  { 0.00f, 0.00f, 0.00f, 1.00f },
  { 1.00f, 0.00f, 0.00f, 1.00f },
  { 0.00f, 1.00f, 0.00f, 1.00f }
};

int points_count = 3;
int points[3] = {
  0, 1, 2
};

VECTOR coordinates[3] = {
  { 0.000000f, 1.000000f, 0.00f, 0.00f },
  { 1.000000f, 1.000000f, 0.00f, 0.00f },
  { 0.000000f, 0.000000f, 0.00f, 0.00f }
};

VECTOR colours[3] = {
  { 1.00f, 1.00f, 1.00f, 1.00f },
  { 1.00f, 1.00f, 1.00f, 1.00f },
  { 1.00f, 1.00f, 1.00f, 1.00f }
};
";
        assert_eq!(emit(&triangle_mesh()), expected);
    }

    #[test]
    fn test_trailing_comma_only_between_elements() {
        let mut mesh = triangle_mesh();
        mesh.faces.push([2, 1, 0]);
        let text = emit(&mesh);

        // Both faces present, comma after the first line only.
        assert!(text.contains("  0, 1, 2,\n  2, 1, 0\n};"));
        // No element line directly before a closing brace ends with a comma.
        for window in text.lines().collect::<Vec<_>>().windows(2) {
            if window[1] == "};" {
                assert!(!window[0].ends_with(','), "dangling comma: {}", window[0]);
            }
        }
    }

    #[test]
    fn test_position_precision_is_two_decimals() {
        let mut mesh = ExpandedMesh::default();
        mesh.vertices.push(UnifiedVertex {
            position: Position::new(1.005, -2.5, 0.125),
            uv: TexCoord::new(0.333333333, 0.1),
        });
        mesh.faces.push([0, 0, 0]);
        let text = emit(&mesh);

        assert!(text.contains("{ 1.00f, -2.50f, 0.12f, 1.00f }"), "{text}");
        assert!(text.contains("{ 0.333333f, 0.100000f, 0.00f, 0.00f }"), "{text}");
    }

    #[test]
    fn test_empty_mesh_emits_empty_arrays() {
        let text = emit(&ExpandedMesh::default());
        assert!(text.starts_with("int vertex_count = 0;\nVECTOR vertices[0] = {\n};\n"));
        assert!(text.contains("int points_count = 0;"));
    }

    #[test]
    fn test_emission_is_byte_stable() {
        let mesh = triangle_mesh();
        assert_eq!(emit(&mesh), emit(&mesh));
    }
}
