//! Convert triangulated OBJ meshes into C array literals.
//!
//! Takes a Wavefront-OBJ subset (positions, texture coordinates, triangular
//! `pos/uv` faces) and produces the four arrays a fixed-function pipeline
//! consumes: a unified vertex stream where each distinct (position, UV) pair
//! appears exactly once, flat triangle indices into it, padded UVs with the
//! v-axis flipped, and constant white colours.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let summary = obj2c::convert(Path::new("model.obj"), Path::new("model.h")).unwrap();
//! println!("{} unified vertices", summary.unified_vertices);
//! ```

mod error;
mod types;

pub mod emit;
pub mod expand;
pub mod parse;

pub use error::{ConvertError, ConvertResult, IndexKind};
pub use types::{Corner, ExpandedMesh, FaceRecord, ObjData, Position, TexCoord, UnifiedVertex};

pub use emit::write_arrays;
pub use expand::expand;
pub use parse::{parse_obj, parse_obj_file};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

/// Counts reported after a successful conversion.
#[derive(Debug, Clone, Copy)]
pub struct ConvertSummary {
    /// Positions in the source file.
    pub positions: usize,
    /// Texture coordinates in the source file.
    pub texcoords: usize,
    /// Triangles in the source file.
    pub faces: usize,
    /// Vertices after deduplication.
    pub unified_vertices: usize,
}

/// Run the full pipeline: parse `input`, expand, write arrays to `output`.
///
/// The output file is only created after parsing and expansion have
/// succeeded, so a malformed input never leaves a partial output behind.
pub fn convert(input: &Path, output: &Path) -> ConvertResult<ConvertSummary> {
    let data = parse_obj_file(input)?;
    info!(
        "Loaded {:?}: {} positions, {} texcoords, {} faces",
        input,
        data.position_count(),
        data.texcoord_count(),
        data.face_count()
    );

    let mesh = expand(&data)?;
    if mesh.is_empty() {
        warn!(
            "{:?} contains no faces; output arrays will be empty",
            input
        );
    }

    let file = File::create(output).map_err(|e| ConvertError::IoWrite {
        path: output.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    write_arrays(&mut writer, &mesh).map_err(|e| ConvertError::IoWrite {
        path: output.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| ConvertError::IoWrite {
        path: output.to_path_buf(),
        source: e,
    })?;

    info!(
        "Wrote {:?}: {} unified vertices, {} triangles",
        output,
        mesh.vertex_count(),
        mesh.face_count()
    );

    Ok(ConvertSummary {
        positions: data.position_count(),
        texcoords: data.texcoord_count(),
        faces: data.face_count(),
        unified_vertices: mesh.vertex_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::{tempdir, NamedTempFile};

    /// A unit quad: two triangles sharing a diagonal, UVs matching positions.
    const QUAD_OBJ: &str = "\
# Blender-style export
o Quad
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
vt 0.0 0.0
vt 1.0 0.0
vt 1.0 1.0
vt 0.0 1.0
f 1/1 2/2 3/3
f 1/1 3/3 4/4
";

    fn write_input(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".obj").unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_convert_quad() {
        let input = write_input(QUAD_OBJ);
        let dir = tempdir().unwrap();
        let output = dir.path().join("quad.h");

        let summary = convert(input.path(), &output).expect("should convert");

        assert_eq!(summary.positions, 4);
        assert_eq!(summary.texcoords, 4);
        assert_eq!(summary.faces, 2);
        // Shared diagonal dedups 6 corners to 4 vertices.
        assert_eq!(summary.unified_vertices, 4);

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("int vertex_count = 4;"));
        assert!(text.contains("int points_count = 6;"));
        assert!(text.contains("  0, 1, 2,\n  0, 2, 3\n};"));
        // v = 0.0 in the source becomes 1.0 after the flip.
        assert!(text.contains("{ 0.000000f, 1.000000f, 0.00f, 0.00f }"));
    }

    #[test]
    fn test_convert_is_deterministic() {
        let input = write_input(QUAD_OBJ);
        let dir = tempdir().unwrap();
        let out_a = dir.path().join("a.h");
        let out_b = dir.path().join("b.h");

        convert(input.path(), &out_a).expect("should convert");
        convert(input.path(), &out_b).expect("should convert");

        assert_eq!(
            std::fs::read(&out_a).unwrap(),
            std::fs::read(&out_b).unwrap()
        );
    }

    #[test]
    fn test_convert_with_no_faces_emits_empty_arrays() {
        // Positions but no faces: still a successful (if useless) conversion.
        let input = write_input("v 0 0 0\nv 1 0 0\nvt 0 0\n");
        let dir = tempdir().unwrap();
        let output = dir.path().join("empty.h");

        let summary = convert(input.path(), &output).expect("should convert");

        assert_eq!(summary.positions, 2);
        assert_eq!(summary.faces, 0);
        assert_eq!(summary.unified_vertices, 0);

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("int vertex_count = 0;"));
        assert!(text.contains("int points_count = 0;"));
    }

    #[test]
    fn test_missing_input_is_io_read_error() {
        let dir = tempdir().unwrap();
        let err = convert(&dir.path().join("nope.obj"), &dir.path().join("out.h")).unwrap_err();
        assert!(matches!(err, ConvertError::IoRead { .. }));
    }

    #[test]
    fn test_out_of_range_face_writes_no_output() {
        // Face references position 5 with only 4 parsed: one past the end.
        let input = write_input(
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nvt 0 0\nf 1/1 2/1 5/1\n",
        );
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.h");

        let err = convert(input.path(), &output).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::IndexOutOfRange {
                kind: IndexKind::Position,
                index: 4,
                count: 4,
                ..
            }
        ));
        assert!(!output.exists(), "failed conversion must not create output");
    }

    #[test]
    fn test_unwritable_output_is_io_write_error() {
        let input = write_input(QUAD_OBJ);
        let dir = tempdir().unwrap();
        let output = dir.path().join("missing-dir").join("out.h");

        let err = convert(input.path(), &output).unwrap_err();
        assert!(matches!(err, ConvertError::IoWrite { .. }));
    }
}
