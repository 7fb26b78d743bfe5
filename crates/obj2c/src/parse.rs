//! Line-oriented parser for the triangulated OBJ subset.
//!
//! Recognizes three record tags: `v` (position), `vt` (texture coordinate),
//! and `f` (triangular face with `position/texcoord` corners). Anything else
//! is skipped. The parser is a pure function of its input stream and owns no
//! state after returning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, ConvertResult};
use crate::types::{Corner, FaceRecord, ObjData, Position, TexCoord};

/// Parse an OBJ file from disk.
pub fn parse_obj_file(path: &Path) -> ConvertResult<ObjData> {
    let file = File::open(path).map_err(|e| ConvertError::IoRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let data = parse_obj(BufReader::new(file), Some(path))?;
    Ok(data)
}

/// Parse OBJ records from any buffered reader.
///
/// `path` is only used to attribute I/O errors; pass `None` for in-memory
/// sources. Malformed `v`/`vt`/`f` records are fatal and carry the 1-based
/// line number of the offending record.
pub fn parse_obj<R: BufRead>(reader: R, path: Option<&Path>) -> ConvertResult<ObjData> {
    let mut data = ObjData::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ConvertError::IoRead {
            path: path.map(Path::to_path_buf).unwrap_or_default(),
            source: e,
        })?;
        let line_no = line_idx + 1;

        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => data.positions.push(parse_position(fields, line_no)?),
            Some("vt") => data.texcoords.push(parse_texcoord(fields, line_no)?),
            Some("f") => data.faces.push(parse_face(fields, line_no)?),
            // Comments, object names, normals, materials: not our problem.
            Some(_) | None => {}
        }
    }

    debug!(
        "Parsed {} positions, {} texcoords, {} faces",
        data.position_count(),
        data.texcoord_count(),
        data.face_count()
    );

    Ok(data)
}

fn parse_position<'a>(
    mut fields: impl Iterator<Item = &'a str>,
    line: usize,
) -> ConvertResult<Position> {
    let x = parse_float(fields.next(), "x", line)?;
    let y = parse_float(fields.next(), "y", line)?;
    let z = parse_float(fields.next(), "z", line)?;
    Ok(Position::new(x, y, z))
}

fn parse_texcoord<'a>(
    mut fields: impl Iterator<Item = &'a str>,
    line: usize,
) -> ConvertResult<TexCoord> {
    let u = parse_float(fields.next(), "u", line)?;
    let v = parse_float(fields.next(), "v", line)?;
    Ok(TexCoord::new(u, v))
}

fn parse_face<'a>(
    mut fields: impl Iterator<Item = &'a str>,
    line: usize,
) -> ConvertResult<FaceRecord> {
    let mut corners = [Corner {
        position: 0,
        texcoord: 0,
    }; 3];

    for corner in &mut corners {
        let field = fields.next().ok_or_else(|| ConvertError::Parse {
            line,
            details: "face record needs exactly 3 corners".to_string(),
        })?;
        *corner = parse_corner(field, line)?;
    }

    if fields.next().is_some() {
        return Err(ConvertError::Parse {
            line,
            details: "face has more than 3 corners; triangulate the mesh on export".to_string(),
        });
    }

    Ok(FaceRecord { corners })
}

/// Parse one `position/texcoord` corner, converting 1-based to 0-based.
fn parse_corner(field: &str, line: usize) -> ConvertResult<Corner> {
    let (pos_str, tex_str) = field.split_once('/').ok_or_else(|| ConvertError::Parse {
        line,
        details: format!("corner '{field}' is not of the form position/texcoord"),
    })?;

    let position = parse_index(pos_str, field, line)?;
    let texcoord = parse_index(tex_str, field, line)?;
    Ok(Corner { position, texcoord })
}

fn parse_index(s: &str, field: &str, line: usize) -> ConvertResult<usize> {
    let raw: i64 = s.parse().map_err(|_| ConvertError::Parse {
        line,
        details: format!("corner '{field}' has a non-numeric index '{s}'"),
    })?;
    if raw < 1 {
        return Err(ConvertError::Parse {
            line,
            details: format!("corner '{field}' index {raw} is not 1-based"),
        });
    }
    Ok((raw - 1) as usize)
}

fn parse_float(field: Option<&str>, name: &str, line: usize) -> ConvertResult<f64> {
    let field = field.ok_or_else(|| ConvertError::Parse {
        line,
        details: format!("missing {name} component"),
    })?;
    let value: f64 = field.parse().map_err(|_| ConvertError::Parse {
        line,
        details: format!("invalid {name} component '{field}'"),
    })?;
    // NaN breaks field-wise equality downstream and infinities have no
    // sensible fixed-point rendering, so neither is accepted.
    if !value.is_finite() {
        return Err(ConvertError::Parse {
            line,
            details: format!("{name} component '{field}' is not a finite number"),
        });
    }
    Ok(value)
}
