//! Error types for OBJ conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Which index stream a face corner referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Position,
    TexCoord,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::Position => write!(f, "position"),
            IndexKind::TexCoord => write!(f, "texture coordinate"),
        }
    }
}

/// Errors that can occur during conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Error reading the input file.
    #[error("failed to read {path}: {source}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the output file.
    #[error("failed to write {path}: {source}")]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed record in the input text.
    #[error("parse error at line {line}: {details}")]
    Parse { line: usize, details: String },

    /// A face corner references an index past the end of its stream.
    #[error(
        "face {face}, corner {corner}: {kind} index {index} out of range (have {count} entries)"
    )]
    IndexOutOfRange {
        face: usize,
        corner: usize,
        kind: IndexKind,
        index: usize,
        count: usize,
    },
}
