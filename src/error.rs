//! Error types shared by every stage of the texture pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building or rendering a recurrence texture.
#[derive(Debug, Error)]
pub enum TextureError {
    /// Dimension/delay leave no complete delay vector for the series.
    #[error(
        "invalid embedding parameters: series of length {len} has no rows for dimension {dimension} and delay {delay}"
    )]
    InvalidEmbeddingParameters {
        len: usize,
        dimension: usize,
        delay: usize,
    },

    /// A row (or flat buffer) does not have the expected length.
    #[error("invalid shape at row {row}: expected length {expected}, got {actual}")]
    InvalidShape {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A matrix that must be square is not.
    #[error("expected a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("texture is empty: the distance matrix needs at least 3 rows")]
    EmptyTexture,

    #[error("series contains no samples")]
    EmptySeries,

    #[error("line {line}: '{token}' is not a number")]
    Parse { line: usize, token: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl TextureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TextureError>;
