//! Error types for mapalgebra

use thiserror::Error;

/// Main error type for mapalgebra operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid raster dimensions: {rows}x{cols} cannot hold {len} cells")]
    InvalidDimensions { rows: usize, cols: usize, len: usize },

    #[error("Index out of bounds: ({row}, {col}) in raster of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Raster size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch { er: usize, ec: usize, ar: usize, ac: usize },

    /// A multi-raster operation was handed no rasters at all.
    #[error("Precondition violated: {operation} requires at least one raster")]
    EmptyCollection { operation: &'static str },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for mapalgebra operations
pub type Result<T> = std::result::Result<T, Error>;
