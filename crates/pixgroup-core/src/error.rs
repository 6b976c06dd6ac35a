//! Error types for pixgroup-core
//!
//! Provides a unified error type for the geometry, canvas and buffer
//! types in the core crate. Each variant carries enough context for
//! diagnostics.

use thiserror::Error;

/// pixgroup-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid canvas dimensions
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A palette must hold at least one color
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// Black is reserved for the background
    #[error("palette entry {index} is black, which is reserved for the background")]
    BlackPaletteEntry { index: usize },

    /// Pixel coordinate outside the canvas
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    PixelOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for pixgroup-core operations
pub type Result<T> = std::result::Result<T, Error>;
