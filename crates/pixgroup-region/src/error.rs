//! Error types for pixgroup-region

use thiserror::Error;

/// Errors that can occur during region filling and grouping
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixgroup_core::Error),

    /// Interior fill needs a real polygon
    #[error(
        "insufficient geometry: {boundary} boundary pixels and {vertices} vertices (need at least 3 of each)"
    )]
    InsufficientGeometry { boundary: usize, vertices: usize },

    /// The fill seed sits on the outline, so the shape is too thin to fill
    #[error("degenerate shape: fill seed ({x}, {y}) lies on the boundary")]
    DegenerateShape { x: i32, y: i32 },

    /// The fill seed lies outside the closed outline
    #[error("fill from ({x}, {y}) escaped the boundary")]
    FillEscaped { x: i32, y: i32 },

    /// Seed position outside the canvas
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: i32, y: i32 },

    /// Pixel outside the canvas presented to the store
    #[error("pixel ({x}, {y}) is outside the canvas")]
    OutOfCanvas { x: i32, y: i32 },
}

impl RegionError {
    /// True for fill failures the caller recovers from by committing the
    /// boundary alone.
    pub fn is_fill_fallback(&self) -> bool {
        matches!(
            self,
            RegionError::InsufficientGeometry { .. }
                | RegionError::DegenerateShape { .. }
                | RegionError::FillEscaped { .. }
        )
    }
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
