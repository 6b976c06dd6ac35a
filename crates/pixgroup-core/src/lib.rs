//! pixgroup-core - Basic data structures for the pixel-grouping engine
//!
//! This crate provides the fundamental types shared by the rest of the
//! workspace:
//!
//! - [`Pixel`] / [`Vertex`] / [`PixelSet`] - Integer and real coordinates
//! - [`Canvas`] - Drawable bounds
//! - [`Rgb`] / [`Palette`] - Group colors
//! - [`ColorBuffer`] - Dense per-cell color cache read by renderers
//! - [`CanvasConfig`] - Size, palette and brightness settings
//! - [`raster`] - Polyline rasterization
//! - [`shape`] - Vertex outlines of stamped shapes
//!
//! # Example
//!
//! ```
//! use pixgroup_core::{Pixel, Vertex, rasterize};
//!
//! let line = rasterize(&[Vertex::new(0.0, 0.0), Vertex::new(3.0, 0.0)], false);
//! assert_eq!(line.len(), 4);
//! assert!(line.contains(&Pixel::new(2, 0)));
//! ```

pub mod buffer;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod pixel;
pub mod raster;
pub mod shape;

pub use buffer::ColorBuffer;
pub use canvas::Canvas;
pub use color::{DEFAULT_COLOR_WHEEL, Palette, Rgb};
pub use config::CanvasConfig;
pub use error::{Error, Result};
pub use pixel::{Pixel, PixelSet, Vertex, bounding_box, centroid};
pub use raster::{rasterize, rasterize_clipped, rasterize_segment};
pub use shape::{ShapeKind, shape_vertices};
