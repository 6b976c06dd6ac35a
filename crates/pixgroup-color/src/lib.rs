//! pixgroup-color - Color post-processing for rendered group buffers
//!
//! This crate provides:
//!
//! - **Brightness normalization** - Rescale painted colors to a common
//!   Euclidean length while keeping their hue
//!
//! # Examples
//!
//! ```
//! use pixgroup_color::normalize_color;
//! use pixgroup_core::Rgb;
//!
//! let dimmed = normalize_color(Rgb::new(255, 51, 51), 200);
//! assert_eq!(dimmed, Rgb::new(192, 38, 38));
//! ```

pub mod error;
pub mod normalize;

// Re-export core types
pub use pixgroup_core;

pub use error::{ColorError, ColorResult};
pub use normalize::{NORMALIZE_TOLERANCE, normalize_brightness, normalize_color};
