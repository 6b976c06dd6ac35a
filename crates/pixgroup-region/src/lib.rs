//! pixgroup-region - Region filling and pixel grouping
//!
//! This crate provides:
//!
//! - **Interior fill** - Breadth-first fill of a closed outline from its
//!   vertex centroid
//! - **Flood fill** - Paint-bucket expansion bounded by painted pixels and
//!   the canvas edge
//! - **Grouping store** - Incremental union-find over pixels that fuses
//!   touching shapes into colored groups
//!
//! # Examples
//!
//! ## Fusing two touching shapes
//!
//! ```
//! use pixgroup_core::{Pixel, PixelSet};
//! use pixgroup_region::GroupingStore;
//!
//! let mut store = GroupingStore::with_size(20, 20).unwrap();
//! let a: PixelSet = [Pixel::new(2, 2), Pixel::new(3, 2)].into_iter().collect();
//! let b: PixelSet = [Pixel::new(5, 2)].into_iter().collect();
//!
//! store.commit_pixel_set(&a).unwrap();
//! store.commit_pixel_set(&b).unwrap();
//!
//! assert_eq!(store.group_count(), 1);
//! assert_eq!(store.group_of(Pixel::new(2, 2)), store.group_of(Pixel::new(5, 2)));
//! ```
//!
//! ## Filling a polygon
//!
//! ```
//! use pixgroup_core::{Vertex, rasterize};
//! use pixgroup_region::fill_interior;
//!
//! let square = [
//!     Vertex::new(0.0, 0.0),
//!     Vertex::new(4.0, 0.0),
//!     Vertex::new(4.0, 4.0),
//!     Vertex::new(0.0, 4.0),
//! ];
//! let outline = rasterize(&square, true);
//! let filled = fill_interior(&outline, &square).unwrap();
//! assert_eq!(filled.len(), 25);
//! ```

pub mod error;
pub mod fill;
pub mod grouping;

// Re-export core types
pub use pixgroup_core;

pub use error::{RegionError, RegionResult};
pub use fill::{Occupancy, fill_interior, flood_fill};
pub use grouping::{CommitSummary, GroupId, GroupingStore};
