//! pixgroup - Pixel-grouping drawing engine
//!
//! Shapes stamped onto a pixel canvas are rasterized, optionally filled,
//! and fused with every shape they touch into a single colored group.
//!
//! # Overview
//!
//! - [`engine`] - Draw, flood-fill, erase and render over a [`GroupingStore`]
//! - [`script`] - Text command scripts driving the engine headlessly
//! - [`region`] - Interior fill, flood fill and the grouping store
//! - [`color`] - Brightness normalization
//! - [`io`] - PNG and PPM output
//!
//! # Example
//!
//! ```
//! use pixgroup::engine::{draw_shape, erase};
//! use pixgroup::{GroupingStore, Pixel, ShapeKind, Vertex};
//!
//! let mut store = GroupingStore::with_size(100, 100).unwrap();
//! let rect = ShapeKind::Rectangle;
//! draw_shape(&mut store, rect, Vertex::new(0.0, 0.0), Vertex::new(9.0, 9.0)).unwrap();
//! draw_shape(&mut store, rect, Vertex::new(9.0, 0.0), Vertex::new(18.0, 9.0)).unwrap();
//! assert_eq!(store.group_count(), 1);
//!
//! erase(&mut store, Pixel::new(3, 3)).unwrap();
//! assert!(store.is_empty());
//! ```

pub mod engine;
pub mod logging;
pub mod script;

// Re-export core types (primary data structures used everywhere)
pub use pixgroup_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixgroup_color as color;
pub use pixgroup_io as io;
pub use pixgroup_region as region;

pub use pixgroup_region::{CommitSummary, GroupId, GroupingStore, RegionError};
