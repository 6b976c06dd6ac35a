//! Pixel and Vertex - integer and real-valued canvas coordinates
//!
//! A [`Pixel`] is an exact integer cell on the canvas. A [`Vertex`] is the
//! real-valued geometric input a shape is described with before it is
//! rasterized. A [`PixelSet`] is the deduplicated bag of pixels passed
//! between the rasterizer, the region filler and the grouping store.

use std::collections::HashSet;
use std::fmt;

/// Unordered, deduplicated collection of pixels.
pub type PixelSet = HashSet<Pixel>;

/// Integer canvas coordinate.
///
/// Equality and hashing are exact; `x` grows to the right and `y` grows
/// downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    /// Create a new pixel
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel displaced by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four 4-connected neighbors, in the order right, left, down, up.
    #[inline]
    pub fn neighbors4(self) -> [Pixel; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Pixel> for (i32, i32) {
    fn from(p: Pixel) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Real-valued vertex of a shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    /// Create a new vertex
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two vertices.
    #[inline]
    pub fn midpoint(self, other: Vertex) -> Vertex {
        Vertex {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Nearest pixel, rounding halves away from zero.
    #[inline]
    pub fn to_pixel(self) -> Pixel {
        Pixel {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Pixel> for Vertex {
    fn from(p: Pixel) -> Self {
        Self {
            x: p.x as f64,
            y: p.y as f64,
        }
    }
}

/// Arithmetic mean of a vertex sequence.
///
/// Returns `None` for an empty slice.
pub fn centroid(vertices: &[Vertex]) -> Option<Vertex> {
    if vertices.is_empty() {
        return None;
    }
    let n = vertices.len() as f64;
    let (sx, sy) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
    Some(Vertex::new(sx / n, sy / n))
}

/// Inclusive bounding box `(min, max)` of a pixel set.
pub fn bounding_box(pixels: &PixelSet) -> Option<(Pixel, Pixel)> {
    let mut iter = pixels.iter();
    let first = *iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), p| {
        (
            Pixel::new(lo.x.min(p.x), lo.y.min(p.y)),
            Pixel::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}
