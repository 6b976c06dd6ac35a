//! Canvas bounds
//!
//! The drawable area is the half-open rectangle `[0, width) × [0, height)`.

use crate::error::{Error, Result};
use crate::pixel::{Pixel, Vertex};

/// Canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either side is zero or larger
    /// than `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells on the canvas.
    #[inline]
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True if the pixel lies on the canvas.
    #[inline]
    pub fn contains(&self, p: Pixel) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Row-major buffer index of a pixel, or `None` when off canvas.
    #[inline]
    pub fn index_of(&self, p: Pixel) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Pixel at a row-major buffer index.
    #[inline]
    pub fn pixel_at(&self, index: usize) -> Pixel {
        let w = self.width as usize;
        Pixel::new((index % w) as i32, (index / w) as i32)
    }

    /// Nearest on-canvas pixel.
    pub fn clamp(&self, p: Pixel) -> Pixel {
        Pixel::new(
            p.x.clamp(0, self.width as i32 - 1),
            p.y.clamp(0, self.height as i32 - 1),
        )
    }

    /// Clamp a vertex into `[0, width - 1] × [0, height - 1]`.
    pub fn clamp_vertex(&self, v: Vertex) -> Vertex {
        Vertex::new(
            v.x.clamp(0.0, (self.width - 1) as f64),
            v.y.clamp(0.0, (self.height - 1) as f64),
        )
    }

    /// Clip segment `a`-`b` to `[0, width - 1] × [0, height - 1]`.
    ///
    /// Liang-Barsky parametric clipping. Returns `None` when the segment
    /// misses the canvas or has a non-finite coordinate. The endpoints keep
    /// the direction of the input.
    pub fn clip_segment(&self, a: Vertex, b: Vertex) -> Option<(Vertex, Vertex)> {
        if ![a.x, a.y, b.x, b.y].iter().all(|v| v.is_finite()) {
            return None;
        }
        let xmax = (self.width - 1) as f64;
        let ymax = (self.height - 1) as f64;
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let (mut t0, mut t1) = (0.0f64, 1.0f64);

        for (p, q) in [(-dx, a.x), (dx, xmax - a.x), (-dy, a.y), (dy, ymax - a.y)] {
            if p == 0.0 {
                // Parallel to this edge: inside or entirely outside.
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let at = |t: f64| self.clamp_vertex(Vertex::new(a.x + t * dx, a.y + t * dy));
        let start = if t0 > 0.0 { at(t0) } else { a };
        let end = if t1 < 1.0 { at(t1) } else { b };
        Some((start, end))
    }

    /// Error describing `p` as off canvas.
    pub fn out_of_bounds(&self, p: Pixel) -> Error {
        Error::PixelOutOfBounds {
            x: p.x,
            y: p.y,
            width: self.width,
            height: self.height,
        }
    }
}
