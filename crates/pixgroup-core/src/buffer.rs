//! ColorBuffer - dense per-cell RGB cache of the canvas
//!
//! One [`Rgb`] per canvas cell in row-major order. Occupied cells hold
//! their group's palette color and every other cell holds [`Rgb::BLACK`].
//! Renderers read this buffer verbatim.

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::Result;
use crate::pixel::Pixel;

/// Dense W×H RGB buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorBuffer {
    canvas: Canvas,
    data: Vec<Rgb>,
}

impl ColorBuffer {
    /// Create an all-background buffer covering `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            data: vec![Rgb::BLACK; canvas.area()],
        }
    }

    #[inline]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Color at `p`, or `None` when off canvas.
    #[inline]
    pub fn get(&self, p: Pixel) -> Option<Rgb> {
        self.canvas.index_of(p).map(|i| self.data[i])
    }

    /// Set the color at `p`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PixelOutOfBounds`] when `p` is off canvas.
    pub fn set(&mut self, p: Pixel, color: Rgb) -> Result<()> {
        let i = self
            .canvas
            .index_of(p)
            .ok_or_else(|| self.canvas.out_of_bounds(p))?;
        self.data[i] = color;
        Ok(())
    }

    /// Reset `p` to the background color.
    pub fn clear_pixel(&mut self, p: Pixel) -> Result<()> {
        self.set(p, Rgb::BLACK)
    }

    /// Reset every cell to the background color.
    pub fn clear(&mut self) {
        self.data.fill(Rgb::BLACK);
    }

    /// Number of non-background cells.
    pub fn occupied_count(&self) -> usize {
        self.data.iter().filter(|c| !c.is_black()).count()
    }

    /// Iterate `(pixel, color)` over non-background cells.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (Pixel, Rgb)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_black())
            .map(|(i, c)| (self.canvas.pixel_at(i), *c))
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[Rgb] {
        &self.data
    }

    /// Mutable row-major cells.
    pub fn cells_mut(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    /// Packed `RGBRGB...` bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for c in &self.data {
            bytes.extend_from_slice(&c.to_array());
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut buf = ColorBuffer::new(Canvas::new(3, 2).unwrap());
        assert_eq!(buf.occupied_count(), 0);

        buf.set(Pixel::new(2, 1), Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(buf.get(Pixel::new(2, 1)), Some(Rgb::new(1, 2, 3)));
        assert_eq!(buf.occupied_count(), 1);
        assert_eq!(
            buf.iter_occupied().collect::<Vec<_>>(),
            vec![(Pixel::new(2, 1), Rgb::new(1, 2, 3))]
        );

        buf.clear_pixel(Pixel::new(2, 1)).unwrap();
        assert_eq!(buf.occupied_count(), 0);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut buf = ColorBuffer::new(Canvas::new(3, 2).unwrap());
        assert!(buf.set(Pixel::new(3, 0), Rgb::new(1, 1, 1)).is_err());
        assert_eq!(buf.get(Pixel::new(-1, 0)), None);
    }

    #[test]
    fn test_rgb_bytes_layout() {
        let mut buf = ColorBuffer::new(Canvas::new(2, 1).unwrap());
        buf.set(Pixel::new(1, 0), Rgb::new(9, 8, 7)).unwrap();
        assert_eq!(buf.to_rgb_bytes(), vec![0, 0, 0, 9, 8, 7]);
    }
}
