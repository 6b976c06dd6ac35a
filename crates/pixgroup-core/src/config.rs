//! Canvas configuration
//!
//! Size, palette and brightness of a drawing surface. All fields have
//! defaults, so a TOML file only needs to list what it overrides:
//!
//! ```toml
//! width = 320
//! height = 240
//! brightness = 180
//! palette = [[255, 0, 0], [0, 0, 255]]
//! ```

use crate::canvas::Canvas;
use crate::color::Palette;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 800;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 800;
/// Default color intensity for brightness normalization
pub const DEFAULT_BRIGHTNESS: u8 = 200;

/// Configuration of a drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Group colors, indexed by `group_id mod len`
    pub palette: Palette,
    /// Target intensity of occupied pixels when normalizing
    pub brightness: u8,
    /// Apply brightness normalization when rendering
    pub normalize: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            palette: Palette::default(),
            brightness: DEFAULT_BRIGHTNESS,
            normalize: false,
        }
    }
}

impl CanvasConfig {
    /// Default configuration with the given canvas size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the canvas size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the normalization brightness
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Enable or disable brightness normalization on render
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Canvas bounds described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimension`] for a zero-sized canvas.
    pub fn canvas(&self) -> Result<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Check that the configuration describes a usable canvas.
    pub fn validate(&self) -> Result<()> {
        self.canvas()?;
        Ok(())
    }
}
