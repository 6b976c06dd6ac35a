//! RGB colors and group palettes
//!
//! Every group is drawn in `palette[group_id mod palette.len()]`. The
//! default palette is a 13-entry color wheel built from the channel levels
//! 51, 153 and 255.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 8-bit RGB triple.
///
/// Serialized as a three-element array `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Background color of unoccupied cells
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// True for the all-zero background color.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Euclidean length of the color vector.
    pub fn magnitude(&self) -> f64 {
        let (r, g, b) = (self.r as f64, self.g as f64, self.b as f64);
        (r * r + g * g + b * b).sqrt()
    }

    /// Channels as an array.
    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

const LO: u8 = 51;
const MID: u8 = 153;
const HI: u8 = 255;

/// Default color wheel: reds through yellows, greens, blues, magentas, gray.
pub const DEFAULT_COLOR_WHEEL: [Rgb; 13] = [
    Rgb::new(HI, LO, LO),
    Rgb::new(HI, MID, LO),
    Rgb::new(HI, HI, LO),
    Rgb::new(MID, HI, LO),
    Rgb::new(LO, HI, LO),
    Rgb::new(LO, HI, MID),
    Rgb::new(LO, HI, HI),
    Rgb::new(LO, MID, HI),
    Rgb::new(LO, LO, HI),
    Rgb::new(MID, LO, HI),
    Rgb::new(HI, LO, HI),
    Rgb::new(HI, LO, MID),
    Rgb::new(MID, MID, MID),
];

/// Finite, non-empty ordered list of group colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgb>", into = "Vec<Rgb>")]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPalette`] if `colors` is empty and
    /// [`Error::BlackPaletteEntry`] if any color is black.
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        if let Some(index) = colors.iter().position(Rgb::is_black) {
            return Err(Error::BlackPaletteEntry { index });
        }
        Ok(Self { colors })
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color assigned to a group id.
    #[inline]
    pub fn color_for(&self, group_id: u64) -> Rgb {
        self.colors[(group_id % self.colors.len() as u64) as usize]
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLOR_WHEEL.to_vec(),
        }
    }
}

impl TryFrom<Vec<Rgb>> for Palette {
    type Error = Error;

    fn try_from(colors: Vec<Rgb>) -> Result<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Rgb> {
    fn from(p: Palette) -> Self {
        p.colors
    }
}
