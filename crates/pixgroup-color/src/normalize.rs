//! Brightness normalization
//!
//! Rescales every painted cell so its RGB vector has the same Euclidean
//! length, keeping the channel ratios (and so the hue). Background cells
//! are left untouched.
//!
//! Colors already within [`NORMALIZE_TOLERANCE`] of the target length are
//! not rescaled. Rounding to 8-bit channels moves the length by at most
//! `sqrt(3) / 2`, so a second pass over a normalized buffer changes
//! nothing.

use crate::{ColorError, ColorResult};
use pixgroup_core::{ColorBuffer, Rgb};

/// Largest length deviation treated as already normalized.
pub const NORMALIZE_TOLERANCE: f64 = 1.0;

/// Rescale a color to length `brightness`.
///
/// Black stays black.
pub fn normalize_color(color: Rgb, brightness: u8) -> Rgb {
    if color.is_black() {
        return color;
    }
    let magnitude = color.magnitude();
    let target = brightness as f64;
    if (magnitude - target).abs() <= NORMALIZE_TOLERANCE {
        return color;
    }
    let scale = target / magnitude;
    let channel = |c: u8| (c as f64 * scale).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(color.r), channel(color.g), channel(color.b))
}

/// Normalize every painted cell of `buffer` to length `brightness`.
///
/// # Returns
///
/// The number of cells whose color changed.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] for `brightness == 0`, which
/// would make painted cells indistinguishable from the background.
pub fn normalize_brightness(buffer: &mut ColorBuffer, brightness: u8) -> ColorResult<usize> {
    if brightness == 0 {
        return Err(ColorError::InvalidParameters(
            "brightness must be at least 1".to_string(),
        ));
    }

    let mut changed = 0;
    for cell in buffer.cells_mut().iter_mut().filter(|c| !c.is_black()) {
        let normalized = normalize_color(*cell, brightness);
        if normalized != *cell {
            *cell = normalized;
            changed += 1;
        }
    }

    log::debug!("normalize_brightness({}): {} cells changed", brightness, changed);
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgroup_core::{Canvas, Pixel};

    #[test]
    fn test_normalize_color_length() {
        let c = normalize_color(Rgb::new(255, 51, 51), 200);
        assert_eq!(c, Rgb::new(192, 38, 38));
        assert!((c.magnitude() - 200.0).abs() <= NORMALIZE_TOLERANCE);
    }

    #[test]
    fn test_normalize_color_keeps_hue() {
        let c = normalize_color(Rgb::new(51, 153, 255), 120);
        // Channel order and rough ratios survive.
        assert!(c.r < c.g && c.g < c.b);
        assert!((c.b as f64 / c.r as f64 - 5.0).abs() < 0.5);
    }

    #[test]
    fn test_normalize_black_untouched() {
        assert_eq!(normalize_color(Rgb::BLACK, 200), Rgb::BLACK);
    }

    #[test]
    fn test_normalize_idempotent() {
        for &c in pixgroup_core::DEFAULT_COLOR_WHEEL.iter() {
            for brightness in [1u8, 37, 100, 200, 255] {
                let once = normalize_color(c, brightness);
                assert_eq!(normalize_color(once, brightness), once);
                assert!(!once.is_black());
            }
        }
    }

    #[test]
    fn test_normalize_buffer() {
        let mut buf = ColorBuffer::new(Canvas::new(4, 4).unwrap());
        buf.set(Pixel::new(1, 1), Rgb::new(255, 255, 51)).unwrap();
        buf.set(Pixel::new(2, 2), Rgb::new(153, 153, 153)).unwrap();

        let changed = normalize_brightness(&mut buf, 150).unwrap();
        assert_eq!(changed, 2);
        assert_eq!(buf.occupied_count(), 2);
        assert_eq!(buf.get(Pixel::new(0, 0)), Some(Rgb::BLACK));

        let snapshot = buf.clone();
        assert_eq!(normalize_brightness(&mut buf, 150).unwrap(), 0);
        assert_eq!(buf, snapshot);
    }

    #[test]
    fn test_zero_brightness_rejected() {
        let mut buf = ColorBuffer::new(Canvas::new(2, 2).unwrap());
        assert!(normalize_brightness(&mut buf, 0).is_err());
    }
}
