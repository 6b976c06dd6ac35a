//! pixgroup-io - Image output for color buffers
//!
//! Writes the rendered group buffer as PNG or binary PPM and reads those
//! files back for inspection and testing.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature      |
//! |--------|------|-------|--------------|
//! | PNG    | yes  | yes   | `png-format` |
//! | PPM    | yes  | yes   | `pnm`        |

pub mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use pixgroup_core::ColorBuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a color buffer to a file in the given format.
pub fn write_image<P: AsRef<Path>>(
    buffer: &ColorBuffer,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => self::png::write_png(buffer, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => self::pnm::write_pnm(buffer, writer),
        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            format
        ))),
    }
}

/// Read an image file, detecting its format from the magic number.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<ColorBuffer> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let reader = BufReader::new(File::open(path)?);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => self::png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => self::pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        _ => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            format
        ))),
    }
}
