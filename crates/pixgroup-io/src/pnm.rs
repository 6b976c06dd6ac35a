//! PNM (Portable Any Map) format support
//!
//! Reads and writes binary PPM (P6) with a maximum sample value of 255.
//! Header comments (`#` to end of line) are skipped when reading.

use crate::{IoError, IoResult};
use pixgroup_core::{Canvas, ColorBuffer, Rgb};
use std::io::{Read, Write};

/// Read a binary PPM (P6) image into a color buffer.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<ColorBuffer> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut header = HeaderParser { data: &data, pos: 0 };
    let magic = header.token()?;
    if magic != b"P6" {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM subtype {}",
            String::from_utf8_lossy(magic)
        )));
    }
    let width = header.number()?;
    let height = header.number()?;
    let maxval = header.number()?;
    if maxval != 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PPM maxval {} (only 255 is supported)",
            maxval
        )));
    }
    // A single whitespace byte separates the header from the raster.
    let start = header.pos + 1;

    let canvas = Canvas::new(width, height)?;
    let expected = canvas.area() * 3;
    let raster = data
        .get(start..start + expected)
        .ok_or_else(|| IoError::InvalidData(format!("PPM raster shorter than {} bytes", expected)))?;

    let mut buffer = ColorBuffer::new(canvas);
    for (cell, px) in buffer.cells_mut().iter_mut().zip(raster.chunks_exact(3)) {
        *cell = Rgb::new(px[0], px[1], px[2]);
    }
    Ok(buffer)
}

/// Write a color buffer as binary PPM (P6).
pub fn write_pnm<W: Write>(buffer: &ColorBuffer, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", buffer.width(), buffer.height())?;
    writer.write_all(&buffer.to_rgb_bytes())?;
    writer.flush()?;
    Ok(())
}

struct HeaderParser<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderParser<'a> {
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while self.data.get(self.pos).is_some_and(|&c| c != b'\n') {
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> IoResult<&'a [u8]> {
        self.skip_whitespace_and_comments();
        let start = self.pos;
        while self
            .data
            .get(self.pos)
            .is_some_and(|b| !b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData("truncated PNM header".to_string()));
        }
        Ok(&self.data[start..self.pos])
    }

    fn number(&mut self) -> IoResult<u32> {
        let token = self.token()?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "bad PNM header field {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixgroup_core::Pixel;

    #[test]
    fn test_write_pnm_layout() {
        let mut buf = ColorBuffer::new(Canvas::new(2, 1).unwrap());
        buf.set(Pixel::new(1, 0), Rgb::new(1, 2, 3)).unwrap();

        let mut bytes = Vec::new();
        write_pnm(&buf, &mut bytes).unwrap();
        assert_eq!(&bytes[..11], b"P6\n2 1\n255\n");
        assert_eq!(&bytes[11..], &[0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_pnm_roundtrip() {
        let mut buf = ColorBuffer::new(Canvas::new(3, 3).unwrap());
        buf.set(Pixel::new(2, 2), Rgb::new(255, 51, 153)).unwrap();

        let mut bytes = Vec::new();
        write_pnm(&buf, &mut bytes).unwrap();
        assert_eq!(read_pnm(bytes.as_slice()).unwrap(), buf);
    }

    #[test]
    fn test_read_pnm_with_comment() {
        let mut bytes = b"P6\n# made by hand\n1 1\n255\n".to_vec();
        bytes.extend_from_slice(&[9, 8, 7]);
        let buf = read_pnm(bytes.as_slice()).unwrap();
        assert_eq!(buf.get(Pixel::new(0, 0)), Some(Rgb::new(9, 8, 7)));
    }

    #[test]
    fn test_read_pnm_errors() {
        assert!(matches!(
            read_pnm(&b"P5\n1 1\n255\n\0"[..]),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            read_pnm(&b"P6\n2 2\n255\n\0\0\0"[..]),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pnm(&b"P6\n2 x\n255\n"[..]),
            Err(IoError::InvalidData(_))
        ));
        assert!(matches!(
            read_pnm(&b"P6\n1 1\n65535\n"[..]),
            Err(IoError::UnsupportedFormat(_))
        ));
    }
}
