//! PNG image format support

use crate::{IoError, IoResult};
use pixgroup_core::{Canvas, ColorBuffer, Rgb};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read an 8-bit RGB or RGBA PNG into a color buffer.
///
/// Alpha is discarded.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<ColorBuffer> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    let samples = match (color_type, bit_depth) {
        (ColorType::Rgb, BitDepth::Eight) => 3,
        (ColorType::Rgba, BitDepth::Eight) => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let canvas = Canvas::new(output_info.width, output_info.height)?;
    let mut buffer = ColorBuffer::new(canvas);
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    for (row, line) in data.chunks(bytes_per_row).enumerate() {
        for (col, px) in line.chunks_exact(samples).enumerate() {
            let index = row * canvas.width() as usize + col;
            buffer.cells_mut()[index] = Rgb::new(px[0], px[1], px[2]);
        }
    }

    Ok(buffer)
}

/// Write a color buffer as an 8-bit RGB PNG
pub fn write_png<W: Write>(buffer: &ColorBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&buffer.to_rgb_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
