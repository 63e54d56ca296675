//! PNG image format support
//!
//! Decoding always yields 8-bit samples: palette and sub-byte gray images
//! are expanded, and 16-bit samples are narrowed to their high byte.
//! Encoding writes 8-bit gray, gray+alpha, RGB or RGBA according to the
//! channel count.

use crate::{DecodedImage, IoError, IoResult};
use log::{debug, warn};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

fn color_type_for(channels: usize) -> IoResult<ColorType> {
    match channels {
        1 => Ok(ColorType::Grayscale),
        2 => Ok(ColorType::GrayscaleAlpha),
        3 => Ok(ColorType::Rgb),
        4 => Ok(ColorType::Rgba),
        n => Err(IoError::UnsupportedFormat(format!(
            "PNG cannot hold {} channels",
            n
        ))),
    }
}

/// Read a PNG image into a byte buffer
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<DecodedImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width as usize;
    let height = output_info.height as usize;
    let channels = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpanded PNG color type: {:?}",
                other
            )));
        }
    };
    let bytes_per_sample = match output_info.bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => {
            warn!("png: narrowing 16-bit samples to 8 bits");
            2
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpanded PNG bit depth: {:?}",
                other
            )));
        }
    };

    let bytes_per_row = output_info.line_size;
    let samples_per_row = width * channels;
    let mut data = Vec::with_capacity(height * samples_per_row);
    for y in 0..height {
        let row = &buf[y * bytes_per_row..y * bytes_per_row + samples_per_row * bytes_per_sample];
        // 16-bit samples are big-endian; keep the high byte
        data.extend(row.iter().step_by(bytes_per_sample));
    }

    debug!(
        "png: decoded {}x{} image with {} channel(s)",
        height, width, channels
    );
    Ok(DecodedImage {
        height,
        width,
        channels,
        data,
    })
}

/// Write a byte buffer as an 8-bit PNG image
pub fn write_png<W: Write>(image: &DecodedImage, writer: W) -> IoResult<()> {
    image.validate()?;
    if image.height == 0 || image.width == 0 {
        return Err(IoError::InvalidData(format!(
            "PNG cannot encode a {}x{} image",
            image.height, image.width
        )));
    }
    let (Ok(width), Ok(height)) = (u32::try_from(image.width), u32::try_from(image.height)) else {
        return Err(IoError::InvalidData(format!(
            "{}x{} exceeds PNG dimensions",
            image.height, image.width
        )));
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type_for(image.channels)?);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&image.data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    debug!(
        "png: encoded {}x{} image with {} channel(s)",
        image.height, image.width, image.channels
    );
    Ok(())
}
