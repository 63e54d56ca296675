//! Raw decoded buffers
//!
//! [`DecodedImage`] is what a codec produces and consumes: one unsigned
//! byte per component, row-major, with a channel count between 1 and 4.
//! [`from_decoded`] and [`to_decoded`] move between that form and typed
//! [`Image`]s through the default caster.

use crate::{IoError, IoResult};
use pixkit_core::{ChannelLayout, Component, Image, cast_component};

/// Byte buffer as produced or consumed by a codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Number of rows
    pub height: usize,
    /// Number of columns
    pub width: usize,
    /// Channels per pixel (1 to 4)
    pub channels: usize,
    /// `height * width * channels` bytes in row-major order
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// Check that the channel count and buffer length are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidData`] on a bad channel count or length.
    pub fn validate(&self) -> IoResult<ChannelLayout> {
        let layout = ChannelLayout::from_channels(self.channels)
            .map_err(|e| IoError::InvalidData(e.to_string()))?;
        let expected = self
            .height
            .checked_mul(self.width)
            .and_then(|n| n.checked_mul(self.channels))
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "{}x{}x{} buffer size overflows",
                    self.height, self.width, self.channels
                ))
            })?;
        if self.data.len() != expected {
            return Err(IoError::InvalidData(format!(
                "buffer holds {} bytes, {}x{}x{} needs {}",
                self.data.len(),
                self.height,
                self.width,
                self.channels,
                expected
            )));
        }
        Ok(layout)
    }
}

/// Convert a decoded byte buffer into an image of any type and channel count.
///
/// Bytes are treated as 8-bit integer components: integer targets keep the
/// value, floating targets receive `byte / 255`. Channel counts are mapped
/// with the default rule, so a gray file loads into an RGBA image as
/// `(g, g, g, one)`.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if `decoded` is inconsistent.
pub fn from_decoded<T: Component, const C: usize>(decoded: DecodedImage) -> IoResult<Image<T, C>> {
    match decoded.validate()? {
        ChannelLayout::Gray => convert_bytes::<T, C, 1>(decoded),
        ChannelLayout::GrayAlpha => convert_bytes::<T, C, 2>(decoded),
        ChannelLayout::Rgb => convert_bytes::<T, C, 3>(decoded),
        ChannelLayout::Rgba => convert_bytes::<T, C, 4>(decoded),
    }
}

fn convert_bytes<T: Component, const C: usize, const N: usize>(
    decoded: DecodedImage,
) -> IoResult<Image<T, C>> {
    let bytes = Image::<u8, N>::from_vec(decoded.height, decoded.width, decoded.data)?;
    Ok(bytes.convert())
}

/// Convert an image into a byte buffer with `C` channels.
///
/// Every component goes through the single-component cast to `u8`:
/// integers are kept (saturated to `0..=255`), floats become
/// `round(255 * v)`.
pub fn to_decoded<T: Component, const C: usize>(image: &Image<T, C>) -> DecodedImage {
    DecodedImage {
        height: image.height(),
        width: image.width(),
        channels: C,
        data: image
            .components()
            .iter()
            .map(|&v| cast_component::<T, u8>(v))
            .collect(),
    }
}
