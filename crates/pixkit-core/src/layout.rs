//! Channel layouts
//!
//! The channel count of an image fixes the meaning of its channels:
//!
//! | Channels | Layout |
//! |---|---|
//! | 1 | Gray |
//! | 2 | Gray + Alpha |
//! | 3 | RGB |
//! | 4 | RGBA |

use crate::error::{Error, Result};

/// Interpretation of an image's channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    /// Single intensity channel
    Gray,
    /// Intensity followed by alpha
    GrayAlpha,
    /// Red, green, blue
    Rgb,
    /// Red, green, blue, alpha
    Rgba,
}

impl ChannelLayout {
    /// Layout for a channel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] unless `channels` is 1 to 4.
    pub fn from_channels(channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(ChannelLayout::Gray),
            2 => Ok(ChannelLayout::GrayAlpha),
            3 => Ok(ChannelLayout::Rgb),
            4 => Ok(ChannelLayout::Rgba),
            n => Err(Error::UnsupportedChannels(n)),
        }
    }

    /// Number of channels in this layout.
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Gray => 1,
            ChannelLayout::GrayAlpha => 2,
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// Whether the last channel is alpha.
    pub fn has_alpha(self) -> bool {
        matches!(self, ChannelLayout::GrayAlpha | ChannelLayout::Rgba)
    }

    /// Whether the layout carries separate color channels.
    pub fn is_color(self) -> bool {
        matches!(self, ChannelLayout::Rgb | ChannelLayout::Rgba)
    }
}
