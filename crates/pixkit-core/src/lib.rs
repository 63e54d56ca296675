//! pixkit-core - Pixel buffers and channel/type casting
//!
//! This crate provides the fundamental data structures used throughout
//! pixkit:
//!
//! - [`Image`] - Dense 2D container of `C`-channel pixels with components of type `T`
//! - [`Component`] - The scalar component types (`u8`, `i32`, `f32`, `f64`)
//! - [`ChannelLayout`] - Gray / GrayAlpha / RGB / RGBA interpretation of channel counts
//! - [`cast_pixel`] / [`cast`] / [`cast_with`] - Conversions between images of
//!   any component type and channel count
//! - [`LabelImage`] - Region labels, as produced by `pixkit-region`
//!
//! # Examples
//!
//! ```
//! use pixkit_core::{ImageGf, ImageRgbI};
//!
//! let rgb = ImageRgbI::filled(4, 4, [255, 0, 0]);
//! let gray: ImageGf = rgb.convert();
//! assert!((gray[(0, 0)][0] - 1.0 / 3.0).abs() < 1e-6);
//! ```

pub mod cast;
pub mod component;
pub mod error;
pub mod image;
pub mod layout;

pub use cast::{cast, cast_pixel, cast_with};
pub use component::{Component, ComponentKind, cast_component};
pub use error::{Error, Result};
pub use image::{
    INVALID_LABEL, Image, ImageGaD, ImageGaF, ImageGaI, ImageGb, ImageGd, ImageGf, ImageGi,
    ImageRgbD, ImageRgbF, ImageRgbI, ImageRgbaB, ImageRgbaD, ImageRgbaF, ImageRgbaI, LabelImage,
    binarize,
};
pub use layout::ChannelLayout;
