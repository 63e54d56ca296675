//! Image - dense 2D pixel container
//!
//! `Image<T, C>` owns a contiguous row-major buffer of `height * width`
//! pixels, each made of `C` components of type `T`.
//!
//! # Pixel layout
//!
//! - The top-left pixel is at row 0, column 0
//! - Pixel `(i, j)` occupies components `[C*(i*width+j), C*(i*width+j)+C)`
//! - A 0-row or 0-column image is empty and holds no components
//!
//! # Ownership model
//!
//! An image exclusively owns its storage. `clone()` is a deep copy;
//! `std::mem::take` moves the storage out and leaves an empty image behind.
//! [`Image::resize`] is destructive: previous contents are discarded and
//! the new storage is zeroed.
//!
//! # Examples
//!
//! ```
//! use pixkit_core::{Image, ImageRgbaF};
//!
//! let mut image = ImageRgbaF::new(2, 3);
//! image[(1, 2)] = [1.0, 0.5, 0.25, 1.0];
//! assert_eq!(image.get(1, 2).unwrap(), &[1.0, 0.5, 0.25, 1.0]);
//! assert_eq!(image.capacity(), 2 * 3 * 4);
//! ```

mod access;
pub mod convert;

pub use convert::binarize;

use crate::component::Component;
use crate::error::{Error, Result};
use crate::layout::ChannelLayout;

/// Dense 2D image of `C`-channel pixels with components of type `T`
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T, const C: usize> {
    /// Number of rows
    height: usize,
    /// Number of columns
    width: usize,
    /// Pixels in row-major order, `height * width` entries
    data: Vec<[T; C]>,
}

/// Gray, `i32` components
pub type ImageGi = Image<i32, 1>;
/// Gray, `f32` components
pub type ImageGf = Image<f32, 1>;
/// Gray, `f64` components
pub type ImageGd = Image<f64, 1>;
/// Gray + alpha, `i32` components
pub type ImageGaI = Image<i32, 2>;
/// Gray + alpha, `f32` components
pub type ImageGaF = Image<f32, 2>;
/// Gray + alpha, `f64` components
pub type ImageGaD = Image<f64, 2>;
/// RGB, `i32` components
pub type ImageRgbI = Image<i32, 3>;
/// RGB, `f32` components
pub type ImageRgbF = Image<f32, 3>;
/// RGB, `f64` components
pub type ImageRgbD = Image<f64, 3>;
/// RGBA, `i32` components
pub type ImageRgbaI = Image<i32, 4>;
/// RGBA, `f32` components
pub type ImageRgbaF = Image<f32, 4>;
/// RGBA, `f64` components
pub type ImageRgbaD = Image<f64, 4>;
/// Gray, 8-bit storage
pub type ImageGb = Image<u8, 1>;
/// RGBA, 8-bit storage
pub type ImageRgbaB = Image<u8, 4>;

/// Region labels, one `i32` per pixel
pub type LabelImage = Image<i32, 1>;

/// Label value marking a pixel that has not been assigned a region
pub const INVALID_LABEL: i32 = -1;

impl<T: Component, const C: usize> Default for Image<T, C> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T: Component, const C: usize> Image<T, C> {
    /// Create an image with every component set to zero.
    ///
    /// Either dimension may be 0, giving an empty image.
    ///
    /// # Panics
    ///
    /// Fails to compile when `C` is not 1 to 4.
    pub fn new(height: usize, width: usize) -> Self {
        const { assert!(C >= 1 && C <= 4, "channel count must be 1 to 4") };
        Image {
            height,
            width,
            data: vec![[T::ZERO; C]; height * width],
        }
    }

    /// Create an image with every pixel set to `pixel`.
    pub fn filled(height: usize, width: usize, pixel: [T; C]) -> Self {
        let mut image = Self::new(height, width);
        image.fill_pixel(pixel);
        image
    }

    /// Create an image from row-major components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentCountMismatch`] if `components.len()` is not
    /// `height * width * C`.
    pub fn from_vec(height: usize, width: usize, components: Vec<T>) -> Result<Self> {
        let expected = height * width * C;
        if components.len() != expected {
            return Err(Error::ComponentCountMismatch {
                expected,
                actual: components.len(),
            });
        }
        let mut image = Self::new(height, width);
        image.components_mut().copy_from_slice(&components);
        Ok(image)
    }

    /// Create an image from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ComponentCountMismatch`] if `pixels.len()` is not
    /// `height * width`.
    pub fn from_pixels(height: usize, width: usize, pixels: Vec<[T; C]>) -> Result<Self> {
        const { assert!(C >= 1 && C <= 4, "channel count must be 1 to 4") };
        if pixels.len() != height * width {
            return Err(Error::ComponentCountMismatch {
                expected: height * width * C,
                actual: pixels.len() * C,
            });
        }
        Ok(Image {
            height,
            width,
            data: pixels,
        })
    }

    // ------------------------------------------------------------------------
    // Capacity
    // ------------------------------------------------------------------------

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Dimensions as `(height, width)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Channels per pixel
    #[inline]
    pub const fn channels(&self) -> usize {
        C
    }

    /// Number of pixels
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of components (`size() * C`)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len() * C
    }

    /// Whether the image holds no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Channel interpretation implied by `C`
    pub fn layout(&self) -> ChannelLayout {
        match C {
            1 => ChannelLayout::Gray,
            2 => ChannelLayout::GrayAlpha,
            3 => ChannelLayout::Rgb,
            _ => ChannelLayout::Rgba,
        }
    }

    /// Whether `other` has the same height and width.
    pub fn same_shape<U, const D: usize>(&self, other: &Image<U, D>) -> bool {
        self.height == other.height && self.width == other.width
    }

    /// Fail with [`Error::DimensionMismatch`] unless `other` has the same shape.
    pub fn check_same_shape<U, const D: usize>(&self, other: &Image<U, D>) -> Result<()> {
        if self.same_shape(other) {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: (other.height, other.width),
            })
        }
    }

    // ------------------------------------------------------------------------
    // Raw access
    // ------------------------------------------------------------------------

    /// All components in row-major order
    #[inline]
    pub fn components(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// All components in row-major order, mutable
    #[inline]
    pub fn components_mut(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// All pixels in row-major order
    #[inline]
    pub fn pixels(&self) -> &[[T; C]] {
        &self.data
    }

    /// All pixels in row-major order, mutable
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [[T; C]] {
        &mut self.data
    }

    /// Consume the image and return its components.
    pub fn into_components(self) -> Vec<T> {
        self.data.into_iter().flatten().collect()
    }

    // ------------------------------------------------------------------------
    // Modifiers
    // ------------------------------------------------------------------------

    /// Reset to the empty 0x0 image, releasing storage.
    pub fn clear(&mut self) {
        self.height = 0;
        self.width = 0;
        self.data = Vec::new();
    }

    /// Reallocate for `height x width` pixels and zero every component.
    ///
    /// Previous contents are not preserved, even where the old and new
    /// shapes overlap.
    pub fn resize(&mut self, height: usize, width: usize) {
        self.height = height;
        self.width = width;
        self.data.clear();
        self.data.resize(height * width, [T::ZERO; C]);
    }

    /// Set every component to `value`.
    pub fn fill(&mut self, value: T) {
        self.components_mut().fill(value);
    }

    /// Set every pixel to `pixel`.
    pub fn fill_pixel(&mut self, pixel: [T; C]) {
        self.data.fill(pixel);
    }

    /// Set channel `channel` of every pixel to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannel`] if `channel >= C`.
    pub fn set_channel(&mut self, channel: usize, value: T) -> Result<()> {
        if channel >= C {
            return Err(Error::InvalidChannel {
                channel,
                channels: C,
            });
        }
        for pixel in &mut self.data {
            pixel[channel] = value;
        }
        Ok(())
    }

    /// Reverse the order of rows in place.
    pub fn flip_vertical(&mut self) {
        let width = self.width;
        let height = self.height;
        if width == 0 {
            return;
        }
        for i in 0..height / 2 {
            let (top, bottom) = self.data.split_at_mut((height - 1 - i) * width);
            top[i * width..(i + 1) * width].swap_with_slice(&mut bottom[..width]);
        }
    }
}
