//! Whole-image conversions
//!
//! Conversions between images of different component types and channel
//! counts, built on the per-pixel rules in [`crate::cast`].

use super::Image;
use crate::cast::{cast, cast_pixel, cast_with};
use crate::component::Component;

impl<T: Component, const C: usize> Image<T, C> {
    /// Convert to another component type and channel count with the
    /// default rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixkit_core::{ImageGi, ImageRgbaD};
    ///
    /// let rgba = ImageRgbaD::filled(2, 2, [0.2, 0.2, 0.2, 1.0]);
    /// let gray: ImageGi = rgba.convert();
    /// assert_eq!(gray.components(), &[51, 51, 51, 51]);
    /// ```
    pub fn convert<Td: Component, const CD: usize>(&self) -> Image<Td, CD> {
        let mut out = Image::default();
        cast(self, &mut out);
        out
    }

    /// Convert with a caller-supplied per-pixel rule.
    pub fn convert_with<Td, const CD: usize, F>(&self, caster: F) -> Image<Td, CD>
    where
        Td: Component,
        F: FnMut(&[T; C]) -> [Td; CD],
    {
        let mut out = Image::default();
        cast_with(self, &mut out, caster);
        out
    }
}

/// Threshold an image into a single-channel two-level image.
///
/// Each pixel is reduced to gray with the default rule (unweighted RGB
/// average, alpha ignored), measured on the `0.0..=1.0` intensity scale,
/// and mapped to [`Component::ONE`] when strictly above `threshold`,
/// otherwise to zero.
///
/// # Examples
///
/// ```
/// use pixkit_core::{ImageRgbF, binarize};
///
/// let rgb = ImageRgbF::from_vec(1, 2, vec![0.9, 0.9, 0.9, 0.1, 0.2, 0.3]).unwrap();
/// let binary = binarize(&rgb, 0.5);
/// assert_eq!(binary.components(), &[1.0, 0.0]);
/// ```
pub fn binarize<T: Component, const C: usize>(image: &Image<T, C>, threshold: f64) -> Image<T, 1> {
    image.convert_with(|pixel| {
        let [gray]: [f64; 1] = cast_pixel(pixel);
        if gray > threshold { [T::ONE] } else { [T::ZERO] }
    })
}
