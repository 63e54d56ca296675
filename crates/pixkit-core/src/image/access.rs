//! Pixel access
//!
//! Pixels are returned as views (`&[T; C]` / `&mut [T; C]`) into the
//! image's storage, so writes through a mutable view are visible
//! immediately.
//!
//! Two flavours of access exist:
//!
//! - Checked: [`Image::get`], [`Image::get_mut`], [`Image::get_linear`],
//!   [`Image::get_linear_mut`] return an error for out-of-range indices.
//! - Indexing: `image[(i, j)]` and `image[k]` panic on out-of-range
//!   indices, which is a caller bug.

use super::Image;
use crate::component::Component;
use crate::error::{Error, Result};
use std::ops::{Index, IndexMut};

impl<T: Component, const C: usize> Image<T, C> {
    #[inline]
    fn offset(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.height && j < self.width {
            Some(i * self.width + j)
        } else {
            None
        }
    }

    #[inline]
    fn out_of_bounds(&self, i: usize, j: usize) -> Error {
        Error::PixelOutOfBounds {
            row: i,
            col: j,
            height: self.height,
            width: self.width,
        }
    }

    /// Pixel at row `i`, column `j`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if `i >= height` or `j >= width`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Result<&[T; C]> {
        match self.offset(i, j) {
            Some(k) => Ok(&self.data[k]),
            None => Err(self.out_of_bounds(i, j)),
        }
    }

    /// Mutable pixel at row `i`, column `j`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if `i >= height` or `j >= width`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut [T; C]> {
        match self.offset(i, j) {
            Some(k) => Ok(&mut self.data[k]),
            None => Err(self.out_of_bounds(i, j)),
        }
    }

    /// Pixel at linear (row-major) index `k`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `k >= height * width`.
    #[inline]
    pub fn get_linear(&self, k: usize) -> Result<&[T; C]> {
        let len = self.data.len();
        self.data
            .get(k)
            .ok_or(Error::IndexOutOfBounds { index: k, len })
    }

    /// Mutable pixel at linear (row-major) index `k`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `k >= height * width`.
    #[inline]
    pub fn get_linear_mut(&mut self, k: usize) -> Result<&mut [T; C]> {
        let len = self.data.len();
        self.data
            .get_mut(k)
            .ok_or(Error::IndexOutOfBounds { index: k, len })
    }

    /// Pixels of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= height`.
    #[inline]
    pub fn row(&self, i: usize) -> &[[T; C]] {
        assert!(i < self.height, "row {} out of bounds ({})", i, self.height);
        let start = i * self.width;
        &self.data[start..start + self.width]
    }

    /// Mutable pixels of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= height`.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [[T; C]] {
        assert!(i < self.height, "row {} out of bounds ({})", i, self.height);
        let start = i * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Nearest pixel at normalized coordinates.
    ///
    /// `u` runs down the rows and `v` across the columns, both in `[0, 1]`.
    /// The pixel returned is `(floor(u * (height - 1)), floor(v * (width - 1)))`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyImage`] for an empty image and
    /// [`Error::InvalidParameter`] if `u` or `v` is outside `[0, 1]`.
    pub fn sample(&self, u: f32, v: f32) -> Result<&[T; C]> {
        if self.is_empty() {
            return Err(Error::EmptyImage("cannot sample an empty image"));
        }
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            return Err(Error::InvalidParameter(format!(
                "sample coordinates ({}, {}) outside [0, 1]",
                u, v
            )));
        }
        let i = (u * (self.height - 1) as f32).floor() as usize;
        let j = (v * (self.width - 1) as f32).floor() as usize;
        self.get(i, j)
    }
}

impl<T: Component> Image<T, 1> {
    /// Value of the single channel at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is out of bounds.
    #[inline]
    pub fn value(&self, i: usize, j: usize) -> T {
        self[(i, j)][0]
    }

    /// Set the single channel at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is out of bounds.
    #[inline]
    pub fn set_value(&mut self, i: usize, j: usize, value: T) {
        self[(i, j)][0] = value;
    }
}

impl<T: Component, const C: usize> Index<(usize, usize)> for Image<T, C> {
    type Output = [T; C];

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        match self.offset(i, j) {
            Some(k) => &self.data[k],
            None => panic!("{}", self.out_of_bounds(i, j)),
        }
    }
}

impl<T: Component, const C: usize> IndexMut<(usize, usize)> for Image<T, C> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        match self.offset(i, j) {
            Some(k) => &mut self.data[k],
            None => panic!("{}", self.out_of_bounds(i, j)),
        }
    }
}

impl<T: Component, const C: usize> Index<usize> for Image<T, C> {
    type Output = [T; C];

    fn index(&self, k: usize) -> &Self::Output {
        &self.data[k]
    }
}

impl<T: Component, const C: usize> IndexMut<usize> for Image<T, C> {
    fn index_mut(&mut self, k: usize) -> &mut Self::Output {
        &mut self.data[k]
    }
}
