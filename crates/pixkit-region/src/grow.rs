//! Unseeded region growing
//!
//! Region growing is connected-component labeling with a caller-defined
//! adjacency test in place of pixel equality. Every pixel ends up with the
//! label of the maximal region it belongs to.
//!
//! # Algorithm
//!
//! 1. Resize the label image to the source shape and fill it with
//!    [`INVALID_LABEL`].
//! 2. Scan pixels in row-major order. Each pixel still unlabeled becomes
//!    the seed of a new region and takes the next label (0, 1, 2, ...).
//! 3. Grow the region with an explicit stack: pop a labeled pixel, and for
//!    every in-bounds neighbor that is still unlabeled and for which
//!    `grow(popped, neighbor)` holds, label the neighbor and push it.
//!
//! Labels are therefore numbered in the order their first pixel is met by
//! the row-major scan. The order in which the stack is drained does not
//! change which pixels a region contains when the predicate is symmetric.
//!
//! # Predicate
//!
//! `grow(i, j, k, l)` answers whether a region may extend from the labeled
//! pixel `(i, j)` to its neighbor `(k, l)`. It is called at most once per
//! directed pair, always with the labeled pixel first. Symmetry is not
//! enforced: with an asymmetric predicate the regions depend on which
//! pixel is reached first, and that is the caller's responsibility.

use log::{debug, info};
use pixkit_core::{Component, INVALID_LABEL, Image, LabelImage};

/// Connectivity type for region growing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

const FOUR_WAY: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

const EIGHT_WAY: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl ConnectivityType {
    /// Neighbor offsets as `(row, column)` deltas.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            ConnectivityType::FourWay => &FOUR_WAY,
            ConnectivityType::EightWay => &EIGHT_WAY,
        }
    }
}

/// Options for region growing
#[derive(Debug, Clone, Default)]
pub struct RegionGrowingOptions {
    /// Neighborhood used to extend regions
    pub connectivity: ConnectivityType,
    /// Log an `info` line after every row of the scan
    pub report_progress: bool,
}

impl RegionGrowingOptions {
    /// Create new options with the specified connectivity
    pub fn new(connectivity: ConnectivityType) -> Self {
        Self {
            connectivity,
            report_progress: false,
        }
    }

    /// Enable or disable per-row progress logging
    pub fn with_progress(mut self, report_progress: bool) -> Self {
        self.report_progress = report_progress;
        self
    }
}

/// Label the regions of `source` under 8-connectivity.
///
/// Only the shape of `source` is consulted; the predicate reads pixel
/// values itself. Returns the number of regions, which is also one past
/// the largest label written.
///
/// # Examples
///
/// ```
/// use pixkit_core::{ImageGf, LabelImage};
/// use pixkit_region::region_growing;
///
/// let gray = ImageGf::from_vec(2, 3, vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0]).unwrap();
/// let mut labels = LabelImage::default();
/// let n = region_growing(&gray, &mut labels, |i, j, k, l| {
///     gray.value(i, j) == gray.value(k, l)
/// });
/// assert_eq!(n, 2);
/// assert_eq!(labels.components(), &[0, 0, 1, 0, 1, 1]);
/// ```
pub fn region_growing<T, const C: usize, F>(
    source: &Image<T, C>,
    labels: &mut LabelImage,
    grow: F,
) -> usize
where
    T: Component,
    F: FnMut(usize, usize, usize, usize) -> bool,
{
    region_growing_with_options(source, labels, &RegionGrowingOptions::default(), grow)
}

/// Label the regions of `source` with explicit options.
pub fn region_growing_with_options<T, const C: usize, F>(
    source: &Image<T, C>,
    labels: &mut LabelImage,
    options: &RegionGrowingOptions,
    mut grow: F,
) -> usize
where
    T: Component,
    F: FnMut(usize, usize, usize, usize) -> bool,
{
    let (h, w) = source.dimensions();
    labels.resize(h, w);
    labels.fill(INVALID_LABEL);

    let offsets = options.connectivity.offsets();
    let label_data = labels.components_mut();
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut label_count: usize = 0;

    for i in 0..h {
        for j in 0..w {
            if label_data[i * w + j] != INVALID_LABEL {
                continue;
            }

            let label_current = label_count as i32;
            label_count += 1;
            label_data[i * w + j] = label_current;
            stack.push((i, j));

            while let Some((i2, j2)) = stack.pop() {
                for &(di, dj) in offsets {
                    let (Some(i3), Some(j3)) =
                        (i2.checked_add_signed(di), j2.checked_add_signed(dj))
                    else {
                        continue;
                    };
                    if i3 >= h || j3 >= w {
                        continue;
                    }
                    let k = i3 * w + j3;
                    if label_data[k] == INVALID_LABEL && grow(i2, j2, i3, j3) {
                        label_data[k] = label_current;
                        stack.push((i3, j3));
                    }
                }
            }
        }

        if options.report_progress {
            info!(
                "region growing: row {}/{} ({}%)",
                i + 1,
                h,
                (i + 1) * 100 / h
            );
        }
    }

    debug!(
        "region growing: {} region(s) in {}x{} image",
        label_count, h, w
    );
    label_count
}

/// Label the regions of `source` into a new label image.
///
/// Returns the labels together with the region count.
pub fn label_regions<T, const C: usize, F>(source: &Image<T, C>, grow: F) -> (LabelImage, usize)
where
    T: Component,
    F: FnMut(usize, usize, usize, usize) -> bool,
{
    let mut labels = LabelImage::default();
    let count = region_growing(source, &mut labels, grow);
    (labels, count)
}
