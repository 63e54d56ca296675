//! Per-region statistics
//!
//! Summaries computed from a label image produced by region growing.
//! Labels are expected to be dense (`0..count`), so results are indexed
//! directly by label.

use crate::error::{RegionError, RegionResult};
use pixkit_core::{Component, Image, LabelImage};

/// Region statistics
#[derive(Debug, Clone, PartialEq)]
pub struct RegionStats {
    /// Region label
    pub label: i32,
    /// Number of pixels
    pub pixel_count: usize,
    /// Topmost row
    pub min_row: usize,
    /// Leftmost column
    pub min_col: usize,
    /// Bottommost row
    pub max_row: usize,
    /// Rightmost column
    pub max_col: usize,
    /// Mean row
    pub centroid_row: f64,
    /// Mean column
    pub centroid_col: f64,
}

fn checked_label(labels: &LabelImage, k: usize) -> RegionResult<usize> {
    let label = labels[k][0];
    if label < 0 {
        return Err(RegionError::UnlabeledPixel {
            row: k / labels.width(),
            col: k % labels.width(),
            label,
        });
    }
    Ok(label as usize)
}

/// Pixel count of every region, indexed by label.
///
/// # Errors
///
/// Returns [`RegionError::UnlabeledPixel`] if any label is negative.
pub fn region_sizes(labels: &LabelImage) -> RegionResult<Vec<usize>> {
    let mut sizes = Vec::new();
    for k in 0..labels.size() {
        let label = checked_label(labels, k)?;
        if label >= sizes.len() {
            sizes.resize(label + 1, 0);
        }
        sizes[label] += 1;
    }
    Ok(sizes)
}

/// Detailed statistics for every region that has at least one pixel,
/// ordered by label.
///
/// # Errors
///
/// Returns [`RegionError::UnlabeledPixel`] if any label is negative.
pub fn region_stats(labels: &LabelImage) -> RegionResult<Vec<RegionStats>> {
    struct Accum {
        count: usize,
        sum_row: u64,
        sum_col: u64,
        min_row: usize,
        min_col: usize,
        max_row: usize,
        max_col: usize,
    }

    let mut accums: Vec<Option<Accum>> = Vec::new();
    for i in 0..labels.height() {
        for j in 0..labels.width() {
            let label = checked_label(labels, i * labels.width() + j)?;
            if label >= accums.len() {
                accums.resize_with(label + 1, || None);
            }
            let acc = accums[label].get_or_insert(Accum {
                count: 0,
                sum_row: 0,
                sum_col: 0,
                min_row: i,
                min_col: j,
                max_row: i,
                max_col: j,
            });
            acc.count += 1;
            acc.sum_row += i as u64;
            acc.sum_col += j as u64;
            acc.min_row = acc.min_row.min(i);
            acc.min_col = acc.min_col.min(j);
            acc.max_row = acc.max_row.max(i);
            acc.max_col = acc.max_col.max(j);
        }
    }

    Ok(accums
        .into_iter()
        .enumerate()
        .filter_map(|(label, acc)| {
            acc.map(|acc| RegionStats {
                label: label as i32,
                pixel_count: acc.count,
                min_row: acc.min_row,
                min_col: acc.min_col,
                max_row: acc.max_row,
                max_col: acc.max_col,
                centroid_row: acc.sum_row as f64 / acc.count as f64,
                centroid_col: acc.sum_col as f64 / acc.count as f64,
            })
        })
        .collect())
}

/// Mean pixel value of every region, indexed by label.
///
/// Means are computed per channel in the source's own domain. Labels with
/// no pixels get all-zero means.
///
/// # Errors
///
/// Returns [`RegionError::Core`] if `source` and `labels` differ in shape,
/// or [`RegionError::UnlabeledPixel`] if any label is negative.
pub fn region_means<T: Component, const C: usize>(
    source: &Image<T, C>,
    labels: &LabelImage,
) -> RegionResult<Vec<[f64; C]>> {
    labels.check_same_shape(source)?;

    let mut sums: Vec<([f64; C], usize)> = Vec::new();
    for (k, pixel) in source.pixels().iter().enumerate() {
        let label = checked_label(labels, k)?;
        if label >= sums.len() {
            sums.resize(label + 1, ([0.0; C], 0));
        }
        let (sum, count) = &mut sums[label];
        for (s, v) in sum.iter_mut().zip(pixel) {
            *s += v.to_f64();
        }
        *count += 1;
    }

    Ok(sums
        .into_iter()
        .map(|(mut sum, count)| {
            if count > 0 {
                for s in &mut sum {
                    *s /= count as f64;
                }
            }
            sum
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixkit_core::{INVALID_LABEL, ImageGf, ImageRgbI};

    fn two_regions() -> LabelImage {
        // 0 0 1
        // 0 1 1
        LabelImage::from_vec(2, 3, vec![0, 0, 1, 0, 1, 1]).unwrap()
    }

    #[test]
    fn test_region_sizes() {
        assert_eq!(region_sizes(&two_regions()).unwrap(), vec![3, 3]);
        assert!(region_sizes(&LabelImage::default()).unwrap().is_empty());
    }

    #[test]
    fn test_region_stats() {
        let stats = region_stats(&two_regions()).unwrap();
        assert_eq!(stats.len(), 2);

        assert_eq!(stats[0].label, 0);
        assert_eq!(stats[0].pixel_count, 3);
        assert_eq!((stats[0].min_row, stats[0].min_col), (0, 0));
        assert_eq!((stats[0].max_row, stats[0].max_col), (1, 1));
        assert!((stats[0].centroid_row - 1.0 / 3.0).abs() < 1e-12);
        assert!((stats[0].centroid_col - 1.0 / 3.0).abs() < 1e-12);

        assert_eq!(stats[1].label, 1);
        assert_eq!((stats[1].min_row, stats[1].min_col), (0, 1));
        assert_eq!((stats[1].max_row, stats[1].max_col), (1, 2));
    }

    #[test]
    fn test_unlabeled_pixel_rejected() {
        let labels = LabelImage::from_vec(1, 3, vec![0, INVALID_LABEL, 1]).unwrap();
        assert!(matches!(
            region_sizes(&labels),
            Err(RegionError::UnlabeledPixel {
                row: 0,
                col: 1,
                label: -1
            })
        ));
        assert!(region_stats(&labels).is_err());
    }

    #[test]
    fn test_region_means() {
        let source = ImageRgbI::from_vec(
            2,
            3,
            vec![0, 0, 0, 2, 2, 2, 9, 0, 0, 4, 4, 4, 3, 6, 9, 6, 3, 0],
        )
        .unwrap();
        let means = region_means(&source, &two_regions()).unwrap();
        assert_eq!(means, vec![[2.0, 2.0, 2.0], [6.0, 3.0, 3.0]]);
    }

    #[test]
    fn test_region_means_shape_mismatch() {
        let source = ImageGf::new(3, 2);
        assert!(matches!(
            region_means(&source, &two_regions()),
            Err(RegionError::Core(pixkit_core::Error::DimensionMismatch { .. }))
        ));
    }
}
