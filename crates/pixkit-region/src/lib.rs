//! pixkit-region - Region growing and labeling for pixkit
//!
//! This crate provides region processing functionality including:
//!
//! - **Region growing** - Unseeded labeling of connected regions under a
//!   caller-supplied adjacency predicate
//! - **Region statistics** - Sizes, bounds, centroids and mean values per label
//!
//! # Examples
//!
//! ## Labeling regions of similar intensity
//!
//! ```
//! use pixkit_core::ImageGf;
//! use pixkit_region::{label_regions, region_sizes};
//!
//! let gray = ImageGf::from_vec(3, 3, vec![
//!     0.10, 0.11, 0.90,
//!     0.12, 0.93, 0.91,
//!     0.50, 0.50, 0.92,
//! ]).unwrap();
//!
//! let (labels, n) = label_regions(&gray, |i, j, k, l| {
//!     (gray.value(i, j) - gray.value(k, l)).abs() < 0.05
//! });
//! assert_eq!(n, 3);
//! assert_eq!(region_sizes(&labels).unwrap(), vec![3, 4, 2]);
//! ```
//!
//! ## Four-way connectivity and progress logging
//!
//! ```
//! use pixkit_core::{ImageGi, LabelImage};
//! use pixkit_region::{ConnectivityType, RegionGrowingOptions, region_growing_with_options};
//!
//! let image = ImageGi::from_vec(2, 2, vec![1, 0, 0, 1]).unwrap();
//! let options = RegionGrowingOptions::new(ConnectivityType::FourWay).with_progress(true);
//! let mut labels = LabelImage::default();
//! let n = region_growing_with_options(&image, &mut labels, &options, |i, j, k, l| {
//!     image.value(i, j) == image.value(k, l)
//! });
//! assert_eq!(n, 4);
//! ```

pub mod error;
pub mod grow;
pub mod stats;

// Re-export core types
pub use pixkit_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export region growing types and functions
pub use grow::{
    ConnectivityType, RegionGrowingOptions, label_regions, region_growing,
    region_growing_with_options,
};

// Re-export statistics types and functions
pub use stats::{RegionStats, region_means, region_sizes, region_stats};
