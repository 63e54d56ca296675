//! pixkit - Generic pixel buffers for Rust
//!
//! # Overview
//!
//! pixkit provides a small, strongly typed image toolkit:
//!
//! - Dense images generic over component type and channel count
//! - Conversion between any two image types through one default rule
//! - PNG and label-text I/O
//! - Unseeded region growing under a caller-supplied predicate
//!
//! # Example
//!
//! ```
//! use pixkit::{ImageGf, ImageRgbaD};
//! use pixkit::region::label_regions;
//!
//! let rgba = ImageRgbaD::filled(4, 4, [0.5, 0.5, 0.5, 1.0]);
//! let gray: ImageGf = rgba.convert();
//! let (labels, n) = label_regions(&gray, |i, j, k, l| gray.value(i, j) == gray.value(k, l));
//! assert_eq!(n, 1);
//! assert_eq!(labels.dimensions(), (4, 4));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixkit_io as io;
pub use pixkit_region as region;
