//! pixkit-test - Regression test framework for pixkit
//!
//! This crate provides a regression test framework supporting three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! It also provides synthetic fixture images in [`fixtures`], so that
//! tests do not depend on checked-in image data.
//!
//! # Usage
//!
//! ```ignore
//! use pixkit_test::{RegParams, RegTestMode};
//!
//! let mut rp = RegParams::new("grow");
//! rp.compare_values(2.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixkit-test is at crates/pixkit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
