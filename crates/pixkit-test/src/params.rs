//! Regression check bookkeeping
//!
//! A [`RegParams`] numbers every check of one regression test. Value and
//! image checks compare in memory; file checks write their output under
//! [`regout_dir`] and, depending on [`RegTestMode`], record it as the
//! golden copy or compare it with the one in [`golden_dir`].

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use pixkit_core::{Component, Image};
use std::fs;
use std::path::Path;

/// How file checks treat golden copies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Store each output as its golden copy
    Generate,
    /// Require each output to match its golden copy
    #[default]
    Compare,
    /// Write outputs for inspection only
    Display,
}

impl RegTestMode {
    /// Mode named by `REGTEST_MODE`, `Compare` when unset or unknown.
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// State of one regression test run
pub struct RegParams {
    /// Test name, used as the prefix of every output file
    pub test_name: String,
    index: usize,
    /// Golden file handling
    pub mode: RegTestMode,
    failures: Vec<String>,
}

impl RegParams {
    /// Start a run in the mode named by `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Start a run in an explicit mode.
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        eprintln!("=== {}_reg ({:?}) ===", test_name, mode);
        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Number of checks made so far
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether outputs are only written for inspection
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn next(&mut self) -> usize {
        self.index += 1;
        self.index
    }

    fn fail(&mut self, detail: String) -> bool {
        let msg = format!("{}_reg #{}: {}", self.test_name, self.index, detail);
        eprintln!("{}", msg);
        self.failures.push(msg);
        false
    }

    /// Check that `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.next();
        let diff = (expected - actual).abs();
        if diff > delta {
            return self.fail(format!(
                "expected {}, got {} (diff {} > {})",
                expected, actual, diff, delta
            ));
        }
        true
    }

    /// Check that two images have the same shape and identical pixels.
    pub fn compare_images<T: Component, const C: usize>(
        &mut self,
        expected: &Image<T, C>,
        actual: &Image<T, C>,
    ) -> bool {
        self.next();
        if let Err(e) = expected.check_same_shape(actual) {
            return self.fail(e.to_string());
        }
        let mismatch = expected
            .pixels()
            .iter()
            .zip(actual.pixels())
            .position(|(a, b)| a != b);
        match mismatch {
            Some(k) => {
                let (i, j) = (k / expected.width(), k % expected.width());
                self.fail(format!(
                    "pixel ({}, {}) differs: expected {:?}, got {:?}",
                    i,
                    j,
                    expected.pixels()[k],
                    actual.pixels()[k]
                ))
            }
            None => true,
        }
    }

    /// Check that two byte strings are identical.
    pub fn compare_strings(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.next();
        if expected != actual {
            return self.fail(format!(
                "byte strings differ ({} vs {} bytes)",
                expected.len(),
                actual.len()
            ));
        }
        true
    }

    /// Save `image` as PNG and check it against its golden copy.
    ///
    /// Golden images match when their bytes or their decoded pixels agree.
    pub fn write_image_and_check<T: Component, const C: usize>(
        &mut self,
        image: &Image<T, C>,
    ) -> TestResult<()> {
        let path = self.output_path("png")?;
        pixkit_io::save(&path, image).map_err(|e| TestError::ImageWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        self.check_golden(&path, "png")
    }

    /// Write `data` with extension `ext` and check it against its golden copy.
    pub fn write_data_and_check(&mut self, data: &[u8], ext: &str) -> TestResult<()> {
        let path = self.output_path(ext)?;
        fs::write(&path, data)?;
        self.check_golden(&path, ext)
    }

    fn output_path(&mut self, ext: &str) -> TestResult<String> {
        let index = self.next();
        fs::create_dir_all(regout_dir())?;
        Ok(format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            index,
            ext
        ))
    }

    fn check_golden(&mut self, path: &str, ext: &str) -> TestResult<()> {
        let golden = format!(
            "{}/{}_golden.{:02}.{}",
            golden_dir(),
            self.test_name,
            self.index,
            ext
        );

        match self.mode {
            RegTestMode::Display => {}
            RegTestMode::Generate => {
                fs::create_dir_all(golden_dir())?;
                fs::copy(path, &golden)?;
                eprintln!("golden: {}", golden);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden).exists() {
                    self.fail(format!("missing golden file {}", golden));
                } else if fs::read(path)? != fs::read(&golden)? && !same_pixels(path, &golden) {
                    self.fail(format!("{} differs from {}", path, golden));
                }
            }
        }
        Ok(())
    }

    /// Report the outcome; `true` when every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("{}_reg: {} check(s) passed", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "{}_reg: {} of {} check(s) failed",
            self.test_name,
            self.failures.len(),
            self.index
        );
        for failure in &self.failures {
            eprintln!("  {}", failure);
        }
        false
    }

    /// Whether every check so far passed
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Messages of the failed checks
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Two image files decode to the same buffer
fn same_pixels(path1: &str, path2: &str) -> bool {
    match (pixkit_io::read_image(path1), pixkit_io::read_image(path2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixkit_core::{ImageGi, ImageRgbaF};

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::with_mode("params_values", RegTestMode::Compare);
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert_eq!(rp.index(), 3);
        assert_eq!(rp.failures().len(), 1);
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_images() {
        let mut rp = RegParams::with_mode("params_images", RegTestMode::Compare);
        let a = ImageGi::filled(2, 2, [3]);
        let mut b = a.clone();
        assert!(rp.compare_images(&a, &b));
        b[(1, 1)] = [4];
        assert!(!rp.compare_images(&a, &b));
        assert!(!rp.compare_images(&a, &ImageGi::new(2, 3)));
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_generate_then_compare() {
        let image = ImageRgbaF::filled(4, 3, [0.2, 0.4, 0.6, 1.0]);

        let mut rp = RegParams::with_mode("params_roundtrip", RegTestMode::Generate);
        rp.write_image_and_check(&image).unwrap();
        rp.write_data_and_check(b"2 2\n0 1\n1 0\n", "lbl").unwrap();
        assert!(rp.cleanup());

        let mut rp = RegParams::with_mode("params_roundtrip", RegTestMode::Compare);
        rp.write_image_and_check(&image).unwrap();
        rp.write_data_and_check(b"2 2\n0 1\n1 0\n", "lbl").unwrap();
        assert!(rp.cleanup());

        let mut rp = RegParams::with_mode("params_roundtrip", RegTestMode::Compare);
        rp.write_image_and_check(&ImageRgbaF::filled(4, 3, [0.0, 0.4, 0.6, 1.0]))
            .unwrap();
        rp.write_data_and_check(b"2 2\n0 1\n1 1\n", "lbl").unwrap();
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_missing_golden_fails() {
        let mut rp = RegParams::with_mode("params_no_golden", RegTestMode::Compare);
        rp.write_data_and_check(b"data", "missing").unwrap();
        assert!(!rp.is_success());
    }

    #[test]
    fn test_display_skips_golden() {
        let mut rp = RegParams::with_mode("params_display", RegTestMode::Display);
        assert!(rp.display());
        rp.write_image_and_check(&ImageGi::filled(2, 2, [128])).unwrap();
        assert!(rp.cleanup());
    }
}
