//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use pixgroup_core::{ColorBuffer, PixelSet};
use pixgroup_io::ImageFormat;
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Run the checks only (default)
    #[default]
    Compare,
    /// Run the checks and write snapshot images
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check, the mode and the
/// recorded failures.
pub struct RegParams {
    /// Name of the test (e.g., "grouping")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) -> bool {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
        false
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Record a boolean condition
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if condition {
            true
        } else {
            let msg = format!(
                "Failure in {}_reg: check for index {} - {}",
                self.test_name, self.index, what
            );
            self.fail(msg)
        }
    }

    /// Compare two color buffers cell by cell
    pub fn compare_buffers(&mut self, buf1: &ColorBuffer, buf2: &ColorBuffer) -> bool {
        self.index += 1;

        if buf1.width() != buf2.width() || buf1.height() != buf2.height() {
            let msg = format!(
                "Failure in {}_reg: buffer comparison for index {} - dimension mismatch",
                self.test_name, self.index
            );
            return self.fail(msg);
        }

        let canvas = buf1.canvas();
        let mismatch = buf1
            .cells()
            .iter()
            .zip(buf2.cells())
            .position(|(a, b)| a != b);
        if let Some(i) = mismatch {
            let msg = format!(
                "Failure in {}_reg: buffer comparison for index {} - cell mismatch at {}",
                self.test_name,
                self.index,
                canvas.pixel_at(i)
            );
            return self.fail(msg);
        }

        true
    }

    /// Compare two pixel sets for equality
    pub fn compare_pixel_sets(&mut self, expected: &PixelSet, actual: &PixelSet) -> bool {
        self.index += 1;

        if expected != actual {
            let missing = expected.difference(actual).count();
            let extra = actual.difference(expected).count();
            let msg = format!(
                "Failure in {}_reg: pixel set comparison for index {}\n\
                 sizes: {} vs {}, missing = {}, extra = {}",
                self.test_name,
                self.index,
                expected.len(),
                actual.len(),
                missing,
                extra
            );
            self.fail(msg)
        } else {
            true
        }
    }

    /// Write a PNG snapshot of `buffer` in display mode
    ///
    /// Does nothing in compare mode. Snapshots are written to
    /// `tests/regout/<name>.<index>.png` under the workspace root.
    pub fn write_buffer(&mut self, buffer: &ColorBuffer) -> TestResult<()> {
        self.index += 1;

        if self.mode != RegTestMode::Display {
            return Ok(());
        }

        fs::create_dir_all(regout_dir())?;
        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            ImageFormat::Png.extension()
        );
        pixgroup_io::write_image(buffer, &local_path, ImageFormat::Png).map_err(|e| {
            TestError::ImageWrite {
                path: local_path.clone(),
                message: e.to_string(),
            }
        })?;
        eprintln!("Wrote: {}", local_path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
