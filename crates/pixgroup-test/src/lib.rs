//! pixgroup-test - Regression test framework for pixgroup
//!
//! Each regression test creates a [`RegParams`], records a sequence of
//! numbered checks, and asserts on [`RegParams::cleanup`] at the end so a
//! single run reports every failing check instead of stopping at the first.
//!
//! Two modes are supported:
//!
//! - **Compare**: Run the checks (default)
//! - **Display**: Run the checks and also write PNG snapshots of the
//!   buffers passed to [`RegParams::write_buffer`] for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use pixgroup_test::RegParams;
//!
//! let mut rp = RegParams::new("grouping");
//! rp.compare_values(2.0, store.group_count() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixgroup_core::{Pixel, PixelSet};
use std::collections::{HashSet, VecDeque};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixgroup-test is at crates/pixgroup-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// True if every pixel in `pixels` is reachable from every other through
/// 8-connected steps inside the set. The empty set counts as connected.
pub fn is_8_connected(pixels: &PixelSet) -> bool {
    let Some(&start) = pixels.iter().next() else {
        return true;
    };
    let mut seen: HashSet<Pixel> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(p) = queue.pop_front() {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let n = p.offset(dx, dy);
                if pixels.contains(&n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
    }
    seen.len() == pixels.len()
}

/// Pixels of the closed rectangle `[x0, x1] × [y0, y1]`.
pub fn rect_pixels(x0: i32, y0: i32, x1: i32, y1: i32) -> PixelSet {
    let mut set = PixelSet::new();
    for y in y0..=y1 {
        for x in x0..=x1 {
            set.insert(Pixel::new(x, y));
        }
    }
    set
}
