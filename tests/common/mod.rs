#![allow(dead_code)]

use std::io::Write;

use meshwork::layout::Position;
use tempfile::NamedTempFile;

pub use meshwork_test_utils::builders::{SnapshotBuilder, TaskBuilder};
pub use meshwork_test_utils::init_tracing;

const EPS: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_position(actual: &Position, x: f64, y: f64) {
    assert_close(actual.x, x);
    assert_close(actual.y, y);
}

/// Write `contents` to a temp file that lives as long as the returned handle.
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}
