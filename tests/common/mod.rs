#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::path::Path;
use tempfile::TempDir;

pub const HEADER: &str = "Name,Size,Modified";

/// Create a temporary directory for a test
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Local time from `YYYY-MM-DD HH:MM:SS.mmm`
pub fn local_time(text: &str) -> DateTime<Local> {
    let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.3f")
        .expect("Invalid test timestamp");
    Local
        .from_local_datetime(&naive)
        .earliest()
        .expect("Nonexistent local time")
}

/// Write a file and set its modification time
pub fn write_file_with_mtime(dir: &Path, name: &str, modified: DateTime<Local>) {
    let path = dir.join(name);
    std::fs::write(&path, name).expect("Failed to write file");
    let file = std::fs::File::options()
        .write(true)
        .open(&path)
        .expect("Failed to open file");
    file.set_modified(modified.into())
        .expect("Failed to set mtime");
}

/// Write a manifest with a header line followed by `rows`
pub fn write_manifest(dir: &Path, name: &str, rows: &[&str]) {
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    std::fs::write(dir.join(name), content).expect("Failed to write manifest");
}
