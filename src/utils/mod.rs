mod date;
mod keyed_list;

pub use date::{format_timestamp, parse_manifest_date, MANIFEST_DATE_FORMAT};
pub use keyed_list::KeyedList;

/// Default name of the manifest file, resolved against the working directory
pub const MANIFEST_FILE: &str = "ocr-data.csv";

/// The program's own file name, never reported as an extra file
pub const PROGRAM_FILE: &str = "listing-audit";

/// Two timestamps closer than this are treated as equal
pub const DEFAULT_TOLERANCE_MS: i64 = 2000;

/// Get the file name component of a path as an owned string
pub fn file_name_of(path: &std::path::Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().to_string())
}
