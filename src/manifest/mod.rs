//! Manifest parsing.
//!
//! A manifest is comma-delimited text whose first line is a header. Every
//! following line describes one file as `name,size,modified[,...]`.

mod types;

pub use types::ManifestRecord;

use crate::utils::KeyedList;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Manifest appears to be empty or only contains a header")]
    Empty,
}

/// Manifest records keyed by file name, in file order
pub type ManifestListing = KeyedList<ManifestRecord>;

const DELIMITER: char = ',';

/// Parse manifest text into its rows.
///
/// The header line is dropped without inspection. Blank lines and lines with
/// fewer than three fields are skipped; extra fields are ignored.
pub fn parse_records(content: &str) -> Result<Vec<ManifestRecord>, ManifestError> {
    let lines: Vec<&str> = content.trim().lines().collect();

    if lines.len() < 2 {
        return Err(ManifestError::Empty);
    }

    let records = lines
        .iter()
        .skip(1)
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
            if fields.len() < 3 {
                return None;
            }
            Some(ManifestRecord {
                name: fields[0].to_string(),
                size_label: fields[1].to_string(),
                modified_text: fields[2].to_string(),
            })
        })
        .collect();

    Ok(records)
}

/// Parse manifest text into a listing keyed by file name.
///
/// When a name appears more than once the last row's data is kept.
pub fn parse_manifest(content: &str) -> Result<ManifestListing, ManifestError> {
    let listing: ManifestListing = parse_records(content)?
        .into_iter()
        .map(|record| (record.name.clone(), record))
        .collect();

    debug!(files = listing.len(), "Parsed manifest");
    Ok(listing)
}

/// Read and parse the manifest at `path`
pub async fn read_manifest(path: &Path) -> Result<ManifestListing, ManifestError> {
    let content = fs::read_to_string(path).await?;
    parse_manifest(&content)
}
