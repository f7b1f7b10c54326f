use chrono::{DateTime, Local};
use serde::Serialize;

/// A regular file found in the scanned directory
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub name: String,
    pub modified_at: DateTime<Local>,
}
