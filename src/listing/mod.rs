//! Flat directory scanning.

mod types;

pub use types::DirectoryEntry;

use crate::utils::KeyedList;
use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::{fs, task};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to access {path}: {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("Directory scan task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

/// Directory entries keyed by file name, in listing order
pub type DirectoryListing = KeyedList<DirectoryEntry>;

/// List the regular files directly inside `dir` with their modification times.
///
/// Subdirectories, symlinks and special files are ignored, as is any file
/// whose name is in `excluded`. A file whose metadata cannot be read is
/// skipped with a warning. Only a failure to list `dir` itself is an error,
/// including `dir` not being a directory.
pub async fn scan_directory(
    dir: &Path,
    excluded: &HashSet<String>,
) -> Result<DirectoryListing, ScanError> {
    let metadata = fs::metadata(dir).await.map_err(|source| ScanError::Access {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let dir = dir.to_path_buf();
    let excluded = excluded.clone();
    task::spawn_blocking(move || walk_directory(&dir, &excluded)).await?
}

/// Blocking part of [`scan_directory`], run off the async runtime
fn walk_directory(dir: &Path, excluded: &HashSet<String>) -> Result<DirectoryListing, ScanError> {
    let mut listing = DirectoryListing::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(ScanError::ReadDir {
                    path: dir.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                warn!(error = %err, "Could not read directory entry, skipping");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if excluded.contains(&name) {
            continue;
        }

        let modified = entry
            .metadata()
            .map_err(std::io::Error::from)
            .and_then(|metadata| metadata.modified());

        match modified {
            Ok(system_time) => {
                let modified_at: DateTime<Local> = system_time.into();
                listing.insert(name.clone(), DirectoryEntry { name, modified_at });
            }
            Err(err) => {
                warn!(file = %name, error = %err, "Could not stat file, skipping");
            }
        }
    }

    debug!(files = listing.len(), dir = %dir.display(), "Scanned directory");
    Ok(listing)
}
