pub mod config;
pub mod listing;
pub mod manifest;
pub mod reconciliation;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use config::{AuditConfig, OutputFormat};
pub use listing::{scan_directory, DirectoryEntry, DirectoryListing, ScanError};
pub use manifest::{parse_manifest, read_manifest, ManifestError, ManifestListing, ManifestRecord};
pub use reconciliation::{
    classify, reconcile, ExtraFile, MatchedFile, MismatchReason, MismatchedFile, MissingFile,
    Outcome, Report, ReportSummary,
};
pub use report::{render_json, render_text};

use thiserror::Error;
use tracing::info;

/// Errors that abort an audit before a report exists
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Manifest error: {0}")]
    ManifestError(#[from] ManifestError),

    #[error("Scan error: {0}")]
    ScanError(#[from] ScanError),
}

/// Read the manifest, scan the directory and reconcile the two.
///
/// The manifest is read first, so an unreadable manifest aborts the run
/// before the directory is touched.
pub async fn run_audit(config: &AuditConfig) -> Result<Report, AuditError> {
    let manifest = read_manifest(&config.manifest_path).await?;
    info!("Found {} files in manifest", manifest.len());

    let directory = scan_directory(&config.directory, &config.excluded).await?;
    info!(
        "Found {} files in directory (excluding {} names)",
        directory.len(),
        config.excluded.len()
    );

    Ok(reconcile(&manifest, &directory, config.tolerance_ms))
}
