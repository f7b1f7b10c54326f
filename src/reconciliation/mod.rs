//! Reconciliation of a manifest against a directory listing.
//!
//! Every name from either side lands in exactly one of four buckets:
//! 1. Match: on both sides, timestamps within the tolerance
//! 2. Mismatch: on both sides, but the manifest date is unparsable or drifts
//! 3. Missing in directory: only in the manifest
//! 4. Extra in directory: only in the directory
//!
//! Manifest-driven buckets follow manifest order; the extra bucket follows
//! directory order.

mod types;

pub use types::{
    ExtraFile, MatchedFile, MismatchReason, MismatchedFile, MissingFile, Outcome, Report,
    ReportSummary,
};

use crate::listing::{DirectoryEntry, DirectoryListing};
use crate::manifest::{ManifestListing, ManifestRecord};
use crate::utils::parse_manifest_date;

/// Classify a manifest record against the directory entry of the same name
pub fn classify(
    record: &ManifestRecord,
    entry: Option<&DirectoryEntry>,
    tolerance_ms: i64,
) -> Outcome {
    let Some(entry) = entry else {
        return Outcome::MissingInDirectory(MissingFile {
            name: record.name.clone(),
            manifest_text: record.modified_text.clone(),
        });
    };

    let Some(expected) = parse_manifest_date(&record.modified_text) else {
        return Outcome::Mismatch(MismatchedFile {
            name: record.name.clone(),
            manifest_text: record.modified_text.clone(),
            actual: entry.modified_at,
            reason: MismatchReason::InvalidDate,
        });
    };

    let diff_ms = (expected - entry.modified_at).num_milliseconds().abs();

    if diff_ms <= tolerance_ms {
        Outcome::Match(MatchedFile {
            name: record.name.clone(),
            manifest_text: record.modified_text.clone(),
            actual: entry.modified_at,
        })
    } else {
        Outcome::Mismatch(MismatchedFile {
            name: record.name.clone(),
            manifest_text: record.modified_text.clone(),
            actual: entry.modified_at,
            reason: MismatchReason::Drift { diff_ms },
        })
    }
}

/// Reconcile a manifest with a directory listing
pub fn reconcile(
    manifest: &ManifestListing,
    directory: &DirectoryListing,
    tolerance_ms: i64,
) -> Report {
    let mut report = Report::default();

    for (name, record) in manifest.iter() {
        report.push(classify(record, directory.get(name), tolerance_ms));
    }

    for (name, entry) in directory.iter() {
        if !manifest.contains_key(name) {
            report.push(Outcome::ExtraInDirectory(ExtraFile {
                name: name.to_string(),
                actual: entry.modified_at,
            }));
        }
    }

    report.finish(manifest.len(), directory.len())
}
