use chrono::{DateTime, Local};
use serde::Serialize;

/// Why a file present on both sides did not match
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MismatchReason {
    /// The manifest timestamp could not be parsed
    InvalidDate,
    /// The timestamps differ by more than the tolerance
    #[serde(rename_all = "camelCase")]
    Drift { diff_ms: i64 },
}

impl MismatchReason {
    /// Fixed reason text for unparsable manifest dates
    pub const INVALID_DATE_TEXT: &'static str = "Invalid CSV date format";
}

/// Listed and present with a timestamp inside the tolerance
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchedFile {
    pub name: String,
    pub manifest_text: String,
    pub actual: DateTime<Local>,
}

/// Listed and present, but the timestamps disagree
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MismatchedFile {
    pub name: String,
    pub manifest_text: String,
    pub actual: DateTime<Local>,
    pub reason: MismatchReason,
}

/// Listed in the manifest, absent from the directory
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MissingFile {
    pub name: String,
    pub manifest_text: String,
}

/// Present in the directory, absent from the manifest
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtraFile {
    pub name: String,
    pub actual: DateTime<Local>,
}

/// Classification of a single file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Match(MatchedFile),
    Mismatch(MismatchedFile),
    MissingInDirectory(MissingFile),
    ExtraInDirectory(ExtraFile),
}

impl Outcome {
    pub fn name(&self) -> &str {
        match self {
            Outcome::Match(f) => &f.name,
            Outcome::Mismatch(f) => &f.name,
            Outcome::MissingInDirectory(f) => &f.name,
            Outcome::ExtraInDirectory(f) => &f.name,
        }
    }
}

/// Per-bucket counts of a report
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub manifest_files: usize,
    pub directory_files: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub missing_in_directory: usize,
    pub extra_in_directory: usize,
}

/// The result of reconciling a manifest with a directory
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: ReportSummary,
    pub matches: Vec<MatchedFile>,
    pub mismatches: Vec<MismatchedFile>,
    pub missing_in_directory: Vec<MissingFile>,
    pub extra_in_directory: Vec<ExtraFile>,
}

impl Report {
    /// A run is clean when nothing but matches were found
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
            && self.missing_in_directory.is_empty()
            && self.extra_in_directory.is_empty()
    }

    /// Total number of classified file names
    pub fn len(&self) -> usize {
        self.matches.len()
            + self.mismatches.len()
            + self.missing_in_directory.len()
            + self.extra_in_directory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All outcomes, bucket by bucket
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.matches
            .iter()
            .cloned()
            .map(Outcome::Match)
            .chain(self.mismatches.iter().cloned().map(Outcome::Mismatch))
            .chain(
                self.missing_in_directory
                    .iter()
                    .cloned()
                    .map(Outcome::MissingInDirectory),
            )
            .chain(
                self.extra_in_directory
                    .iter()
                    .cloned()
                    .map(Outcome::ExtraInDirectory),
            )
    }

    pub(super) fn push(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Match(f) => self.matches.push(f),
            Outcome::Mismatch(f) => self.mismatches.push(f),
            Outcome::MissingInDirectory(f) => self.missing_in_directory.push(f),
            Outcome::ExtraInDirectory(f) => self.extra_in_directory.push(f),
        }
    }

    pub(super) fn finish(mut self, manifest_files: usize, directory_files: usize) -> Self {
        self.summary = ReportSummary {
            manifest_files,
            directory_files,
            matches: self.matches.len(),
            mismatches: self.mismatches.len(),
            missing_in_directory: self.missing_in_directory.len(),
            extra_in_directory: self.extra_in_directory.len(),
        };
        self
    }
}
