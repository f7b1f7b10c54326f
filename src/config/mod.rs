use crate::utils::{file_name_of, DEFAULT_TOLERANCE_MS, MANIFEST_FILE, PROGRAM_FILE};
use std::collections::HashSet;
use std::path::PathBuf;

/// Output format of the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one audit run
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Manifest to read
    pub manifest_path: PathBuf,
    /// Directory whose files are audited
    pub directory: PathBuf,
    /// File names never reported by the scan
    pub excluded: HashSet<String>,
    /// Largest timestamp difference still counted as a match
    pub tolerance_ms: i64,
    pub format: OutputFormat,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(MANIFEST_FILE), PathBuf::from("."))
    }
}

impl AuditConfig {
    /// Build a config excluding the manifest and the program itself
    pub fn new(manifest_path: PathBuf, directory: PathBuf) -> Self {
        let mut excluded = HashSet::from([PROGRAM_FILE.to_string()]);
        excluded.extend(file_name_of(&manifest_path));

        Self {
            manifest_path,
            directory,
            excluded,
            tolerance_ms: DEFAULT_TOLERANCE_MS,
            format: OutputFormat::default(),
        }
    }

    /// Add another name to the exclusion set
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.insert(name.into());
        self
    }

    /// File name of the manifest, for display
    pub fn manifest_name(&self) -> String {
        file_name_of(&self.manifest_path)
            .unwrap_or_else(|| self.manifest_path.display().to_string())
    }
}
