use serde::Serialize;

/// One data row of the manifest, kept verbatim
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestRecord {
    pub name: String,
    pub size_label: String,
    /// Unparsed timestamp in `DD.MM.YYYY HH:MM:SS` form
    pub modified_text: String,
}
