use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Timestamp layout used by manifests and by the report: `DD.MM.YYYY HH:MM:SS`
pub const MANIFEST_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Parse a manifest timestamp as local time.
///
/// Returns `None` for anything that is not a valid calendar date and time in
/// [`MANIFEST_DATE_FORMAT`], including local times skipped by a DST change.
/// An ambiguous local time resolves to the earlier instant.
pub fn parse_manifest_date(text: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(text.trim(), MANIFEST_DATE_FORMAT).ok()?;
    Local.from_local_datetime(&naive).earliest()
}

/// Format a timestamp for display, truncated to whole seconds
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format(MANIFEST_DATE_FORMAT).to_string()
}
