//! Console rendering of a [`Report`].

use crate::config::AuditConfig;
use crate::reconciliation::{MismatchReason, Report};
use crate::utils::{format_timestamp, PROGRAM_FILE};
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

/// Write the human-readable report
pub fn render_text<W: Write>(report: &Report, config: &AuditConfig, out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "COMPARISON RESULTS")?;
    writeln!(out, "{}", rule)?;

    writeln!(out, "\nMATCHES: {} file(s)", report.matches.len())?;
    for file in &report.matches {
        writeln!(out, "   {}", file.name)?;
        writeln!(out, "      Date: {} ok", file.manifest_text)?;
    }

    writeln!(out, "\nMISMATCHES: {} file(s)", report.mismatches.len())?;
    for file in &report.mismatches {
        writeln!(out, "   {}", file.name)?;
        match file.reason {
            MismatchReason::InvalidDate => {
                writeln!(out, "      ! {}", MismatchReason::INVALID_DATE_TEXT)?;
            }
            MismatchReason::Drift { diff_ms } => {
                writeln!(out, "      Manifest: {}", file.manifest_text)?;
                writeln!(out, "      Actual:   {}", format_timestamp(&file.actual))?;
                writeln!(out, "      Diff:     {:.1} seconds", diff_ms as f64 / 1000.0)?;
            }
        }
    }

    writeln!(out, "\nMISSING IN DIRECTORY: {} file(s)", report.missing_in_directory.len())?;
    for file in &report.missing_in_directory {
        writeln!(out, "   {}", file.name)?;
        writeln!(out, "      Expected: {}", file.manifest_text)?;
    }

    writeln!(out, "\nEXTRA IN DIRECTORY: {} file(s)", report.extra_in_directory.len())?;
    for file in &report.extra_in_directory {
        writeln!(out, "   {}", file.name)?;
        writeln!(out, "      Actual: {}", format_timestamp(&file.actual))?;
    }

    let summary = &report.summary;
    writeln!(out, "\n{}", rule)?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "   Manifest file:           {}", config.manifest_name())?;
    writeln!(out, "   Program file:            {}", PROGRAM_FILE)?;
    writeln!(out, "   Files in manifest:       {}", summary.manifest_files)?;
    writeln!(out, "   Files in directory:      {}", summary.directory_files)?;
    writeln!(out, "   Matches:                 {}", summary.matches)?;
    writeln!(out, "   Mismatches:              {}", summary.mismatches)?;
    writeln!(out, "   Missing in directory:    {}", summary.missing_in_directory)?;
    writeln!(out, "   Extra in directory:      {}", summary.extra_in_directory)?;
    writeln!(out, "{}", rule)?;

    if report.is_clean() {
        writeln!(out, "\nAll files match perfectly!")?;
    } else {
        writeln!(out, "\nDiscrepancies found!")?;
    }

    Ok(())
}

/// Write the report as pretty-printed JSON
pub fn render_json<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
