mod common;

use common::{create_test_dir, local_time, write_file_with_mtime, write_manifest};
use listing_audit::{run_audit, AuditConfig, AuditError, ManifestError, MismatchReason, ScanError};

fn config_for(dir: &std::path::Path) -> AuditConfig {
    AuditConfig::new(dir.join("ocr-data.csv"), dir.to_path_buf())
}

#[tokio::test]
async fn test_end_to_end_match_and_extra() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();

    write_manifest(dir, "ocr-data.csv", &["a.txt,100,01.01.2024 10:00:00"]);
    write_file_with_mtime(dir, "a.txt", local_time("2024-01-01 10:00:01.000"));
    write_file_with_mtime(dir, "b.txt", local_time("2024-02-02 12:00:00.000"));

    let report = run_audit(&config_for(dir)).await.expect("Audit should run");

    let matched: Vec<&str> = report.matches.iter().map(|f| f.name.as_str()).collect();
    let extra: Vec<&str> = report.extra_in_directory.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(matched, vec!["a.txt"]);
    assert_eq!(extra, vec!["b.txt"]);
    assert!(report.mismatches.is_empty());
    assert!(report.missing_in_directory.is_empty());
    assert!(!report.is_clean(), "Extra files make the run unclean");
}

#[tokio::test]
async fn test_self_exclusion_yields_clean_empty_report() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();

    // Header plus a row too short to count
    write_manifest(dir, "ocr-data.csv", &["not,enough"]);
    write_file_with_mtime(dir, "listing-audit", local_time("2024-01-01 10:00:00.000"));

    let report = run_audit(&config_for(dir)).await.expect("Audit should run");

    assert!(report.is_empty());
    assert!(report.is_clean());
    assert_eq!(report.summary.directory_files, 0);
}

#[tokio::test]
async fn test_header_only_manifest_fails_fast() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();

    write_manifest(dir, "ocr-data.csv", &[]);

    // Listing a missing directory would also fail; the manifest error must win
    let config = AuditConfig::new(dir.join("ocr-data.csv"), dir.join("no-such-dir"));
    let result = run_audit(&config).await;
    assert!(matches!(
        result,
        Err(AuditError::ManifestError(ManifestError::Empty))
    ));
}

#[tokio::test]
async fn test_missing_manifest_is_read_error() {
    let temp_dir = create_test_dir();
    let result = run_audit(&config_for(temp_dir.path())).await;
    assert!(matches!(
        result,
        Err(AuditError::ManifestError(ManifestError::ReadError(_)))
    ));
}

#[tokio::test]
async fn test_unlistable_directory_is_scan_error() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();
    write_manifest(dir, "ocr-data.csv", &["a.txt,1,01.01.2024 10:00:00"]);

    let config = AuditConfig::new(dir.join("ocr-data.csv"), dir.join("missing"));
    let result = run_audit(&config).await;
    assert!(matches!(
        result,
        Err(AuditError::ScanError(ScanError::Access { .. }))
    ));
}

#[tokio::test]
async fn test_file_as_target_directory_is_scan_error() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();
    write_manifest(dir, "ocr-data.csv", &["a.txt,1,01.01.2024 10:00:00"]);
    write_file_with_mtime(dir, "a.txt", local_time("2024-01-01 10:00:00.000"));

    // Pointing at a file must abort, not report every row as missing
    let config = AuditConfig::new(dir.join("ocr-data.csv"), dir.join("a.txt"));
    let result = run_audit(&config).await;
    assert!(matches!(
        result,
        Err(AuditError::ScanError(ScanError::NotADirectory(_)))
    ));
}

#[tokio::test]
async fn test_all_four_buckets() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();

    write_manifest(
        dir,
        "ocr-data.csv",
        &[
            "same.txt,10,01.01.2024 10:00:00",
            "drift.txt,10,01.01.2024 10:00:00",
            "broken.txt,10,31.13.2024 99:99:99",
            "gone.txt,10,01.01.2024 10:00:00",
        ],
    );
    write_file_with_mtime(dir, "same.txt", local_time("2024-01-01 10:00:02.000"));
    write_file_with_mtime(dir, "drift.txt", local_time("2024-01-01 10:00:02.001"));
    write_file_with_mtime(dir, "broken.txt", local_time("2024-01-01 10:00:00.000"));
    write_file_with_mtime(dir, "surprise.txt", local_time("2024-01-01 10:00:00.000"));
    std::fs::create_dir(dir.join("subfolder")).expect("Failed to create subfolder");

    let report = run_audit(&config_for(dir)).await.expect("Audit should run");

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].name, "same.txt");

    assert_eq!(report.mismatches.len(), 2);
    assert_eq!(report.mismatches[0].name, "drift.txt");
    assert_eq!(
        report.mismatches[0].reason,
        MismatchReason::Drift { diff_ms: 2001 }
    );
    assert_eq!(report.mismatches[1].name, "broken.txt");
    assert_eq!(report.mismatches[1].reason, MismatchReason::InvalidDate);

    assert_eq!(report.missing_in_directory.len(), 1);
    assert_eq!(report.missing_in_directory[0].name, "gone.txt");

    assert_eq!(report.extra_in_directory.len(), 1);
    assert_eq!(report.extra_in_directory[0].name, "surprise.txt");

    assert_eq!(report.summary.manifest_files, 4);
    assert_eq!(report.summary.directory_files, 4);
    assert!(!report.is_clean());
}

#[tokio::test]
async fn test_duplicate_rows_last_wins_end_to_end() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();

    write_manifest(
        dir,
        "ocr-data.csv",
        &["dup.txt,1,01.01.2020 00:00:00", "dup.txt,2,01.01.2024 10:00:00"],
    );
    write_file_with_mtime(dir, "dup.txt", local_time("2024-01-01 10:00:00.500"));

    let report = run_audit(&config_for(dir)).await.expect("Audit should run");

    assert_eq!(report.matches.len(), 1);
    assert!(report.is_clean());
}

#[tokio::test]
async fn test_custom_manifest_name_is_excluded() {
    let temp_dir = create_test_dir();
    let dir = temp_dir.path();

    write_manifest(dir, "batch-7.csv", &["a.txt,1,01.01.2024 10:00:00"]);
    write_file_with_mtime(dir, "a.txt", local_time("2024-01-01 10:00:00.000"));

    let config = AuditConfig::new(dir.join("batch-7.csv"), dir.to_path_buf());
    let report = run_audit(&config).await.expect("Audit should run");

    assert!(report.extra_in_directory.is_empty());
    assert!(report.is_clean());
}
