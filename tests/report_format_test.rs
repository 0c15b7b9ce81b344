//! Tests for the report files produced from a real scan.

use std::path::PathBuf;

use globset::GlobSet;
use javadoc_gaps::analysis::JavaAnalyzer;
use javadoc_gaps::detect::{discover_files, Runner, ScanResult};
use javadoc_gaps::report::{self, JsonReport};
use tempfile::TempDir;

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join("java")
}

fn run_scan() -> ScanResult {
    let parser = JavaAnalyzer::new();
    let files = discover_files(&testdata_path(), &parser, &GlobSet::empty())
        .expect("should discover files");
    Runner::new(&parser).run(&files)
}

fn write(format: &str) -> String {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("report.out");
    let root = testdata_path().to_string_lossy().to_string();
    report::write_report(&output, format, &root, &run_scan()).expect("report should be written");
    std::fs::read_to_string(&output).unwrap()
}

#[test]
fn test_text_report_stats_block() {
    let text = write("text");
    let stats: Vec<&str> = text.lines().take(9).collect();

    assert_eq!(
        stats,
        vec![
            "STATS:",
            "Total missing Javadoc entries: 10",
            "Classes affected: 5",
            "Class breakdown:",
            "Scheduler.java: 3",
            "Worker.java: 3",
            "Strings.java: 2",
            "BaseService.java: 1",
            "DerivedService.java: 1",
        ]
    );
    assert!(text.contains("\n\n---\n\n"));
}

#[test]
fn test_text_report_finding_lines() {
    let text = write("text");
    let findings: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with("Missing Javadoc: ") || l.starts_with("Unclear/One-liner Javadoc: "))
        .collect();

    assert_eq!(findings.len(), 10);
    assert!(findings[0].starts_with("Missing Javadoc: "));
    assert!(findings[0].ends_with("BaseService.java:14 stop"));
    assert!(findings[2].ends_with("Scheduler.java:8 schedule"));
    assert!(findings[5].starts_with("Unclear/One-liner Javadoc: "));
    assert!(findings[5].ends_with("Worker.java:17 process"));
}

#[test]
fn test_text_report_file_listing() {
    let text = write("text");
    let listing: Vec<&str> = text
        .split("Full paths with class names:\n")
        .nth(1)
        .expect("listing section")
        .lines()
        .collect();

    assert_eq!(listing.len(), 7);
    assert!(listing.iter().any(|l| l.ends_with("Broken.java (Broken.java)")));
    assert!(listing[6].ends_with("Strings.java (Strings.java)"));
}

#[test]
fn test_json_report_matches_text() {
    let json = write("json");
    let report: JsonReport = serde_json::from_str(&json).expect("valid JSON report");

    assert_eq!(report.total, 10);
    assert_eq!(report.missing, 9);
    assert_eq!(report.one_liners, 1);
    assert_eq!(report.classes_affected, 5);
    assert_eq!(report.files_scanned, 7);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.findings[5].method, "process");
    assert_eq!(report.findings[5].status, "one_liner");
}
