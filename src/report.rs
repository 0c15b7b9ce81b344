//! Output formatting for scan results.
//!
//! Supports two report formats, both written to a file:
//! - Text: the line-oriented gap report
//! - JSON: the same data for programmatic consumption
//!
//! A colored one-line summary is printed to the terminal afterwards.

use anyhow::Context;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::analysis::base_name;
use crate::detect::{ClassCount, FindingStatus, ScanResult};

// =============================================================================
// Text Format
// =============================================================================

/// Write results in the text report format.
///
/// Layout: a STATS block with the per-file breakdown, a `---` separator, one
/// line per finding in discovery order, then every discovered file.
pub fn write_text<W: Write>(out: &mut W, result: &ScanResult) -> std::io::Result<()> {
    let counts = result.class_counts();

    writeln!(out, "STATS:")?;
    writeln!(out, "Total missing Javadoc entries: {}", result.total())?;
    writeln!(out, "Classes affected: {}", counts.len())?;
    writeln!(out, "Class breakdown:")?;
    for entry in &counts {
        writeln!(out, "{}: {}", entry.name, entry.count)?;
    }

    write!(out, "\n---\n\n")?;
    for f in &result.findings {
        writeln!(
            out,
            "{}: {}:{} {}",
            f.status.label(),
            f.file.display(),
            f.line,
            f.method
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Full paths with class names:")?;
    for file in &result.files {
        writeln!(out, "{} ({})", file.display(), base_name(file))?;
    }

    Ok(())
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub files_scanned: usize,
    pub total: usize,
    pub missing: usize,
    pub one_liners: usize,
    pub classes_affected: usize,
    pub class_breakdown: Vec<ClassCount>,
    pub findings: Vec<JsonFinding>,
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<JsonSkipped>,
}

/// JSON finding structure.
#[derive(Serialize, Deserialize)]
pub struct JsonFinding {
    pub status: String,
    pub file: String,
    pub line: usize,
    pub method: String,
}

/// A file left out because it could not be parsed.
#[derive(Serialize, Deserialize)]
pub struct JsonSkipped {
    pub file: String,
    pub reason: String,
}

/// Build the JSON report for a scan of `path`.
pub fn json_report(path: &str, result: &ScanResult) -> JsonReport {
    let class_breakdown = result.class_counts();

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        files_scanned: result.files.len(),
        total: result.total(),
        missing: result.count_status(FindingStatus::Missing),
        one_liners: result.count_status(FindingStatus::OneLiner),
        classes_affected: class_breakdown.len(),
        class_breakdown,
        findings: result
            .findings
            .iter()
            .map(|f| JsonFinding {
                status: f.status.as_str().to_string(),
                file: f.file.to_string_lossy().to_string(),
                line: f.line,
                method: f.method.clone(),
            })
            .collect(),
        files: result
            .files
            .iter()
            .map(|f| f.to_string_lossy().to_string())
            .collect(),
        skipped: result
            .skipped
            .iter()
            .map(|s| JsonSkipped {
                file: s.file.to_string_lossy().to_string(),
                reason: s.reason.clone(),
            })
            .collect(),
    }
}

/// Write results in JSON format.
pub fn write_json<W: Write>(out: &mut W, path: &str, result: &ScanResult) -> anyhow::Result<()> {
    let report = json_report(path, result);
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

// =============================================================================
// Report file
// =============================================================================

/// Write the report for a scan of `scan_path` to `output` in `format`.
///
/// Failing to create or write the file is fatal for the run.
pub fn write_report(
    output: &Path,
    format: &str,
    scan_path: &str,
    result: &ScanResult,
) -> anyhow::Result<()> {
    let file = File::create(output)
        .with_context(|| format!("cannot create report file {}", output.display()))?;
    let mut out = BufWriter::new(file);

    match format {
        "json" => write_json(&mut out, scan_path, result)?,
        _ => write_text(&mut out, result)?,
    }

    out.flush()
        .with_context(|| format!("cannot write report file {}", output.display()))?;
    Ok(())
}

/// Print the completion message.
pub fn print_summary(output: &Path, result: &ScanResult) {
    let total = result.total();
    let count = if total == 0 {
        total.to_string().green()
    } else {
        total.to_string().yellow().bold()
    };
    println!(
        "Report written to {} with {} entries.",
        output.display().to_string().bold(),
        count
    );

    let missing = result.count_status(FindingStatus::Missing);
    let one_liners = result.count_status(FindingStatus::OneLiner);
    if total > 0 {
        println!(
            "  {}",
            format!(
                "{} missing, {} one-liner, across {} files",
                missing,
                one_liners,
                result.classes_affected()
            )
            .dimmed()
        );
    }
    if !result.skipped.is_empty() {
        println!(
            "  {}",
            format!("{} files skipped (could not be parsed)", result.skipped.len()).dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{Finding, SkippedFile};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_result() -> ScanResult {
        let a = PathBuf::from("src/a/Alpha.java");
        let b = PathBuf::from("src/b/Beta.java");
        let c = PathBuf::from("src/c/Broken.java");
        ScanResult {
            findings: vec![
                Finding {
                    file: b.clone(),
                    line: 4,
                    method: "run".to_string(),
                    status: FindingStatus::Missing,
                },
                Finding {
                    file: a.clone(),
                    line: 10,
                    method: "load".to_string(),
                    status: FindingStatus::OneLiner,
                },
                Finding {
                    file: a.clone(),
                    line: 20,
                    method: "save".to_string(),
                    status: FindingStatus::Missing,
                },
            ],
            files: vec![a, b, c.clone()],
            skipped: vec![SkippedFile {
                file: c,
                reason: "syntax error near line 3".to_string(),
            }],
        }
    }

    #[test]
    fn test_text_report_layout() {
        let mut out = Vec::new();
        write_text(&mut out, &sample_result()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let a = Path::new("src/a/Alpha.java").display().to_string();
        let b = Path::new("src/b/Beta.java").display().to_string();
        let c = Path::new("src/c/Broken.java").display().to_string();
        let expected = format!(
            "STATS:\n\
             Total missing Javadoc entries: 3\n\
             Classes affected: 2\n\
             Class breakdown:\n\
             Alpha.java: 2\n\
             Beta.java: 1\n\
             \n\
             ---\n\
             \n\
             Missing Javadoc: {b}:4 run\n\
             Unclear/One-liner Javadoc: {a}:10 load\n\
             Missing Javadoc: {a}:20 save\n\
             \n\
             Full paths with class names:\n\
             {a} (Alpha.java)\n\
             {b} (Beta.java)\n\
             {c} (Broken.java)\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_report_empty() {
        let mut out = Vec::new();
        write_text(&mut out, &ScanResult::new()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "STATS:\nTotal missing Javadoc entries: 0\nClasses affected: 0\nClass breakdown:\n\n---\n\n\nFull paths with class names:\n"
        );
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_json(&mut out, "src", &sample_result()).unwrap();
        let report: JsonReport = serde_json::from_slice(&out).unwrap();

        assert_eq!(report.path, "src");
        assert_eq!(report.total, 3);
        assert_eq!(report.missing, 2);
        assert_eq!(report.one_liners, 1);
        assert_eq!(report.classes_affected, 2);
        assert_eq!(report.class_breakdown[0].name, "Alpha.java");
        assert_eq!(report.findings[1].status, "one_liner");
        assert_eq!(report.files_scanned, 3);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn test_write_report_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("report.txt");
        write_report(&output, "text", "src", &sample_result()).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("STATS:\nTotal missing Javadoc entries: 3\n"));
    }

    #[test]
    fn test_write_report_unwritable_is_error() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("missing-dir").join("report.txt");
        let err = write_report(&output, "text", "src", &sample_result()).unwrap_err();
        assert!(err.to_string().contains("cannot create report file"));
    }
}
