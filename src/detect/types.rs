//! Core types for scan results.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::analysis::base_name;

/// Documentation state of a reported method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingStatus {
    /// No Javadoc above the method.
    #[serde(rename = "missing")]
    Missing,
    /// A Javadoc that fits on a single line.
    #[serde(rename = "one_liner")]
    OneLiner,
}

impl FindingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingStatus::Missing => "missing",
            FindingStatus::OneLiner => "one_liner",
        }
    }

    /// Label used in the text report.
    pub fn label(&self) -> &'static str {
        match self {
            FindingStatus::Missing => "Missing Javadoc",
            FindingStatus::OneLiner => "Unclear/One-liner Javadoc",
        }
    }
}

impl std::fmt::Display for FindingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single documentation gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub file: PathBuf,
    pub line: usize,
    pub method: String,
    pub status: FindingStatus,
}

impl Finding {
    /// File name component used for the per-file breakdown.
    pub fn base_name(&self) -> String {
        base_name(&self.file)
    }
}

/// Number of findings attributed to one file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCount {
    pub name: String,
    pub count: usize,
}

/// A discovered file that was left out of cataloguing and analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub file: PathBuf,
    pub reason: String,
}

/// Results of a scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    /// Findings in discovery order.
    pub findings: Vec<Finding>,
    /// Every discovered file in discovery order, parsed or not.
    pub files: Vec<PathBuf>,
    /// Files whose parse failed.
    #[serde(default)]
    pub skipped: Vec<SkippedFile>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finding to the result.
    pub fn add_finding(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Total number of findings.
    pub fn total(&self) -> usize {
        self.findings.len()
    }

    /// Findings per file name, sorted by count descending then name ascending.
    ///
    /// Files sharing a name in different directories are counted together.
    pub fn class_counts(&self) -> Vec<ClassCount> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for finding in &self.findings {
            *counts.entry(finding.base_name()).or_insert(0) += 1;
        }

        let mut counts: Vec<ClassCount> = counts
            .into_iter()
            .map(|(name, count)| ClassCount { name, count })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        counts
    }

    /// Number of distinct file names with at least one finding.
    pub fn classes_affected(&self) -> usize {
        self.class_counts().len()
    }

    /// Number of findings with the given status.
    pub fn count_status(&self, status: FindingStatus) -> usize {
        self.findings.iter().filter(|f| f.status == status).count()
    }
}
