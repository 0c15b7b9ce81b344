//! Detection runner that orchestrates the two-phase scan.

use std::path::PathBuf;

use tracing::{debug, info, trace};

use crate::analysis::{SourceFile, SourceParser};

use super::{
    check_eligibility, classify, Eligibility, Finding, ScanResult, SkippedFile, TypeCatalog,
};

/// Runs the documentation check over a set of files.
///
/// Every file is loaded and parsed first, the type catalog is built from all
/// of them, and only then are methods checked against the finished catalog.
pub struct Runner<'p> {
    parser: &'p dyn SourceParser,
}

impl<'p> Runner<'p> {
    /// Create a new runner using `parser` for every file.
    pub fn new(parser: &'p dyn SourceParser) -> Self {
        Self { parser }
    }

    /// Load, catalog and analyze `files`.
    pub fn run(&self, files: &[PathBuf]) -> ScanResult {
        let sources: Vec<SourceFile> = files
            .iter()
            .map(|path| SourceFile::load(path, self.parser))
            .collect();
        self.run_sources(&sources)
    }

    /// Catalog and analyze files that are already loaded.
    pub fn run_sources(&self, sources: &[SourceFile]) -> ScanResult {
        let catalog = TypeCatalog::build(sources);

        let mut result = ScanResult::new();
        for source in sources {
            result.files.push(source.path.clone());
            match source.error() {
                Some(e) => result.skipped.push(SkippedFile {
                    file: source.path.clone(),
                    reason: e.to_string(),
                }),
                None => analyze_file(source, &catalog, &mut result),
            }
        }

        info!(
            files = result.files.len(),
            skipped = result.skipped.len(),
            findings = result.total(),
            "scan complete"
        );
        result
    }
}

/// Check every method of every class in one parsed file.
pub fn analyze_file(source: &SourceFile, catalog: &TypeCatalog, result: &mut ScanResult) {
    let unit = match source.unit() {
        Some(unit) => unit,
        None => return,
    };
    let lines = source.lines();

    for class in unit.classes() {
        for method in &class.methods {
            let line = match check_eligibility(method, class, catalog) {
                Eligibility::Include { line } => line,
                Eligibility::Exclude(reason) => {
                    trace!(
                        class = %class.name,
                        method = %method.name,
                        reason = reason.as_str(),
                        "method excluded"
                    );
                    continue;
                }
            };

            let javadoc = classify(&lines, line);
            debug!(
                file = %source.path.display(),
                line,
                method = %method.name,
                status = ?javadoc,
                "classified method documentation"
            );

            if let Some(status) = javadoc.finding_status() {
                result.add_finding(Finding {
                    file: source.path.clone(),
                    line,
                    method: method.name.clone(),
                    status,
                });
            }
        }
    }
}
