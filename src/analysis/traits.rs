//! Core traits for source parsing.

use std::path::Path;

use thiserror::Error;

use super::CompilationUnit;

/// Reasons a single file could not be turned into a compilation unit.
///
/// None of these abort a scan: the file is skipped for cataloguing and
/// analysis but still counts as discovered.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("cannot read file: {0}")]
    Read(#[from] std::io::Error),
    #[error("file is not valid UTF-8")]
    Encoding,
    #[error("syntax error near line {line}")]
    Syntax { line: usize },
    #[error("parser unavailable: {0}")]
    Parser(String),
}

/// Language-specific parser trait.
///
/// Implementations turn raw source text into the declarations the
/// documentation checks operate on.
pub trait SourceParser: Send + Sync {
    /// Returns the language identifier (e.g., "java").
    fn language_id(&self) -> &'static str;

    /// Returns file extensions this parser handles (without dot).
    fn file_extensions(&self) -> &'static [&'static str];

    /// Parse source text into a compilation unit.
    ///
    /// Sources with syntax errors are rejected as a whole; no partial
    /// compilation unit is returned.
    fn parse(&self, path: &Path, source: &str) -> Result<CompilationUnit, ParseError>;

    /// Check if this parser handles the given file extension.
    fn handles_extension(&self, ext: &str) -> bool {
        self.file_extensions().contains(&ext)
    }

    /// Check if this parser handles the given path, judging by extension.
    fn handles_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.handles_extension(e))
            .unwrap_or(false)
    }
}
