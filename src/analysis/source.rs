//! Loaded source files and their parse outcomes.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{CompilationUnit, ParseError, SourceParser};

/// One discovered source file, read once and parsed once per run.
#[derive(Debug)]
pub struct SourceFile {
    /// Path as discovered under the scan root.
    pub path: PathBuf,
    /// Raw text; empty when the file could not be read.
    pub text: String,
    /// Parse outcome. Failed files stay in the run for listing purposes.
    pub outcome: Result<CompilationUnit, ParseError>,
}

impl SourceFile {
    /// Read and parse a file. Never fails: read and parse problems are
    /// recorded in `outcome`.
    pub fn load<P: AsRef<Path>>(path: P, parser: &dyn SourceParser) -> Self {
        let path = path.as_ref().to_path_buf();

        let text = match fs::read(&path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(_) => return Self::failed(path, ParseError::Encoding),
            },
            Err(e) => return Self::failed(path, ParseError::Read(e)),
        };

        Self::from_source(path, text, parser)
    }

    /// Parse already-loaded text.
    pub fn from_source(path: PathBuf, text: String, parser: &dyn SourceParser) -> Self {
        let outcome = parser.parse(&path, &text);
        match &outcome {
            Ok(unit) => debug!(
                file = %path.display(),
                types = unit.types.len(),
                "parsed source file"
            ),
            Err(e) => warn!(file = %path.display(), error = %e, "skipping unparseable file"),
        }
        Self {
            path,
            text,
            outcome,
        }
    }

    fn failed(path: PathBuf, error: ParseError) -> Self {
        warn!(file = %path.display(), error = %error, "skipping unreadable file");
        Self {
            path,
            text: String::new(),
            outcome: Err(error),
        }
    }

    /// The parsed compilation unit, if parsing succeeded.
    pub fn unit(&self) -> Option<&CompilationUnit> {
        self.outcome.as_ref().ok()
    }

    /// The parse failure, if any.
    pub fn error(&self) -> Option<&ParseError> {
        self.outcome.as_ref().err()
    }

    /// Source text split into lines (line terminators removed).
    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }
}

/// File name component of a path, or the whole path if it has none.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
