//! Language-specific parser implementations.

mod java;

pub use java::JavaAnalyzer;

use super::SourceParser;

/// Get a parser for the given file extension (without dot).
///
/// Returns None if no parser handles the extension.
pub fn get_parser(ext: &str) -> Option<Box<dyn SourceParser>> {
    match ext {
        "java" => Some(Box::new(JavaAnalyzer::new())),
        _ => None,
    }
}
