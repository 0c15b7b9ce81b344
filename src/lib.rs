//! javadoc-gaps - documentation gap detector for Java sources.
//!
//! Scans a source tree and reports `public`/`protected` methods whose
//! Javadoc is missing or only a single line, giving maintainers a list of
//! undocumented API surface to work through.
//!
//! # Architecture
//!
//! The scan is two-phase: every file is parsed first and a catalog of
//! top-level types is built, then each method is checked against the
//! finished catalog.
//!
//! - `analysis`: tree-sitter parsing into declaration facts
//! - `detect`: type catalog, eligibility rules, Javadoc classification
//! - `config`: YAML configuration schema
//! - `report`: output formatting (text, JSON)

pub mod analysis;
pub mod cli;
pub mod config;
pub mod detect;
pub mod report;

pub use analysis::{JavaAnalyzer, SourceFile, SourceParser};
pub use config::Config;
pub use detect::{Finding, FindingStatus, Runner, ScanResult, TypeCatalog};
