//! AST-backed source analysis.
//!
//! This module turns source files into the declaration facts the
//! documentation checks consume:
//! - Type declarations (classes, interfaces, enums, records) with their
//!   direct supertypes
//! - Method declarations with modifiers, arity and source line
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │ Source Files    │────▶│ SourceParser │────▶│ CompilationUnit │
//! └─────────────────┘     │ (Java)       │     │ (Types, Methods)│
//!                         └──────────────┘     └─────────────────┘
//! ```
//!
//! A file that cannot be read or parsed is kept as a `SourceFile` whose
//! outcome is a `ParseError`, so one bad file never aborts a scan.

mod facts;
mod languages;
mod source;
mod traits;

pub use facts::{
    simple_type_name, ClassDeclaration, CompilationUnit, MethodDeclaration, TypeKind,
};
pub use languages::{get_parser, JavaAnalyzer};
pub use source::{base_name, SourceFile};
pub use traits::{ParseError, SourceParser};
