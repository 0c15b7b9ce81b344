//! Detection of documentation gaps in public API methods.

mod catalog;
mod eligibility;
mod files;
mod javadoc;
mod runner;
mod types;

pub use catalog::TypeCatalog;
pub use eligibility::{
    check_eligibility, is_trivial_accessor, overridden_in, Eligibility, Exclusion,
};
pub use files::discover_files;
pub use javadoc::{classify, JavadocStatus};
pub use runner::{analyze_file, Runner};
pub use types::{ClassCount, Finding, FindingStatus, ScanResult, SkippedFile};
