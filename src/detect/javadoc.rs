//! Classification of the comment directly above a method declaration.
//!
//! Purely textual: the lines above the declaration are scanned upward,
//! blank lines are skipped, and the first non-blank line decides.

use super::FindingStatus;

const DOC_OPEN: &str = "/**";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";
const LINE_COMMENT: &str = "//";

/// Documentation state of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JavadocStatus {
    /// Nothing comment-like above the declaration.
    Absent,
    /// A plain `//` or `/* */` comment sits above the declaration.
    PlainComment,
    /// A Javadoc block spanning more than one line.
    Present,
    /// A Javadoc block on a single line.
    OneLiner,
}

impl JavadocStatus {
    /// The finding this status produces, if any.
    pub fn finding_status(&self) -> Option<FindingStatus> {
        match self {
            JavadocStatus::Absent => Some(FindingStatus::Missing),
            JavadocStatus::OneLiner => Some(FindingStatus::OneLiner),
            JavadocStatus::PlainComment | JavadocStatus::Present => None,
        }
    }
}

/// Classify the documentation above the declaration on `method_line`
/// (1-indexed) of `lines`.
pub fn classify<S: AsRef<str>>(lines: &[S], method_line: usize) -> JavadocStatus {
    // 0-indexed position of the declaration line.
    let decl = method_line.saturating_sub(1).min(lines.len());

    let deciding = match (0..decl).rev().find(|&i| !line_at(lines, i).is_empty()) {
        Some(i) => i,
        None => return JavadocStatus::Absent,
    };
    let text = line_at(lines, deciding);

    if text.starts_with(DOC_OPEN) {
        return doc_block_status(deciding, decl);
    }
    if text.starts_with(LINE_COMMENT) || text.starts_with(BLOCK_OPEN) {
        return JavadocStatus::PlainComment;
    }
    if text.starts_with('*') && text.ends_with(BLOCK_CLOSE) {
        return match find_block_open(lines, deciding) {
            Some(open) if line_at(lines, open).starts_with(DOC_OPEN) => {
                doc_block_status(open, decl)
            }
            Some(_) => JavadocStatus::PlainComment,
            None => JavadocStatus::Absent,
        };
    }

    JavadocStatus::Absent
}

/// A Javadoc starting at `open` measured down to, not including, `decl`.
fn doc_block_status(open: usize, decl: usize) -> JavadocStatus {
    if decl - open == 1 {
        JavadocStatus::OneLiner
    } else {
        JavadocStatus::Present
    }
}

/// Walk up from the closing line of a block comment to its opening line.
fn find_block_open<S: AsRef<str>>(lines: &[S], close: usize) -> Option<usize> {
    for i in (0..close).rev() {
        let text = line_at(lines, i);
        // Ran into the end of an earlier comment: this block has no opener.
        if text.contains(BLOCK_CLOSE) {
            return None;
        }
        if text.starts_with(BLOCK_OPEN) {
            return Some(i);
        }
    }
    None
}

fn line_at<S: AsRef<str>>(lines: &[S], index: usize) -> &str {
    lines[index].as_ref().trim()
}
