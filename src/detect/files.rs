//! Discovery of source files under a scan root.

use std::path::{Path, PathBuf};

use globset::GlobSet;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::analysis::SourceParser;

/// Collect every file under `root` that `parser` handles.
///
/// Files are returned in lexicographic walk order so that repeated runs
/// produce the same finding order. Paths matching `excluded` (tested both
/// relative to the root and as given) are left out. Unreadable directories
/// below the root are logged and skipped; an inaccessible root is an error.
pub fn discover_files(
    root: &Path,
    parser: &dyn SourceParser,
    excluded: &GlobSet,
) -> anyhow::Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(root)
        .map_err(|e| anyhow::anyhow!("cannot access path {}: {}", root.display(), e))?;

    if metadata.is_file() {
        if parser.handles_path(root) && !is_excluded(root, root, excluded) {
            return Ok(vec![root.to_path_buf()]);
        }
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !parser.handles_path(path) {
            continue;
        }
        if is_excluded(path, root, excluded) {
            debug!(file = %path.display(), "excluded by path pattern");
            continue;
        }
        files.push(path.to_path_buf());
    }

    Ok(files)
}

fn is_excluded(path: &Path, root: &Path, excluded: &GlobSet) -> bool {
    if excluded.is_empty() {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    excluded.is_match(relative) || excluded.is_match(path)
}
