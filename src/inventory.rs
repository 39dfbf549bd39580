//! Source tree inventory: every regular file under a root, with sizes.

use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::SpanError;

/// One regular file found under the source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Path relative to the source root.
    pub relative_path: PathBuf,
    /// Size in bytes at enumeration time.
    pub size_bytes: u64,
}

/// Enumerate every regular file under `source_root`.
///
/// Returns one entry per file, holding its path relative to the root and
/// its size in bytes. Directories are not entries, and symlinks are not
/// followed. Entry order follows the directory walk and carries no
/// meaning for downstream consumers.
///
/// Unreadable entries inside a valid root are reported on stderr and
/// skipped; only a missing or non-directory root is an error. An empty
/// root yields an empty inventory, not an error.
pub fn build(source_root: &Path) -> Result<Vec<FileEntry>, SpanError> {
    if !source_root.is_dir() {
        return Err(SpanError::SourceNotFound {
            path: source_root.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(source_root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                eprintln!("  [WARN] Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let size = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(e) => {
                eprintln!("  [WARN] Could not stat {}: {}", entry.path().display(), e);
                continue;
            }
        };
        let relative_path = match entry.path().strip_prefix(source_root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => {
                eprintln!(
                    "  [WARN] Skipping entry outside the source root: {}",
                    entry.path().display()
                );
                continue;
            }
        };
        entries.push(FileEntry {
            relative_path,
            size_bytes: size,
        });
    }

    Ok(entries)
}
