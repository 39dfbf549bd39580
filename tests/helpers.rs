//! Shared test utilities for discspan tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use discspan::inventory::FileEntry;

/// Test environment with temporary source and destination directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Source directory the files to distribute live under
    pub source: PathBuf,
    /// Destination root the Container_N subtrees are created under
    pub dest: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with temporary directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();

        let source = base.join("archive");
        let dest = base.join("out");

        fs::create_dir_all(&source).expect("Failed to create source dir");
        fs::create_dir_all(&dest).expect("Failed to create dest dir");

        Self {
            _temp_dir: temp_dir,
            source,
            dest,
        }
    }

    /// Destination path of `rel` inside the given container, accounting
    /// for the source-basename nesting level.
    pub fn container_path(&self, index: u32, rel: &str) -> PathBuf {
        self.dest
            .join(format!("Container_{}", index))
            .join("archive")
            .join(rel)
    }
}

/// Create a file under `root` at `rel` with `size` bytes of filler,
/// creating parent directories as needed.
pub fn create_sized_file(root: &Path, rel: &str, size: usize) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, vec![b'x'; size]).expect("Failed to create sized file");
}

/// Shorthand for a FileEntry in packing tests.
pub fn entry(rel: &str, size: u64) -> FileEntry {
    FileEntry {
        relative_path: PathBuf::from(rel),
        size_bytes: size,
    }
}

/// Assert that a file exists.
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "Expected file to exist: {}", path.display());
}

/// Assert that a file contains exactly the expected content.
pub fn assert_file_content(path: &Path, expected: &str) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    assert_eq!(
        content,
        expected,
        "File {} content mismatch",
        path.display()
    );
}
