//! Copy a partition to its destination subtrees.
//!
//! Each container becomes `<destination>/Container_<index>/<source
//! basename>/...`, preserving the relative directory structure of the
//! source. Files are copied with their permissions and modification
//! time. There is no rollback: files already copied stay in place if a
//! run stops partway, and re-running onto a populated destination is
//! safe (overwrite by default, skip-existing on request).

use serde::Serialize;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::SpanError;
use crate::pack::Partition;
use crate::progress::ProgressSink;

/// Per-container result of a materialization run.
///
/// `file_count` and `total_size_bytes` cover the files present at the
/// destination after the container's pass, so a run that continued past
/// failures reports what actually landed on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerSummary {
    pub index: u32,
    pub file_count: usize,
    pub total_size_bytes: u64,
}

/// Outcome of a materialization run.
#[derive(Debug, Default)]
pub struct MaterializeReport {
    pub summaries: Vec<ContainerSummary>,
    /// Copy failures the run continued past (empty in stop-on-error mode).
    pub failures: Vec<SpanError>,
}

impl MaterializeReport {
    /// Files present at their destinations after the run.
    pub fn files_copied(&self) -> usize {
        self.summaries.iter().map(|s| s.file_count).sum()
    }

    pub fn bytes_copied(&self) -> u64 {
        self.summaries.iter().map(|s| s.total_size_bytes).sum()
    }
}

/// Materialization policy knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterializeOptions {
    /// Stop at the first failed copy instead of continuing.
    pub stop_on_error: bool,
    /// Leave already-present destination files untouched instead of
    /// overwriting them.
    pub skip_existing: bool,
}

/// Copy every file of every container to its destination subtree.
///
/// Containers are processed in index order, files in assignment order.
/// With `stop_on_error` the first failed copy is returned as an error;
/// otherwise failures are reported on stderr, collected in the report,
/// and the run moves on to the next file. Either way no failure is
/// silently swallowed.
pub fn materialize(
    source_root: &Path,
    destination_root: &Path,
    partition: &Partition,
    options: MaterializeOptions,
    progress: &mut dyn ProgressSink,
) -> Result<MaterializeReport, SpanError> {
    let source_name = source_basename(source_root)?;

    let mut report = MaterializeReport::default();
    for container in &partition.containers {
        let container_dir = destination_root.join(format!("Container_{}", container.index));
        let subtree_root = container_dir.join(&source_name);
        progress.on_container_started(container.index, &container_dir);

        let mut file_count = 0usize;
        let mut total_size_bytes = 0u64;
        for entry in &container.files {
            let src = source_root.join(&entry.relative_path);
            let dst = subtree_root.join(&entry.relative_path);
            match copy_with_metadata(&src, &dst, options.skip_existing) {
                Ok(()) => {
                    file_count += 1;
                    total_size_bytes += entry.size_bytes;
                    progress.on_file_copied(container.index, &entry.relative_path);
                }
                Err(cause) => {
                    let failure = SpanError::Copy {
                        from: src,
                        to: dst,
                        container: container.index,
                        cause,
                    };
                    if options.stop_on_error {
                        return Err(failure);
                    }
                    eprintln!("  [WARN] {}", failure);
                    report.failures.push(failure);
                }
            }
        }

        let summary = ContainerSummary {
            index: container.index,
            file_count,
            total_size_bytes,
        };
        progress.on_container_finished(&summary, &container_dir);
        report.summaries.push(summary);
    }

    Ok(report)
}

/// Copy one file, creating parent directories as needed.
///
/// `fs::copy` carries permissions; the source's modification time is
/// restored on the destination afterwards. With `skip_existing` an
/// already-present destination file is left untouched and counts as in
/// place.
fn copy_with_metadata(src: &Path, dst: &Path, skip_existing: bool) -> io::Result<()> {
    if skip_existing && dst.exists() {
        return Ok(());
    }
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dst)?;

    let modified = fs::metadata(src)?.modified()?;
    let dest_file = File::options().write(true).open(dst)?;
    dest_file.set_modified(modified)?;
    Ok(())
}

/// The last component of the source root, used to nest each container's
/// subtree under a directory named after the source.
fn source_basename(source_root: &Path) -> Result<OsString, SpanError> {
    if let Some(name) = source_root.file_name() {
        return Ok(name.to_os_string());
    }
    // Roots like "." or ".." only have a final component once resolved.
    let canonical = source_root.canonicalize()?;
    canonical
        .file_name()
        .map(|name| name.to_os_string())
        .ok_or_else(|| SpanError::SourceNotFound {
            path: source_root.to_path_buf(),
        })
}
