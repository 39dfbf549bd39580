//! Progress reporting seam between the materializer and the CLI.
//!
//! The copy loop is correct without any observer; implementations only
//! present progress. The CLI installs [`ConsoleProgress`]; tests use
//! [`SilentProgress`].

use std::path::Path;

use crate::config::MIB;
use crate::materialize::ContainerSummary;

/// Receives copy progress callbacks from the materializer.
pub trait ProgressSink {
    /// A container's copy pass is starting.
    fn on_container_started(&mut self, _index: u32, _dest: &Path) {}

    /// One file finished copying (or was already in place).
    fn on_file_copied(&mut self, _container_index: u32, _relative_path: &Path) {}

    /// All of a container's files have been attempted.
    fn on_container_finished(&mut self, _summary: &ContainerSummary, _dest: &Path) {}
}

/// Prints progress in the CLI's indented line style.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn on_container_started(&mut self, _index: u32, dest: &Path) {
        println!("\nCopying files to {}:", dest.display());
    }

    fn on_file_copied(&mut self, _container_index: u32, relative_path: &Path) {
        println!("  {}", relative_path.display());
    }

    fn on_container_finished(&mut self, summary: &ContainerSummary, dest: &Path) {
        println!(
            "  Copied {} files ({:.2} MiB) to {}",
            summary.file_count,
            summary.total_size_bytes as f64 / MIB as f64,
            dest.display()
        );
    }
}

/// Discards all progress callbacks.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {}
