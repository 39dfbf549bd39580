//! Error types for the distribution pipeline.
//!
//! The inventory and packing stages fail fast before any filesystem
//! writes happen; copy errors carry enough context to identify the
//! file and container involved.

use std::io;
use std::path::PathBuf;

/// Errors produced by the inventory, packing, and materialization stages.
#[derive(Debug, thiserror::Error)]
pub enum SpanError {
    #[error("source directory not found or not a directory: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("container capacity must be positive, got {capacity} bytes")]
    InvalidCapacity { capacity: u64 },

    #[error("failed to copy {} to {} (Container_{}): {}", .from.display(), .to.display(), .container, .cause)]
    Copy {
        from: PathBuf,
        to: PathBuf,
        container: u32,
        #[source]
        cause: io::Error,
    },

    #[error("I/O error during materialization: {0}")]
    Io(#[from] io::Error),
}
