//! Split command - packs the source tree and copies each container to
//! its destination subtree.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::{Config, MIB};
use crate::inventory;
use crate::materialize::{self, MaterializeOptions};
use crate::pack;
use crate::progress::ConsoleProgress;

/// Flags for the split command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitOptions {
    /// Capacity override from the CLI, in MiB.
    pub capacity_mib: Option<u64>,
    /// Stop at the first failed copy.
    pub fail_fast: bool,
    /// Leave already-present destination files untouched.
    pub skip_existing: bool,
    /// Warn about containers that exceed the capacity.
    pub warn_oversized: bool,
}

/// Execute the split command.
///
/// Stage order: inventory, pack, materialize. The first two stages touch
/// nothing on disk, so a run that fails validation performs zero copies.
pub fn cmd_split(
    source: &Path,
    destination: &Path,
    options: SplitOptions,
    config: &Config,
) -> Result<()> {
    let capacity_bytes = super::capacity_bytes(options.capacity_mib, config);
    pack::validate_capacity(capacity_bytes)?;

    println!("=== Splitting {} ===", source.display());

    // Stage 1: Inventory
    let files = inventory::build(source)?;
    if files.is_empty() {
        println!("  Source contains no files, nothing to copy.");
        return Ok(());
    }
    let inventory_bytes: u64 = files.iter().map(|f| f.size_bytes).sum();
    println!(
        "  {} files, {:.2} MiB total",
        files.len(),
        inventory_bytes as f64 / MIB as f64
    );

    // Stage 2: Pack
    let partition = pack::pack(files, capacity_bytes)?;
    println!("  Containers needed: {}", partition.container_count());

    if options.warn_oversized {
        for container in partition.containers.iter().filter(|c| c.exceeds(capacity_bytes)) {
            eprintln!(
                "  [WARN] Container_{} holds {:.2} MiB, over the {} MiB capacity",
                container.index,
                container.total_size as f64 / MIB as f64,
                capacity_bytes / MIB
            );
        }
    }

    // Stage 3: Materialize
    let materialize_options = MaterializeOptions {
        stop_on_error: options.fail_fast,
        skip_existing: options.skip_existing,
    };
    let mut progress = ConsoleProgress;
    let report = materialize::materialize(
        source,
        destination,
        &partition,
        materialize_options,
        &mut progress,
    )?;

    println!("\n=== Split Complete ===");
    println!("  Containers:  {}", report.summaries.len());
    println!("  Files:       {}", report.files_copied());
    println!(
        "  Total size:  {:.2} MiB",
        report.bytes_copied() as f64 / MIB as f64
    );
    println!("  Destination: {}", destination.display());

    if !report.failures.is_empty() {
        println!("  Failed copies: {}", report.failures.len());
        bail!("{} file(s) failed to copy", report.failures.len());
    }

    Ok(())
}
