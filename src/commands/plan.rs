//! Plan command - computes the container assignment without copying.

use anyhow::Result;
use std::path::Path;

use crate::config::{Config, MIB};
use crate::inventory;
use crate::pack;

/// Execute the plan command.
///
/// Walks the source, packs the inventory, and prints the assignment.
/// Nothing is copied.
pub fn cmd_plan(source: &Path, capacity_mib: Option<u64>, json: bool, config: &Config) -> Result<()> {
    let capacity_bytes = super::capacity_bytes(capacity_mib, config);
    pack::validate_capacity(capacity_bytes)?;

    let files = inventory::build(source)?;
    if files.is_empty() {
        println!("No files found under {}", source.display());
        return Ok(());
    }

    let partition = pack::pack(files, capacity_bytes)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&partition)?);
        return Ok(());
    }

    println!("=== Distribution Plan ===");
    println!("  Source:     {}", source.display());
    println!("  Capacity:   {} MiB", capacity_bytes / MIB);
    println!("  Files:      {}", partition.file_count());
    println!("  Containers: {}", partition.container_count());

    for container in &partition.containers {
        println!(
            "\nContainer_{}: {} files, {:.2} MiB{}",
            container.index,
            container.files.len(),
            container.total_size as f64 / MIB as f64,
            if container.exceeds(capacity_bytes) {
                " (exceeds capacity)"
            } else {
                ""
            }
        );
        for file in &container.files {
            println!(
                "  {} ({:.2} MiB)",
                file.relative_path.display(),
                file.size_bytes as f64 / MIB as f64
            );
        }
    }

    Ok(())
}
