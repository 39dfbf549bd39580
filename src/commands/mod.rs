//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `plan` - Compute and display the container assignment
//! - `split` - Copy files into per-container subtrees
//! - `show` - Display information

pub mod plan;
pub mod show;
pub mod split;

pub use plan::cmd_plan;
pub use show::cmd_show;
pub use split::cmd_split;

use crate::config::{Config, MIB};

/// Effective capacity in bytes: the CLI flag wins over configuration.
pub(crate) fn capacity_bytes(flag_mib: Option<u64>, config: &Config) -> u64 {
    flag_mib
        .map(|mib| mib.saturating_mul(MIB))
        .unwrap_or_else(|| config.capacity_bytes())
}
