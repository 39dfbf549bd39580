//! Discspan - splits a directory tree across disc-sized containers.
//!
//! Walks a source tree, packs the files into the fewest containers that
//! fit a fixed capacity (first-fit decreasing), then copies each
//! container's files into its own `Container_<n>` subtree under the
//! destination, preserving directory structure.
#![allow(dead_code)]

mod commands;
mod config;
mod error;
mod inventory;
mod materialize;
mod pack;
mod progress;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use config::Config;

#[derive(Parser)]
#[command(name = "discspan")]
#[command(about = "Distribute a directory tree across disc-sized containers")]
#[command(
    after_help = "QUICK START:\n  discspan plan SRC        Preview the container assignment\n  discspan split SRC DST   Copy files into Container_N subtrees\n  discspan show config     Show effective configuration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the container assignment and print it without copying
    Plan {
        /// Source directory to distribute
        source: PathBuf,

        /// Container capacity in MiB (default: 4440, a DVD-R)
        #[arg(long)]
        capacity_mib: Option<u64>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy files into Container_N subtrees under the destination
    Split {
        /// Source directory to distribute
        source: PathBuf,

        /// Destination root for the Container_N subtrees
        destination: PathBuf,

        /// Container capacity in MiB (default: 4440, a DVD-R)
        #[arg(long)]
        capacity_mib: Option<u64>,

        /// Stop at the first failed copy instead of continuing
        #[arg(long)]
        fail_fast: bool,

        /// Leave already-present destination files untouched
        #[arg(long)]
        skip_existing: bool,

        /// Warn about containers that exceed the capacity
        #[arg(long)]
        warn_oversized: bool,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();
    let base_dir = std::env::current_dir()?;
    let config = Config::load(&base_dir);

    match cli.command {
        Commands::Plan {
            source,
            capacity_mib,
            json,
        } => {
            commands::cmd_plan(&source, capacity_mib, json, &config)?;
        }

        Commands::Split {
            source,
            destination,
            capacity_mib,
            fail_fast,
            skip_existing,
            warn_oversized,
        } => {
            let options = commands::split::SplitOptions {
                capacity_mib,
                fail_fast,
                skip_existing,
                warn_oversized,
            };
            commands::cmd_split(&source, &destination, options, &config)?;
        }

        Commands::Show { what } => {
            let show_target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
            };
            commands::cmd_show(show_target, &config)?;
        }
    }

    Ok(())
}
