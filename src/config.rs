//! Configuration management for discspan.
//!
//! Reads configuration from .env file and environment variables.
//! Environment variables take precedence over .env file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Bytes per MiB; capacities are configured and reported in MiB.
pub const MIB: u64 = 1024 * 1024;

/// Default container capacity in MiB. 4440 MiB is a DVD-R's practical
/// usable capacity after filesystem overhead.
pub const DEFAULT_CAPACITY_MIB: u64 = 4440;

/// Discspan configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Container capacity in MiB (default: 4440)
    pub capacity_mib: u64,
}

impl Config {
    /// Load configuration from .env file and environment.
    ///
    /// Searches for .env in `base_dir` (normally the working directory).
    pub fn load(base_dir: &Path) -> Self {
        let mut env_vars = HashMap::new();

        // Try to load .env file
        let env_path = base_dir.join(".env");
        if env_path.exists() {
            if let Ok(content) = fs::read_to_string(&env_path) {
                for line in content.lines() {
                    let line = line.trim();
                    // Skip comments and empty lines
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    // Parse KEY=value
                    if let Some((key, value)) = line.split_once('=') {
                        let key = key.trim();
                        let value = value.trim();
                        // Remove quotes if present
                        let value = value.trim_matches('"').trim_matches('\'');
                        env_vars.insert(key.to_string(), value.to_string());
                    }
                }
            }
        }

        // Environment variables override .env file
        for (key, value) in std::env::vars() {
            env_vars.insert(key, value);
        }

        let capacity_mib = env_vars
            .get("DISCSPAN_CAPACITY_MIB")
            .and_then(|raw| match raw.parse::<u64>() {
                Ok(mib) => Some(mib),
                Err(_) => {
                    eprintln!(
                        "  [WARN] Ignoring invalid DISCSPAN_CAPACITY_MIB value: {}",
                        raw
                    );
                    None
                }
            })
            .unwrap_or(DEFAULT_CAPACITY_MIB);

        Self { capacity_mib }
    }

    /// Configured capacity in bytes.
    pub fn capacity_bytes(&self) -> u64 {
        self.capacity_mib.saturating_mul(MIB)
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  DISCSPAN_CAPACITY_MIB: {}", self.capacity_mib);
        println!("  Capacity: {} bytes", self.capacity_bytes());
    }
}
