//! Process configuration
//!
//! Read once at startup from environment variables:
//!
//! - `BLOCKS_SEED`: RNG seed for block selection (default: derived from the clock)
//! - `BLOCKS_DROP_MS`: automatic drop interval in ms (default: 1000)
//! - `BLOCKS_LOG`: file to write logs to (default: logging disabled); level via `RUST_LOG`
//!
//! Missing or unparsable values fall back to the defaults.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::types::DROP_INTERVAL_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub drop_interval_ms: u64,
    pub log_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let drop_interval_ms = lookup("BLOCKS_DROP_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(DROP_INTERVAL_MS);

        let log_path = lookup("BLOCKS_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            seed,
            drop_interval_ms,
            log_path,
        }
    }

    /// Install the file logger if `log_path` is set.
    ///
    /// Logs never go to the terminal: the game owns the alternate screen.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = self.log_path.as_ref() else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init()
            .context("installing logger")?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            drop_interval_ms: DROP_INTERVAL_MS,
            log_path: None,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
