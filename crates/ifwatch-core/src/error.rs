// ── Core error types ──
//
// Only the statistics source and startup-time inputs (filter, config) can
// fail. Per-interface problems are absorbed where they happen: an address
// lookup failure becomes the "A" sentinel and a malformed line is skipped.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Sampling errors ──────────────────────────────────────────────
    #[error("Cannot read interface statistics from {}: {source}", path.display())]
    StatsSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ── Startup errors ───────────────────────────────────────────────
    #[error("Invalid interface filter '{pattern}': {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),
}

impl From<figment::Error> for CoreError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
