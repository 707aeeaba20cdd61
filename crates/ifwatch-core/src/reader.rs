//! `/proc/net/dev` reader.
//!
//! The file has two header rows followed by one row per interface:
//!
//! ```text
//! Inter-|   Receive                                                |  Transmit
//!  face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
//!     lo:  123456     789    0    0    0     0          0         0   123456     789    0    0    0     0       0          0
//! ```
//!
//! Each row is split on runs of `:` and whitespace; field 0 is the name and
//! fields 1-16 are the counters.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::addr::{AddressResolver, IoctlResolver};
use crate::error::CoreError;
use crate::model::{Counters, InterfaceStats, Snapshot, UNRESOLVED_IP};

/// Kernel interface statistics table.
pub const DEFAULT_SOURCE: &str = "/proc/net/dev";

const HEADER_LINES: usize = 2;

/// Parse the text of a `/proc/net/dev`-formatted table.
///
/// Rows with fewer than 17 fields are skipped. Interfaces are returned in
/// file order.
pub fn parse_net_dev(text: &str) -> Vec<(String, Counters)> {
    text.lines()
        .skip(HEADER_LINES)
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }

            let fields: Vec<&str> = line
                .split(|c: char| c == ':' || c.is_whitespace())
                .filter(|field| !field.is_empty())
                .collect();
            let (name, columns) = fields.split_first()?;
            match Counters::from_columns(columns) {
                Some(counters) => Some(((*name).to_owned(), counters)),
                None => {
                    trace!(line, fields = fields.len(), "skipping malformed row");
                    None
                }
            }
        })
        .collect()
}

/// Reads a [`Snapshot`] from the statistics source and resolves addresses.
#[derive(Debug, Clone)]
pub struct StatsReader<R = IoctlResolver> {
    source: PathBuf,
    resolver: R,
}

impl StatsReader {
    /// Reader over `source` that resolves addresses with `SIOCGIFADDR`.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self::with_resolver(source, IoctlResolver)
    }
}

impl Default for StatsReader {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE)
    }
}

impl<R: AddressResolver> StatsReader<R> {
    pub fn with_resolver(source: impl Into<PathBuf>, resolver: R) -> Self {
        Self {
            source: source.into(),
            resolver,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Read every interface in the source.
    ///
    /// Fails only when the source itself cannot be read. Interfaces whose
    /// address cannot be resolved get [`UNRESOLVED_IP`].
    pub fn read_interfaces(&self) -> Result<Snapshot, CoreError> {
        let text = fs::read_to_string(&self.source).map_err(|source| CoreError::StatsSource {
            path: self.source.clone(),
            source,
        })?;

        let snapshot: Snapshot = parse_net_dev(&text)
            .into_iter()
            .map(|(name, counters)| {
                let ip = self
                    .resolver
                    .resolve(&name)
                    .map_or_else(|| UNRESOLVED_IP.to_owned(), |addr| addr.to_string());
                (name, InterfaceStats { counters, ip })
            })
            .collect();

        debug!(
            source = %self.source.display(),
            interfaces = snapshot.len(),
            "sampled interface counters"
        );
        Ok(snapshot)
    }
}
