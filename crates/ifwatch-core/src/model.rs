//! Counter records for one poll cycle.
//!
//! Counter values stay as the raw text the kernel reported. Nothing here
//! does arithmetic on them; change detection is plain string inequality.

use std::collections::BTreeMap;

use strum::Display;

/// Shown in place of an address when the IPv4 lookup fails.
pub const UNRESOLVED_IP: &str = "A";

/// The sixteen per-interface counters, in `/proc/net/dev` column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[cfg_attr(test, derive(strum::EnumIter))]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    RxBytes,
    RxPackets,
    RxErrors,
    RxDropped,
    RxFifo,
    RxFrame,
    RxCompressed,
    RxMulticast,
    TxBytes,
    TxPackets,
    TxErrors,
    TxDropped,
    TxFifo,
    TxFrame,
    TxCompressed,
    TxMulticast,
}

impl Metric {
    /// Metrics shown on screen, sorted by label.
    pub const USEFUL: [Metric; 4] = [
        Self::RxBytes,
        Self::RxPackets,
        Self::TxBytes,
        Self::TxPackets,
    ];
}

/// Raw counter values for one interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counters {
    pub rx_bytes: String,
    pub rx_packets: String,
    pub rx_errors: String,
    pub rx_dropped: String,
    pub rx_fifo: String,
    pub rx_frame: String,
    pub rx_compressed: String,
    pub rx_multicast: String,
    pub tx_bytes: String,
    pub tx_packets: String,
    pub tx_errors: String,
    pub tx_dropped: String,
    pub tx_fifo: String,
    pub tx_frame: String,
    pub tx_compressed: String,
    pub tx_multicast: String,
}

impl Counters {
    /// Build from the sixteen counter columns that follow the interface name.
    ///
    /// Returns `None` when fewer than sixteen columns are present. Extra
    /// trailing columns are ignored.
    pub fn from_columns(columns: &[&str]) -> Option<Self> {
        let &[
            rx_bytes,
            rx_packets,
            rx_errors,
            rx_dropped,
            rx_fifo,
            rx_frame,
            rx_compressed,
            rx_multicast,
            tx_bytes,
            tx_packets,
            tx_errors,
            tx_dropped,
            tx_fifo,
            tx_frame,
            tx_compressed,
            tx_multicast,
            ..,
        ] = columns
        else {
            return None;
        };

        Some(Self {
            rx_bytes: rx_bytes.to_owned(),
            rx_packets: rx_packets.to_owned(),
            rx_errors: rx_errors.to_owned(),
            rx_dropped: rx_dropped.to_owned(),
            rx_fifo: rx_fifo.to_owned(),
            rx_frame: rx_frame.to_owned(),
            rx_compressed: rx_compressed.to_owned(),
            rx_multicast: rx_multicast.to_owned(),
            tx_bytes: tx_bytes.to_owned(),
            tx_packets: tx_packets.to_owned(),
            tx_errors: tx_errors.to_owned(),
            tx_dropped: tx_dropped.to_owned(),
            tx_fifo: tx_fifo.to_owned(),
            tx_frame: tx_frame.to_owned(),
            tx_compressed: tx_compressed.to_owned(),
            tx_multicast: tx_multicast.to_owned(),
        })
    }

    pub fn get(&self, metric: Metric) -> &str {
        match metric {
            Metric::RxBytes => &self.rx_bytes,
            Metric::RxPackets => &self.rx_packets,
            Metric::RxErrors => &self.rx_errors,
            Metric::RxDropped => &self.rx_dropped,
            Metric::RxFifo => &self.rx_fifo,
            Metric::RxFrame => &self.rx_frame,
            Metric::RxCompressed => &self.rx_compressed,
            Metric::RxMulticast => &self.rx_multicast,
            Metric::TxBytes => &self.tx_bytes,
            Metric::TxPackets => &self.tx_packets,
            Metric::TxErrors => &self.tx_errors,
            Metric::TxDropped => &self.tx_dropped,
            Metric::TxFifo => &self.tx_fifo,
            Metric::TxFrame => &self.tx_frame,
            Metric::TxCompressed => &self.tx_compressed,
            Metric::TxMulticast => &self.tx_multicast,
        }
    }
}

/// Counters plus the resolved IPv4 address of one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceStats {
    pub counters: Counters,
    /// Dotted-quad address, or [`UNRESOLVED_IP`].
    pub ip: String,
}

impl InterfaceStats {
    pub fn get(&self, metric: Metric) -> &str {
        self.counters.get(metric)
    }
}

/// All interfaces read in one poll cycle, keyed and ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    interfaces: BTreeMap<String, InterfaceStats>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an interface, replacing any earlier record with the same name.
    pub fn insert(&mut self, name: impl Into<String>, stats: InterfaceStats) {
        self.interfaces.insert(name.into(), stats);
    }

    pub fn get(&self, name: &str) -> Option<&InterfaceStats> {
        self.interfaces.get(name)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    /// Interfaces in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InterfaceStats)> {
        self.interfaces
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
    }
}

impl FromIterator<(String, InterfaceStats)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, InterfaceStats)>>(iter: I) -> Self {
        Self {
            interfaces: iter.into_iter().collect(),
        }
    }
}
