// ifwatch-core: interface counter sampling and change detection for the ifwatch TUI.

pub mod addr;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod reader;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use addr::{AddressResolver, IoctlResolver};
pub use config::Config;
pub use error::CoreError;
pub use filter::{DEFAULT_PATTERN, InterfaceFilter};
pub use model::{Counters, InterfaceStats, Metric, Snapshot, UNRESOLVED_IP};
pub use reader::{DEFAULT_SOURCE, StatsReader, parse_net_dev};
pub use view::{InterfaceView, MetricCell, build_view};
