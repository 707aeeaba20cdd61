//! Screen model: the filtered interfaces of one sample, with change flags.

use crate::filter::InterfaceFilter;
use crate::model::{Metric, Snapshot};

/// One `metric = value` entry on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCell {
    pub metric: Metric,
    pub value: String,
    /// The value differs from the previous sample of the same interface.
    pub changed: bool,
}

/// One interface block on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceView {
    pub name: String,
    pub ip: String,
    pub metrics: Vec<MetricCell>,
}

/// Build the screen model for `current`, flagging values that changed since `previous`.
///
/// Only interfaces matching `filter` are included, in name order. An
/// interface missing from `previous` has nothing to compare against, so none
/// of its values are flagged.
pub fn build_view(
    current: &Snapshot,
    previous: &Snapshot,
    filter: &InterfaceFilter,
) -> Vec<InterfaceView> {
    current
        .iter()
        .filter(|(name, _)| filter.matches(name))
        .map(|(name, stats)| {
            let before = previous.get(name);
            let metrics = Metric::USEFUL
                .iter()
                .map(|&metric| {
                    let value = stats.get(metric);
                    MetricCell {
                        metric,
                        value: value.to_owned(),
                        changed: before.is_some_and(|old| old.get(metric) != value),
                    }
                })
                .collect();

            InterfaceView {
                name: name.to_owned(),
                ip: stats.ip.clone(),
                metrics,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Counters, InterfaceStats};

    fn stats(rx_bytes: &str, tx_packets: &str) -> InterfaceStats {
        InterfaceStats {
            counters: Counters {
                rx_bytes: rx_bytes.into(),
                rx_packets: "5".into(),
                tx_bytes: "50".into(),
                tx_packets: tx_packets.into(),
                ..Counters::default()
            },
            ip: "10.1.2.3".into(),
        }
    }

    fn snapshot(entries: &[(&str, InterfaceStats)]) -> Snapshot {
        entries
            .iter()
            .map(|(name, stats)| ((*name).to_owned(), stats.clone()))
            .collect()
    }

    fn everything() -> InterfaceFilter {
        InterfaceFilter::new("").unwrap()
    }

    fn changed_metrics(view: &InterfaceView) -> Vec<Metric> {
        view.metrics
            .iter()
            .filter(|cell| cell.changed)
            .map(|cell| cell.metric)
            .collect()
    }

    #[test]
    fn changed_value_is_flagged() {
        let previous = snapshot(&[("eth0", stats("100", "3"))]);
        let current = snapshot(&[("eth0", stats("200", "3"))]);

        let view = build_view(&current, &previous, &everything());
        assert_eq!(changed_metrics(&view[0]), [Metric::RxBytes]);
    }

    #[test]
    fn unchanged_values_are_not_flagged() {
        let previous = snapshot(&[("eth0", stats("100", "3"))]);
        let current = previous.clone();

        let view = build_view(&current, &previous, &everything());
        assert!(changed_metrics(&view[0]).is_empty());
    }

    #[test]
    fn first_seen_interface_is_not_flagged() {
        let previous = snapshot(&[("eth0", stats("100", "3"))]);
        let current = snapshot(&[("eth0", stats("100", "3")), ("eth1", stats("9", "9"))]);

        let view = build_view(&current, &previous, &everything());
        assert_eq!(view[1].name, "eth1");
        assert!(changed_metrics(&view[1]).is_empty());
    }

    #[test]
    fn empty_previous_flags_nothing() {
        let current = snapshot(&[("eth0", stats("1", "1")), ("lo", stats("2", "2"))]);
        let view = build_view(&current, &Snapshot::new(), &everything());
        assert!(view.iter().all(|iface| changed_metrics(iface).is_empty()));
    }

    #[test]
    fn filter_selects_by_prefix_in_name_order() {
        let current = snapshot(&[
            ("weth0", stats("1", "1")),
            ("vnic1", stats("1", "1")),
            ("portEpic0", stats("1", "1")),
            ("vnic0", stats("1", "1")),
        ]);
        let filter = InterfaceFilter::new(crate::DEFAULT_PATTERN).unwrap();

        let names: Vec<String> = build_view(&current, &Snapshot::new(), &filter)
            .into_iter()
            .map(|iface| iface.name)
            .collect();
        assert_eq!(names, ["portEpic0", "vnic0", "vnic1"]);
    }

    #[test]
    fn cells_carry_useful_metrics_in_order() {
        let current = snapshot(&[("eth0", stats("100", "3"))]);
        let view = build_view(&current, &Snapshot::new(), &everything());

        assert_eq!(
            view,
            vec![InterfaceView {
                name: "eth0".into(),
                ip: "10.1.2.3".into(),
                metrics: vec![
                    MetricCell {
                        metric: Metric::RxBytes,
                        value: "100".into(),
                        changed: false,
                    },
                    MetricCell {
                        metric: Metric::RxPackets,
                        value: "5".into(),
                        changed: false,
                    },
                    MetricCell {
                        metric: Metric::TxBytes,
                        value: "50".into(),
                        changed: false,
                    },
                    MetricCell {
                        metric: Metric::TxPackets,
                        value: "3".into(),
                        changed: false,
                    },
                ],
            }]
        );
    }

    #[test]
    fn vanished_interface_is_dropped() {
        let previous = snapshot(&[("eth0", stats("1", "1")), ("eth1", stats("1", "1"))]);
        let current = snapshot(&[("eth0", stats("2", "1"))]);

        let view = build_view(&current, &previous, &everything());
        assert_eq!(view.len(), 1);
        assert_eq!(changed_metrics(&view[0]), [Metric::RxBytes]);
    }
}
