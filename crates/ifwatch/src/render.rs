//! Interface counters screen.
//!
//! Layout, top to bottom:
//!
//! ```text
//!
//!                  Interfaces statistics
//! Interface: vnic0 ip = 10.0.0.1
//!         rx_bytes = 100    rx_packets = 5    tx_bytes = 50    tx_packets = 3
//! Interface: vnic1 ip = A
//!         ...
//! ```
//!
//! The title is re-centred on every draw from the current frame width.
//! Nothing wraps or scrolls.

use ifwatch_core::{InterfaceFilter, InterfaceView, Snapshot, build_view};
use ratatui::Frame;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::theme;

pub const TITLE: &str = "Interfaces statistics";

const INDENT: &str = "        ";
const GAP: &str = "    ";

/// Screen state: the view built from the latest sample.
#[derive(Debug, Default)]
pub struct Screen {
    view: Vec<InterfaceView>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a new sample and the one before it.
    pub fn update(&mut self, current: &Snapshot, previous: &Snapshot, filter: &InterfaceFilter) {
        self.view = build_view(current, previous, filter);
    }

    pub fn render(&self, frame: &mut Frame) {
        let mut lines = Vec::with_capacity(2 + 2 * self.view.len());
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(TITLE, theme::title_style())).centered());

        for iface in &self.view {
            lines.push(Line::from(vec![
                Span::raw("Interface: "),
                Span::styled(iface.name.as_str(), theme::interface_name()),
                Span::raw(format!(" ip = {}", iface.ip)),
            ]));

            let mut spans = vec![Span::raw(INDENT)];
            for cell in &iface.metrics {
                let style = if cell.changed {
                    theme::standout()
                } else {
                    theme::plain()
                };
                spans.push(Span::raw(format!("{} = ", cell.metric)));
                spans.push(Span::styled(cell.value.as_str(), style));
                spans.push(Span::raw(GAP));
            }
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), frame.area());
    }
}
