//! Semantic styles for the TUI. Plain attributes only, so the view reads the
//! same on any terminal palette.

use ratatui::style::{Modifier, Style};

/// Screen title.
pub fn title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Interface name in a block header.
pub fn interface_name() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// A counter value that changed since the previous sample.
pub fn standout() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// A counter value with no change to report.
pub fn plain() -> Style {
    Style::default()
}
