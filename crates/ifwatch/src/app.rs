//! Application core: the sample → render → wait loop.

use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ifwatch_core::{InterfaceFilter, Snapshot, StatsReader};
use tracing::{debug, info};

use crate::event::{Event, EventReader};
use crate::render::Screen;
use crate::tui::{Canvas, Tui};

/// Time between samples.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Top-level application state and event loop.
pub struct App {
    reader: StatsReader,
    filter: InterfaceFilter,
    screen: Screen,
}

impl App {
    pub fn new(reader: StatsReader, filter: InterfaceFilter) -> Self {
        Self {
            reader,
            filter,
            screen: Screen::new(),
        }
    }

    /// Run until the user quits or SIGINT arrives.
    ///
    /// A failure to read the statistics source ends the loop with an error;
    /// the terminal is restored when the [`Tui`] guard drops on the way out.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let mut events = EventReader::new(REFRESH_INTERVAL);

        info!(
            filter = self.filter.pattern(),
            source = %self.reader.source().display(),
            "sampling loop started"
        );

        let result = self.drive(&mut tui, &mut events).await;

        events.stop();
        info!(ok = result.is_ok(), "sampling loop ended");
        result
    }

    /// Process events until a quit key, an interrupt or a closed channel.
    async fn drive(&mut self, canvas: &mut impl Canvas, events: &mut EventReader) -> Result<()> {
        let mut previous = Snapshot::new();

        while let Some(event) = events.next().await {
            match event {
                Event::Tick => {
                    let current = self.reader.read_interfaces()?;
                    self.screen.update(&current, &previous, &self.filter);
                    canvas.show(&self.screen)?;
                    previous = current;
                }
                Event::Resize(w, h) => {
                    debug!(w, h, "terminal resized");
                    canvas.show(&self.screen)?;
                }
                Event::Key(key) => {
                    if is_quit_key(key) {
                        break;
                    }
                }
                Event::Interrupt => break,
            }
        }

        Ok(())
    }
}

/// Ctrl-C arrives as a key in raw mode; `q` and Esc quit as well.
fn is_quit_key(key: KeyEvent) -> bool {
    matches!(
        (key.modifiers, key.code),
        (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc)
    )
}
