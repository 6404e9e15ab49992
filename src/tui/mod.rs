//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the menu,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps in `poll` up to
//! 500ms and only repaints when an event arrived (or the terminal was
//! resized). All pending events are drained before the next draw, so a
//! burst of key repeats costs one frame, not one frame per key.

mod event;
mod theme;
pub mod ui;

pub use theme::Theme;

use std::io;
use std::time::Duration;

use log::info;
use ratatui::DefaultTerminal;

use crate::core::action::{Effect, update};
use crate::core::state::Menu;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(500);

/// Acquire the terminal, drive the menu until quit, restore the terminal.
///
/// The only error path is terminal acquisition or run-time terminal I/O;
/// key handling itself cannot fail.
pub fn run() -> io::Result<()> {
    let mut menu = Menu::new();
    let theme = Theme::default();

    let mut terminal = ratatui::try_init()?;
    let result = run_loop(&mut terminal, &mut menu, &theme);
    ratatui::restore();
    result
}

fn run_loop(terminal: &mut DefaultTerminal, menu: &mut Menu, theme: &Theme) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, menu, theme))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT)?;
        if first_event.is_none() {
            continue;
        }
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let mut next = first_event;
        while let Some(tui_event) = next {
            match tui_event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::Key(action) => {
                    if update(menu, action) == Effect::Quit {
                        should_quit = true;
                    }
                }
            }
            next = poll_event_immediate()?;
        }

        // Quit before the redraw: no further frames after the quit signal
        if should_quit {
            info!("Quit requested, leaving event loop");
            return Ok(());
        }
    }
}
