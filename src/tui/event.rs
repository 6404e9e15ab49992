//! Keyboard translation: crossterm events in, core actions out.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::core::action::Action;

/// Terminal events the run loop cares about.
pub enum TuiEvent {
    /// A recognized key, translated to a core action.
    Key(Action),
    /// Terminal was resized; the next frame repaints at the new size.
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            Ok(translate_key(key_event).map(TuiEvent::Key))
        }
        Event::Resize(..) => Ok(Some(TuiEvent::Resize)),
        _ => Ok(None),
    }
}

/// Poll for an event without blocking (returns immediately).
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Map a key event to a menu action. Unrecognized keys are `None`,
/// which the run loop treats as a silent no-op.
fn translate_key(key_event: KeyEvent) -> Option<Action> {
    match (key_event.modifiers, key_event.code) {
        // Ctrl+C is the interrupt path; it quits like `q`
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Char('q')) => Some(Action::Quit),
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(Action::CursorUp),
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(Action::CursorDown),
        (_, KeyCode::Enter) | (_, KeyCode::Char(' ')) => Some(Action::Toggle),
        _ => None,
    }
}
