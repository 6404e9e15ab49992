//! # Actions
//!
//! Everything that can happen in the menu becomes an `Action`.
//! User presses `j`? That's `Action::CursorDown`.
//! User presses space? That's `Action::Toggle`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state and returns the requested side effect.
//! No I/O here. The terminal loop lives elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply actions, assert on the state.

use crate::core::state::Menu;

/// Every state transition the menu understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    /// Flip the checked state of the row under the cursor.
    Toggle,
    Quit,
}

/// Side effect requested by `update`. The event loop interprets these;
/// `update` itself never performs I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// The reducer: applies one action to the state.
///
/// Total over the state space. Cursor moves clamp at the list edges
/// (no wraparound), toggling flips exactly one index's membership,
/// and `Quit` is the only action that yields an effect.
pub fn update(menu: &mut Menu, action: Action) -> Effect {
    match action {
        Action::Quit => return Effect::Quit,
        Action::CursorUp => {
            if menu.cursor > 0 {
                menu.cursor -= 1;
            }
        }
        Action::CursorDown => {
            if menu.cursor < menu.choices.len() - 1 {
                menu.cursor += 1;
            }
        }
        Action::Toggle => {
            if !menu.selected.remove(&menu.cursor) {
                menu.selected.insert(menu.cursor);
            }
        }
    }
    Effect::None
}
