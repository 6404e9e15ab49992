//! # Menu State
//!
//! Core business state for the menu. This module contains domain logic only -
//! no TUI-specific types. Presentation lives in the `tui` module.
//!
//! ```text
//! Menu
//! ├── choices: Vec<String>       // fixed display-order option labels
//! ├── cursor: usize              // highlighted row, always a valid index
//! └── selected: HashSet<usize>   // checked rows, indices into choices
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::collections::HashSet;

/// The options offered at startup. Never empty; order is display order.
pub const CHOICES: [&str; 3] = ["Web Application", "Static Site", "Poser (Blog, Forum)"];

pub struct Menu {
    pub choices: Vec<String>,
    /// Highlighted row. Invariant: `cursor < choices.len()`. Clamped at both
    /// ends by the reducer, never wraps.
    pub cursor: usize,
    /// Checked rows. Membership toggles independently of the cursor.
    pub selected: HashSet<usize>,
}

impl Menu {
    pub fn new() -> Self {
        Self::with_choices(CHOICES.iter().map(|c| c.to_string()).collect())
    }

    pub fn with_choices(choices: Vec<String>) -> Self {
        debug_assert!(!choices.is_empty());
        Self {
            choices,
            cursor: 0,
            selected: HashSet::new(),
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
