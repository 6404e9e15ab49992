//! Styling table mapping semantic roles to display attributes.
//!
//! Injected into the render functions rather than referenced as global
//! state, so tests can render with a known theme.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// The headline at the top of the frame.
    pub title: Style,
    /// The program name inside the headline.
    pub accent: Style,
    /// Rows whose checkbox is set.
    pub emphasis: Style,
    /// The trailing quit hint.
    pub footer: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().add_modifier(Modifier::BOLD),
            accent: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            emphasis: Style::default().fg(Color::Cyan),
            footer: Style::default().fg(Color::Magenta),
        }
    }
}
