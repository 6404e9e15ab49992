use ratatui::Frame;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::core::state::Menu;
use crate::tui::theme::Theme;

/// Build the full frame as styled lines. Pure function of state:
/// identical state always yields identical lines.
pub fn frame_lines(menu: &Menu, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(menu.choices.len() + 6);

    // Headline, padded with a blank line above
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Welcome to the ", theme.title),
        Span::styled("zzt-cli", theme.accent),
        Span::styled(" villain!", theme.title),
    ]));
    lines.push(Line::default());
    lines.push(Line::raw("What type of app do you want to build?"));

    for (i, choice) in menu.choices.iter().enumerate() {
        let cursor = if menu.cursor == i { ">" } else { " " };
        let checked = if menu.is_selected(i) { "x" } else { " " };
        let row = format!("{} [{}] {}", cursor, checked, choice);
        if menu.is_selected(i) {
            lines.push(Line::styled(row, theme.emphasis));
        } else {
            lines.push(Line::raw(row));
        }
    }

    lines.push(Line::default());
    lines.push(Line::styled("Press q to quit.", theme.footer));

    lines
}

pub fn draw_ui(frame: &mut Frame, menu: &Menu, theme: &Theme) {
    let paragraph = Paragraph::new(Text::from(frame_lines(menu, theme)));
    frame.render_widget(paragraph, frame.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_frame_structure() {
        let menu = Menu::new();
        let text = plain(&frame_lines(&menu, &Theme::default()));
        assert_eq!(text[1], "Welcome to the zzt-cli villain!");
        assert_eq!(text[3], "What type of app do you want to build?");
        assert_eq!(text[4], "> [ ] Web Application");
        assert_eq!(text[5], "  [ ] Static Site");
        assert_eq!(text[6], "  [ ] Poser (Blog, Forum)");
        assert_eq!(text[8], "Press q to quit.");
    }

    #[test]
    fn test_cursor_marker_follows_cursor() {
        let mut menu = Menu::new();
        menu.cursor = 2;
        let text = plain(&frame_lines(&menu, &Theme::default()));
        assert_eq!(text[4], "  [ ] Web Application");
        assert_eq!(text[6], "> [ ] Poser (Blog, Forum)");
    }

    #[test]
    fn test_checked_row_is_marked_and_emphasized() {
        let theme = Theme::default();
        let mut menu = Menu::new();
        menu.selected.insert(1);
        let lines = frame_lines(&menu, &theme);

        let text = plain(&lines);
        assert_eq!(text[4], "> [ ] Web Application");
        assert_eq!(text[5], "  [x] Static Site");
        assert_eq!(text[6], "  [ ] Poser (Blog, Forum)");

        // Only the checked row carries the emphasis style
        assert_eq!(lines[5].style, theme.emphasis);
        assert_ne!(lines[4].style, theme.emphasis);
        assert_ne!(lines[6].style, theme.emphasis);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let theme = Theme::default();
        let mut menu = Menu::new();
        menu.cursor = 1;
        menu.selected.insert(0);
        menu.selected.insert(2);
        assert_eq!(frame_lines(&menu, &theme), frame_lines(&menu, &theme));
    }

    #[test]
    fn test_draw_ui() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let menu = Menu::new();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                draw_ui(f, &menu, &theme);
            })
            .unwrap();
    }
}
