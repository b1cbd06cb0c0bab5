//! # TitleBar Component
//!
//! Top status bar - the application shell's title line.
//!
//! Stateless: receives the title, task counts and the transient status
//! message as props and renders a single line. The counts come from the
//! store, the status message from `App`, and the TitleBar doesn't care
//! where either comes from.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Top status bar showing the app title, open/total counts and status.
pub struct TitleBar {
    pub title: String,
    pub open: usize,
    pub total: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: String, open: usize, total: usize, status_message: String) -> Self {
        Self {
            title,
            open,
            total,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = if self.status_message.is_empty() {
            format!("{} ({} open / {} total)", self.title, self.open, self.total)
        } else {
            format!(
                "{} ({} open / {} total) | {}",
                self.title, self.open, self.total, self.status_message
            )
        };

        frame.render_widget(
            Span::styled(text, Style::default().add_modifier(Modifier::BOLD)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "Todo List".to_string(),
            2,
            3,
            "Added \"Buy milk\"".to_string(),
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Todo List"));
        assert!(text.contains("2 open / 3 total"));
        assert!(text.contains("Added \"Buy milk\""));
    }

    #[test]
    fn test_title_bar_without_status_message() {
        let mut title_bar = TitleBar::new("Todo List".to_string(), 0, 0, String::new());
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Todo List (0 open / 0 total)"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_custom_title() {
        let mut title_bar = TitleBar::new("Groceries".to_string(), 1, 1, String::new());
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Groceries"));
        assert!(!text.contains("Todo List"));
    }
}
