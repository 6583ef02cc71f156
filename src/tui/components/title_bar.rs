//! # TitleBar Component
//!
//! Top line: the app title on the left, the latest status message after it.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"🍊 Grocery List 🍊 | Added 2 × Milk"`
//! 2. **Default**: `"🍊 Grocery List 🍊"`
//!
//! Stateless: both props come from the core `App`.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const TITLE: &str = "🍊 Grocery List 🍊";

/// Top status bar component.
///
/// # Props
///
/// - `status_message`: feedback for the last action (may be empty)
pub struct TitleBar {
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(self.status_message.clone()));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(status: &str) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar::new(status.to_string());
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let text = render("Added 2 × Milk");
        assert!(text.contains("Grocery List"));
        assert!(text.contains("Added 2 × Milk"));
        assert!(text.contains('|'));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = render("");
        assert!(text.contains("Grocery List"));
        assert!(!text.contains('|'));
    }
}
