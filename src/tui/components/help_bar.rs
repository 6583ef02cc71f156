//! # HelpBar Component
//!
//! One line of key hints for the focused area. The clear hint is only shown
//! when there is something to clear.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::InputMode;
use crate::tui::component::Component;

pub struct HelpBar {
    pub mode: InputMode,
    pub can_clear: bool,
}

impl HelpBar {
    pub fn new(mode: InputMode, can_clear: bool) -> Self {
        Self { mode, can_clear }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = match self.mode {
            InputMode::Input => vec![
                ("Enter", "Add item"),
                ("↑/↓", "Quantity"),
                ("Tab", "List"),
            ],
            InputMode::List => vec![
                ("Space", "Bought"),
                ("d", "Delete"),
                ("Tab", "Type"),
                ("q", "Quit"),
            ],
        };
        if self.can_clear {
            let key = match self.mode {
                InputMode::Input => "^L",
                InputMode::List => "c",
            };
            hints.push((key, "Clear"));
        }
        hints
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::DarkGray);

        let spans: Vec<Span> = self
            .hints()
            .into_iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {key} "), key_style),
                    Span::styled(format!("{label} "), label_style),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }
}
