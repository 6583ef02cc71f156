//! # QuantityPicker Component
//!
//! Bounded selector for the draft quantity, drawn as `◀ 3 ▶`. The arrows dim
//! at the ends of the 1–10 range so it's obvious Up/Down won't go further.
//!
//! Stateless: the quantity lives in `InputBox`, which renders this.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::item::Quantity;
use crate::tui::component::Component;

pub struct QuantityPicker {
    pub quantity: Quantity,
    pub focused: bool,
}

impl QuantityPicker {
    /// Fixed width: borders + `◀ 10 ▶` + padding.
    pub const WIDTH: u16 = 12;

    pub fn new(quantity: Quantity, focused: bool) -> Self {
        Self { quantity, focused }
    }

    fn arrow(symbol: &'static str, enabled: bool) -> Span<'static> {
        let style = if enabled {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(symbol, style)
    }
}

impl Component for QuantityPicker {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let value = self.quantity.get();
        let line = Line::from(vec![
            Self::arrow("◀", value > Quantity::MIN),
            Span::styled(
                format!(" {:>2} ", value),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Self::arrow("▶", value < Quantity::MAX),
        ]);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Qty");

        let picker = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(picker, area);
    }
}
