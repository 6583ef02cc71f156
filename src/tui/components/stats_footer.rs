//! # StatsFooter Component
//!
//! Bottom line with the progress sentence from `Stats::message()`.
//! Turns green once everything is bought.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::stats::Stats;
use crate::tui::component::Component;

pub struct StatsFooter {
    pub stats: Stats,
}

impl StatsFooter {
    pub fn new(stats: Stats) -> Self {
        Self { stats }
    }

    fn style(&self) -> Style {
        if self.stats.is_complete() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if self.stats.is_empty() {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }
}

impl Component for StatsFooter {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(self.stats.message())
            .style(self.style())
            .alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }
}
