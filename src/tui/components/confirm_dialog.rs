//! # Confirm Dialog Component
//!
//! Centered yes/no overlay. Drawn on top of the normal UI while a
//! `TerminalConfirm` is waiting for an answer.
//!
//! Keys: `y` / `n`, Left/Right/Tab to move between the buttons, Enter to
//! pick the highlighted one, Esc for no. "No" starts highlighted. Ctrl+C
//! answers no and marks the dialog so the app exits afterwards.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

impl Choice {
    fn other(self) -> Self {
        match self {
            Choice::Yes => Choice::No,
            Choice::No => Choice::Yes,
        }
    }
}

/// Persistent state for the dialog while it is open.
#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub prompt: String,
    pub choice: Choice,
    /// Set when the dialog was dismissed with Ctrl+C.
    pub quit_requested: bool,
}

impl ConfirmDialogState {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            choice: Choice::No,
            quit_requested: false,
        }
    }
}

impl EventHandler for ConfirmDialogState {
    /// `true` = confirmed, `false` = declined.
    type Event = bool;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<bool> {
        match event {
            TuiEvent::InputChar('y') | TuiEvent::InputChar('Y') => Some(true),
            TuiEvent::InputChar('n') | TuiEvent::InputChar('N') => Some(false),
            TuiEvent::Escape => Some(false),
            TuiEvent::ForceQuit => {
                self.quit_requested = true;
                Some(false)
            }
            TuiEvent::CursorLeft | TuiEvent::CursorRight | TuiEvent::Tab => {
                self.choice = self.choice.other();
                None
            }
            TuiEvent::Submit => Some(self.choice == Choice::Yes),
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn button(label: &'static str, selected: bool) -> Span<'static> {
        let style = if selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(label, style)
    }
}

impl Component for ConfirmDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 7, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Confirm ")
            .title_bottom(Line::from(" y Yes  n No  Enter Pick ").centered())
            .padding(Padding::horizontal(1));

        let buttons = Line::from(vec![
            Self::button(" Yes ", self.state.choice == Choice::Yes),
            Span::raw("   "),
            Self::button(" No ", self.state.choice == Choice::No),
        ]);

        let body = Paragraph::new(vec![
            Line::from(self.state.prompt.clone()),
            Line::from(""),
            buttons,
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

        frame.render_widget(body, overlay);
    }
}

/// A rect `percent_x` wide and `height` rows tall, centered in `outer`.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::list::CLEAR_PROMPT;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_yes_no_keys() {
        let mut state = ConfirmDialogState::new(CLEAR_PROMPT);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('y')), Some(true));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('N')), Some(false));
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(false));
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_ctrl_c_declines_and_requests_quit() {
        let mut state = ConfirmDialogState::new(CLEAR_PROMPT);
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(false));
        assert!(!state.quit_requested);

        assert_eq!(state.handle_event(&TuiEvent::ForceQuit), Some(false));
        assert!(state.quit_requested);
    }

    #[test]
    fn test_enter_picks_highlighted_choice() {
        let mut state = ConfirmDialogState::new(CLEAR_PROMPT);
        assert_eq!(state.choice, Choice::No);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(false));

        assert_eq!(state.handle_event(&TuiEvent::CursorLeft), None);
        assert_eq!(state.choice, Choice::Yes);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(true));
    }

    #[test]
    fn test_render_shows_prompt_and_buttons() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = ConfirmDialogState::new("Delete everything?");
        terminal
            .draw(|f| {
                ConfirmDialog::new(&state).render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Confirm"));
        assert!(text.contains("Delete everything?"));
        assert!(text.contains("Yes"));
        assert!(text.contains("No"));
    }
}
