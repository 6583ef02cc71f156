//! # InputBox Component
//!
//! The "add an item" row: a name field plus the quantity picker.
//!
//! ## Responsibilities
//!
//! - Capture the item name (single line)
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Step the draft quantity with Up/Down
//! - Emit a submission on Enter
//!
//! ## State Management
//!
//! The draft (name buffer + quantity) is internal state, like a form's fields.
//! Whether the row has focus is a prop from the parent. The buffer is *not*
//! cleared on submit: the parent calls `reset()` once the core accepted the
//! item, so a rejected submission keeps what was typed.

mod cursor;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::item::Quantity;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::QuantityPicker;
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary};

pub const PLACEHOLDER: &str = "Insert item here...";

/// Borders on each side of the name field.
const BORDER_WIDTH: u16 = 2;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed Enter with the current draft
    Submit { name: String, quantity: Quantity },
    /// Draft quantity moved up or down
    QuantityChanged(Quantity),
    /// Text content or cursor changed
    ContentChanged,
}

/// Name field + quantity picker.
///
/// # Props
///
/// - `focused`: whether keystrokes go here (dimmed otherwise)
///
/// # State
///
/// - `buffer`: item name being typed
/// - `quantity`: selected quantity
/// - `cursor`: cursor position and horizontal scroll
pub struct InputBox {
    pub buffer: String,
    pub quantity: Quantity,
    pub focused: bool,
    cursor: CursorState,
}

impl InputBox {
    pub fn new(quantity: Quantity) -> Self {
        Self {
            buffer: String::new(),
            quantity,
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// Empty the name and put the quantity back to `quantity`.
    pub fn reset(&mut self, quantity: Quantity) {
        self.buffer.clear();
        self.cursor.reset();
        self.quantity = quantity;
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [name_area, quantity_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(QuantityPicker::WIDTH)])
                .areas(area);

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Item");

        let inner_width = name_area.width.saturating_sub(BORDER_WIDTH) as usize;
        self.cursor.update_scroll(&self.buffer, inner_width);

        let content = if self.buffer.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(self.cursor.visible(&self.buffer, inner_width).to_string())
        };
        frame.render_widget(Paragraph::new(content).block(block), name_area);

        let mut picker = QuantityPicker::new(self.quantity, self.focused);
        picker.render(frame, quantity_area);

        if self.focused && inner_width > 0 {
            let offset = self.cursor.column(&self.buffer) - self.cursor.scroll;
            let x = name_area.x + 1 + offset.min(inner_width - 1) as u16;
            frame.set_cursor_position((x, name_area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut tmp));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: newlines become spaces
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.insert_str(&flat);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => self
                .cursor
                .move_left(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorRight => self
                .cursor
                .move_right(&self.buffer)
                .then_some(InputEvent::ContentChanged),
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.pos = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorUp => {
                let next = self.quantity.next();
                (next != self.quantity).then(|| {
                    self.quantity = next;
                    InputEvent::QuantityChanged(next)
                })
            }
            TuiEvent::CursorDown => {
                let prev = self.quantity.prev();
                (prev != self.quantity).then(|| {
                    self.quantity = prev;
                    InputEvent::QuantityChanged(prev)
                })
            }
            TuiEvent::Submit => Some(InputEvent::Submit {
                name: self.buffer.clone(),
                quantity: self.quantity,
            }),
            _ => None,
        }
    }
}
