//! # ItemList Component
//!
//! The grocery list itself: one row per item, checkbox first.
//!
//! ```text
//! [ ]  2 Milk
//! [x]  1 Eggs      (crossed out, dimmed)
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ItemListState` lives in `TuiState` (selection survives between frames)
//! - `ItemList` is created each frame with borrowed state and the items as props
//!
//! Rows are addressed by position for selection only. Anything sent to the
//! core goes out as the row's `ItemId`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::item::{Item, ItemId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent selection state for the item list.
#[derive(Default)]
pub struct ItemListState {
    pub list_state: ListState,
}

impl ItemListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keep the selection on a real row after the list changed length.
    pub fn clamp(&mut self, len: usize) {
        match (self.list_state.selected(), len) {
            (_, 0) => self.list_state.select(None),
            (Some(i), len) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    /// Select the first row if nothing is selected yet.
    pub fn ensure_selection(&mut self, len: usize) {
        if self.list_state.selected().is_none() && len > 0 {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let idx = self
            .list_state
            .selected()
            .map(|i| i.saturating_sub(1))
            .unwrap_or(len - 1);
        self.list_state.select(Some(idx));
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let idx = self
            .list_state
            .selected()
            .map(|i| (i + 1).min(len - 1))
            .unwrap_or(0);
        self.list_state.select(Some(idx));
    }
}

/// Events emitted while the list has focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    Toggle(ItemId),
    Delete(ItemId),
    Clear,
    /// Hand focus back to the input row.
    FocusInput,
    /// A printable key: switch to the input row and type it there.
    StartTyping,
    Quit,
}

/// Transient render/event wrapper for the item list.
pub struct ItemList<'a> {
    state: &'a mut ItemListState,
    items: &'a [Item],
    focused: bool,
}

impl<'a> ItemList<'a> {
    pub fn new(state: &'a mut ItemListState, items: &'a [Item], focused: bool) -> Self {
        Self {
            state,
            items,
            focused,
        }
    }

    fn selected_id(&self) -> Option<ItemId> {
        self.state
            .selected()
            .and_then(|i| self.items.get(i))
            .map(Item::id)
    }
}

impl Component for ItemList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clamp(self.items.len());

        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" List ")
            .padding(Padding::horizontal(1));

        // borders + padding + "[x] " + " 10 " prefix
        let name_width = (area.width as usize).saturating_sub(4 + 4 + 3);

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(item_line(item, name_width)))
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(rows).block(block).highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

impl EventHandler for ItemList<'_> {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let len = self.items.len();
        match event {
            TuiEvent::CursorUp => {
                self.state.select_previous(len);
                None
            }
            TuiEvent::CursorDown => {
                self.state.select_next(len);
                None
            }
            TuiEvent::CursorHome if len > 0 => {
                self.state.list_state.select(Some(0));
                None
            }
            TuiEvent::CursorEnd if len > 0 => {
                self.state.list_state.select(Some(len - 1));
                None
            }
            TuiEvent::InputChar(' ') => self.selected_id().map(ListEvent::Toggle),
            TuiEvent::InputChar('d') | TuiEvent::Delete => {
                self.selected_id().map(ListEvent::Delete)
            }
            TuiEvent::InputChar('c') if len > 0 => Some(ListEvent::Clear),
            TuiEvent::InputChar('q') => Some(ListEvent::Quit),
            TuiEvent::InputChar('i') | TuiEvent::Tab | TuiEvent::Submit => {
                Some(ListEvent::FocusInput)
            }
            TuiEvent::InputChar(_) | TuiEvent::Paste(_) => Some(ListEvent::StartTyping),
            _ => None,
        }
    }
}

fn item_line(item: &Item, name_width: usize) -> Line<'static> {
    let (checkbox, name_style) = if item.is_checked() {
        (
            Span::styled("[x] ", Style::default().fg(Color::Green)),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        (Span::raw("[ ] "), Style::default())
    };

    Line::from(vec![
        checkbox,
        Span::styled(
            format!("{:>2} ", item.quantity()),
            name_style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(truncate_to_width(item.name(), name_width), name_style),
    ])
}

/// Cut `s` to at most `max_width` display columns, ending in "…" if shortened.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::list::ListStore;
    use crate::test_support::{buffer_text, qty};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn store() -> (ListStore, ItemId, ItemId) {
        let mut list = ListStore::new();
        let milk = list.add("Milk", qty(2)).unwrap();
        let eggs = list.add("Eggs", qty(1)).unwrap();
        (list, milk, eggs)
    }

    #[test]
    fn test_navigation_clamps() {
        let mut state = ItemListState::new();
        state.select_next(2);
        assert_eq!(state.selected(), Some(0));
        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.selected(), Some(1));
        state.select_previous(2);
        state.select_previous(2);
        assert_eq!(state.selected(), Some(0));

        state.list_state.select(Some(5));
        state.clamp(3);
        assert_eq!(state.selected(), Some(2));
        state.clamp(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_space_and_d_target_selected_item() {
        let (list, milk, eggs) = store();
        let mut state = ItemListState::new();
        let mut view = ItemList::new(&mut state, list.items(), true);

        assert_eq!(view.handle_event(&TuiEvent::InputChar(' ')), None);
        view.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            view.handle_event(&TuiEvent::InputChar(' ')),
            Some(ListEvent::Toggle(milk))
        );
        view.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            view.handle_event(&TuiEvent::InputChar('d')),
            Some(ListEvent::Delete(eggs))
        );
    }

    #[test]
    fn test_clear_only_offered_when_non_empty() {
        let mut state = ItemListState::new();
        let mut view = ItemList::new(&mut state, &[], true);
        assert_eq!(
            view.handle_event(&TuiEvent::InputChar('c')),
            Some(ListEvent::StartTyping)
        );

        let (list, _, _) = store();
        let mut view = ItemList::new(&mut state, list.items(), true);
        assert_eq!(
            view.handle_event(&TuiEvent::InputChar('c')),
            Some(ListEvent::Clear)
        );
    }

    #[test]
    fn test_focus_and_quit_keys() {
        let mut state = ItemListState::new();
        let mut view = ItemList::new(&mut state, &[], true);
        assert_eq!(view.handle_event(&TuiEvent::Tab), Some(ListEvent::FocusInput));
        assert_eq!(view.handle_event(&TuiEvent::Submit), Some(ListEvent::FocusInput));
        assert_eq!(view.handle_event(&TuiEvent::InputChar('q')), Some(ListEvent::Quit));
        assert_eq!(
            view.handle_event(&TuiEvent::InputChar('b')),
            Some(ListEvent::StartTyping)
        );
    }

    #[test]
    fn test_render_rows() {
        let (mut list, milk, _) = store();
        list.toggle(milk);
        list.add("Rice", qty(10)).unwrap();

        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ItemListState::new();
        terminal
            .draw(|f| {
                ItemList::new(&mut state, list.items(), false).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer_text(buffer);
        assert!(text.contains("[x]  2 Milk"));
        assert!(text.contains("[ ]  1 Eggs"));
        assert!(text.contains("[ ] 10 Rice"));

        let m = buffer
            .content()
            .iter()
            .find(|cell| cell.symbol() == "M")
            .unwrap();
        assert!(m.modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Milk", 10), "Milk");
        assert_eq!(truncate_to_width("Strawberries", 6), "Straw…");
        assert_eq!(truncate_to_width("Milk", 0), "");
    }
}
