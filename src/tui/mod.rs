//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Nothing animates, so the loop sleeps in `poll` until a key arrives,
//! drains every pending event, then redraws once. Clearing the list opens a
//! modal dialog that runs its own blocking loop (see `confirm`), after which
//! the main loop carries on with the answer already applied.
//!
//! ## Modes
//!
//! - **Input**: keystrokes edit the draft item. Esc/Tab move to the list.
//! - **List**: arrows select rows, Space ticks, `d` deletes, `c` clears.
//!   Typing any other character jumps back to Input with that character.

mod component;
mod components;
mod confirm;
mod event;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::item::Quantity;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ConfirmDialogState, InputBox, InputEvent, ItemList, ItemListState, ListEvent};
use crate::tui::confirm::TerminalConfirm;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing edits the draft item.
    Input,
    /// Arrow keys move between rows; letters are commands.
    List,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub item_list: ItemListState,
    pub input_mode: InputMode,
    /// Open while a confirmation is pending (None = hidden)
    pub confirm_dialog: Option<ConfirmDialogState>,
}

impl TuiState {
    pub fn new(initial_quantity: Quantity) -> Self {
        Self {
            input_box: InputBox::new(initial_quantity),
            item_list: ItemListState::new(),
            input_mode: InputMode::Input, // User expects to type immediately
            confirm_dialog: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(app.default_quantity);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));

    ratatui::restore();
    info!("Exiting with {} items on the list", app.list.len());
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending.take() {
            if let Some(action) = handle_event(app, tui, event) {
                let effect = if action == Action::ClearList {
                    let backdrop = app.clone();
                    let mut confirm = TerminalConfirm::new(terminal, tui, backdrop);
                    let effect = update(app, action, &mut confirm);
                    if confirm.quit_requested() {
                        info!("Ctrl+C in confirmation dialog, quitting");
                        return Ok(());
                    }
                    effect
                } else {
                    // Only ClearList consults the confirmation
                    update(app, action, &mut |_: &str| false)
                };
                if apply_effect(app, tui, effect) {
                    return Ok(());
                }
            }
            pending = poll_event_immediate()?;
        }
    }
}

/// Route one terminal event. TUI-local changes happen here; anything that
/// touches the list comes back as an `Action` for `core::update`.
fn handle_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Resize => return None,
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::RequestClear => return app.can_clear().then_some(Action::ClearList),
        _ => {}
    }

    match tui.input_mode {
        InputMode::Input => {
            if matches!(event, TuiEvent::Escape | TuiEvent::Tab) {
                tui.input_mode = InputMode::List;
                tui.item_list.ensure_selection(app.list.len());
                return None;
            }
            match tui.input_box.handle_event(&event)? {
                InputEvent::Submit { name, quantity } => Some(Action::AddItem { name, quantity }),
                InputEvent::QuantityChanged(q) => {
                    debug!("Draft quantity -> {}", q);
                    None
                }
                InputEvent::ContentChanged => None,
            }
        }
        InputMode::List => {
            let list_event =
                ItemList::new(&mut tui.item_list, app.list.items(), true).handle_event(&event)?;
            match list_event {
                ListEvent::Toggle(id) => Some(Action::ToggleItem(id)),
                ListEvent::Delete(id) => Some(Action::DeleteItem(id)),
                ListEvent::Clear => Some(Action::ClearList),
                ListEvent::Quit => Some(Action::Quit),
                ListEvent::FocusInput => {
                    tui.input_mode = InputMode::Input;
                    None
                }
                ListEvent::StartTyping => {
                    tui.input_mode = InputMode::Input;
                    tui.input_box.handle_event(&event);
                    None
                }
            }
        }
    }
}

/// Carry out what `update` asked for. Returns `true` when the app should exit.
fn apply_effect(app: &App, tui: &mut TuiState, effect: Effect) -> bool {
    tui.item_list.clamp(app.list.len());
    match effect {
        Effect::Quit => true,
        Effect::ResetDraft => {
            tui.input_box.reset(app.default_quantity);
            false
        }
        Effect::None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::confirm::Confirm;
    use crate::test_support::{always, qty};

    /// Drive the same path as the event loop, with a scripted confirmation.
    fn send(app: &mut App, tui: &mut TuiState, event: TuiEvent, confirm: &mut dyn Confirm) -> bool {
        match handle_event(app, tui, event) {
            Some(action) => {
                let effect = update(app, action, confirm);
                apply_effect(app, tui, effect)
            }
            None => false,
        }
    }

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            send(app, tui, TuiEvent::InputChar(c), &mut always(false));
        }
    }

    #[test]
    fn test_type_and_submit_adds_item_and_resets_draft() {
        let mut app = App::new();
        let mut tui = TuiState::new(qty(1));

        type_text(&mut app, &mut tui, "Milk");
        send(&mut app, &mut tui, TuiEvent::CursorUp, &mut always(false));
        send(&mut app, &mut tui, TuiEvent::Submit, &mut always(false));

        assert_eq!(app.list.len(), 1);
        assert_eq!(app.list.items()[0].to_string(), "2 Milk");
        assert!(tui.input_box.buffer.is_empty());
        assert_eq!(tui.input_box.quantity, qty(1));
    }

    #[test]
    fn test_blank_submit_keeps_draft_quantity() {
        let mut app = App::new();
        let mut tui = TuiState::new(qty(1));

        type_text(&mut app, &mut tui, "  ");
        send(&mut app, &mut tui, TuiEvent::CursorUp, &mut always(false));
        send(&mut app, &mut tui, TuiEvent::Submit, &mut always(false));

        assert!(app.list.is_empty());
        assert_eq!(tui.input_box.quantity, qty(2));
        assert_eq!(tui.input_box.buffer, "  ");
    }

    #[test]
    fn test_list_mode_toggle_delete_and_clamp() {
        let mut app = App::new();
        let mut tui = TuiState::new(qty(1));
        app.list.add("Milk", qty(2)).unwrap();
        app.list.add("Eggs", qty(1)).unwrap();

        send(&mut app, &mut tui, TuiEvent::Escape, &mut always(false));
        assert_eq!(tui.input_mode, InputMode::List);
        assert_eq!(tui.item_list.selected(), Some(0));

        send(&mut app, &mut tui, TuiEvent::InputChar(' '), &mut always(false));
        assert!(app.list.items()[0].is_checked());

        send(&mut app, &mut tui, TuiEvent::CursorDown, &mut always(false));
        send(&mut app, &mut tui, TuiEvent::InputChar('d'), &mut always(false));
        assert_eq!(app.list.len(), 1);
        assert_eq!(tui.item_list.selected(), Some(0));
        assert!(app.stats().is_complete());
    }

    #[test]
    fn test_typing_in_list_mode_switches_to_input() {
        let mut app = App::new();
        let mut tui = TuiState::new(qty(1));
        tui.input_mode = InputMode::List;

        send(&mut app, &mut tui, TuiEvent::InputChar('b'), &mut always(false));
        assert_eq!(tui.input_mode, InputMode::Input);
        assert_eq!(tui.input_box.buffer, "b");
    }

    #[test]
    fn test_clear_goes_through_confirmation() {
        let mut app = App::new();
        let mut tui = TuiState::new(qty(1));
        app.list.add("Milk", qty(2)).unwrap();

        send(&mut app, &mut tui, TuiEvent::RequestClear, &mut always(false));
        assert_eq!(app.list.len(), 1);

        tui.input_mode = InputMode::List;
        send(&mut app, &mut tui, TuiEvent::InputChar('c'), &mut always(true));
        assert!(app.list.is_empty());
    }

    #[test]
    fn test_clear_not_offered_on_empty_list() {
        let mut app = App::new();
        let mut tui = TuiState::new(qty(1));
        assert_eq!(handle_event(&app, &mut tui, TuiEvent::RequestClear), None);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        let mut tui = TuiState::new(qty(1));
        assert!(send(&mut app, &mut tui, TuiEvent::ForceQuit, &mut always(false)));

        tui.input_mode = InputMode::List;
        assert!(send(&mut app, &mut tui, TuiEvent::InputChar('q'), &mut always(false)));
    }
}
