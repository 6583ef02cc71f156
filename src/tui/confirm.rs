//! # Terminal Confirmation
//!
//! The TUI's answer to `core::Confirm`: open the dialog over the current
//! screen and block in a small nested event loop until the user picks yes or
//! no. The main loop is paused meanwhile, matching a browser's modal confirm.
//!
//! The list is mutably borrowed while `clear` runs, so the screen behind the
//! dialog is drawn from a snapshot of `App` taken just before.

use std::io;
use std::time::Duration;

use log::{debug, warn};
use ratatui::DefaultTerminal;

use crate::core::confirm::Confirm;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::ConfirmDialogState;
use crate::tui::event::{TuiEvent, poll_event_timeout};
use crate::tui::ui;

const POLL_TIMEOUT: Duration = Duration::from_millis(500);

pub struct TerminalConfirm<'a> {
    terminal: &'a mut DefaultTerminal,
    tui: &'a mut TuiState,
    backdrop: App,
    quit_requested: bool,
}

impl<'a> TerminalConfirm<'a> {
    pub fn new(terminal: &'a mut DefaultTerminal, tui: &'a mut TuiState, backdrop: App) -> Self {
        Self {
            terminal,
            tui,
            backdrop,
            quit_requested: false,
        }
    }

    /// Whether the user left a dialog with Ctrl+C. The answer was "no".
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

impl Confirm for TerminalConfirm<'_> {
    fn confirm(&mut self, prompt: &str) -> bool {
        debug!("Asking for confirmation: {}", prompt);
        self.tui.confirm_dialog = Some(ConfirmDialogState::new(prompt));

        let terminal = &mut *self.terminal;
        let backdrop = &self.backdrop;

        let answer = run_dialog(
            || poll_event_timeout(POLL_TIMEOUT),
            &mut *self.tui,
            |tui, event| {
                tui.confirm_dialog
                    .as_mut()
                    .and_then(|dialog| dialog.handle_event(event))
            },
            |tui| {
                terminal.draw(|f| ui::draw_ui(f, backdrop, tui))?;
                Ok(())
            },
        );

        if let Some(dialog) = self.tui.confirm_dialog.take() {
            self.quit_requested |= dialog.quit_requested;
        }
        match answer {
            Ok(confirmed) => {
                debug!("Confirmation answered: {}", confirmed);
                confirmed
            }
            Err(e) => {
                warn!("Confirmation dialog failed, treating as no: {}", e);
                false
            }
        }
    }
}

/// Blocking dialog loop: draw, wait for an event, feed it to `answer`, repeat
/// until `answer` returns a decision. `state` is handed to both `answer` and
/// `draw` so they can share the dialog.
///
/// `next_event` returning `Ok(None)` is a poll timeout, not the end of input.
pub fn run_dialog<S, N, A, D>(
    mut next_event: N,
    state: &mut S,
    mut answer: A,
    mut draw: D,
) -> io::Result<bool>
where
    S: ?Sized,
    N: FnMut() -> io::Result<Option<TuiEvent>>,
    A: FnMut(&mut S, &TuiEvent) -> Option<bool>,
    D: FnMut(&mut S) -> io::Result<()>,
{
    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            draw(state)?;
            needs_redraw = false;
        }
        if let Some(event) = next_event()? {
            if let Some(decision) = answer(state, &event) {
                return Ok(decision);
            }
            needs_redraw = true;
        }
    }
}
