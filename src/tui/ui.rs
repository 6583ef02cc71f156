use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{ConfirmDialog, HelpBar, ItemList, StatsFooter, TitleBar};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Height of the input row (bordered, one line of text).
const INPUT_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(INPUT_HEIGHT), Min(0), Length(1), Length(1)]);
    let [title_area, input_area, list_area, help_area, stats_area] = layout.areas(frame.area());

    TitleBar::new(app.status_message.clone()).render(frame, title_area);

    // The dialog owns the keyboard while open, so nothing else looks focused
    let dialog_open = tui.confirm_dialog.is_some();
    let input_focused = !dialog_open && tui.input_mode == InputMode::Input;
    let list_focused = !dialog_open && tui.input_mode == InputMode::List;

    tui.input_box.focused = input_focused;
    tui.input_box.render(frame, input_area);

    ItemList::new(&mut tui.item_list, app.list.items(), list_focused).render(frame, list_area);

    HelpBar::new(tui.input_mode, app.can_clear()).render(frame, help_area);
    StatsFooter::new(app.stats()).render(frame, stats_area);

    if let Some(dialog) = &tui.confirm_dialog {
        ConfirmDialog::new(dialog).render(frame, frame.area());
    }
}
