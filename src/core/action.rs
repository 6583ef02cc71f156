//! # Actions
//!
//! Everything that can happen in Grocer becomes an `Action`.
//! User presses Enter in the input row? That's `Action::AddItem { .. }`.
//! Space on a row? That's `Action::ToggleItem(id)`.
//!
//! The `update()` function takes the current state and an action, applies it,
//! and returns an `Effect` telling the adapter what to do next.
//!
//! ```text
//! State + Action (+ Confirm)  →  update()  →  New State + Effect
//! ```
//!
//! `ClearList` is the one action that needs an answer from the user, so the
//! caller passes its `Confirm` in. Everything else is plain data.

use log::{debug, info};

use crate::core::confirm::Confirm;
use crate::core::item::{ItemId, Quantity};
use crate::core::list::{ClearOutcome, ListError};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddItem { name: String, quantity: Quantity },
    DeleteItem(ItemId),
    ToggleItem(ItemId),
    ClearList,
    Quit,
}

/// Follow-up work for the adapter after `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// An item was added: empty the name field, reset the quantity picker.
    ResetDraft,
    Quit,
}

pub fn update(app: &mut App, action: Action, confirm: &mut dyn Confirm) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::AddItem { name, quantity } => match app.list.add(&name, quantity) {
            Ok(id) => {
                let item_name = app
                    .list
                    .get(id)
                    .map(|item| item.name().to_string())
                    .unwrap_or_default();
                info!("Added {} x {} ({})", quantity, item_name, id);
                app.status_message = format!("Added {} × {}", quantity, item_name);
                Effect::ResetDraft
            }
            Err(ListError::EmptyName) => {
                debug!("Rejected add with empty name");
                app.status_message = "Type an item name first".to_string();
                Effect::None
            }
            Err(e) => {
                debug!("Rejected add: {}", e);
                app.status_message = e.to_string();
                Effect::None
            }
        },
        Action::DeleteItem(id) => {
            let name = app.list.get(id).map(|item| item.name().to_string());
            if app.list.delete(id) {
                let name = name.unwrap_or_default();
                info!("Removed {} ({})", name, id);
                app.status_message = format!("Removed {}", name);
            }
            Effect::None
        }
        Action::ToggleItem(id) => {
            if let Some(checked) = app.list.toggle(id) {
                let name = app
                    .list
                    .get(id)
                    .map(|item| item.name().to_string())
                    .unwrap_or_default();
                info!("Toggled {} ({}) -> {}", name, id, checked);
                app.status_message = if checked {
                    format!("Marked {} as bought", name)
                } else {
                    format!("Put {} back on the list", name)
                };
            }
            Effect::None
        }
        Action::ClearList => {
            match app.list.clear(confirm) {
                ClearOutcome::Cleared(count) => {
                    info!("Cleared {} items", count);
                    let noun = if count == 1 { "item" } else { "items" };
                    app.status_message = format!("Cleared {} {}", count, noun);
                }
                ClearOutcome::Declined => {
                    info!("Clear declined");
                    app.status_message = "Kept your list".to_string();
                }
                ClearOutcome::Empty => {
                    debug!("Clear ignored, list already empty");
                }
            }
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::list::ListStore;
    use crate::test_support::{always, qty};

    fn add(app: &mut App, name: &str, quantity: u8) -> Effect {
        update(
            app,
            Action::AddItem {
                name: name.to_string(),
                quantity: qty(quantity),
            },
            &mut always(true),
        )
    }

    #[test]
    fn test_add_resets_draft() {
        let mut app = App::new();
        assert_eq!(add(&mut app, "Milk", 2), Effect::ResetDraft);
        assert_eq!(app.list.len(), 1);
        assert_eq!(app.status_message, "Added 2 × Milk");
    }

    #[test]
    fn test_empty_add_keeps_draft() {
        let mut app = App::new();
        assert_eq!(add(&mut app, "  ", 2), Effect::None);
        assert!(app.list.is_empty());
        assert_eq!(app.status_message, "Type an item name first");
    }

    #[test]
    fn test_toggle_and_delete_update_status() {
        let mut app = App::new();
        add(&mut app, "Milk", 2);
        let id = app.list.items()[0].id();

        update(&mut app, Action::ToggleItem(id), &mut always(true));
        assert_eq!(app.status_message, "Marked Milk as bought");
        update(&mut app, Action::ToggleItem(id), &mut always(true));
        assert_eq!(app.status_message, "Put Milk back on the list");

        update(&mut app, Action::DeleteItem(id), &mut always(true));
        assert_eq!(app.status_message, "Removed Milk");
        assert!(app.list.is_empty());
    }

    #[test]
    fn test_missing_id_leaves_status_alone() {
        let mut app = App::new();
        add(&mut app, "Milk", 2);
        let id = app.list.items()[0].id();
        update(&mut app, Action::DeleteItem(id), &mut always(true));
        app.status_message.clear();

        update(&mut app, Action::DeleteItem(id), &mut always(true));
        update(&mut app, Action::ToggleItem(id), &mut always(true));
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_clear_confirmed_and_declined() {
        let mut app = App::new();
        add(&mut app, "Milk", 2);
        add(&mut app, "Eggs", 1);

        assert_eq!(
            update(&mut app, Action::ClearList, &mut always(false)),
            Effect::None
        );
        assert_eq!(app.list.len(), 2);
        assert_eq!(app.status_message, "Kept your list");

        update(&mut app, Action::ClearList, &mut always(true));
        assert!(app.list.is_empty());
        assert_eq!(app.status_message, "Cleared 2 items");
    }

    #[test]
    fn test_quit_effect() {
        let mut app = App::with_list(ListStore::new());
        assert_eq!(
            update(&mut app, Action::Quit, &mut always(true)),
            Effect::Quit
        );
    }
}
