//! # Application State
//!
//! Core business state for Grocer. Domain logic only, no TUI types.
//! Presentation state (the half-typed draft, selection, input mode) lives in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── list: ListStore            // the grocery list itself
//! ├── status_message: String     // feedback for the last action
//! └── default_quantity: Quantity // what the quantity picker resets to
//! ```
//!
//! State changes only happen through `update(state, action, confirm)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::item::Quantity;
use crate::core::list::ListStore;
use crate::core::stats::Stats;

pub const WELCOME_MESSAGE: &str = "Welcome to Grocer!";

#[derive(Clone)]
pub struct App {
    pub list: ListStore,
    pub status_message: String,
    pub default_quantity: Quantity,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_list(ListStore::new())
    }

    /// Start from an existing store (tests, or a store built elsewhere).
    pub fn with_list(list: ListStore) -> Self {
        Self {
            list,
            status_message: WELCOME_MESSAGE.to_string(),
            default_quantity: Quantity::default(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            default_quantity: config.default_quantity,
            ..Self::new()
        }
    }

    pub fn stats(&self) -> Stats {
        self.list.stats()
    }

    /// The clear action is only offered for a non-empty list.
    pub fn can_clear(&self) -> bool {
        !self.list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{qty, test_config};

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert_eq!(app.status_message, WELCOME_MESSAGE);
        assert!(app.list.is_empty());
        assert!(!app.can_clear());
        assert_eq!(app.default_quantity, Quantity::default());
    }

    #[test]
    fn test_app_from_config_uses_default_quantity() {
        let mut config = test_config();
        config.default_quantity = qty(4);
        let app = App::from_config(&config);
        assert_eq!(app.default_quantity, qty(4));
    }
}
