//! Grocer library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{ClearOutcome, Confirm, Item, ItemId, ListError, ListStore, Quantity, Stats};
