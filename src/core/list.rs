//! # List Store
//!
//! Owns the grocery list and is the only place it can change.
//!
//! ```text
//! ListStore
//! ├── items: Vec<Item>   // insertion order, never reordered
//! └── next_id: u64       // monotonic, so ids are never reused
//! ```
//!
//! Every mutation is synchronous and total: unknown ids are ignored,
//! empty names are refused, and `clear` only happens after the injected
//! `Confirm` says yes.

use std::fmt;

use log::debug;

use crate::core::confirm::Confirm;
use crate::core::item::{Item, ItemId, Quantity};
use crate::core::stats::Stats;

/// Question asked before the whole list is wiped.
pub const CLEAR_PROMPT: &str = "Are you sure you want to delete all items?";

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Item name was empty or only whitespace.
    EmptyName,
    /// Quantity outside `Quantity::MIN..=Quantity::MAX`.
    QuantityOutOfRange(u8),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::EmptyName => write!(f, "item name can't be empty"),
            ListError::QuantityOutOfRange(q) => write!(
                f,
                "quantity {q} is out of range ({}-{})",
                Quantity::MIN,
                Quantity::MAX
            ),
        }
    }
}

impl std::error::Error for ListError {}

/// What `ListStore::clear` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Confirmed; this many items were removed.
    Cleared(usize),
    /// The user said no. Nothing changed.
    Declined,
    /// Nothing to clear, so nobody was asked.
    Empty,
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone)]
pub struct ListStore {
    items: Vec<Item>,
    next_id: u64,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    fn fresh_id(&mut self) -> ItemId {
        let id = ItemId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a new unchecked item and return its id.
    ///
    /// The name is trimmed; if nothing is left the list is untouched and
    /// `ListError::EmptyName` is returned.
    pub fn add(&mut self, name: &str, quantity: Quantity) -> Result<ItemId, ListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ListError::EmptyName);
        }

        let id = self.fresh_id();
        self.items.push(Item::new(id, name.to_string(), quantity));
        debug!("Added item {} ({} x {:?})", id, quantity, name);
        Ok(id)
    }

    /// Remove the item with `id`. Returns `false` if there was none.
    pub fn delete(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        if !removed {
            debug!("Delete ignored, no item {}", id);
        }
        removed
    }

    /// Flip the checked flag on `id`, returning the new value.
    pub fn toggle(&mut self, id: ItemId) -> Option<bool> {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => Some(item.toggle()),
            None => {
                debug!("Toggle ignored, no item {}", id);
                None
            }
        }
    }

    /// Empty the list, but only if `confirm` agrees to `CLEAR_PROMPT`.
    pub fn clear(&mut self, confirm: &mut dyn Confirm) -> ClearOutcome {
        if self.items.is_empty() {
            return ClearOutcome::Empty;
        }
        if !confirm.confirm(CLEAR_PROMPT) {
            return ClearOutcome::Declined;
        }
        let count = self.items.len();
        self.items.clear();
        ClearOutcome::Cleared(count)
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total: self.items.len(),
            purchased: self.items.iter().filter(|item| item.is_checked()).count(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
