//! # Stats
//!
//! Counts derived from the list, and the footer sentence built from them.

use std::fmt;

pub const EMPTY_MESSAGE: &str = "Start adding some items to your shopping list!";
pub const COMPLETE_MESSAGE: &str = "Yay, you got everything!";

/// Snapshot of list progress. `purchased <= total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub purchased: usize,
}

impl Stats {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Non-empty and everything bought.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.purchased == self.total
    }

    pub fn message(&self) -> String {
        if self.is_empty() {
            EMPTY_MESSAGE.to_string()
        } else if self.purchased < self.total {
            let noun = if self.total == 1 { "item" } else { "items" };
            format!(
                "You have {} {} on your list, and you already bought {}.",
                self.total, noun, self.purchased
            )
        } else {
            COMPLETE_MESSAGE.to_string()
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
