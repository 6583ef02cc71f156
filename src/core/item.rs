//! # Items
//!
//! One grocery entry and the small value types it is built from.
//!
//! ```text
//! Item
//! ├── id: ItemId          // identity key, never reused within a store
//! ├── name: String        // trimmed, never empty
//! ├── quantity: Quantity  // 1..=10
//! └── checked: bool       // already bought
//! ```

use std::fmt;

use crate::core::list::ListError;

/// Opaque identity of an item. Only `ListStore` hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How many of an item to buy. Always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, ListError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ListError::QuantityOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every selectable quantity, in ascending order.
    pub fn all() -> impl Iterator<Item = Quantity> {
        (Self::MIN..=Self::MAX).map(Quantity)
    }

    /// One more, stopping at `MAX`.
    pub fn next(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    /// One less, stopping at `MIN`.
    pub fn prev(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity: Quantity,
    checked: bool,
}

impl Item {
    pub(crate) fn new(id: ItemId, name: String, quantity: Quantity) -> Self {
        Self {
            id,
            name,
            quantity,
            checked: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub(crate) fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}

/// Renders as the list shows it: `"2 Milk"`.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_bounds() {
        assert!(Quantity::new(0).is_err());
        assert_eq!(Quantity::new(1).unwrap().get(), 1);
        assert_eq!(Quantity::new(10).unwrap().get(), 10);
        assert_eq!(
            Quantity::new(11),
            Err(ListError::QuantityOutOfRange(11))
        );
    }

    #[test]
    fn test_quantity_all_lists_ten_options() {
        let values: Vec<u8> = Quantity::all().map(Quantity::get).collect();
        assert_eq!(values, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_quantity_next_prev_saturate() {
        let max = Quantity::new(10).unwrap();
        let min = Quantity::default();
        assert_eq!(max.next(), max);
        assert_eq!(min.prev(), min);
        assert_eq!(min.next().get(), 2);
        assert_eq!(max.prev().get(), 9);
    }

    #[test]
    fn test_quantity_display_honours_width() {
        assert_eq!(format!("{:>2} ", Quantity::new(2).unwrap()), " 2 ");
        assert_eq!(format!("{:>2} ", Quantity::new(10).unwrap()), "10 ");
        assert_eq!(Quantity::new(7).unwrap().to_string(), "7");
    }

    #[test]
    fn test_item_display() {
        let item = Item::new(
            ItemId::from_raw(1),
            "Milk".to_string(),
            Quantity::new(2).unwrap(),
        );
        assert_eq!(item.to_string(), "2 Milk");
        assert!(!item.is_checked());
    }

    #[test]
    fn test_item_toggle_flips_flag() {
        let mut item = Item::new(ItemId::from_raw(7), "Eggs".into(), Quantity::default());
        assert!(item.toggle());
        assert!(!item.toggle());
        assert_eq!(item.id().to_string(), "#7");
    }
}
