//! # Catalog Module
//!
//! The menu the customer orders from: a read-only list of items with
//! fixed prices. The catalog never changes during a session, which is
//! why the cart stores only `(ItemId, quantity)` pairs and looks names
//! and prices back up here at render and checkout time.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::ItemId;

// =============================================================================
// MenuItem
// =============================================================================

/// A single orderable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique id within the catalog
    pub id: ItemId,
    /// Display name, e.g. "Chicken"
    pub name: String,
    /// Price per unit
    pub unit_price: Money,
}

impl MenuItem {
    pub fn new(id: ItemId, name: impl Into<String>, unit_price: Money) -> Self {
        debug_assert!(
            !unit_price.is_negative(),
            "menu prices must not be negative"
        );
        MenuItem {
            id,
            name: name.into(),
            unit_price,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An immutable collection of menu items.
///
/// Lookup is a linear scan. Menus here are a handful of entries, and a
/// scan keeps the items in their authored order for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog from a list of items.
    ///
    /// Ids must be unique and nonzero; both are authoring errors, not
    /// runtime conditions, so they are checked with debug assertions.
    pub fn new(items: Vec<MenuItem>) -> Self {
        debug_assert!(
            items.iter().all(|item| item.id.get() != 0),
            "item id 0 is reserved as the cancel sentinel"
        );
        debug_assert!(
            {
                let mut ids: Vec<ItemId> = items.iter().map(|item| item.id).collect();
                ids.sort();
                ids.windows(2).all(|pair| pair[0] != pair[1])
            },
            "catalog ids must be unique"
        );
        Catalog { items }
    }

    /// Finds an item by id.
    pub fn lookup(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Iterates items in authored (display) order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            MenuItem::new(ItemId::new(1), "Chicken", Money::from_pesos(150)),
            MenuItem::new(ItemId::new(2), "Pizza", Money::from_pesos(450)),
            MenuItem::new(ItemId::new(3), "Ice Cream", Money::from_pesos(80)),
        ])
    }

    #[test]
    fn test_lookup_finds_item() {
        let catalog = sample_catalog();
        let item = catalog.lookup(ItemId::new(2)).unwrap();
        assert_eq!(item.name, "Pizza");
        assert_eq!(item.unit_price, Money::from_centavos(45_000));
    }

    #[test]
    fn test_lookup_unknown_id() {
        let catalog = sample_catalog();
        assert!(catalog.lookup(ItemId::new(99)).is_none());
    }

    #[test]
    fn test_iter_preserves_authored_order() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken", "Pizza", "Ice Cream"]);
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(sample_catalog().len(), 3);
        assert!(!sample_catalog().is_empty());
        assert!(Catalog::new(Vec::new()).is_empty());
    }
}
