//! # Cart Module
//!
//! In-memory order state while the customer is still deciding.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                                                                     │
//! │   add_item ───────► ┌──────────────┐ ◄─────────── remove_item       │
//! │   (same id adds     │     Cart     │              (0 or ≥ held      │
//! │    to the line)     │ id → qty map │               drops the line)  │
//! │                     └──────┬───────┘                                │
//! │                            │                                        │
//! │                            ▼                                        │
//! │                    Receipt::compute                                 │
//! │                            │                                        │
//! │                            ▼                                        │
//! │                    confirmed? ──► clear()                           │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart holds quantities only. Names and prices stay in the
//! [`Catalog`](crate::catalog::Catalog) and are looked up when a view or
//! a receipt needs them, so there is exactly one source of truth for
//! pricing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::MenuItem;
use crate::error::{OrderError, OrderResult};
use crate::types::ItemId;

// =============================================================================
// Limits
// =============================================================================

/// Maximum quantity one cart line may hold.
///
/// The bound applies to the accumulated line quantity, not just a
/// single addition, so line totals stay inside exact `i64` range for
/// any realistic price.
pub const MAX_LINE_QUANTITY: i64 = 999;

// =============================================================================
// RemoveOutcome
// =============================================================================

/// What a successful [`Cart::remove_item`] actually did.
///
/// The caller needs the distinction for messaging: a dropped line and a
/// reduced line read differently on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The line was removed entirely.
    Removed,
    /// The line survives with a smaller quantity.
    Reduced { removed: i64, remaining: i64 },
}

// =============================================================================
// Cart
// =============================================================================

/// Mutable order state: a map from item id to quantity.
///
/// A `BTreeMap` keeps entries sorted by id, so every listing (cart view,
/// receipt, persisted file) walks items in ascending id order for free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: BTreeMap<ItemId, i64>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds `quantity` units of a catalog item.
    ///
    /// Adding an id that is already present increases its line quantity;
    /// there is never more than one line per item. A line never exceeds
    /// [`MAX_LINE_QUANTITY`].
    ///
    /// ## Errors
    /// Returns [`OrderError::InvalidQuantity`] when `quantity <= 0`, and
    /// [`OrderError::QuantityOutOfRange`] when the line would end up
    /// above [`MAX_LINE_QUANTITY`]. The cart is untouched in either
    /// case.
    pub fn add_item(&mut self, item: &MenuItem, quantity: i64) -> OrderResult<()> {
        if quantity <= 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }

        let held = self.items.get(&item.id).copied().unwrap_or(0);
        // Compared by subtraction; `held + quantity` itself could wrap.
        if quantity > MAX_LINE_QUANTITY - held {
            return Err(OrderError::QuantityOutOfRange {
                got: held.saturating_add(quantity),
                max: MAX_LINE_QUANTITY,
            });
        }

        self.items.insert(item.id, held + quantity);
        Ok(())
    }

    /// Removes units of an item, or the whole line.
    ///
    /// Removal quantity is a *request*, interpreted like so:
    /// - `quantity <= 0` means "remove the whole line" (0 is the
    ///   console shorthand for all)
    /// - `quantity >= held` also removes the whole line; asking for
    ///   more than is there is not an error
    /// - anything in between reduces the line
    ///
    /// ## Errors
    /// Returns [`OrderError::NotInCart`] when the id has no line.
    pub fn remove_item(&mut self, id: ItemId, quantity: i64) -> OrderResult<RemoveOutcome> {
        let Some(&held) = self.items.get(&id) else {
            return Err(OrderError::NotInCart(id.into()));
        };

        if quantity <= 0 || quantity >= held {
            self.items.remove(&id);
            Ok(RemoveOutcome::Removed)
        } else {
            let remaining = held - quantity;
            self.items.insert(id, remaining);
            Ok(RemoveOutcome::Reduced {
                removed: quantity,
                remaining,
            })
        }
    }

    /// Quantity currently held for an id, if any.
    pub fn quantity_of(&self, id: ItemId) -> Option<i64> {
        self.items.get(&id).copied()
    }

    /// Iterates `(id, quantity)` pairs in ascending id order.
    pub fn entries(&self) -> impl Iterator<Item = (ItemId, i64)> + '_ {
        self.items.iter().map(|(&id, &qty)| (id, qty))
    }

    /// True when no lines are held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct item lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities across lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.values().sum()
    }

    /// Empties the cart (after a confirmed purchase).
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn test_item(id: u32, name: &str, pesos: i64) -> MenuItem {
        MenuItem::new(ItemId::new(id), name, Money::from_pesos(pesos))
    }

    #[test]
    fn test_add_item_inserts_line() {
        let mut cart = Cart::new();
        cart.add_item(&test_item(1, "Chicken", 150), 2).unwrap();

        assert_eq!(cart.quantity_of(ItemId::new(1)), Some(2));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_add_same_item_accumulates() {
        let mut cart = Cart::new();
        let chicken = test_item(1, "Chicken", 150);

        cart.add_item(&chicken, 2).unwrap();
        cart.add_item(&chicken, 3).unwrap();

        // One line, summed quantity
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity_of(ItemId::new(1)), Some(5));
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let chicken = test_item(1, "Chicken", 150);

        assert_eq!(
            cart.add_item(&chicken, 0),
            Err(OrderError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.add_item(&chicken, -4),
            Err(OrderError::InvalidQuantity(-4))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_quantity_above_line_maximum() {
        let mut cart = Cart::new();
        let chicken = test_item(1, "Chicken", 150);

        // Parses fine as i64; must never reach line-total arithmetic.
        assert_eq!(
            cart.add_item(&chicken, 1_000_000_000_000_000),
            Err(OrderError::QuantityOutOfRange {
                got: 1_000_000_000_000_000,
                max: MAX_LINE_QUANTITY
            })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_accumulation_stops_at_line_maximum() {
        let mut cart = Cart::new();
        let chicken = test_item(1, "Chicken", 150);

        cart.add_item(&chicken, MAX_LINE_QUANTITY).unwrap();
        assert_eq!(
            cart.add_item(&chicken, 1),
            Err(OrderError::QuantityOutOfRange {
                got: MAX_LINE_QUANTITY + 1,
                max: MAX_LINE_QUANTITY
            })
        );
        // The held line is untouched
        assert_eq!(cart.quantity_of(ItemId::new(1)), Some(MAX_LINE_QUANTITY));
    }

    #[test]
    fn test_entries_sorted_by_id() {
        let mut cart = Cart::new();
        cart.add_item(&test_item(4, "Burger", 140), 1).unwrap();
        cart.add_item(&test_item(1, "Chicken", 150), 1).unwrap();
        cart.add_item(&test_item(3, "Ice Cream", 80), 1).unwrap();

        let ids: Vec<u32> = cart.entries().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_zero_means_remove_all() {
        let mut cart = Cart::new();
        cart.add_item(&test_item(1, "Chicken", 150), 5).unwrap();

        let outcome = cart.remove_item(ItemId::new(1), 0).unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_at_least_held_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(&test_item(1, "Chicken", 150), 2).unwrap();

        // Asking for more than is held is not an error
        let outcome = cart.remove_item(ItemId::new(1), 5).unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed);
        assert_eq!(cart.quantity_of(ItemId::new(1)), None);
    }

    #[test]
    fn test_remove_exact_quantity_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(&test_item(1, "Chicken", 150), 3).unwrap();

        let outcome = cart.remove_item(ItemId::new(1), 3).unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_partial_reduces_line() {
        let mut cart = Cart::new();
        cart.add_item(&test_item(2, "Pizza", 450), 5).unwrap();

        let outcome = cart.remove_item(ItemId::new(2), 2).unwrap();
        assert_eq!(
            outcome,
            RemoveOutcome::Reduced {
                removed: 2,
                remaining: 3
            }
        );
        assert_eq!(cart.quantity_of(ItemId::new(2)), Some(3));
    }

    #[test]
    fn test_remove_missing_item_errors() {
        let mut cart = Cart::new();
        cart.add_item(&test_item(1, "Chicken", 150), 1).unwrap();

        assert_eq!(
            cart.remove_item(ItemId::new(9), 1),
            Err(OrderError::NotInCart(9))
        );
        // The held line is untouched
        assert_eq!(cart.quantity_of(ItemId::new(1)), Some(1));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_item(1, "Chicken", 150), 2).unwrap();
        cart.add_item(&test_item(2, "Pizza", 450), 1).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }
}
