//! # Core Identifier and Rate Types
//!
//! Small newtypes shared across the crate. Wrapping raw integers keeps
//! the signatures honest: a function that takes an `ItemId` cannot be
//! handed a quantity by accident, and a `TaxRate` cannot be mistaken
//! for a centavo amount.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ItemId
// =============================================================================

/// Identifier of a catalog entry.
///
/// Ids are small positive integers chosen by whoever builds the catalog;
/// `0` is never a valid id because the prompts reserve it as the cancel
/// sentinel. User input arrives as a raw `i64` and goes through
/// [`ItemId::from_input`] before it can touch the catalog or the cart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ItemId(u32);

impl ItemId {
    /// Creates an id from a known-good value (catalog construction).
    #[inline]
    pub const fn new(raw: u32) -> Self {
        ItemId(raw)
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Converts a user-typed number into an id.
    ///
    /// Returns `None` for zero, negative values, and anything too large
    /// to be an id. Callers keep the raw `i64` around for error
    /// messages, so nothing is lost by the conversion failing.
    ///
    /// ## Example
    /// ```rust
    /// use kiosko_core::types::ItemId;
    ///
    /// assert_eq!(ItemId::from_input(3), Some(ItemId::new(3)));
    /// assert_eq!(ItemId::from_input(0), None);
    /// assert_eq!(ItemId::from_input(-7), None);
    /// ```
    pub fn from_input(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().filter(|&v| v != 0).map(ItemId)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ItemId> for i64 {
    #[inline]
    fn from(id: ItemId) -> i64 {
        i64::from(id.0)
    }
}

// =============================================================================
// TaxRate
// =============================================================================

/// Tax rate in basis points (1/100th of a percent).
///
/// ## Why Basis Points?
/// ```text
/// ┌────────────────────────────────────────────────────────────┐
/// │  12%    = 1200 basis points                                │
/// │  8.25%  =  825 basis points                                │
/// │                                                            │
/// │  Integer basis points keep tax math exact, the same way    │
/// │  integer centavos keep money math exact.                   │
/// └────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points (1200 = 12%).
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the whole-percent part, truncated (1200 → 12, 825 → 8).
    ///
    /// Used for receipt labels like `Tax (12%):`.
    #[inline]
    pub const fn whole_percent(&self) -> u32 {
        self.0 / 100
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
