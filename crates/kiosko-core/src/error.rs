//! # Error Module
//!
//! Defines the error type for cart and catalog operations.
//!
//! ## Error Philosophy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Only REJECTED OPERATIONS are errors.                           │
//! │                                                                 │
//! │  OrderError  = "you asked for something the cart/catalog        │
//! │                 cannot do" (unknown item, bad quantity)         │
//! │                                                                 │
//! │  NOT errors:                                                    │
//! │  - an empty cart (a state, reported by is_empty)                │
//! │  - a receipt with nothing on it (Receipt::compute → None)       │
//! │  - unparseable console input (the prompt loop re-asks)          │
//! │                                                                 │
//! │  Keeping states and recoveries out of the enum means every      │
//! │  variant here maps 1:1 to a message the customer sees.          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Order Errors
// =============================================================================

/// Errors from cart and catalog operations.
///
/// Variants carry the raw `i64` the user typed (not an `ItemId`), so a
/// nonsensical entry like `-3` can still be echoed back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The requested id does not exist in the catalog.
    #[error("Invalid item number: {0}")]
    UnknownItem(i64),

    /// Additions require a strictly positive quantity.
    #[error("Quantity must be positive (got {0})")]
    InvalidQuantity(i64),

    /// The addition would push a line past the per-line maximum.
    ///
    /// `got` is the quantity the line would have held.
    #[error("Quantity must be between 1 and {max} (got {got})")]
    QuantityOutOfRange { got: i64, max: i64 },

    /// Removal was requested for an item the cart does not hold.
    #[error("Item {0} is not in the cart")]
    NotInCart(i64),
}

/// Result type alias for order operations.
pub type OrderResult<T> = Result<T, OrderError>;

// =============================================================================
// Unit Tests
// =============================================================================
