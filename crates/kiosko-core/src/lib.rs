//! # Kiosko Core
//!
//! Pure business logic for the kiosko ordering system.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     apps/terminal (Level 1)                     │
//! │        prompts, rendering, receipt file, tracing setup          │
//! └───────────────────────────┬─────────────────────────────────────┘
//!                             │ depends on
//!                             ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    kiosko-core (Level 0)                        │
//! │     money, catalog, cart, receipt - NO I/O, NO DEPENDENCIES     │
//! │                  on anything that touches the OS                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule: NO I/O
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  This crate NEVER:                                              │
//! │  - reads stdin or writes stdout                                 │
//! │  - touches the filesystem                                       │
//! │  - looks at the clock or the environment                        │
//! │                                                                 │
//! │  Everything here is a deterministic function of its arguments.  │
//! │  That is what makes the totals testable to the centavo.         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//! - [`money`] - integer centavo amounts and tax math
//! - [`types`] - `ItemId` and `TaxRate` newtypes
//! - [`error`] - rejected-operation errors
//! - [`catalog`] - immutable menu of priced items
//! - [`cart`] - mutable id → quantity order state
//! - [`receipt`] - pure pricing of a cart against a catalog
//!
//! ## Usage
//! ```rust
//! use kiosko_core::{Cart, Catalog, ItemId, MenuItem, Money, Receipt, TaxRate};
//!
//! let catalog = Catalog::new(vec![
//!     MenuItem::new(ItemId::new(1), "Chicken", Money::from_pesos(150)),
//!     MenuItem::new(ItemId::new(2), "Pizza", Money::from_pesos(450)),
//! ]);
//!
//! let mut cart = Cart::new();
//! let chicken = catalog.lookup(ItemId::new(1)).unwrap();
//! cart.add_item(chicken, 2).unwrap();
//!
//! let receipt = Receipt::compute(&cart, &catalog, TaxRate::from_bps(1200)).unwrap();
//! assert_eq!(receipt.subtotal, Money::from_pesos(300));
//! assert_eq!(receipt.total, Money::from_pesos(336));
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;

// Re-export the primary types at the crate root.
pub use cart::{Cart, RemoveOutcome, MAX_LINE_QUANTITY};
pub use catalog::{Catalog, MenuItem};
pub use error::{OrderError, OrderResult};
pub use money::Money;
pub use receipt::{Receipt, ReceiptLine};
pub use types::{ItemId, TaxRate};
