//! # Receipt Module
//!
//! Pure totals computation. A [`Receipt`] is a snapshot of the cart
//! priced against the catalog: lines, subtotal, tax, total. Computing
//! one reads the cart but never mutates it, so the customer can view
//! the receipt, decline, and keep shopping with nothing changed.
//!
//! ## Totals Pipeline
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  for (id, qty) in cart:        ← ascending id order              │
//! │      item = catalog.lookup(id) ← unknown ids are skipped         │
//! │      line_total = price × qty                                    │
//! │      subtotal  += line_total                                     │
//! │                                                                  │
//! │  tax   = subtotal × rate       ← rounded half up, in Money       │
//! │  total = subtotal + tax                                          │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::money::Money;
use crate::types::{ItemId, TaxRate};

// =============================================================================
// Receipt Types
// =============================================================================

/// One priced line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// A fully priced order, ready to show and persist.
///
/// Construction goes through [`Receipt::compute`]; the fields are public
/// because a receipt is plain data once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
}

impl Receipt {
    /// Prices the cart against the catalog.
    ///
    /// Cart entries whose id is missing from the catalog contribute
    /// nothing; they are skipped rather than failing the whole
    /// computation. Returns `None` when nothing priceable remains
    /// (empty cart, or only unknown ids), so callers cannot persist or
    /// confirm a receipt with no content.
    ///
    /// Computing is read-only and repeatable: calling twice on the same
    /// cart yields equal receipts.
    pub fn compute(cart: &Cart, catalog: &Catalog, tax_rate: TaxRate) -> Option<Receipt> {
        let mut lines = Vec::with_capacity(cart.item_count());
        let mut subtotal = Money::zero();

        for (id, quantity) in cart.entries() {
            let Some(item) = catalog.lookup(id) else {
                continue;
            };
            let line_total = item.unit_price * quantity;
            subtotal += line_total;
            lines.push(ReceiptLine {
                item_id: id,
                name: item.name.clone(),
                quantity,
                unit_price: item.unit_price,
                line_total,
            });
        }

        if !subtotal.is_positive() {
            return None;
        }

        let tax = subtotal.calculate_tax(tax_rate);
        Some(Receipt {
            lines,
            subtotal,
            tax_rate,
            tax,
            total: subtotal + tax,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
