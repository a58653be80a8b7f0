//! # Console Rendering
//!
//! Fixed-width layout of the menu, cart, and receipt views. Column
//! widths are part of the terminal's look and are pinned by tests:
//! names pad to 20 columns on the menu and 18 on item lines, totals
//! labels pad to 26, and the totals rule is 40 dashes.
//!
//! [`receipt_document`] is the one non-console format: the plain ASCII
//! text that goes into the receipt file.

use std::io::{self, Write};

use kiosko_core::{Cart, Catalog, Receipt};

use crate::config::TerminalConfig;

// =============================================================================
// Console Views
// =============================================================================

/// Writes the menu listing.
///
/// ```text
///
/// ---- MENU ----
///  1. Chicken              ₱ 150.00
///  2. Pizza                ₱ 450.00
/// ```
pub fn write_menu<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    config: &TerminalConfig,
) -> io::Result<()> {
    write!(out, "\n---- MENU ----\n")?;
    for item in catalog.iter() {
        writeln!(
            out,
            "{:>2}. {:<20} {}",
            item.id.get(),
            item.name,
            config.format_currency(item.unit_price)
        )?;
    }
    Ok(())
}

/// Writes the cart view, one line per held item in ascending id order.
///
/// An empty cart prints `Your cart is empty.` and nothing else, no
/// header. Cart ids missing from the catalog are skipped.
pub fn write_cart<W: Write>(
    out: &mut W,
    cart: &Cart,
    catalog: &Catalog,
    config: &TerminalConfig,
) -> io::Result<()> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty.")?;
        return Ok(());
    }

    write!(out, "\n---- CART ----\n")?;
    for (id, quantity) in cart.entries() {
        let Some(item) = catalog.lookup(id) else {
            continue;
        };
        writeln!(
            out,
            "{:>2} x {:<18} {}",
            quantity,
            item.name,
            config.format_currency(item.unit_price * quantity)
        )?;
    }
    Ok(())
}

/// Writes the checkout report.
///
/// The header always prints; `None` (nothing priceable) becomes
/// `No items ordered.` under it. A real receipt gets its lines, a
/// 40-dash rule, and the three totals.
pub fn write_receipt<W: Write>(
    out: &mut W,
    receipt: Option<&Receipt>,
    config: &TerminalConfig,
) -> io::Result<()> {
    write!(out, "\n---- RECEIPT ----\n")?;
    let Some(receipt) = receipt else {
        writeln!(out, "No items ordered.")?;
        return Ok(());
    };

    for line in &receipt.lines {
        writeln!(
            out,
            "{:>2} x {:<18} {}",
            line.quantity,
            line.name,
            config.format_currency(line.line_total)
        )?;
    }

    writeln!(out, "{}", "-".repeat(40))?;
    writeln!(
        out,
        "{:<26} {}",
        "Subtotal:",
        config.format_currency(receipt.subtotal)
    )?;
    writeln!(
        out,
        "{:<26} {}",
        format!("Tax ({}%):", receipt.tax_rate.whole_percent()),
        config.format_currency(receipt.tax)
    )?;
    writeln!(
        out,
        "{:<26} {}",
        "Total:",
        config.format_currency(receipt.total)
    )?;
    Ok(())
}

// =============================================================================
// Receipt File Document
// =============================================================================

/// Renders the plain-text document persisted for a confirmed purchase.
///
/// Unpadded lines, a 30-dash rule, and the currency code instead of
/// the symbol:
///
/// ```text
/// RECEIPT
/// 2 x Chicken PHP 300.00
/// ------------------------------
/// Subtotal: PHP 300.00
/// Tax (12%): PHP 36.00
/// Total: PHP 336.00
/// ```
pub fn receipt_document(receipt: &Receipt, config: &TerminalConfig) -> String {
    let mut doc = String::from("RECEIPT\n");
    for line in &receipt.lines {
        doc.push_str(&format!(
            "{} x {} {}\n",
            line.quantity,
            line.name,
            config.format_currency_code(line.line_total)
        ));
    }
    doc.push_str(&"-".repeat(30));
    doc.push('\n');
    doc.push_str(&format!(
        "Subtotal: {}\n",
        config.format_currency_code(receipt.subtotal)
    ));
    doc.push_str(&format!(
        "Tax ({}%): {}\n",
        receipt.tax_rate.whole_percent(),
        config.format_currency_code(receipt.tax)
    ));
    doc.push_str(&format!(
        "Total: {}\n",
        config.format_currency_code(receipt.total)
    ));
    doc
}

// =============================================================================
// Unit Tests
// =============================================================================
