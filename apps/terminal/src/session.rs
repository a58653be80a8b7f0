//! # Interactive Session
//!
//! The conversation loop: one customer, one cart, one outcome.
//!
//! ## Conversation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Welcome to the Ordering Menu                                       │
//! │        │                                                            │
//! │        ▼                                                            │
//! │  ┌──► Options block, read choice                                    │
//! │  │        │                                                         │
//! │  │        ├─ 1 add item      ──┐                                    │
//! │  │        ├─ 2 view cart     ──┤                                    │
//! │  │        ├─ 3 remove item   ──┼──► back to options                 │
//! │  │        ├─ unknown number  ──┘                                    │
//! │  └────────┤                                                         │
//! │           ├─ 4 checkout ──► declined/empty ──► back to options      │
//! │           │        └─────► confirmed ──► Purchased (session ends)   │
//! │           │                                                         │
//! │           └─ 0 exit ──► Exited                                      │
//! │                                                                     │
//! │  End of input anywhere behaves like a quiet exit.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is generic over its reader and writer, so tests feed it
//! a scripted `Cursor` and read the whole transcript back out of a
//! `Vec<u8>`. Production wires it to locked stdin/stdout.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use kiosko_core::{Cart, Catalog, ItemId, OrderError, Receipt, RemoveOutcome};

use crate::config::TerminalConfig;
use crate::error::TerminalError;
use crate::prompt;
use crate::receipt_file;
use crate::render;

// =============================================================================
// Menu Choices
// =============================================================================

/// Top-level options the customer can pick each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    AddItem,
    ViewCart,
    RemoveItem,
    Checkout,
}

impl MenuChoice {
    /// Display order for the options block. `Exit` renders last even
    /// though its key is 0.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::AddItem,
        MenuChoice::ViewCart,
        MenuChoice::RemoveItem,
        MenuChoice::Checkout,
        MenuChoice::Exit,
    ];

    /// The number that selects this choice.
    pub fn key(&self) -> i64 {
        match self {
            MenuChoice::AddItem => 1,
            MenuChoice::ViewCart => 2,
            MenuChoice::RemoveItem => 3,
            MenuChoice::Checkout => 4,
            MenuChoice::Exit => 0,
        }
    }

    /// Label shown next to the key.
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddItem => "Show Menu and Add Item",
            MenuChoice::ViewCart => "View Cart",
            MenuChoice::RemoveItem => "Remove Item from Cart",
            MenuChoice::Checkout => "Checkout",
            MenuChoice::Exit => "Exit without buying",
        }
    }

    /// Maps a typed number back to a choice.
    pub fn from_option(value: i64) -> Option<MenuChoice> {
        MenuChoice::ALL.into_iter().find(|choice| choice.key() == value)
    }
}

// =============================================================================
// Session
// =============================================================================

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The customer left without buying (option 0 or end of input).
    Exited,
    /// Checkout was confirmed; the session closed with a purchase.
    Purchased,
}

/// Whether the loop keeps going after a round.
enum Flow {
    Continue,
    Finish(SessionOutcome),
}

/// One customer conversation over a reader/writer pair.
pub struct Session<R, W> {
    input: R,
    out: W,
    catalog: Catalog,
    cart: Cart,
    config: TerminalConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty cart.
    pub fn new(catalog: Catalog, config: TerminalConfig, input: R, out: W) -> Self {
        Session {
            input,
            out,
            catalog,
            cart: Cart::new(),
            config,
        }
    }

    /// Runs the conversation to completion.
    ///
    /// End of input is a normal way for a visit to end (piped scripts
    /// simply run out), so it resolves to [`SessionOutcome::Exited`]
    /// rather than an error.
    pub fn run(&mut self) -> Result<SessionOutcome, TerminalError> {
        writeln!(self.out, "Welcome to the Ordering Menu")?;

        loop {
            match self.round() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Finish(outcome)) => return Ok(outcome),
                Err(TerminalError::InputClosed) => {
                    debug!("input stream closed, ending session");
                    return Ok(SessionOutcome::Exited);
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One options round: print the block, read a choice, dispatch.
    fn round(&mut self) -> Result<Flow, TerminalError> {
        write!(self.out, "\nOptions:\n")?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, " {}) {}", choice.key(), choice.label())?;
        }

        let selected = prompt::read_int(&mut self.input, &mut self.out, "Choose an option: ")?;
        debug!(option = selected, "option selected");

        match MenuChoice::from_option(selected) {
            Some(MenuChoice::Exit) => {
                writeln!(self.out, "Goodbye!")?;
                Ok(Flow::Finish(SessionOutcome::Exited))
            }
            Some(MenuChoice::AddItem) => {
                self.add_item()?;
                Ok(Flow::Continue)
            }
            Some(MenuChoice::ViewCart) => {
                render::write_cart(&mut self.out, &self.cart, &self.catalog, &self.config)?;
                Ok(Flow::Continue)
            }
            Some(MenuChoice::RemoveItem) => {
                self.remove_item()?;
                Ok(Flow::Continue)
            }
            Some(MenuChoice::Checkout) => self.checkout(),
            None => {
                writeln!(self.out, "Unknown option. Choose 0-4.")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Option 1: show the menu, pick an item, pick a quantity.
    ///
    /// Entering 0 at the item prompt cancels silently. A failed step
    /// prints its message and abandons the addition; nothing partial
    /// lands in the cart.
    fn add_item(&mut self) -> Result<(), TerminalError> {
        render::write_menu(&mut self.out, &self.catalog, &self.config)?;

        let choice = prompt::read_int(
            &mut self.input,
            &mut self.out,
            "Enter item number to add (0 to cancel): ",
        )?;
        if choice == 0 {
            return Ok(());
        }

        let Some(item) = ItemId::from_input(choice).and_then(|id| self.catalog.lookup(id))
        else {
            writeln!(self.out, "{}", OrderError::UnknownItem(choice))?;
            return Ok(());
        };

        let quantity = prompt::read_int(&mut self.input, &mut self.out, "Enter quantity: ")?;
        match self.cart.add_item(item, quantity) {
            Ok(()) => {
                debug!(item = %item.name, quantity, "added to cart");
                writeln!(self.out, "{} x {} added to cart.", quantity, item.name)?;
            }
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(())
    }

    /// Option 3: show the cart, pick a line, pick how much to remove.
    ///
    /// 0 at the quantity prompt removes the whole line; membership is
    /// checked before asking for a quantity so the customer is not
    /// quizzed about a line that does not exist.
    fn remove_item(&mut self) -> Result<(), TerminalError> {
        if self.cart.is_empty() {
            writeln!(self.out, "Cart is empty.")?;
            return Ok(());
        }
        render::write_cart(&mut self.out, &self.cart, &self.catalog, &self.config)?;

        let target = prompt::read_int(
            &mut self.input,
            &mut self.out,
            "Enter item id to remove (0 to cancel): ",
        )?;
        if target == 0 {
            return Ok(());
        }

        let Some(id) =
            ItemId::from_input(target).filter(|&id| self.cart.quantity_of(id).is_some())
        else {
            writeln!(self.out, "{}", OrderError::NotInCart(target))?;
            return Ok(());
        };

        let quantity = prompt::read_int(
            &mut self.input,
            &mut self.out,
            "Enter quantity to remove (enter 0 to remove all): ",
        )?;
        match self.cart.remove_item(id, quantity) {
            Ok(RemoveOutcome::Removed) => {
                debug!(id = %id, "cart line removed");
                writeln!(self.out, "Item removed from cart.")?;
            }
            Ok(RemoveOutcome::Reduced { removed, .. }) => {
                debug!(id = %id, removed, "cart line reduced");
                writeln!(self.out, "Removed {removed} units.")?;
            }
            // Membership was just checked; nothing between can drop the line.
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(())
    }

    /// Option 4: price the cart, show the receipt, ask for confirmation.
    ///
    /// Only a literal `1` confirms. Declining keeps the cart exactly as
    /// it was. A confirmed purchase ends the session even if persisting
    /// the receipt file fails; the failure is a warning, not a rollback.
    fn checkout(&mut self) -> Result<Flow, TerminalError> {
        if self.cart.is_empty() {
            writeln!(self.out, "Cart is empty. Add items before checkout.")?;
            return Ok(Flow::Continue);
        }

        let receipt = Receipt::compute(&self.cart, &self.catalog, self.config.tax_rate());
        render::write_receipt(&mut self.out, receipt.as_ref(), &self.config)?;
        let Some(receipt) = receipt else {
            return Ok(Flow::Continue);
        };

        write!(self.out, "\nProceed to confirm purchase? (1 = yes, 0 = no): ")?;
        let confirm = prompt::read_int(&mut self.input, &mut self.out, "")?;
        if confirm != 1 {
            writeln!(self.out, "Checkout canceled.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "Purchase confirmed. Thank you!")?;
        let receipt_number = generate_receipt_number();
        info!(
            receipt = %receipt_number,
            total_centavos = receipt.total.centavos(),
            lines = receipt.lines.len(),
            "purchase confirmed"
        );

        match receipt_file::save(&receipt, &self.config) {
            Ok(()) => {
                writeln!(
                    self.out,
                    "Receipt saved to {}",
                    self.config.receipt_path.display()
                )?;
            }
            Err(err) => {
                warn!(error = %err, "receipt persistence failed");
                writeln!(self.out, "Warning: {err}.")?;
            }
        }

        self.cart.clear();
        Ok(Flow::Finish(SessionOutcome::Purchased))
    }
}

/// Builds a receipt number for the audit log, e.g. `250825-143012-0042`.
///
/// Date, time, and a sub-second suffix so two purchases in the same
/// second still get distinct numbers. Log-only: the persisted file
/// format does not carry it.
fn generate_receipt_number() -> String {
    let now = chrono::Local::now();
    let suffix = now.timestamp_subsec_nanos() % 10_000;
    format!("{}-{:04}", now.format("%y%m%d-%H%M%S"), suffix)
}

// =============================================================================
// Unit Tests
// =============================================================================
