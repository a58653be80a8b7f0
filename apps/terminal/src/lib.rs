//! # Kiosko Terminal Application
//!
//! The customer-facing console app. Everything here is plumbing around
//! `kiosko-core`: prompts in, rendered views out, one receipt file per
//! confirmed purchase.
//!
//! ## Module Organization
//! ```text
//! src/
//! ├── lib.rs          ← You are here (wiring + tracing setup)
//! ├── main.rs         ← Thin binary shim
//! ├── config.rs       ← Currency labels, tax rate, receipt path
//! ├── menu.rs         ← The built-in catalog
//! ├── prompt.rs       ← Numeric input with retry
//! ├── render.rs       ← Menu/cart/receipt layout
//! ├── session.rs      ← The conversation loop
//! ├── receipt_file.rs ← Receipt persistence
//! └── error.rs        ← Fatal session failures
//! ```
//!
//! ## Output Discipline
//! stdout carries the customer conversation and nothing else; all
//! diagnostics go to stderr via `tracing`. Piping the program therefore
//! yields a byte-stable transcript regardless of log level.

pub mod config;
pub mod error;
pub mod menu;
pub mod prompt;
pub mod receipt_file;
pub mod render;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::TerminalConfig;
use crate::error::TerminalError;
use crate::menu::standard_menu;
use crate::session::{Session, SessionOutcome};

/// Initializes the tracing subscriber.
///
/// Honors `RUST_LOG` when set; otherwise defaults to info globally and
/// debug for this workspace's crates. Events go to stderr so the
/// conversation on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kiosko=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Entry point: wires the standard menu, the default configuration,
/// and the process's stdin/stdout into one session.
pub fn run() -> Result<(), TerminalError> {
    init_tracing();
    info!("kiosko terminal starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        standard_menu(),
        TerminalConfig::default(),
        stdin.lock(),
        stdout.lock(),
    );

    match session.run()? {
        SessionOutcome::Purchased => info!("session closed after purchase"),
        SessionOutcome::Exited => info!("session closed without purchase"),
    }
    Ok(())
}
