//! # Receipt Persistence
//!
//! Writes the confirmed receipt document in one `fs::write` call: the
//! whole document is rendered up front, so the file is either the
//! complete receipt or absent, never a truncated prompt-by-prompt log.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use kiosko_core::Receipt;

use crate::config::TerminalConfig;
use crate::render;

/// Failure to persist a confirmed receipt.
///
/// Persistence never blocks the purchase itself; callers log this and
/// warn the customer.
#[derive(Debug, Error)]
#[error("could not write receipt to {}: {source}", .path.display())]
pub struct PersistError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Renders and writes the receipt to `config.receipt_path`.
pub fn save(receipt: &Receipt, config: &TerminalConfig) -> Result<(), PersistError> {
    let document = render::receipt_document(receipt, config);
    fs::write(&config.receipt_path, document).map_err(|source| PersistError {
        path: config.receipt_path.clone(),
        source,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::standard_menu;
    use kiosko_core::{Cart, ItemId, TaxRate};

    fn sample_receipt() -> Receipt {
        let menu = standard_menu();
        let mut cart = Cart::new();
        cart.add_item(menu.lookup(ItemId::new(3)).unwrap(), 2).unwrap();
        Receipt::compute(&cart, &menu, TaxRate::from_bps(1200)).unwrap()
    }

    #[test]
    fn test_save_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let config = TerminalConfig {
            receipt_path: dir.path().join("receipt.txt"),
            ..TerminalConfig::default()
        };

        save(&sample_receipt(), &config).unwrap();

        let written = fs::read_to_string(&config.receipt_path).unwrap();
        assert_eq!(written, render::receipt_document(&sample_receipt(), &config));
        assert!(written.starts_with("RECEIPT\n"));
        assert!(written.contains("2 x Ice Cream PHP 160.00"));
    }

    #[test]
    fn test_save_overwrites_previous_receipt() {
        let dir = tempfile::tempdir().unwrap();
        let config = TerminalConfig {
            receipt_path: dir.path().join("receipt.txt"),
            ..TerminalConfig::default()
        };

        fs::write(&config.receipt_path, "stale content from last order").unwrap();
        save(&sample_receipt(), &config).unwrap();

        let written = fs::read_to_string(&config.receipt_path).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.starts_with("RECEIPT\n"));
    }

    #[test]
    fn test_save_failure_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = TerminalConfig {
            receipt_path: dir.path().join("no_such_dir").join("receipt.txt"),
            ..TerminalConfig::default()
        };

        let err = save(&sample_receipt(), &config).unwrap_err();
        assert_eq!(err.path, config.receipt_path);
        assert!(err.to_string().contains("could not write receipt to"));
    }
}
