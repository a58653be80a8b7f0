//! # Terminal Configuration
//!
//! Presentation and policy settings for one terminal: store name,
//! currency labels, tax rate, and where confirmed receipts land.
//!
//! ## Two Currency Labels?
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Console output uses the symbol:    ₱ 150.00                 │
//! │  The persisted receipt uses the     PHP 150.00               │
//! │  ISO code, so the file stays plain ASCII and survives        │
//! │  whatever encoding the next program assumes.                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use kiosko_core::{Money, TaxRate};

// =============================================================================
// TerminalConfig
// =============================================================================

/// Settings for a terminal session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Store name for diagnostics
    pub store_name: String,
    /// Currency symbol for console output, e.g. "₱"
    pub currency_symbol: String,
    /// ISO currency code for persisted receipts, e.g. "PHP"
    pub currency_code: String,
    /// Tax rate in basis points (1200 = 12%)
    pub tax_rate_bps: u32,
    /// Where a confirmed receipt is written
    pub receipt_path: PathBuf,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            store_name: "Kiosko".to_string(),
            currency_symbol: "₱".to_string(),
            currency_code: "PHP".to_string(),
            tax_rate_bps: 1200,
            receipt_path: PathBuf::from("receipt.txt"),
        }
    }
}

impl TerminalConfig {
    /// The configured tax rate as a core type.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Formats an amount for the console: `₱ 150.00`.
    pub fn format_currency(&self, amount: Money) -> String {
        format!("{} {}", self.currency_symbol, amount)
    }

    /// Formats an amount for persisted output: `PHP 150.00`.
    pub fn format_currency_code(&self, amount: Money) -> String {
        format!("{} {}", self.currency_code, amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TerminalConfig::default();
        assert_eq!(config.currency_symbol, "₱");
        assert_eq!(config.currency_code, "PHP");
        assert_eq!(config.tax_rate_bps, 1200);
        assert_eq!(config.receipt_path, PathBuf::from("receipt.txt"));
        assert_eq!(config.tax_rate().whole_percent(), 12);
    }

    #[test]
    fn test_format_currency() {
        let config = TerminalConfig::default();
        assert_eq!(config.format_currency(Money::from_centavos(15_000)), "₱ 150.00");
        assert_eq!(config.format_currency(Money::from_centavos(105)), "₱ 1.05");
        assert_eq!(config.format_currency(Money::from_centavos(-550)), "₱ -5.50");
    }

    #[test]
    fn test_format_currency_code() {
        let config = TerminalConfig::default();
        assert_eq!(
            config.format_currency_code(Money::from_centavos(84_000)),
            "PHP 840.00"
        );
    }

    #[test]
    fn test_custom_currency() {
        let config = TerminalConfig {
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
            ..TerminalConfig::default()
        };
        assert_eq!(config.format_currency(Money::from_centavos(999)), "$ 9.99");
        assert_eq!(config.format_currency_code(Money::from_centavos(999)), "USD 9.99");
    }
}
