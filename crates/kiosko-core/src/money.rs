//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  On a receipt that means:                                               │
//! │    ₱150.00 × 3 lines can drift by a centavo and the totals              │
//! │    stop matching what the customer can recompute by hand                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    ₱150.00 is stored as 15_000                                          │
//! │    Every add/multiply is exact; rounding happens in exactly one         │
//! │    place (tax) and is spelled out there                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiosko_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_centavos(15_000); // ₱150.00
//!
//! // Arithmetic operations
//! let line = price * 2;                       // ₱300.00
//! let total = line + Money::from_centavos(50); // ₱300.50
//! assert_eq!(total.centavos(), 30_050);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(150.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic results stay closed under subtraction
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  MenuItem.unit_price ──► ReceiptLine.line_total ──► Receipt.subtotal    │
/// │                                                          │              │
/// │                          Receipt.tax ◄── calculate_tax ──┘              │
/// │                                │                                        │
/// │                          Receipt.total                                  │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use kiosko_core::money::Money;
    ///
    /// let price = Money::from_centavos(15_000); // Represents ₱150.00
    /// assert_eq!(price.centavos(), 15_000);
    /// ```
    ///
    /// ## Why Centavos?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// Catalog data, calculations, and rendering all use centavos; only
    /// display formatting converts to pesos.
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from a whole-peso amount.
    ///
    /// ## Example
    /// ```rust
    /// use kiosko_core::money::Money;
    ///
    /// let price = Money::from_pesos(450); // ₱450.00
    /// assert_eq!(price.centavos(), 45_000);
    /// ```
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * 100)
    }

    /// Returns the value in centavos (smallest currency unit).
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion.
    ///
    /// ## Example
    /// ```rust
    /// use kiosko_core::money::Money;
    ///
    /// let price = Money::from_centavos(15_050);
    /// assert_eq!(price.pesos(), 150);
    /// ```
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use kiosko_core::money::Money;
    ///
    /// let price = Money::from_centavos(15_050);
    /// assert_eq!(price.centavos_part(), 50);
    ///
    /// let negative = Money::from_centavos(-550);
    /// assert_eq!(negative.centavos_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounding half up to the nearest centavo.
    ///
    /// ## Implementation
    /// Integer math only: `(centavos × bps + 5000) / 10000`.
    /// The +5000 provides the rounding (5000/10000 = 0.5), so the result
    /// equals `subtotal × rate` rounded to 2 decimals.
    ///
    /// ## Example
    /// ```rust
    /// use kiosko_core::money::Money;
    /// use kiosko_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_centavos(75_000); // ₱750.00
    /// let rate = TaxRate::from_bps(1200);          // 12%
    ///
    /// let tax = subtotal.calculate_tax(rate);
    /// // ₱750.00 × 12% = ₱90.00 exactly
    /// assert_eq!(tax.centavos(), 9_000);
    /// ```
    ///
    /// ## Receipt Flow
    /// ```text
    /// Subtotal: ₱750.00
    ///      │
    ///      ▼
    /// calculate_tax(12%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Tax: ₱90.00
    ///      │
    ///      ▼
    /// Total: ₱840.00
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so large subtotals cannot overflow the intermediate product.
        // rate.bps() is basis points: 1200 = 12%.
        let tax_centavos = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_centavos(tax_centavos as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the bare amount with exactly two fractional digits.
///
/// ## Note
/// No currency label here: the console shows `₱` and the persisted
/// receipt shows `PHP`, so the terminal layer prepends whichever the
/// configuration dictates.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.pesos().abs(), self.centavos_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a quantity (for line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_centavos() {
        let money = Money::from_centavos(15_050);
        assert_eq!(money.centavos(), 15_050);
        assert_eq!(money.pesos(), 150);
        assert_eq!(money.centavos_part(), 50);
    }

    #[test]
    fn test_from_pesos() {
        assert_eq!(Money::from_pesos(150).centavos(), 15_000);
        assert_eq!(Money::from_pesos(0).centavos(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_centavos(15_000)), "150.00");
        assert_eq!(format!("{}", Money::from_centavos(8_000)), "80.00");
        assert_eq!(format!("{}", Money::from_centavos(105)), "1.05");
        assert_eq!(format!("{}", Money::from_centavos(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_centavos(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_centavos(1000);
        let b = Money::from_centavos(500);

        assert_eq!((a + b).centavos(), 1500);
        assert_eq!((a - b).centavos(), 500);

        let line: Money = a * 3;
        assert_eq!(line.centavos(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.centavos(), 1500);
    }

    #[test]
    fn test_tax_calculation_exact() {
        // ₱750.00 at 12% = ₱90.00, no rounding involved
        let subtotal = Money::from_centavos(75_000);
        let tax = subtotal.calculate_tax(TaxRate::from_bps(1200));
        assert_eq!(tax.centavos(), 9_000);
    }

    #[test]
    fn test_tax_calculation_rounds_half_up() {
        // ₱10.99 at 12% = ₱1.3188 → ₱1.32
        let amount = Money::from_centavos(1_099);
        assert_eq!(amount.calculate_tax(TaxRate::from_bps(1200)).centavos(), 132);

        // ₱1.25 at 10% = ₱0.125 → exactly half, rounds up to ₱0.13
        let amount = Money::from_centavos(125);
        assert_eq!(amount.calculate_tax(TaxRate::from_bps(1000)).centavos(), 13);
    }

    #[test]
    fn test_tax_zero_rate() {
        let subtotal = Money::from_centavos(75_000);
        let tax = subtotal.calculate_tax(TaxRate::zero());
        assert!(tax.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_centavos(100);
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_centavos(-100);
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }
}
