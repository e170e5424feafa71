//! # Money Module
//!
//! Provides the `Money` type and the catalog price parser.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    "R$ 12,50" parses to 1250 centavos, and every subtotal is a plain   │
//! │    i64 sum - the two-decimal rendering in the order message is exact   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Catalog Prices Are Text
//! The menu catalog is hand-maintained and carries display-formatted prices
//! like `"R$ 12,50"` (currency prefix, comma decimal separator). [`parse_price`]
//! turns that text into [`Money`]; a malformed price is a data-quality defect
//! for the catalog owner, never a runtime fault for the shopper - callers
//! treat it as zero and log a diagnostic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::error::PriceError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centavos for BRL).
///
/// ## Design Decisions
/// - **i64 (signed)**: Plenty of headroom for any restaurant order
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use cardapio_core::money::Money;
    ///
    /// let price = Money::from_cents(1250); // Represents R$ 12,50
    /// assert_eq!(price.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (reais) portion.
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use cardapio_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1200); // R$ 12,00
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 2400); // R$ 24,00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the amount with a dot decimal separator and exactly two
/// decimal digits (`24.00`), matching the order message's `toFixed(2)`-style
/// totals. The message prepends the `R$ ` prefix itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.reais().abs(), self.cents_part())
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

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Price Parsing
// =============================================================================

/// Parses a display-formatted catalog price into [`Money`].
///
/// ## Accepted Input
/// - Optional `R$` prefix: `"R$ 12,50"`, `"R$12,50"`, `"12,50"`
/// - Comma or dot decimal separator: `"12,50"`, `"12.50"`
/// - One or two decimal digits, or none: `"12,5"` = 1250, `"12"` = 1200
///
/// Decimal digits beyond the second are dropped; centavos are the smallest
/// unit this system accounts in.
///
/// ## Errors
/// Returns [`PriceError::Malformed`] when the remainder is not a plain
/// non-negative decimal number. Callers in the cart treat that as zero and
/// emit a `tracing` diagnostic so the catalog owner can fix the data.
///
/// ## Example
/// ```rust
/// use cardapio_core::money::parse_price;
///
/// assert_eq!(parse_price("R$ 12,50").unwrap().cents(), 1250);
/// assert_eq!(parse_price("10,5").unwrap().cents(), 1050);
/// assert!(parse_price("preço sob consulta").is_err());
/// ```
pub fn parse_price(raw: &str) -> Result<Money, PriceError> {
    let malformed = || PriceError::Malformed {
        raw: raw.to_string(),
    };

    // Strip the currency prefix and normalize the decimal separator,
    // mirroring the catalog's hand-written "R$ 12,50" convention.
    let normalized = raw
        .trim()
        .strip_prefix("R$")
        .unwrap_or_else(|| raw.trim())
        .trim()
        .replace(',', ".");

    let (integral, fraction) = match normalized.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (normalized.as_str(), ""),
    };

    if integral.is_empty() || !integral.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let reais: i64 = integral.parse().map_err(|_| malformed())?;

    // Pad or truncate the fraction to exactly two digits (centavos).
    let cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| malformed())? * 10,
        _ => fraction
            .get(..2)
            .ok_or_else(malformed)?
            .parse()
            .map_err(|_| malformed())?,
    };

    reais
        .checked_mul(100)
        .and_then(|r| r.checked_add(cents))
        .map(Money::from_cents)
        .ok_or_else(malformed)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1250);
        assert_eq!(money.cents(), 1250);
        assert_eq!(money.reais(), 12);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_display_two_decimals_dot_separator() {
        assert_eq!(format!("{}", Money::from_cents(2400)), "24.00");
        assert_eq!(format!("{}", Money::from_cents(600)), "6.00");
        assert_eq!(format!("{}", Money::from_cents(1205)), "12.05");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);

        assert_eq!((a + b).cents(), 1250);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1250);

        let tripled: Money = b * 3;
        assert_eq!(tripled.cents(), 750);
    }

    #[test]
    fn test_parse_price_with_prefix_and_comma() {
        assert_eq!(parse_price("R$ 12,50").unwrap().cents(), 1250);
        assert_eq!(parse_price("R$12,50").unwrap().cents(), 1250);
        assert_eq!(parse_price("  R$ 10,50  ").unwrap().cents(), 1050);
    }

    #[test]
    fn test_parse_price_bare_numbers() {
        assert_eq!(parse_price("12").unwrap().cents(), 1200);
        assert_eq!(parse_price("12.5").unwrap().cents(), 1250);
        assert_eq!(parse_price("12,5").unwrap().cents(), 1250);
        assert_eq!(parse_price("0,99").unwrap().cents(), 99);
    }

    #[test]
    fn test_parse_price_extra_decimals_truncated() {
        assert_eq!(parse_price("12,509").unwrap().cents(), 1250);
    }

    #[test]
    fn test_parse_price_malformed() {
        assert!(parse_price("").is_err());
        assert!(parse_price("R$").is_err());
        assert!(parse_price("preço sob consulta").is_err());
        assert!(parse_price("12,5x").is_err());
        assert!(parse_price("-5,00").is_err());
    }

    #[test]
    fn test_parse_price_error_carries_raw_text() {
        let err = parse_price("grátis").unwrap_err();
        assert_eq!(err.to_string(), "malformed catalog price: \"grátis\"");
    }
}
