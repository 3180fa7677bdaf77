//! # Money Module
//!
//! Provides the `Money` type and the dashboard's currency formatter.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHERE AMOUNTS LIVE                                                     │
//! │                                                                         │
//! │  Store (invoices.amount) ── integer cents, e.g. 150000                  │
//! │       │                                                                 │
//! │       ├──► Listings / cards / customer totals: "$1,500.00"  (Display)   │
//! │       │                                                                 │
//! │       └──► Invoice edit form: 1500.0 dollars          (as_dollars)      │
//! │                                                                         │
//! │  Cents are summed as integers; dollars only exist at the display edge  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use acme_core::money::{format_currency, Money};
//!
//! let paid = Money::from_cents(131500);
//! assert_eq!(paid.to_string(), "$1,315.00");
//! assert_eq!(format_currency(1000), "$10.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: credits and corrections may be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// let amount = Money::from_cents(1099); // $10.99
    /// assert_eq!(amount.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the amount in dollars as a float.
    ///
    /// Only for edit forms that bind a decimal input. Never feed the result
    /// back into arithmetic.
    ///
    /// ## Example
    /// ```rust
    /// use acme_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(150000).as_dollars(), 1500.0);
    /// assert_eq!(Money::from_cents(1099).as_dollars(), 10.99);
    /// ```
    #[inline]
    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Formats an amount of cents the way the dashboard displays money.
///
/// ## Example
/// ```rust
/// use acme_core::money::format_currency;
///
/// assert_eq!(format_currency(111400), "$1,114.00");
/// assert_eq!(format_currency(0), "$0.00");
/// ```
pub fn format_currency(cents: i64) -> String {
    Money::from_cents(cents).to_string()
}

/// Inserts `,` between groups of three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// en-US currency display: `$1,234.56`, `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money(0), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.as_dollars(), 10.99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(7).to_string(), "$0.07");
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_cents(100000).to_string(), "$1,000.00");
        assert_eq!(Money::from_cents(99999).to_string(), "$999.99");
        assert_eq!(Money::from_cents(123456789).to_string(), "$1,234,567.89");
        assert_eq!(Money::from_cents(-100000000).to_string(), "-$1,000,000.00");
    }

    #[test]
    fn test_format_currency_matches_display() {
        assert_eq!(format_currency(1000), "$10.00");
        assert_eq!(format_currency(2500), "$25.00");
        assert_eq!(format_currency(131500), "$1,315.00");
    }

    #[test]
    fn test_as_dollars() {
        assert_eq!(Money::from_cents(150000).as_dollars(), 1500.0);
        assert_eq!(Money::from_cents(2500).as_dollars(), 25.0);
        assert!((Money::from_cents(1450).as_dollars() - 14.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);

        let total: Money = [1000, 2500, 1300].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 4800);
        assert_eq!(std::iter::empty::<Money>().sum::<Money>(), Money::from_cents(0));
    }

    #[test]
    fn test_extreme_values_do_not_panic() {
        assert_eq!(
            Money::from_cents(i64::MIN).to_string(),
            "-$92,233,720,368,547,758.08"
        );
    }
}
