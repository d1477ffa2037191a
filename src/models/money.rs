//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On disk an amount is a plain JSON number in currency units
//! (`4.5` for four fifty), so stores written by other tools stay readable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// Largest magnitude in cents: fifteen significant digits, which survive
/// the float representation on disk unchanged.
pub const MAX_CENTS: i64 = 999_999_999_999_999;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Values built by `parse` and `from_units` stay within `MAX_CENTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Sum of two amounts, or `None` when it leaves the supported range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0
            .checked_add(other.0)
            .filter(|cents| cents.abs() <= MAX_CENTS)
            .map(Self)
    }

    /// Amount in currency units as a float (serialization only)
    pub fn as_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Convert a float amount in currency units
    ///
    /// Goes through the shortest decimal form of the float, so `4.999` read
    /// from disk rounds exactly like `"4.999"` typed on the command line.
    pub fn from_units(units: f64) -> Result<Self, MoneyParseError> {
        if !units.is_finite() {
            return Err(MoneyParseError::InvalidFormat(units.to_string()));
        }
        Self::parse(&units.to_string())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5". Digits past
    /// the cent are rounded half away from zero.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();

        let (negative, rest) = match input.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, input),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let invalid = || MoneyParseError::InvalidFormat(input.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(input.to_string());
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());

        let (whole, frac) = rest.split_once('.').unwrap_or((rest, ""));
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        let digit = |i: usize| frac.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
        let round_up = digit(2) >= 5;
        let cents = digit(0) * 10 + digit(1) + i64::from(round_up);

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .filter(|c| *c <= MAX_CENTS)
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }

    /// Format as a bare two-decimal number, e.g. "4.50"
    pub fn to_decimal_string(&self) -> String {
        self.format_with_symbol("")
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_units())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        Money::from_units(units).map_err(serde::de::Error::custom)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(Money::from_cents(450).to_decimal_string(), "4.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!((a - b).cents(), 500);
    }

    #[test]
    fn test_checked_add_stays_in_range() {
        let max = Money::from_cents(MAX_CENTS);
        assert_eq!(max.checked_add(Money::zero()), Some(max));
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(max), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse(" 4.50 ").unwrap().cents(), 450);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1e5").is_err());
        assert!(Money::parse("$").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("inf").is_err());
    }

    #[test]
    fn test_parse_rounds_sub_cent_digits() {
        assert_eq!(Money::parse("4.999").unwrap().cents(), 500);
        assert_eq!(Money::parse("4.994").unwrap().cents(), 499);
        assert_eq!(Money::parse("4.995").unwrap().cents(), 500);
        assert_eq!(Money::parse("-4.995").unwrap().cents(), -500);
        assert_eq!(Money::parse("0.004").unwrap().cents(), 0);
    }

    #[test]
    fn test_cli_and_store_round_alike() {
        for text in ["4.999", "4.994", "0.125", "10.005", "7"] {
            let typed: Money = text.parse().unwrap();
            let stored: Money = serde_json::from_str(text).unwrap();
            assert_eq!(typed, stored, "{}", text);
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            Money::parse("92233720368547757"),
            Err(MoneyParseError::OutOfRange("92233720368547757".into()))
        );
        assert!(Money::parse("99999999999999999999999").is_err());
        assert!(Money::parse("10000000000000").is_err());
        assert_eq!(
            Money::parse("9999999999999.99").unwrap().cents(),
            MAX_CENTS
        );
        assert!(Money::parse("9999999999999.995").is_err());
    }

    #[test]
    fn test_large_amount_survives_store() {
        for cents in [MAX_CENTS, -MAX_CENTS, 123_456_789_012_345] {
            let money = Money::from_cents(cents);
            let json = serde_json::to_string(&money).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back, money, "{}", json);
        }
    }

    #[test]
    fn test_out_of_range_store_value_rejected() {
        assert!(serde_json::from_str::<Money>("92233720368547757").is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
    }

    #[test]
    fn test_from_str() {
        let m: Money = "2.00".parse().unwrap();
        assert_eq!(m, Money::from_cents(200));
    }

    #[test]
    fn test_serializes_as_units() {
        let json = serde_json::to_string(&Money::from_cents(450)).unwrap();
        assert_eq!(json, "4.5");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cents(), 450);
    }

    #[test]
    fn test_deserializes_integers_and_rounds() {
        let m: Money = serde_json::from_str("500").unwrap();
        assert_eq!(m.cents(), 50000);

        // 0.1 + 0.2 style float noise rounds to the nearest cent
        let m: Money = serde_json::from_str("0.30000000000000004").unwrap();
        assert_eq!(m.cents(), 30);
    }
}
