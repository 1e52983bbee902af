//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides checked arithmetic, parsing and two-decimal formatting.

use std::fmt;
use std::ops::{Add, Sub};

use thiserror::Error;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use account_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Convert to a floating-point number of whole units
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Convert from a floating-point number of whole units, rounding to the
    /// nearest cent
    ///
    /// Returns `None` for NaN, infinities and values outside the `i64` cent range.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Parse a money amount from user input
    ///
    /// Accepts any finite decimal number, including exponent notation:
    /// "10", "10.5", ".50", "-3", "1e3", "2.5E-1". Surrounding whitespace is
    /// ignored. Values are rounded to the nearest cent, halves away from zero.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        // Only the grammar and finiteness are taken from the float parse;
        // cents are computed from the digits so rounding is exact
        let value: f64 = s
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;
        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let cents = decimal_to_cents(unsigned)
            .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

/// Convert an unsigned decimal literal (`digits[.digits][e[+-]digits]`) to
/// cents, rounding half away from zero
///
/// Returns `None` if the result does not fit in an `i64`.
fn decimal_to_cents(literal: &str) -> Option<i64> {
    let (mantissa, exponent) = match literal.find(['e', 'E']) {
        Some(i) => (&literal[..i], Some(&literal[i + 1..])),
        None => (literal, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits: Vec<i64> = whole
        .bytes()
        .chain(fraction.bytes())
        .map(|b| i64::from(b - b'0'))
        .collect();

    let leading_zeros = digits.iter().take_while(|d| **d == 0).count();
    if leading_zeros == digits.len() {
        return Some(0);
    }
    let digits = &digits[leading_zeros..];

    let exponent: i64 = match exponent {
        None => 0,
        Some(e) => match e.parse() {
            Ok(e) => e,
            // Tiny values whose exponent does not fit round to zero
            Err(_) if e.starts_with('-') => return Some(0),
            Err(_) => return None,
        },
    };

    // Index into `digits` of the first digit below one cent
    let boundary = (whole.len() as i64 - leading_zeros as i64)
        .saturating_add(exponent)
        .saturating_add(2);
    if boundary < 0 {
        return Some(0);
    }
    if boundary > digits.len() as i64 + 19 {
        return None;
    }

    let mut cents: i64 = 0;
    for i in 0..boundary as usize {
        let digit = digits.get(i).copied().unwrap_or(0);
        cents = cents.checked_mul(10)?.checked_add(digit)?;
    }
    if digits.get(boundary as usize).is_some_and(|d| *d >= 5) {
        cents = cents.checked_add(1)?;
    }

    Some(cents)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}
