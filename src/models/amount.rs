//! Amount type for representing monetary values
//!
//! Internally stores a plain f64 because every derived output of the engine
//! (ratios, percentages, trend extrapolations) is real-valued. Input coercion
//! follows the loader policy: unparseable or non-finite values become zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Round a value to two decimal places, ties to even.
///
/// Rounds the exact decimal expansion of the value, matching `{:.2}`
/// display output; a stored result field and its printed form always agree.
/// Applied once, at the presentation boundary of a result record; internal
/// accumulation always runs on unrounded values.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// A monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an Amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Coerce a raw input field to an Amount.
    ///
    /// Unparseable or non-finite values become zero rather than failing;
    /// partially dirty ledgers stay usable.
    ///
    /// # Examples
    /// ```
    /// use cashflow_cli::models::Amount;
    /// assert_eq!(Amount::parse_lossy("1200.5").value(), 1200.5);
    /// assert_eq!(Amount::parse_lossy("n/a").value(), 0.0);
    /// ```
    pub fn parse_lossy(s: &str) -> Self {
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Self(v),
            _ => Self::zero(),
        }
    }

    /// The amount rounded to two decimal places
    pub fn rounded(&self) -> Self {
        Self(round2(self.0))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{:.2}", symbol, self.0.abs())
        } else {
            format!("{}{:.2}", symbol, self.0)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f.pad keeps width/alignment flags working in table rows
        f.pad(&format!("{:.2}", self.0))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}
