//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely, plus the
//! `TaxRate` type and the display-rounding rule shared with persistence.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    A value in cents IS a value rounded to 2 decimal places, so      │
//! │    line totals and subtotals are exact by construction. Raw         │
//! │    decimal input is rounded ONCE, at the parsing boundary.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orderpad_core::money::{Money, TaxRate};
//!
//! // Parse raw user input (rounds half away from zero at the 3rd decimal)
//! let price = Money::from_decimal(9.999); // $10.00
//! assert_eq!(price.cents(), 1000);
//!
//! // Arithmetic stays integral
//! let line_total = price * 3;             // $30.00
//! let tax = line_total.calculate_tax(TaxRate::from_bps(1300));
//! assert_eq!(tax.cents(), 390);           // $3.90
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Display Rounding
// =============================================================================

/// Rounds a raw decimal value to 2 decimal places, half away from zero.
///
/// This is the single rounding rule used everywhere a currency value is
/// produced: `round2(x) = round(x * 100) / 100`. The persistence layer uses
/// it when re-serializing totals so persisted and live values never diverge.
///
/// ## Example
/// ```rust
/// use orderpad_core::round2;
///
/// assert_eq!(round2(9.999), 10.00);
/// assert_eq!(round2(0.125), 0.13);
/// assert_eq!(round2(5.004), 5.00);
/// ```
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Headroom for sums of large orders
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a raw decimal amount, rounding half away
    /// from zero at the 3rd decimal digit.
    ///
    /// This is the only place a float crosses into the money domain; after
    /// this call every operation is integer arithmetic.
    ///
    /// ## Example
    /// ```rust
    /// use orderpad_core::Money;
    ///
    /// assert_eq!(Money::from_decimal(9.999).cents(), 1000);
    /// assert_eq!(Money::from_decimal(5.00).cents(), 500);
    /// ```
    #[inline]
    pub fn from_decimal(value: f64) -> Self {
        // f64::round rounds half away from zero; `as` saturates on overflow
        Money((value * 100.0).round() as i64)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value as a plain decimal number.
    ///
    /// Only for serialization into the persisted record format and for
    /// display; arithmetic never goes through this.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
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

    /// Calculates tax on this amount, rounding half away from zero.
    ///
    /// ## Implementation
    /// Integer math: `(cents * bps + 5000) / 10000`. The +5000 provides the
    /// half-up rounding (5000/10000 = 0.5), which for non-negative amounts
    /// is exactly the `round2` rule applied to `amount * rate`.
    ///
    /// ## Example
    /// ```rust
    /// use orderpad_core::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_cents(4000);  // $40.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(1300)); // 13%
    /// assert_eq!(tax.cents(), 520);            // $5.20
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 prevents overflow on large subtotals
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for summaries and debugging. Use frontend formatting for the
/// actual UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1300 bps = 13% (the default sales tax rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    ///
    /// Negative or non-finite input clamps to a zero rate; the rate is
    /// unsigned and a tax can never reduce a total.
    pub fn from_percentage(pct: f64) -> Self {
        if !pct.is_finite() || pct <= 0.0 {
            return TaxRate::zero();
        }
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
