//! # Money Module
//!
//! Provides the `Money` type for prices and cart subtotals.
//!
//! ## Why a Wide Integer?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are whole numbers of the smallest currency unit.                │
//! │                                                                         │
//! │  Item.price ──┬──► ShoppingCart.get_subtotal() ──► Store.checkout()     │
//! │               │                                                         │
//! │               └──► CartSummary.subtotal                                 │
//! │                                                                         │
//! │  Unit prices fit in u64; the subtotal is summed in u128 so no           │
//! │  realistic cart can overflow. Prices are never negative.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::money::Money;
//!
//! let soap = Money::from_units(10);
//! let towel = Money::from_units(25);
//! assert_eq!((soap + towel).units(), 35);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative amount in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(u128);

impl Money {
    /// Creates a Money value from a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let price = Money::from_units(1099);
    /// assert_eq!(price.units(), 1099);
    /// ```
    #[inline]
    pub const fn from_units(units: u128) -> Self {
        Money(units)
    }

    /// Returns the amount as a unit count.
    #[inline]
    pub const fn units(&self) -> u128 {
        self.0
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
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<u64> for Money {
    fn from(units: u64) -> Self {
        Money(u128::from(units))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
