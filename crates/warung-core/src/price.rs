//! # Pricing Module
//!
//! Provides the `Rupiah` type and the catalog pricing rule.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupiah                                           │
//! │    Every price in the system is a whole-rupiah i64. Floats exist        │
//! │    only at the single entry point of the pricing rule, where the        │
//! │    download size is converted to a price and rounded once.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Pricing Rule
//! ```text
//! base  = round_ties_even(size_gb) × 2000     (Rp 2.000 per GB)
//! base  = 1000                                 when base ≤ 0
//! final = round(base × (1 − discount))         when discount > 0
//! ```
//!
//! The base price is rounded first and floored to Rp 1.000, then the
//! discount is applied to the floored base and rounded again. The floor is
//! NOT re-applied after the discount, so a discounted item can legitimately
//! price below Rp 1.000 (e.g. `round(1000 × 0.9) = 900`).
//!
//! ## Usage
//! ```rust
//! use warung_core::price::{list_price, Rupiah};
//!
//! // A 1.2 GB game rounds to 1 GB: Rp 2.000
//! assert_eq!(list_price(1.2, None), Rupiah::new(2000));
//!
//! // A 0.5 GB game rounds down (ties to even), hitting the floor,
//! // then takes 10% off: Rp 900
//! assert_eq!(list_price(0.5, Some(0.1)), Rupiah::new(900));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{MIN_BASE_PRICE, PRICE_PER_GB};

// =============================================================================
// Rupiah Type
// =============================================================================

/// A monetary value in whole Indonesian rupiah.
///
/// ## Design Decisions
/// - **i64 (signed)**: Headroom for totals over large carts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Ord derive**: Price sorting compares `Rupiah` values directly
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupiah(i64);

impl Rupiah {
    /// Creates a value from whole rupiah.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Rupiah(amount)
    }

    /// Returns the amount in whole rupiah.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Zero rupiah.
    #[inline]
    pub const fn zero() -> Self {
        Rupiah(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

/// Display formats in id-ID style: `Rp 12.000` (dot-grouped thousands).
///
/// Indonesian convention uses `.` to group thousands and `,` for decimals;
/// rupiah amounts are whole numbers, so only grouping applies here.
impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rp {}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

impl Add for Rupiah {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Rupiah(self.0 + other.0)
    }
}

impl AddAssign for Rupiah {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Rupiah {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Rupiah(self.0 - other.0)
    }
}

impl SubAssign for Rupiah {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summation for cart totals.
impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Rupiah>>(iter: I) -> Self {
        iter.fold(Rupiah::zero(), Add::add)
    }
}

// =============================================================================
// Pricing Rule
// =============================================================================

/// Calculates the undiscounted base price for a download size.
///
/// ## Rule
/// `round_ties_even(size_gb) × PRICE_PER_GB`, floored to `MIN_BASE_PRICE`
/// when the product is zero or negative (tiny games still cost something).
///
/// Ties-to-even keeps half-gigabyte sizes from systematically rounding up,
/// the same stance the rest of the money math takes.
///
/// ## Example
/// ```rust
/// use warung_core::price::{base_price, Rupiah};
///
/// assert_eq!(base_price(3.7), Rupiah::new(8000));  // rounds to 4 GB
/// assert_eq!(base_price(0.5), Rupiah::new(1000));  // rounds to 0, floored
/// assert_eq!(base_price(0.0), Rupiah::new(1000));  // floored
/// ```
pub fn base_price(size_gb: f64) -> Rupiah {
    let rounded_gb = size_gb.round_ties_even() as i64;
    let base = rounded_gb * PRICE_PER_GB;
    if base <= 0 {
        Rupiah::new(MIN_BASE_PRICE)
    } else {
        Rupiah::new(base)
    }
}

/// Calculates the displayed price for a download size and optional discount.
///
/// ## Rounding Order
/// The base price is rounded and floored FIRST, then the discount is
/// applied and rounded again. Collapsing this into one arithmetic step
/// changes the result by a few rupiah in edge cases; the two-step order is
/// the documented behavior and is preserved deliberately.
///
/// A `None` or non-positive discount leaves the base price untouched.
pub fn list_price(size_gb: f64, discount: Option<f64>) -> Rupiah {
    let base = base_price(size_gb);
    match discount {
        Some(d) if d > 0.0 => Rupiah::new((base.amount() as f64 * (1.0 - d)).round() as i64),
        _ => base,
    }
}

/// Groups a non-negative number into dot-separated thousands: `1234567` →
/// `"1.234.567"`.
fn group_thousands(mut value: u64) -> String {
    if value < 1000 {
        return value.to_string();
    }

    let mut groups = Vec::new();
    while value >= 1000 {
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.push(value.to_string());
    groups.reverse();
    groups.join(".")
}

// =============================================================================
// Unit Tests
// =============================================================================
