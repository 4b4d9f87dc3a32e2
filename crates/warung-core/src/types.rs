//! # Domain Types
//!
//! Core domain types for the catalog and cart.
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Item (catalog, immutable for the session)                              │
//! │    │                                                                    │
//! │    │  toggle into cart                                                  │
//! │    ▼                                                                    │
//! │  CartEntry (snapshot of the Item at toggle time + added_at)             │
//! │                                                                         │
//! │  Identity is the `name` field on both sides: an item is "in cart"       │
//! │  iff a CartEntry with the same name exists.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::price::{list_price, Rupiah};

// =============================================================================
// Item
// =============================================================================

/// A game in the catalog.
///
/// Items are created once at catalog load and never mutated. Rows missing a
/// name or size never become Items; that filtering happens at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name; unique key within the catalog.
    pub name: String,

    /// Download size in gigabytes. Non-negative.
    #[serde(rename = "size")]
    pub size_gb: f64,

    /// Fraction off the base price, in `[0, 1)`.
    /// `None` (or zero) means full price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl Item {
    /// Creates a full-price item.
    pub fn new(name: impl Into<String>, size_gb: f64) -> Self {
        Item {
            name: name.into(),
            size_gb,
            discount: None,
        }
    }

    /// Creates a discounted item. `discount` is a fraction in `(0, 1)`.
    pub fn with_discount(name: impl Into<String>, size_gb: f64, discount: f64) -> Self {
        Item {
            name: name.into(),
            size_gb,
            discount: Some(discount),
        }
    }

    /// The displayed price under the catalog pricing rule.
    #[inline]
    pub fn price(&self) -> Rupiah {
        list_price(self.size_gb, self.discount)
    }

    /// Whether a discount is in effect (present and positive).
    #[inline]
    pub fn has_discount(&self) -> bool {
        matches!(self.discount, Some(d) if d > 0.0)
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// A cart line: a frozen copy of an [`Item`] taken at toggle time.
///
/// ## Snapshot Pattern
/// The entry copies the item by value rather than referencing the catalog,
/// so a later catalog reload with a changed discount does not retroactively
/// alter what the customer selected. The discount that matters is the one
/// captured here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Item name; the cart's key.
    pub name: String,

    /// Size in gigabytes at toggle time (frozen).
    #[serde(rename = "size")]
    pub size_gb: f64,

    /// Discount fraction at toggle time (frozen).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,

    /// When the item was picked. Defaults to "now" when absent, so cart
    /// slots written before this field existed still load.
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Snapshots an item into a cart entry.
    pub fn from_item(item: &Item) -> Self {
        CartEntry {
            name: item.name.clone(),
            size_gb: item.size_gb,
            discount: item.discount,
            added_at: Utc::now(),
        }
    }

    /// The displayed price, from the frozen size and discount.
    #[inline]
    pub fn price(&self) -> Rupiah {
        list_price(self.size_gb, self.discount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
