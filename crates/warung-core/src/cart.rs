//! # Cart Module
//!
//! The user's selected items: a set keyed by item name, in insertion
//! order, with no quantity concept. Selecting an already-selected item
//! deselects it.
//!
//! Persistence lives in `warung-store`; this type is pure collection math
//! and serializes as a bare JSON array, the same shape the original
//! widget kept in its storage slot.

use serde::{Deserialize, Serialize};

use crate::price::Rupiah;
use crate::types::{CartEntry, Item};

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Entries are unique by `name` (toggling an in-cart item removes it)
/// - Iteration order is insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

/// What a toggle did, so callers can phrase their feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The item was not in the cart and has been added.
    Added,
    /// The item was in the cart and has been removed.
    Removed,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Builds a cart from previously persisted entries.
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        Cart { entries }
    }

    /// Toggles an item: removes it if present, otherwise snapshots it in.
    ///
    /// The snapshot copies the item by value, so a later catalog change
    /// (a discount appearing or vanishing) does not retroactively alter
    /// what was selected. Toggling twice restores the prior state.
    pub fn toggle(&mut self, item: &Item) -> ToggleOutcome {
        if self.remove(&item.name) {
            ToggleOutcome::Removed
        } else {
            self.entries.push(CartEntry::from_item(item));
            ToggleOutcome::Added
        }
    }

    /// Removes the entry with this name. Returns whether anything changed;
    /// removing an absent name is a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.name != name);
        self.entries.len() != before
    }

    /// Whether an entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sums price and raw size over all entries.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Summed cart figures for display and for the order message footer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    /// Sum of the pricing rule over all entries.
    pub total_price: Rupiah,
    /// Sum of raw sizes in gigabytes.
    pub total_size_gb: f64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            total_price: cart.entries.iter().map(CartEntry::price).sum(),
            total_size_gb: cart.entries.iter().map(|entry| entry.size_gb).sum(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> (Item, Item) {
        (
            Item::new("Stardew Valley", 1.2),
            Item::with_discount("Celeste", 0.5, 0.1),
        )
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (a, _) = items();
        let mut cart = Cart::new();

        assert_eq!(cart.toggle(&a), ToggleOutcome::Added);
        assert!(cart.contains("Stardew Valley"));

        assert_eq!(cart.toggle(&a), ToggleOutcome::Removed);
        assert!(!cart.contains("Stardew Valley"));
    }

    #[test]
    fn test_double_toggle_restores_prior_state() {
        let (a, b) = items();
        let mut cart = Cart::new();
        cart.toggle(&a);

        let snapshot = cart.clone();
        cart.toggle(&b);
        cart.toggle(&b);
        assert_eq!(cart.entries().len(), snapshot.entries().len());
        assert_eq!(cart.entries()[0].name, snapshot.entries()[0].name);
    }

    #[test]
    fn test_no_duplicate_entries() {
        let (a, _) = items();
        let mut cart = Cart::new();
        cart.toggle(&a);
        cart.toggle(&a);
        cart.toggle(&a);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.remove("Nothing Here"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let (a, b) = items();
        let mut cart = Cart::new();
        cart.toggle(&b);
        cart.toggle(&a);

        let names: Vec<&str> = cart.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Celeste", "Stardew Valley"]);
    }

    #[test]
    fn test_totals() {
        let (a, b) = items();
        let mut cart = Cart::new();
        cart.toggle(&a); // Rp 2.000, 1.2 GB
        cart.toggle(&b); // Rp 900, 0.5 GB

        let totals = cart.totals();
        assert_eq!(totals.total_price, Rupiah::new(2900));
        assert!((totals.total_size_gb - 1.7).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let (a, _) = items();
        let mut cart = Cart::new();
        cart.toggle(&a);

        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['));

        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.entries()[0].name, "Stardew Valley");
    }
}
