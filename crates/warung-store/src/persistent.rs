//! # Persistent Cart
//!
//! Binds a [`Cart`] to its [`CartSlot`] so that every mutation is flushed
//! before the call returns. There is exactly one writer context, so
//! write-through gives last-write-wins with nothing else to coordinate.

use tracing::info;

use warung_core::{Cart, Item, ToggleOutcome};

use crate::cart_slot::CartSlot;
use crate::error::StoreResult;

/// A cart whose every mutation is written through to the durable slot.
#[derive(Debug)]
pub struct PersistentCart {
    cart: Cart,
    slot: CartSlot,
}

impl PersistentCart {
    /// Opens the slot and restores the persisted cart, defaulting to empty
    /// when the slot is absent or unusable.
    pub fn open(slot: CartSlot) -> Self {
        let cart = slot.load_or_empty();
        if !cart.is_empty() {
            info!(entries = cart.len(), "cart restored from previous session");
        }
        PersistentCart { cart, slot }
    }

    /// Toggles an item and persists the result before returning.
    pub fn toggle(&mut self, item: &Item) -> StoreResult<ToggleOutcome> {
        let outcome = self.cart.toggle(item);
        self.slot.save(&self.cart)?;
        Ok(outcome)
    }

    /// Removes an entry by name and persists. Absent names are a no-op but
    /// still report `false` so callers can phrase their feedback.
    pub fn remove(&mut self, name: &str) -> StoreResult<bool> {
        let removed = self.cart.remove(name);
        if removed {
            self.slot.save(&self.cart)?;
        }
        Ok(removed)
    }

    /// Read access to the underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_persists_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let slot = CartSlot::new(dir.path().join("cart.json"));

        let mut cart = PersistentCart::open(slot.clone());
        cart.toggle(&Item::new("Hades", 6.4)).unwrap();

        // A second reader sees the toggle without any explicit flush.
        assert!(slot.load().unwrap().contains("Hades"));
    }

    #[test]
    fn test_cart_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let mut first = PersistentCart::open(CartSlot::new(&path));
        first.toggle(&Item::new("Celeste", 0.5)).unwrap();
        drop(first);

        let second = PersistentCart::open(CartSlot::new(&path));
        assert!(second.cart().contains("Celeste"));
    }

    #[test]
    fn test_remove_absent_does_not_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let slot = CartSlot::new(dir.path().join("cart.json"));

        let mut cart = PersistentCart::open(slot.clone());
        assert!(!cart.remove("Nothing").unwrap());
        // No mutation happened, so no slot file was created either.
        assert!(!slot.path().exists());
    }

    #[test]
    fn test_double_toggle_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let slot = CartSlot::new(dir.path().join("cart.json"));
        let item = Item::new("Hades", 6.4);

        let mut cart = PersistentCart::open(slot.clone());
        cart.toggle(&item).unwrap();
        cart.toggle(&item).unwrap();

        assert!(cart.cart().is_empty());
        assert!(slot.load().unwrap().is_empty());
    }
}
