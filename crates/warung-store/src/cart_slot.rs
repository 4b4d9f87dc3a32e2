//! # Cart Slot
//!
//! The single durable slot holding the serialized cart: one JSON file,
//! read once at startup, rewritten whole on every mutation.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Slot Lifecycle                               │
//! │                                                                         │
//! │  startup ──► load()                                                     │
//! │               ├── file absent          → empty cart (first run)         │
//! │               ├── file parses          → restored cart                  │
//! │               └── file corrupt         → StorageCorrupt                 │
//! │                   (callers log it and continue with an empty cart;      │
//! │                    the next save overwrites the corrupt content)        │
//! │                                                                         │
//! │  every toggle/remove ──► save()                                         │
//! │               └── full rewrite, synchronous, before the call returns    │
//! │                                                                         │
//! │  Single writer, last write wins. No batching, no conflict resolution.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This replaces the widget's `localStorage` parse-with-fallback with a
//! typed load/save pair and an explicit corrupt-content error.

use std::path::{Path, PathBuf};

use tracing::debug;

use warung_core::Cart;

use crate::error::{StoreError, StoreResult};

/// A named slot for the serialized cart.
#[derive(Debug, Clone)]
pub struct CartSlot {
    path: PathBuf,
}

impl CartSlot {
    /// Creates a slot at the given path. Nothing is read or written yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CartSlot { path: path.into() }
    }

    /// Where the slot lives.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted cart.
    ///
    /// An absent file is a first run and yields an empty cart. Content
    /// that exists but does not parse is [`StoreError::StorageCorrupt`];
    /// use [`load_or_empty`](CartSlot::load_or_empty) at startup to apply
    /// the default-to-empty policy.
    pub fn load(&self) -> StoreResult<Cart> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no cart slot yet, starting empty");
                return Ok(Cart::new());
            }
            Err(source) => {
                return Err(StoreError::StorageRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::StorageCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Reads the persisted cart, converting any failure into an empty cart
    /// after logging it. This is the startup policy: a broken slot must
    /// never take the storefront down.
    pub fn load_or_empty(&self) -> Cart {
        match self.load() {
            Ok(cart) => cart,
            Err(err) => {
                tracing::warn!(error = %err, "cart slot unusable, starting with an empty cart");
                Cart::new()
            }
        }
    }

    /// Rewrites the slot with the full cart, synchronously.
    ///
    /// The parent directory is created on first save so a fresh profile
    /// works without setup.
    pub fn save(&self, cart: &Cart) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::StorageWrite {
                path: self.path.clone(),
                source,
            })?;
        }

        let payload =
            serde_json::to_string(cart).expect("cart serialization is infallible for owned data");
        std::fs::write(&self.path, payload).map_err(|source| StoreError::StorageWrite {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), entries = cart.len(), "cart slot saved");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use warung_core::Item;

    fn slot_in(dir: &tempfile::TempDir) -> CartSlot {
        CartSlot::new(dir.path().join("cart.json"))
    }

    #[test]
    fn test_absent_slot_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cart = slot_in(&dir).load().unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(&dir);

        let mut cart = Cart::new();
        cart.toggle(&Item::with_discount("Hades", 6.4, 0.2));
        slot.save(&cart).unwrap();

        let restored = slot.load().unwrap();
        assert_eq!(restored.len(), 1);
        assert!(restored.contains("Hades"));
        assert_eq!(restored.entries()[0].discount, Some(0.2));
    }

    #[test]
    fn test_corrupt_slot_is_storage_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(&dir);
        std::fs::write(slot.path(), "not json at all {{{").unwrap();

        let err = slot.load().unwrap_err();
        assert!(matches!(err, StoreError::StorageCorrupt { .. }));
    }

    #[test]
    fn test_corrupt_slot_defaults_to_empty_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(&dir);
        std::fs::write(slot.path(), "][").unwrap();

        assert!(slot.load_or_empty().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let slot = CartSlot::new(dir.path().join("nested/deeper/cart.json"));
        slot.save(&Cart::new()).unwrap();
        assert!(slot.path().exists());
    }

    #[test]
    fn test_legacy_widget_slot_still_loads() {
        // The browser widget stored a bare array of {name, size} objects.
        let dir = tempfile::tempdir().unwrap();
        let slot = slot_in(&dir);
        std::fs::write(slot.path(), r#"[{"name":"Celeste","size":0.5}]"#).unwrap();

        let cart = slot.load().unwrap();
        assert!(cart.contains("Celeste"));
    }
}
