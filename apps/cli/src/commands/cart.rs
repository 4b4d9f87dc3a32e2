//! # Cart Commands
//!
//! Toggle, remove, and show. Every mutation goes through
//! [`PersistentCart`], so the slot on disk is current before the command
//! prints anything.

use warung_core::view::format_size_gb;
use warung_core::ToggleOutcome;
use warung_store::{load_catalog, CartSlot, PersistentCart};

use super::CommandResult;
use crate::config::Config;

/// Toggles a catalog item in or out of the cart.
///
/// The item is looked up by exact name: toggling snapshots the current
/// catalog record, so the catalog has to be readable here even though
/// showing the cart does not need it.
pub fn toggle(config: &Config, name: &str) -> CommandResult {
    let catalog = match load_catalog(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            return CommandResult::notice(format!(
                "Katalog tidak tersedia, tidak bisa memilih game. ({err})"
            ))
        }
    };

    let Some(item) = catalog.items().iter().find(|item| item.name == name) else {
        return CommandResult::notice(format!("'{name}' tidak ada di katalog."));
    };

    let mut cart = PersistentCart::open(CartSlot::new(&config.cart_path));
    match cart.toggle(item) {
        Ok(ToggleOutcome::Added) => {
            CommandResult::success(format!("'{}' ditambahkan ke keranjang.", item.name))
        }
        Ok(ToggleOutcome::Removed) => {
            CommandResult::success(format!("'{}' dibatalkan dari keranjang.", item.name))
        }
        Err(err) => CommandResult::notice(format!("Gagal menyimpan keranjang: {err}")),
    }
}

/// Removes an entry from the cart. Removing something that is not there
/// is a quiet no-op.
pub fn remove(config: &Config, name: &str) -> CommandResult {
    let mut cart = PersistentCart::open(CartSlot::new(&config.cart_path));
    match cart.remove(name) {
        Ok(true) => CommandResult::success(format!("'{name}' dihapus dari keranjang.")),
        Ok(false) => CommandResult::success(format!("'{name}' tidak ada di keranjang.")),
        Err(err) => CommandResult::notice(format!("Gagal menyimpan keranjang: {err}")),
    }
}

/// Prints the cart panel: numbered entries and the running totals.
pub fn show(config: &Config) -> CommandResult {
    let cart = CartSlot::new(&config.cart_path).load_or_empty();
    if cart.is_empty() {
        return CommandResult::success("Keranjang kosong.");
    }

    let mut out = String::new();
    for (index, entry) in cart.entries().iter().enumerate() {
        out.push_str(&format!(
            "{}. {}\n   {} - {}\n",
            index + 1,
            entry.name,
            format_size_gb(entry.size_gb),
            entry.price()
        ));
    }

    let totals = cart.totals();
    out.push_str(&format!(
        "\nTotal Size : {}\nTotal Bayar: {}",
        format_size_gb(totals.total_size_gb),
        totals.total_price
    ));

    CommandResult::success(out)
}

// =============================================================================
// Unit Tests
// =============================================================================
