//! # Order Message Builder
//!
//! Serializes the cart into the human-readable order message that gets
//! handed to the messaging channel:
//!
//! ```text
//! *List Beli Game*
//!
//! 1. *Hades*
//! 6,40 GB - Rp 9.600
//!
//! 2. *Celeste*
//! 0,50 GB - Rp 900
//!
//! ────────────────────
//! Total Size : *6,90 GB*
//! Total Bayar: *Rp 10.500*
//! ```
//!
//! URL encoding and link construction belong to `warung-store`; this
//! module produces plain text only.

use std::fmt::Write;

use thiserror::Error;

use crate::cart::Cart;
use crate::view::format_size_gb;

/// Separator between the item list and the totals footer.
const SEPARATOR: &str = "────────────────────";

// =============================================================================
// Errors
// =============================================================================

/// Failures when exporting an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Checkout was triggered with nothing in the cart. Callers must
    /// surface this as a blocking notice rather than sending an empty
    /// order.
    #[error("cart is empty, nothing to order")]
    EmptyCart,
}

// =============================================================================
// Message Construction
// =============================================================================

/// Builds the formatted order message for the cart.
///
/// One numbered block per entry (name, size, price), then a separator and
/// the totals. Prices come from the frozen cart snapshots, discounts
/// included.
pub fn build_order_message(cart: &Cart) -> Result<String, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }

    let mut message = String::from("*List Beli Game*\n\n");
    for (index, entry) in cart.entries().iter().enumerate() {
        let _ = writeln!(
            message,
            "{}. *{}*\n{} - {}\n",
            index + 1,
            entry.name,
            format_size_gb(entry.size_gb),
            entry.price()
        );
    }

    let totals = cart.totals();
    let _ = writeln!(message, "{SEPARATOR}");
    let _ = writeln!(
        message,
        "Total Size : *{}*",
        format_size_gb(totals.total_size_gb)
    );
    let _ = write!(message, "Total Bayar: *{}*", totals.total_price);

    Ok(message)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    #[test]
    fn test_empty_cart_is_an_error() {
        assert_eq!(build_order_message(&Cart::new()), Err(OrderError::EmptyCart));
    }

    #[test]
    fn test_message_shape() {
        let mut cart = Cart::new();
        cart.toggle(&Item::with_discount("Hades", 6.4, 0.2));
        cart.toggle(&Item::with_discount("Celeste", 0.5, 0.1));

        let message = build_order_message(&cart).unwrap();

        assert!(message.starts_with("*List Beli Game*\n\n"));
        assert!(message.contains("1. *Hades*\n6,40 GB - Rp 9.600\n"));
        assert!(message.contains("2. *Celeste*\n0,50 GB - Rp 900\n"));
        assert!(message.contains(SEPARATOR));
        assert!(message.contains("Total Size : *6,90 GB*"));
        assert!(message.ends_with("Total Bayar: *Rp 10.500*"));
    }

    #[test]
    fn test_entries_numbered_in_cart_order() {
        let mut cart = Cart::new();
        cart.toggle(&Item::new("B", 1.0));
        cart.toggle(&Item::new("A", 1.0));

        let message = build_order_message(&cart).unwrap();
        let b_pos = message.find("1. *B*").unwrap();
        let a_pos = message.find("2. *A*").unwrap();
        assert!(b_pos < a_pos);
    }
}
