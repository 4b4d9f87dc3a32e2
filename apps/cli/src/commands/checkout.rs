//! # Checkout Command
//!
//! Builds the order message from the persisted cart and prints it together
//! with the WhatsApp link. An empty cart is a blocking notice; no link is
//! produced.

use warung_core::{build_order_message, OrderError};
use warung_store::{order_link, CartSlot};

use super::CommandResult;
use crate::config::Config;

pub fn run(config: &Config) -> CommandResult {
    let cart = CartSlot::new(&config.cart_path).load_or_empty();

    match build_order_message(&cart) {
        Ok(message) => {
            let link = order_link(&config.phone, &message);
            CommandResult::success(format!("{message}\n\n{link}"))
        }
        Err(OrderError::EmptyCart) => CommandResult::notice("Keranjang masih kosong!"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
