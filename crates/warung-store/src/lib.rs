//! # warung-store: Persistence Layer for Warung Games
//!
//! Everything that touches the outside world: the catalog data file, the
//! durable cart slot, and the WhatsApp export link.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Warung Games Data Flow                             │
//! │                                                                         │
//! │  CLI command (list / toggle / checkout)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   warung-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │  ┌────────────────┐  ┌──────────────┐  ┌───────────────────┐   │   │
//! │  │  │ catalog_source │  │  cart_slot   │  │     whatsapp      │   │   │
//! │  │  │  read + parse  │  │ load / save  │  │  wa.me link with  │   │   │
//! │  │  │  games.csv     │  │  cart.json   │  │  encoded message  │   │   │
//! │  │  └────────────────┘  └──────────────┘  └───────────────────┘   │   │
//! │  │                                                                 │   │
//! │  │  PersistentCart: Cart + CartSlot, write-through on mutation     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Filesystem (catalog file, cart slot)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog_source`] - One-time catalog file retrieval
//! - [`cart_slot`] - The durable cart slot (typed load/save)
//! - [`persistent`] - Write-through cart wrapper
//! - [`whatsapp`] - Order-link construction
//! - [`error`] - Store error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart_slot;
pub mod catalog_source;
pub mod error;
pub mod persistent;
pub mod whatsapp;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart_slot::CartSlot;
pub use catalog_source::load_catalog;
pub use error::{StoreError, StoreResult};
pub use persistent::PersistentCart;
pub use whatsapp::order_link;
