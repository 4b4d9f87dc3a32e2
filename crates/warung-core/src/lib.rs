//! # warung-core: Pure Business Logic for Warung Games
//!
//! This crate is the **heart** of Warung Games. It contains all business
//! logic as pure functions and plain owned state, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Warung Games Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (CLI / any surface)                │   │
//! │  │   search box ──► sort selector ──► page strip ──► checkout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ warung-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────────┐ ┌───────┐ │   │
//! │  │  │  price  │ │ catalog │ │   cart   │ │ pagination │ │ order │ │   │
//! │  │  │ Rupiah  │ │  View   │ │  toggle  │ │  controls  │ │  msg  │ │   │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └────────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILESYSTEM • NO NETWORK • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  warung-store (Persistence)                     │   │
//! │  │        catalog file, durable cart slot, order link              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types ([`Item`], [`CartEntry`])
//! - [`price`] - Integer rupiah money and the pricing rule
//! - [`catalog`] - Catalog parsing and the derived filtered/sorted view
//! - [`cart`] - The selected-items set and its totals
//! - [`pagination`] - Page-selector control strip
//! - [`view`] - Display-record projection and id-ID number formatting
//! - [`order`] - Order-message builder
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, always
//! 2. **No I/O**: file, network, and environment access are FORBIDDEN here
//! 3. **Integer Money**: prices are whole-rupiah i64, never floats
//! 4. **Derived State Is Recomputed**: the filtered view is rebuilt on
//!    every mutation, never patched incrementally
//!
//! ## Example Usage
//!
//! ```rust
//! use warung_core::catalog::{Catalog, CatalogView, SortRule};
//! use warung_core::cart::Cart;
//! use warung_core::order::build_order_message;
//!
//! let catalog = Catalog::parse("name,size,discount\nHades,6.4,0.2\nCeleste,0.5,\n");
//! let mut view = CatalogView::new(catalog);
//! view.set_sort(SortRule::PriceAsc);
//!
//! let mut cart = Cart::new();
//! cart.toggle(&view.page_items()[0].clone());
//!
//! let message = build_order_message(&cart).unwrap();
//! assert!(message.contains("Celeste"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod order;
pub mod pagination;
pub mod price;
pub mod types;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals, ToggleOutcome};
pub use catalog::{Catalog, CatalogView, SortRule};
pub use order::{build_order_message, OrderError};
pub use pagination::{page_controls, PageControl};
pub use price::Rupiah;
pub use types::{CartEntry, Item};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Price per rounded gigabyte, in rupiah.
pub const PRICE_PER_GB: i64 = 2000;

/// Floor for the undiscounted base price: even a tiny game costs Rp 1.000.
pub const MIN_BASE_PRICE: i64 = 1000;

/// Page size the view starts with before the user picks one.
pub const DEFAULT_PER_PAGE: usize = 10;
