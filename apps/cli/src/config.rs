//! # CLI Configuration
//!
//! Paths and the destination phone number, from environment variables with
//! sensible defaults.
//!
//! ## Environment Variables
//! - `WARUNG_CATALOG`: catalog CSV path (default: `data/games.csv`)
//! - `WARUNG_CART_PATH`: cart slot path (default: platform data dir)
//! - `WARUNG_PHONE`: destination WhatsApp number, international format,
//!   digits only

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::debug;

/// Where the shop owner takes orders when nothing is configured.
const DEFAULT_PHONE: &str = "6283152898011";

/// Catalog file relative to the working directory by default.
const DEFAULT_CATALOG: &str = "data/games.csv";

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog CSV file.
    pub catalog_path: PathBuf,

    /// Durable cart slot.
    pub cart_path: PathBuf,

    /// Destination phone number for the order link.
    pub phone: String,
}

impl Config {
    /// Builds the configuration from environment variables and defaults.
    pub fn from_env() -> Self {
        let catalog_path = std::env::var("WARUNG_CATALOG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG));

        let cart_path = std::env::var("WARUNG_CART_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_cart_path());

        let phone = std::env::var("WARUNG_PHONE").unwrap_or_else(|_| DEFAULT_PHONE.to_string());

        Config {
            catalog_path,
            cart_path,
            phone,
        }
    }
}

/// Platform-specific default for the cart slot:
/// - **macOS**: `~/Library/Application Support/id.warung.games/cart.json`
/// - **Windows**: `%APPDATA%\warung\games\data\cart.json`
/// - **Linux**: `~/.local/share/warung-games/cart.json`
///
/// Falls back to the working directory when no home can be determined.
fn default_cart_path() -> PathBuf {
    match ProjectDirs::from("id", "warung", "games") {
        Some(dirs) => dirs.data_dir().join("cart.json"),
        None => {
            debug!("no home directory found, keeping the cart slot beside the binary");
            PathBuf::from("cart.json")
        }
    }
}
