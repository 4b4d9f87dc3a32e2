//! # Store Error Types
//!
//! Error types for the persistence layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds the path and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Boundary handling:                                                     │
//! │    SourceUnavailable → empty catalog + visible empty-state notice       │
//! │    StorageCorrupt    → empty cart, logged, never fatal                  │
//! │    StorageRead       → same handling as a corrupt slot                  │
//! │    StorageWrite      → surfaced, the mutation did not persist           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Persistence-layer errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The catalog data file could not be retrieved.
    ///
    /// ## When This Occurs
    /// - The file does not exist
    /// - Permissions deny reading it
    ///
    /// Callers show an empty catalog with an empty-state message; the load
    /// is not retried.
    #[error("catalog source unavailable at {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The cart slot exists but its content does not parse.
    ///
    /// Treated as an empty cart at startup, never as a fatal failure; the
    /// corrupt content is abandoned and overwritten on the next mutation.
    #[error("cart slot at {path} is corrupt: {source}")]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The cart slot exists but could not be read. Startup treats this
    /// like a corrupt slot: empty cart, logged, not fatal.
    #[error("failed to read cart slot at {path}: {source}")]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the cart slot failed, so the mutation did not persist.
    #[error("failed to write cart slot at {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
