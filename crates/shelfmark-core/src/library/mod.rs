//! High-level library API for the lending tracker.
//!
//! This module provides the main [`Library`] interface. The library acts as
//! the coordinator between interface layers and the database, owning the
//! store handle for the lifetime of a session and running every operation on
//! a blocking thread via `tokio::task::spawn_blocking`.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Library`] instances with
//!   configuration
//! - [`book_ops`]: Catalog operations (add, list, update, delete, counts)
//! - [`friend_ops`]: Directory operations (friends and contacts)
//! - [`loan_ops`]: Loan ledger reads and the lending lifecycle transactions
//!
//! Each operation opens one short-lived transaction against the backing
//! store and commits or rolls back before returning; there are no long-held
//! locks or background tasks.

use std::path::PathBuf;

pub mod book_ops;
pub mod builder;
pub mod friend_ops;
pub mod loan_ops;

#[cfg(test)]
mod tests;

pub use builder::LibraryBuilder;

/// Main interface for managing the catalog, directory, and loan ledger.
pub struct Library {
    pub(crate) db_path: PathBuf,
}

impl Library {
    /// Creates a new library with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
