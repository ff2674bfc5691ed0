//! Database operations and SQLite management for the lending tracker.
//!
//! This module provides the low-level operations for the Shelfmark lending
//! system: connection handling, schema management, and the query interfaces
//! for the catalog (books), directory (friends and contacts), and loan
//! ledger. The multi-statement lending transactions live in
//! [`loan_queries`]; everything commits or rolls back before returning.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod book_queries;
pub mod friend_queries;
pub mod loan_queries;
pub mod migrations;

/// Database connection and operations handler.
///
/// Owning a `Database` is what "connected" means: the handle is acquired on
/// login and released when dropped, so connection lifetime is explicit in the
/// caller rather than hidden in shared session state.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
