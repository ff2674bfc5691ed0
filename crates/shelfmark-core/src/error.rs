//! Error types for the lending library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all library operations.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// No active database connection; reads degrade to empty result sets and
    /// writes report this error instead of unwinding.
    #[error("Not connected to the database")]
    ConnectionUnavailable,
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Book not found for the given ISBN
    #[error("Book with ISBN {isbn} not found")]
    BookNotFound { isbn: String },
    /// Friend not found for the given ID
    #[error("Friend with ID {id} not found")]
    FriendNotFound { id: u64 },
    /// Loan not found for the given ID
    #[error("Loan with ID {id} not found")]
    LoanNotFound { id: u64 },
    /// Contact not found for the given ID
    #[error("Contact with ID {id} not found")]
    ContactNotFound { id: u64 },
    /// No open loan matches the given (ISBN, friend) pair
    #[error("No open loan of ISBN {isbn} by friend {friend_id}")]
    NoOpenLoan { isbn: String, friend_id: u64 },
    /// A book with this ISBN already exists in the catalog
    #[error("A book with ISBN {isbn} already exists")]
    DuplicateIsbn { isbn: String },
    /// The book is already out on loan
    #[error("Book with ISBN {isbn} is not in stock")]
    BookUnavailable { isbn: String },
    /// The friend has no remaining loan quota
    #[error("Friend with ID {id} has reached their loan limit")]
    QuotaExceeded { id: u64 },
    /// The book cannot be removed from the catalog while out on loan
    #[error("Book with ISBN {isbn} is out on loan and cannot be deleted")]
    BookOnLoan { isbn: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl LibraryError {
    /// Creates a new database error with context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error represents a business-rule violation (checked before
    /// any mutation) rather than an infrastructure failure.
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::DuplicateIsbn { .. }
                | Self::BookUnavailable { .. }
                | Self::QuotaExceeded { .. }
                | Self::BookOnLoan { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| LibraryError::database_error(message, e))
    }
}

/// Specialized extension trait for configuration-related Results.
pub trait ConfigResultExt<T> {
    /// Map configuration errors with a message.
    fn config_context(self, message: &str) -> Result<T>;
}

impl<T> ConfigResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn config_context(self, message: &str) -> Result<T> {
        self.map_err(|e| LibraryError::Configuration {
            message: format!("{message}: {e}"),
        })
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;
