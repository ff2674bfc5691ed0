//! Core library for the Shelfmark lending tracker.
//!
//! This crate provides the business logic for a small personal
//! library-lending system: a book catalog, a friends/borrowers directory, and
//! a loan ledger with a transactional lending lifecycle. A book is either
//! Available (in stock, no open loan) or OnLoan (exactly one open loan), and
//! the create/return transactions keep the loan row, the book's stock flag,
//! and the friend's remaining quota moving together.
//!
//! # Quick Start
//!
//! ```rust
//! use shelfmark_core::{LibraryBuilder, params::{CreateBook, CreateLoan}};
//! use shelfmark_core::models::{Condition, ShelfLocation};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open (or create) a library database
//! let library = LibraryBuilder::new()
//!     .with_database_path(Some("library.db"))
//!     .build()
//!     .await?;
//!
//! // Add a book to the catalog
//! let book = library.create_book(&CreateBook {
//!     isbn: "978-0140449136".to_string(),
//!     title: "The Odyssey".to_string(),
//!     author: "Homer".to_string(),
//!     genre: "Classics".to_string(),
//!     condition: Condition::Good,
//!     shelf_location: ShelfLocation::A1,
//!     shelf_row: 1,
//! }).await?;
//! println!("Added: {}", book.title);
//!
//! // List everything on the shelf
//! let books = library.list_books(None).await?;
//! for book in &books {
//!     println!("{} by {}", book.title, book.author);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod library;
pub mod models;
pub mod params;
pub mod session;

// Re-export commonly used types
pub use db::Database;
pub use display::{Books, Confirmation, CreateResult, DeleteResult, Friends, Loans, OverdueLoans};
pub use error::{LibraryError, Result};
pub use library::{Library, LibraryBuilder};
pub use models::{
    Book, BookFilter, BorrowedBook, Condition, Contact, Friend, LibraryStats, Loan, LoanRecord,
    OverdueLoan, ShelfLocation, StockFilter,
};
pub use params::{
    AddContact, ContactEntry, CreateBook, CreateFriend, CreateLoan, Id, ReturnLoan, UpdateBook,
    UpdateFriend,
};
pub use session::Session;
