//! Data models for books, friends, contacts, and loans.
//!
//! This module contains the core domain models for the Shelfmark lending
//! tracker. Each read query in [`crate::db`] decodes into one of these fixed
//! struct types at the store boundary, so callers never touch loosely typed
//! rows. Display implementations live in [`crate::display::models`] to keep
//! data structures and presentation logic separate.

pub mod book;
pub mod filters;
pub mod friend;
pub mod loan;
pub mod summary;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use book::{Book, Condition, ShelfLocation};
pub use filters::{BookFilter, StockFilter};
pub use friend::{Contact, Friend};
pub use loan::{BorrowedBook, Loan, LoanRecord, OverdueLoan};
pub use summary::LibraryStats;
