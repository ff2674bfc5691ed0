//! Aggregate counts for the status overview.

use serde::{Deserialize, Serialize};

/// Headline numbers shown on the status page: catalog size, how many books
/// are out, and how many of those are overdue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LibraryStats {
    /// Total books in the catalog
    pub total_books: i64,

    /// Open loans (books currently out)
    pub books_on_loan: i64,

    /// Open loans past their due date
    pub overdue_loans: i64,
}
