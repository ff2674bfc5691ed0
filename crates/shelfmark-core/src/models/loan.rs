//! Loan models, including the joined row types returned by the read side.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A single open loan row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Loan {
    /// Unique identifier, generated on insert
    pub id: u64,

    /// Borrowing friend
    pub friend_id: u64,

    /// Borrowed book
    pub isbn: String,

    /// Date the book left the shelf
    pub borrow_date: Date,

    /// Date the book is due back
    pub due_date: Date,

    /// Date a return reminder should be sent; `None` once the reminder has
    /// been actioned or cleared.
    pub reminder_date: Option<Date>,
}

/// An open loan joined with the book title and friend name for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanRecord {
    pub loan_id: u64,
    pub friend_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub borrow_date: Date,
    pub due_date: Date,
    pub reminder_date: Option<Date>,
    pub title: String,
    pub isbn: String,
}

/// An overdue (or due-for-reminder) loan joined with one of the friend's
/// contact entries for reminder dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverdueLoan {
    pub loan_id: u64,
    pub due_date: Date,
    pub friend_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub isbn: String,
    /// Contact label, e.g. "email"
    pub contact_kind: String,
    /// Contact value, e.g. the address itself
    pub contact_value: String,
}

/// A book currently held by a specific friend, for the return-form dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BorrowedBook {
    pub isbn: String,
    pub title: String,
}
