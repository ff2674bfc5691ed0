//! Parameter structures for Shelfmark operations.
//!
//! These structures carry input between interface layers (the CLI today,
//! anything else tomorrow) and the core library without framework-specific
//! derives. Interface layers define their own wrapper types (e.g. clap `Args`
//! structs) and convert into these, keeping clap concerns out of the core
//! crate.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{Condition, ShelfLocation};

/// Generic parameters for operations requiring just a numeric ID.
///
/// Used for show_friend, delete_contact, clear_reminder, etc.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for adding a book to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBook {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub condition: Condition,
    pub shelf_location: ShelfLocation,
    /// Row within the shelf; must be 1-3
    pub shelf_row: u8,
}

/// Parameters for editing a book's mutable fields. The ISBN identifies the
/// book and cannot itself be changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBook {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub condition: Condition,
    pub shelf_location: ShelfLocation,
    pub shelf_row: u8,
}

/// A contact entry supplied when creating a friend or adding a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactEntry {
    /// Free-text label, e.g. "email" or "phone"
    pub kind: String,
    /// The contact string itself
    pub value: String,
}

impl ContactEntry {
    /// Whether both fields carry non-blank content. Blank entries in an
    /// initial contact batch are silently dropped rather than rejected.
    pub fn is_valid(&self) -> bool {
        !self.kind.trim().is_empty() && !self.value.trim().is_empty()
    }
}

/// Parameters for adding a friend, optionally with an initial contact batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFriend {
    pub first_name: String,
    pub last_name: String,
    /// Initial remaining loan quota
    pub max_loans: i64,
    /// Initial contact entries; blank entries are dropped
    #[serde(default)]
    pub contacts: Vec<ContactEntry>,
}

/// Parameters for editing a friend's details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFriend {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub max_loans: i64,
}

/// Parameters for attaching a contact to an existing friend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddContact {
    pub friend_id: u64,
    pub kind: String,
    pub value: String,
}

/// Parameters for creating a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLoan {
    pub friend_id: u64,
    pub isbn: String,
    pub borrow_date: Date,
    pub due_date: Date,
    /// Date a return reminder should fire; omitted means no reminder
    pub reminder_date: Option<Date>,
}

/// Parameters for returning a book.
///
/// The open loan is identified by the (ISBN, FriendID) pair rather than by
/// LoanID; the at-most-one-open-loan-per-ISBN invariant makes the pair
/// unambiguous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnLoan {
    pub isbn: String,
    pub friend_id: u64,
}
