//! Friend and contact models.

use serde::{Deserialize, Serialize};

/// A borrower in the friends directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Friend {
    /// Unique identifier, generated on insert
    pub id: u64,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Remaining loan quota. Decremented by each loan creation and restored
    /// on return; must be positive for a new loan to be permitted.
    pub max_loans: i64,

    /// Contact entries for this friend (lazy-loaded by default)
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl Friend {
    /// Full display name, e.g. "Ada Lovelace".
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A single contact entry (e.g. an email address or phone number) owned by a
/// friend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Unique identifier, generated on insert
    pub id: u64,

    /// Owning friend
    pub friend_id: u64,

    /// Free-text label, e.g. "email" or "phone"
    pub kind: String,

    /// The contact string itself
    pub value: String,
}
