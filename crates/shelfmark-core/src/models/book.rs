//! Book model definition and related enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Physical condition of a book.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Excellent,
    #[default]
    Good,
    Fair,
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excellent" => Ok(Condition::Excellent),
            "good" => Ok(Condition::Good),
            "fair" => Ok(Condition::Fair),
            _ => Err(format!("Invalid book condition: {s}")),
        }
    }
}

impl Condition {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Fair => "fair",
        }
    }
}

/// Shelf a book is stored on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShelfLocation {
    #[default]
    A1,
    B1,
    C1,
}

impl FromStr for ShelfLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A1" => Ok(ShelfLocation::A1),
            "B1" => Ok(ShelfLocation::B1),
            "C1" => Ok(ShelfLocation::C1),
            _ => Err(format!("Invalid shelf location: {s}")),
        }
    }
}

impl ShelfLocation {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShelfLocation::A1 => "A1",
            ShelfLocation::B1 => "B1",
            ShelfLocation::C1 => "C1",
        }
    }
}

/// A catalog entry for a single physical book.
///
/// `in_stock` is false exactly when one open loan references this ISBN; the
/// lending transactions in [`crate::db`] keep the two in sync.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// ISBN, the primary key. Immutable once created.
    pub isbn: String,

    /// Title of the book
    pub title: String,

    /// Author of the book
    pub author: String,

    /// Free-text genre label
    pub genre: String,

    /// Physical condition
    pub condition: Condition,

    /// Shelf the book lives on
    pub shelf_location: ShelfLocation,

    /// Row within the shelf (1-3)
    pub shelf_row: u8,

    /// Whether the book is currently on the shelf (not out on loan)
    pub in_stock: bool,
}

impl Book {
    /// Human-friendly shelf position, e.g. "A1 2".
    pub fn location(&self) -> String {
        format!("{} {}", self.shelf_location.as_str(), self.shelf_row)
    }
}
