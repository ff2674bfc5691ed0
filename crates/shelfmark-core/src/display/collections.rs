//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers provide Display for collections with consistent empty
//! handling, without the models themselves knowing about list formatting.

use std::{fmt, ops::Index};

use crate::models::{Book, Friend, LoanRecord, OverdueLoan};

/// Newtype wrapper for displaying a list of catalog books.
pub struct Books(pub Vec<Book>);

impl Books {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of books in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the books.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.0.iter()
    }
}

impl Index<usize> for Books {
    type Output = Book;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Books {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Books {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No books found.")
        } else {
            for book in &self.0 {
                write!(f, "{book}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a list of friends.
pub struct Friends(pub Vec<Friend>);

impl Friends {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of friends in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Friends {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No friends found.")
        } else {
            for friend in &self.0 {
                write!(f, "{friend}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a list of open loans.
pub struct Loans(pub Vec<LoanRecord>);

impl Loans {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of loans in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Loans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No active loans found.")
        } else {
            for loan in &self.0 {
                write!(f, "{loan}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying overdue or due-for-reminder loans with
/// their contact rows.
pub struct OverdueLoans(pub Vec<OverdueLoan>);

impl OverdueLoans {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for OverdueLoans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "Nothing due.")
        } else {
            for entry in &self.0 {
                write!(f, "{entry}")?;
            }
            Ok(())
        }
    }
}
