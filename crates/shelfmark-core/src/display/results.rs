//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Book, Contact, Friend, Loan};

/// Wrapper type for displaying the result of create operations.
///
/// Formats a success message naming the created resource followed by its full
/// details.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Book> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added book with ISBN: {}", self.resource.isbn)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Friend> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added friend with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Contact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added contact with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Loan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created loan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult {
    resource_type: &'static str,
    identifier: String,
}

impl DeleteResult {
    /// Create a new DeleteResult for the given resource.
    pub fn new(resource_type: &'static str, identifier: impl Into<String>) -> Self {
        Self {
            resource_type,
            identifier: identifier.into(),
        }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted {} {}", self.resource_type, self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_result_display() {
        let result = DeleteResult::new("book", "978-0");
        assert_eq!(format!("{result}"), "Deleted book 978-0\n");
    }
}
