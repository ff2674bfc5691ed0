//! Display implementations for domain models.
//!
//! Kept separate from the model definitions so data structures and
//! presentation logic stay apart. All output is markdown for rich terminal
//! display.

use std::fmt;

use crate::models::{
    Book, BorrowedBook, Condition, Contact, Friend, LibraryStats, Loan, LoanRecord, OverdueLoan,
    ShelfLocation,
};

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ShelfLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stock = if self.in_stock { "In stock" } else { "On loan" };
        writeln!(f, "## {} - {} (ISBN: {})", self.title, self.author, self.isbn)?;
        writeln!(f)?;
        writeln!(f, "- Genre: {}", self.genre)?;
        writeln!(f, "- Condition: {}", self.condition)?;
        writeln!(f, "- Location: {}", self.location())?;
        writeln!(f, "- Status: {stock}")?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {}: {} (ID: {})", self.kind, self.value, self.id)
    }
}

impl fmt::Display for Friend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name(), self.id)?;
        writeln!(f)?;
        writeln!(f, "- Remaining loans: {}", self.max_loans)?;
        if !self.contacts.is_empty() {
            for contact in &self.contacts {
                write!(f, "{contact}")?;
            }
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Loan {} - ISBN {}", self.id, self.isbn)?;
        writeln!(f)?;
        writeln!(f, "- Friend ID: {}", self.friend_id)?;
        writeln!(f, "- Borrowed: {}", self.borrow_date)?;
        writeln!(f, "- Due: {}", self.due_date)?;
        if let Some(reminder) = self.reminder_date {
            writeln!(f, "- Reminder: {reminder}")?;
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for LoanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} - {} {} (Loan ID: {})",
            self.title, self.first_name, self.last_name, self.loan_id
        )?;
        writeln!(f)?;
        writeln!(f, "- ISBN: {}", self.isbn)?;
        writeln!(f, "- Borrowed: {}", self.borrow_date)?;
        writeln!(f, "- Due: {}", self.due_date)?;
        match self.reminder_date {
            Some(reminder) => writeln!(f, "- Reminder: {reminder}")?,
            None => writeln!(f, "- Reminder: cleared")?,
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for OverdueLoan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** held by {} {} (due {}) - contact via {}: {}",
            self.title,
            self.first_name,
            self.last_name,
            self.due_date,
            self.contact_kind,
            self.contact_value
        )
    }
}

impl fmt::Display for BorrowedBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} (ISBN: {})", self.title, self.isbn)
    }
}

impl fmt::Display for LibraryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Library status")?;
        writeln!(f)?;
        writeln!(f, "- Books in catalog: {}", self.total_books)?;
        writeln!(f, "- Books on loan: {}", self.books_on_loan)?;
        writeln!(f, "- Overdue loans: {}", self.overdue_loans)?;
        Ok(())
    }
}
