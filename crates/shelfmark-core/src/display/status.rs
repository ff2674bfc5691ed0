//! Confirmation lines for write operations that don't echo a record.
//!
//! Returns, reminder clears, and field updates mutate rows without
//! producing anything worth re-printing, so they confirm with a single
//! status line instead.

use std::fmt;

/// One-line confirmation for a completed write.
pub struct Confirmation {
    message: String,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_line() {
        let returned = Confirmation::new("Returned book 9780441013593 from friend 1");
        assert_eq!(
            returned.to_string(),
            "Success: Returned book 9780441013593 from friend 1\n"
        );
    }

    #[test]
    fn test_confirmation_accepts_formatted_message() {
        let loan_id = 7;
        let cleared = Confirmation::new(format!("Cleared reminder for loan {loan_id}"));
        assert!(cleared.to_string().contains("loan 7"));
    }
}
