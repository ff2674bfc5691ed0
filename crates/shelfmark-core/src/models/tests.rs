//! Unit tests for domain models.

use jiff::civil::date;

use super::*;
use crate::params::ContactEntry;

fn sample_book() -> Book {
    Book {
        isbn: "111".to_string(),
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        genre: "Science Fiction".to_string(),
        condition: Condition::Good,
        shelf_location: ShelfLocation::B1,
        shelf_row: 2,
        in_stock: true,
    }
}

#[test]
fn test_condition_round_trip() {
    for condition in [Condition::Excellent, Condition::Good, Condition::Fair] {
        assert_eq!(condition.as_str().parse::<Condition>(), Ok(condition));
    }
}

#[test]
fn test_condition_parse_case_insensitive() {
    assert_eq!("EXCELLENT".parse::<Condition>(), Ok(Condition::Excellent));
    assert_eq!("Fair".parse::<Condition>(), Ok(Condition::Fair));
}

#[test]
fn test_condition_parse_invalid() {
    assert!("mint".parse::<Condition>().is_err());
}

#[test]
fn test_shelf_location_round_trip() {
    for location in [ShelfLocation::A1, ShelfLocation::B1, ShelfLocation::C1] {
        assert_eq!(location.as_str().parse::<ShelfLocation>(), Ok(location));
    }
}

#[test]
fn test_shelf_location_parse_invalid() {
    assert!("D4".parse::<ShelfLocation>().is_err());
}

#[test]
fn test_book_location() {
    let book = sample_book();
    assert_eq!(book.location(), "B1 2");
}

#[test]
fn test_friend_name() {
    let friend = Friend {
        id: 7,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        max_loans: 2,
        contacts: Vec::new(),
    };
    assert_eq!(friend.name(), "Ada Lovelace");
}

#[test]
fn test_contact_entry_validity() {
    let valid = ContactEntry {
        kind: "email".to_string(),
        value: "ada@example.com".to_string(),
    };
    assert!(valid.is_valid());

    let blank_kind = ContactEntry {
        kind: "   ".to_string(),
        value: "ada@example.com".to_string(),
    };
    assert!(!blank_kind.is_valid());

    let blank_value = ContactEntry {
        kind: "phone".to_string(),
        value: String::new(),
    };
    assert!(!blank_value.is_valid());
}

#[test]
fn test_book_filter_is_empty() {
    assert!(BookFilter::default().is_empty());

    let filter = BookFilter {
        stock: StockFilter::InStock,
        ..Default::default()
    };
    assert!(!filter.is_empty());
}

#[test]
fn test_book_display_contains_details() {
    let output = format!("{}", sample_book());
    assert!(output.contains("Dune - Frank Herbert"));
    assert!(output.is_ascii());
    assert!(output.contains("B1 2"));
    assert!(output.contains("In stock"));
}

#[test]
fn test_overdue_display_is_plain_ascii() {
    let overdue = OverdueLoan {
        loan_id: 3,
        due_date: date(2024, 1, 15),
        friend_id: 7,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        title: "Dune".to_string(),
        isbn: "111".to_string(),
        contact_kind: "email".to_string(),
        contact_value: "ada@example.com".to_string(),
    };
    let output = format!("{overdue}");
    assert!(output.contains("contact via email: ada@example.com"));
    assert!(output.is_ascii());
}

#[test]
fn test_loan_record_display_cleared_reminder() {
    let record = LoanRecord {
        loan_id: 1,
        friend_id: 7,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        borrow_date: date(2024, 1, 1),
        due_date: date(2024, 1, 15),
        reminder_date: None,
        title: "Dune".to_string(),
        isbn: "111".to_string(),
    };
    let output = format!("{record}");
    assert!(output.contains("Reminder: cleared"));
}

#[test]
fn test_stats_display() {
    let stats = LibraryStats {
        total_books: 12,
        books_on_loan: 3,
        overdue_loans: 1,
    };
    let output = format!("{stats}");
    assert!(output.contains("Books in catalog: 12"));
    assert!(output.contains("Books on loan: 3"));
    assert!(output.contains("Overdue loans: 1"));
}
