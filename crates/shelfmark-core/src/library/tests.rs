//! Tests for the library module.

use tempfile::TempDir;

use super::*;
use crate::models::{BookFilter, Condition, ShelfLocation, StockFilter};
use crate::params::{ContactEntry, CreateBook, CreateFriend, CreateLoan, Id, ReturnLoan};

/// Helper function to create a test library
async fn create_test_library() -> (TempDir, Library) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let library = LibraryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create library");
    (temp_dir, library)
}

fn book_params(isbn: &str, title: &str) -> CreateBook {
    CreateBook {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: "Author".to_string(),
        genre: "Fiction".to_string(),
        condition: Condition::Good,
        shelf_location: ShelfLocation::A1,
        shelf_row: 1,
    }
}

fn friend_params(first: &str, last: &str, max_loans: i64) -> CreateFriend {
    CreateFriend {
        first_name: first.to_string(),
        last_name: last.to_string(),
        max_loans,
        contacts: Vec::new(),
    }
}

fn loan_params(friend_id: u64, isbn: &str) -> CreateLoan {
    CreateLoan {
        friend_id,
        isbn: isbn.to_string(),
        borrow_date: "2024-01-01".parse().unwrap(),
        due_date: "2024-01-15".parse().unwrap(),
        reminder_date: Some("2024-01-12".parse().unwrap()),
    }
}

#[tokio::test]
async fn test_create_and_list_books() {
    let (_temp_dir, library) = create_test_library().await;

    library
        .create_book(&book_params("222", "Borrowed"))
        .await
        .expect("Failed to create book");
    library
        .create_book(&book_params("111", "Available"))
        .await
        .expect("Failed to create book");

    let books = library.list_books(None).await.expect("Failed to list books");
    assert_eq!(books.len(), 2);
    // Ordered by title
    assert_eq!(books[0].title, "Available");
    assert_eq!(books[1].title, "Borrowed");
}

#[tokio::test]
async fn test_list_books_stock_filter() {
    let (_temp_dir, library) = create_test_library().await;

    library
        .create_book(&book_params("111", "Out"))
        .await
        .expect("Failed to create book");
    library
        .create_book(&book_params("222", "In"))
        .await
        .expect("Failed to create book");
    let friend = library
        .create_friend(&friend_params("Ada", "Lovelace", 2))
        .await
        .expect("Failed to create friend");
    library
        .create_loan(&loan_params(friend.id, "111"))
        .await
        .expect("Failed to create loan");

    let filter = BookFilter {
        stock: StockFilter::InStock,
        ..Default::default()
    };
    let in_stock = library
        .list_books(Some(filter))
        .await
        .expect("Failed to list books");
    assert_eq!(in_stock.len(), 1);
    assert_eq!(in_stock[0].isbn, "222");

    let filter = BookFilter {
        stock: StockFilter::OnLoan,
        ..Default::default()
    };
    let on_loan = library
        .list_books(Some(filter))
        .await
        .expect("Failed to list books");
    assert_eq!(on_loan.len(), 1);
    assert_eq!(on_loan[0].isbn, "111");
}

#[tokio::test]
async fn test_create_friend_with_contacts() {
    let (_temp_dir, library) = create_test_library().await;

    let friend = library
        .create_friend(&CreateFriend {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            max_loans: 3,
            contacts: vec![
                ContactEntry {
                    kind: "email".to_string(),
                    value: "ada@example.com".to_string(),
                },
                // Blank entries are dropped, not rejected
                ContactEntry {
                    kind: String::new(),
                    value: "ignored".to_string(),
                },
            ],
        })
        .await
        .expect("Failed to create friend");

    assert!(friend.id > 0);
    assert_eq!(friend.contacts.len(), 1);
    assert_eq!(friend.contacts[0].kind, "email");

    let fetched = library
        .get_friend(&Id { id: friend.id })
        .await
        .expect("Failed to get friend")
        .expect("Friend should exist");
    assert_eq!(fetched.contacts.len(), 1);
}

#[tokio::test]
async fn test_loan_round_trip() {
    let (_temp_dir, library) = create_test_library().await;

    library
        .create_book(&book_params("111", "Dune"))
        .await
        .expect("Failed to create book");
    let friend = library
        .create_friend(&friend_params("Ada", "Lovelace", 2))
        .await
        .expect("Failed to create friend");

    let loan = library
        .create_loan(&loan_params(friend.id, "111"))
        .await
        .expect("Failed to create loan");
    assert_eq!(loan.isbn, "111");

    let quota = library
        .get_remaining_quota(&Id { id: friend.id })
        .await
        .expect("Failed to get quota");
    assert_eq!(quota, Some(1));

    library
        .return_loan(&ReturnLoan {
            isbn: "111".to_string(),
            friend_id: friend.id,
        })
        .await
        .expect("Failed to return loan");

    let quota = library
        .get_remaining_quota(&Id { id: friend.id })
        .await
        .expect("Failed to get quota");
    assert_eq!(quota, Some(2));

    let loans = library.list_loans().await.expect("Failed to list loans");
    assert!(loans.is_empty());
}

#[tokio::test]
async fn test_list_loans_joined_columns() {
    let (_temp_dir, library) = create_test_library().await;

    library
        .create_book(&book_params("111", "Dune"))
        .await
        .expect("Failed to create book");
    let friend = library
        .create_friend(&friend_params("Ada", "Lovelace", 2))
        .await
        .expect("Failed to create friend");
    library
        .create_loan(&loan_params(friend.id, "111"))
        .await
        .expect("Failed to create loan");

    let loans = library.list_loans().await.expect("Failed to list loans");
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].title, "Dune");
    assert_eq!(loans[0].first_name, "Ada");
    assert_eq!(loans[0].last_name, "Lovelace");
    assert_eq!(loans[0].isbn, "111");
}

#[tokio::test]
async fn test_borrowed_books_for_friend() {
    let (_temp_dir, library) = create_test_library().await;

    library
        .create_book(&book_params("111", "Dune"))
        .await
        .expect("Failed to create book");
    library
        .create_book(&book_params("222", "Emma"))
        .await
        .expect("Failed to create book");
    let friend = library
        .create_friend(&friend_params("Ada", "Lovelace", 5))
        .await
        .expect("Failed to create friend");
    library
        .create_loan(&loan_params(friend.id, "111"))
        .await
        .expect("Failed to create loan");

    let borrowed = library
        .borrowed_books(&Id { id: friend.id })
        .await
        .expect("Failed to list borrowed books");
    assert_eq!(borrowed.len(), 1);
    assert_eq!(borrowed[0].isbn, "111");

    let borrowers = library
        .loan_friends()
        .await
        .expect("Failed to list borrowers");
    assert_eq!(borrowers.len(), 1);
    assert_eq!(borrowers[0].id, friend.id);
}

#[tokio::test]
async fn test_stats() {
    let (_temp_dir, library) = create_test_library().await;

    library
        .create_book(&book_params("111", "Dune"))
        .await
        .expect("Failed to create book");
    library
        .create_book(&book_params("222", "Emma"))
        .await
        .expect("Failed to create book");
    let friend = library
        .create_friend(&friend_params("Ada", "Lovelace", 2))
        .await
        .expect("Failed to create friend");
    library
        .create_loan(&loan_params(friend.id, "111"))
        .await
        .expect("Failed to create loan");

    let stats = library.stats().await.expect("Failed to fetch stats");
    assert_eq!(stats.total_books, 2);
    assert_eq!(stats.books_on_loan, 1);
    // Due date 2024-01-15 is in the past relative to the store clock
    assert_eq!(stats.overdue_loans, 1);
}
