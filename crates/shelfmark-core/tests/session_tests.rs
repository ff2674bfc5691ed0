use jiff::civil::date;
use shelfmark_core::{
    CreateBook, CreateFriend, CreateLoan, LibraryError, Session,
};
use shelfmark_core::models::{Condition, ShelfLocation};
use tempfile::TempDir;

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

#[tokio::test]
async fn test_disconnected_reads_are_empty() {
    let session = Session::new();

    assert!(!session.is_connected());
    assert!(session
        .list_books(None)
        .await
        .expect("Read should not error")
        .is_empty());
    assert!(session
        .list_friends()
        .await
        .expect("Read should not error")
        .is_empty());
    assert!(session
        .list_loans()
        .await
        .expect("Read should not error")
        .is_empty());
    assert!(session
        .list_overdue()
        .await
        .expect("Read should not error")
        .is_empty());

    let stats = session.stats().await.expect("Read should not error");
    assert_eq!(stats.total_books, 0);
    assert_eq!(stats.books_on_loan, 0);
    assert_eq!(stats.overdue_loans, 0);
}

#[tokio::test]
async fn test_disconnected_writes_are_rejected() {
    let session = Session::new();

    let err = session
        .create_book(&book_params("111", "Dune"))
        .await
        .expect_err("Write without a connection should fail");
    assert!(matches!(err, LibraryError::ConnectionUnavailable));

    let err = session
        .create_loan(&CreateLoan {
            friend_id: 1,
            isbn: "111".to_string(),
            borrow_date: date(2024, 1, 1),
            due_date: date(2024, 1, 15),
            reminder_date: None,
        })
        .await
        .expect_err("Write without a connection should fail");
    assert!(matches!(err, LibraryError::ConnectionUnavailable));
}

#[tokio::test]
async fn test_connect_disconnect_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("library.db");

    let mut session = Session::new();
    session
        .connect(Some(db_path.clone()))
        .await
        .expect("Failed to connect");
    assert!(session.is_connected());

    session
        .create_book(&book_params("111", "Dune"))
        .await
        .expect("Failed to create book");

    session.disconnect();
    assert!(!session.is_connected());

    // Data persists across a reconnect to the same file
    session
        .connect(Some(db_path))
        .await
        .expect("Failed to reconnect");
    let books = session
        .list_books(None)
        .await
        .expect("Failed to list books");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].isbn, "111");
}

#[tokio::test]
async fn test_session_business_rules_surface() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("library.db");

    let mut session = Session::new();
    session
        .connect(Some(db_path))
        .await
        .expect("Failed to connect");

    session
        .create_book(&book_params("111", "Dune"))
        .await
        .expect("Failed to create book");
    let friend = session
        .create_friend(&CreateFriend {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            max_loans: 0,
            contacts: Vec::new(),
        })
        .await
        .expect("Failed to create friend");

    let err = session
        .create_loan(&CreateLoan {
            friend_id: friend.id,
            isbn: "111".to_string(),
            borrow_date: date(2024, 1, 1),
            due_date: date(2024, 1, 15),
            reminder_date: None,
        })
        .await
        .expect_err("Zero quota should block the loan");
    assert!(err.is_business_rule());
    assert!(matches!(err, LibraryError::QuotaExceeded { .. }));
}
