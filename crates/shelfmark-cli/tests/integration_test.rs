//! Integration tests comparing CLI output with direct Display implementations
//!
//! The CLI prints the same Display wrappers the core crate exposes; these
//! tests pin that equivalence so output formatting cannot drift between the
//! two paths.

use std::process::Command;

use shelfmark_core::{
    display::{Books, CreateResult, Loans},
    models::{Condition, ShelfLocation},
    params::CreateBook,
    Library, LibraryBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test library with temporary database
async fn create_test_library() -> (Library, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let library = LibraryBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create library");

    (library, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shelf"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

fn book_params(isbn: &str, title: &str, author: &str) -> CreateBook {
    CreateBook {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        genre: "Fiction".to_string(),
        condition: Condition::Good,
        shelf_location: ShelfLocation::A1,
        shelf_row: 1,
    }
}

/// Test that book creation has consistent output between CLI and direct
/// Display impl
#[tokio::test]
async fn test_book_display_consistency() {
    let (library, temp_dir) = create_test_library().await;
    let db_path = temp_dir.path().join("cli.db");
    let db_str = db_path.to_str().unwrap();

    // Create book via CLI
    let cli_output = run_cli_command(
        db_str,
        &["book", "add", "978-0441013593", "Dune", "Frank Herbert"],
    );

    // Create the same book via direct library call
    let book = library
        .create_book(&book_params("978-0441013593", "Dune", "Frank Herbert"))
        .await
        .expect("Failed to create book");
    let direct_output = CreateResult::new(book).to_string();

    // Both outputs use the same Display impl and should match exactly
    assert_eq!(cli_output.trim(), direct_output.trim());
}

/// Test empty list output consistency
#[tokio::test]
async fn test_empty_list_consistency() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    let cli_books = run_cli_command(db_str, &["book", "list"]);
    assert_eq!(cli_books.trim(), Books(Vec::new()).to_string().trim());

    let cli_loans = run_cli_command(db_str, &["loan", "list"]);
    assert_eq!(cli_loans.trim(), Loans(Vec::new()).to_string().trim());
}

/// Test that the status summary matches the stats Display impl
#[tokio::test]
async fn test_status_consistency() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    run_cli_command(db_str, &["book", "add", "111", "Dune", "Frank Herbert"]);
    run_cli_command(db_str, &["friend", "add", "Ada", "Lovelace"]);
    run_cli_command(db_str, &["loan", "create", "111", "1"]);

    let cli_status = run_cli_command(db_str, &["status"]);

    let library = LibraryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create library");
    let stats = library.stats().await.expect("Failed to get stats");

    assert_eq!(cli_status.trim(), stats.to_string().trim());
    assert_eq!(stats.total_books, 1);
    assert_eq!(stats.books_on_loan, 1);
}
