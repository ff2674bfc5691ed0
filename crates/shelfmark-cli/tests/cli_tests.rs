use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn shelf_cmd() -> Command {
    let mut cmd = Command::cargo_bin("shelf").expect("Failed to find shelf binary");
    cmd.arg("--no-color");
    cmd
}

/// Helper function to extract a numeric ID from "... with ID: <number>" output
fn extract_id_from_output(output: &str) -> String {
    if let Some(start) = output.find("ID: ") {
        let id_str = &output[start + 4..];
        let end = id_str
            .find(|c: char| !c.is_numeric())
            .unwrap_or(id_str.len());
        if end > 0 {
            return id_str[..end].to_string();
        }
    }
    panic!("Could not extract ID from output: {output}");
}

#[test]
fn test_cli_add_book_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    shelf_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "book",
            "add",
            "978-0441013593",
            "Dune",
            "Frank Herbert",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added book with ISBN: 978-0441013593"))
        .stdout(predicate::str::contains("Dune"));
}

#[test]
fn test_cli_add_book_duplicate_isbn() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    shelf_cmd()
        .args(["--database-file", db_arg, "book", "add", "111", "Dune", "Frank Herbert"])
        .assert()
        .success();

    shelf_cmd()
        .args(["--database-file", db_arg, "book", "add", "111", "Emma", "Jane Austen"])
        .assert()
        .failure();
}

#[test]
fn test_cli_list_empty_books() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    shelf_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "book", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."));
}

#[test]
fn test_cli_list_books_with_search() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    shelf_cmd()
        .args(["--database-file", db_arg, "book", "add", "111", "Dune", "Frank Herbert"])
        .assert()
        .success();
    shelf_cmd()
        .args(["--database-file", db_arg, "book", "add", "222", "Emma", "Jane Austen"])
        .assert()
        .success();

    shelf_cmd()
        .args(["--database-file", db_arg, "book", "list", "--search", "herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Emma").not());
}

#[test]
fn test_cli_show_missing_book() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    shelf_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "book",
            "show",
            "does-not-exist",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_add_friend_with_contacts() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    shelf_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "friend",
            "add",
            "Ada",
            "Lovelace",
            "--max-loans",
            "2",
            "--contact",
            "email=ada@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added friend with ID:"))
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("ada@example.com"));
}

#[test]
fn test_cli_add_friend_malformed_contact() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    shelf_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "friend",
            "add",
            "Ada",
            "Lovelace",
            "--contact",
            "no-separator-here",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_loan_round_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    shelf_cmd()
        .args(["--database-file", db_arg, "book", "add", "111", "Dune", "Frank Herbert"])
        .assert()
        .success();

    let output = shelf_cmd()
        .args(["--database-file", db_arg, "friend", "add", "Ada", "Lovelace"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let friend_id = extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"));

    shelf_cmd()
        .args(["--database-file", db_arg, "loan", "create", "111", &friend_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created loan with ID:"));

    shelf_cmd()
        .args(["--database-file", db_arg, "loan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Ada"));

    shelf_cmd()
        .args(["--database-file", db_arg, "loan", "return", "111", &friend_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Returned book 111"));

    shelf_cmd()
        .args(["--database-file", db_arg, "loan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No active loans found."));
}

#[test]
fn test_cli_loan_blocked_when_book_out() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    shelf_cmd()
        .args(["--database-file", db_arg, "book", "add", "111", "Dune", "Frank Herbert"])
        .assert()
        .success();
    shelf_cmd()
        .args(["--database-file", db_arg, "friend", "add", "Ada", "Lovelace"])
        .assert()
        .success();
    shelf_cmd()
        .args(["--database-file", db_arg, "friend", "add", "Grace", "Hopper"])
        .assert()
        .success();

    shelf_cmd()
        .args(["--database-file", db_arg, "loan", "create", "111", "1"])
        .assert()
        .success();

    shelf_cmd()
        .args(["--database-file", db_arg, "loan", "create", "111", "2"])
        .assert()
        .failure();
}

#[test]
fn test_cli_clear_reminder() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    shelf_cmd()
        .args(["--database-file", db_arg, "book", "add", "111", "Dune", "Frank Herbert"])
        .assert()
        .success();
    shelf_cmd()
        .args(["--database-file", db_arg, "friend", "add", "Ada", "Lovelace"])
        .assert()
        .success();

    let output = shelf_cmd()
        .args([
            "--database-file",
            db_arg,
            "loan",
            "create",
            "111",
            "1",
            "--reminder-date",
            "2030-01-01",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let loan_id = extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"));

    shelf_cmd()
        .args(["--database-file", db_arg, "loan", "clear-reminder", &loan_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared reminder for loan"));

    // Clearing again still succeeds
    shelf_cmd()
        .args(["--database-file", db_arg, "loan", "clear-reminder", &loan_id])
        .assert()
        .success();
}

#[test]
fn test_cli_overdue_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    shelf_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "loan", "overdue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing due."));
}

#[test]
fn test_cli_delete_friend_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    shelf_cmd()
        .args(["--database-file", db_arg, "friend", "add", "Ada", "Lovelace"])
        .assert()
        .success();

    shelf_cmd()
        .args(["--database-file", db_arg, "friend", "delete", "1"])
        .assert()
        .failure();

    shelf_cmd()
        .args(["--database-file", db_arg, "friend", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted friend 1"));
}

#[test]
fn test_cli_status_default_command() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    shelf_cmd()
        .args(["--database-file", db_arg, "book", "add", "111", "Dune", "Frank Herbert"])
        .assert()
        .success();

    shelf_cmd()
        .args(["--database-file", db_arg, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Library status"))
        .stdout(predicate::str::contains("Books in catalog: 1"));

    // No subcommand falls back to the same summary
    shelf_cmd()
        .args(["--database-file", db_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Library status"));
}

#[test]
fn test_cli_help_output() {
    shelf_cmd()
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("book"))
        .stdout(predicate::str::contains("friend"))
        .stdout(predicate::str::contains("loan"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_cli_version_output() {
    shelf_cmd()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("shelf "));
}
