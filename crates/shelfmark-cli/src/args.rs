use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BookCommands, FriendCommands, LoanCommands};

/// Main command-line interface for the Shelfmark lending tracker
///
/// Shelfmark keeps a catalog of personally owned books, a directory of the
/// friends who borrow them, and the loans currently out. It tracks due dates,
/// flags overdue loans, and surfaces return reminders on the day they fall
/// due.
#[derive(Parser)]
#[command(version, about, name = "shelf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/shelfmark/library.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Shelfmark CLI
///
/// The CLI is organized into four main command categories:
/// - `book`: Operations on the catalog (add, list, update, delete)
/// - `friend`: Operations on the borrower directory and their contacts
/// - `loan`: The lending lifecycle (borrow, return, overdue, reminders)
/// - `status`: A one-screen summary of the whole library
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the book catalog
    #[command(alias = "b")]
    Book {
        #[command(subcommand)]
        command: BookCommands,
    },
    /// Manage friends and their contact details
    #[command(alias = "f")]
    Friend {
        #[command(subcommand)]
        command: FriendCommands,
    },
    /// Manage loans
    #[command(alias = "l")]
    Loan {
        #[command(subcommand)]
        command: LoanCommands,
    },
    /// Show library summary counts
    Status,
}
