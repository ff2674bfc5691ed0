//! Connection-lifecycle wrapper around [`Library`].
//!
//! Rather than keeping a shared handle in global state, the connection is an
//! explicitly owned value. A [`Session`] starts
//! disconnected, acquires a [`Library`] on [`connect`](Session::connect), and
//! releases it on [`disconnect`](Session::disconnect) or drop, covering every
//! exit path.
//!
//! Every operation is total over "not connected": reads yield empty result
//! sets (or `None`/`false`), writes yield
//! [`LibraryError::ConnectionUnavailable`]. Nothing panics or unwinds past
//! this boundary.

use std::path::PathBuf;

use log::info;

use crate::{
    error::{LibraryError, Result},
    library::{Library, LibraryBuilder},
    models::{
        Book, BookFilter, BorrowedBook, Contact, Friend, LibraryStats, Loan, LoanRecord,
        OverdueLoan,
    },
    params::{
        AddContact, CreateBook, CreateFriend, CreateLoan, Id, ReturnLoan, UpdateBook, UpdateFriend,
    },
};

/// A login session that may or may not hold a live store connection.
#[derive(Default)]
pub struct Session {
    library: Option<Library>,
}

impl Session {
    /// Creates a new, disconnected session.
    pub fn new() -> Self {
        Self { library: None }
    }

    /// Opens the store and acquires the connection handle.
    ///
    /// Failure leaves the session disconnected and yields a human-readable
    /// message; an unopenable store surfaces as `LibraryError::Database`.
    pub async fn connect(&mut self, database_path: Option<PathBuf>) -> Result<()> {
        let library = LibraryBuilder::new()
            .with_database_path(database_path)
            .build()
            .await?;
        info!("Connected to library database");
        self.library = Some(library);
        Ok(())
    }

    /// Releases the connection handle. Safe to call when already
    /// disconnected.
    pub fn disconnect(&mut self) {
        if self.library.take().is_some() {
            info!("Disconnected from library database");
        }
    }

    /// Whether the session currently holds a live connection.
    pub fn is_connected(&self) -> bool {
        self.library.is_some()
    }

    /// The live library handle, for callers that need write failures rather
    /// than silent degradation.
    fn library(&self) -> Result<&Library> {
        self.library
            .as_ref()
            .ok_or(LibraryError::ConnectionUnavailable)
    }

    // --- Catalog ---

    pub async fn create_book(&self, params: &CreateBook) -> Result<Book> {
        self.library()?.create_book(params).await
    }

    pub async fn get_book(&self, isbn: &str) -> Result<Option<Book>> {
        match self.library {
            Some(ref library) => library.get_book(isbn).await,
            None => Ok(None),
        }
    }

    pub async fn list_books(&self, filter: Option<BookFilter>) -> Result<Vec<Book>> {
        match self.library {
            Some(ref library) => library.list_books(filter).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn update_book(&self, params: &UpdateBook) -> Result<bool> {
        self.library()?.update_book(params).await
    }

    pub async fn delete_book(&self, isbn: &str) -> Result<()> {
        self.library()?.delete_book(isbn).await
    }

    pub async fn stats(&self) -> Result<LibraryStats> {
        match self.library {
            Some(ref library) => library.stats().await,
            None => Ok(LibraryStats::default()),
        }
    }

    // --- Directory ---

    pub async fn create_friend(&self, params: &CreateFriend) -> Result<Friend> {
        self.library()?.create_friend(params).await
    }

    pub async fn get_friend(&self, params: &Id) -> Result<Option<Friend>> {
        match self.library {
            Some(ref library) => library.get_friend(params).await,
            None => Ok(None),
        }
    }

    pub async fn list_friends(&self) -> Result<Vec<Friend>> {
        match self.library {
            Some(ref library) => library.list_friends().await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn search_friends(&self, name: &str) -> Result<Vec<Friend>> {
        match self.library {
            Some(ref library) => library.search_friends(name).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn update_friend(&self, params: &UpdateFriend) -> Result<bool> {
        self.library()?.update_friend(params).await
    }

    pub async fn add_contact(&self, params: &AddContact) -> Result<Contact> {
        self.library()?.add_contact(params).await
    }

    pub async fn delete_contact(&self, params: &Id) -> Result<()> {
        self.library()?.delete_contact(params).await
    }

    pub async fn get_contacts(&self, params: &Id) -> Result<Vec<Contact>> {
        match self.library {
            Some(ref library) => library.get_contacts(params).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn get_remaining_quota(&self, params: &Id) -> Result<Option<i64>> {
        match self.library {
            Some(ref library) => library.get_remaining_quota(params).await,
            None => Ok(None),
        }
    }

    pub async fn delete_friend(&self, params: &Id) -> Result<()> {
        self.library()?.delete_friend(params).await
    }

    // --- Loan ledger ---

    pub async fn create_loan(&self, params: &CreateLoan) -> Result<Loan> {
        self.library()?.create_loan(params).await
    }

    pub async fn return_loan(&self, params: &ReturnLoan) -> Result<()> {
        self.library()?.return_loan(params).await
    }

    pub async fn clear_reminder(&self, params: &Id) -> Result<()> {
        self.library()?.clear_reminder(params).await
    }

    pub async fn loan_exists(&self, params: &Id) -> Result<bool> {
        match self.library {
            Some(ref library) => library.loan_exists(params).await,
            None => Ok(false),
        }
    }

    pub async fn list_loans(&self) -> Result<Vec<LoanRecord>> {
        match self.library {
            Some(ref library) => library.list_loans().await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn list_overdue(&self) -> Result<Vec<OverdueLoan>> {
        match self.library {
            Some(ref library) => library.list_overdue().await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn list_due_reminders(&self) -> Result<Vec<OverdueLoan>> {
        match self.library {
            Some(ref library) => library.list_due_reminders().await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn borrowed_books(&self, params: &Id) -> Result<Vec<BorrowedBook>> {
        match self.library {
            Some(ref library) => library.borrowed_books(params).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn loan_friends(&self) -> Result<Vec<Friend>> {
        match self.library {
            Some(ref library) => library.loan_friends().await,
            None => Ok(Vec::new()),
        }
    }
}

impl From<Library> for Session {
    /// Wraps an already-built library handle in a connected session.
    fn from(library: Library) -> Self {
        Self {
            library: Some(library),
        }
    }
}
