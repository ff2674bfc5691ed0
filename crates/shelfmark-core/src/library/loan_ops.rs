//! Loan ledger operations for the Library.

use log::{debug, info};
use tokio::task;

use super::Library;
use crate::{
    db::Database,
    error::{LibraryError, Result},
    models::{BorrowedBook, Friend, Loan, LoanRecord, OverdueLoan},
    params::{CreateLoan, Id, ReturnLoan},
};

impl Library {
    /// Lends a book to a friend in one atomic transaction: the loan row is
    /// inserted, the book's stock flag flips, and the friend's remaining
    /// quota drops by one, or none of it happens.
    pub async fn create_loan(&self, params: &CreateLoan) -> Result<Loan> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        info!(
            "Creating loan of {} for friend {}",
            params.isbn, params.friend_id
        );
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_loan(&params)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Processes a returned book: the matching loan row goes away, the book
    /// returns to stock, and the friend's quota is restored, atomically.
    pub async fn return_loan(&self, params: &ReturnLoan) -> Result<()> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        info!(
            "Returning {} from friend {}",
            params.isbn, params.friend_id
        );
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.return_loan(&params)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Clears the return reminder for a loan. Idempotent.
    pub async fn clear_reminder(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let loan_id = params.id;

        debug!("Clearing reminder for loan {loan_id}");
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.clear_reminder(loan_id)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Whether a loan with the given ID exists.
    pub async fn loan_exists(&self, params: &Id) -> Result<bool> {
        let db_path = self.db_path.clone();
        let loan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.loan_exists(loan_id)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all open loans joined with book and friend details.
    pub async fn list_loans(&self) -> Result<Vec<LoanRecord>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_loans()
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists overdue loans with borrower contact entries.
    pub async fn list_overdue(&self) -> Result<Vec<OverdueLoan>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_overdue()
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists loans whose reminder fires today, with contact entries.
    pub async fn list_due_reminders(&self) -> Result<Vec<OverdueLoan>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_due_reminders()
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Books currently held by a specific friend.
    pub async fn borrowed_books(&self, params: &Id) -> Result<Vec<BorrowedBook>> {
        let db_path = self.db_path.clone();
        let friend_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.borrowed_books(friend_id)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Distinct friends who currently hold at least one loan.
    pub async fn loan_friends(&self) -> Result<Vec<Friend>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.loan_friends()
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
