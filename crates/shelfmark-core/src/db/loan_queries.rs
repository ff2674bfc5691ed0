//! Loan ledger queries and the lending lifecycle transactions.
//!
//! A (book, loan) pair is always in one of two states: Available (no open
//! loan, `in_stock = 1`) or OnLoan (exactly one open loan, `in_stock = 0`).
//! [`create_loan`](super::Database::create_loan) and
//! [`return_loan`](super::Database::return_loan) are the only transitions,
//! and each runs as a single transaction so the loan row, the stock flag,
//! and the friend's remaining quota always move together.
//!
//! Overdue and reminder detection compare against the store's own
//! `date('now')`, never a caller-supplied clock.

use jiff::civil::Date;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, LibraryError, Result},
    models::{BorrowedBook, Friend, LibraryStats, Loan, LoanRecord, OverdueLoan},
    params::{CreateLoan, ReturnLoan},
};

const INSERT_LOAN_SQL: &str = "INSERT INTO loans (borrow_date, due_date, reminder_date, isbn, friend_id) VALUES (?1, ?2, ?3, ?4, ?5)";
// Conditional write: claiming a book that is already out affects zero rows,
// which makes the availability gate atomic with the mutation.
const CLAIM_BOOK_SQL: &str = "UPDATE books SET in_stock = 0 WHERE isbn = ?1 AND in_stock = 1";
const RELEASE_BOOK_SQL: &str = "UPDATE books SET in_stock = 1 WHERE isbn = ?1";
const DECREMENT_QUOTA_SQL: &str =
    "UPDATE friends SET max_loans = max_loans - 1 WHERE friend_id = ?1";
const INCREMENT_QUOTA_SQL: &str =
    "UPDATE friends SET max_loans = max_loans + 1 WHERE friend_id = ?1";
const DELETE_LOAN_BY_PAIR_SQL: &str = "DELETE FROM loans WHERE isbn = ?1 AND friend_id = ?2";

const SELECT_BOOK_STOCK_SQL: &str = "SELECT in_stock FROM books WHERE isbn = ?1";
const SELECT_FRIEND_QUOTA_SQL: &str = "SELECT max_loans FROM friends WHERE friend_id = ?1";
const CHECK_LOAN_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM loans WHERE loan_id = ?1)";
const CLEAR_REMINDER_SQL: &str = "UPDATE loans SET reminder_date = NULL WHERE loan_id = ?1";

const LIST_LOANS_SQL: &str = "\
    SELECT l.loan_id, l.friend_id, f.first_name, f.last_name, l.borrow_date, l.due_date, \
           l.reminder_date, b.title, l.isbn \
    FROM loans l \
    JOIN books b ON l.isbn = b.isbn \
    JOIN friends f ON l.friend_id = f.friend_id \
    ORDER BY l.due_date";

const LIST_OVERDUE_SQL: &str = "\
    SELECT DISTINCT l.loan_id, l.due_date, l.friend_id, f.first_name, f.last_name, \
           b.title, l.isbn, c.kind, c.value \
    FROM loans l \
    JOIN books b ON l.isbn = b.isbn \
    JOIN friends f ON l.friend_id = f.friend_id \
    JOIN contacts c ON l.friend_id = c.friend_id \
    WHERE l.due_date < date('now')";

const LIST_REMINDERS_SQL: &str = "\
    SELECT DISTINCT l.loan_id, l.due_date, l.friend_id, f.first_name, f.last_name, \
           b.title, l.isbn, c.kind, c.value \
    FROM loans l \
    JOIN books b ON l.isbn = b.isbn \
    JOIN friends f ON l.friend_id = f.friend_id \
    JOIN contacts c ON l.friend_id = c.friend_id \
    WHERE l.reminder_date = date('now')";

const BORROWED_BOOKS_SQL: &str = "\
    SELECT l.isbn, b.title \
    FROM loans l \
    JOIN books b ON l.isbn = b.isbn \
    WHERE l.friend_id = ?1 \
    ORDER BY b.title";

const LOAN_FRIENDS_SQL: &str = "\
    SELECT DISTINCT f.friend_id, f.first_name, f.last_name, f.max_loans \
    FROM loans l \
    JOIN friends f ON l.friend_id = f.friend_id \
    ORDER BY f.first_name, f.last_name";

const COUNT_LOANS_SQL: &str = "SELECT COUNT(*) FROM loans";
const COUNT_OVERDUE_SQL: &str = "SELECT COUNT(*) FROM loans WHERE due_date < date('now')";

fn date_from_column(index: usize, value: String) -> rusqlite::Result<Date> {
    value
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn loan_record_from_row(row: &Row<'_>) -> rusqlite::Result<LoanRecord> {
    let reminder: Option<String> = row.get(6)?;
    Ok(LoanRecord {
        loan_id: row.get::<_, i64>(0)? as u64,
        friend_id: row.get::<_, i64>(1)? as u64,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        borrow_date: date_from_column(4, row.get(4)?)?,
        due_date: date_from_column(5, row.get(5)?)?,
        reminder_date: reminder.map(|s| date_from_column(6, s)).transpose()?,
        title: row.get(7)?,
        isbn: row.get(8)?,
    })
}

fn overdue_from_row(row: &Row<'_>) -> rusqlite::Result<OverdueLoan> {
    Ok(OverdueLoan {
        loan_id: row.get::<_, i64>(0)? as u64,
        due_date: date_from_column(1, row.get(1)?)?,
        friend_id: row.get::<_, i64>(2)? as u64,
        first_name: row.get(3)?,
        last_name: row.get(4)?,
        title: row.get(5)?,
        isbn: row.get(6)?,
        contact_kind: row.get(7)?,
        contact_value: row.get(8)?,
    })
}

impl super::Database {
    /// Lends a book to a friend.
    ///
    /// Preconditions are checked in order, each a hard stop: the friend must
    /// exist, the book must exist and be in stock, and the friend's remaining
    /// quota must be positive. On success the loan row, the book's stock
    /// flag, and the friend's quota all change in one transaction; on any
    /// failure nothing changes.
    pub fn create_loan(&mut self, loan: &CreateLoan) -> Result<Loan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let quota: Option<i64> = tx
            .query_row(SELECT_FRIEND_QUOTA_SQL, params![loan.friend_id as i64], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to query loan quota")?;
        let Some(quota) = quota else {
            return Err(LibraryError::FriendNotFound { id: loan.friend_id });
        };

        let in_stock: Option<i64> = tx
            .query_row(SELECT_BOOK_STOCK_SQL, params![loan.isbn], |row| row.get(0))
            .optional()
            .db_context("Failed to query book stock")?;
        let Some(in_stock) = in_stock else {
            return Err(LibraryError::BookNotFound {
                isbn: loan.isbn.clone(),
            });
        };
        if in_stock == 0 {
            return Err(LibraryError::BookUnavailable {
                isbn: loan.isbn.clone(),
            });
        }

        if quota <= 0 {
            return Err(LibraryError::QuotaExceeded { id: loan.friend_id });
        }

        tx.execute(
            INSERT_LOAN_SQL,
            params![
                loan.borrow_date.to_string(),
                loan.due_date.to_string(),
                loan.reminder_date.map(|d| d.to_string()),
                loan.isbn,
                loan.friend_id as i64,
            ],
        )
        .map_err(|e| LibraryError::database_error("Failed to insert loan", e))?;

        let loan_id = tx.last_insert_rowid() as u64;

        // The conditional claim re-checks availability atomically with the
        // flag flip, so a concurrent loan of the same ISBN cannot slip
        // between the pre-read above and this write.
        let claimed = tx
            .execute(CLAIM_BOOK_SQL, params![loan.isbn])
            .map_err(|e| LibraryError::database_error("Failed to update book stock", e))?;
        if claimed == 0 {
            return Err(LibraryError::BookUnavailable {
                isbn: loan.isbn.clone(),
            });
        }

        tx.execute(DECREMENT_QUOTA_SQL, params![loan.friend_id as i64])
            .map_err(|e| LibraryError::database_error("Failed to decrement loan quota", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Loan {
            id: loan_id,
            friend_id: loan.friend_id,
            isbn: loan.isbn.clone(),
            borrow_date: loan.borrow_date,
            due_date: loan.due_date,
            reminder_date: loan.reminder_date,
        })
    }

    /// Processes a returned book, identified by the (ISBN, friend) pair of
    /// its open loan.
    ///
    /// Deletes the loan row, puts the book back in stock, and restores the
    /// friend's quota, all in one transaction.
    pub fn return_loan(&mut self, ret: &ReturnLoan) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let deleted = tx
            .execute(
                DELETE_LOAN_BY_PAIR_SQL,
                params![ret.isbn, ret.friend_id as i64],
            )
            .map_err(|e| LibraryError::database_error("Failed to delete loan", e))?;
        if deleted == 0 {
            return Err(LibraryError::NoOpenLoan {
                isbn: ret.isbn.clone(),
                friend_id: ret.friend_id,
            });
        }

        tx.execute(RELEASE_BOOK_SQL, params![ret.isbn])
            .map_err(|e| LibraryError::database_error("Failed to update book stock", e))?;

        tx.execute(INCREMENT_QUOTA_SQL, params![ret.friend_id as i64])
            .map_err(|e| LibraryError::database_error("Failed to restore loan quota", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Clears the return reminder for a loan by nulling its reminder date.
    ///
    /// Idempotent: clearing an already-cleared reminder succeeds. Only an
    /// unknown loan ID is an error.
    pub fn clear_reminder(&mut self, loan_id: u64) -> Result<()> {
        let exists: bool = self
            .connection
            .query_row(CHECK_LOAN_EXISTS_SQL, params![loan_id as i64], |row| row.get(0))
            .db_context("Failed to check loan existence")?;
        if !exists {
            return Err(LibraryError::LoanNotFound { id: loan_id });
        }

        self.connection
            .execute(CLEAR_REMINDER_SQL, params![loan_id as i64])
            .map_err(|e| LibraryError::database_error("Failed to clear reminder", e))?;

        Ok(())
    }

    /// Whether a loan with the given ID exists.
    pub fn loan_exists(&self, loan_id: u64) -> Result<bool> {
        self.connection
            .query_row(CHECK_LOAN_EXISTS_SQL, params![loan_id as i64], |row| row.get(0))
            .db_context("Failed to check loan existence")
    }

    /// Lists all open loans joined with book title and friend name, ordered
    /// by due date.
    pub fn list_loans(&self) -> Result<Vec<LoanRecord>> {
        let mut stmt = self
            .connection
            .prepare(LIST_LOANS_SQL)
            .map_err(|e| LibraryError::database_error("Failed to prepare query", e))?;

        let loans = stmt
            .query_map([], loan_record_from_row)
            .map_err(|e| LibraryError::database_error("Failed to query loans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| LibraryError::database_error("Failed to fetch loans", e))?;

        Ok(loans)
    }

    /// Lists loans past their due date, joined with the borrower's contact
    /// entries for reminder dispatch.
    pub fn list_overdue(&self) -> Result<Vec<OverdueLoan>> {
        let mut stmt = self
            .connection
            .prepare(LIST_OVERDUE_SQL)
            .map_err(|e| LibraryError::database_error("Failed to prepare query", e))?;

        let overdue = stmt
            .query_map([], overdue_from_row)
            .map_err(|e| LibraryError::database_error("Failed to query overdue loans", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| LibraryError::database_error("Failed to fetch overdue loans", e))?;

        Ok(overdue)
    }

    /// Lists loans whose reminder date is today, joined with the borrower's
    /// contact entries.
    pub fn list_due_reminders(&self) -> Result<Vec<OverdueLoan>> {
        let mut stmt = self
            .connection
            .prepare(LIST_REMINDERS_SQL)
            .map_err(|e| LibraryError::database_error("Failed to prepare query", e))?;

        let due = stmt
            .query_map([], overdue_from_row)
            .map_err(|e| LibraryError::database_error("Failed to query reminders", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| LibraryError::database_error("Failed to fetch reminders", e))?;

        Ok(due)
    }

    /// Books currently held by a specific friend, for the return form.
    pub fn borrowed_books(&self, friend_id: u64) -> Result<Vec<BorrowedBook>> {
        let mut stmt = self
            .connection
            .prepare(BORROWED_BOOKS_SQL)
            .map_err(|e| LibraryError::database_error("Failed to prepare query", e))?;

        let books = stmt
            .query_map(params![friend_id as i64], |row| {
                Ok(BorrowedBook {
                    isbn: row.get(0)?,
                    title: row.get(1)?,
                })
            })
            .map_err(|e| LibraryError::database_error("Failed to query borrowed books", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| LibraryError::database_error("Failed to fetch borrowed books", e))?;

        Ok(books)
    }

    /// Distinct friends who currently hold at least one loan.
    pub fn loan_friends(&self) -> Result<Vec<Friend>> {
        let mut stmt = self
            .connection
            .prepare(LOAN_FRIENDS_SQL)
            .map_err(|e| LibraryError::database_error("Failed to prepare query", e))?;

        let friends = stmt
            .query_map([], |row| {
                Ok(Friend {
                    id: row.get::<_, i64>(0)? as u64,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    max_loans: row.get(3)?,
                    contacts: Vec::new(),
                })
            })
            .map_err(|e| LibraryError::database_error("Failed to query borrowers", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| LibraryError::database_error("Failed to fetch borrowers", e))?;

        Ok(friends)
    }

    /// Headline counts for the status overview.
    pub fn stats(&self) -> Result<LibraryStats> {
        let total_books = self.count_books()?;
        let books_on_loan: i64 = self
            .connection
            .query_row(COUNT_LOANS_SQL, [], |row| row.get(0))
            .db_context("Failed to count loans")?;
        let overdue_loans: i64 = self
            .connection
            .query_row(COUNT_OVERDUE_SQL, [], |row| row.get(0))
            .db_context("Failed to count overdue loans")?;

        Ok(LibraryStats {
            total_books,
            books_on_loan,
            overdue_loans,
        })
    }
}
