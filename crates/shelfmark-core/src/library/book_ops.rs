//! Catalog operations for the Library.

use log::debug;
use tokio::task;

use super::Library;
use crate::{
    db::Database,
    error::{LibraryError, Result},
    models::{Book, BookFilter, LibraryStats},
    params::{CreateBook, UpdateBook},
};

impl Library {
    /// Adds a new book to the catalog. Fails with `DuplicateIsbn` when the
    /// ISBN is already present.
    pub async fn create_book(&self, params: &CreateBook) -> Result<Book> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        debug!("Adding book {} to catalog", params.isbn);
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_book(&params)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a book by its ISBN.
    pub async fn get_book(&self, isbn: &str) -> Result<Option<Book>> {
        let db_path = self.db_path.clone();
        let isbn = isbn.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_book(&isbn)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists books ordered by title, with optional filtering.
    pub async fn list_books(&self, filter: Option<BookFilter>) -> Result<Vec<Book>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_books(filter.as_ref())
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Updates a book's mutable fields. Returns `false` when the ISBN is not
    /// in the catalog.
    pub async fn update_book(&self, params: &UpdateBook) -> Result<bool> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_book(&params)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes a book from the catalog. Fails with `BookOnLoan` while an
    /// open loan references it.
    pub async fn delete_book(&self, isbn: &str) -> Result<()> {
        let db_path = self.db_path.clone();
        let isbn = isbn.to_string();

        debug!("Deleting book {isbn} from catalog");
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_book(&isbn)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Headline counts for the status overview.
    pub async fn stats(&self) -> Result<LibraryStats> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.stats()
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
