//! Catalog CRUD operations and queries.

use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, LibraryError, Result},
    models::{Book, BookFilter, Condition, ShelfLocation, StockFilter},
    params::{CreateBook, UpdateBook},
};

// SQL as const strings, grouped per operation
const BOOK_COLUMNS: &str =
    "isbn, title, author, genre, condition, shelf_location, shelf_row, in_stock";
const INSERT_BOOK_SQL: &str = "INSERT INTO books (isbn, title, author, genre, condition, shelf_location, shelf_row, in_stock) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1)";
const UPDATE_BOOK_SQL: &str = "UPDATE books SET title = ?1, author = ?2, genre = ?3, condition = ?4, shelf_location = ?5, shelf_row = ?6 WHERE isbn = ?7";
const DELETE_BOOK_SQL: &str = "DELETE FROM books WHERE isbn = ?1";
const CHECK_BOOK_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM books WHERE isbn = ?1)";
const CHECK_BOOK_ON_LOAN_SQL: &str = "SELECT EXISTS(SELECT 1 FROM loans WHERE isbn = ?1)";
const COUNT_BOOKS_SQL: &str = "SELECT COUNT(*) FROM books";

/// Decodes a catalog row into a [`Book`], converting the stored enum strings.
fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    let condition_str: String = row.get(4)?;
    let condition = condition_str.parse::<Condition>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid book condition: {condition_str}"),
            )),
        )
    })?;

    let location_str: String = row.get(5)?;
    let shelf_location = location_str.parse::<ShelfLocation>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid shelf location: {location_str}"),
            )),
        )
    })?;

    Ok(Book {
        isbn: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        genre: row.get(3)?,
        condition,
        shelf_location,
        shelf_row: row.get::<_, i64>(6)? as u8,
        in_stock: row.get::<_, i64>(7)? != 0,
    })
}

impl super::Database {
    /// Adds a new book to the catalog.
    ///
    /// The ISBN is probed for existence before the insert so a duplicate is
    /// reported as [`LibraryError::DuplicateIsbn`], never as a raw constraint
    /// failure.
    pub fn create_book(&mut self, book: &CreateBook) -> Result<Book> {
        if !(1..=3).contains(&book.shelf_row) {
            return Err(LibraryError::invalid_input(
                "shelf_row",
                "Shelf row must be between 1 and 3",
            ));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_BOOK_EXISTS_SQL, params![book.isbn], |row| row.get(0))
            .db_context("Failed to check book existence")?;
        if exists {
            return Err(LibraryError::DuplicateIsbn {
                isbn: book.isbn.clone(),
            });
        }

        tx.execute(
            INSERT_BOOK_SQL,
            params![
                book.isbn,
                book.title,
                book.author,
                book.genre,
                book.condition.as_str(),
                book.shelf_location.as_str(),
                book.shelf_row as i64,
            ],
        )
        .map_err(|e| LibraryError::database_error("Failed to insert book", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Book {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            condition: book.condition,
            shelf_location: book.shelf_location,
            shelf_row: book.shelf_row,
            in_stock: true,
        })
    }

    /// Retrieves a book by its ISBN.
    pub fn get_book(&self, isbn: &str) -> Result<Option<Book>> {
        let mut stmt = self
            .connection
            .prepare(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE isbn = ?1"))
            .map_err(|e| LibraryError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![isbn], book_from_row)
            .optional()
            .map_err(|e| LibraryError::database_error("Failed to query book", e))
    }

    /// Lists books ordered by title, with optional filtering on
    /// title/author/ISBN substring, genre, and stock status.
    pub fn list_books(&self, filter: Option<&BookFilter>) -> Result<Vec<Book>> {
        let mut query = format!("SELECT {BOOK_COLUMNS} FROM books");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref text) = f.text {
                conditions.push("(title LIKE ? OR author LIKE ? OR isbn LIKE ?)");
                let pattern = format!("%{text}%");
                params_vec.push(Box::new(pattern.clone()));
                params_vec.push(Box::new(pattern.clone()));
                params_vec.push(Box::new(pattern));
            }

            if let Some(ref genre) = f.genre {
                conditions.push("genre = ?");
                params_vec.push(Box::new(genre.clone()));
            }

            match f.stock {
                StockFilter::All => {}
                StockFilter::InStock => conditions.push("in_stock = 1"),
                StockFilter::OnLoan => conditions.push("in_stock = 0"),
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY title");

        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| LibraryError::database_error("Failed to prepare query", e))?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let books = stmt
            .query_map(&params_refs[..], book_from_row)
            .map_err(|e| LibraryError::database_error("Failed to query books", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| LibraryError::database_error("Failed to fetch books", e))?;

        Ok(books)
    }

    /// Updates a book's mutable fields. Returns `false` (a no-op, not an
    /// error) when the ISBN is not present in the catalog.
    pub fn update_book(&mut self, book: &UpdateBook) -> Result<bool> {
        if !(1..=3).contains(&book.shelf_row) {
            return Err(LibraryError::invalid_input(
                "shelf_row",
                "Shelf row must be between 1 and 3",
            ));
        }

        let rows_affected = self
            .connection
            .execute(
                UPDATE_BOOK_SQL,
                params![
                    book.title,
                    book.author,
                    book.genre,
                    book.condition.as_str(),
                    book.shelf_location.as_str(),
                    book.shelf_row as i64,
                    book.isbn,
                ],
            )
            .map_err(|e| LibraryError::database_error("Failed to update book", e))?;

        Ok(rows_affected > 0)
    }

    /// Removes a book from the catalog.
    ///
    /// Fails with [`LibraryError::BookOnLoan`] while an open loan references
    /// the ISBN; the loan must be returned first.
    pub fn delete_book(&mut self, isbn: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_BOOK_EXISTS_SQL, params![isbn], |row| row.get(0))
            .db_context("Failed to check book existence")?;
        if !exists {
            return Err(LibraryError::BookNotFound {
                isbn: isbn.to_string(),
            });
        }

        let on_loan: bool = tx
            .query_row(CHECK_BOOK_ON_LOAN_SQL, params![isbn], |row| row.get(0))
            .db_context("Failed to check open loans")?;
        if on_loan {
            return Err(LibraryError::BookOnLoan {
                isbn: isbn.to_string(),
            });
        }

        tx.execute(DELETE_BOOK_SQL, params![isbn])
            .map_err(|e| LibraryError::database_error("Failed to delete book", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Counts all books in the catalog.
    pub fn count_books(&self) -> Result<i64> {
        self.connection
            .query_row(COUNT_BOOKS_SQL, [], |row| row.get(0))
            .db_context("Failed to count books")
    }
}
