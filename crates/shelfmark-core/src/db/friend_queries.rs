//! Directory CRUD operations: friends and their contact entries.

use rusqlite::{params, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, LibraryError, Result},
    models::{Contact, Friend},
    params::{AddContact, CreateFriend, UpdateFriend},
};

const FRIEND_COLUMNS: &str = "friend_id, first_name, last_name, max_loans";
const INSERT_FRIEND_SQL: &str =
    "INSERT INTO friends (first_name, last_name, max_loans) VALUES (?1, ?2, ?3)";
const UPDATE_FRIEND_SQL: &str =
    "UPDATE friends SET first_name = ?1, last_name = ?2, max_loans = ?3 WHERE friend_id = ?4";
const CHECK_FRIEND_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM friends WHERE friend_id = ?1)";
const SELECT_QUOTA_SQL: &str = "SELECT max_loans FROM friends WHERE friend_id = ?1";

const INSERT_CONTACT_SQL: &str = "INSERT INTO contacts (friend_id, kind, value) VALUES (?1, ?2, ?3)";
const SELECT_CONTACTS_SQL: &str =
    "SELECT contact_id, friend_id, kind, value FROM contacts WHERE friend_id = ?1";
const DELETE_CONTACT_SQL: &str = "DELETE FROM contacts WHERE contact_id = ?1";

// Cascade delete; children go first, and stock flags held by the friend's
// open loans are restored so the book invariant survives the cascade.
const RESTORE_FRIEND_STOCK_SQL: &str =
    "UPDATE books SET in_stock = 1 WHERE isbn IN (SELECT isbn FROM loans WHERE friend_id = ?1)";
const DELETE_FRIEND_CONTACTS_SQL: &str = "DELETE FROM contacts WHERE friend_id = ?1";
const DELETE_FRIEND_LOANS_SQL: &str = "DELETE FROM loans WHERE friend_id = ?1";
const DELETE_FRIEND_SQL: &str = "DELETE FROM friends WHERE friend_id = ?1";

fn friend_from_row(row: &Row<'_>) -> rusqlite::Result<Friend> {
    Ok(Friend {
        id: row.get::<_, i64>(0)? as u64,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        max_loans: row.get(3)?,
        contacts: Vec::new(),
    })
}

fn contact_from_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get::<_, i64>(0)? as u64,
        friend_id: row.get::<_, i64>(1)? as u64,
        kind: row.get(2)?,
        value: row.get(3)?,
    })
}

impl super::Database {
    /// Creates a new friend, optionally with an initial batch of contacts,
    /// in a single transaction.
    ///
    /// A contact whose kind or value is blank after trimming is silently
    /// dropped from the batch rather than rejected.
    pub fn create_friend(&mut self, friend: &CreateFriend) -> Result<Friend> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_FRIEND_SQL,
            params![friend.first_name, friend.last_name, friend.max_loans],
        )
        .map_err(|e| LibraryError::database_error("Failed to insert friend", e))?;

        let friend_id = tx.last_insert_rowid() as u64;

        let mut contacts = Vec::new();
        for entry in friend.contacts.iter().filter(|c| c.is_valid()) {
            let kind = entry.kind.trim();
            let value = entry.value.trim();
            tx.execute(INSERT_CONTACT_SQL, params![friend_id as i64, kind, value])
                .map_err(|e| LibraryError::database_error("Failed to insert contact", e))?;
            contacts.push(Contact {
                id: tx.last_insert_rowid() as u64,
                friend_id,
                kind: kind.to_string(),
                value: value.to_string(),
            });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Friend {
            id: friend_id,
            first_name: friend.first_name.clone(),
            last_name: friend.last_name.clone(),
            max_loans: friend.max_loans,
            contacts,
        })
    }

    /// Retrieves a friend by ID, with contact entries eagerly loaded.
    pub fn get_friend(&self, id: u64) -> Result<Option<Friend>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {FRIEND_COLUMNS} FROM friends WHERE friend_id = ?1"
            ))
            .map_err(|e| LibraryError::database_error("Failed to prepare query", e))?;

        let mut friend = stmt
            .query_row(params![id as i64], friend_from_row)
            .optional()
            .map_err(|e| LibraryError::database_error("Failed to query friend", e))?;

        if let Some(ref mut friend) = friend {
            friend.contacts = self.get_contacts(friend.id)?;
        }

        Ok(friend)
    }

    /// Lists all friends ordered by first then last name. Contacts are not
    /// loaded; use [`Self::get_contacts`] or [`Self::search_friends`].
    pub fn list_friends(&self) -> Result<Vec<Friend>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {FRIEND_COLUMNS} FROM friends ORDER BY first_name, last_name"
            ))
            .map_err(|e| LibraryError::database_error("Failed to prepare query", e))?;

        let friends = stmt
            .query_map([], friend_from_row)
            .map_err(|e| LibraryError::database_error("Failed to query friends", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| LibraryError::database_error("Failed to fetch friends", e))?;

        Ok(friends)
    }

    /// Searches friends by name substring, with contact entries loaded for
    /// each match.
    pub fn search_friends(&self, name: &str) -> Result<Vec<Friend>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {FRIEND_COLUMNS} FROM friends WHERE first_name LIKE ?1 OR last_name LIKE ?1 ORDER BY first_name, last_name"
            ))
            .map_err(|e| LibraryError::database_error("Failed to prepare query", e))?;

        let pattern = format!("%{name}%");
        let mut friends = stmt
            .query_map(params![pattern], friend_from_row)
            .map_err(|e| LibraryError::database_error("Failed to search friends", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| LibraryError::database_error("Failed to fetch friends", e))?;

        for friend in &mut friends {
            friend.contacts = self.get_contacts(friend.id)?;
        }

        Ok(friends)
    }

    /// Updates a friend's details. Returns `false` when the ID is unknown.
    pub fn update_friend(&mut self, friend: &UpdateFriend) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(
                UPDATE_FRIEND_SQL,
                params![
                    friend.first_name,
                    friend.last_name,
                    friend.max_loans,
                    friend.id as i64,
                ],
            )
            .map_err(|e| LibraryError::database_error("Failed to update friend", e))?;

        Ok(rows_affected > 0)
    }

    /// Attaches a new contact entry to an existing friend.
    pub fn add_contact(&mut self, contact: &AddContact) -> Result<Contact> {
        if contact.kind.trim().is_empty() {
            return Err(LibraryError::invalid_input(
                "kind",
                "Contact type must not be blank",
            ));
        }
        if contact.value.trim().is_empty() {
            return Err(LibraryError::invalid_input(
                "value",
                "Contact value must not be blank",
            ));
        }

        let exists: bool = self
            .connection
            .query_row(CHECK_FRIEND_EXISTS_SQL, params![contact.friend_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check friend existence")?;
        if !exists {
            return Err(LibraryError::FriendNotFound {
                id: contact.friend_id,
            });
        }

        let kind = contact.kind.trim();
        let value = contact.value.trim();
        self.connection
            .execute(
                INSERT_CONTACT_SQL,
                params![contact.friend_id as i64, kind, value],
            )
            .map_err(|e| LibraryError::database_error("Failed to insert contact", e))?;

        Ok(Contact {
            id: self.connection.last_insert_rowid() as u64,
            friend_id: contact.friend_id,
            kind: kind.to_string(),
            value: value.to_string(),
        })
    }

    /// Deletes a single contact entry.
    pub fn delete_contact(&mut self, contact_id: u64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_CONTACT_SQL, params![contact_id as i64])
            .map_err(|e| LibraryError::database_error("Failed to delete contact", e))?;

        if rows_affected == 0 {
            return Err(LibraryError::ContactNotFound { id: contact_id });
        }

        Ok(())
    }

    /// Fetches all contact entries for a friend.
    pub fn get_contacts(&self, friend_id: u64) -> Result<Vec<Contact>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CONTACTS_SQL)
            .map_err(|e| LibraryError::database_error("Failed to prepare query", e))?;

        let contacts = stmt
            .query_map(params![friend_id as i64], contact_from_row)
            .map_err(|e| LibraryError::database_error("Failed to query contacts", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| LibraryError::database_error("Failed to fetch contacts", e))?;

        Ok(contacts)
    }

    /// Returns the friend's remaining loan quota, or `None` when the friend
    /// does not exist.
    pub fn get_remaining_quota(&self, friend_id: u64) -> Result<Option<i64>> {
        self.connection
            .query_row(SELECT_QUOTA_SQL, params![friend_id as i64], |row| row.get(0))
            .optional()
            .db_context("Failed to query loan quota")
    }

    /// Permanently deletes a friend together with all of their contacts and
    /// loans, in one transaction.
    ///
    /// Books held by the friend's open loans are put back in stock as part of
    /// the cascade, so no book is left marked on-loan with no loan row.
    pub fn delete_friend(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_FRIEND_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check friend existence")?;
        if !exists {
            return Err(LibraryError::FriendNotFound { id });
        }

        tx.execute(RESTORE_FRIEND_STOCK_SQL, params![id as i64])
            .map_err(|e| LibraryError::database_error("Failed to restore stock flags", e))?;

        tx.execute(DELETE_FRIEND_CONTACTS_SQL, params![id as i64])
            .map_err(|e| LibraryError::database_error("Failed to delete friend contacts", e))?;

        tx.execute(DELETE_FRIEND_LOANS_SQL, params![id as i64])
            .map_err(|e| LibraryError::database_error("Failed to delete friend loans", e))?;

        tx.execute(DELETE_FRIEND_SQL, params![id as i64])
            .map_err(|e| LibraryError::database_error("Failed to delete friend", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
