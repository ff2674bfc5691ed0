//! Directory operations for the Library.

use log::debug;
use tokio::task;

use super::Library;
use crate::{
    db::Database,
    error::{LibraryError, Result},
    models::{Contact, Friend},
    params::{AddContact, CreateFriend, Id, UpdateFriend},
};

impl Library {
    /// Creates a new friend, optionally with an initial contact batch, in a
    /// single transaction. Returns the created friend with its generated ID.
    pub async fn create_friend(&self, params: &CreateFriend) -> Result<Friend> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        debug!(
            "Adding friend {} {} to directory",
            params.first_name, params.last_name
        );
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_friend(&params)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a friend by ID, with contacts loaded.
    pub async fn get_friend(&self, params: &Id) -> Result<Option<Friend>> {
        let db_path = self.db_path.clone();
        let friend_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_friend(friend_id)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all friends ordered by first then last name.
    pub async fn list_friends(&self) -> Result<Vec<Friend>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_friends()
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Searches friends by name substring, contacts included per match.
    pub async fn search_friends(&self, name: &str) -> Result<Vec<Friend>> {
        let db_path = self.db_path.clone();
        let name = name.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.search_friends(&name)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Updates a friend's details. Returns `false` when the ID is unknown.
    pub async fn update_friend(&self, params: &UpdateFriend) -> Result<bool> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_friend(&params)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Attaches a contact entry to an existing friend.
    pub async fn add_contact(&self, params: &AddContact) -> Result<Contact> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_contact(&params)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes a single contact entry.
    pub async fn delete_contact(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let contact_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_contact(contact_id)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Fetches all contact entries for a friend.
    pub async fn get_contacts(&self, params: &Id) -> Result<Vec<Contact>> {
        let db_path = self.db_path.clone();
        let friend_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_contacts(friend_id)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Returns the friend's remaining loan quota, or `None` when unknown.
    pub async fn get_remaining_quota(&self, params: &Id) -> Result<Option<i64>> {
        let db_path = self.db_path.clone();
        let friend_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_remaining_quota(friend_id)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a friend and cascades to their contacts and
    /// loans. This operation cannot be undone.
    pub async fn delete_friend(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let friend_id = params.id;

        debug!("Deleting friend {friend_id} and dependents");
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_friend(friend_id)
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
