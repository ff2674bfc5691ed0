//! Builder for creating and configuring Library instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Library;
use crate::{
    db::Database,
    error::{LibraryError, Result},
};

/// Builder for creating and configuring Library instances.
///
/// Building validates that the backing store can actually be opened, so a
/// successful build is the "login succeeded" signal: the returned [`Library`]
/// is a live, reusable handle. A failed build yields a message that
/// distinguishes an unreachable/unopenable store from other failures.
#[derive(Debug, Clone)]
pub struct LibraryBuilder {
    database_path: Option<PathBuf>,
}

impl LibraryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/shelfmark/library.db` or
    /// `~/.local/share/shelfmark/library.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured library instance, probing the store once.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::FileSystem` if the database path is invalid
    /// Returns `LibraryError::Database` if the store cannot be opened
    pub async fn build(self) -> Result<Library> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| LibraryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), LibraryError>(())
        })
        .await
        .map_err(|e| LibraryError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Library::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("shelfmark")
            .place_data_file("library.db")
            .map_err(|e| LibraryError::XdgDirectory(e.to_string()))
    }
}

impl Default for LibraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
