//! Configuration for locating the transaction database.

use std::path::{Path, PathBuf};

/// The database name used when none is configured.
pub const DEFAULT_DB_NAME: &str = "fintracker";

const DB_FILE_EXTENSION: &str = "db";

/// Where the transaction database lives.
///
/// The store is a single SQLite file, `<db_dir>/<db_name>.db`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    db_path: PathBuf,
}

impl StoreConfig {
    /// Create a config for the database named `db_name` in the directory `db_dir`.
    ///
    /// The `.db` extension is added unless `db_name` already has an extension.
    pub fn new(db_dir: impl AsRef<Path>, db_name: &str) -> Self {
        let file_name = Path::new(db_name);

        let db_path = if file_name.extension().is_some() {
            db_dir.as_ref().join(file_name)
        } else {
            db_dir
                .as_ref()
                .join(file_name.with_extension(DB_FILE_EXTENSION))
        };

        Self { db_path }
    }

    /// The path to the SQLite database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}
