//! Implements a struct that holds the state of the web server.

use axum::extract::FromRef;

use crate::{Error, SQLiteTransactionStore, StoreConfig, TransactionStore};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The gateway to the transactions database.
    pub transaction_store: SQLiteTransactionStore,
}

impl AppState {
    /// Create a new [AppState] for the database described by `config`.
    ///
    /// This function will create the `transactions` table if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new(config: StoreConfig) -> Result<Self, Error> {
        let transaction_store = SQLiteTransactionStore::new(config);
        transaction_store.ensure_schema()?;

        Ok(Self { transaction_store })
    }
}

impl FromRef<AppState> for SQLiteTransactionStore {
    fn from_ref(state: &AppState) -> Self {
        state.transaction_store.clone()
    }
}
