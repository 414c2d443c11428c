//! Implements a SQLite backed transaction store.

use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::{
    Error,
    config::StoreConfig,
    db::initialize,
    stores::TransactionStore,
    transaction::{
        RowsAffected, Transaction, TransactionBuilder, TransactionId, TransactionKind,
        TransactionQuery, count_transactions, create_transaction, delete_transaction,
        get_transactions, sum_transactions_by_kind, update_transaction,
    },
};

/// Stores transactions in a SQLite database file.
///
/// Every operation opens its own connection and closes it before returning,
/// so the store holds no open handles between calls.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    config: StoreConfig,
}

impl SQLiteTransactionStore {
    /// Create a store for the database described by `config`.
    ///
    /// The database is not opened until the first operation.
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Open a connection to the database file.
    ///
    /// # Errors
    /// Returns an [Error::ConnectionError] if the file cannot be opened or created.
    fn connect(&self) -> Result<Connection, Error> {
        let path = self.config.db_path();

        Connection::open(path)
            .map_err(|error| Error::ConnectionError(path.display().to_string(), error))
    }

    fn try_list(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, Error> {
        get_transactions(query, &self.connect()?)
    }

    fn try_count_all(&self) -> Result<u64, Error> {
        count_transactions(&self.connect()?)
    }

    fn try_sum_by_kind(&self, kind: TransactionKind) -> Result<Decimal, Error> {
        sum_transactions_by_kind(kind, &self.connect()?)
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create the `transactions` table if it does not already exist.
    ///
    /// # Errors
    /// Returns an [Error::ConnectionError] if the database cannot be opened,
    /// or an [Error::SqlError] if the table could not be created.
    fn ensure_schema(&self) -> Result<(), Error> {
        let connection = self.connect()?;
        initialize(&connection)?;

        tracing::debug!("Transaction schema is ready in {}", self.config.db_path().display());
        Ok(())
    }

    /// Insert a new transaction and commit it.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::ConnectionError] if the database cannot be opened,
    /// - [Error::AmountOutOfRange] if the amount does not fit in the amount column,
    /// - [Error::DuplicateTransactionId] if the generated ID is already taken,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// Nothing is written if an error is returned.
    fn insert(&self, builder: TransactionBuilder) -> Result<TransactionId, Error> {
        let mut connection = self.connect()?;
        let sql_transaction = connection.transaction()?;

        let id = create_transaction(builder, &sql_transaction)?;
        sql_transaction.commit()?;

        tracing::info!("Added transaction {id}");
        Ok(id)
    }

    /// Get the transactions selected by `query`.
    ///
    /// Returns an empty list if the database cannot be read.
    fn list(&self, query: &TransactionQuery) -> Vec<Transaction> {
        self.try_list(query)
            .inspect_err(|error| tracing::error!("Could not list transactions: {error}"))
            .unwrap_or_default()
    }

    /// Overwrite the transaction `id` and commit the change.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::ConnectionError] if the database cannot be opened,
    /// - [Error::AmountOutOfRange] if the amount does not fit in the amount column,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn update(
        &self,
        id: &TransactionId,
        builder: TransactionBuilder,
    ) -> Result<RowsAffected, Error> {
        let mut connection = self.connect()?;
        let sql_transaction = connection.transaction()?;

        let rows_affected = update_transaction(id, builder, &sql_transaction)?;
        sql_transaction.commit()?;

        if rows_affected == 0 {
            tracing::warn!("Tried to update transaction {id} but it does not exist");
        } else {
            tracing::info!("Updated transaction {id}");
        }

        Ok(rows_affected)
    }

    /// Delete the transaction `id` and commit the change.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::ConnectionError] if the database cannot be opened,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn delete(&self, id: &TransactionId) -> Result<RowsAffected, Error> {
        let mut connection = self.connect()?;
        let sql_transaction = connection.transaction()?;

        let rows_affected = delete_transaction(id, &sql_transaction)?;
        sql_transaction.commit()?;

        if rows_affected == 0 {
            tracing::warn!("Tried to delete transaction {id} but it does not exist");
        } else {
            tracing::info!("Deleted transaction {id}");
        }

        Ok(rows_affected)
    }

    /// Count all transactions, or zero if the database cannot be read.
    fn count_all(&self) -> u64 {
        self.try_count_all()
            .inspect_err(|error| tracing::error!("Could not count transactions: {error}"))
            .unwrap_or_default()
    }

    /// Sum the amounts of all transactions of `kind`, or zero if the database
    /// cannot be read.
    fn sum_by_kind(&self, kind: TransactionKind) -> Decimal {
        self.try_sum_by_kind(kind)
            .inspect_err(|error| tracing::error!("Could not sum {kind} transactions: {error}"))
            .unwrap_or_default()
    }

    /// Total revenue minus total expenses.
    ///
    /// Returns zero if either total cannot be read, rather than a figure built
    /// from one real total and one fallback.
    fn net_income(&self) -> Decimal {
        let totals = self
            .try_sum_by_kind(TransactionKind::Revenue)
            .and_then(|revenue| {
                self.try_sum_by_kind(TransactionKind::Expense)
                    .map(|expenses| revenue - expenses)
            });

        totals
            .inspect_err(|error| tracing::error!("Could not calculate net income: {error}"))
            .unwrap_or_default()
    }
}
