//! Defines the transaction store trait.

use rust_decimal::Decimal;

use crate::{
    Error,
    transaction::{
        RowsAffected, Transaction, TransactionBuilder, TransactionId, TransactionKind,
        TransactionQuery,
    },
};

/// Handles the creation, retrieval and aggregation of transactions.
///
/// Write operations report failures to the caller. Read operations never
/// fail: if the store cannot be reached they log the error and return an
/// empty list or zero.
pub trait TransactionStore {
    /// Create the `transactions` table if it does not already exist.
    fn ensure_schema(&self) -> Result<(), Error>;

    /// Add a new transaction to the store and return its generated ID.
    fn insert(&self, builder: TransactionBuilder) -> Result<TransactionId, Error>;

    /// Retrieve the transactions selected by `query`, in the order it asks for.
    fn list(&self, query: &TransactionQuery) -> Vec<Transaction>;

    /// Replace every field of the transaction `id`, keeping its ID.
    ///
    /// Returns the number of rows changed, zero if `id` does not exist.
    fn update(
        &self,
        id: &TransactionId,
        builder: TransactionBuilder,
    ) -> Result<RowsAffected, Error>;

    /// Remove the transaction `id`.
    ///
    /// Returns the number of rows removed, zero if `id` does not exist.
    fn delete(&self, id: &TransactionId) -> Result<RowsAffected, Error>;

    /// The number of transactions in the store.
    fn count_all(&self) -> u64;

    /// The total amount of all transactions of `kind`.
    fn sum_by_kind(&self, kind: TransactionKind) -> Decimal;

    /// Total revenue minus total expenses.
    fn net_income(&self) -> Decimal {
        self.sum_by_kind(TransactionKind::Revenue) - self.sum_by_kind(TransactionKind::Expense)
    }
}
