//! Defines the core data models and database queries for transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Connection, Row, ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// The number of rows changed by an update or delete.
///
/// Zero means no transaction had the given ID, which is not treated as an error.
pub type RowsAffected = usize;

/// The unique, opaque ID of a transaction.
///
/// IDs are random UUIDs minted when a transaction is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Mint a new random ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ToSql for TransactionId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for TransactionId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        String::column_result(value).map(Self)
    }
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money earned.
    Revenue,
    /// Money spent.
    Expense,
}

impl TransactionKind {
    /// The name stored in the `type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Revenue => "Revenue",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Revenue" => Ok(TransactionKind::Revenue),
            "Expense" => Ok(TransactionKind::Expense),
            other => Err(Error::InvalidTransactionKind(other.to_owned())),
        }
    }
}

impl ToSql for TransactionKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
    }
}

/// A revenue or expense record, i.e. an event where the business either
/// earned or spent money.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// A free-form note about what the transaction was for.
    pub description: Option<String>,
    /// The amount of money earned or spent, with two fractional digits.
    pub amount: Decimal,
    /// Whether the money was earned or spent.
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: Decimal, date: Date, kind: TransactionKind) -> TransactionBuilder {
        TransactionBuilder {
            date,
            description: None,
            amount,
            kind,
        }
    }
}

/// The fields of a [Transaction] that a caller supplies, i.e. everything but the ID.
///
/// Used both to insert new transactions and to replace the fields of an
/// existing one.
///
/// # Examples
///
/// ```
/// use fintracker::{Transaction, TransactionKind};
/// use rust_decimal::Decimal;
/// use time::macros::date;
///
/// let builder = Transaction::build(
///         Decimal::new(150000, 2),
///         date!(2024 - 01 - 05),
///         TransactionKind::Revenue,
///     )
///     .description("Consulting");
///
/// assert_eq!(builder.description.as_deref(), Some("Consulting"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    /// When the transaction happened.
    pub date: Date,
    /// An optional note about the transaction.
    pub description: Option<String>,
    /// The amount of money. Stored rounded to two decimal places.
    pub amount: Decimal,
    /// Whether the money was earned or spent.
    pub kind: TransactionKind,
}

impl TransactionBuilder {
    /// Set the description for the transaction.
    ///
    /// Blank descriptions are stored as NULL. Any other text is stored as given.
    pub fn description(mut self, description: &str) -> Self {
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description.to_owned())
        };

        self
    }
}

// ============================================================================
// AMOUNTS
// ============================================================================

/// Round `amount` to cents and check that it fits in `DECIMAL(10, 2)`.
///
/// # Errors
/// Returns [Error::AmountOutOfRange] if the rounded amount has more than
/// eight integer digits.
pub(crate) fn to_column_amount(amount: Decimal) -> Result<Decimal, Error> {
    let rounded = with_cents(amount);

    if rounded.abs() >= Decimal::new(100_000_000, 0) {
        return Err(Error::AmountOutOfRange(amount));
    }

    Ok(rounded)
}

fn with_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

// SQLite gives DECIMAL columns NUMERIC affinity, so an amount comes back as an
// INTEGER or REAL depending on whether it had cents.
fn amount_from_sql(value: ValueRef<'_>) -> FromSqlResult<Decimal> {
    let amount = match value {
        ValueRef::Integer(integer) => Decimal::from(integer),
        ValueRef::Real(real) => Decimal::from_str(&real.to_string())
            .map_err(|error| FromSqlError::Other(Box::new(error)))?,
        ValueRef::Text(_) => Decimal::from_str(value.as_str()?)
            .map_err(|error| FromSqlError::Other(Box::new(error)))?,
        _ => return Err(FromSqlError::InvalidType),
    };

    Ok(with_cents(amount))
}

/// Read the amount in column `index` of `row` as an exact decimal.
pub(crate) fn get_amount(row: &Row, index: usize) -> Result<Decimal, rusqlite::Error> {
    let value = row.get_ref(index)?;

    amount_from_sql(value).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(index, value.data_type(), Box::new(error))
    })
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transactions table in the database if it does not exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                transaction_id VARCHAR(255) PRIMARY KEY,
                transaction_date DATE NOT NULL,
                description TEXT,
                amount DECIMAL(10, 2) NOT NULL,
                type VARCHAR(20) -- 'Revenue' or 'Expense'
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
///
/// Expects the columns `transaction_id, transaction_date, description, amount, type`.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let description = row.get(2)?;
    let amount = get_amount(row, 3)?;
    let kind = row.get(4)?;

    Ok(Transaction {
        id,
        date,
        description,
        amount,
        kind,
    })
}

/// Create a new transaction in the database with a freshly minted ID.
///
/// # Errors
/// This function will return a:
/// - [Error::AmountOutOfRange] if the amount does not fit in the amount column,
/// - or [Error::DuplicateTransactionId] if the minted ID is already taken,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<TransactionId, Error> {
    insert_transaction_with_id(TransactionId::generate(), builder, connection)
}

fn insert_transaction_with_id(
    id: TransactionId,
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<TransactionId, Error> {
    let amount = to_column_amount(builder.amount)?;

    connection.execute(
        "INSERT INTO transactions (transaction_id, transaction_date, description, amount, type)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        (
            &id,
            builder.date,
            builder.description,
            amount.to_string(),
            builder.kind,
        ),
    )?;

    Ok(id)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
#[cfg(test)]
pub fn get_transaction(
    id: &TransactionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT transaction_id, transaction_date, description, amount, type
             FROM transactions WHERE transaction_id = :id",
        )?
        .query_row(&[(":id", id)], map_transaction_row)?;

    Ok(transaction)
}

/// Replace the date, description, amount and kind of the transaction `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::AmountOutOfRange] if the amount does not fit in the amount column,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_transaction(
    id: &TransactionId,
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    let amount = to_column_amount(builder.amount)?;

    connection
        .execute(
            "UPDATE transactions
             SET transaction_date = ?1, description = ?2, amount = ?3, type = ?4
             WHERE transaction_id = ?5",
            (
                builder.date,
                builder.description,
                amount.to_string(),
                builder.kind,
                id,
            ),
        )
        .map_err(|error| error.into())
}

/// Delete the transaction `id`.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is some SQL error.
pub fn delete_transaction(
    id: &TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM transactions WHERE transaction_id = :id",
            &[(":id", id)],
        )
        .map_err(|error| error.into())
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u64, Error> {
    let count: i64 =
        connection.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;

    // COUNT(*) is never negative.
    Ok(count.unsigned_abs())
}

/// Get the exact sum of the amounts of all transactions of `kind`.
///
/// Returns zero if there are no transactions of `kind`.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn sum_transactions_by_kind(
    kind: TransactionKind,
    connection: &Connection,
) -> Result<Decimal, Error> {
    // SQLite's SUM accumulates REAL values as floats, so the amounts are added
    // up here as decimals instead.
    connection
        .prepare("SELECT amount FROM transactions WHERE type = :kind")?
        .query_map(&[(":kind", &kind)], |row| get_amount(row, 0))?
        .try_fold(Decimal::ZERO, |total, amount| Ok(total + amount?))
}

// ============================================================================
// TESTS
// ============================================================================
