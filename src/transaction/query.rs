//! Filtering and sorting for transaction listings.
//!
//! Sort fields and directions are closed enums that map to fixed SQL tokens,
//! so text from a request is never spliced into a query. Text that does not
//! name a known option falls back to the default (newest first).

use rusqlite::Connection;

use crate::Error;

use super::core::{Transaction, TransactionKind, map_transaction_row};

/// The column to sort transactions by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    /// Sort by the date the transaction happened.
    #[default]
    Date,
    /// Sort by the transaction amount.
    Amount,
}

impl SortField {
    /// Parse a sort field from user input, falling back to [SortField::Date].
    pub fn parse_or_default(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "date" | "transaction_date" => SortField::Date,
            "amount" => SortField::Amount,
            _ => SortField::default(),
        }
    }

    /// The value used for this field in query strings.
    pub fn as_param(self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Amount => "amount",
        }
    }

    fn column(self) -> &'static str {
        match self {
            SortField::Date => "transaction_date",
            SortField::Amount => "amount",
        }
    }
}

/// The order to sort transactions in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Sort in order of increasing value.
    Ascending,
    /// Sort in order of decreasing value.
    #[default]
    Descending,
}

impl SortOrder {
    /// Parse a sort order from user input, falling back to [SortOrder::Descending].
    pub fn parse_or_default(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => SortOrder::Ascending,
            "desc" | "descending" => SortOrder::Descending,
            _ => SortOrder::default(),
        }
    }

    /// The value used for this order in query strings.
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// Defines which transactions to list and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransactionQuery {
    /// Only include transactions of this kind. `None` includes all transactions.
    pub kind: Option<TransactionKind>,
    /// The column to sort by.
    pub sort_field: SortField,
    /// The direction to sort in.
    pub sort_order: SortOrder,
}

impl TransactionQuery {
    /// Build a query from raw request parameters.
    ///
    /// Missing or unrecognised values are replaced with the defaults: all
    /// kinds, sorted by date, newest first. A `kind` of "All" means no filter.
    pub fn from_params(
        kind: Option<&str>,
        sort_field: Option<&str>,
        sort_order: Option<&str>,
    ) -> Self {
        Self {
            kind: kind.and_then(|kind| kind.trim().parse().ok()),
            sort_field: sort_field.map(SortField::parse_or_default).unwrap_or_default(),
            sort_order: sort_order.map(SortOrder::parse_or_default).unwrap_or_default(),
        }
    }
}

/// Get the transactions matching `query`.
///
/// Rows with equal sort keys are returned in the order they were inserted.
/// Rows whose values cannot be read as a [Transaction], e.g. a NULL or unknown
/// `type`, are logged and left out.
///
/// # Errors
/// Returns [Error::SqlError] if SQL query preparation or execution fails.
pub fn get_transactions(
    query: &TransactionQuery,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let sql = format!(
        "SELECT transaction_id, transaction_date, description, amount, type FROM transactions \
        WHERE :kind IS NULL OR type = :kind \
        ORDER BY {} {}, rowid ASC",
        query.sort_field.column(),
        query.sort_order.keyword(),
    );

    let mut statement = connection.prepare(&sql)?;
    let rows = statement.query_map(&[(":kind", &query.kind)], map_transaction_row)?;

    let mut transactions = Vec::new();
    for row in rows {
        match row {
            Ok(transaction) => transactions.push(transaction),
            Err(
                error @ (rusqlite::Error::InvalidColumnType(..)
                | rusqlite::Error::FromSqlConversionFailure(..)),
            ) => tracing::warn!("Skipping unreadable transaction row: {error}"),
            Err(error) => return Err(error.into()),
        }
    }

    Ok(transactions)
}
