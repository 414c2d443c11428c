//! Sets up the application's database schema.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, transaction::create_transaction_table};

/// Create the application's tables if they do not already exist.
///
/// Safe to call every time the application starts.
///
/// # Errors
/// Returns an [Error::SqlError] if the schema could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initialize_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        initialize(&conn).expect("Could not initialize database");
        initialize(&conn).expect("Could not initialize database a second time");

        let table_count: u32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'transactions'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 1);
    }

    #[test]
    fn creates_columns_in_order() {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        let columns: Vec<(String, String)> = conn
            .prepare("SELECT name, type FROM pragma_table_info('transactions') ORDER BY cid")
            .unwrap()
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        let want = [
            ("transaction_id", "VARCHAR(255)"),
            ("transaction_date", "DATE"),
            ("description", "TEXT"),
            ("amount", "DECIMAL(10, 2)"),
            ("type", "VARCHAR(20)"),
        ]
        .map(|(name, column_type)| (name.to_owned(), column_type.to_owned()));
        assert_eq!(columns, want);
    }
}
