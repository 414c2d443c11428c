//! The storage gateway for transactions.
//!
//! Route handlers only talk to the database through a [TransactionStore].

mod transaction;

pub mod sqlite;

pub use sqlite::SQLiteTransactionStore;
pub use transaction::TransactionStore;
