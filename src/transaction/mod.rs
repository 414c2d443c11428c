//! Transaction management for the tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Database functions for storing, querying, and aggregating transactions
//! - Route handlers and the form for creating and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod form;
mod query;

pub use core::{
    RowsAffected, Transaction, TransactionBuilder, TransactionId, TransactionKind,
    count_transactions, create_transaction, create_transaction_table, delete_transaction,
    sum_transactions_by_kind, update_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use form::new_transaction_form;
pub use query::{SortField, SortOrder, TransactionQuery, get_transactions};

#[cfg(test)]
pub use core::get_transaction;
