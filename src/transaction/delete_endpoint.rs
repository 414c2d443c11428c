//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::{SQLiteTransactionStore, TransactionStore, endpoints, transaction::TransactionId};

/// A route handler for deleting a transaction, redirects to the dashboard.
///
/// Deleting a transaction that does not exist is not an error, the dashboard
/// simply no longer lists it.
pub async fn delete_transaction_endpoint(
    State(store): State<SQLiteTransactionStore>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    match store.delete(&transaction_id) {
        Ok(_) => Redirect::to(endpoints::DASHBOARD_VIEW).into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_error_page("Could not delete transaction")
        }
    }
}
