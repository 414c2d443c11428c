//! Fintracker is a small web app for tracking a business's revenue and expenses.
//!
//! The library is split into two layers:
//! - A storage gateway ([TransactionStore], implemented by [SQLiteTransactionStore])
//!   that owns the database schema and exposes typed CRUD and aggregation
//!   operations over the `transactions` table.
//! - A dashboard served as HTML pages that consumes the gateway.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod config;
mod dashboard;
mod db;
mod endpoints;
mod error;
mod html;
mod internal_server_error;
mod not_found;
mod routing;
mod stores;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use config::{DEFAULT_DB_NAME, StoreConfig};
pub use error::Error;
pub use routing::build_router;
pub use stores::{SQLiteTransactionStore, TransactionStore};
pub use transaction::{
    RowsAffected, SortField, SortOrder, Transaction, TransactionBuilder, TransactionId,
    TransactionKind, TransactionQuery,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal_name = tokio::select! {
        _ = ctrl_c => "ctrl+c",
        _ = terminate => "terminate",
    };

    tracing::info!("Received {signal_name} signal, shutting down.");
    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}
