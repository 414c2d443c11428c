//! The URIs served by the app.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}/delete',
//! use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard with the summary metrics, transaction table and entry form.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The route for creating transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for deleting a single transaction.
///
/// Deletion is a POST so it can be triggered by a plain HTML form.
pub const DELETE_TRANSACTION: &str = "/api/transactions/{transaction_id}/delete";

/// Replace the first parameter in `endpoint_path` with `id`.
///
/// A parameter is a name wrapped in braces, e.g. '{transaction_id}'.
/// If no parameter is found in `endpoint_path`, the original path is returned.
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    let Some((head, rest)) = endpoint_path.split_once('{') else {
        return endpoint_path.to_owned();
    };

    let tail = rest.split_once('}').map(|(_, tail)| tail).unwrap_or_default();

    format!("{head}{id}{tail}")
}
