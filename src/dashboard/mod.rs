//! Dashboard module
//!
//! Provides the main page: headline metrics, the form for adding a
//! transaction and a filterable, sortable list of transactions.

mod cards;
mod handlers;
mod tables;

pub use handlers::get_dashboard_page;
