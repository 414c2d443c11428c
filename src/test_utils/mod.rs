#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

use tempfile::TempDir;

use crate::{SQLiteTransactionStore, StoreConfig, TransactionStore};

pub(crate) use form::{assert_form_action, assert_form_input, must_get_form};
pub(crate) use html::{
    assert_has_element, assert_valid_html, get_metric_value, parse_html_document,
};
pub(crate) use http::assert_redirect;

/// Create a store backed by a fresh database file with the schema set up.
///
/// The database is deleted when the returned [TempDir] is dropped.
#[track_caller]
pub(crate) fn get_test_store() -> (TempDir, SQLiteTransactionStore) {
    let dir = tempfile::tempdir().expect("Could not create temporary directory");
    let store = SQLiteTransactionStore::new(StoreConfig::new(dir.path(), "test"));
    store.ensure_schema().expect("Could not create schema");

    (dir, store)
}
