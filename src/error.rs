//! Defines the app level error type and conversions to rendered HTML pages.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use rust_decimal::Decimal;

use crate::{
    html::error_view, internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The database file could not be opened.
    ///
    /// Holds the path of the database and the underlying SQLite error.
    #[error("could not connect to the database \"{0}\": {1}")]
    ConnectionError(String, rusqlite::Error),

    /// A transaction with the same ID is already in the database.
    ///
    /// IDs are generated when a transaction is inserted, so this should only
    /// ever happen if a UUID collides.
    #[error("a transaction with the same ID already exists")]
    DuplicateTransactionId,

    /// The amount has more than eight digits before the decimal point and
    /// does not fit in the `DECIMAL(10, 2)` amount column.
    #[error("the amount {0} is too large, amounts must be less than 100,000,000.00")]
    AmountOutOfRange(Decimal),

    /// A new transaction was submitted with an amount of zero or less.
    ///
    /// Whether a transaction is money in or out is given by its kind, so the
    /// amount entered on the dashboard must always be positive.
    #[error("the amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    /// A transaction type other than "Revenue" or "Expense" was read from the
    /// database.
    #[error("\"{0}\" is not a valid transaction type, expected \"Revenue\" or \"Expense\"")]
    InvalidTransactionKind(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error {
                    code: _,
                    extended_code:
                        rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                        | rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
                },
                _,
            ) => Error::DuplicateTransactionId,
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::SqlError(error),
        }
    }
}

impl Error {
    fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::AmountOutOfRange(_) | Error::NonPositiveAmount(_)
        )
    }

    /// Render the error as a page that explains why the operation described
    /// by `description` (e.g., "Could not add transaction") failed.
    ///
    /// The error text is shown to the user as the cause.
    pub(crate) fn into_error_page(self, description: &str) -> Response {
        let cause = self.to_string();

        if self.is_invalid_input() {
            return (
                StatusCode::BAD_REQUEST,
                Html(error_view("Bad Request", "400", description, &cause).into_string()),
            )
                .into_response();
        }

        InternalServerError {
            description,
            fix: &cause,
        }
        .into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            error if error.is_invalid_input() => error.into_error_page("Invalid transaction"),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                InternalServerError::default().into_response()
            }
        }
    }
}
