//! The page shown when the transaction database fails during a request.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// A 500 page with a headline and a hint for fixing the problem.
pub struct InternalServerError<'a> {
    /// What the user was trying to do, e.g. "Could not add transaction".
    pub description: &'a str,
    /// The cause, or what to try next.
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "The transaction database could not be used.",
            fix: "Check that the database directory exists and is writable, \
                then reload the dashboard.",
        }
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        let page = error_view("Internal Server Error", "500", self.description, self.fix);

        (StatusCode::INTERNAL_SERVER_ERROR, Html(page.into_string())).into_response()
    }
}
