//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error, SQLiteTransactionStore, TransactionStore, endpoints,
    transaction::{Transaction, TransactionKind},
};

/// The form data for creating a transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionForm {
    /// The date when the transaction ocurred.
    pub date: Date,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: Option<String>,
    /// The value of the transaction in dollars.
    pub amount: Decimal,
    /// Whether the transaction is revenue or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// A route handler for creating a new transaction, redirects to the dashboard on success.
pub async fn create_transaction_endpoint(
    State(store): State<SQLiteTransactionStore>,
    Form(form): Form<TransactionForm>,
) -> Response {
    if form.amount <= Decimal::ZERO {
        tracing::warn!("Rejected transaction with non-positive amount {}", form.amount);
        return Error::NonPositiveAmount(form.amount).into_error_page("Could not add transaction");
    }

    let transaction = Transaction::build(form.amount, form.date, form.kind)
        .description(form.description.as_deref().unwrap_or_default().trim());

    match store.insert(transaction) {
        Ok(_) => Redirect::to(endpoints::DASHBOARD_VIEW).into_response(),
        Err(error) => {
            tracing::error!("Could not add transaction: {error}");
            error.into_error_page("Could not add transaction")
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use rust_decimal::Decimal;
    use time::macros::date;

    use crate::{
        SQLiteTransactionStore, StoreConfig, TransactionKind, TransactionQuery, TransactionStore,
        endpoints,
        test_utils::{assert_redirect, get_test_store},
        transaction::create_transaction_endpoint,
    };

    use super::TransactionForm;

    fn consulting_form() -> TransactionForm {
        TransactionForm {
            date: date!(2024 - 01 - 05),
            description: Some("Consulting".to_owned()),
            amount: Decimal::new(150000, 2),
            kind: TransactionKind::Revenue,
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let (_dir, store) = get_test_store();

        let response =
            create_transaction_endpoint(State(store.clone()), Form(consulting_form())).await;

        assert_redirect(&response, endpoints::DASHBOARD_VIEW);
        let transactions = store.list(&TransactionQuery::default());
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].date, date!(2024 - 01 - 05));
        assert_eq!(transactions[0].description.as_deref(), Some("Consulting"));
        assert_eq!(transactions[0].amount, Decimal::new(150000, 2));
        assert_eq!(transactions[0].kind, TransactionKind::Revenue);
    }

    #[tokio::test]
    async fn missing_description_is_stored_as_null() {
        let (_dir, store) = get_test_store();
        let form = TransactionForm {
            description: None,
            ..consulting_form()
        };

        let response = create_transaction_endpoint(State(store.clone()), Form(form)).await;

        assert_redirect(&response, endpoints::DASHBOARD_VIEW);
        let transactions = store.list(&TransactionQuery::default());
        assert_eq!(transactions[0].description, None);
    }

    #[tokio::test]
    async fn trims_submitted_description() {
        let (_dir, store) = get_test_store();
        let form = TransactionForm {
            description: Some("  Rent  \n".to_owned()),
            ..consulting_form()
        };

        let response = create_transaction_endpoint(State(store.clone()), Form(form)).await;

        assert_redirect(&response, endpoints::DASHBOARD_VIEW);
        let transactions = store.list(&TransactionQuery::default());
        assert_eq!(transactions[0].description.as_deref(), Some("Rent"));
    }

    #[tokio::test]
    async fn rejects_non_positive_amount() {
        let (_dir, store) = get_test_store();

        for amount in [Decimal::ZERO, Decimal::new(-500, 2)] {
            let form = TransactionForm {
                amount,
                ..consulting_form()
            };

            let response = create_transaction_endpoint(State(store.clone()), Form(form)).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        assert_eq!(store.count_all(), 0);
    }

    #[tokio::test]
    async fn rejects_amount_too_large_for_column() {
        let (_dir, store) = get_test_store();
        let form = TransactionForm {
            amount: Decimal::from(100_000_000),
            ..consulting_form()
        };

        let response = create_transaction_endpoint(State(store.clone()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.count_all(), 0);
    }

    #[tokio::test]
    async fn unreachable_store_renders_error_page() {
        let store =
            SQLiteTransactionStore::new(StoreConfig::new("/this/directory/does/not/exist", "db"));

        let response = create_transaction_endpoint(State(store), Form(consulting_form())).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parses_submitted_form() {
        let form: TransactionForm = serde_html_form::from_str(
            "date=2024-01-06&description=Rent&amount=800.00&type=Expense",
        )
        .unwrap();

        assert_eq!(form.date, date!(2024 - 01 - 06));
        assert_eq!(form.description.as_deref(), Some("Rent"));
        assert_eq!(form.amount, Decimal::new(80000, 2));
        assert_eq!(form.kind, TransactionKind::Expense);
    }
}
