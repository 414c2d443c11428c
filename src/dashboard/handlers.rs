//! Dashboard HTTP handler and view rendering.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::{
    SQLiteTransactionStore, Transaction, TransactionStore,
    dashboard::{
        cards::{BusinessInsights, insights_view},
        tables::{list_controls_view, transactions_table_view},
    },
    html::{PAGE_CONTAINER_STYLE, base},
    transaction::{TransactionQuery, new_transaction_form},
};

/// The query string accepted by the dashboard.
///
/// Values are kept as raw text so that unrecognised options fall back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// "All", "Revenue" or "Expense".
    pub kind: Option<String>,
    /// "date" or "amount".
    pub sort: Option<String>,
    /// "desc" or "asc".
    pub order: Option<String>,
}

impl DashboardQuery {
    fn to_transaction_query(&self) -> TransactionQuery {
        TransactionQuery::from_params(
            self.kind.as_deref(),
            self.sort.as_deref(),
            self.order.as_deref(),
        )
    }
}

/// Display the dashboard.
///
/// The page always renders; figures that cannot be read from the store are
/// shown as zero and the table as empty.
pub async fn get_dashboard_page(
    State(store): State<SQLiteTransactionStore>,
    Query(params): Query<DashboardQuery>,
) -> Response {
    let query = params.to_transaction_query();
    let insights = BusinessInsights::from_store(&store);
    let transactions = store.list(&query);

    dashboard_view(&insights, &query, &transactions, get_local_date()).into_response()
}

// The local offset cannot always be determined, e.g. on some platforms when
// more than one thread is running.
fn get_local_date() -> Date {
    OffsetDateTime::now_local()
        .inspect_err(|error| tracing::debug!("Falling back to UTC for today's date: {error}"))
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

fn dashboard_view(
    insights: &BusinessInsights,
    query: &TransactionQuery,
    transactions: &[Transaction],
    today: Date,
) -> Markup {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl"
            {
                h1 class="text-2xl font-bold mb-6" { "Financial Transaction Tracker" }

                (insights_view(insights))

                section id="add-transaction" class="w-full mb-8 max-w-md"
                {
                    h2 class="text-xl font-semibold mb-4" { "Add New Transaction" }
                    (new_transaction_form(today))
                }

                section id="all-transactions" class="w-full"
                {
                    h2 class="text-xl font-semibold mb-4" { "All Transactions" }
                    (list_controls_view(query))
                    (transactions_table_view(transactions))
                }
            }
        }
    );

    base("Dashboard", &content)
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };
    use rust_decimal::Decimal;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        SQLiteTransactionStore, StoreConfig, Transaction, TransactionKind, TransactionStore,
        test_utils::{
            assert_has_element, assert_valid_html, get_metric_value, get_test_store,
            parse_html_document,
        },
    };

    use super::{DashboardQuery, get_dashboard_page};

    fn insert_scenario(store: &SQLiteTransactionStore) {
        store
            .insert(
                Transaction::build(
                    Decimal::new(150000, 2),
                    date!(2024 - 01 - 05),
                    TransactionKind::Revenue,
                )
                .description("Consulting"),
            )
            .unwrap();
        store
            .insert(
                Transaction::build(
                    Decimal::new(80000, 2),
                    date!(2024 - 01 - 06),
                    TransactionKind::Expense,
                )
                .description("Rent"),
            )
            .unwrap();
    }

    fn get_row_descriptions(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("#transactions-table tbody tr").unwrap())
            .map(|row| {
                row.select(&Selector::parse("td").unwrap())
                    .nth(2)
                    .expect("row is missing the description cell")
                    .text()
                    .collect()
            })
            .collect()
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let (_dir, store) = get_test_store();
        insert_scenario(&store);

        let response = get_dashboard_page(State(store), Query(DashboardQuery::default())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(get_metric_value(&html, "total-transactions"), "2");
        assert_eq!(get_metric_value(&html, "total-revenue"), "$1,500.00");
        assert_eq!(get_metric_value(&html, "total-expenses"), "$800.00");
        assert_eq!(get_metric_value(&html, "net-income"), "$700.00");
        assert_eq!(get_row_descriptions(&html), ["Rent", "Consulting"]);
        assert_has_element(&html, "#new-transaction-form");
    }

    #[tokio::test]
    async fn applies_filter_and_sort() {
        let (_dir, store) = get_test_store();
        insert_scenario(&store);
        let params = DashboardQuery {
            kind: Some("Revenue".to_owned()),
            sort: Some("amount".to_owned()),
            order: Some("asc".to_owned()),
        };

        let response = get_dashboard_page(State(store), Query(params)).await;

        let html = parse_html_document(response).await;
        assert_eq!(get_row_descriptions(&html), ["Consulting"]);
        // The metrics always cover every transaction.
        assert_eq!(get_metric_value(&html, "total-transactions"), "2");
    }

    #[tokio::test]
    async fn ignores_unrecognised_params() {
        let (_dir, store) = get_test_store();
        insert_scenario(&store);
        let params = DashboardQuery {
            kind: Some("Refunds".to_owned()),
            sort: Some("amount; DROP TABLE transactions".to_owned()),
            order: Some("sideways".to_owned()),
        };

        let response = get_dashboard_page(State(store.clone()), Query(params)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_eq!(get_row_descriptions(&html), ["Rent", "Consulting"]);
        assert_eq!(store.count_all(), 2);
    }

    #[tokio::test]
    async fn shows_message_when_there_are_no_transactions() {
        let (_dir, store) = get_test_store();

        let response = get_dashboard_page(State(store), Query(DashboardQuery::default())).await;

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_has_element(&html, "#no-transactions");
        assert_eq!(get_metric_value(&html, "net-income"), "$0.00");
    }

    #[tokio::test]
    async fn renders_zeroes_when_store_is_unreachable() {
        let store =
            SQLiteTransactionStore::new(StoreConfig::new("/this/directory/does/not/exist", "db"));

        let response = get_dashboard_page(State(store), Query(DashboardQuery::default())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_eq!(get_metric_value(&html, "total-transactions"), "0");
        assert_eq!(get_metric_value(&html, "total-revenue"), "$0.00");
    }
}
