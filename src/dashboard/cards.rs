//! Metric cards summarising the business's transactions.

use maud::{Markup, html};
use rust_decimal::Decimal;

use crate::{TransactionKind, TransactionStore, html::format_currency};

/// The headline figures shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct BusinessInsights {
    pub total_transactions: u64,
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
    pub net_income: Decimal,
}

impl BusinessInsights {
    /// Read the figures from `store`.
    ///
    /// Any figure that cannot be read is shown as zero.
    pub(super) fn from_store(store: &impl TransactionStore) -> Self {
        Self {
            total_transactions: store.count_all(),
            total_revenue: store.sum_by_kind(TransactionKind::Revenue),
            total_expenses: store.sum_by_kind(TransactionKind::Expense),
            net_income: store.net_income(),
        }
    }
}

pub(super) fn insights_view(insights: &BusinessInsights) -> Markup {
    let total_transactions = insights.total_transactions.to_string();
    let total_revenue = format_currency(insights.total_revenue);
    let total_expenses = format_currency(insights.total_expenses);
    let net_income = format_currency(insights.net_income);

    html! {
        section id="business-insights" class="w-full mx-auto mb-8" {
            h2 class="text-xl font-semibold mb-4" { "Business Insights" }

            div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4" {
                (metric_card("total-transactions", "Total Transactions", &total_transactions))
                (metric_card("total-revenue", "Total Revenue", &total_revenue))
                (metric_card("total-expenses", "Total Expenses", &total_expenses))
                (metric_card("net-income", "Net Income", &net_income))
            }
        }
    }
}

fn metric_card(id: &str, label: &str, value: &str) -> Markup {
    html! {
        div
            id=(id)
            class="bg-white dark:bg-gray-800 border border-gray-200
                dark:border-gray-700 rounded-lg p-4 shadow-md"
        {
            div class="text-sm text-gray-600 dark:text-gray-400 mb-1" { (label) }
            div class="metric-value text-3xl font-bold" { (value) }
        }
    }
}
