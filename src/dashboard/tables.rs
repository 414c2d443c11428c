//! The transaction listing: filter and sort controls plus the table itself.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    Transaction, TransactionKind,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency,
    },
    transaction::{SortField, SortOrder, TransactionQuery},
};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// The value of the kind filter that shows every transaction.
const ALL_KINDS: &str = "All";

const KIND_OPTIONS: [(&str, &str); 3] = [
    (ALL_KINDS, ALL_KINDS),
    ("Revenue", "Revenue"),
    ("Expense", "Expense"),
];

const SORT_FIELD_OPTIONS: [(SortField, &str); 2] =
    [(SortField::Date, "Date"), (SortField::Amount, "Amount")];

const SORT_ORDER_OPTIONS: [(SortOrder, &str); 2] = [
    (SortOrder::Descending, "Descending"),
    (SortOrder::Ascending, "Ascending"),
];

fn amount_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Revenue => "text-green-700 dark:text-green-300",
        TransactionKind::Expense => "text-red-700 dark:text-red-300",
    }
}

/// Controls for choosing which transactions to list and how to order them.
///
/// Submitted as a GET request to the dashboard so the current view can be
/// bookmarked.
pub(super) fn list_controls_view(query: &TransactionQuery) -> Markup {
    let selected_kind = query.kind.map_or(ALL_KINDS, TransactionKind::as_str);

    html! {
        form
            id="list-controls"
            action=(endpoints::DASHBOARD_VIEW)
            method="get"
            class="grid grid-cols-1 sm:grid-cols-4 gap-4 items-end mb-4"
        {
            div {
                label for="kind" class=(FORM_LABEL_STYLE) { "Filter by Type" }
                select name="kind" id="kind" class=(FORM_TEXT_INPUT_STYLE) {
                    @for (value, label) in KIND_OPTIONS {
                        option value=(value) selected[value == selected_kind] { (label) }
                    }
                }
            }

            div {
                label for="sort" class=(FORM_LABEL_STYLE) { "Sort by" }
                select name="sort" id="sort" class=(FORM_TEXT_INPUT_STYLE) {
                    @for (field, label) in SORT_FIELD_OPTIONS {
                        option value=(field.as_param()) selected[field == query.sort_field] {
                            (label)
                        }
                    }
                }
            }

            div {
                label for="order" class=(FORM_LABEL_STYLE) { "Order" }
                select name="order" id="order" class=(FORM_TEXT_INPUT_STYLE) {
                    @for (order, label) in SORT_ORDER_OPTIONS {
                        option value=(order.as_param()) selected[order == query.sort_order] {
                            (label)
                        }
                    }
                }
            }

            button
                type="submit"
                class="px-4 py-2.5 bg-blue-500 hover:bg-blue-600 text-white rounded"
            {
                "Apply"
            }
        }
    }
}

pub(super) fn transactions_table_view(transactions: &[Transaction]) -> Markup {
    if transactions.is_empty() {
        return html! {
            p id="no-transactions" class="text-gray-600 dark:text-gray-400" {
                "No transactions found."
            }
        };
    }

    html! {
        div class="overflow-x-auto rounded-lg shadow" {
            table
                id="transactions-table"
                class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE) {
                    tr {
                        th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                        th scope="col" class=(TABLE_CELL_STYLE) {
                            span class="sr-only" { "Actions" }
                        }
                    }
                }

                tbody {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let delete_endpoint = format_endpoint(endpoints::DELETE_TRANSACTION, &transaction.id);
    let (description, full_description) =
        format_description(transaction.description.as_deref().unwrap_or_default());

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id) {
            td class={(TABLE_CELL_STYLE) " font-mono text-xs"} { (transaction.id) }
            td class=(TABLE_CELL_STYLE) { (transaction.date) }
            td class=(TABLE_CELL_STYLE) title=[full_description] { (description) }
            td class={(TABLE_CELL_STYLE) " text-right " (amount_class(transaction.kind))} {
                (format_currency(transaction.amount))
            }
            td class=(TABLE_CELL_STYLE) { (transaction.kind) }
            td class=(TABLE_CELL_STYLE) {
                form action=(delete_endpoint) method="post" {
                    button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                }
            }
        }
    }
}

fn format_description(description: &str) -> (String, Option<&str>) {
    let graphemes = description.graphemes(true);

    if graphemes.clone().nth(MAX_DESCRIPTION_GRAPHEMES).is_none() {
        return (description.to_owned(), None);
    }

    let truncated: String = graphemes.take(MAX_DESCRIPTION_GRAPHEMES - 3).collect();

    (truncated + "...", Some(description))
}
