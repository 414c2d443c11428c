//! The form for entering a new transaction.

use maud::{Markup, html};
use time::Date;

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    transaction::TransactionKind,
};

/// Render the form for adding a transaction, with the date set to `today`.
pub fn new_transaction_form(today: Date) -> Markup {
    html! {
        form
            id="new-transaction-form"
            action=(endpoints::TRANSACTIONS_API)
            method="post"
            class="w-full space-y-4"
        {
            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    name="date"
                    id="date"
                    type="date"
                    required
                    value=(today)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                textarea
                    name="description"
                    id="description"
                    rows="2"
                    placeholder="Description"
                    class=(FORM_TEXT_INPUT_STYLE)
                {}
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    min="0.01"
                    step="0.01"
                    placeholder="0.00"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="type" class=(FORM_LABEL_STYLE) { "Type" }

                select name="type" id="type" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for kind in [TransactionKind::Revenue, TransactionKind::Expense] {
                        option value=(kind) { (kind) }
                    }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    }
}
