//! Shared page layout, styles and formatting helpers for the HTML views.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Fintracker" }
                script src="https://cdn.tailwindcss.com" {}
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 font-medium rounded text-sm px-5
                            py-2.5 text-center my-4"
                    {
                        "Back to Dashboard"
                    }
                }
            }
        }
    );

    base(title, &content)
}

/// Format `amount` as dollars and cents with thousands separators, e.g. "$1,500.00".
///
/// Negative amounts are written with a leading minus sign, e.g. "-$25.00".
pub fn format_currency(amount: Decimal) -> String {
    static DOLLARS_FMT: OnceLock<Formatter> = OnceLock::new();

    let dollars_fmt = DOLLARS_FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("\"$\" is a valid currency prefix")
            .precision(Precision::Decimals(0))
    });

    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    // Only the whole dollars go through the formatter so the cents stay exact.
    let whole = rounded.abs().trunc();
    let cents = ((rounded.abs() - whole) * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or_default();

    let dollars = match whole.to_f64() {
        Some(dollars) if dollars > 0.0 => dollars_fmt.fmt_string(dollars),
        // numfmt writes zero as a bare "0"
        _ => "$0".to_owned(),
    };

    format!("{sign}{dollars}.{cents:02}")
}

#[cfg(test)]
mod format_currency_tests {
    use rust_decimal::Decimal;

    use super::format_currency;

    #[test]
    fn formats_whole_dollars_with_cents() {
        assert_eq!(format_currency(Decimal::new(150000, 2)), "$1,500.00");
        assert_eq!(format_currency(Decimal::from(7)), "$7.00");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
        assert_eq!(format_currency(Decimal::new(-0, 2)), "$0.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(Decimal::new(-2500, 2)), "-$25.00");
        assert_eq!(format_currency(Decimal::new(-123456789, 2)), "-$1,234,567.89");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(Decimal::new(99999, 2)), "$999.99");
        assert_eq!(format_currency(Decimal::new(100000, 2)), "$1,000.00");
        assert_eq!(format_currency(Decimal::new(9999999999, 2)), "$99,999,999.99");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_currency(Decimal::new(12345, 3)), "$12.35");
        assert_eq!(format_currency(Decimal::new(1, 1)), "$0.10");
        assert_eq!(format_currency(Decimal::new(-5, 1)), "-$0.50");
        assert_eq!(format_currency(Decimal::new(-4, 3)), "$0.00");
    }
}
