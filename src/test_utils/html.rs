use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

/// Read the body of `response` and parse it as a full HTML page.
pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");

    Html::parse_document(&String::from_utf8_lossy(&body))
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

#[track_caller]
pub(crate) fn assert_has_element(html: &Html, selector: &str) {
    assert!(
        html.select(&Selector::parse(selector).unwrap())
            .next()
            .is_some(),
        "want an element matching {selector:?}"
    );
}

/// The text of the value in the metric card with the HTML id `card_id`.
#[track_caller]
pub(crate) fn get_metric_value(html: &Html, card_id: &str) -> String {
    let selector = Selector::parse(&format!("#{card_id} .metric-value")).unwrap();

    html.select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No metric card with id {card_id}"))
        .text()
        .collect()
}
