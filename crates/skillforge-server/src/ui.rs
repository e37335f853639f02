use axum::response::Html;

/// Single-page form UI, embedded in the binary. Styling is intentionally
/// minimal; the page only drives the JSON API.
const INDEX_HTML: &str = include_str!("../assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
