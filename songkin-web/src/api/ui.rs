//! Embedded song picker UI
//!
//! The page and its script are embedded at compile time; there is no
//! asset directory at runtime.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../ui/index.html");
const APP_JS: &str = include_str!("../ui/app.js");

/// GET /
///
/// Song picker page: a datalist of every catalog title, the query
/// form, and the recommendations table the script fills in.
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/app.js
///
/// Script behind the picker page; it populates the datalist from
/// /api/songs and renders /api/recommend results or the error line.
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}
