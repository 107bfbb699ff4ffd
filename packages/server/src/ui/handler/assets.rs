//! Embedded browser client.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};

const INDEX_HTML: &str = include_str!("../assets/index.html");
const APP_JS: &str = include_str!("../assets/app.js");

/// `GET /`
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /app.js`
pub async fn app_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}

/// Any other path
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
