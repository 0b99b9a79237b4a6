//! Server-rendered admin pages and their client scripts.
//!
//! Pages are static HTML embedded at build time; each one loads a script from
//! `/static/js/` that talks to the JSON API.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "assets/pages/"]
struct Pages;

#[derive(Embed)]
#[folder = "assets/static/"]
struct StaticAssets;

/// GET /
pub async fn home() -> Response {
    page("home.html")
}

/// GET /ui/tecnicos
pub async fn technicians_page() -> Response {
    page("tecnicos.html")
}

/// GET /ui/assign-ot
pub async fn assign_work_order_page() -> Response {
    page("assign_ot.html")
}

/// GET /ui/admin_ots
pub async fn admin_work_orders_page() -> Response {
    page("admin_ots.html")
}

/// GET /static/*path
pub async fn static_asset(Path(path): Path<String>) -> Response {
    match StaticAssets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            embedded_response(mime.as_ref(), "public, max-age=3600", content.data.into_owned())
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn page(name: &str) -> Response {
    match Pages::get(name) {
        Some(content) => {
            embedded_response("text/html; charset=utf-8", "no-cache", content.data.into_owned())
        }
        None => {
            tracing::error!(page = name, "Embedded page missing");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn embedded_response(content_type: &str, cache_control: &str, body: Vec<u8>) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, cache_control)
        .body(Body::from(body))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}
