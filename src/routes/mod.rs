use axum::{
    Router,
    http::{StatusCode, Uri},
    response::Html,
    routing::get,
};

use crate::{state::AppState, views};

pub mod api;
pub mod auth;
pub mod bill;
pub mod doc;
pub mod health;
pub mod menu;
pub mod report;

// Build the full router without binding state; it is provided by the caller.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::home))
        .route("/health", get(health::health_check))
        .merge(bill::router())
        .merge(auth::router())
        .merge(report::router())
        .nest("/api", api::router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    let message = format!("Nothing here: {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Html(views::message_page(&message, "/", "Home")),
    )
}
