mod webhook_handlers;

pub use self::webhook_handlers::*;

use crate::app_state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // `GET /` goes to `root`
        .route("/", get(root))
        .route("/webhook", post(webhook_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

pub async fn root() -> String {
    "ok".to_string()
}
