use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/clicks", get(handlers::get_clicks))
        .route("/api/clicks.csv", get(handlers::get_clicks_csv))
        .route("/api/clicks/summary", get(handlers::get_summary))
        .with_state(state)
}
