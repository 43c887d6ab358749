/*
 * Responsibility
 * - URL layout of the public API
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{direct_line_token::issue_direct_line_token, health::health};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/direct-line-token", post(issue_direct_line_token))
}
