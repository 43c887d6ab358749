/*
 * Responsibility
 * - POST /api/direct-line-token
 * - Any request body is ignored; each call mints a fresh anonymous user id
 */
use axum::{Json, extract::State};

use crate::{api::dto::direct_line_token::DirectLineTokenResponse, error::AppError, state::AppState};

pub async fn issue_direct_line_token(
    State(state): State<AppState>,
) -> Result<Json<DirectLineTokenResponse>, AppError> {
    match state.tokens.issue().await {
        Ok(issued) => {
            tracing::info!(
                user_id = %issued.user_id,
                conversation_id = %issued.bundle.conversation_id,
                expires_in = issued.bundle.expires_in,
                "issued Direct Line token"
            );
            Ok(Json(issued.into()))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Direct Line token issuance failed");
            Err(e.into())
        }
    }
}
