/*
 * Responsibility
 * - HTTP boundary error type (AppError)
 * - IntoResponse: every issuance failure becomes 400 { "message": ... }
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::direct_line::DirectLineError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    TokenIssuance(#[from] DirectLineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Upstream and transport failures are deliberately reported as client
        // errors; callers simply request a new token.
        let status = match &self {
            AppError::TokenIssuance(_) => StatusCode::BAD_REQUEST,
        };

        let body = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
