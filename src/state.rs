/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Clone is cheap: everything inside is behind Arc
 */
use std::sync::Arc;

use crate::services::direct_line::TokenIssuer;

#[derive(Clone, Debug)]
pub struct AppState {
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(tokens: Arc<TokenIssuer>) -> Self {
        Self { tokens }
    }
}
