//! Direct Line token API client interface used by the issuance service.
use async_trait::async_trait;
use secrecy::SecretString;
use serde::Deserialize;

use crate::services::direct_line::error::DirectLineResult;
use crate::services::direct_line::user_id::UserId;

/// Token triple returned by `POST /v3/directline/tokens/generate`.
///
/// Passed through to callers untouched; only the shape is checked.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenBundle {
    pub token: String,
    pub expires_in: u64,
    #[serde(rename = "conversationId")]
    pub conversation_id: String,
}

/// A minimal Direct Line interface: one call, one token.
///
/// Implementations must not retry; the caller decides what a failure means.
#[async_trait]
pub trait DirectLineClient: Send + Sync + 'static {
    async fn generate_token(
        &self,
        secret: &SecretString,
        user_id: &UserId,
    ) -> DirectLineResult<TokenBundle>;
}
