use serde::Serialize;

use crate::services::direct_line::IssuedToken;

/// Body of a successful `POST /api/direct-line-token`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectLineTokenResponse {
    pub conversation_id: String,
    pub token: String,
    /// Seconds until expiry, as reported by Direct Line.
    pub expires_in: u64,
    pub user_id: String,
}

impl From<IssuedToken> for DirectLineTokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            conversation_id: issued.bundle.conversation_id,
            token: issued.bundle.token,
            expires_in: issued.bundle.expires_in,
            user_id: issued.user_id.into_string(),
        }
    }
}
