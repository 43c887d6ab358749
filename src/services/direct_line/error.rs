use thiserror::Error;

pub type DirectLineResult<T> = Result<T, DirectLineError>;

/// Failures while exchanging a secret for a user-bound Direct Line token.
///
/// Display strings are returned to callers verbatim, so none of them may
/// include the secret.
#[derive(Debug, Error)]
pub enum DirectLineError {
    #[error("missing configuration: {0}")]
    MissingConfiguration(&'static str),

    #[error("failed to generate user id: {0}")]
    Entropy(String),

    #[error("Direct Line token API call failed with status code {0}")]
    UpstreamStatus(u16),

    #[error("Direct Line token API call failed: {0}")]
    Transport(String),

    #[error("Direct Line token API returned an invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for DirectLineError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DirectLineError::InvalidResponse(e.without_url().to_string())
        } else {
            DirectLineError::Transport(e.without_url().to_string())
        }
    }
}
