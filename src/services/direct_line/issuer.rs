//! Issues user-bound Direct Line tokens.
//!
//! Flow per call: fresh [`UserId`] -> secret lookup -> one upstream call.
//! Nothing is cached between calls and nothing is retried.
use secrecy::SecretString;
use std::sync::Arc;

use crate::config::{DIRECT_LINE_SECRET_KEY, SecretSource};
use crate::services::direct_line::client::{DirectLineClient, TokenBundle};
use crate::services::direct_line::error::{DirectLineError, DirectLineResult};
use crate::services::direct_line::user_id::UserId;

/// A token bundle plus the user id it was bound to upstream.
#[derive(Clone, Debug)]
pub struct IssuedToken {
    pub user_id: UserId,
    pub bundle: TokenBundle,
}

#[derive(Clone)]
pub struct TokenIssuer {
    client: Arc<dyn DirectLineClient>,
    secrets: Arc<dyn SecretSource>,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").finish_non_exhaustive()
    }
}

impl TokenIssuer {
    pub fn new(client: Arc<dyn DirectLineClient>, secrets: Arc<dyn SecretSource>) -> Self {
        Self { client, secrets }
    }

    pub async fn issue(&self) -> DirectLineResult<IssuedToken> {
        let user_id = UserId::generate()?;
        if user_id.as_str().is_empty() {
            return Err(DirectLineError::MissingConfiguration("user id"));
        }

        let secret = self.current_secret()?;
        let bundle = self.client.generate_token(&secret, &user_id).await?;

        Ok(IssuedToken { user_id, bundle })
    }

    fn current_secret(&self) -> DirectLineResult<SecretString> {
        self.secrets
            .lookup(DIRECT_LINE_SECRET_KEY)
            .filter(|s| !s.trim().is_empty())
            .map(SecretString::from)
            .ok_or(DirectLineError::MissingConfiguration(DIRECT_LINE_SECRET_KEY))
    }
}

/// Test doubles shared by the service and handler tests.
#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use secrecy::{ExposeSecret, SecretString};
    use std::sync::Mutex;

    use super::*;

    pub struct FixedSecret(pub Option<String>);

    impl SecretSource for FixedSecret {
        fn lookup(&self, key: &str) -> Option<String> {
            assert_eq!(key, DIRECT_LINE_SECRET_KEY);
            self.0.clone()
        }
    }

    #[derive(Clone, Debug)]
    pub struct RecordedCall {
        pub secret: String,
        pub user_id: String,
    }

    /// Records every call and answers with `status` (200 => a bundle whose
    /// token is numbered by call order).
    pub struct RecordingClient {
        status: u16,
        calls: Mutex<Vec<RecordedCall>>,
    }

    impl RecordingClient {
        pub fn ok() -> Self {
            Self::with_status(200)
        }

        pub fn with_status(status: u16) -> Self {
            Self {
                status,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<RecordedCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DirectLineClient for RecordingClient {
        async fn generate_token(
            &self,
            secret: &SecretString,
            user_id: &UserId,
        ) -> DirectLineResult<TokenBundle> {
            let n = {
                let mut calls = self.calls.lock().unwrap();
                calls.push(RecordedCall {
                    secret: secret.expose_secret().to_string(),
                    user_id: user_id.to_string(),
                });
                calls.len()
            };

            if self.status != 200 {
                return Err(DirectLineError::UpstreamStatus(self.status));
            }

            Ok(TokenBundle {
                token: format!("T{n}"),
                expires_in: 1800,
                conversation_id: format!("C{n}"),
            })
        }
    }
}
