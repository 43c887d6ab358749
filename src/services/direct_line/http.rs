use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::config::{ConfigError, DirectLineConfig};
use crate::services::direct_line::client::{DirectLineClient, TokenBundle};
use crate::services::direct_line::error::{DirectLineError, DirectLineResult};
use crate::services::direct_line::user_id::UserId;

#[derive(Serialize)]
struct GenerateTokenRequest<'a> {
    user: GenerateTokenUser<'a>,
}

#[derive(Serialize)]
struct GenerateTokenUser<'a> {
    id: &'a str,
}

/// `reqwest`-backed Direct Line client.
///
/// Built once at startup; the inner `Client` pools connections and is cheap
/// to share across requests.
#[derive(Clone, Debug)]
pub struct HttpDirectLineClient {
    http: Client,
    generate_url: Url,
}

impl HttpDirectLineClient {
    pub fn new(config: &DirectLineConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|_| ConfigError::Invalid("DIRECT_LINE_TIMEOUT_SECONDS"))?;

        Ok(Self {
            http,
            generate_url: config.token_generate_url()?,
        })
    }
}

#[async_trait]
impl DirectLineClient for HttpDirectLineClient {
    async fn generate_token(
        &self,
        secret: &SecretString,
        user_id: &UserId,
    ) -> DirectLineResult<TokenBundle> {
        let body = GenerateTokenRequest {
            user: GenerateTokenUser {
                id: user_id.as_str(),
            },
        };

        // `.json()` also sets `Content-Type: application/json`.
        let response = self
            .http
            .post(self.generate_url.clone())
            .bearer_auth(secret.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectLineError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.json::<TokenBundle>().await?)
    }
}
