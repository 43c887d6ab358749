/*
 * Responsibility
 * - Load process-level settings from the environment (PORT, CORS, Direct Line endpoint)
 * - Validate them (startup fails on invalid values)
 * - Provide the per-request secret lookup used by token issuance
 */
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Environment key holding the Direct Line secret.
///
/// Read on every request through [`SecretSource`], never at startup.
pub const DIRECT_LINE_SECRET_KEY: &str = "DIRECT_LINE_SECRET";

const DEFAULT_DIRECT_LINE_BASE_URL: &str = "https://directline.botframework.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Startup configuration failures; the payload names the offending key.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug)]
pub struct DirectLineConfig {
    /// Scheme + host of the Direct Line API (regional endpoints differ).
    pub base_url: Url,
    pub request_timeout: Duration,
}

impl DirectLineConfig {
    pub fn token_generate_url(&self) -> Result<Url, ConfigError> {
        self.base_url
            .join("/v3/directline/tokens/generate")
            .map_err(|_| ConfigError::Invalid("DIRECT_LINE_BASE_URL"))
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub direct_line: DirectLineConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let cors_allowed_origins =
            parse_origins(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let base_url = std::env::var("DIRECT_LINE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_DIRECT_LINE_BASE_URL.to_string());
        let base_url =
            Url::parse(&base_url).map_err(|_| ConfigError::Invalid("DIRECT_LINE_BASE_URL"))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid("DIRECT_LINE_BASE_URL"));
        }

        let timeout_seconds = match std::env::var("DIRECT_LINE_TIMEOUT_SECONDS") {
            Ok(v) => v
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::Invalid("DIRECT_LINE_TIMEOUT_SECONDS"))?,
            Err(_) => 30,
        };

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            direct_line: DirectLineConfig {
                base_url,
                request_timeout: Duration::from_secs(timeout_seconds),
            },
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Per-request configuration lookup.
///
/// Implementations are consulted on every issuance so a rotated secret takes
/// effect without a restart.
pub trait SecretSource: Send + Sync {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Reads straight from the process environment.
#[derive(Clone, Debug, Default)]
pub struct EnvSecretSource;

impl SecretSource for EnvSecretSource {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_env_accepts_short_and_long_production_names() {
        assert_eq!(AppEnv::parse("production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("PROD"), AppEnv::Production);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
        assert!(!AppEnv::parse("").is_production());
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        let origins = parse_origins(" https://a.example , ,https://b.example,");
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn token_generate_url_replaces_any_base_path() {
        let cfg = DirectLineConfig {
            base_url: Url::parse("https://europe.directline.botframework.com/ignored/").unwrap(),
            request_timeout: Duration::from_secs(5),
        };
        assert_eq!(
            cfg.token_generate_url().unwrap().as_str(),
            "https://europe.directline.botframework.com/v3/directline/tokens/generate"
        );
    }

    #[test]
    fn config_error_names_the_invalid_key() {
        assert_eq!(
            ConfigError::Invalid("PORT").to_string(),
            "invalid configuration: PORT"
        );
    }
}
