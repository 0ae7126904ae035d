use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client configuration loaded from environment variables (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    /// `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_url: std::env::var("SCREENER_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout: optional_env("SCREENER_TIMEOUT_SECS")
                .map(|v| parse_timeout(&v))
                .transpose()?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("SCREENER_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"))?;
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_parse_timeout_accepts_seconds() {
        assert_eq!(parse_timeout(" 30 ").unwrap(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_timeout_rejects_garbage() {
        let err = parse_timeout("soon").unwrap_err();
        assert!(err.to_string().contains("SCREENER_TIMEOUT_SECS"));
    }

    #[test]
    fn test_cli_url_overrides_env_url() {
        let config = config().with_api_url(Some("http://screening.internal:9000".to_string()));
        assert_eq!(config.api_url, "http://screening.internal:9000");
    }

    #[test]
    fn test_missing_cli_url_keeps_configured_url() {
        assert_eq!(config().with_api_url(None).api_url, DEFAULT_API_URL);
    }
}
