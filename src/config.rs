use std::env;

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Personal access token. Unauthenticated requests work but hit the
    /// anonymous rate limit quickly.
    pub github_token: Option<String>,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let api_base_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                Error::Config(format!("REQUEST_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            github_token,
            api_base_url,
            request_timeout_secs,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
