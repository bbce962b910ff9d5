//! Configuration module
//!
//! Client configuration read from the environment (with `.env` support via
//! dotenvy). The API base URL and token are the only required knobs; the
//! rest fall back to constants.

use std::env;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Configuration for the mediary API client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the catalog API, without a trailing slash.
    pub api_url: String,
    /// JWT bearer token. None for unauthenticated (public) access.
    pub token: Option<String>,
    /// CSRF token sent on mutating requests when present.
    pub csrf_token: Option<String>,
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Read configuration from MEDIARY_API_URL, MEDIARY_TOKEN and
    /// MEDIARY_CSRF_TOKEN. Loads `.env` first if one exists.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let api_url = env::var("MEDIARY_API_URL")
            .or_else(|_| env::var("API_URL"))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let token = env::var("MEDIARY_TOKEN").ok().filter(|t| !t.is_empty());
        let csrf_token = env::var("MEDIARY_CSRF_TOKEN").ok().filter(|t| !t.is_empty());

        let request_timeout_secs = env::var("MEDIARY_TIMEOUT_SECS")
            .unwrap_or_else(|_| REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| anyhow::anyhow!("MEDIARY_TIMEOUT_SECS must be a valid number"))?;

        Ok(Self {
            api_url,
            token,
            csrf_token,
            request_timeout_secs,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            csrf_token: None,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}
