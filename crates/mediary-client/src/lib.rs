//! HTTP client for the mediary catalog API.
//!
//! Provides a minimal client with bearer-token auth, an optional CSRF token
//! for mutating requests, generic GET/POST/PUT/DELETE helpers, and domain
//! methods (media fetch, search, member relations). The CLI uses this
//! client directly.

pub mod api;

use anyhow::{Context, Result};
use mediary_core::{ClientConfig, ClientError};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Authentication strategy for the API.
#[derive(Clone, Debug, Default)]
pub enum Auth {
    /// `Authorization: Bearer {token}`
    Bearer(String),
    /// Public endpoints only.
    #[default]
    None,
}

/// Response envelope: the API wraps every payload as `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// HTTP client for the mediary API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth: Auth,
    csrf_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: String, auth: Auth) -> Result<Self> {
        Self::with_timeout(base_url, auth, Duration::from_secs(60))
    }

    pub fn with_timeout(base_url: String, auth: Auth, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            csrf_token: None,
        })
    }

    /// Build a client from `ClientConfig` (MEDIARY_API_URL, MEDIARY_TOKEN,
    /// MEDIARY_CSRF_TOKEN).
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let auth = match &config.token {
            Some(token) => Auth::Bearer(token.clone()),
            None => Auth::None,
        };
        let mut client = Self::with_timeout(
            config.api_url.clone(),
            auth,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        client.csrf_token = config.csrf_token.clone();
        Ok(client)
    }

    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        Self::from_config(&config)
    }

    /// CSRF token sent as `X-CSRF-Token` on mutating requests.
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            Auth::Bearer(token) => request.header("Authorization", format!("Bearer {}", token)),
            Auth::None => request,
        }
    }

    // The backend rejects mutating requests without a CSRF token; GETs never
    // carry one.
    fn apply_csrf(
        &self,
        request: reqwest::RequestBuilder,
        method: &Method,
    ) -> reqwest::RequestBuilder {
        let mutating = matches!(method.as_str(), "POST" | "PUT" | "DELETE");
        match &self.csrf_token {
            Some(token) if mutating => request.header("X-CSRF-Token", token.as_str()),
            _ => request,
        }
    }

    async fn handle<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::from_status(status.as_u16(), message).into());
        }

        let body: T = response
            .json()
            .await
            .context("Failed to parse response as JSON")?;

        Ok(body)
    }

    /// GET request with optional query parameters. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.build_url(path);
        tracing::debug!(%url, "GET");
        let mut request = self.apply_auth(self.client.get(&url));

        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.context("Failed to send request")?;
        self.handle(response).await
    }

    /// POST JSON body and deserialize response.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        tracing::debug!(%url, "POST");
        let request = self.client.post(&url).json(body);
        let request = self.apply_csrf(self.apply_auth(request), &Method::POST);

        let response = request.send().await.context("Failed to send request")?;
        self.handle(response).await
    }

    /// PUT JSON body and deserialize response.
    pub async fn put_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        tracing::debug!(%url, "PUT");
        let request = self.client.put(&url).json(body);
        let request = self.apply_csrf(self.apply_auth(request), &Method::PUT);

        let response = request.send().await.context("Failed to send request")?;
        self.handle(response).await
    }

    /// DELETE request, optionally with a JSON body. Returns Ok(()) on success.
    pub async fn delete<B: serde::Serialize>(&self, path: &str, body: Option<&B>) -> Result<()> {
        let url = self.build_url(path);
        tracing::debug!(%url, "DELETE");
        let mut request = self.client.delete(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let request = self.apply_csrf(self.apply_auth(request), &Method::DELETE);

        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::from_status(status.as_u16(), message).into());
        }

        Ok(())
    }

    /// DELETE request with a JSON body, deserializing the response.
    pub async fn delete_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        tracing::debug!(%url, "DELETE");
        let request = self.client.delete(&url).json(body);
        let request = self.apply_csrf(self.apply_auth(request), &Method::DELETE);

        let response = request.send().await.context("Failed to send request")?;
        self.handle(response).await
    }

    /// Raw client for custom requests. Caller must apply auth via build_url
    /// and headers.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

// Re-export domain response types for convenience.
pub use api::{ClassifiedBatch, FollowRequestList, SearchResponse};
pub use mediary_core::classify::{ClassifiedRecord, MediaKind};
pub use mediary_core::models::{
    FollowRequestKind, FollowResponse, FollowStatus, Member,
};
