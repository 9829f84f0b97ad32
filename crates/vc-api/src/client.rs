//! # Voting API Client
//!
//! Core client type and the request helpers every endpoint module builds on.
//! One method call maps to exactly one HTTP exchange.

use crate::config::ApiConfig;
use crate::error::{extract_message, ApiError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use vc_session::SessionStore;

/// REST client for the voting backend.
///
/// Cheap to clone conceptually but handed around as `Arc` like the session
/// store it borrows its credentials from.
pub struct VotingApiClient {
    http: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl VotingApiClient {
    /// Create a new client from `config`, reading credentials from `session`.
    pub fn new(config: ApiConfig, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// The configured base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(AUTHORIZATION, self.session.authorization_header())
    }

    /// Send a built request and normalize transport and status failures.
    async fn send(&self, builder: RequestBuilder, path: &str) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            if e.is_connect() {
                ApiError::Unreachable(format!("Cannot connect to {}", self.base_url))
            } else {
                ApiError::Transport(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        warn!(path, %status, message = message.as_deref(), "Request rejected");
        Err(ApiError::Rejected { status, message })
    }

    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// `GET path` decoding a JSON response.
    pub(crate) async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        debug!(path, "GET");
        let response = self.send(self.request(Method::GET, path), path).await?;
        Self::decode(response).await
    }

    /// `GET path` returning the plain-text body.
    pub(crate) async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        debug!(path, "GET (text)");
        let response = self.send(self.request(Method::GET, path), path).await?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// `POST path` with a JSON body, decoding a JSON response.
    pub(crate) async fn post_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        debug!(path, "POST");
        let response = self
            .send(self.request(Method::POST, path).json(body), path)
            .await?;
        Self::decode(response).await
    }

    /// `POST path` with a JSON body, returning the plain-text response.
    pub(crate) async fn post_text<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        debug!(path, "POST (text)");
        let response = self
            .send(self.request(Method::POST, path).json(body), path)
            .await?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// `PUT path` with a JSON body, decoding a JSON response.
    pub(crate) async fn put_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        debug!(path, "PUT");
        let response = self
            .send(self.request(Method::PUT, path).json(body), path)
            .await?;
        Self::decode(response).await
    }

    /// `DELETE path`, ignoring the response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        self.send(self.request(Method::DELETE, path), path).await?;
        Ok(())
    }
}
