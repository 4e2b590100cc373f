//! HTTP transport behind the Teams facade
//!
//! The [`Transport`] trait is the seam between the facade and the network.
//! A transport never fails loudly: a request that produced no usable
//! response at all (connection refused, timeout, unreadable body) yields
//! `None`. Any response that did arrive is handed back with its status so
//! the caller can decide what a non-2xx means.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Response handed back by a [`Transport`]
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// `Location` header, if present
    pub location: Option<String>,
    /// Raw response body
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            location: None,
            body: body.into(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON. An empty body decodes as `{}`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let body = if self.body.trim().is_empty() {
            "{}"
        } else {
            self.body.as_str()
        };

        serde_json::from_str(body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }
}

/// Issues authenticated requests against absolute URLs.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request, returning `None` when no response was obtained
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Option<TransportResponse>;

    async fn get(&self, url: &str) -> Option<TransportResponse> {
        self.send(Method::GET, url, None).await
    }

    async fn post(&self, url: &str, body: Option<&Value>) -> Option<TransportResponse> {
        self.send(Method::POST, url, body).await
    }

    async fn put(&self, url: &str, body: Option<&Value>) -> Option<TransportResponse> {
        self.send(Method::PUT, url, body).await
    }
}

/// reqwest-backed transport using a Graph bearer token
pub struct HttpTransport {
    http: HttpClient,
    token: String,
}

impl HttpTransport {
    /// Create a transport for the given access token and request timeout
    pub fn new(token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("teamsop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            token: token.into(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Option<TransportResponse> {
        log::debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), url)
            .bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("{} {} failed: {}", method, url, ApiError::from(err));
                return None;
            }
        };

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                log::warn!("{} {}: unreadable body: {}", method, url, err);
                return None;
            }
        };

        if !status.is_success() {
            log::warn!("{} {} returned HTTP {}", method, url, status.as_u16());
            log::debug!("Response body: {}", body);
        }

        Some(TransportResponse {
            status: status.as_u16(),
            location,
            body,
        })
    }
}
