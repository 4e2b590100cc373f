//! Mock transport for testing
//!
//! Replays queued responses in order and records every request so tests can
//! assert on method, URL and body without touching the network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::transport::{Transport, TransportResponse};

/// A request captured by [`MockTransport`]
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

/// Mock transport for testing.
///
/// # Example
/// ```ignore
/// let transport = Arc::new(
///     MockTransport::new().respond(TransportResponse::new(200, r#"{"value": []}"#)),
/// );
/// let teams = TeamsBuilder::new().transport(transport.clone()).build()?;
/// teams.list_my_teams().await?;
/// assert_eq!(transport.requests().len(), 1);
/// ```
#[derive(Default)]
pub struct MockTransport {
    /// Queued replies; `None` simulates "no response"
    replies: Mutex<VecDeque<Option<TransportResponse>>>,
    captured: Mutex<Vec<CapturedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request.
    pub fn respond(self, response: TransportResponse) -> Self {
        self.replies.lock().unwrap().push_back(Some(response));
        self
    }

    /// Queue a JSON response with the given status.
    pub fn respond_json(self, status: u16, body: Value) -> Self {
        self.respond(TransportResponse::new(status, body.to_string()))
    }

    /// Queue a "no response" for the next request.
    pub fn no_response(self) -> Self {
        self.replies.lock().unwrap().push_back(None);
        self
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Option<TransportResponse> {
        self.captured.lock().unwrap().push(CapturedRequest {
            method,
            url: url.to_string(),
            body: body.cloned(),
        });

        // An exhausted queue behaves like a dead network
        self.replies.lock().unwrap().pop_front().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_replays_in_order() {
        let mock = MockTransport::new()
            .respond_json(200, json!({"id": "first"}))
            .no_response()
            .respond(TransportResponse::new(202, "").with_location("/op"));

        assert_eq!(mock.get("u1").await.unwrap().status, 200);
        assert!(mock.get("u2").await.is_none());
        assert_eq!(
            mock.post("u3", None).await.unwrap().location.as_deref(),
            Some("/op")
        );
        assert!(mock.get("u4").await.is_none());
    }

    #[tokio::test]
    async fn test_mock_captures_requests() {
        let mock = MockTransport::new();
        let body = json!({"displayName": "x"});
        mock.post("https://example/a", Some(&body)).await;
        mock.put("https://example/b", None).await;

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::POST);
        assert_eq!(requests[0].body, Some(body));
        assert_eq!(requests[1].method, Method::PUT);
        assert_eq!(requests[1].url, "https://example/b");
        assert!(requests[1].body.is_none());
    }
}
