//! HTTP transport and response decoding.
//!
//! One layer below the generate pipeline: [`HttpClient::post_json`] issues
//! exactly one POST and reports any transport-level failure as a network
//! error; [`HttpClient::decode_json`] drains the body exactly once and
//! classifies a non-2xx status as an API error and a JSON parse failure as a
//! network error. The pipeline above never re-classifies either.

use crate::client::Logger;
use crate::error::{DrawThingsError, Result};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Thin wrapper over [`reqwest::Client`] carrying the optional logging sink.
pub(crate) struct HttpClient {
    inner: reqwest::Client,
    logger: Option<Arc<dyn Logger>>,
}

impl HttpClient {
    /// Creates a transport with the given timeout installed on the underlying
    /// client.
    pub(crate) fn new(timeout: Duration, logger: Option<Arc<dyn Logger>>) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DrawThingsError::network("failed to build HTTP client", e))?;
        Ok(Self { inner, logger })
    }

    /// Sends a single POST with a JSON body and returns the raw response.
    ///
    /// Serialization failures, malformed URLs, and network-level failures
    /// (DNS, connection refused, timeout) all surface as
    /// [`DrawThingsError::Network`].
    pub(crate) async fn post_json<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        let json = serde_json::to_string(body)
            .map_err(|e| DrawThingsError::network("failed to serialize request body", e))?;

        if let Some(logger) = &self.logger {
            logger.log(format_args!("POST {url}\nRequest body: {json}"));
        }
        tracing::debug!(url, "sending txt2img request");

        let response = self
            .inner
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(json)
            .send()
            .await
            .map_err(|e| DrawThingsError::network("request failed", e))?;

        if let Some(logger) = &self.logger {
            logger.log(format_args!("Response status: {}", response.status()));
        }
        tracing::debug!(status = response.status().as_u16(), "received response");

        Ok(response)
    }

    /// Reads the entire response body and decodes it as JSON.
    ///
    /// The body is drained exactly once on every path, so the connection is
    /// always released back to the pool. A non-2xx status yields
    /// [`DrawThingsError::Api`] carrying the status code, status text, and raw
    /// body, whether or not the body is valid JSON.
    pub(crate) async fn decode_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DrawThingsError::network("failed to read response body", e))?;

        if let Some(logger) = &self.logger {
            logger.log(format_args!("Response body: {body}"));
        }

        if !status.is_success() {
            return Err(DrawThingsError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| DrawThingsError::network("failed to parse response body", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::sync::Mutex;

    #[derive(Debug, Deserialize)]
    struct Echo {
        value: String,
    }

    /// Logger that captures lines for assertions.
    #[derive(Default)]
    struct CapturingLogger {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl Logger for CapturingLogger {
        fn log(&self, message: std::fmt::Arguments<'_>) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    fn transport() -> HttpClient {
        HttpClient::new(Duration::from_secs(5), None).unwrap()
    }

    #[tokio::test]
    async fn test_post_json_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/echo")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(r#"{"value": "ok"}"#)
            .create_async()
            .await;

        let http = transport();
        let url = format!("{}/echo", server.url());
        let response = http
            .post_json(&url, &serde_json::json!({"hello": "world"}))
            .await
            .unwrap();
        let decoded: Echo = http.decode_json(response).await.unwrap();

        assert_eq!(decoded.value, "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_json_connection_refused() {
        let http = transport();
        // Port 1 is never listening.
        let err = http
            .post_json("http://127.0.0.1:1/echo", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_decode_json_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/echo")
            .with_status(500)
            .with_body("internal server error")
            .create_async()
            .await;

        let http = transport();
        let url = format!("{}/echo", server.url());
        let response = http.post_json(&url, &serde_json::json!({})).await.unwrap();
        let err = http.decode_json::<Echo>(response).await.unwrap_err();

        match err {
            DrawThingsError::Api {
                status,
                status_text,
                body,
            } => {
                assert_eq!(status, 500);
                assert_eq!(status_text, "Internal Server Error");
                assert_eq!(body, "internal server error");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_decode_json_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/echo")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let http = transport();
        let url = format!("{}/echo", server.url());
        let response = http.post_json(&url, &serde_json::json!({})).await.unwrap();
        let err = http.decode_json::<Echo>(response).await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_logger_sees_request_and_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/echo")
            .with_status(200)
            .with_body(r#"{"value": "ok"}"#)
            .create_async()
            .await;

        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = CapturingLogger {
            lines: Arc::clone(&lines),
        };
        let http = HttpClient::new(Duration::from_secs(5), Some(Arc::new(logger))).unwrap();

        let url = format!("{}/echo", server.url());
        let response = http
            .post_json(&url, &serde_json::json!({"prompt": "a cat"}))
            .await
            .unwrap();
        let _: Echo = http.decode_json(response).await.unwrap();

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(&format!("POST {url}")));
        assert!(lines[0].contains(r#""prompt":"a cat""#));
        assert!(lines[1].contains("200"));
        assert!(lines[2].contains(r#""value": "ok""#));
    }
}
