//! Client configuration and construction.

use crate::error::Result;
use crate::http::HttpClient;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default base URL of a locally running Draw Things API server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7860";

/// Default HTTP timeout. Generation can take minutes on slower hardware.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Sink for request/response diagnostic lines.
///
/// The client calls this with one line before each request (the outbound URL
/// and serialized body) and one line after each response (status, then body).
/// Implementations must not panic; the client treats logging as fire-and-forget
/// and an absent logger as the default, silent case.
///
/// Note that the outbound line contains the fully serialized request body,
/// prompt text included. Install a sink only where that is acceptable.
pub trait Logger: Send + Sync {
    /// Emits one formatted diagnostic line.
    fn log(&self, message: fmt::Arguments<'_>);
}

/// A `Logger` that writes to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLogger;

impl Logger for StderrLogger {
    fn log(&self, message: fmt::Arguments<'_>) {
        eprintln!("{message}");
    }
}

/// Builder for [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    logger: Option<Arc<dyn Logger>>,
}

impl ClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL of the API server. Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the HTTP timeout. Defaults to [`DEFAULT_TIMEOUT`].
    ///
    /// A request still in flight when the timeout elapses is aborted and
    /// surfaced as a network error.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Installs a logging sink for request/response diagnostics.
    pub fn logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        // A trailing slash would produce a double slash when the endpoint
        // path is joined on.
        let base_url = base_url.trim_end_matches('/').to_string();
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let http = HttpClient::new(timeout, self.logger)?;

        Ok(Client {
            base_url,
            timeout,
            http,
        })
    }
}

/// Client for the Draw Things API.
///
/// Configuration is fixed at construction time; the client is immutable and
/// safe to share across concurrent generate calls, each of which is an
/// independent request/response exchange.
pub struct Client {
    base_url: String,
    timeout: Duration,
    pub(crate) http: HttpClient,
}

impl Client {
    /// Creates a client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Creates a new [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the base URL of the client.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured HTTP timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
