//! Error types for the Draw Things client.

/// Boxed error cause, kept for chaining and inspection.
type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Detail line for API errors: the status text when the server provided one,
/// otherwise the raw body.
fn api_detail<'a>(status_text: &'a str, body: &'a str) -> &'a str {
    if status_text.is_empty() {
        body
    } else {
        status_text
    }
}

/// Errors that can occur while generating images.
///
/// The variants form a closed taxonomy: every failure is classified into
/// exactly one kind at the point where it first becomes distinguishable and
/// is never re-classified further up the call chain. Callers match on the
/// variant (or use the `is_*` predicates), never on message text.
#[derive(Debug, thiserror::Error)]
pub enum DrawThingsError {
    /// A request parameter violates its documented domain.
    ///
    /// Raised before any network call is made.
    #[error("validation error for field '{field}': {message}")]
    Validation {
        /// Name of the offending request field.
        field: String,
        /// Human-readable reason for the rejection.
        message: String,
    },

    /// The request could not be completed at the transport layer.
    ///
    /// Covers timeouts, connection refused, DNS failures, and unreadable or
    /// unparsable response bodies.
    #[error("network error: {message}")]
    Network {
        /// What failed.
        message: String,
        /// Underlying cause, where one exists.
        #[source]
        source: Option<Cause>,
    },

    /// The server returned a response with a non-success status code.
    #[error("API error (status {status}): {}", api_detail(.status_text, .body))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Canonical status text (e.g. "Internal Server Error").
        status_text: String,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The response was transport-successful and well-formed JSON, but the
    /// payload could not be turned into usable image data (empty `images`
    /// array, malformed base64).
    #[error("decode error: {message}")]
    Decode {
        /// What failed.
        message: String,
        /// Underlying cause, where one exists.
        #[source]
        source: Option<Cause>,
    },

    /// Local filesystem failure while persisting a generated image.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DrawThingsError {
    /// Returns true if this is a [`DrawThingsError::Validation`] error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true if this is a [`DrawThingsError::Network`] error.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Returns true if this is a [`DrawThingsError::Api`] error.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns true if this is a [`DrawThingsError::Decode`] error.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns the HTTP status code for [`DrawThingsError::Api`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn network(message: impl Into<String>, source: impl Into<Cause>) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn decode_with(message: impl Into<String>, source: impl Into<Cause>) -> Self {
        Self::Decode {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Result type alias for Draw Things client operations.
pub type Result<T> = std::result::Result<T, DrawThingsError>;
