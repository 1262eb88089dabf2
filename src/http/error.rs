//! Error types for node client operations.
//!
//! This module defines [`SdkError`], the only error type surfaced by the
//! transport and by every catalog method built on top of it.

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Errors that can occur while talking to a STRAT node.
///
/// Every failure is reported through this one type. Variants that wrap an
/// underlying library error keep it reachable through
/// [`std::error::Error::source`], so callers that need finer classification
/// than the message can still inspect the cause.
///
/// # Error Categories
///
/// - **Network errors**: [`Network`](SdkError::Network),
///   [`Middleware`](SdkError::Middleware),
///   [`MalformedResponse`](SdkError::MalformedResponse)
/// - **Node errors**: [`Api`](SdkError::Api),
///   [`MissingField`](SdkError::MissingField)
/// - **Client errors**: [`UnsupportedMethod`](SdkError::UnsupportedMethod),
///   [`Closed`](SdkError::Closed), [`InvalidConfig`](SdkError::InvalidConfig),
///   [`Url`](SdkError::Url), [`RequestEncoding`](SdkError::RequestEncoding)
///
/// # Example
///
/// ```rust,no_run
/// use strat::http::SdkError;
///
/// fn handle_error(err: SdkError) {
///     match err {
///         SdkError::Api { status, message } => {
///             eprintln!("Node rejected the request ({}): {}", status, message);
///         }
///         err if err.is_network() => eprintln!("Node unreachable: {}", err),
///         _ => eprintln!("Other error: {}", err),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum SdkError {
    /// The HTTP request failed before a response was received.
    ///
    /// This typically indicates connectivity issues such as:
    /// - Connection refused (node not running)
    /// - Connection timeout
    /// - DNS resolution failure
    /// - A response body that could not be read
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request failed inside the middleware stack.
    #[error("Network error: {0}")]
    Middleware(#[source] reqwest_middleware::Error),

    /// The node answered with a non-success status code.
    ///
    /// `message` is the node's `error` field when the body carried one, and
    /// `Unknown error` otherwise.
    #[error("API Error ({status}): {message}")]
    Api {
        /// The HTTP status code returned by the node.
        status: StatusCode,
        /// The node-reported error text.
        message: String,
    },

    /// A success response carried a body that is not valid JSON.
    #[error("Network error: malformed response body: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// A request body could not be encoded as JSON.
    ///
    /// Only reachable through bodies whose `Serialize` impl can fail, such as
    /// maps with non-string keys. The catalog's own bodies always encode; a
    /// non-finite `f64` amount in them is sent as `null`.
    #[error("Could not encode request body: {0}")]
    RequestEncoding(#[source] serde_json::Error),

    /// A success response did not contain a field the caller relies on.
    #[error("Malformed response: missing or invalid field `{0}`")]
    MissingField(&'static str),

    /// The dispatcher was handed a verb other than GET, POST, PUT or DELETE.
    ///
    /// Catalog methods never produce this; seeing it means a programming error.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(Method),

    /// The client was used after [`close`](crate::client::NodeClient::close).
    #[error("Client has been closed")]
    Closed,

    /// The client configuration failed validation.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Joining the base URL with a request path produced an invalid URL.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest_middleware::Error> for SdkError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => SdkError::Network(e),
            other => SdkError::Middleware(other),
        }
    }
}

impl SdkError {
    /// Returns the HTTP status for errors reported by the node.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SdkError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the exchange failed to complete, as opposed to the node
    /// rejecting the request.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            SdkError::Network(_) | SdkError::Middleware(_) | SdkError::MalformedResponse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_contains_status_and_text() {
        let err = SdkError::Api {
            status: StatusCode::BAD_REQUEST,
            message: "insufficient funds".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("insufficient funds"));
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert!(!err.is_network());
    }

    #[test]
    fn malformed_response_is_classified_as_network() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = SdkError::MalformedResponse(parse_err);
        assert!(err.is_network());
        assert!(err.to_string().starts_with("Network error"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unsupported_method_names_the_verb() {
        let err = SdkError::UnsupportedMethod(Method::PATCH);
        assert_eq!(err.to_string(), "Unsupported HTTP method: PATCH");
        assert_eq!(err.status(), None);
    }
}
