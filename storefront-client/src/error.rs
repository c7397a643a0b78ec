use serde::{Deserialize, Serialize};

/// Remote endpoint a request was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// The static catalog snapshot.
    Catalog,
    /// The add-to-cart endpoint.
    Cart,
}

impl Endpoint {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Cart => "cart",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for all storefront client operations.
///
/// Each variant names the [`Endpoint`] that produced it. All variants are
/// serializable for structured error reporting.
///
/// Nothing is retried automatically: callers decide what a failure means for
/// the view (the detail view keeps its loading state, the cart action shows a
/// generic failure notification).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Endpoint that produced the error.
        endpoint: Endpoint,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Endpoint that produced the error.
        endpoint: Endpoint,
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success HTTP status.
    HttpStatus {
        /// Endpoint that produced the error.
        endpoint: Endpoint,
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging, if any.
        raw_message: Option<String>,
    },

    /// The response body could not be parsed.
    ParseError {
        /// Endpoint that produced the error.
        endpoint: Endpoint,
        /// Details about the parse failure.
        detail: String,
    },

    /// A configured URL is not usable.
    InvalidUrl {
        /// Endpoint whose URL is invalid.
        endpoint: Endpoint,
        /// The offending URL.
        url: String,
    },
}

impl ClientError {
    /// Whether the error is an expected outcome of talking to a static host
    /// (bad status, malformed body), used to pick the log level.
    ///
    /// Returns `true` for `warn`, `false` for `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::HttpStatus { .. } | Self::ParseError { .. })
    }

    /// Endpoint the failed request was addressed to.
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::NetworkError { endpoint, .. }
            | Self::Timeout { endpoint, .. }
            | Self::HttpStatus { endpoint, .. }
            | Self::ParseError { endpoint, .. }
            | Self::InvalidUrl { endpoint, .. } => *endpoint,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                endpoint,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{endpoint}] HTTP {status}: {msg}")
                } else {
                    write!(f, "[{endpoint}] HTTP {status}")
                }
            }
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
            Self::InvalidUrl { endpoint, url } => {
                write!(f, "[{endpoint}] Invalid URL: {url}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ClientError::NetworkError {
            endpoint: Endpoint::Catalog,
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[catalog] Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = ClientError::Timeout {
            endpoint: Endpoint::Cart,
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[cart] Request timeout: 30s elapsed");
    }

    #[test]
    fn display_http_status_with_message() {
        let e = ClientError::HttpStatus {
            endpoint: Endpoint::Catalog,
            status: 404,
            raw_message: Some("Not Found".to_string()),
        };
        assert_eq!(e.to_string(), "[catalog] HTTP 404: Not Found");
    }

    #[test]
    fn display_http_status_without_message() {
        let e = ClientError::HttpStatus {
            endpoint: Endpoint::Catalog,
            status: 500,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[catalog] HTTP 500");
    }

    #[test]
    fn display_parse_error() {
        let e = ClientError::ParseError {
            endpoint: Endpoint::Catalog,
            detail: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[catalog] Parse error: expected value at line 1 column 1"
        );
    }

    #[test]
    fn display_invalid_url() {
        let e = ClientError::InvalidUrl {
            endpoint: Endpoint::Cart,
            url: "not a url".to_string(),
        };
        assert_eq!(e.to_string(), "[cart] Invalid URL: not a url");
    }

    #[test]
    fn expected_errors_are_warn_level() {
        let status = ClientError::HttpStatus {
            endpoint: Endpoint::Catalog,
            status: 404,
            raw_message: None,
        };
        let network = ClientError::NetworkError {
            endpoint: Endpoint::Catalog,
            detail: "reset".to_string(),
        };
        assert!(status.is_expected());
        assert!(!network.is_expected());
    }

    #[test]
    fn endpoint_accessor() {
        let e = ClientError::Timeout {
            endpoint: Endpoint::Cart,
            detail: String::new(),
        };
        assert_eq!(e.endpoint(), Endpoint::Cart);
    }

    #[test]
    fn serialize_json_tagged() {
        let e = ClientError::HttpStatus {
            endpoint: Endpoint::Catalog,
            status: 503,
            raw_message: None,
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"HttpStatus\""));
        assert!(json.contains("\"endpoint\":\"catalog\""));
        assert!(json.contains("\"status\":503"));
    }

    #[test]
    fn deserialize_json_round_trip() {
        let original = ClientError::NetworkError {
            endpoint: Endpoint::Cart,
            detail: "connection refused".to_string(),
        };
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: ClientError = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.to_string(), original.to_string());
    }
}
