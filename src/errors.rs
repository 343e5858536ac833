//! CCXT Error Hierarchy
//!
//! The subset of CCXT's error classes the Coinmate adapter raises

use thiserror::Error;

/// CCXT error hierarchy
///
/// Error classes follow the CCXT TypeScript hierarchy:
/// - BaseError
///   - ExchangeError (exchange-specific errors)
///     - AuthenticationError
///     - ArgumentsRequired
///     - BadRequest
///       - BadSymbol
///     - NotSupported
///   - NetworkError
///     - ExchangeNotAvailable
///     - RequestTimeout
///   - BadResponse
#[derive(Error, Debug)]
pub enum CcxtError {
    // === ExchangeError family ===
    /// Generic exchange error, optionally carrying the raw response body
    #[error("Exchange error: {message}")]
    ExchangeError {
        message: String,
        body: Option<serde_json::Value>,
    },

    /// Authentication failed or credentials are missing
    #[error("Authentication error: {message}")]
    AuthenticationError { message: String },

    /// Required arguments missing
    #[error("Arguments required: {message}")]
    ArgumentsRequired { message: String },

    /// Invalid request parameters
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Invalid trading symbol
    #[error("Bad symbol: {symbol}")]
    BadSymbol { symbol: String },

    /// Feature or endpoint not supported by this exchange
    #[error("Not supported: {feature}")]
    NotSupported { feature: String },

    // === NetworkError family ===
    /// Generic network error
    #[error("Network error: {url} - {message}")]
    NetworkError { url: String, message: String },

    /// Exchange is temporarily unavailable
    #[error("Exchange not available: {message}")]
    ExchangeNotAvailable { message: String },

    /// Request timed out
    #[error("Request timeout: {url}")]
    RequestTimeout { url: String },

    /// Invalid response from exchange
    #[error("Bad response: {message}")]
    BadResponse { message: String },

    // === Parsing errors ===
    /// JSON parsing error
    #[error("JSON error: {message}")]
    JsonError { message: String },
}

impl CcxtError {
    /// ExchangeError without a response body
    pub fn exchange(message: impl Into<String>) -> Self {
        CcxtError::ExchangeError {
            message: message.into(),
            body: None,
        }
    }

    /// Returns the error code as a string constant
    pub fn code(&self) -> &'static str {
        match self {
            CcxtError::ExchangeError { .. } => "EXCHANGE_ERROR",
            CcxtError::AuthenticationError { .. } => "AUTHENTICATION_ERROR",
            CcxtError::ArgumentsRequired { .. } => "ARGUMENTS_REQUIRED",
            CcxtError::BadRequest { .. } => "BAD_REQUEST",
            CcxtError::BadSymbol { .. } => "BAD_SYMBOL",
            CcxtError::NotSupported { .. } => "NOT_SUPPORTED",
            CcxtError::NetworkError { .. } => "NETWORK_ERROR",
            CcxtError::ExchangeNotAvailable { .. } => "EXCHANGE_NOT_AVAILABLE",
            CcxtError::RequestTimeout { .. } => "REQUEST_TIMEOUT",
            CcxtError::BadResponse { .. } => "BAD_RESPONSE",
            CcxtError::JsonError { .. } => "JSON_ERROR",
        }
    }

    /// Raw exchange response attached to the error, if any
    pub fn response_body(&self) -> Option<&serde_json::Value> {
        match self {
            CcxtError::ExchangeError { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Returns true if this is an authentication-related error
    pub fn is_auth_error(&self) -> bool {
        matches!(self, CcxtError::AuthenticationError { .. })
    }

    /// Returns true if this is a network-related error
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            CcxtError::NetworkError { .. }
                | CcxtError::ExchangeNotAvailable { .. }
                | CcxtError::RequestTimeout { .. }
        )
    }
}

// === From implementations for common error types ===

impl From<serde_json::Error> for CcxtError {
    fn from(err: serde_json::Error) -> Self {
        CcxtError::JsonError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for CcxtError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        if err.is_timeout() {
            CcxtError::RequestTimeout { url }
        } else if err.is_connect() {
            CcxtError::NetworkError {
                url,
                message: "Connection failed".into(),
            }
        } else {
            CcxtError::NetworkError {
                url,
                message: err.to_string(),
            }
        }
    }
}

/// Result 타입 alias
pub type CcxtResult<T> = Result<T, CcxtError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_codes() {
        let err = CcxtError::AuthenticationError {
            message: "UID required".into(),
        };
        assert_eq!(err.code(), "AUTHENTICATION_ERROR");
        assert!(err.is_auth_error());

        let err = CcxtError::BadSymbol {
            symbol: "FOO/BAR".into(),
        };
        assert_eq!(err.code(), "BAD_SYMBOL");
        assert_eq!(err.to_string(), "Bad symbol: FOO/BAR");
    }

    #[test]
    fn test_network_errors() {
        let network_err = CcxtError::NetworkError {
            url: "https://coinmate.io/api/ticker".into(),
            message: "Connection refused".into(),
        };
        assert!(network_err.is_network_error());

        let timeout_err = CcxtError::RequestTimeout {
            url: "https://coinmate.io/api/ticker".into(),
        };
        assert!(timeout_err.is_network_error());

        let exchange_err = CcxtError::exchange("coinmate rejected");
        assert!(!exchange_err.is_network_error());
    }

    #[test]
    fn test_response_body() {
        let body = json!({"error": true, "errorMessage": "x", "data": null});
        let err = CcxtError::ExchangeError {
            message: format!("coinmate {}", body),
            body: Some(body.clone()),
        };
        assert_eq!(err.response_body(), Some(&body));
        assert!(err.to_string().contains("errorMessage"));

        assert!(CcxtError::exchange("plain").response_body().is_none());
        assert!(CcxtError::BadResponse {
            message: "not json".into()
        }
        .response_body()
        .is_none());
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CcxtError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "JSON_ERROR");
    }
}
