//! Error types for the Txbit client library.

use thiserror::Error;

/// The main error type for all Txbit client operations.
#[derive(Error, Debug)]
pub enum TxbitError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Txbit API returned an error
    #[error("Txbit API error: {0}")]
    Api(ApiError),

    /// Endpoint group name did not parse to one of the three known groups
    #[error("Unknown endpoint group: {0}")]
    UnknownEndpointGroup(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: API key and secret required for market and account endpoints")]
    MissingCredentials,
}

/// Txbit API error messages.
///
/// These are errors returned by the Txbit API itself when the response
/// envelope has `success` set to false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The error message from Txbit (e.g. "INVALID_MARKET")
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    /// Message used when a failed envelope carries no message of its own.
    pub const FALLBACK_MESSAGE: &'static str = "API call failed";

    /// Create a new API error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build an API error from the envelope's optional `message` field.
    ///
    /// Some endpoints return `success: false` with an empty or missing
    /// message; those map to [`ApiError::FALLBACK_MESSAGE`] so callers never
    /// see a blank error.
    pub fn from_envelope(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| Self::FALLBACK_MESSAGE.to_string());
        Self { message }
    }

    /// Check if this is an unknown market error.
    pub fn is_invalid_market(&self) -> bool {
        self.message == api_messages::INVALID_MARKET
    }

    /// Check if this is an unknown currency error.
    pub fn is_invalid_currency(&self) -> bool {
        self.message == api_messages::INVALID_CURRENCY
    }

    /// Check if this is an invalid API key error.
    pub fn is_invalid_apikey(&self) -> bool {
        self.message == api_messages::APIKEY_INVALID
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.message == api_messages::INVALID_SIGNATURE
    }

    /// Check if this is an insufficient funds error.
    pub fn is_insufficient_funds(&self) -> bool {
        self.message == api_messages::INSUFFICIENT_FUNDS
    }

    /// Check if this is a permission denied error.
    pub fn is_permission_denied(&self) -> bool {
        self.message == api_messages::INVALID_PERMISSION
    }
}

/// Known Txbit error messages for pattern matching.
pub mod api_messages {
    /// Market name is not listed on the exchange.
    pub const INVALID_MARKET: &str = "INVALID_MARKET";
    /// Currency code is not listed on the exchange.
    pub const INVALID_CURRENCY: &str = "INVALID_CURRENCY";
    /// The `apikey` parameter was rejected.
    pub const APIKEY_INVALID: &str = "APIKEY_INVALID";
    /// The `apisign` header did not match the request.
    pub const INVALID_SIGNATURE: &str = "INVALID_SIGNATURE";
    /// The key lacks the permission for the requested group.
    pub const INVALID_PERMISSION: &str = "INVALID_PERMISSION";
    /// Balance too low for the requested order or withdrawal.
    pub const INSUFFICIENT_FUNDS: &str = "INSUFFICIENT_FUNDS";
    /// The `uuid` parameter did not name a known order.
    pub const UUID_INVALID: &str = "UUID_INVALID";
    /// Order is no longer open.
    pub const ORDER_NOT_OPEN: &str = "ORDER_NOT_OPEN";
    /// The `nonce` parameter was missing from a signed request.
    pub const NONCE_NOT_PROVIDED: &str = "NONCE_NOT_PROVIDED";
    /// Requested withdrawal is below the currency minimum.
    pub const WITHDRAWAL_TOO_SMALL: &str = "WITHDRAWAL_TOO_SMALL";
}
