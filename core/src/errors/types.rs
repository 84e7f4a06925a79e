//! Error types for token signing, verification, and store access.
//!
//! Variants carry enough context to be actionable on their own: claim-typing
//! failures name the offending claim, signing-method failures name both
//! algorithms, and store failures carry the transport message. Presentation
//! concerns (status codes, localization) belong to the transport layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Failures raised while signing a token or verifying one.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The input is not an acceptable token: wrong segment count, undecodable
    /// segments, unparseable header or payload, or an embedded `exp` in the
    /// past.
    #[error("malformed token: {reason}")]
    Malformed { reason: String },

    /// The token header declares a signing algorithm other than the one this
    /// service issues. Raised before any signature computation.
    #[error("unexpected signing method: expected {expected}, got {actual}")]
    UnexpectedSigningMethod { expected: String, actual: String },

    #[error("token signature verification failed")]
    InvalidSignature,

    /// A claim decoded, but with the wrong JSON type.
    #[error("claim '{claim}' is not of type {expected} (got {actual})")]
    InvalidClaimType {
        claim: String,
        expected: String,
        actual: String,
    },

    #[error("missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("token signing failed: {message}")]
    SigningFailed { message: String },
}

/// Failures raised by the token store.
///
/// The store only fails one way from the caller's perspective: it could not
/// be reached or did not answer in time. Key absence is a normal answer, not
/// an error.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("token store unavailable: {message}")]
    Unavailable { message: String },
}

/// Serializable error envelope for transport layers.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a single detail to the error response
    pub fn with_detail(mut self, key: impl ToString, value: serde_json::Value) -> Self {
        let mut details = self.details.unwrap_or_default();
        details.insert(key.to_string(), value);
        self.details = Some(details);
        self
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::Malformed { .. } => "MALFORMED_TOKEN",
            TokenError::UnexpectedSigningMethod { .. } => "UNEXPECTED_SIGNING_METHOD",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::InvalidClaimType { .. } => "INVALID_CLAIM_TYPE",
            TokenError::MissingClaim { .. } => "MISSING_CLAIM",
            TokenError::SigningFailed { .. } => "TOKEN_SIGNING_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert StoreError to ErrorResponse
impl From<StoreError> for ErrorResponse {
    fn from(err: StoreError) -> Self {
        let error_code = match &err {
            StoreError::Unavailable { .. } => "STORE_UNAVAILABLE",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}
