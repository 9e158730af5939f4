//! captcha::traits
//!
//! Captcha trait definition and the siteverify request/response types.
//!
//! # Design
//!
//! The `Captcha` trait is async because verification involves one network
//! call. Verification returns an [`Outcome`] rather than raising: a token the
//! service rejects is an expected failure (`CaptchaError::Rejected` carrying
//! the service's error codes), not a fault.
//!
//! # Example
//!
//! ```ignore
//! use verdict::captcha::{Captcha, VerifyRequest};
//!
//! async fn gate(captcha: &dyn Captcha, token: &str) -> bool {
//!     captcha
//!         .verify(VerifyRequest::new(token))
//!         .await
//!         .is_ok()
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::outcome::Outcome;

/// Errors from captcha verification.
///
/// `Rejected` is the service's own verdict; the remaining kinds are
/// transport-level failures that prevented getting a verdict at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CaptchaError {
    /// The service answered `success: false`.
    #[error("captcha rejected: {codes:?}")]
    Rejected {
        /// The `error-codes` list from the response body.
        codes: Vec<ErrorCode>,
    },

    /// API returned a non-success HTTP status.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message, if the body carried one
        message: String,
    },

    /// The response body did not decode as a siteverify payload.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Documented siteverify error codes.
///
/// hCaptcha, reCAPTCHA, and Turnstile share this vocabulary. Codes the
/// service adds later decode as [`ErrorCode::Unknown`] rather than failing
/// the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCode {
    /// The secret parameter was not passed.
    MissingInputSecret,
    /// The secret parameter was invalid or did not exist.
    InvalidInputSecret,
    /// The response parameter (token) was not passed.
    MissingInputResponse,
    /// The response parameter (token) was invalid or expired.
    InvalidInputResponse,
    /// The request was rejected as malformed.
    BadRequest,
    /// The token was already checked once.
    InvalidOrAlreadySeenResponse,
    /// The sitekey in the token does not match the secret.
    SitekeySecretMismatch,
    /// The request timed out on the service side.
    TimeoutOrDuplicate,
    /// A code this library does not know about.
    #[serde(other)]
    Unknown,
}

/// Request to verify a captcha token.
#[derive(Debug, Clone, Default)]
pub struct VerifyRequest {
    /// The token produced by the client-side widget.
    pub response: String,
    /// The end user's IP address, if known.
    pub remote_ip: Option<String>,
    /// The sitekey the token was issued for, if the service checks it.
    pub site_key: Option<String>,
}

impl VerifyRequest {
    /// Build a request carrying only the widget token.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            remote_ip: None,
            site_key: None,
        }
    }

    /// Attach the end user's IP address.
    pub fn with_remote_ip(mut self, ip: impl Into<String>) -> Self {
        self.remote_ip = Some(ip.into());
        self
    }

    /// Attach the expected sitekey.
    pub fn with_site_key(mut self, key: impl Into<String>) -> Self {
        self.site_key = Some(key.into());
        self
    }
}

/// A successful siteverify verdict.
///
/// Mirrors the `success: true` body. Fields beyond the shared contract vary
/// by provider and are kept optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    /// ISO timestamp of the challenge, when the provider reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge_ts: Option<String>,
    /// Hostname of the site the challenge was solved on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Provider credit flag (hCaptcha).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<bool>,
    /// Risk score (reCAPTCHA v3 / hCaptcha enterprise).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Captcha verification service.
#[async_trait]
pub trait Captcha: Send + Sync {
    /// Verify one widget token.
    ///
    /// Returns `Ok` with the service's success body, or `Err` with either
    /// the service's rejection verdict or a transport failure.
    async fn verify(&self, request: VerifyRequest) -> Outcome<Verification, CaptchaError>;
}
