//! captcha::siteverify
//!
//! HTTP client for the siteverify wire contract.
//!
//! # Design
//!
//! hCaptcha, reCAPTCHA, and Cloudflare Turnstile all expose the same
//! verification endpoint shape: one POST of form-encoded fields (`secret`,
//! `response`, optionally `remoteip` and `sitekey`) answered by a JSON body
//! whose `success` flag is the verdict. This client speaks that contract and
//! sorts the two body shapes onto [`Outcome`]:
//!
//! - `{"success": true, ...}` becomes `Outcome::Ok(Verification)`
//! - `{"success": false, "error-codes": [...]}` becomes
//!   `Outcome::Err(CaptchaError::Rejected { codes })`
//!
//! Transport problems (connection failures, non-2xx statuses, undecodable
//! bodies) map to the transport kinds of [`CaptchaError`]; they are never
//! reported as `Rejected`.
//!
//! No retry is performed. Rate limiting and backoff are the caller's
//! responsibility.
//!
//! # Example
//!
//! ```ignore
//! use verdict::captcha::{Captcha, SiteverifyClient, Provider, VerifyRequest};
//!
//! let client = SiteverifyClient::new(Provider::HCaptcha, "0x0000secret");
//! let verdict = client
//!     .verify(VerifyRequest::new(widget_token).with_remote_ip(peer_ip))
//!     .await;
//! if verdict.is_ok() {
//!     // let the request through
//! }
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use super::factory::Provider;
use super::traits::{Captcha, CaptchaError, ErrorCode, Verification, VerifyRequest};
use crate::outcome::Outcome;

/// Siteverify client for one provider account.
///
/// Holds the shared-secret credential; cheap to clone, one instance per
/// secret is enough for a whole process since `reqwest::Client` pools
/// connections internally.
#[derive(Clone)]
pub struct SiteverifyClient {
    /// HTTP client for making requests
    client: Client,
    /// The account's shared secret, sent with every verification
    secret: String,
    /// Verification endpoint URL (fixed per provider, overridable for tests)
    endpoint: String,
}

// Custom Debug to avoid exposing the secret
impl std::fmt::Debug for SiteverifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteverifyClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

/// Raw siteverify response body, covering both verdict shapes.
#[derive(Debug, Deserialize)]
struct SiteverifyBody {
    success: bool,
    #[serde(default)]
    challenge_ts: Option<String>,
    #[serde(default)]
    hostname: Option<String>,
    #[serde(default)]
    credit: Option<bool>,
    #[serde(default)]
    score: Option<f64>,
    #[serde(rename = "error-codes", default)]
    error_codes: Vec<ErrorCode>,
}

impl SiteverifyClient {
    /// Create a client for `provider` with the account's shared secret.
    pub fn new(provider: Provider, secret: impl Into<String>) -> Self {
        Self::with_endpoint(provider.endpoint(), secret)
    }

    /// Create a client against an explicit endpoint URL.
    ///
    /// Intended for tests and self-hosted deployments; production callers
    /// should use [`new`] with a [`Provider`].
    ///
    /// [`new`]: SiteverifyClient::new
    pub fn with_endpoint(endpoint: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            secret: secret.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Decode a siteverify response, sorting the verdict onto `Outcome`.
    async fn decode_response(&self, response: Response) -> Outcome<Verification, CaptchaError> {
        let status = response.status();
        if !status.is_success() {
            return Outcome::Err(Self::status_error(status, response).await);
        }

        let body: SiteverifyBody = match response.json().await {
            Ok(body) => body,
            Err(e) => return Outcome::Err(CaptchaError::MalformedResponse(e.to_string())),
        };

        if body.success {
            Outcome::Ok(Verification {
                challenge_ts: body.challenge_ts,
                hostname: body.hostname,
                credit: body.credit,
                score: body.score,
            })
        } else {
            Outcome::Err(CaptchaError::Rejected {
                codes: body.error_codes,
            })
        }
    }

    /// Map a non-2xx response to an API error, keeping the body text when
    /// there is one.
    async fn status_error(status: StatusCode, response: Response) -> CaptchaError {
        let message = match response.text().await {
            Ok(text) if !text.is_empty() => text,
            _ => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        CaptchaError::ApiError {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl Captcha for SiteverifyClient {
    async fn verify(&self, request: VerifyRequest) -> Outcome<Verification, CaptchaError> {
        let mut form: Vec<(&str, &str)> = vec![
            ("secret", self.secret.as_str()),
            ("response", request.response.as_str()),
        ];
        if let Some(ip) = request.remote_ip.as_deref() {
            form.push(("remoteip", ip));
        }
        if let Some(key) = request.site_key.as_deref() {
            form.push(("sitekey", key));
        }

        let response = match self.client.post(&self.endpoint).form(&form).send().await {
            Ok(response) => response,
            Err(e) => return Outcome::Err(CaptchaError::NetworkError(e.to_string())),
        };

        self.decode_response(response).await
    }
}
