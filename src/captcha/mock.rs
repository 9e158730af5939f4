//! captcha::mock
//!
//! Mock captcha implementation for deterministic testing.
//!
//! # Design
//!
//! The mock answers from a script of queued verdicts, falling back to a
//! plain success once the script runs out. Every request is recorded so
//! tests can assert on what was sent.
//!
//! # Example
//!
//! ```
//! use verdict::captcha::{Captcha, ErrorCode, MockCaptcha, VerifyRequest};
//!
//! # tokio_test::block_on(async {
//! let captcha = MockCaptcha::new();
//! captcha.push_rejection(vec![ErrorCode::InvalidInputResponse]);
//!
//! let verdict = captcha.verify(VerifyRequest::new("stale-token")).await;
//! assert!(verdict.is_err());
//!
//! // Script exhausted: subsequent calls succeed.
//! let verdict = captcha.verify(VerifyRequest::new("fresh-token")).await;
//! assert!(verdict.is_ok());
//!
//! assert_eq!(captcha.requests().len(), 2);
//! # });
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{Captcha, CaptchaError, ErrorCode, Verification, VerifyRequest};
use crate::outcome::Outcome;

/// Mock captcha for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockCaptcha {
    inner: Arc<Mutex<MockCaptchaInner>>,
}

#[derive(Debug, Default)]
struct MockCaptchaInner {
    /// Queued verdicts, consumed front to back.
    script: VecDeque<Outcome<Verification, CaptchaError>>,
    /// Recorded requests for test verification.
    requests: Vec<VerifyRequest>,
}

impl MockCaptcha {
    /// Create a mock that succeeds on every call until scripted otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an exact verdict for the next unscripted call.
    pub fn push_outcome(&self, outcome: Outcome<Verification, CaptchaError>) {
        self.inner.lock().unwrap().script.push_back(outcome);
    }

    /// Queue a service rejection carrying `codes`.
    pub fn push_rejection(&self, codes: Vec<ErrorCode>) {
        self.push_outcome(Outcome::Err(CaptchaError::Rejected { codes }));
    }

    /// All requests seen so far, in call order.
    pub fn requests(&self) -> Vec<VerifyRequest> {
        self.inner.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl Captcha for MockCaptcha {
    async fn verify(&self, request: VerifyRequest) -> Outcome<Verification, CaptchaError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);
        inner.script.pop_front().unwrap_or(Outcome::Ok(Verification {
            challenge_ts: None,
            hostname: Some("mock.invalid".into()),
            credit: None,
            score: None,
        }))
    }
}
