//! captcha
//!
//! Thin client for CAPTCHA verification services.
//!
//! # Architecture
//!
//! The [`Captcha`] trait defines the interface for verification services.
//! Application code uses the [`create_captcha`] factory rather than naming a
//! concrete client, so swapping providers is a configuration change.
//!
//! Verification verdicts come back as [`Outcome`](crate::outcome::Outcome)
//! values: a rejected token is an expected failure carried in the `Err`
//! variant, not a raised error.
//!
//! # Modules
//!
//! - `traits`: Core `Captcha` trait and request/response types
//! - [`siteverify`]: HTTP client for the shared siteverify wire contract
//! - [`mock`]: Mock implementation for deterministic testing
//! - `factory`: Provider selection and client creation

mod factory;
pub mod mock;
pub mod siteverify;
mod traits;

pub use factory::{create_captcha, Provider};
pub use mock::MockCaptcha;
pub use siteverify::SiteverifyClient;
pub use traits::*;
