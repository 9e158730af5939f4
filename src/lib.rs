//! Verdict - an outcome type with a fluent combinator API
//!
//! Verdict provides [`Outcome`], an immutable success/failure union with the
//! full combinator surface (query, transform, extract, fold, branch), plus a
//! small HTTP client for CAPTCHA verification services that reports its
//! verdicts as `Outcome` values.
//!
//! # Architecture
//!
//! The codebase has two layers:
//!
//! - [`outcome`] - The `Outcome<T, E>` value type. Every operation dispatches
//!   through one primitive (`fold`), so the combinator surface is correct by
//!   construction.
//! - [`captcha`] - Boundary client for the siteverify wire contract shared by
//!   hCaptcha, reCAPTCHA, and Turnstile; the first consumer of `Outcome`.
//!
//! # Correctness Invariants
//!
//! 1. An `Outcome` never changes variant after construction
//! 2. No handler or closure ever runs for the inactive variant
//! 3. Combinators never raise; faults are opt-in at `unwrap` only
//!
//! # Example
//!
//! ```
//! use verdict::outcome::Outcome;
//!
//! let verdict: Outcome<u32, String> = Outcome::Ok(3);
//! let shown = verdict.fold(|n| n.to_string(), |e| format!("failed: {e}"));
//! assert_eq!(shown, "3");
//! ```

pub mod captcha;
pub mod outcome;

pub use outcome::Outcome;
