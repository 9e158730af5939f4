//! captcha::factory
//!
//! Provider selection and client creation.
//!
//! # Design
//!
//! All supported providers speak the same siteverify contract and differ only
//! in endpoint URL. Callers name a [`Provider`] (or parse one from
//! configuration) and get a boxed [`Captcha`] back, keeping the rest of the
//! application independent of which service is behind it.
//!
//! # Example
//!
//! ```
//! use verdict::captcha::{create_captcha, Provider};
//!
//! let captcha = create_captcha(Provider::Turnstile, "0x0000secret");
//! ```

use super::siteverify::SiteverifyClient;
use super::traits::Captcha;

/// hCaptcha verification endpoint.
const HCAPTCHA_ENDPOINT: &str = "https://api.hcaptcha.com/siteverify";

/// Google reCAPTCHA verification endpoint.
const RECAPTCHA_ENDPOINT: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Cloudflare Turnstile verification endpoint.
const TURNSTILE_ENDPOINT: &str = "https://challenges.cloudflare.com/turnstile/v0/siteverify";

/// Supported captcha providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// hCaptcha
    HCaptcha,
    /// Google reCAPTCHA (v2 and v3 share the endpoint)
    Recaptcha,
    /// Cloudflare Turnstile
    Turnstile,
}

impl Provider {
    /// All supported providers.
    pub fn all() -> &'static [Provider] {
        &[Provider::HCaptcha, Provider::Recaptcha, Provider::Turnstile]
    }

    /// The provider name as used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::HCaptcha => "hcaptcha",
            Provider::Recaptcha => "recaptcha",
            Provider::Turnstile => "turnstile",
        }
    }

    /// The provider's fixed verification endpoint.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Provider::HCaptcha => HCAPTCHA_ENDPOINT,
            Provider::Recaptcha => RECAPTCHA_ENDPOINT,
            Provider::Turnstile => TURNSTILE_ENDPOINT,
        }
    }

    /// Parse a provider from its configuration name.
    ///
    /// # Example
    ///
    /// ```
    /// use verdict::captcha::Provider;
    ///
    /// assert_eq!(Provider::parse("hcaptcha"), Some(Provider::HCaptcha));
    /// assert_eq!(Provider::parse("unknown"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hcaptcha" => Some(Provider::HCaptcha),
            "recaptcha" => Some(Provider::Recaptcha),
            "turnstile" => Some(Provider::Turnstile),
            _ => None,
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Create a verification client for `provider`.
pub fn create_captcha(provider: Provider, secret: impl Into<String>) -> Box<dyn Captcha> {
    Box::new(SiteverifyClient::new(provider, secret))
}
