//! Credential redaction for logged and surfaced text

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static BEARER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.]+").expect("valid regex"));

static TOKEN_FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)["']?(token|api_key|apikey|secret|authorization)["']?\s*([:=])\s*["']?[a-zA-Z0-9\-_\.]{8,}["']?"#,
    )
    .expect("valid regex")
});

static PASSWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["']?password["']?\s*[:=]\s*["']?([^"'\s,}]+)["']?"#).expect("valid regex")
});

/// Redacts credentials from text before it is logged or surfaced
///
/// API error messages and raw bodies can echo request headers or payloads
/// back, so the client runs them through this before logging.
#[derive(Clone, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    /// Create a scrubber
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = BEARER_PATTERN.replace_all(message, "Bearer [TOKEN_REDACTED]");
        let scrubbed = TOKEN_FIELD_PATTERN.replace_all(&scrubbed, "${1}${2}[REDACTED]");
        let scrubbed = PASSWORD_PATTERN.replace_all(&scrubbed, "password=[REDACTED]");
        scrubbed.into_owned()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
