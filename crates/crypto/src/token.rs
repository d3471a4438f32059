//! Token splitting and signature verification.

use std::fmt;

use tracing::{debug, warn};

use crate::{constant_time_eq, sign, CryptoError, Result};

/// Delimiter between the segments of a signed token.
pub const SEPARATOR: char = ':';

/// The authenticated part of a token: everything before its last `:`.
///
/// Only produced by [`verify`], so holding one means the signature checked
/// out for the secret and salt that were used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedValue<'a> {
    value: &'a str,
}

impl<'a> SignedValue<'a> {
    /// The full signed value, timestamp included.
    pub fn as_str(&self) -> &'a str {
        self.value
    }

    /// The encoded payload: the value up to its first `:`.
    pub fn data_segment(&self) -> &'a str {
        self.value
            .split_once(SEPARATOR)
            .map_or(self.value, |(data, _)| data)
    }

    /// Whatever follows the payload, normally Django's base62 timestamp.
    ///
    /// Returned as-is; it is never parsed or checked for expiry.
    pub fn timestamp_segment(&self) -> Option<&'a str> {
        self.value.split_once(SEPARATOR).map(|(_, rest)| rest)
    }

    /// Whether the payload carries the leading `.` compression marker.
    pub fn is_compressed(&self) -> bool {
        self.data_segment().starts_with('.')
    }
}

impl AsRef<str> for SignedValue<'_> {
    fn as_ref(&self) -> &str {
        self.value
    }
}

impl fmt::Display for SignedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

/// Split a token into `(signed_value, signature)` on its last `:`.
///
/// Earlier colons stay inside the signed value.
pub fn split_token(token: &str) -> Result<(&str, &str)> {
    token
        .rsplit_once(SEPARATOR)
        .ok_or(CryptoError::MalformedToken)
}

/// Verify a token's signature and return its signed value.
///
/// # Arguments
/// * `token` - Full token, `DATA[:TIMESTAMP]:SIGNATURE`
/// * `secret` - The server's `SECRET_KEY`
/// * `salt` - Signing namespace, e.g. `django.contrib.sessions.SessionStore`
///
/// # Errors
/// [`CryptoError::MalformedToken`] when there is no `:` at all,
/// [`CryptoError::SignatureMismatch`] when the signature does not match.
pub fn verify<'a>(token: &'a str, secret: &str, salt: &str) -> Result<SignedValue<'a>> {
    let (value, signature) = split_token(token)?;
    let expected = sign(value, secret, salt);

    if !constant_time_eq(&expected, signature) {
        warn!(salt, value_len = value.len(), "session signature mismatch");
        return Err(CryptoError::SignatureMismatch);
    }

    debug!(salt, value_len = value.len(), "session signature verified");
    Ok(SignedValue { value })
}
