//! The verify-then-decode entry points

use crate::config::{ResolvedConfig, SessionOptions};
use crate::decode::decode;
use crate::error::Result;
use djsession_crypto::{verify, SignedValue};
use serde_json::Value;
use tracing::instrument;

/// Verify and decode a Django session cookie.
///
/// The secret comes from `options.secret_key` or `DJANGO_SECRET_KEY`, the
/// salt from `options.salt` or [`crate::DEFAULT_SALT`].
///
/// # Example
///
/// ```rust
/// use djsession_core::{decode_session, SessionOptions};
///
/// let token = "eyJ0ZXN0IjoidGVzdCJ9:1tTx2e:cLJA-rvF94U-ejQ_06paewGPjA78IC8Iz2Z_4xiKxlU";
/// let options = SessionOptions::new().with_secret_key("test_django_secret_key_123");
///
/// let session = decode_session(token, &options).unwrap();
/// assert_eq!(session["test"], "test");
/// ```
pub fn decode_session(token: &str, options: &SessionOptions) -> Result<Value> {
    let config = options.resolve()?;
    decode_session_with_config(token, &config)
}

/// Verify and decode with an already resolved configuration.
#[instrument(level = "debug", skip_all, fields(token_len = token.len(), salt = config.salt()))]
pub fn decode_session_with_config(token: &str, config: &ResolvedConfig) -> Result<Value> {
    let signed = verify_session(token, config)?;
    decode(signed.as_str())
}

/// Verify a token's signature without decoding its payload.
pub fn verify_session<'a>(token: &'a str, config: &ResolvedConfig) -> Result<SignedValue<'a>> {
    Ok(verify(token, config.secret_key(), config.salt())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SALT;
    use crate::error::SessionError;
    use serde_json::json;

    const SECRET: &str = "test_django_secret_key_123";
    const ANONYMOUS: &str =
        "eyJ0ZXN0IjoidGVzdCJ9:1tTx2e:cLJA-rvF94U-ejQ_06paewGPjA78IC8Iz2Z_4xiKxlU";

    fn config() -> ResolvedConfig {
        ResolvedConfig::new(SECRET, DEFAULT_SALT)
    }

    #[test]
    fn test_decode_with_config() {
        assert_eq!(
            decode_session_with_config(ANONYMOUS, &config()).unwrap(),
            json!({"test": "test"})
        );
    }

    #[test]
    fn test_decode_session_with_explicit_secret() {
        let options = SessionOptions::new().with_secret_key(SECRET);
        assert_eq!(decode_session(ANONYMOUS, &options).unwrap(), json!({"test": "test"}));
    }

    #[test]
    fn test_verify_only() {
        let signed = verify_session(ANONYMOUS, &config()).unwrap();
        assert_eq!(signed.timestamp_segment(), Some("1tTx2e"));
    }

    #[test]
    fn test_errors_keep_their_kind() {
        let wrong = ResolvedConfig::new("invalid_key", DEFAULT_SALT);
        assert!(matches!(
            decode_session_with_config(ANONYMOUS, &wrong),
            Err(SessionError::SignatureMismatch)
        ));
        assert!(matches!(
            decode_session_with_config("eyJ0ZXN0IjoidGVzdCJ9", &config()),
            Err(SessionError::MalformedToken)
        ));
    }
}
