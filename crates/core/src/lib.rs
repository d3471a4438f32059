//! Offline verification and decoding of Django signed session cookies
//!
//! Given a cookie value and the server's `SECRET_KEY`, this crate recovers the
//! session dictionary without talking to the server:
//!
//! - **Verification**: HMAC-SHA256 with a salt-derived key, checked in constant time
//! - **Decoding**: base64url, optional zlib inflate, Latin-1 text, JSON
//! - **Configuration**: explicit options, TOML file, or `DJANGO_SECRET_KEY`
//! - **Error handling**: one error kind per failure, with codes and suggestions
//!
//! The embedded timestamp is carried through untouched; no expiry check is made.
//!
//! # Example
//!
//! ```rust
//! use djsession_core::{decode_session, SessionError, SessionOptions};
//!
//! let token = "eyJ0ZXN0IjoidGVzdCJ9:1tTx2e:cLJA-rvF94U-ejQ_06paewGPjA78IC8Iz2Z_4xiKxlU";
//!
//! let wrong = SessionOptions::new().with_secret_key("invalid_key");
//! assert!(matches!(decode_session(token, &wrong), Err(SessionError::SignatureMismatch)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod decode;
pub mod error;
pub mod session;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{ResolvedConfig, SecretSource, SessionOptions, DEFAULT_SALT, SECRET_KEY_ENV};
pub use decode::decode;
pub use djsession_crypto::SignedValue;
pub use error::{ErrorCode, Result, SessionError};
pub use session::{decode_session, decode_session_with_config, verify_session};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{ResolvedConfig, SessionOptions, DEFAULT_SALT, SECRET_KEY_ENV};
    pub use crate::error::{exit_codes, ErrorCode, ErrorReport, Result, SessionError};
    pub use crate::session::{decode_session, decode_session_with_config, verify_session};
    pub use serde_json::Value;
}
