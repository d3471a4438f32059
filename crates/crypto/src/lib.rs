//! Django session signature verification.
//!
//! This crate implements the verifying half of `django.core.signing` as used
//! by the signed-cookie session backend:
//! - Signing-key derivation (`SHA256(salt + "signer" + secret)`)
//! - HMAC-SHA256 signatures encoded as unpadded base64url
//! - Token splitting on the last `:` and constant-time signature checks
//!
//! # Example
//!
//! ```rust
//! use djsession_crypto::{sign, verify};
//!
//! let salt = "django.contrib.sessions.SessionStore";
//! let value = "eyJ0ZXN0IjoidGVzdCJ9:1tTx2e";
//! let token = format!("{value}:{}", sign(value, "secret", salt));
//!
//! let signed = verify(&token, "secret", salt).unwrap();
//! assert_eq!(signed.data_segment(), "eyJ0ZXN0IjoidGVzdCJ9");
//! ```

#![warn(missing_docs)]

mod error;
mod signer;
mod timing;
mod token;

pub use error::{CryptoError, Result};
pub use signer::{derive_key, sign, KEY_SEPARATOR, SIGNING_KEY_LEN};
pub use timing::constant_time_eq;
pub use token::{split_token, verify, SignedValue, SEPARATOR};
