//! Signing-key derivation and HMAC-SHA256 signatures.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Fixed infix between salt and secret in the key-derivation input.
pub const KEY_SEPARATOR: &str = "signer";

/// Length in bytes of a derived signing key.
pub const SIGNING_KEY_LEN: usize = 32;

/// Derive the signing key for a `(secret, salt)` pair.
///
/// The key is `SHA256(salt || "signer" || secret)`, which is what Django's
/// `Signer` feeds to HMAC. Different salts produce unrelated keys from the
/// same secret.
pub fn derive_key(secret: &str, salt: &str) -> [u8; SIGNING_KEY_LEN] {
    let digest = Sha256::new()
        .chain_update(salt.as_bytes())
        .chain_update(KEY_SEPARATOR.as_bytes())
        .chain_update(secret.as_bytes())
        .finalize();

    let mut key = [0u8; SIGNING_KEY_LEN];
    key.copy_from_slice(&digest);
    key
}

/// Compute the signature of `value` as it appears in a token.
///
/// # Returns
/// Unpadded base64url encoding of `HMAC_SHA256(derive_key(secret, salt), value)`
pub fn sign(value: &str, secret: &str, salt: &str) -> String {
    let key = derive_key(secret, salt);
    let mut mac = HmacSha256::new_from_slice(&key)
        .expect("HMAC can take key of any size");
    mac.update(value.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}
