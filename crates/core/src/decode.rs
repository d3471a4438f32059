//! Payload decoding for verified session values
//!
//! The data segment of a signed value is unpadded base64url, optionally
//! prefixed with `.` when Django zlib-compressed the JSON before encoding.
//! Decoding never re-checks the signature; callers pass values that came out
//! of verification.

use crate::error::Result;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use djsession_compression::zlib_decompress;
use djsession_crypto::SEPARATOR;
use serde_json::Value;
use tracing::debug;

/// Prefix marking a zlib-compressed data segment
pub const COMPRESSED_MARKER: char = '.';

/// Standard alphabet that, like `atob`, ignores non-zero bits in the last symbol
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode a verified signed value into its session data.
///
/// Only the part before the first `:` is decoded; the timestamp after it is
/// ignored.
///
/// # Errors
/// - [`crate::SessionError::InvalidEncoding`] for malformed base64
/// - [`crate::SessionError::Decompression`] for a corrupt zlib stream
/// - [`crate::SessionError::PayloadParse`] when the bytes are not JSON
pub fn decode(signed_value: &str) -> Result<Value> {
    let data_segment = signed_value
        .split_once(SEPARATOR)
        .map_or(signed_value, |(data, _)| data);

    let (compressed, encoded) = match data_segment.strip_prefix(COMPRESSED_MARKER) {
        Some(rest) => (true, rest),
        None => (false, data_segment),
    };

    let raw = decode_base64url(encoded)?;
    let payload = if compressed { zlib_decompress(&raw)? } else { raw };

    debug!(
        compressed,
        encoded_len = encoded.len(),
        payload_len = payload.len(),
        "decoded session payload"
    );

    let value = serde_json::from_str(&latin1_to_string(&payload))?;
    Ok(value)
}

/// Decode unpadded base64url by translating to the standard alphabet and
/// restoring `=` padding.
pub fn decode_base64url(segment: &str) -> Result<Vec<u8>> {
    let mut standard: String = segment.chars().map(to_standard_alphabet).collect();
    let padding = (4 - standard.len() % 4) % 4;
    standard.extend(std::iter::repeat_n('=', padding));

    Ok(LENIENT_STANDARD.decode(standard.as_bytes())?)
}

fn to_standard_alphabet(c: char) -> char {
    match c {
        '-' => '+',
        '_' => '/',
        other => other,
    }
}

/// Map each byte to the code point of the same value (ISO-8859-1).
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use djsession_compression::{zlib_compress, DEFAULT_LEVEL};
    use serde_json::json;

    #[test]
    fn test_decode_plain_payload() {
        let value = decode("eyJ0ZXN0IjoidGVzdCJ9:1tTx2e").unwrap();
        assert_eq!(value, json!({"test": "test"}));
    }

    #[test]
    fn test_decode_without_timestamp() {
        let value = decode("eyJ0ZXN0IjoidGVzdCJ9").unwrap();
        assert_eq!(value, json!({"test": "test"}));
    }

    #[test]
    fn test_decode_ignores_everything_after_first_colon() {
        let value = decode("eyJ0ZXN0IjoidGVzdCJ9:not base64!:more").unwrap();
        assert_eq!(value, json!({"test": "test"}));
    }

    #[test]
    fn test_decode_compressed_payload() {
        let value = decode(
            ".eJyrVipJLS5RsoJQOkrxiaUlGfGlxalF8ZkpQGFDVLGkxOTs1DyQREpWYl56vl5yfl5JUWaSHkiJHlS2WM83PyU1xwmqFsWAjMTiDJhttQDHuix7:1tTx5X",
        )
        .unwrap();
        assert_eq!(
            value,
            json!({
                "_auth_user_backend": "django.contrib.auth.backends.ModelBackend",
                "_auth_user_hash": "test",
                "_auth_user_id": "1",
                "test": "test",
            })
        );
    }

    #[test]
    fn test_base64url_alphabet_translation() {
        // 0xfb 0xff encodes to "-_8" in base64url
        assert_eq!(decode_base64url("-_8").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_base64url_padding_restored() {
        assert_eq!(decode_base64url("YQ").unwrap(), b"a");
        assert_eq!(decode_base64url("YWI").unwrap(), b"ab");
        assert_eq!(decode_base64url("YWJj").unwrap(), b"abc");
        assert_eq!(decode_base64url("").unwrap(), b"");
    }

    #[test]
    fn test_invalid_base64() {
        assert!(matches!(decode("e*J0:ts"), Err(SessionError::InvalidEncoding(_))));
        // a single trailing sextet can never be valid
        assert!(matches!(decode("YWJjZ"), Err(SessionError::InvalidEncoding(_))));
        assert!(matches!(decode_base64url("e3=1"), Err(SessionError::InvalidEncoding(_))));
        // standard-alphabet characters are not base64url, but translate cleanly
        assert_eq!(decode_base64url("+/8").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_trailing_bits_are_ignored() {
        // "e30" is canonical for "{}"; "e31" sets the unused low bits
        assert_eq!(decode_base64url("e31").unwrap(), b"{}");
        assert_eq!(decode("e31:1tTx5X").unwrap(), json!({}));
        assert_eq!(decode_base64url("YR").unwrap(), b"a");
    }

    #[test]
    fn test_corrupt_compressed_payload() {
        // ".Zm9vYmFy" is base64 for "foobar", which is not zlib
        assert!(matches!(decode(".Zm9vYmFy:ts"), Err(SessionError::Decompression(_))));
    }

    #[test]
    fn test_payload_not_json() {
        // "not json"
        assert!(matches!(decode("bm90IGpzb24:ts"), Err(SessionError::PayloadParse(_))));
    }

    #[test]
    fn test_compressed_and_plain_decode_identically() {
        let json = br#"{"cart":[1,2,3],"flag":true,"n":null}"#;
        let plain = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json);
        let compressed = format!(
            ".{}",
            base64::engine::general_purpose::URL_SAFE_NO_PAD
                .encode(zlib_compress(json, DEFAULT_LEVEL).unwrap())
        );

        assert_eq!(decode(&plain).unwrap(), decode(&compressed).unwrap());
    }

    #[test]
    fn test_latin1_maps_bytes_to_code_points() {
        assert_eq!(latin1_to_string(&[0x61, 0xe9, 0xff]), "a\u{e9}\u{ff}");
    }

    #[test]
    fn test_latin1_payload_decodes_high_bytes() {
        // {"name":"<0xe9>"} -> the byte becomes U+00E9
        let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(b"{\"name\":\"\xe9\"}");
        assert_eq!(decode(&encoded).unwrap(), json!({"name": "\u{e9}"}));
    }
}
