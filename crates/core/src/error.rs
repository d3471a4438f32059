//! Error taxonomy for session decoding
//!
//! Every failure of the verify-and-decode pipeline maps to exactly one
//! [`SessionError`] variant. Each variant carries:
//! - A stable [`ErrorCode`] for programmatic handling
//! - An optional recovery suggestion
//! - A serializable [`ErrorReport`] form for JSON output

use djsession_compression::CompressionError;
use djsession_crypto::CryptoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Token errors (1xxx)
    /// No signature delimiter in the token
    MalformedToken = 1001,
    /// Signature does not match
    SignatureMismatch = 1002,

    // Configuration errors (2xxx)
    /// No secret key available
    MissingSecret = 2001,
    /// Unreadable or invalid config file
    ConfigError = 2002,

    // Payload errors (3xxx)
    /// Data segment is not base64url
    InvalidEncoding = 3001,
    /// Compressed payload is not valid zlib
    DecompressionError = 3002,
    /// Payload is not JSON
    PayloadParseError = 3003,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "Token",
            2 => "Configuration",
            3 => "Payload",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Errors produced while verifying or decoding a session token.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The token has no `:` separating the signature
    #[error("No signature delimiter found")]
    MalformedToken,

    /// The signature does not match the secret and salt
    #[error("Invalid signature")]
    SignatureMismatch,

    /// No secret key in the options or the environment
    #[error(
        "No secret key provided. Pass it in the options param under key 'secretKey' or set DJANGO_SECRET_KEY environment variable."
    )]
    MissingSecret,

    /// A configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// The data segment is not valid base64url
    #[error("Invalid payload encoding: {0}")]
    InvalidEncoding(String),

    /// The compressed payload is not a valid zlib stream
    #[error("Decompression failed: {0}")]
    Decompression(String),

    /// The decoded payload is not valid JSON
    #[error("Invalid session payload: {0}")]
    PayloadParse(String),
}

impl SessionError {
    /// The stable code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedToken => ErrorCode::MalformedToken,
            Self::SignatureMismatch => ErrorCode::SignatureMismatch,
            Self::MissingSecret => ErrorCode::MissingSecret,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::InvalidEncoding(_) => ErrorCode::InvalidEncoding,
            Self::Decompression(_) => ErrorCode::DecompressionError,
            Self::PayloadParse(_) => ErrorCode::PayloadParseError,
        }
    }

    /// A recovery hint for the user, where one exists
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MalformedToken => Some(
                "Pass the full cookie value, including the ':'-separated timestamp and signature",
            ),
            Self::SignatureMismatch => {
                Some("Check that the secret key and salt match the server that issued the cookie")
            }
            Self::MissingSecret => Some("Use --secret or export DJANGO_SECRET_KEY"),
            Self::Config(_) => Some("Check the TOML syntax of the configuration file"),
            _ => None,
        }
    }

    /// Process exit code for CLI commands
    pub fn exit_code(&self) -> i32 {
        match self.code().category() {
            "Token" => exit_codes::TOKEN_ERROR,
            "Configuration" => exit_codes::CONFIG_ERROR,
            "Payload" => exit_codes::PAYLOAD_ERROR,
            _ => exit_codes::FAILURE,
        }
    }

    /// Convert to a serializable report
    pub fn to_report(&self) -> ErrorReport {
        let code = self.code();
        ErrorReport {
            code,
            code_str: code.to_string(),
            category: code.category().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion().map(String::from),
        }
    }
}

/// Serializable error report for JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Error code
    pub code: ErrorCode,
    /// Error code as displayed, e.g. `E1002`
    pub code_str: String,
    /// Category of the code
    pub category: String,
    /// Human-readable message
    pub message: String,
    /// Recovery suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SessionError>;

/// Exit codes for CLI commands
pub mod exit_codes {
    /// Session decoded or verified
    pub const SUCCESS: i32 = 0;
    /// Any failure outside the categories below
    pub const FAILURE: i32 = 1;
    /// Missing secret or bad config file
    pub const CONFIG_ERROR: i32 = 2;
    /// Malformed token or bad signature
    pub const TOKEN_ERROR: i32 = 3;
    /// Payload could not be decoded
    pub const PAYLOAD_ERROR: i32 = 4;
}

impl From<CryptoError> for SessionError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::MalformedToken => Self::MalformedToken,
            CryptoError::SignatureMismatch => Self::SignatureMismatch,
        }
    }
}

impl From<CompressionError> for SessionError {
    fn from(err: CompressionError) -> Self {
        match err {
            CompressionError::DecompressionFailed(msg) | CompressionError::CompressionFailed(msg) => {
                Self::Decompression(msg)
            }
        }
    }
}

impl From<base64::DecodeError> for SessionError {
    fn from(err: base64::DecodeError) -> Self {
        Self::InvalidEncoding(err.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::PayloadParse(err.to_string())
    }
}
