//! Caller-facing options and the resolved configuration

use crate::error::{Result, SessionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Environment variable holding the Django `SECRET_KEY`
pub const SECRET_KEY_ENV: &str = "DJANGO_SECRET_KEY";

/// Salt Django's session store signs cookies with
pub const DEFAULT_SALT: &str = "django.contrib.sessions.SessionStore";

/// Options accepted by [`crate::decode_session`].
///
/// Empty strings are treated the same as absent values.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Django `SECRET_KEY`; falls back to `DJANGO_SECRET_KEY`
    #[serde(rename = "secretKey", alias = "secret_key", skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    /// Signing salt; falls back to [`DEFAULT_SALT`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
}

impl SessionOptions {
    /// Options with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the secret key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set the salt
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    /// Fill unset fields from `fallback`; fields already set win.
    pub fn or(self, fallback: SessionOptions) -> Self {
        Self {
            secret_key: non_empty(self.secret_key).or(non_empty(fallback.secret_key)),
            salt: non_empty(self.salt).or(non_empty(fallback.salt)),
        }
    }

    /// Resolve against the process environment
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve with an injected environment lookup
    ///
    /// # Errors
    /// [`SessionError::MissingSecret`] when neither the options nor
    /// `lookup(SECRET_KEY_ENV)` yield a non-empty secret.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<ResolvedConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (secret_key, source) = match non_empty(self.secret_key.clone()) {
            Some(secret) => (secret, SecretSource::Options),
            None => {
                let secret = non_empty(lookup(SECRET_KEY_ENV)).ok_or(SessionError::MissingSecret)?;
                (secret, SecretSource::Environment)
            }
        };

        let salt = non_empty(self.salt.clone()).unwrap_or_else(|| DEFAULT_SALT.to_string());
        debug!(?source, %salt, "resolved session configuration");

        Ok(ResolvedConfig {
            secret_key,
            salt,
            source,
        })
    }
}

impl fmt::Debug for SessionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionOptions")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("salt", &self.salt)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Where the secret key came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    /// Passed explicitly (argument, option, or config file)
    Options,
    /// Read from `DJANGO_SECRET_KEY`
    Environment,
}

/// Secret and salt ready for verification.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    secret_key: String,
    salt: String,
    source: SecretSource,
}

impl ResolvedConfig {
    /// Build a configuration directly, bypassing option resolution
    pub fn new(secret_key: impl Into<String>, salt: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            salt: salt.into(),
            source: SecretSource::Options,
        }
    }

    /// The secret key
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// The salt
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Where the secret key came from
    pub fn source(&self) -> SecretSource {
        self.source
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("secret_key", &"<redacted>")
            .field("salt", &self.salt)
            .field("source", &self.source)
            .finish()
    }
}
