//! Configuration resolution
//!
//! The secret key and salt come from, in order: explicit options, an
//! optional TOML file (CLI only), the `DJANGO_SECRET_KEY` environment
//! variable for the secret, and the session-store default for the salt.

mod loader;
mod options;

pub use loader::find_config_file;
pub use options::*;
