//! Configuration file loading

use super::options::SessionOptions;
use crate::error::{Result, SessionError};
use std::path::{Path, PathBuf};

const CONFIG_CANDIDATES: [&str; 2] = [".djsession.toml", "djsession.toml"];

impl SessionOptions {
    /// Load options from a TOML file.
    ///
    /// With `path` set the file must exist. Without it the standard
    /// candidates in the current directory are tried, and defaults are
    /// returned when none exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(Path::new(".")),
        };

        match config_path {
            Some(p) => load_config_file(&p),
            None => Ok(Self::default()),
        }
    }
}

/// Find a configuration file among the standard names in `dir`
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

fn load_config_file(path: &Path) -> Result<SessionOptions> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SessionError::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    toml::from_str(&content).map_err(|e| {
        SessionError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}
