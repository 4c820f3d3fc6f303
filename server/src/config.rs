//! Preview server configuration parsed from environment variables.

use std::path::PathBuf;

use catalog::paths::{DEFAULT_BASE_PATH, EXAMPLES_PATH, normalize_base_path};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "client/dist";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the built site (`index.html`, `pkg` output, `public/`).
    pub site_dir: PathBuf,
    /// URL prefix the site is served under, in `/segment/` form.
    pub base_path: String,
    pub examples_path: PathBuf,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `client/dist`
    /// - `SHOWCASE_BASE_PATH`: default `/trial_web/`, the Trunk `public_url`
    /// - `EXAMPLES_PATH`: default `<SITE_DIR>/public/data/examples.json`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(var("PORT").as_deref())?;

        let site_dir = match var("SITE_DIR") {
            Some(dir) if dir.trim().is_empty() => return Err(ConfigError::Empty { var: "SITE_DIR" }),
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(DEFAULT_SITE_DIR),
        };

        let base_path = normalize_base_path(var("SHOWCASE_BASE_PATH").as_deref().unwrap_or(DEFAULT_BASE_PATH));

        let examples_path = var("EXAMPLES_PATH")
            .filter(|p| !p.trim().is_empty())
            .map_or_else(|| site_dir.join(EXAMPLES_PATH), PathBuf::from);

        Ok(Self { port, site_dir, base_path, examples_path })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
