//! Configuration management for Solo Song.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Values are read once at process
//! start into an immutable [`Config`] which is then handed to the server and
//! every request handler.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use thiserror::Error;
use url::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Scope requested during authorization. Top tracks is all we read.
pub const SCOPE: &str = "user-top-read";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Runtime configuration of the server.
///
/// Built once by [`Config::from_env`] and validated before the server binds
/// to its port. Nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub port: u16,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    /// Upper bound for every outbound Spotify request.
    pub request_timeout: Duration,
    /// HTML template file; `None` selects the built-in page.
    pub page_template: Option<PathBuf>,
}

impl Config {
    /// Builds a configuration from the process environment.
    ///
    /// Call [`load_env`] first so values from `.env` files are visible.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a required variable is missing or empty,
    /// or if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests pass a map-backed closure instead of
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));
        let optional = |name: &'static str, default: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS").filter(|v| !v.trim().is_empty()) {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "REQUEST_TIMEOUT_SECS",
                        value,
                    });
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let config = Config {
            client_id: required("CLIENT_ID")?,
            client_secret: required("CLIENT_SECRET")?,
            redirect_uri: required("REDIRECT_URI")?,
            port,
            auth_url: optional("SPOTIFY_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: optional("SPOTIFY_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
            page_template: lookup("PAGE_TEMPLATE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks that every credential the OAuth flow needs is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("CLIENT_ID", &self.client_id),
            ("CLIENT_SECRET", &self.client_secret),
            ("REDIRECT_URI", &self.redirect_uri),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(name));
            }
        }

        let endpoints = [
            ("SPOTIFY_AUTH_URL", &self.auth_url),
            ("SPOTIFY_TOKEN_URL", &self.token_url),
            ("SPOTIFY_API_URL", &self.api_url),
        ];

        for (name, value) in endpoints {
            if Url::parse(value).is_err() {
                return Err(ConfigError::Invalid {
                    name,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` in the current working directory first and then in the
/// platform-specific local data directory under `solosong/.env`:
/// - Linux: `~/.local/share/solosong/.env`
/// - macOS: `~/Library/Application Support/solosong/.env`
/// - Windows: `%LOCALAPPDATA%/solosong/.env`
///
/// Variables already present in the environment are never overwritten, and a
/// missing file is not an error. Returns the files that were loaded.
pub fn load_env() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path);
    }

    let path = data_env_path();
    if path.is_file() && dotenv::from_path(&path).is_ok() {
        loaded.push(path);
    }

    loaded
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("solosong/.env");
    path
}
