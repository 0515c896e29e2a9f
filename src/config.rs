//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/neoviz/config.toml` (XDG) or platform config dir
//! 2. Project config: `.neoviz.toml`
//! 3. Environment variables: `NEOVIZ_*`
//!
//! The only tunable is the graph API origin:
//! ```toml
//! [api]
//! origin = "http://localhost:8199"
//! ```
//!
//! The `--origin` CLI flag overrides all of the above.

use std::ops::Deref;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

/// Default graph API origin when nothing is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8199";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Graph API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base origin of the graph API.
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        let user_config = Self::user_config_path();

        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(".neoviz.toml"))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("NEOVIZ_").split("_"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// User config path: ~/.config/neoviz/config.toml (XDG) or platform config dir.
    fn user_config_path() -> std::path::PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("neoviz").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("neoviz").join("config.toml"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_defaults_when_unconfigured() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api.origin, DEFAULT_ORIGIN);
    }

    #[test]
    fn test_origin_from_config() {
        let config: Config = serde_json::from_str(r#"{"api": {"origin": "http://graph:9000"}}"#).unwrap();
        assert_eq!(config.api.origin, "http://graph:9000");
    }
}
