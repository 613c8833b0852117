//! Application configuration.
//!
//! Loaded from a TOML file with environment-variable overrides for values
//! that vary per deployment. Secrets (the chat model API key) stay in the
//! environment and are read by the component that needs them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoveError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Token-info endpoint of the identity provider. When unset, the server
    /// falls back to the static development verifier.
    pub token_info_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether to load the sample dataset on startup
    #[serde(default)]
    pub enabled: bool,
    /// Optional path to a catalog JSON file to import on startup
    pub catalog_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|err| CoveError::config(format!("cannot read {}: {err}", path.display())))?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Loads the file named by `PLAYCOVE_CONFIG` (default `playcove.toml`),
    /// falling back to defaults when the file does not exist.
    pub fn load_default() -> Result<Self> {
        let path =
            std::env::var("PLAYCOVE_CONFIG").unwrap_or_else(|_| "playcove.toml".to_string());
        if Path::new(&path).exists() {
            Self::load(&path)
        } else {
            tracing::info!(%path, "No configuration file found, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert!(!config.seed.enabled);
        assert!(config.identity.token_info_url.is_none());
    }

    #[test]
    fn parses_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            bind_addr = "127.0.0.1:9090"

            [seed]
            enabled = true
            "#,
        )
        .expect("config should parse");
        assert_eq!(config.server.bind_addr, "127.0.0.1:9090");
        assert!(config.seed.enabled);
        assert!(config.seed.catalog_path.is_none());
    }
}
