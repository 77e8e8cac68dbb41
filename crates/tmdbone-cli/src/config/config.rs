//! `AppConfig` struct, TOML read/write and environment overrides.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tmdbone_api::ClientConfig;

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// TMDb client settings.
    #[serde(default)]
    pub tmdb: ClientConfig,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// On Unix the file mode is set to `0600`.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation, file write or the permission
    /// change fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("failed to restrict permissions on {}", path.display()))?;
        }
        Ok(())
    }

    /// Applies `TMDB_*` overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Applies `TMDB_*` overrides read through `lookup`.
    ///
    /// `TMDB_API_KEYS` (comma separated) wins over `TMDB_API_KEY`; either
    /// replaces the configured key list. Empty values are ignored.
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(keys) = non_empty("TMDB_API_KEYS") {
            self.tmdb.api_keys = keys
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(String::from)
                .collect();
        } else if let Some(key) = non_empty("TMDB_API_KEY") {
            self.tmdb.api_keys = vec![String::from(key.trim())];
        }

        if let Some(token) = non_empty("TMDB_API_TOKEN") {
            self.tmdb.bearer_token = Some(String::from(token.trim()));
        }
        if let Some(language) = non_empty("TMDB_LANGUAGE") {
            self.tmdb.language = Some(language);
        }
    }
}
