//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// File name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config directory.
const CONFIG_DIR_ENV: &str = "TMDBONE_CONFIG_DIR";

/// Resolves the config file path against the process environment.
///
/// # Errors
///
/// Returns an error if no directory is given and neither `TMDBONE_CONFIG_DIR`,
/// `XDG_CONFIG_HOME` nor `HOME` is set.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    resolve_config_path_from(dir.map(PathBuf::as_path), |name| std::env::var(name).ok())
}

/// Resolves the config file path, reading variables through `lookup`.
///
/// The first match wins:
/// 1. `{dir}/config.toml`
/// 2. `$TMDBONE_CONFIG_DIR/config.toml`
/// 3. `$XDG_CONFIG_HOME/tmdbone/config.toml`
/// 4. `$HOME/.config/tmdbone/config.toml`
///
/// Empty variables count as unset.
///
/// # Errors
///
/// Returns an error if every source above is missing.
fn resolve_config_path_from(
    dir: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf> {
    let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }
    if let Some(d) = var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(d).join(CONFIG_FILE));
    }
    if let Some(xdg) = var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("tmdbone").join(CONFIG_FILE));
    }
    let Some(home) = var("HOME") else {
        bail!("cannot locate config directory: pass --dir or set {CONFIG_DIR_ENV} or HOME");
    };
    Ok(PathBuf::from(home)
        .join(".config")
        .join("tmdbone")
        .join(CONFIG_FILE))
}
