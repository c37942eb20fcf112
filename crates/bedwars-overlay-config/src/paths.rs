//! Configuration and data directory paths
//!
//! Uses platform directories via the `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/bedwars-overlay/`, `~/.cache/bedwars-overlay/`
//! - macOS: `~/Library/Application Support/bedwars-overlay/`, `~/Library/Caches/bedwars-overlay/`
//! - Windows: `%APPDATA%\bedwars-overlay\`, `%LOCALAPPDATA%\bedwars-overlay\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "bedwars-overlay";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get path to the global app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Default location of the vanilla launcher's `latest.log`
pub fn default_minecraft_log_path() -> PathBuf {
    minecraft_dir()
        .unwrap_or_else(|| PathBuf::from(".minecraft"))
        .join("logs")
        .join("latest.log")
}

#[cfg(target_os = "windows")]
fn minecraft_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(".minecraft"))
}

#[cfg(target_os = "macos")]
fn minecraft_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("minecraft"))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn minecraft_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|dir| dir.join(".minecraft"))
}
