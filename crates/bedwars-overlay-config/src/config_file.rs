use anyhow::Result;
use std::path::{Path, PathBuf};

/// Config file name looked up in the current working directory
pub const LOCAL_CONFIG_FILE: &str = ".bedwars-overlay.toml";

/// Load config file content from CWD first, then the global config directory
///
/// Returns the path and content of the first file found, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    let global = crate::paths::app_config_path().ok();
    load_first_existing(&[Some(PathBuf::from(LOCAL_CONFIG_FILE)), global])
}

fn load_first_existing(candidates: &[Option<PathBuf>]) -> Option<(PathBuf, String)> {
    for path in candidates.iter().flatten() {
        if let Ok(content) = std::fs::read_to_string(path) {
            log::debug!("Loaded config from {}", path.display());
            return Some((path.clone(), content));
        }
    }
    None
}

/// Path settings are saved to
///
/// A local config file wins if one exists, so edits stay where they were read from.
pub fn writable_config_path() -> Result<PathBuf> {
    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Ok(local.to_path_buf());
    }
    crate::paths::app_config_path()
}
