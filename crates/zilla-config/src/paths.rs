//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/zilla/`, `~/.cache/zilla/`
//! - macOS: `~/Library/Application Support/zilla/`, `~/Library/Caches/zilla/`
//! - Windows: `%APPDATA%\zilla\`, `%LOCALAPPDATA%\zilla\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "zilla";
const ISSUE_CACHE_FILE: &str = "assigned-issues.json";

/// Name of the config file looked up in the current working directory
pub const LOCAL_CONFIG_FILE: &str = ".zilla.toml";

/// Get the application config directory
/// Returns ~/.config/zilla/ on Linux, ~/Library/Application Support/zilla/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory
/// Returns ~/.cache/zilla/ on Linux, ~/Library/Caches/zilla/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to the global config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get path to the local config file (in CWD)
pub fn local_config_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(LOCAL_CONFIG_FILE))
}

/// Get path to the assigned-issues cache file
pub fn issue_cache_path() -> Result<PathBuf> {
    Ok(cache_dir()?.join(ISSUE_CACHE_FILE))
}
