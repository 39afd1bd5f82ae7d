use crate::paths;
use std::path::{Path, PathBuf};

/// Load config file content from CWD first, then the config directory
///
/// Searches for:
/// 1. `.zilla.toml` in the current working directory
/// 2. `config.toml` in the platform config directory (e.g. `~/.config/zilla/`)
///
/// Returns the path and file content if found, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    let candidates: Vec<PathBuf> = [paths::local_config_path(), paths::app_config_path()]
        .into_iter()
        .filter_map(Result::ok)
        .collect();

    load_first_existing(&candidates)
}

/// Read the first candidate that exists and is readable
pub fn load_first_existing<P: AsRef<Path>>(candidates: &[P]) -> Option<(PathBuf, String)> {
    for candidate in candidates {
        let candidate = candidate.as_ref();
        match std::fs::read_to_string(candidate) {
            Ok(content) => {
                log::debug!("Loaded config from {}", candidate.display());
                return Some((candidate.to_path_buf(), content));
            }
            Err(e) => {
                log::trace!("No config at {}: {}", candidate.display(), e);
            }
        }
    }

    None
}
