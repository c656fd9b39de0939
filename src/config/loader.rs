use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::BlastmapConfig;
use super::display::DisplayConfig;
use super::CONFIG_FILE_NAME;
use crate::errors::{Error, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a config file body. Out-of-range display settings fall back to the
/// defaults with a warning; only malformed TOML is an error.
pub fn parse_and_validate_config(contents: &str) -> Result<BlastmapConfig> {
    let mut config = toml::from_str::<BlastmapConfig>(contents)
        .map_err(|e| Error::Config(format!("failed to parse {CONFIG_FILE_NAME}: {e}")))?;

    if let Err(e) = config.display.validate() {
        warn!("{}. Using default display settings.", e);
        config.display = DisplayConfig::default();
    }

    Ok(config)
}

/// Config at `config_path`; `None` when the file is absent or unusable.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BlastmapConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("{}. Skipping it.", Error::io(config_path, e));
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!(path = %config_path.display(), "loaded config");
            Some(config)
        }
        Err(e) => {
            warn!("{} ({}). Skipping it.", e, config_path.display());
            None
        }
    }
}

/// `start` and its parents, at most `max_depth` directories in total.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| dir.parent().map(Path::to_path_buf)).take(max_depth)
}

/// Nearest config at or above `start`, or the defaults
pub fn load_config_from(start: PathBuf) -> BlastmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(depth = MAX_TRAVERSAL_DEPTH, "no {CONFIG_FILE_NAME} found, using defaults");
            BlastmapConfig::default()
        })
}

pub fn load_config() -> BlastmapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            warn!("Cannot resolve the current directory: {}. Using default config.", e);
            BlastmapConfig::default()
        }
    }
}
