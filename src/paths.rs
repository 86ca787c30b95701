//! Configuration file locations.
//!
//! The user config lives at `~/.lokalise/lokalise.cfg`; a system-wide
//! `/etc/lokalise.cfg` is used when the user file is absent.

use std::path::PathBuf;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_FILE: &str = "/etc/lokalise.cfg";

/// Returns the per-user configuration directory (`~/.lokalise`).
///
/// `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lokalise"))
}

/// Returns the per-user configuration file (`~/.lokalise/lokalise.cfg`).
pub fn user_config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("lokalise.cfg"))
}

/// Config files to try, in order, when no explicit path is given.
pub fn default_config_files() -> Vec<PathBuf> {
    user_config_file()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(SYSTEM_CONFIG_FILE)))
        .collect()
}
