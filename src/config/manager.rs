use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::paths;

/// Contents of `lokalise.cfg`.
///
/// ```toml
/// token = "0123456789abcdef"
/// project = "123456789.abcdef"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// API token.
    #[serde(default, alias = "Token")]
    pub token: Option<String>,
    /// Default project ID for `export` and `import`.
    #[serde(default, alias = "Project")]
    pub project: Option<String>,
}

/// A setting that neither the command line nor the config file provides.
#[derive(Debug, Error)]
#[error("{name} is required. {hint}")]
pub struct MissingSetting {
    pub name: &'static str,
    pub hint: &'static str,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub token: String,
    pub project: Option<String>,
}

impl ResolvedConfig {
    /// The project ID, or an error naming how to provide one.
    pub fn project(&self) -> Result<&str> {
        self.project.as_deref().ok_or_else(|| {
            MissingSetting {
                name: "Project ID",
                hint: "Pass it as the first argument or set 'project' in the config file.",
            }
            .into()
        })
    }
}

/// Values given on the command line (or through their environment variables).
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub token: Option<String>,
    pub project: Option<String>,
}

/// Merges CLI options with config file settings. CLI options win.
///
/// # Errors
///
/// Returns [`MissingSetting`] if no token is available.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let pick = |cli: &Option<String>, file: &Option<String>| {
        cli.as_ref()
            .or(file.as_ref())
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    let token = pick(&options.token, &config_file.token).ok_or(MissingSetting {
        name: "--token",
        hint: "Pass --token, set LOKALISE_TOKEN, or set 'token' in the config file.",
    })?;

    Ok(ResolvedConfig {
        token,
        project: pick(&options.project, &config_file.project),
    })
}

/// Loads `lokalise.cfg` from the first location that has one.
pub struct ConfigManager {
    candidates: Vec<PathBuf>,
}

impl ConfigManager {
    /// Uses `explicit` if given (falling back to the system file), otherwise
    /// `~/.lokalise/lokalise.cfg` then `/etc/lokalise.cfg`.
    pub fn new(explicit: Option<&Path>) -> Self {
        let candidates = match explicit {
            Some(path) => vec![
                path.to_path_buf(),
                PathBuf::from(paths::SYSTEM_CONFIG_FILE),
            ],
            None => paths::default_config_files(),
        };
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Reads and parses the first existing candidate.
    ///
    /// # Errors
    ///
    /// Fails if no candidate exists, or if the first existing one cannot be
    /// read or parsed.
    pub fn load(&self) -> Result<ConfigFile> {
        for path in &self.candidates {
            let contents = match fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("Failed to read config file: {}", path.display())
                    });
                }
            };

            let config_file: ConfigFile = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config file");
            return Ok(config_file);
        }

        anyhow::bail!("No config file found")
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_else(|err| {
            tracing::debug!(error = %err, "using empty config");
            ConfigFile::default()
        })
    }
}
