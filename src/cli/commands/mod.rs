//! Subcommand implementations.

use anyhow::Result;
use std::path::PathBuf;

use crate::api::Client;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Export command handler.
pub mod export;

/// Import command handler.
pub mod import;

/// List command handler.
pub mod list;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub token: Option<String>,
    pub config: Option<PathBuf>,
    pub api_url: Option<String>,
    pub asset_url: Option<String>,
}

/// Resolved settings and a client, ready to run a command.
pub struct Session {
    pub config: ResolvedConfig,
    pub client: Client,
}

impl Session {
    /// Merges flags with the config file and builds the client.
    ///
    /// # Errors
    ///
    /// Fails if no token is configured or the HTTP client cannot be built.
    pub fn connect(global: &GlobalOptions, project: Option<String>) -> Result<Self> {
        let config_file = ConfigManager::new(global.config.as_deref()).load_or_default();
        let options = ResolveOptions {
            token: global.token.clone(),
            project,
        };
        let config = resolve_config(&options, &config_file)?;

        let mut client = Client::new()?;
        if let Some(url) = &global.api_url {
            client = client.with_base_url(url.clone());
        }
        if let Some(url) = &global.asset_url {
            client = client.with_asset_url(url.clone());
        }

        Ok(Self { config, client })
    }
}
