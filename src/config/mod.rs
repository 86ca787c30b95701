mod manager;

pub use manager::{
    ConfigFile, ConfigManager, MissingSetting, ResolveOptions, ResolvedConfig, resolve_config,
};
