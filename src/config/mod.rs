//! Configuration module for hgsync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HOST, HOST_ROOT, DATA_ROOT, HGSYNC_*)
//! 3. Config file (`--config`, `HGSYNC_CONFIG`, or ~/.config/hgsync/config.toml)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    load, load_from, load_with_warnings, with_env_overrides, with_env_overrides_to, ConfigWarning,
    LoadedConfig, ENV_CONFIG, ENV_DATA_ROOT, ENV_HOST, ENV_HOST_ROOT, ENV_NICENESS, ENV_RSYNC,
    ENV_VERBOSITY,
};
pub use types::{Config, LayoutConfig, LocalConfig, OutputConfig, RemoteConfig, TransferConfig};
