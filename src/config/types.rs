//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_NICENESS;
use crate::domain::services::SyncRoots;
use crate::domain::value_objects::{ProjectPath, Verbosity, DEFAULT_PROJECT_TEMPLATE};
use crate::error::ConfigError;

use super::loader::{self, ConfigWarning};

/// Remote compute host
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Host identifier passed to rsync (`host` or `user@host`)
    #[serde(default)]
    pub host: Option<String>,

    /// Root of the project trees on the host
    #[serde(default)]
    pub host_root: Option<String>,
}

/// This machine
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LocalConfig {
    /// Root of the project trees locally
    #[serde(default)]
    pub data_root: Option<String>,
}

/// Directory layout under each root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutConfig {
    #[serde(default = "default_project_template")]
    pub project_template: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            project_template: default_project_template(),
        }
    }
}

fn default_project_template() -> String {
    DEFAULT_PROJECT_TEMPLATE.to_string()
}

/// External tools and process priority
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferConfig {
    #[serde(default = "default_niceness")]
    pub niceness: i32,

    #[serde(default = "default_rsync")]
    pub rsync: String,

    #[serde(default = "default_nice")]
    pub nice: String,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            niceness: default_niceness(),
            rsync: default_rsync(),
            nice: default_nice(),
        }
    }
}

fn default_niceness() -> i32 {
    DEFAULT_NICENESS
}

fn default_rsync() -> String {
    "rsync".to_string()
}

fn default_nice() -> String {
    "nice".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub local: LocalConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub transfer: TransferConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Roots for the path resolver
    pub fn roots(&self, local_host: bool) -> SyncRoots {
        SyncRoots {
            host: self.remote.host.clone(),
            host_root: self.remote.host_root.clone(),
            data_root: self.local.data_root.clone(),
            local_host,
        }
    }

    /// Validated project layout
    pub fn layout(&self) -> Result<ProjectPath, ConfigError> {
        ProjectPath::new(self.layout.project_template.clone())
    }
}
