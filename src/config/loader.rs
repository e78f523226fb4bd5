//! Configuration loading
//!
//! Precedence, lowest to highest: built-in defaults, config file,
//! environment. CLI flags are applied on top by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::NICENESS_RANGE;
use crate::domain::value_objects::Verbosity;
use crate::error::ConfigError;

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::Config;

pub use crate::domain::value_objects::ConfigWarning;

/// Remote host identifier
pub const ENV_HOST: &str = "HOST";
/// Project tree root on the host
pub const ENV_HOST_ROOT: &str = "HOST_ROOT";
/// Project tree root on this machine
pub const ENV_DATA_ROOT: &str = "DATA_ROOT";
/// Config file location override
pub const ENV_CONFIG: &str = "HGSYNC_CONFIG";
pub const ENV_NICENESS: &str = "HGSYNC_NICENESS";
pub const ENV_RSYNC: &str = "HGSYNC_RSYNC";
pub const ENV_VERBOSITY: &str = "HGSYNC_VERBOSITY";

/// Configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File that was read, if any
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// The file must exist; callers decide whether a missing file is acceptable.
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the process environment and the default config location
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let default_file = dirs::config_dir().map(|dir| dir.join("hgsync").join("config.toml"));
    load_from(explicit, default_file.as_deref(), |key| std::env::var(key).ok())
}

/// Load with an injectable environment lookup.
///
/// An explicitly named file (argument or `HGSYNC_CONFIG`) must be readable.
/// The default file is optional, but if it exists it must parse.
pub fn load_from<F>(
    explicit: Option<&Path>,
    default_file: Option<&Path>,
    lookup: F,
) -> Result<LoadedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| lookup(ENV_CONFIG).filter(|v| !v.is_empty()).map(PathBuf::from));

    let file = match named {
        Some(path) => Some(path),
        None => default_file.filter(|p| p.is_file()).map(Path::to_path_buf),
    };

    let mut loaded = LoadedConfig::default();
    if let Some(path) = file {
        tracing::debug!(path = %path.display(), "loading config file");
        let (config, warnings) = load_with_warnings(&path)?;
        loaded.config = config;
        loaded.warnings = warnings;
        loaded.path = Some(path);
    }

    loaded.config = with_env_overrides(loaded.config, lookup);
    Ok(loaded)
}

/// Apply environment variable overrides
pub fn with_env_overrides<F>(config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    with_env_overrides_to(config, lookup, &mut std::io::stderr())
}

/// Apply environment variable overrides, writing validation warnings to `writer`
pub fn with_env_overrides_to<F, W>(mut config: Config, lookup: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: std::io::Write,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(host) = var(ENV_HOST) {
        config.remote.host = Some(host);
    }
    if let Some(root) = var(ENV_HOST_ROOT) {
        config.remote.host_root = Some(root);
    }
    if let Some(root) = var(ENV_DATA_ROOT) {
        config.local.data_root = Some(root);
    }
    if let Some(rsync) = var(ENV_RSYNC) {
        config.transfer.rsync = rsync;
    }

    if let Some(niceness) = var(ENV_NICENESS) {
        let validator = EnvVarValidator::new(ENV_NICENESS, &["-20..19"]);
        config.transfer.niceness = validator.parse_with_writer(
            &niceness,
            |s| s.trim().parse::<i32>().ok().filter(|n| NICENESS_RANGE.contains(n)),
            config.transfer.niceness,
            writer,
        );
    }

    if let Some(verbosity) = var(ENV_VERBOSITY) {
        let validator = EnvVarValidator::new(ENV_VERBOSITY, Verbosity::VALID_VALUES);
        config.output.verbosity =
            validator.parse_with_writer(&verbosity, Verbosity::parse, config.output.verbosity, writer);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "remote",
        "host",
        "host_root",
        "local",
        "data_root",
        "layout",
        "project_template",
        "transfer",
        "niceness",
        "rsync",
        "nice",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
