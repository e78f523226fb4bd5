//! Error types for hgsync
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration problems. Always raised before any process is spawned.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required value (root, host, project) is not set anywhere
    #[error("missing required value '{key}' ({hint})")]
    MissingValue { key: &'static str, hint: &'static str },

    /// An explicitly named config file could not be read
    #[error("cannot read config file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file exists but is not valid TOML for our schema
    #[error("invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Project identifier cannot be used as a path segment
    #[error("invalid project name '{project}': {reason}")]
    InvalidProject { project: String, reason: &'static str },

    /// Project path template does not contain the `{project}` placeholder
    #[error("project template '{template}' must contain '{{project}}'")]
    InvalidTemplate { template: String },

    /// Source and destination resolved to the same location
    #[error("source and destination are the same: {endpoint}")]
    SameEndpoints { endpoint: String },

    /// Niceness outside what `nice` accepts
    #[error("niceness {value} is out of range (-20..=19)")]
    InvalidNiceness { value: i32 },

    /// Archives are only produced by the pull direction
    #[error("--archive is only supported when pulling")]
    ArchiveRequiresPull,
}

/// Failure to run the transfer tool at all.
///
/// A tool that runs and exits non-zero is not an error here; its exit code is
/// carried by [`crate::domain::entities::TransferResult`].
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to prepare destination {path}: {source}")]
    Destination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Archive step failures. Reported, never fatal for the exit code.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("cannot archive remote destination '{0}'")]
    RemoteDestination(String),

    #[error("archive source directory not found: {0}")]
    MissingSource(PathBuf),

    #[error("invalid archive pattern: {0}")]
    Pattern(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("cannot replace archive: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Main error type for hgsync operations
#[derive(Error, Debug)]
pub enum HgsyncError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl HgsyncError {
    /// Process exit code for this error.
    ///
    /// A tool that ran carries its own exit code in the sync report, so only
    /// launch failures get a code other than 1 here.
    pub fn exit_code(&self) -> i32 {
        match self {
            HgsyncError::Transfer(TransferError::Launch { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                127
            }
            _ => 1,
        }
    }
}
