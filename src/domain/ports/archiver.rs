//! Archiver port
//!
//! Packs a filtered subset of a pulled project tree into an archive that is
//! created on first use and updated in place afterwards.

use std::path::{Path, PathBuf};

use crate::domain::entities::{ArchiveReport, SyncPlan};
use crate::error::ArchiveError;

/// File-name patterns that go into the archive
pub const ARCHIVE_INCLUDES: &[&str] = &["*.hydrograph.*.dat", "*.grok", "*.inc"];

/// File-name patterns kept out even when an include matches
pub const ARCHIVE_EXCLUDES: &[&str] = &["*.Bc.*.dat"];

/// Input for one archive run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRequest {
    /// Local directory whose files are archived
    pub source_dir: PathBuf,
    /// Prefix for entry names (`{prefix}/{relative path}`)
    pub entry_prefix: String,
    /// Archive file to create or update
    pub archive_path: PathBuf,
    /// Archive comment (the date of this run)
    pub comment: String,
}

impl ArchiveRequest {
    /// Derive the request for a pull plan.
    ///
    /// Returns `Ok(None)` when the plan asks for no archive. A relative
    /// archive path is taken relative to the destination's parent directory.
    pub fn for_plan(plan: &SyncPlan, comment: impl Into<String>) -> Result<Option<Self>, ArchiveError> {
        if !plan.wants_archive() {
            return Ok(None);
        }
        let Some(archive) = plan.options.archive_path.as_ref() else {
            return Ok(None);
        };

        if plan.destination.is_remote() {
            return Err(ArchiveError::RemoteDestination(plan.destination.to_string()));
        }

        let source_dir = PathBuf::from(plan.destination.path.trim_end_matches('/'));
        let entry_prefix = match &plan.project {
            Some(project) => project.trim_end_matches('/').to_string(),
            None => source_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };

        let archive_path = if archive.is_absolute() {
            archive.clone()
        } else {
            source_dir
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(archive)
        };

        Ok(Some(Self {
            source_dir,
            entry_prefix,
            archive_path,
            comment: comment.into(),
        }))
    }

    /// Entry name for a path relative to `source_dir`
    pub fn entry_name(&self, relative: &Path) -> String {
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        if self.entry_prefix.is_empty() {
            relative
        } else {
            format!("{}/{}", self.entry_prefix, relative)
        }
    }
}

/// Creates or updates an archive from a directory tree
pub trait Archiver {
    fn archive(&self, request: &ArchiveRequest) -> Result<ArchiveReport, ArchiveError>;
}
