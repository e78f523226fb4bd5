//! ArchiveReport entity

use std::path::PathBuf;

use serde::Serialize;

/// Summary of one archive create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveReport {
    /// Archive file that was written
    pub archive: PathBuf,
    /// True when no archive existed before this run
    pub created: bool,
    /// Entries that did not exist in the archive
    pub added: usize,
    /// Entries re-compressed because the file changed
    pub updated: usize,
    /// Entries copied over untouched
    pub unchanged: usize,
}

impl ArchiveReport {
    pub fn new(archive: impl Into<PathBuf>, created: bool) -> Self {
        Self {
            archive: archive.into(),
            created,
            added: 0,
            updated: 0,
            unchanged: 0,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.updated > 0
    }

    pub fn total_entries(&self) -> usize {
        self.added + self.updated + self.unchanged
    }
}
