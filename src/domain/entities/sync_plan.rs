//! SyncPlan entity
//!
//! The fully resolved description of one run: where from, where to, which
//! files, and how. Produced by the planner, consumed by the use case and
//! rendered verbatim in debug mode.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{Endpoint, FilterSet, SyncDirection, Verbosity};

/// Default scheduling niceness for the transfer process
pub const DEFAULT_NICENESS: i32 = 10;

/// Adjustments `nice` accepts
pub const NICENESS_RANGE: std::ops::RangeInclusive<i32> = -20..=19;

/// Switches that shape the transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferOptions {
    pub verbosity: Verbosity,
    /// Re-send every matched file regardless of size/mtime
    pub overwrite: bool,
    /// Also transfer `*.yaml` files
    pub include_yaml: bool,
    /// Skip filtering entirely
    pub include_all: bool,
    /// `nice` adjustment for the transfer process (0 = unchanged)
    pub niceness: i32,
    /// Archive to create/update after a successful pull
    pub archive_path: Option<PathBuf>,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            overwrite: false,
            include_yaml: false,
            include_all: false,
            niceness: DEFAULT_NICENESS,
            archive_path: None,
        }
    }
}

impl TransferOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_yaml(mut self, include_yaml: bool) -> Self {
        self.include_yaml = include_yaml;
        self
    }

    pub fn with_all(mut self, include_all: bool) -> Self {
        self.include_all = include_all;
        self
    }

    pub fn with_niceness(mut self, niceness: i32) -> Self {
        self.niceness = niceness;
        self
    }

    pub fn with_archive(mut self, path: impl Into<PathBuf>) -> Self {
        self.archive_path = Some(path.into());
        self
    }
}

/// Resolved input for a single sync run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncPlan {
    /// Project identifier, when paths were derived from it
    pub project: Option<String>,
    pub direction: SyncDirection,
    pub source: Endpoint,
    pub destination: Endpoint,
    pub filters: FilterSet,
    pub options: TransferOptions,
}

impl SyncPlan {
    /// Whether the archive step should follow a successful transfer
    pub fn wants_archive(&self) -> bool {
        self.direction.is_pull() && self.options.archive_path.is_some()
    }

    /// Debug verbosity plans are printed, never executed
    pub fn is_dry(&self) -> bool {
        self.options.verbosity.is_debug()
    }
}
