//! Sync Result
//!
//! Result types for sync operations.

use serde::Serialize;

use crate::domain::entities::{ArchiveReport, SyncPlan, TransferResult};

/// What happened to the archive step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArchiveOutcome {
    /// No archive was asked for (or the direction never archives)
    NotRequested,
    /// Asked for, but the transfer did not succeed
    Skipped { reason: String },
    Archived { report: ArchiveReport },
    /// The archive step ran and failed; the transfer result stands
    Failed { error: String },
}

impl ArchiveOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ArchiveOutcome::Failed { .. })
    }
}

/// Result of a sync operation
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub plan: SyncPlan,
    /// `None` for a dry (debug) run
    pub transfer: Option<TransferResult>,
    pub archive: ArchiveOutcome,
}

impl SyncReport {
    /// Report for a plan that was printed, not executed
    pub fn dry(plan: SyncPlan) -> Self {
        Self {
            plan,
            transfer: None,
            archive: ArchiveOutcome::NotRequested,
        }
    }

    pub fn is_dry(&self) -> bool {
        self.transfer.is_none()
    }

    /// Process exit code: the transfer tool's own code, 0 for a dry run
    pub fn exit_code(&self) -> i32 {
        self.transfer.as_ref().map_or(0, TransferResult::exit_code)
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == 0
    }
}
