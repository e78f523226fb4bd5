//! Sync Use Case
//!
//! Orchestrates one run:
//! 1. Stop early for a dry (debug) plan
//! 2. Invoke the transfer tool exactly once
//! 3. Archive the destination, only after a pull that exited 0
//!
//! The transfer exit code is never altered by the archive step.

use chrono::{DateTime, Utc};

use crate::domain::entities::SyncPlan;
use crate::domain::ports::{ArchiveRequest, Archiver, TransferTool};
use crate::error::TransferError;

use super::result::{ArchiveOutcome, SyncReport};

/// Archive comment format, as printed by `date -u`
pub const ARCHIVE_DATE_FORMAT: &str = "%a %b %e %H:%M:%S UTC %Y";

/// Render the archive comment for a point in time
pub fn archive_comment(now: &DateTime<Utc>) -> String {
    now.format(ARCHIVE_DATE_FORMAT).to_string()
}

/// Sync use case, parameterized by its ports
pub struct SyncUseCase<T, A>
where
    T: TransferTool,
    A: Archiver,
{
    tool: T,
    archiver: A,
}

impl<T, A> SyncUseCase<T, A>
where
    T: TransferTool,
    A: Archiver,
{
    pub fn new(tool: T, archiver: A) -> Self {
        Self { tool, archiver }
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    pub fn archiver(&self) -> &A {
        &self.archiver
    }

    /// Execute the plan, stamping any archive with the current time
    pub fn execute(&self, plan: &SyncPlan) -> Result<SyncReport, TransferError> {
        self.execute_at(plan, &Utc::now())
    }

    /// Execute the plan with an explicit archive timestamp
    pub fn execute_at(
        &self,
        plan: &SyncPlan,
        now: &DateTime<Utc>,
    ) -> Result<SyncReport, TransferError> {
        if plan.is_dry() {
            tracing::debug!("debug verbosity, transfer not executed");
            return Ok(SyncReport::dry(plan.clone()));
        }

        tracing::info!(
            tool = self.tool.name(),
            direction = %plan.direction,
            source = %plan.source,
            destination = %plan.destination,
            "starting transfer"
        );
        let transfer = self.tool.transfer(plan)?;
        tracing::info!(exit_code = transfer.exit_code(), "transfer finished");

        let archive = if !plan.wants_archive() {
            ArchiveOutcome::NotRequested
        } else if !transfer.is_success() {
            ArchiveOutcome::Skipped {
                reason: format!(
                    "{} exited with status {}",
                    self.tool.name(),
                    transfer.exit_code()
                ),
            }
        } else {
            self.archive(plan, archive_comment(now))
        };

        Ok(SyncReport {
            plan: plan.clone(),
            transfer: Some(transfer),
            archive,
        })
    }

    fn archive(&self, plan: &SyncPlan, comment: String) -> ArchiveOutcome {
        let request = match ArchiveRequest::for_plan(plan, comment) {
            Ok(Some(request)) => request,
            Ok(None) => return ArchiveOutcome::NotRequested,
            Err(e) => {
                tracing::warn!(error = %e, "archive step failed");
                return ArchiveOutcome::Failed {
                    error: e.to_string(),
                };
            }
        };

        match self.archiver.archive(&request) {
            Ok(report) => {
                tracing::info!(
                    archive = %report.archive.display(),
                    added = report.added,
                    updated = report.updated,
                    unchanged = report.unchanged,
                    "archive written"
                );
                ArchiveOutcome::Archived { report }
            }
            Err(e) => {
                tracing::warn!(
                    archive = %request.archive_path.display(),
                    error = %e,
                    "archive step failed"
                );
                ArchiveOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}
