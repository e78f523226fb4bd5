use hgsync::application::{ArchiveOutcome, SyncReport};

/// Status line for the transfer, `None` for a dry run
pub fn render_transfer(report: &SyncReport, tool: &str) -> Option<String> {
    let transfer = report.transfer.as_ref()?;
    let label = report.plan.direction.label();
    Some(if transfer.is_success() {
        format!(
            "✓ {} complete: {} → {}",
            label,
            transfer.source(),
            transfer.destination()
        )
    } else {
        format!(
            "✗ {} failed: {} exited with status {}",
            label,
            tool,
            transfer.exit_code()
        )
    })
}

/// Status line for the archive step, if there is anything to say
pub fn render_archive(outcome: &ArchiveOutcome) -> Option<String> {
    match outcome {
        ArchiveOutcome::NotRequested => None,
        ArchiveOutcome::Skipped { reason } => Some(format!("Archive skipped: {}", reason)),
        ArchiveOutcome::Archived { report } => {
            let verb = if report.created { "created" } else { "updated" };
            Some(format!(
                "✓ Archive {} {}: {} added, {} updated, {} unchanged",
                report.archive.display(),
                verb,
                report.added,
                report.updated,
                report.unchanged
            ))
        }
        ArchiveOutcome::Failed { error } => Some(format!("⚠ Archive failed: {}", error)),
    }
}
