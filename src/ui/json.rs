//! NDJSON output for `--json`

use std::io::{self, Write};

use hgsync::application::SyncReport;
use hgsync::domain::entities::SyncPlan;
use serde_json::json;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Event for a debug run: the plan and the command that would have run
pub fn plan_event(plan: &SyncPlan, command: &[String]) -> serde_json::Value {
    json!({
        "event": "plan",
        "plan": plan,
        "command": command,
    })
}

/// Event for an executed run
pub fn report_event(report: &SyncReport) -> serde_json::Value {
    json!({
        "event": "complete",
        "exit_code": report.exit_code(),
        "success": report.is_success(),
        "report": report,
    })
}
