//! Rsync Transfer
//!
//! Runs rsync once per plan, optionally under `nice`, with the child's
//! stdio inherited so its file list and prompts reach the terminal.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::domain::entities::{SyncPlan, TransferResult};
use crate::domain::ports::TransferTool;
use crate::domain::value_objects::{Endpoint, FilterKind, Verbosity};
use crate::error::TransferError;

/// Transfer tool backed by the rsync binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsyncTransfer {
    rsync: String,
    nice: String,
}

impl Default for RsyncTransfer {
    fn default() -> Self {
        Self::new("rsync", "nice")
    }
}

impl RsyncTransfer {
    pub fn new(rsync: impl Into<String>, nice: impl Into<String>) -> Self {
        Self {
            rsync: rsync.into(),
            nice: nice.into(),
        }
    }

    /// rsync arguments for a plan, in the order they are passed
    pub fn arguments(&self, plan: &SyncPlan) -> Vec<String> {
        // --archive implies --links: symlinks are copied as symlinks
        let mut args = vec!["--archive".to_string(), "--compress".to_string()];

        match plan.options.verbosity {
            Verbosity::Quiet => args.push("--quiet".to_string()),
            Verbosity::Normal | Verbosity::Debug => args.push("--verbose".to_string()),
        }

        if plan.options.overwrite {
            args.push("--ignore-times".to_string());
        }

        for rule in plan.filters.rules() {
            let flag = match rule.kind {
                FilterKind::Include => "--include",
                FilterKind::Exclude => "--exclude",
            };
            args.push(format!("{}={}", flag, rule.pattern));
        }
        if plan.filters.prune_empty_dirs() {
            args.push("--prune-empty-dirs".to_string());
        }

        if let Some(dir) = remote_path(&plan.destination) {
            args.push(format!(
                "--rsync-path=mkdir -p {} && rsync",
                remote_dir_arg(dir)
            ));
        }

        args.push(plan.source.to_string());
        args.push(plan.destination.to_string());
        args
    }

    /// Full command line (program first), including the `nice` wrapper
    pub fn command_line(&self, plan: &SyncPlan) -> Vec<String> {
        let mut line = Vec::new();
        if plan.options.niceness != 0 {
            line.push(self.nice.clone());
            line.push("-n".to_string());
            line.push(plan.options.niceness.to_string());
        }
        line.push(self.rsync.clone());
        line.extend(self.arguments(plan));
        line
    }

    fn prepare_destination(&self, destination: &Endpoint) -> Result<(), TransferError> {
        if destination.is_remote() {
            return Ok(());
        }
        let path = PathBuf::from(&destination.path);
        fs::create_dir_all(&path).map_err(|source| TransferError::Destination { path, source })
    }
}

impl TransferTool for RsyncTransfer {
    fn name(&self) -> &str {
        &self.rsync
    }

    fn transfer(&self, plan: &SyncPlan) -> Result<TransferResult, TransferError> {
        self.prepare_destination(&plan.destination)?;

        let line = self.command_line(plan);
        let Some((program, args)) = line.split_first() else {
            return Err(TransferError::Launch {
                tool: self.rsync.clone(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
            });
        };
        tracing::debug!(command = %line.join(" "), "spawning transfer");

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| TransferError::Launch {
                tool: program.clone(),
                source,
            })?;

        Ok(TransferResult::new(
            exit_code(status),
            plan.source.clone(),
            plan.destination.clone(),
        ))
    }
}

/// Exit code as a shell would report it: 128 + signal for a killed child
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// Directory part of a remote endpoint, if it is remote
fn remote_path(endpoint: &Endpoint) -> Option<&str> {
    if !endpoint.is_remote() {
        return None;
    }
    let path = match endpoint.host {
        Some(_) => Some(endpoint.path.as_str()),
        None => endpoint.path.split_once(':').map(|(_, path)| path),
    };
    path.filter(|path| !path.is_empty())
}

/// Quote a remote directory for the remote shell, leaving a leading `~`
/// outside the quotes so it still expands to the remote home
fn remote_dir_arg(dir: &str) -> String {
    if dir == "~" {
        return "~".to_string();
    }
    match dir.strip_prefix("~/") {
        Some("") => "~/".to_string(),
        Some(rest) => format!("~/{}", shell_quote(rest)),
        None => shell_quote(dir),
    }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
