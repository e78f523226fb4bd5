//! Transfer tool port
//!
//! Abstracts the external mirroring program (rsync in production, a
//! recording fake in tests).

use crate::domain::entities::{SyncPlan, TransferResult};
use crate::error::TransferError;

/// An external program that mirrors one directory tree onto another
pub trait TransferTool {
    /// Name of the tool (for logging and error messages)
    fn name(&self) -> &str;

    /// Run the transfer described by `plan` once, blocking until it exits.
    ///
    /// A non-zero exit is reported through [`TransferResult::exit_code`];
    /// `Err` means the tool could not be started at all.
    fn transfer(&self, plan: &SyncPlan) -> Result<TransferResult, TransferError>;
}
