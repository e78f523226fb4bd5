//! Domain Entities
//!
//! - `SyncPlan` - everything needed to run one transfer
//! - `TransferResult` - outcome of the transfer tool invocation
//! - `ArchiveReport` - what the archive step changed

mod archive_report;
mod sync_plan;
mod transfer_result;

pub use archive_report::ArchiveReport;
pub use sync_plan::{SyncPlan, TransferOptions, DEFAULT_NICENESS, NICENESS_RANGE};
pub use transfer_result::TransferResult;
