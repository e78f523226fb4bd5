//! Sync Module
//!
//! Runs one planned transfer and the archive step that may follow it.
//!
//! ## Structure
//!
//! - `result` - Result types (`SyncReport`, `ArchiveOutcome`)
//! - `use_case` - Core use case logic (`SyncUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use hgsync::application::sync::SyncUseCase;
//!
//! let use_case = SyncUseCase::new(RsyncTransfer::default(), ZipArchiver::new());
//! let report = use_case.execute(&plan)?;
//! std::process::exit(report.exit_code());
//! ```

mod result;
mod use_case;

pub use result::{ArchiveOutcome, SyncReport};
pub use use_case::{archive_comment, SyncUseCase, ARCHIVE_DATE_FORMAT};
