//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncUseCase` - Runs the transfer once, then the archive step after a successful pull

pub mod sync;

pub use sync::{archive_comment, ArchiveOutcome, SyncReport, SyncUseCase, ARCHIVE_DATE_FORMAT};
