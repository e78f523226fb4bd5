//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archiver;
pub mod transfer_tool;

pub use archiver::{ArchiveRequest, Archiver, ARCHIVE_EXCLUDES, ARCHIVE_INCLUDES};
pub use transfer_tool::TransferTool;
