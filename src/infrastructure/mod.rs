//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `transfer/` - Transfer tools (rsync)
//! - `archive/` - Archivers (zip)

pub mod archive;
pub mod transfer;

// Re-export for convenience
pub use archive::ZipArchiver;
pub use transfer::RsyncTransfer;
