//! Transfer tool implementations

mod rsync;

pub use rsync::RsyncTransfer;
