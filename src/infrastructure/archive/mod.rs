//! Archiver implementations

mod zip;

pub use self::zip::ZipArchiver;
