//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal problem found while loading a config file (e.g. an unknown key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key, last dotted segment only
    pub key: String,
    /// File the key was found in
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if found
    pub line: Option<usize>,
    /// Closest known key, when the typo is small
    pub suggestion: Option<String>,
}
