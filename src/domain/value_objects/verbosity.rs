//! Output verbosity for a sync run

use serde::{Deserialize, Serialize};

/// How much the transfer reports, and whether it runs at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Only errors
    Quiet,
    /// Status lines plus rsync's file list
    #[default]
    Normal,
    /// Print the resolved plan and stop without transferring
    Debug,
}

impl Verbosity {
    pub const VALID_VALUES: &'static [&'static str] = &["quiet", "normal", "debug"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    pub fn is_quiet(&self) -> bool {
        matches!(self, Verbosity::Quiet)
    }

    pub fn is_debug(&self) -> bool {
        matches!(self, Verbosity::Debug)
    }
}
