//! Sync direction value object
//!
//! - `Pull`: remote host tree -> local data root (hydrograph sync)
//! - `Push`: local data root -> remote host tree (climate forcing sync)

use serde::{Deserialize, Serialize};

/// Which way files move between the data root and the compute host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncDirection {
    /// Remote source, local destination
    Pull,
    /// Local source, remote destination
    Push,
}

impl SyncDirection {
    /// True when the host root is the source side
    pub fn is_pull(&self) -> bool {
        matches!(self, SyncDirection::Pull)
    }

    /// Short human label used in status output
    pub fn label(&self) -> &'static str {
        match self {
            SyncDirection::Pull => "hydrograph sync",
            SyncDirection::Push => "climate forcing sync",
        }
    }
}

impl std::fmt::Display for SyncDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncDirection::Pull => write!(f, "pull"),
            SyncDirection::Push => write!(f, "push"),
        }
    }
}
