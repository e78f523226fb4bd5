//! hgsync - mirror hydrological model runs between a compute host and a workstation
//!
//! Wraps rsync with the filter lists HGS project trees need: pulling brings
//! back hydrographs, logs and run-status markers while skipping the bulky
//! grid and soil folders; pushing sends climate forcing rasters. A pull can
//! finish by packing the results into a zip archive that is updated in place.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{ArchiveOutcome, SyncReport, SyncUseCase};
pub use config::Config;
pub use domain::entities::{SyncPlan, TransferOptions, TransferResult};
pub use domain::services::{build_filters, resolve_paths, PlanRequest, Planner};
pub use domain::value_objects::{Endpoint, FilterRule, FilterSet, SyncDirection, Verbosity};
pub use error::{ArchiveError, ConfigError, HgsyncError, TransferError};
pub use infrastructure::{RsyncTransfer, ZipArchiver};
