//! Domain Value Objects
//!
//! Immutable value types that describe one sync run.

mod config_warning;
mod direction;
mod endpoint;
mod filter_rule;
mod project_path;
mod verbosity;

pub use config_warning::ConfigWarning;
pub use direction::SyncDirection;
pub use endpoint::Endpoint;
pub use filter_rule::{FilterKind, FilterRule, FilterSet};
pub use project_path::{validate_project, ProjectPath, DEFAULT_PROJECT_TEMPLATE, PROJECT_PLACEHOLDER};
pub use verbosity::Verbosity;
