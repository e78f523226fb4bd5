//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod filter_builder;
mod path_resolver;
mod planner;

pub use filter_builder::{build_filters, PULL_EXCLUDED_DIRS, PULL_FILE_PATTERNS, PUSH_FILE_PATTERNS};
pub use path_resolver::{resolve_paths, PathRequest, SyncRoots};
pub use planner::{PlanRequest, Planner};
