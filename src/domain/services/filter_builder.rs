//! Filter rule builder
//!
//! Produces the ordered include/exclude list for each direction. The order is
//! the contract: the directory-descend include comes before any file include,
//! and the catch-all exclude comes last, because rsync evaluates rules
//! first-match-wins and must be allowed into a directory before it can see
//! the files inside.

use crate::domain::value_objects::{FilterRule, FilterSet, SyncDirection};

/// Big-data subfolders never pulled back from the host
pub const PULL_EXCLUDED_DIRS: &[&str] = &["*/gb/", "*/soil/"];

/// Hydrograph output, logs, run status markers and Grok configuration
pub const PULL_FILE_PATTERNS: &[&str] = &[
    "*.hydrograph.*.dat",
    "parallelindx.dat",
    "progress.dat",
    "log.*",
    "*.grok",
    "SCHEDULED",
    "IN_PROGRESS",
    "COMPLETED",
    "batch.pfx",
    "*.log",
];

/// Climate forcing rasters
pub const PUSH_FILE_PATTERNS: &[&str] = &["*.asc"];

const YAML_PATTERN: &str = "*.yaml";
const DESCEND_PATTERN: &str = "*/";
const CATCH_ALL_PATTERN: &str = "*";

/// Build the filter set for a run.
///
/// `include_all` wins over everything else and yields an unfiltered set.
pub fn build_filters(direction: SyncDirection, include_all: bool, include_yaml: bool) -> FilterSet {
    if include_all {
        return FilterSet::unfiltered();
    }

    let mut rules = Vec::new();
    if include_yaml {
        rules.push(FilterRule::include(YAML_PATTERN));
    }

    let file_patterns = match direction {
        SyncDirection::Pull => {
            rules.extend(PULL_EXCLUDED_DIRS.iter().copied().map(FilterRule::exclude));
            PULL_FILE_PATTERNS
        }
        SyncDirection::Push => PUSH_FILE_PATTERNS,
    };

    rules.push(FilterRule::include(DESCEND_PATTERN));
    rules.extend(file_patterns.iter().copied().map(FilterRule::include));
    rules.push(FilterRule::exclude(CATCH_ALL_PATTERN));

    FilterSet::new(rules, true)
}
