//! Sync planning service
//!
//! Pure domain logic that turns a request plus configuration into a
//! [`SyncPlan`]. All validation that can fail before anything runs lives
//! here, so a `ConfigError` always aborts before a process is spawned.

use crate::domain::entities::{SyncPlan, TransferOptions, NICENESS_RANGE};
use crate::domain::value_objects::{ProjectPath, SyncDirection};
use crate::error::ConfigError;

use super::filter_builder::build_filters;
use super::path_resolver::{resolve_paths, PathRequest, SyncRoots};

/// Everything the caller decides for one run
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub project: Option<String>,
    pub direction: SyncDirection,
    pub explicit_source: Option<String>,
    pub explicit_destination: Option<String>,
    pub options: TransferOptions,
}

impl PlanRequest {
    pub fn new(direction: SyncDirection) -> Self {
        Self {
            project: None,
            direction,
            explicit_source: None,
            explicit_destination: None,
            options: TransferOptions::default(),
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.explicit_source = Some(source.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.explicit_destination = Some(destination.into());
        self
    }

    pub fn with_options(mut self, options: TransferOptions) -> Self {
        self.options = options;
        self
    }
}

/// Pure planning service
pub struct Planner {
    roots: SyncRoots,
    layout: ProjectPath,
}

impl Planner {
    pub fn new(roots: SyncRoots, layout: ProjectPath) -> Self {
        Self { roots, layout }
    }

    pub fn plan(&self, request: &PlanRequest) -> Result<SyncPlan, ConfigError> {
        if request.options.archive_path.is_some() && !request.direction.is_pull() {
            return Err(ConfigError::ArchiveRequiresPull);
        }
        if !NICENESS_RANGE.contains(&request.options.niceness) {
            return Err(ConfigError::InvalidNiceness {
                value: request.options.niceness,
            });
        }

        let path_request = PathRequest {
            project: request.project.as_deref(),
            direction: request.direction,
            explicit_source: request.explicit_source.as_deref(),
            explicit_destination: request.explicit_destination.as_deref(),
        };
        let (source, destination) = resolve_paths(&path_request, &self.roots, &self.layout)?;

        let filters = build_filters(
            request.direction,
            request.options.include_all,
            request.options.include_yaml,
        );

        tracing::debug!(
            direction = %request.direction,
            source = %source,
            destination = %destination,
            rules = filters.len(),
            "planned sync"
        );

        Ok(SyncPlan {
            project: request
                .project
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            direction: request.direction,
            source,
            destination,
            filters,
            options: request.options.clone(),
        })
    }
}
