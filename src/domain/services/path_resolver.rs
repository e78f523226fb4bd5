//! Directional path resolver
//!
//! Maps a project and a direction onto source/destination endpoints. The
//! host root always lives on the remote host, the data root is local.

use crate::domain::value_objects::{Endpoint, ProjectPath, SyncDirection};
use crate::error::ConfigError;

/// Roots and host a run resolves against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncRoots {
    /// Remote host identifier (`HOST`)
    pub host: Option<String>,
    /// Project tree root on the host (`HOST_ROOT`)
    pub host_root: Option<String>,
    /// Project tree root on this machine (`DATA_ROOT`)
    pub data_root: Option<String>,
    /// Treat the host root as a local path (no host prefix)
    pub local_host: bool,
}

/// What the caller asked for
#[derive(Debug, Clone, Copy)]
pub struct PathRequest<'a> {
    pub project: Option<&'a str>,
    pub direction: SyncDirection,
    pub explicit_source: Option<&'a str>,
    pub explicit_destination: Option<&'a str>,
}

/// Resolve `(source, destination)` for a request.
///
/// Explicit endpoints are used verbatim and each one independently replaces
/// its derived counterpart.
pub fn resolve_paths(
    request: &PathRequest<'_>,
    roots: &SyncRoots,
    layout: &ProjectPath,
) -> Result<(Endpoint, Endpoint), ConfigError> {
    let (source_on_host, destination_on_host) = match request.direction {
        SyncDirection::Pull => (true, false),
        SyncDirection::Push => (false, true),
    };

    let source = match request.explicit_source.filter(|v| !v.is_empty()) {
        Some(spec) => Endpoint::verbatim(spec),
        None => derive(request.project, source_on_host, roots, layout)?,
    };
    let destination = match request.explicit_destination.filter(|v| !v.is_empty()) {
        Some(spec) => Endpoint::verbatim(spec),
        None => derive(request.project, destination_on_host, roots, layout)?,
    };

    if same_location(&source, &destination) {
        return Err(ConfigError::SameEndpoints {
            endpoint: source.to_string(),
        });
    }

    Ok((source, destination))
}

fn derive(
    project: Option<&str>,
    on_host: bool,
    roots: &SyncRoots,
    layout: &ProjectPath,
) -> Result<Endpoint, ConfigError> {
    let project = non_empty(project).ok_or(ConfigError::MissingValue {
        key: "project",
        hint: "pass --project, or give both --src and --dst",
    })?;

    if !on_host {
        let root = non_empty(roots.data_root.as_deref()).ok_or(ConfigError::MissingValue {
            key: "DATA_ROOT",
            hint: "set [local] data_root or the DATA_ROOT environment variable",
        })?;
        return Ok(Endpoint::local(layout.resolve(root, project)?));
    }

    let root = non_empty(roots.host_root.as_deref()).ok_or(ConfigError::MissingValue {
        key: "HOST_ROOT",
        hint: "set [remote] host_root or the HOST_ROOT environment variable",
    })?;
    let path = layout.resolve(root, project)?;

    if roots.local_host {
        return Ok(Endpoint::local(path));
    }
    let host = non_empty(roots.host.as_deref()).ok_or(ConfigError::MissingValue {
        key: "HOST",
        hint: "set [remote] host or the HOST environment variable, or pass --local",
    })?;
    Ok(Endpoint::remote(host, path))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn same_location(a: &Endpoint, b: &Endpoint) -> bool {
    a.host == b.host && a.path.trim_end_matches('/') == b.path.trim_end_matches('/')
}
