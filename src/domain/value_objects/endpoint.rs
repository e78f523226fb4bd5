//! Transfer endpoint value object
//!
//! An endpoint is a path, optionally on a remote host. It renders the way
//! rsync expects it on the command line (`host:path`).

use serde::Serialize;

/// One side of a transfer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Endpoint {
    /// Remote host (e.g. "cluster" or "user@cluster"); `None` for local paths
    pub host: Option<String>,
    /// Path on that host
    pub path: String,
}

impl Endpoint {
    pub fn local(path: impl Into<String>) -> Self {
        Self {
            host: None,
            path: path.into(),
        }
    }

    pub fn remote(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            path: path.into(),
        }
    }

    /// An endpoint given on the command line, used exactly as typed
    pub fn verbatim(spec: impl Into<String>) -> Self {
        Self::local(spec)
    }

    /// True when the path lives on a remote host.
    ///
    /// Verbatim specs in rsync's `host:path` form count as remote too.
    pub fn is_remote(&self) -> bool {
        self.host.is_some() || looks_like_remote_spec(&self.path)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.host {
            Some(host) => write!(f, "{}:{}", host, self.path),
            None => write!(f, "{}", self.path),
        }
    }
}

/// rsync treats `host:path` as remote when the colon comes before any slash.
fn looks_like_remote_spec(spec: &str) -> bool {
    match (spec.find(':'), spec.find('/')) {
        (Some(colon), Some(slash)) => colon < slash,
        (Some(_), None) => true,
        _ => false,
    }
}
