//! Project path template
//!
//! A template such as `HGS/{project}/` joined onto a root produces the
//! directory that holds one project's simulation output.

use crate::error::ConfigError;

/// Placeholder substituted with the project identifier
pub const PROJECT_PLACEHOLDER: &str = "{project}";

/// Default layout under both roots
pub const DEFAULT_PROJECT_TEMPLATE: &str = "HGS/{project}/";

/// Validated project path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPath {
    template: String,
}

impl Default for ProjectPath {
    fn default() -> Self {
        Self {
            template: DEFAULT_PROJECT_TEMPLATE.to_string(),
        }
    }
}

impl ProjectPath {
    pub fn new(template: impl Into<String>) -> Result<Self, ConfigError> {
        let template = template.into();
        if !template.contains(PROJECT_PLACEHOLDER) {
            return Err(ConfigError::InvalidTemplate { template });
        }
        Ok(Self { template })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Join `root` and the expanded template.
    ///
    /// The result always ends with `/` so rsync copies directory contents
    /// rather than the directory itself.
    pub fn resolve(&self, root: &str, project: &str) -> Result<String, ConfigError> {
        validate_project(project)?;
        let project = project.trim_end_matches('/');

        let relative = self
            .template
            .replace(PROJECT_PLACEHOLDER, project)
            .trim_start_matches('/')
            .to_string();
        let mut path = if root.is_empty() {
            relative
        } else {
            format!("{}/{}", root.trim_end_matches('/'), relative)
        };
        if !path.ends_with('/') {
            path.push('/');
        }
        Ok(path)
    }
}

/// Check a project identifier before it is spliced into a path.
pub fn validate_project(project: &str) -> Result<(), ConfigError> {
    let invalid = |reason| ConfigError::InvalidProject {
        project: project.to_string(),
        reason,
    };

    if project.trim().is_empty() {
        return Err(invalid("must not be empty"));
    }
    if project.starts_with('/') {
        return Err(invalid("must be relative"));
    }
    if project
        .trim_end_matches('/')
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Err(invalid("must not contain empty, '.' or '..' segments"));
    }
    Ok(())
}
