//! Filter rules value objects
//!
//! An ordered list of include/exclude patterns, evaluated first-match-wins
//! the way rsync evaluates `--include`/`--exclude` options.
//!
//! Matching follows rsync's rules for the subset of syntax we use:
//! - a trailing `/` restricts the pattern to directories
//! - a leading `/` anchors the pattern at the transfer root
//! - a pattern without an inner `/` is matched against the final path component
//! - a pattern with an inner `/` is matched against the trailing components
//! - `*` matches any run of characters except `/`, `?` matches one character

use serde::Serialize;

/// Whether a matching rule admits or rejects a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Include,
    Exclude,
}

impl FilterKind {
    /// rsync's short filter-rule prefix
    pub fn symbol(&self) -> char {
        match self {
            FilterKind::Include => '+',
            FilterKind::Exclude => '-',
        }
    }
}

/// One include or exclude pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FilterRule {
    pub kind: FilterKind,
    pub pattern: String,
}

impl FilterRule {
    pub fn include(pattern: impl Into<String>) -> Self {
        Self {
            kind: FilterKind::Include,
            pattern: pattern.into(),
        }
    }

    pub fn exclude(pattern: impl Into<String>) -> Self {
        Self {
            kind: FilterKind::Exclude,
            pattern: pattern.into(),
        }
    }

    pub fn is_include(&self) -> bool {
        self.kind == FilterKind::Include
    }

    /// Rule that lets the transfer enter every directory
    pub fn is_directory_descend(&self) -> bool {
        self.is_include() && self.pattern == "*/"
    }

    /// Rule that rejects everything not matched earlier
    pub fn is_catch_all_exclude(&self) -> bool {
        self.kind == FilterKind::Exclude && self.pattern == "*"
    }

    /// Does this rule's pattern match `path` (relative to the transfer root)?
    pub fn matches(&self, path: &str, is_dir: bool) -> bool {
        let dir_only = self.pattern.ends_with('/');
        if dir_only && !is_dir {
            return false;
        }

        let pattern = self.pattern.trim_end_matches('/');
        let anchored = pattern.starts_with('/');
        let pattern = pattern.trim_start_matches('/');

        let components: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|c| !c.is_empty())
            .collect();
        if components.is_empty() {
            return false;
        }

        let wanted: Vec<&str> = pattern.split('/').collect();
        if anchored && wanted.len() != components.len() {
            return false;
        }
        if wanted.len() > components.len() {
            return false;
        }

        let tail = &components[components.len() - wanted.len()..];
        wanted
            .iter()
            .zip(tail)
            .all(|(glob, name)| wildcard_match(glob.as_bytes(), name.as_bytes()))
    }
}

impl std::fmt::Display for FilterRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind.symbol(), self.pattern)
    }
}

/// Ordered filter rules plus the prune-empty-directories directive
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterSet {
    rules: Vec<FilterRule>,
    prune_empty_dirs: bool,
}

impl FilterSet {
    pub fn new(rules: Vec<FilterRule>, prune_empty_dirs: bool) -> Self {
        Self {
            rules,
            prune_empty_dirs,
        }
    }

    /// No rules at all: every file participates
    pub fn unfiltered() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    pub fn prune_empty_dirs(&self) -> bool {
        self.prune_empty_dirs
    }

    pub fn is_unfiltered(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Kind of the first rule matching `path`, if any
    pub fn evaluate(&self, path: &str, is_dir: bool) -> Option<FilterKind> {
        self.rules
            .iter()
            .find(|rule| rule.matches(path, is_dir))
            .map(|rule| rule.kind)
    }

    /// A path with no matching rule is admitted
    pub fn admits(&self, path: &str, is_dir: bool) -> bool {
        self.evaluate(path, is_dir) != Some(FilterKind::Exclude)
    }

    /// Would a file at `path` be transferred?
    ///
    /// Every ancestor directory must be admitted first, because an excluded
    /// directory is never descended into.
    pub fn transfers(&self, path: &str) -> bool {
        let components: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|c| !c.is_empty())
            .collect();
        if components.is_empty() {
            return false;
        }

        for depth in 1..components.len() {
            if !self.admits(&components[..depth].join("/"), true) {
                return false;
            }
        }
        self.admits(&components.join("/"), false)
    }
}

/// Glob match for a single path component (`*` and `?` only).
fn wildcard_match(pattern: &[u8], text: &[u8]) -> bool {
    let (mut p, mut t) = (0, 0);
    let mut star: Option<usize> = None;
    let mut resume = 0;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == b'?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == b'*' {
            star = Some(p);
            p += 1;
            resume = t;
        } else if let Some(star_at) = star {
            p = star_at + 1;
            resume += 1;
            t = resume;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == b'*' {
        p += 1;
    }
    p == pattern.len()
}
