use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    LIST_RESULT_LIMIT, SEARCH_OUTPUT_CAP, SEARCH_RESULT_LIMIT, get_search_timeout_secs,
};
use crate::error::ToolError;

/// The sandbox every tool invocation runs inside.
///
/// Holds the workspace root all relative paths are resolved against, plus
/// the output ceilings and the search process limits. The root is fixed for
/// the lifetime of the instance; per-call state lives in the tools.
pub struct Workspace {
    root: PathBuf,
    list_limit: usize,
    search_limit: usize,
    search_timeout: Duration,
    search_output_cap: usize,
}

impl Workspace {
    /// Open a workspace rooted at `root`. The directory must exist.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, ToolError> {
        let root = root.as_ref().canonicalize()?;
        if !root.is_dir() {
            return Err(ToolError::NotADirectory {
                path: root.display().to_string(),
            });
        }
        Ok(Self {
            root,
            list_limit: LIST_RESULT_LIMIT,
            search_limit: SEARCH_RESULT_LIMIT,
            search_timeout: Duration::from_secs(get_search_timeout_secs()),
            search_output_cap: SEARCH_OUTPUT_CAP,
        })
    }

    /// Set the listing entry ceiling (builder pattern)
    pub fn with_list_limit(mut self, limit: usize) -> Self {
        self.list_limit = limit;
        self
    }

    /// Set the search line ceiling (builder pattern)
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// Set the search process timeout (builder pattern)
    pub fn with_search_timeout(mut self, timeout: Duration) -> Self {
        self.search_timeout = timeout;
        self
    }

    /// Set the search output capture cap in bytes (builder pattern)
    pub fn with_search_output_cap(mut self, cap: usize) -> Self {
        self.search_output_cap = cap;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn list_limit(&self) -> usize {
        self.list_limit
    }

    pub fn search_limit(&self) -> usize {
        self.search_limit
    }

    pub fn search_timeout(&self) -> Duration {
        self.search_timeout
    }

    pub fn search_output_cap(&self) -> usize {
        self.search_output_cap
    }

    /// Resolve a caller-supplied relative path against the root.
    ///
    /// Resolution is lexical: `.` and `..` segments collapse without
    /// touching the filesystem, and the result is accepted only when it is
    /// the root itself or a true descendant of it, checked component-wise
    /// so a sibling like `/ws-other` can never pass for root `/ws`.
    /// Symlinks inside the root are not canonicalized.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, ToolError> {
        let candidate = self.root.join(relative);
        let mut resolved = PathBuf::new();
        for component in candidate.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if !resolved.pop() {
                        return Err(ToolError::AccessDenied {
                            path: relative.to_string(),
                        });
                    }
                }
                other => resolved.push(other),
            }
        }
        if !resolved.starts_with(&self.root) {
            return Err(ToolError::AccessDenied {
                path: relative.to_string(),
            });
        }
        Ok(resolved)
    }

    /// Express an absolute path inside the workspace as a `/`-separated
    /// path relative to the root (`.` for the root itself).
    pub fn relative_to_root(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => rel.to_string_lossy().replace('\\', "/"),
            Err(_) => path.to_string_lossy().replace('\\', "/"),
        }
    }
}
