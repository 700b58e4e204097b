//! Common utilities for scout integration tests

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use scout::workspace::Workspace;

/// Disposable workspace rooted in a temporary directory.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file (and its parent directories) with the given content.
    pub fn create_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    pub fn workspace(&self) -> Workspace {
        Workspace::new(self.root()).expect("Failed to open workspace")
    }
}
