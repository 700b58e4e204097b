use thiserror::Error;

/// Errors raised by the workspace tools.
///
/// Variants fall into two tiers: caller-input errors (the caller can recover
/// by adjusting its request) and failures that are fatal for the invocation.
/// Use [`ToolError::is_caller_error`] to tell them apart.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Access denied: {path} is outside the workspace root")]
    AccessDenied { path: String },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The search process reported a usage or runtime error (exit code 2).
    #[error("Search failed (grep exit code {code}): {stderr}")]
    SearchUsage { code: i32, stderr: String },

    /// The search process died on a signal or returned an undocumented code.
    #[error("Search process terminated abnormally (exit code {code:?}): {stderr}")]
    SearchAborted { code: Option<i32>, stderr: String },

    #[error("Search output exceeded the {cap} byte capture limit")]
    SearchOverflow { cap: usize },

    #[error("Search timed out after {seconds}s")]
    SearchTimeout { seconds: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ToolError {
    /// True for errors the caller caused and can fix by adjusting the
    /// request; false for errors that are fatal for this invocation.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            ToolError::AccessDenied { .. }
                | ToolError::DirectoryNotFound { .. }
                | ToolError::NotADirectory { .. }
                | ToolError::InvalidParams(_)
                | ToolError::SearchUsage { .. }
        )
    }
}
