//! External content search via `grep`.
//!
//! Builds the argument vector for a recursive, binary-skipping,
//! line-numbered extended-regex search, runs it with the workspace root as
//! working directory so emitted paths are root-relative, and classifies the
//! exit status. Exit code 1 (no matches) is a normal empty result, not an
//! error.

use std::process::Stdio;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

use crate::error::ToolError;
use crate::workspace::Workspace;

/// One content search against the workspace.
pub struct SearchRequest<'a> {
    /// Extended regular expression to search for.
    pub pattern: &'a str,
    /// Target path relative to the workspace root.
    pub path: &'a str,
    pub include: &'a [String],
    pub exclude: &'a [String],
    pub case_sensitive: bool,
}

/// Argument vector for the grep invocation. The pattern travels behind `-e`
/// as its own argv element so it can never be read as a flag, and nothing
/// is ever passed through a shell.
pub fn build_args(request: &SearchRequest<'_>) -> Vec<String> {
    let mut args: Vec<String> = ["-r", "-n", "-I", "-E"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    if !request.case_sensitive {
        args.push("-i".to_string());
    }
    for glob in request.include {
        args.push(format!("--include={glob}"));
    }
    // The same glob has to suppress both files and directory subtrees.
    for glob in request.exclude {
        args.push(format!("--exclude={glob}"));
        args.push(format!("--exclude-dir={glob}"));
    }
    args.push("-e".to_string());
    args.push(request.pattern.to_string());
    args.push(request.path.to_string());
    args
}

/// Run the search and return captured stdout (empty when nothing matched).
pub async fn run_grep(
    workspace: &Workspace,
    request: &SearchRequest<'_>,
) -> Result<String, ToolError> {
    let args = build_args(request);
    debug!("Running grep {:?} in {}", args, workspace.root().display());

    let output = timeout(
        workspace.search_timeout(),
        Command::new("grep")
            .args(&args)
            .current_dir(workspace.root())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output(),
    )
    .await
    .map_err(|_| ToolError::SearchTimeout {
        seconds: workspace.search_timeout().as_secs(),
    })??;

    if output.stdout.len() > workspace.search_output_cap() {
        return Err(ToolError::SearchOverflow {
            cap: workspace.search_output_cap(),
        });
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    match output.status.code() {
        Some(0) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
        Some(1) => Ok(String::new()),
        Some(2) => Err(ToolError::SearchUsage { code: 2, stderr }),
        code => Err(ToolError::SearchAborted { code, stderr }),
    }
}
