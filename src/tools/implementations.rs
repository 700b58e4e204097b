/// Tool implementations
///
/// Both tools follow the same pattern:
/// 1. Deserialize and validate arguments from JSON
/// 2. Resolve the target path against the workspace root
/// 3. Execute the read-only operation
/// 4. Return the result as content blocks, truncated to the output ceiling
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::constants::DEFAULT_IGNORE;
use crate::error::ToolError;
use crate::glob::GlobSet;
use crate::grep::{SearchRequest, run_grep};
use crate::limit::join_limited;
use crate::walker::walk_dir;
use crate::workspace::Workspace;

use super::registry::{ContentBlock, ScoutTool};

fn default_path() -> String {
    ".".to_string()
}

fn default_true() -> bool {
    true
}

fn default_ignore() -> Vec<String> {
    DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// ListFilesTool
// ============================================================================

#[derive(Deserialize)]
struct ListFilesArgs {
    #[serde(default = "default_path")]
    path: String,
    #[serde(default = "default_true")]
    recursive: bool,
    #[serde(default = "default_ignore")]
    ignore: Vec<String>,
}

pub struct ListFilesTool;

#[async_trait]
impl ScoutTool for ListFilesTool {
    fn name(&self) -> &str {
        "list_files"
    }

    fn description(&self) -> &str {
        "List files and directories under a path inside the workspace. \
         Returns sorted paths relative to the listed directory; in \
         non-recursive mode subdirectories are marked with a trailing slash. \
         Use this to explore the workspace structure."
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Directory to list, relative to the workspace root. Defaults to '.'."
                },
                "recursive": {
                    "type": "boolean",
                    "description": "Recurse into subdirectories. Defaults to true."
                },
                "ignore": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Glob patterns to skip. A pattern containing '/' matches the full relative path, otherwise the entry name at any depth. Defaults to .git, node_modules, dist and coverage."
                }
            }
        })
    }

    async fn execute(
        &self,
        args: Value,
        workspace: &Workspace,
    ) -> Result<Vec<ContentBlock>, ToolError> {
        let args: ListFilesArgs = serde_json::from_value(args)
            .map_err(|e| ToolError::InvalidParams(format!("list_files: {e}")))?;

        let ignore = GlobSet::compile(&args.ignore)?;
        let target = workspace.resolve(&args.path)?;

        let metadata = match tokio::fs::metadata(&target).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ToolError::DirectoryNotFound { path: args.path });
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_dir() {
            return Err(ToolError::NotADirectory { path: args.path });
        }

        let entries = walk_dir(&target, args.recursive, &ignore).await?;
        let limited = join_limited(&entries, workspace.list_limit());

        let text = if limited.truncated {
            format!("{}\n...and {} more", limited.text, limited.omitted)
        } else if entries.is_empty() {
            "(empty directory)".to_string()
        } else {
            limited.text
        };

        Ok(vec![ContentBlock::text(text)])
    }
}

// ============================================================================
// SearchTool
// ============================================================================

#[derive(Deserialize)]
struct SearchArgs {
    pattern: String,
    #[serde(default = "default_path")]
    path: String,
    #[serde(default)]
    include: Vec<String>,
    #[serde(default = "default_ignore")]
    exclude: Vec<String>,
    #[serde(rename = "caseSensitive", default)]
    case_sensitive: bool,
}

pub struct SearchTool;

#[async_trait]
impl ScoutTool for SearchTool {
    fn name(&self) -> &str {
        "search"
    }

    fn description(&self) -> &str {
        "Search file contents in the workspace with an extended regular \
         expression. Returns one path:line:content entry per match. Binary \
         files are skipped."
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "pattern": {
                    "type": "string",
                    "description": "Extended regular expression to search for."
                },
                "path": {
                    "type": "string",
                    "description": "Directory to search, relative to the workspace root. Defaults to '.'."
                },
                "include": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Only search files matching these globs, e.g. '*.md'."
                },
                "exclude": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Skip files and directories matching these globs. Defaults to .git, node_modules, dist and coverage."
                },
                "caseSensitive": {
                    "type": "boolean",
                    "description": "Whether matching is case-sensitive. Defaults to true."
                }
            },
            "required": ["pattern"]
        })
    }

    async fn execute(
        &self,
        args: Value,
        workspace: &Workspace,
    ) -> Result<Vec<ContentBlock>, ToolError> {
        let args: SearchArgs = serde_json::from_value(args)
            .map_err(|e| ToolError::InvalidParams(format!("search: {e}")))?;

        let target = workspace.resolve(&args.path)?;
        let relative = workspace.relative_to_root(&target);

        let stdout = run_grep(
            workspace,
            &SearchRequest {
                pattern: &args.pattern,
                path: &relative,
                include: &args.include,
                exclude: &args.exclude,
                case_sensitive: args.case_sensitive,
            },
        )
        .await?;

        let lines: Vec<String> = stdout.lines().map(str::to_string).collect();
        if lines.is_empty() {
            return Ok(vec![ContentBlock::text("No matches found.")]);
        }

        let limited = join_limited(&lines, workspace.search_limit());
        let text = if limited.truncated {
            format!("{}\n...and {} more", limited.text, limited.omitted)
        } else {
            limited.text
        };

        Ok(vec![ContentBlock::text(text)])
    }
}
