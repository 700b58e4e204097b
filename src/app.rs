use std::path::PathBuf;

use anyhow::{Result, bail};
use serde_json::json;

use crate::cli::{Config, Operation};
use crate::tools::{ToolCall, ToolExecutor, default_registry};
use crate::workspace::Workspace;

/// Run one CLI invocation: build the workspace sandbox, translate the
/// command-line flags into a tool call, execute it and print the result.
pub async fn run_app(config: Config) -> Result<()> {
    let root = match &config.root {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    let workspace = Workspace::new(&root)?;
    let executor = ToolExecutor::new(default_registry(), workspace);

    let (name, arguments) = match config.operation {
        Operation::Tools => {
            let specs = executor.registry().specs();
            println!("{}", serde_json::to_string_pretty(&specs)?);
            return Ok(());
        }
        Operation::List {
            path,
            recursive,
            ignore,
        } => {
            let mut arguments = json!({ "path": path, "recursive": recursive });
            if let Some(ignore) = ignore {
                arguments["ignore"] = json!(ignore);
            }
            ("list_files", arguments)
        }
        Operation::Search {
            pattern,
            path,
            include,
            exclude,
            case_sensitive,
        } => {
            let mut arguments =
                json!({ "pattern": pattern, "path": path, "caseSensitive": case_sensitive });
            if !include.is_empty() {
                arguments["include"] = json!(include);
            }
            if let Some(exclude) = exclude {
                arguments["exclude"] = json!(exclude);
            }
            ("search", arguments)
        }
    };

    let call = ToolCall {
        id: "cli".to_string(),
        name: name.to_string(),
        arguments,
    };
    let response = executor.execute_tool_call(&call).await?;

    let text = response.text();
    if response.is_error {
        bail!("{text}");
    }
    println!("{text}");
    Ok(())
}
