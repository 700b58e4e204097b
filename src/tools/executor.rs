use futures::future::join_all;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::ToolError;
use crate::workspace::Workspace;

use super::registry::{ContentBlock, ToolRegistry};

/// A single tool invocation request from the caller.
#[derive(Debug, Clone)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: Value,
}

/// Outcome of one tool call, ready to hand back to the caller.
#[derive(Debug, Clone)]
pub struct ToolResponse {
    pub call_id: String,
    pub content: Vec<ContentBlock>,
    pub is_error: bool,
}

impl ToolResponse {
    fn success(call_id: String, content: Vec<ContentBlock>) -> Self {
        Self {
            call_id,
            content,
            is_error: false,
        }
    }

    fn error(call_id: String, message: String) -> Self {
        Self {
            call_id,
            content: vec![ContentBlock::text(message)],
            is_error: true,
        }
    }

    /// All text content joined with newlines.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .map(ContentBlock::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Tool executor orchestrates tool execution
///
/// Caller-input errors become error-flagged responses the caller can react
/// to; anything else is fatal for the invocation and propagates unchanged.
pub struct ToolExecutor {
    registry: ToolRegistry,
    workspace: Workspace,
}

impl ToolExecutor {
    /// Create a new tool executor
    pub fn new(registry: ToolRegistry, workspace: Workspace) -> Self {
        Self {
            registry,
            workspace,
        }
    }

    /// Execute a single tool call with error handling
    pub async fn execute_tool_call(&self, call: &ToolCall) -> Result<ToolResponse, ToolError> {
        info!("Executing tool: {} (call_id: {})", call.name, call.id);
        debug!("Tool arguments: {:?}", call.arguments);

        let Some(tool) = self.registry.get(&call.name) else {
            error!("Unknown tool requested: {}", call.name);
            return Ok(ToolResponse::error(
                call.id.clone(),
                format!("Error: Unknown tool '{}'", call.name),
            ));
        };

        match tool.execute(call.arguments.clone(), &self.workspace).await {
            Ok(content) => {
                info!(
                    "Tool {} succeeded with {} content block(s)",
                    call.name,
                    content.len()
                );
                Ok(ToolResponse::success(call.id.clone(), content))
            }
            Err(e) if e.is_caller_error() => {
                warn!("Tool {} rejected the request: {}", call.name, e);
                Ok(ToolResponse::error(call.id.clone(), e.to_string()))
            }
            Err(e) => {
                error!("Tool {} failed: {}", call.name, e);
                Err(e)
            }
        }
    }

    /// Execute multiple tool calls in parallel
    ///
    /// Uses futures::join_all; each call owns its own accumulator and
    /// matcher state, so concurrent calls cannot interfere.
    pub async fn execute_tool_calls(
        &self,
        calls: &[ToolCall],
    ) -> Result<Vec<ToolResponse>, ToolError> {
        info!("Executing {} tool call(s)", calls.len());

        let futures: Vec<_> = calls
            .iter()
            .map(|call| self.execute_tool_call(call))
            .collect();

        join_all(futures).await.into_iter().collect()
    }

    /// Get a reference to the tool registry
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::default_registry;
    use serde_json::json;
    use tempfile::TempDir;

    fn executor(temp: &TempDir) -> ToolExecutor {
        let workspace = Workspace::new(temp.path()).unwrap();
        ToolExecutor::new(default_registry(), workspace)
    }

    fn call(name: &str, arguments: Value) -> ToolCall {
        ToolCall {
            id: "call-1".to_string(),
            name: name.to_string(),
            arguments,
        }
    }

    #[tokio::test]
    async fn unknown_tool_becomes_an_error_response() {
        let temp = TempDir::new().unwrap();
        let response = executor(&temp)
            .execute_tool_call(&call("delete_everything", json!({})))
            .await
            .unwrap();
        assert!(response.is_error);
        assert!(response.text().contains("Unknown tool"));
    }

    #[tokio::test]
    async fn caller_errors_become_error_responses() {
        let temp = TempDir::new().unwrap();
        let response = executor(&temp)
            .execute_tool_call(&call("list_files", json!({ "path": ".." })))
            .await
            .unwrap();
        assert!(response.is_error);
        assert!(response.text().contains("Access denied"));
    }

    #[tokio::test]
    async fn fatal_errors_propagate_instead_of_becoming_responses() {
        let temp = TempDir::new().unwrap();
        let content: String = (0..100).map(|i| format!("match line {i}\n")).collect();
        std::fs::write(temp.path().join("many.txt"), content).unwrap();

        let workspace = Workspace::new(temp.path()).unwrap().with_search_output_cap(64);
        let executor = ToolExecutor::new(default_registry(), workspace);

        let result = executor
            .execute_tool_call(&call("search", json!({ "pattern": "match" })))
            .await;
        assert!(matches!(result, Err(ToolError::SearchOverflow { .. })));
    }

    #[tokio::test]
    async fn parallel_calls_each_get_their_own_response() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.txt"), "alpha").unwrap();

        let calls = vec![
            call("list_files", json!({})),
            call("list_files", json!({ "recursive": false })),
        ];
        let responses = executor(&temp).execute_tool_calls(&calls).await.unwrap();
        assert_eq!(responses.len(), 2);
        assert!(responses.iter().all(|r| !r.is_error));
        assert!(responses.iter().all(|r| r.text().contains("a.txt")));
    }
}
