use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ToolError;
use crate::workspace::Workspace;

/// A typed block of tool output.
///
/// Tools return a list of these instead of a bare string so a gateway can
/// pass them through to its own content model unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

/// Caller-facing description of a registered tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Trait for implementing scout tools
///
/// Each tool implements this trait to define its name, description, JSON
/// schema, and execution logic. Tools are read-only: they receive the
/// workspace sandbox and must never mutate it.
#[async_trait]
pub trait ScoutTool: Send + Sync {
    /// Tool name (e.g., "list_files")
    fn name(&self) -> &str;

    /// Human-readable description for the caller
    fn description(&self) -> &str;

    /// JSON Schema for parameters (JSON Schema Draft 7)
    fn schema(&self) -> Value;

    /// Execute the tool with given arguments
    ///
    /// # Arguments
    /// * `args` - JSON value containing the tool arguments
    /// * `workspace` - Workspace sandbox the invocation is confined to
    ///
    /// # Returns
    /// Result with the tool output as content blocks, or a [`ToolError`]
    async fn execute(
        &self,
        args: Value,
        workspace: &Workspace,
    ) -> Result<Vec<ContentBlock>, ToolError>;

    /// Caller-facing spec (common conversion logic)
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.schema(),
        }
    }
}

/// Registry of available tools
///
/// Simple HashMap-based registry. Tools register themselves and can be
/// retrieved by name.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn ScoutTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register(&mut self, tool: Box<dyn ScoutTool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&dyn ScoutTool> {
        self.tools.get(name).map(|b| b.as_ref())
    }

    /// Specs of all registered tools, sorted by name for deterministic
    /// output.
    pub fn specs(&self) -> Vec<ToolSpec> {
        let mut specs: Vec<ToolSpec> = self.tools.values().map(|tool| tool.spec()).collect();
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        specs
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
