/// Tools module for sandboxed workspace exploration
///
/// This module provides the infrastructure consumed by an agent runtime:
/// - Tool trait and registry for defining and advertising tools
/// - Tool executor for running caller-supplied tool calls
/// - Built-in tool implementations (file listing, content search)
mod executor;
mod implementations;
mod registry;

pub use executor::{ToolCall, ToolExecutor, ToolResponse};
pub use implementations::{ListFilesTool, SearchTool};
pub use registry::{ContentBlock, ScoutTool, ToolRegistry, ToolSpec};

/// Registry with every built-in tool registered.
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(ListFilesTool));
    registry.register(Box::new(SearchTool));
    registry
}
