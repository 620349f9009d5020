// Tool trait, tiers and the registry the server dispatches through

use crate::protocol::{CallToolResult, ToolSchema};
use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments.
    ///
    /// Remote failures come back as a result with `is_error` set. An `Err` is
    /// reserved for arguments that do not match the schema (see
    /// [`crate::tools::ArgumentError`]) and for bugs.
    async fn execute(&self, arguments: Value) -> Result<CallToolResult>;

    /// Get the tool's tier
    fn tier(&self) -> ToolTier {
        ToolTier::Tier0
    }
}

/// Tool security tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToolTier {
    /// Read-only operations
    Tier0,
    /// Creates and updates
    Tier1,
    /// Deletes, revocations and relationship removals
    Tier2,
}

/// Tool registry for managing available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. A later registration under the same name replaces the
    /// earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        if self.tools.insert(schema.name.clone(), tool).is_some() {
            tracing::warn!(tool = %schema.name, "Tool registered twice, keeping the latest");
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas, sorted by name
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Number of registered tools per tier
    pub fn tier_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for tool in self.tools.values() {
            counts[tool.tier() as usize] += 1;
        }
        counts
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_enum(values: &[&str], description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "enum": values,
        "description": description
    })
}

pub fn json_schema_number(description: &str) -> Value {
    serde_json::json!({
        "type": "number",
        "description": description
    })
}

pub fn json_schema_boolean(description: &str) -> Value {
    serde_json::json!({
        "type": "boolean",
        "description": description
    })
}

pub fn json_schema_array(items: Value, description: &str) -> Value {
    serde_json::json!({
        "type": "array",
        "items": items,
        "description": description
    })
}

pub fn json_schema_map(values: Value, description: &str) -> Value {
    serde_json::json!({
        "type": "object",
        "additionalProperties": values,
        "description": description
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedTool(&'static str, ToolTier);

    #[async_trait::async_trait]
    impl Tool for NamedTool {
        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: self.0.to_string(),
                description: String::new(),
                input_schema: json_schema_object(serde_json::json!({}), vec![]),
            }
        }

        async fn execute(&self, _arguments: Value) -> Result<CallToolResult> {
            Ok(CallToolResult::text(self.0))
        }

        fn tier(&self) -> ToolTier {
            self.1
        }
    }

    #[test]
    fn test_schemas_are_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool("list_builds", ToolTier::Tier0)));
        registry.register(Arc::new(NamedTool("create_app", ToolTier::Tier1)));
        registry.register(Arc::new(NamedTool("delete_profile", ToolTier::Tier2)));

        let names: Vec<String> = registry.list_schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["create_app", "delete_profile", "list_builds"]);
        assert_eq!(registry.tier_counts(), [1, 1, 1]);
    }

    #[test]
    fn test_duplicate_registration_replaces() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool("get_app", ToolTier::Tier0)));
        registry.register(Arc::new(NamedTool("get_app", ToolTier::Tier1)));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("get_app").unwrap().tier(), ToolTier::Tier1);
        assert!(!registry.contains("list_apps"));
    }

    #[test]
    fn test_enum_schema() {
        let schema = json_schema_enum(&["IOS", "MAC_OS"], "Platform");
        assert_eq!(schema["enum"][1], "MAC_OS");
        assert_eq!(schema["type"], "string");
    }
}
