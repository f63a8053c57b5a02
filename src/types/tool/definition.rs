//! Tool definition types.

use serde::{Deserialize, Serialize};

/// What an agent framework needs to advertise a tool to a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: serde_json::Value,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definition_serializes_three_fields() {
        let def = ToolDefinition::new("webSearch", "Search", json!({"type": "object"}));
        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "webSearch",
                "description": "Search",
                "input_schema": {"type": "object"}
            })
        );
    }
}
