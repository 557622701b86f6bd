//! Tool descriptors advertised to tool-calling hosts.
//!
//! The shape follows the MCP `tools/list` reply: name, description and a
//! JSON-schema style `inputSchema`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Mode;

pub const COMPRESS_TOOL: &str = "compress";
pub const STATUS_TOOL: &str = "status";

/// JSON Schema style input schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Default for InputSchema {
    fn default() -> Self {
        Self {
            type_name: "object".into(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }
}

/// Property definition in an input schema.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PropertyInfo {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: InputSchema,
}

impl ToolDescriptor {
    pub fn is_required(&self, param: &str) -> bool {
        self.input_schema.required.iter().any(|r| r == param)
    }
}

fn property(type_name: &str, description: &str) -> PropertyInfo {
    PropertyInfo {
        type_name: type_name.into(),
        description: description.into(),
        allowed: None,
    }
}

pub fn compress_tool() -> ToolDescriptor {
    let mut properties = BTreeMap::new();
    properties.insert(
        "input".to_string(),
        property("string", "Your rambling description or feature request"),
    );
    properties.insert(
        "mode".to_string(),
        PropertyInfo {
            allowed: Some(Mode::ALL.iter().map(|m| m.to_string()).collect()),
            ..property(
                "string",
                "Prompt mode: new-project for scaffolding, in-project for tasks (auto-detected if not specified)",
            )
        },
    );
    properties.insert(
        "useLLM".to_string(),
        property(
            "boolean",
            "Use the local model for enhanced compression (default: true if available)",
        ),
    );

    ToolDescriptor {
        name: COMPRESS_TOOL.into(),
        description: "Compress a verbose description into a token-efficient prompt for a coding assistant. \
                      Strips filler words, applies shorthand, and formats for clarity."
            .into(),
        input_schema: InputSchema {
            properties,
            required: vec!["input".into()],
            ..InputSchema::default()
        },
    }
}

pub fn status_tool() -> ToolDescriptor {
    ToolDescriptor {
        name: STATUS_TOOL.into(),
        description: "Check server status and local model availability".into(),
        input_schema: InputSchema::default(),
    }
}

/// Every tool this server exposes, in advertisement order.
pub fn default_tools() -> Vec<ToolDescriptor> {
    vec![compress_tool(), status_tool()]
}
