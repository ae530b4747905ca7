//! Request and result types shared by the HTTP layer, tool calls and the CLI.

use design_engine::{CodeTarget, ComponentDescriptor, StyleRecord};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{FigmaContextError, FigmaContextResult},
    figma_api::parse_file_key,
};

/// Identifies one node in one file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRequest {
    /// File key or full Figma file URL.
    #[serde(default)]
    pub file_key: String,
    /// Exact node name (case-sensitive).
    #[serde(default)]
    pub node_name: String,
}

impl NodeRequest {
    pub fn new(file_key: impl Into<String>, node_name: impl Into<String>) -> Self {
        Self {
            file_key: file_key.into(),
            node_name: node_name.into(),
        }
    }

    /// Checks both parameters and returns the normalized file key.
    ///
    /// The node name is matched verbatim; only a blank name is rejected.
    pub fn validate(&self) -> FigmaContextResult<String> {
        let file_key = validate_file_key(&self.file_key)?;
        if self.node_name.trim().is_empty() {
            return Err(FigmaContextError::missing("nodeName"));
        }
        Ok(file_key)
    }
}

/// Normalizes a file key (or URL), rejecting blanks.
pub fn validate_file_key(raw: &str) -> FigmaContextResult<String> {
    if raw.trim().is_empty() {
        return Err(FigmaContextError::missing("fileKey"));
    }
    parse_file_key(raw).ok_or(FigmaContextError::InvalidRequest {
        field: "fileKey",
        reason: "is not a Figma file key or file URL",
    })
}

/// Code generation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub node: NodeRequest,
    #[serde(default)]
    pub target: CodeTarget,
    /// Wrap HTML output in a standalone page. Ignored for React.
    #[serde(default)]
    pub document: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    pub file_name: String,
    pub node_id: String,
    pub node_name: String,
    pub style: StyleRecord,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCode {
    pub target: CodeTarget,
    pub node_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleRecord>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentListing {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    pub count: usize,
    pub components: Vec<ComponentDescriptor>,
}
