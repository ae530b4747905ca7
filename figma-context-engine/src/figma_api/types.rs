//! Wire types for the Figma REST API.

use design_engine::DocumentNode;
use serde::{Deserialize, Serialize};

/// `GET /v1/files/:key` response, reduced to what the pipeline reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub document: DocumentNode,
}

/// Error body Figma sends with non-2xx responses, e.g.
/// `{"status":403,"err":"Invalid token"}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct FigmaErrorBody {
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FigmaErrorBody {
    pub fn detail(self) -> Option<String> {
        self.err
            .or(self.message)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
