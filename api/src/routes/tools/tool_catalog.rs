use figma_context_engine::{
    FigmaConfig, FigmaContextError, GenerateRequest, NodeRequest, run_enumerate, run_generate,
    run_inspect,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::error_handler::pipeline_status;

pub const GET_NODE_STYLE: &str = "get_node_style";
pub const GENERATE_COMPONENT_CODE: &str = "generate_component_code";
pub const LIST_COMPONENTS: &str = "list_components";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Debug, Deserialize)]
pub struct ToolCallRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    pub content: Vec<ToolContent>,
    pub is_error: bool,
}

impl ToolCallResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent {
                kind: "text",
                text: text.into(),
            }],
            is_error: false,
        }
    }

    pub fn error(code: &str, message: impl std::fmt::Display) -> Self {
        Self {
            is_error: true,
            ..Self::text(format!("{code}: {message}"))
        }
    }

    fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self::text(text),
            Err(e) => Self::error("INTERNAL_ERROR", e),
        }
    }
}

impl From<FigmaContextError> for ToolCallResult {
    fn from(err: FigmaContextError) -> Self {
        let (_, code) = pipeline_status(&err);
        warn!(%code, error = %err, "tool call failed");
        Self::error(code, err)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListComponentsArgs {
    #[serde(default)]
    file_key: String,
}

fn node_schema(extra: Value) -> Value {
    let mut schema = json!({
        "type": "object",
        "properties": {
            "fileKey": { "type": "string", "description": "Figma file key or file URL" },
            "nodeName": { "type": "string", "description": "Exact, case-sensitive node name" }
        },
        "required": ["fileKey", "nodeName"]
    });
    if let (Some(props), Value::Object(more)) = (schema["properties"].as_object_mut(), extra) {
        props.extend(more);
    }
    schema
}

/// Descriptors for every tool, in a stable order.
pub fn catalog() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: GET_NODE_STYLE,
            description: "Find a node by name in a Figma file and return its classified style record.",
            input_schema: node_schema(json!({})),
        },
        ToolDescriptor {
            name: GENERATE_COMPONENT_CODE,
            description: "Generate HTML or a React component for a named node in a Figma file.",
            input_schema: node_schema(json!({
                "target": { "type": "string", "enum": ["html", "react"], "default": "html" },
                "document": { "type": "boolean", "default": false }
            })),
        },
        ToolDescriptor {
            name: LIST_COMPONENTS,
            description: "List COMPONENT, FRAME and RECTANGLE nodes of a Figma file.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "fileKey": { "type": "string", "description": "Figma file key or file URL" }
                },
                "required": ["fileKey"]
            }),
        },
    ]
}

pub fn is_known(name: &str) -> bool {
    catalog().iter().any(|t| t.name == name)
}

fn parse_args<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolCallResult> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| {
        debug!(error = %e, "tool arguments rejected");
        ToolCallResult::error("BAD_REQUEST", format!("invalid arguments: {e}"))
    })
}

/// Runs a known tool. Every failure is folded into an `isError` result.
pub async fn dispatch(cfg: &FigmaConfig, name: &str, arguments: Value) -> ToolCallResult {
    match name {
        GET_NODE_STYLE => {
            let req: NodeRequest = match parse_args(arguments) {
                Ok(r) => r,
                Err(e) => return e,
            };
            match run_inspect(cfg, &req).await {
                Ok(report) => ToolCallResult::json(&report),
                Err(e) => e.into(),
            }
        }
        GENERATE_COMPONENT_CODE => {
            let req: GenerateRequest = match parse_args(arguments) {
                Ok(r) => r,
                Err(e) => return e,
            };
            match run_generate(cfg, &req).await {
                Ok(generated) => ToolCallResult::text(generated.code),
                Err(e) => e.into(),
            }
        }
        LIST_COMPONENTS => {
            let args: ListComponentsArgs = match parse_args(arguments) {
                Ok(a) => a,
                Err(e) => return e,
            };
            match run_enumerate(cfg, &args.file_key).await {
                Ok(listing) => ToolCallResult::json(&listing),
                Err(e) => e.into(),
            }
        }
        other => ToolCallResult::error("UNKNOWN_TOOL", format!("unknown tool `{other}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_three_tools_with_schemas() {
        let names: Vec<&str> = catalog().iter().map(|t| t.name).collect();
        assert_eq!(names, [GET_NODE_STYLE, GENERATE_COMPONENT_CODE, LIST_COMPONENTS]);

        let tools = catalog();
        let generate = &tools[1];
        assert_eq!(generate.input_schema["properties"]["target"]["enum"][1], "react");
        assert_eq!(generate.input_schema["required"][1], "nodeName");
    }

    #[test]
    fn descriptor_serializes_camel_case() {
        let v = serde_json::to_value(&catalog()[0]).unwrap();
        assert!(v.get("inputSchema").is_some());
    }

    #[tokio::test]
    async fn missing_node_name_is_error_result() {
        let cfg = FigmaConfig::new("http://127.0.0.1:9", Some("t".into()));
        let out = dispatch(&cfg, GET_NODE_STYLE, json!({ "fileKey": "K" })).await;
        assert!(out.is_error);
        assert!(out.content[0].text.starts_with("BAD_REQUEST"));
    }

    #[tokio::test]
    async fn bad_argument_shape_is_error_result() {
        let cfg = FigmaConfig::new("http://127.0.0.1:9", Some("t".into()));
        let out = dispatch(&cfg, GENERATE_COMPONENT_CODE, json!({ "target": "vue" })).await;
        assert!(out.is_error);
        assert!(out.content[0].text.contains("invalid arguments"));
    }

    #[tokio::test]
    async fn missing_token_is_config_error_result() {
        let cfg = FigmaConfig::new("http://127.0.0.1:9", None);
        let out = dispatch(&cfg, LIST_COMPONENTS, json!({ "fileKey": "K" })).await;
        assert!(out.is_error);
        assert!(out.content[0].text.starts_with("CONFIG_ERROR"));
    }
}
