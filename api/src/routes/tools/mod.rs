//! Remote-callable tools: a plain JSON list/call pair over HTTP.

pub mod call_tool_route;
pub mod list_tools_route;
pub mod tool_catalog;
