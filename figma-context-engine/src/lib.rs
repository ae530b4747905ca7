pub mod config;
pub mod errors;
pub mod figma_api;
pub mod reports;
pub mod telemetry;

use design_engine::{
    CodeTarget, DocumentNode, codegen::render_markup_document, enumerate, extract_style,
    find_by_name, render_markup, render_react_component,
};
use tracing::{debug, info, instrument};

pub use crate::{
    config::FigmaConfig,
    errors::{
        ErrorKind, FigmaConfigError, FigmaContextError, FigmaContextResult, FigmaUpstreamError,
    },
    figma_api::{FigmaClient, FigmaFile, parse_file_key},
    reports::{
        ComponentListing, GenerateRequest, GeneratedCode, InspectReport, NodeRequest,
        validate_file_key,
    },
};

/// Fetches a file, locates a node by name and returns its style record.
///
/// Order of checks: request parameters, then configuration, then the single
/// upstream fetch, then the search.
#[instrument(skip(cfg, req), fields(file_key = %req.file_key, node = %req.node_name))]
pub async fn run_inspect(cfg: &FigmaConfig, req: &NodeRequest) -> FigmaContextResult<InspectReport> {
    let file_key = req.validate()?;
    let file = fetch(cfg, &file_key).await?;
    let report = inspect_file(&file, &file_key, &req.node_name)?;

    info!(
        node_id = %report.node_id,
        component_type = %report.style.component_type,
        "node inspected"
    );
    Ok(report)
}

/// Fetches a file, locates a node by name and renders code for it.
#[instrument(
    skip(cfg, req),
    fields(file_key = %req.node.file_key, node = %req.node.node_name, target = %req.target)
)]
pub async fn run_generate(
    cfg: &FigmaConfig,
    req: &GenerateRequest,
) -> FigmaContextResult<GeneratedCode> {
    let file_key = req.node.validate()?;
    let file = fetch(cfg, &file_key).await?;
    let out = generate_from_file(&file, &file_key, req)?;

    info!(node_id = %out.node_id, bytes = out.code.len(), "code generated");
    Ok(out)
}

/// Fetches a file and lists its COMPONENT / FRAME / RECTANGLE nodes.
#[instrument(skip(cfg))]
pub async fn run_enumerate(cfg: &FigmaConfig, file_key: &str) -> FigmaContextResult<ComponentListing> {
    let file_key = validate_file_key(file_key)?;
    let file = fetch(cfg, &file_key).await?;
    let listing = list_file_components(&file);

    info!(count = listing.count, "components enumerated");
    Ok(listing)
}

async fn fetch(cfg: &FigmaConfig, file_key: &str) -> FigmaContextResult<FigmaFile> {
    let client = FigmaClient::from_config(cfg)?;
    client.fetch_file(file_key).await
}

fn locate<'a>(
    document: &'a DocumentNode,
    file_key: &str,
    name: &str,
) -> FigmaContextResult<&'a DocumentNode> {
    find_by_name(document, name).ok_or_else(|| {
        debug!(%file_key, %name, "node not found");
        FigmaContextError::NodeNotFound {
            file_key: file_key.to_string(),
            name: name.to_string(),
        }
    })
}

/// Inspection over an already fetched file.
pub fn inspect_file(file: &FigmaFile, file_key: &str, name: &str) -> FigmaContextResult<InspectReport> {
    let node = locate(&file.document, file_key, name)?;
    Ok(InspectReport {
        file_name: file.name.clone(),
        node_id: node.id.clone(),
        node_name: node.name.clone(),
        style: extract_style(node),
    })
}

/// Code generation over an already fetched file.
///
/// HTML goes through the full style record; React reads the raw node.
pub fn generate_from_file(
    file: &FigmaFile,
    file_key: &str,
    req: &GenerateRequest,
) -> FigmaContextResult<GeneratedCode> {
    let node = locate(&file.document, file_key, &req.node.node_name)?;

    let out = match req.target {
        CodeTarget::Html => {
            let style = extract_style(node);
            let code = if req.document {
                render_markup_document(&style, &node.name)
            } else {
                render_markup(&style)
            };
            GeneratedCode {
                target: CodeTarget::Html,
                node_id: node.id.clone(),
                component_name: None,
                code,
                style: Some(style),
            }
        }
        CodeTarget::React => {
            let component = render_react_component(node);
            GeneratedCode {
                target: CodeTarget::React,
                node_id: node.id.clone(),
                component_name: Some(component.name),
                code: component.code,
                style: None,
            }
        }
    };
    Ok(out)
}

/// Component listing over an already fetched file.
pub fn list_file_components(file: &FigmaFile) -> ComponentListing {
    let components = enumerate(&file.document);
    ComponentListing {
        file_name: file.name.clone(),
        last_modified: file.last_modified.clone(),
        count: components.len(),
        components,
    }
}
