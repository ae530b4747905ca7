//! Flat listing of structural components in a document tree.

use serde::Serialize;

use crate::model::{DocumentNode, NodeKind, Paint};

/// Structural snapshot of one node. Not styled or classified.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub corner_radius: Option<f64>,
    pub characters: Option<String>,
}

impl From<&DocumentNode> for ComponentDescriptor {
    fn from(node: &DocumentNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind.clone(),
            width: node.absolute_bounding_box.map(|b| b.width),
            height: node.absolute_bounding_box.map(|b| b.height),
            fills: node.fills.clone(),
            strokes: node.strokes.clone(),
            corner_radius: node.corner_radius,
            characters: node.characters.clone(),
        }
    }
}

/// COMPONENT, FRAME and RECTANGLE nodes are listed; everything else is not.
pub fn is_listed(node: &DocumentNode) -> bool {
    matches!(
        node.kind,
        NodeKind::Component | NodeKind::Frame | NodeKind::Rectangle
    )
}

/// Collects descriptors in document (pre-order) order.
pub fn enumerate(root: &DocumentNode) -> Vec<ComponentDescriptor> {
    root.pre_order()
        .filter(|n| is_listed(n))
        .map(ComponentDescriptor::from)
        .collect()
}
