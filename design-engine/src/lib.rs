//! Figma node inspection and code generation.
//!
//! Pipeline over a borrowed document tree:
//!
//! ```text
//! DocumentNode ─ find_by_name ─> node ─ extract_style ─> StyleRecord ─ render_markup ─> HTML
//!                                  └──────────────── render_react_component ─────────> TSX
//! DocumentNode ─ enumerate ─> Vec<ComponentDescriptor>
//! ```
//!
//! Nothing here performs I/O or fails: missing attributes fall back to
//! documented defaults. Fetching the tree is the caller's job.

pub mod classify;
pub mod codegen;
pub mod enumerate;
pub mod model;
pub mod search;
pub mod style;

pub use classify::{ComponentType, VisualTraits, classify};
pub use codegen::{CodeTarget, GeneratedComponent, render_markup, render_react_component};
pub use enumerate::{ComponentDescriptor, enumerate};
pub use model::{BoundingBox, Color, DocumentNode, NodeKind, Paint, TypeStyle};
pub use search::{find_by_id, find_by_name};
pub use style::{StyleRecord, extract_style, hexify};

/// Locates `name` and extracts its style in one step.
pub fn inspect(root: &DocumentNode, name: &str) -> Option<StyleRecord> {
    find_by_name(root, name).map(extract_style)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::model::DocumentNode;

    /// Builds a node from Figma-shaped JSON.
    pub fn node(value: serde_json::Value) -> DocumentNode {
        serde_json::from_value(value).expect("fixture must be a valid node")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inspect_finds_and_extracts() {
        let tree = fixtures::node(json!({
            "name": "Page",
            "type": "CANVAS",
            "children": [
                { "name": "Card", "type": "FRAME", "cornerRadius": 8,
                  "fills": [ { "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } } ] }
            ]
        }));

        let style = inspect(&tree, "Card").unwrap();
        assert_eq!(style.component_type, ComponentType::Button);
        assert_eq!(style.background_color, "#ffffff");
        assert!(inspect(&tree, "Missing").is_none());
    }

    #[test]
    fn missing_bounding_box_uses_default_size() {
        let tree = fixtures::node(json!({ "name": "Lonely", "type": "FRAME" }));
        let style = inspect(&tree, "Lonely").unwrap();
        assert_eq!((style.width, style.height), (200.0, 50.0));
    }
}
