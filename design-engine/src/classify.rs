//! Heuristic component-type detection.
//!
//! Two tiers, evaluated in order:
//! 1. name keywords (case-insensitive substring match), first hit wins;
//! 2. visual traits, only when the name says nothing.
//!
//! The visual tier has no rule for inputs: an input is only ever detected by
//! its name.

use serde::{Deserialize, Serialize};

use crate::model::{DocumentNode, NodeKind};

/// Corner radius at or above which a node counts as rounded.
pub const ROUNDED_CORNER_THRESHOLD: f64 = 4.0;

/// Font weight at or above which label text counts as emphasized.
pub const BOLD_WEIGHT_THRESHOLD: f64 = 600.0;

const BUTTON_KEYWORDS: &[&str] = &["button", "btn"];
const TEXT_KEYWORDS: &[&str] = &["text", "label", "title", "heading"];
const INPUT_KEYWORDS: &[&str] = &["input", "textbox", "field"];

/// Semantic UI role inferred for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Button,
    Text,
    Input,
}

impl ComponentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Button => "button",
            ComponentType::Text => "text",
            ComponentType::Input => "input",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes derived during style extraction that the visual tier needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualTraits {
    /// A visible solid first fill with a colour and non-zero opacity.
    pub has_background: bool,
    /// Resolved font weight (own or first TEXT descendant, default 400).
    pub font_weight: f64,
}

/// Classifies a node. Name keywords short-circuit the visual heuristics.
pub fn classify(node: &DocumentNode, traits: &VisualTraits) -> ComponentType {
    classify_by_name(&node.name).unwrap_or_else(|| classify_by_visuals(node, traits))
}

/// Name tier. `None` when no keyword group matches.
pub fn classify_by_name(name: &str) -> Option<ComponentType> {
    let lower = name.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if contains_any(BUTTON_KEYWORDS) {
        Some(ComponentType::Button)
    } else if contains_any(TEXT_KEYWORDS) {
        Some(ComponentType::Text)
    } else if contains_any(INPUT_KEYWORDS) {
        Some(ComponentType::Input)
    } else {
        None
    }
}

/// Visual tier. Never yields [`ComponentType::Input`].
pub fn classify_by_visuals(node: &DocumentNode, traits: &VisualTraits) -> ComponentType {
    if node.is_text() {
        return ComponentType::Text;
    }
    if is_button_like(node, traits) {
        ComponentType::Button
    } else {
        ComponentType::Text
    }
}

/// FRAME, COMPONENT or INSTANCE.
pub fn is_frame(node: &DocumentNode) -> bool {
    matches!(
        node.kind,
        NodeKind::Frame | NodeKind::Component | NodeKind::Instance
    )
}

pub fn has_rounded_corners(node: &DocumentNode) -> bool {
    node.corner_radius.unwrap_or(0.0) >= ROUNDED_CORNER_THRESHOLD
}

pub fn has_border(node: &DocumentNode) -> bool {
    !node.strokes.is_empty()
}

pub fn has_bold_text(traits: &VisualTraits) -> bool {
    traits.font_weight >= BOLD_WEIGHT_THRESHOLD
}

/// A frame-like container with a visible surface and either rounded corners
/// or emphasized text.
pub fn is_button_like(node: &DocumentNode, traits: &VisualTraits) -> bool {
    is_frame(node)
        && (traits.has_background || has_border(node))
        && (has_rounded_corners(node) || has_bold_text(traits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::node;
    use serde_json::json;

    const PLAIN: VisualTraits = VisualTraits {
        has_background: false,
        font_weight: 400.0,
    };
    const FILLED: VisualTraits = VisualTraits {
        has_background: true,
        font_weight: 400.0,
    };

    #[test]
    fn name_tier_precedence() {
        assert_eq!(classify_by_name("Submit Button"), Some(ComponentType::Button));
        assert_eq!(classify_by_name("BTN_primary"), Some(ComponentType::Button));
        assert_eq!(classify_by_name("Button label"), Some(ComponentType::Button));
        assert_eq!(classify_by_name("Heading 1"), Some(ComponentType::Text));
        assert_eq!(classify_by_name("Email Field"), Some(ComponentType::Input));
        assert_eq!(classify_by_name("search-input"), Some(ComponentType::Input));
        // "textbox" also contains "text", and the text group is checked first.
        assert_eq!(classify_by_name("Textbox"), Some(ComponentType::Text));
        assert_eq!(classify_by_name("Card"), None);
    }

    #[test]
    fn name_tier_short_circuits_visuals() {
        let n = node(json!({ "name": "Submit Button", "type": "TEXT" }));
        assert_eq!(classify(&n, &PLAIN), ComponentType::Button);

        let n = node(json!({ "name": "Password field", "type": "FRAME", "cornerRadius": 12 }));
        assert_eq!(classify(&n, &FILLED), ComponentType::Input);
    }

    #[test]
    fn bare_frame_is_text() {
        let n = node(json!({ "name": "Card", "type": "FRAME", "cornerRadius": 0 }));
        assert!(!is_button_like(&n, &PLAIN));
        assert_eq!(classify(&n, &PLAIN), ComponentType::Text);
    }

    #[test]
    fn filled_rounded_frame_is_button() {
        let n = node(json!({ "name": "Card", "type": "FRAME", "cornerRadius": 8 }));
        assert!(is_frame(&n));
        assert!(has_rounded_corners(&n));
        assert_eq!(classify(&n, &FILLED), ComponentType::Button);
    }

    #[test]
    fn border_and_bold_text_make_a_button() {
        let n = node(json!({
            "name": "Chip",
            "type": "INSTANCE",
            "strokes": [ { "type": "SOLID", "color": { "r": 0, "g": 0, "b": 0 } } ]
        }));
        let bold = VisualTraits {
            has_background: false,
            font_weight: 700.0,
        };
        assert!(has_border(&n));
        assert_eq!(classify(&n, &bold), ComponentType::Button);
        assert_eq!(classify(&n, &PLAIN), ComponentType::Text);
    }

    #[test]
    fn text_node_is_text_even_when_button_like() {
        let n = node(json!({ "name": "Caption", "type": "TEXT", "cornerRadius": 10 }));
        assert_eq!(classify_by_visuals(&n, &FILLED), ComponentType::Text);
    }

    #[test]
    fn non_frame_never_button_by_visuals() {
        let n = node(json!({ "name": "Shape", "type": "RECTANGLE", "cornerRadius": 16 }));
        assert_eq!(classify(&n, &FILLED), ComponentType::Text);
    }

    #[test]
    fn radius_threshold_is_inclusive() {
        let n = node(json!({ "name": "Box", "type": "COMPONENT", "cornerRadius": 4 }));
        assert_eq!(classify(&n, &FILLED), ComponentType::Button);
        let n = node(json!({ "name": "Box", "type": "COMPONENT", "cornerRadius": 3.9 }));
        assert_eq!(classify(&n, &FILLED), ComponentType::Text);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_value(ComponentType::Input).unwrap(), json!("input"));
    }
}
