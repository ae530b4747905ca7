//! Style extraction: turns a located node into a flat, defaulted
//! [`StyleRecord`].
//!
//! Font metrics and text colour come from the node itself when it is a TEXT
//! node, otherwise from the first TEXT node below it. Background colour only
//! ever looks at the first fill.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    classify::{ComponentType, VisualTraits, classify},
    model::{Color, DocumentNode},
    search::{first_descendant_characters, first_text_descendant},
};

pub const DEFAULT_WIDTH: f64 = 200.0;
pub const DEFAULT_HEIGHT: f64 = 50.0;
pub const DEFAULT_BORDER_RADIUS: f64 = 0.0;
pub const DEFAULT_TEXT: &str = "Text";
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
pub const DEFAULT_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_FONT_WEIGHT: f64 = 400.0;
pub const DEFAULT_TEXT_ALIGN: &str = "left";
pub const TRANSPARENT: &str = "transparent";

/// Normalized visual attributes of a node, ready for code generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub text: String,
    pub width: f64,
    pub height: f64,
    pub background_color: String,
    pub border_radius: f64,
    pub color: String,
    pub font_size: f64,
    pub font_weight: f64,
    pub text_align: String,
}

/// Background resolved from the first fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub color: String,
    pub has_background: bool,
}

impl Background {
    fn transparent() -> Self {
        Self {
            color: TRANSPARENT.to_string(),
            has_background: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub font_size: f64,
    pub font_weight: f64,
    pub text_align: String,
}

/// `#rrggbb`, each channel `round(c * 255)` clamped to `0..=255`.
pub fn hexify(color: &Color) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

fn channel(c: f64) -> u8 {
    // NaN saturates to 0 on the cast.
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Bounding box size, or the 200x50 default.
pub fn dimensions(node: &DocumentNode) -> (f64, f64) {
    node.absolute_bounding_box
        .map(|b| (b.width, b.height))
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}

/// Inspects `fills[0]` only; later fills never contribute.
pub fn resolve_background(node: &DocumentNode) -> Background {
    let Some(paint) = node.fills.first() else {
        return Background::transparent();
    };
    if !paint.is_visible() || !paint.is_solid() {
        return Background::transparent();
    }
    let Some(color) = paint.color.as_ref() else {
        return Background::transparent();
    };

    let hex = hexify(color);
    let has_background = paint.effective_opacity() > 0.0 && hex != TRANSPARENT;
    Background {
        color: hex,
        has_background,
    }
}

/// Own first-fill colour for TEXT nodes, else the first TEXT descendant's.
pub fn resolve_text_color(node: &DocumentNode) -> String {
    if node.is_text() {
        if let Some(color) = node.first_fill_color() {
            return hexify(color);
        }
    }
    first_text_descendant(node)
        .and_then(DocumentNode::first_fill_color)
        .map(hexify)
        .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string())
}

/// Own characters, else first non-empty characters below, else `fallback`.
pub fn resolve_text(node: &DocumentNode, fallback: &str) -> String {
    node.own_characters()
        .or_else(|| first_descendant_characters(node))
        .unwrap_or(fallback)
        .to_string()
}

/// Node carrying the typography: the node itself if TEXT, else the first
/// TEXT descendant.
fn typography_source(node: &DocumentNode) -> Option<&DocumentNode> {
    if node.is_text() {
        Some(node)
    } else {
        first_text_descendant(node)
    }
}

pub fn resolve_typography(node: &DocumentNode) -> Typography {
    let source = typography_source(node);
    Typography {
        font_size: source
            .and_then(DocumentNode::font_size)
            .unwrap_or(DEFAULT_FONT_SIZE),
        font_weight: source
            .and_then(DocumentNode::font_weight)
            .unwrap_or(DEFAULT_FONT_WEIGHT),
        text_align: source
            .and_then(DocumentNode::text_align_horizontal)
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_TEXT_ALIGN.to_string()),
    }
}

/// Derives the full style record for `node`, including its classified type.
pub fn extract_style(node: &DocumentNode) -> StyleRecord {
    let (width, height) = dimensions(node);
    let background = resolve_background(node);
    let typography = resolve_typography(node);

    let traits = VisualTraits {
        has_background: background.has_background,
        font_weight: typography.font_weight,
    };
    let component_type = classify(node, &traits);

    trace!(
        node = %node.name,
        kind = %node.kind,
        %component_type,
        has_background = background.has_background,
        "style extracted"
    );

    StyleRecord {
        component_type,
        text: resolve_text(node, DEFAULT_TEXT),
        width,
        height,
        background_color: background.color,
        border_radius: node.corner_radius.unwrap_or(DEFAULT_BORDER_RADIUS),
        color: resolve_text_color(node),
        font_size: typography.font_size,
        font_weight: typography.font_weight,
        text_align: typography.text_align,
    }
}
