//! React function component for button-style nodes.
//!
//! This path reads the raw node directly instead of going through
//! [`extract_style`](crate::style::extract_style). Its corner radius default
//! is 8, not the generic 0: the generated component is always rendered as a
//! button, and an unrounded button is the exception there.

use serde::Serialize;

use crate::{
    model::DocumentNode,
    style::{dimensions, resolve_background, resolve_text},
};

pub const COMPONENT_BORDER_RADIUS: f64 = 8.0;
pub const COMPONENT_LABEL: &str = "Button";
const FALLBACK_IDENTIFIER: &str = "GeneratedComponent";

/// Generated source plus the exported symbol name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedComponent {
    pub name: String,
    pub code: String,
}

/// `"primary-cta!!"` → `"PrimaryCta"`.
///
/// Non-alphanumerics become word breaks; each word is capitalized and the
/// rest of it lowercased. A leading digit gets a `Component` prefix so the
/// result is a valid identifier.
pub fn component_identifier(name: &str) -> String {
    let spaced: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let ident: String = spaced.split_whitespace().map(capitalize).collect();

    match ident.chars().next() {
        None => FALLBACK_IDENTIFIER.to_string(),
        Some(c) if c.is_numeric() => format!("Component{ident}"),
        Some(_) => ident,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Renders a TSX function component for `node`.
pub fn render_react_component(node: &DocumentNode) -> GeneratedComponent {
    let name = component_identifier(&node.name);
    let (width, height) = dimensions(node);
    let radius = node.corner_radius.unwrap_or(COMPONENT_BORDER_RADIUS);
    let background = resolve_background(node).color;
    let label = js_string(&resolve_text(node, COMPONENT_LABEL));

    let code = format!(
        r#"import React, {{ useState }} from 'react';

export interface {name}Props {{
  label?: string;
  onClick?: () => void;
}}

export const {name}: React.FC<{name}Props> = ({{ label = '{label}', onClick }}) => {{
  const [isHovered, setIsHovered] = useState(false);

  return (
    <button
      type="button"
      onClick={{onClick}}
      onMouseEnter={{() => setIsHovered(true)}}
      onMouseLeave={{() => setIsHovered(false)}}
      style={{{{
        width: '{width}px',
        height: '{height}px',
        backgroundColor: '{background}',
        borderRadius: '{radius}px',
        border: 'none',
        cursor: 'pointer',
        opacity: isHovered ? 0.9 : 1,
        transform: isHovered ? 'scale(1.02)' : 'scale(1)',
        transition: 'all 0.2s ease',
      }}}}
    >
      {{label}}
    </button>
  );
}};

export default {name};
"#
    );

    GeneratedComponent { name, code }
}

/// Escapes a value for a single-quoted JS string literal.
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}
