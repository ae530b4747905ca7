//! Inline-styled HTML for a [`StyleRecord`].

use crate::{classify::ComponentType, style::StyleRecord};

/// Renders a single element matching the record's classified type.
///
/// Lengths are emitted as `<value>px`; `font-weight` stays unitless.
pub fn render_markup(style: &StyleRecord) -> String {
    let text = escape_html(&style.text);
    let css = inline_css(style);

    match style.component_type {
        ComponentType::Button => {
            format!("<button type=\"button\" style=\"{css} border: none; cursor: pointer;\">{text}</button>")
        }
        ComponentType::Input => format!(
            "<input type=\"text\" placeholder=\"{text}\" style=\"{css} border: 1px solid #cccccc; padding: 0 12px; box-sizing: border-box;\" />"
        ),
        ComponentType::Text => format!("<div style=\"{css}\">{text}</div>"),
    }
}

/// Wraps [`render_markup`] in a minimal standalone page.
pub fn render_markup_document(style: &StyleRecord, title: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\" />\n");
    out.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
    out.push_str("</head>\n<body>\n  ");
    out.push_str(&render_markup(style));
    out.push_str("\n</body>\n</html>\n");
    out
}

fn inline_css(style: &StyleRecord) -> String {
    format!(
        "width: {}px; height: {}px; background-color: {}; border-radius: {}px; color: {}; font-size: {}px; font-weight: {}; text-align: {};",
        style.width,
        style.height,
        style.background_color,
        style.border_radius,
        style.color,
        style.font_size,
        style.font_weight,
        style.text_align,
    )
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(component_type: ComponentType) -> StyleRecord {
        StyleRecord {
            component_type,
            text: "Sign in".into(),
            width: 120.0,
            height: 40.0,
            background_color: "#336699".into(),
            border_radius: 8.0,
            color: "#ffffff".into(),
            font_size: 14.0,
            font_weight: 600.0,
            text_align: "center".into(),
        }
    }

    #[test]
    fn button_markup() {
        assert_eq!(
            render_markup(&record(ComponentType::Button)),
            "<button type=\"button\" style=\"width: 120px; height: 40px; background-color: #336699; \
             border-radius: 8px; color: #ffffff; font-size: 14px; font-weight: 600; text-align: center; \
             border: none; cursor: pointer;\">Sign in</button>"
        );
    }

    #[test]
    fn input_uses_text_as_placeholder() {
        let html = render_markup(&record(ComponentType::Input));
        assert!(html.starts_with("<input type=\"text\" placeholder=\"Sign in\""));
        assert!(html.ends_with("/>"));
    }

    #[test]
    fn text_is_plain_div() {
        let html = render_markup(&record(ComponentType::Text));
        assert!(html.starts_with("<div style=\"width: 120px;"));
        assert!(html.ends_with(">Sign in</div>"));
    }

    #[test]
    fn fractional_lengths_keep_precision() {
        let mut style = record(ComponentType::Text);
        style.width = 99.5;
        assert!(render_markup(&style).contains("width: 99.5px;"));
    }

    #[test]
    fn text_is_escaped() {
        let mut style = record(ComponentType::Text);
        style.text = "<b>\"Tom & Jerry\"</b>".into();
        assert!(render_markup(&style).contains("&lt;b&gt;&quot;Tom &amp; Jerry&quot;&lt;/b&gt;"));
    }

    #[test]
    fn document_wraps_element() {
        let page = render_markup_document(&record(ComponentType::Button), "Login <page>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Login &lt;page&gt;</title>"));
        assert!(page.contains("<button type=\"button\""));
    }
}
