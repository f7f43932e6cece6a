//! Style resolution shared by the live view and the exporter.
//!
//! Elements store only the style values the user set. Type defaults are
//! substituted here, at render time.

use std::fmt::Write;

use mockink_core::element::{Background, Element};

pub const DEFAULT_BACKGROUND: &str = "transparent";
pub const DEFAULT_COLOR: &str = "#000";
pub const DEFAULT_BORDER_RADIUS: &str = "6px";
pub const DEFAULT_FONT_SIZE: &str = "14px";

/// Fully resolved text properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFont {
    pub family: String,
    pub style: &'static str,
    pub weight: &'static str,
    pub align: &'static str,
    pub size: String,
}

/// Fully resolved box styling of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    /// CSS `background` value: a color or a cover-sized image.
    pub background: String,
    pub color: String,
    pub border_radius: String,
    /// Present for text-bearing kinds and select.
    pub font: Option<ResolvedFont>,
}

impl ResolvedStyle {
    pub fn resolve(element: &Element) -> Self {
        let background = match &element.background {
            Background::Color { color: Some(color) } => color.clone(),
            Background::Image { src } if !src.is_empty() => {
                format!("url(\"{src}\") center / cover no-repeat")
            }
            _ => DEFAULT_BACKGROUND.to_string(),
        };

        let font = element.text_style().map(|style| ResolvedFont {
            family: style.font_family.clone(),
            style: style.font_style.css(),
            weight: style.font_weight.css(),
            align: style.text_align.css(),
            size: style
                .font_size
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_SIZE.to_string()),
        });

        Self {
            background,
            color: element.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            border_radius: element
                .border_radius
                .clone()
                .unwrap_or_else(|| DEFAULT_BORDER_RADIUS.to_string()),
            font,
        }
    }

    /// Paint and text declarations, without geometry.
    pub fn declarations(&self) -> String {
        let mut css = String::new();
        let _ = write!(
            css,
            "background:{};color:{};border-radius:{};",
            self.background, self.color, self.border_radius
        );
        if let Some(font) = &self.font {
            let _ = write!(
                css,
                "font-family:{};font-style:{};font-weight:{};text-align:{};font-size:{};",
                font.family, font.style, font.weight, font.align, font.size
            );
        }
        css.push_str(
            "display:flex;align-items:center;justify-content:center;box-sizing:border-box;",
        );
        css
    }
}

/// Absolute positioning declarations for an element's box.
pub fn geometry_declarations(element: &Element) -> String {
    format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;",
        element.position.x, element.position.y, element.width, element.height
    )
}

/// Complete inline style of an element.
pub fn inline_style(element: &Element) -> String {
    let mut css = geometry_declarations(element);
    css.push_str(&ResolvedStyle::resolve(element).declarations());
    css
}

/// Escape special HTML characters in text and attribute values.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
