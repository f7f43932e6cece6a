//! Placeable element templates.
//!
//! The catalog is read-only input to the editor: placing a template copies
//! the relevant fields into a new [`Element`](crate::element::Element).

use serde::{Deserialize, Serialize};

use crate::element::ElementKind;

/// Fonts offered by the property panel.
pub const FONT_FAMILIES: [&str; 10] = [
    "Inter",
    "Arial",
    "Poppins",
    "Roboto",
    "Montserrat",
    "Open Sans",
    "Lato",
    "Courier New",
    "Georgia",
    "Times New Roman",
];

/// Style keys a template may preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateStyles {
    pub background: Option<String>,
    pub color: Option<String>,
    pub border_radius: Option<String>,
    pub font_size: Option<String>,
}

/// One entry of the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementTemplate {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub label: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub styles: TemplateStyles,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub src: Option<String>,
}

impl ElementTemplate {
    pub fn new(kind: ElementKind, label: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            kind,
            label: label.into(),
            width,
            height,
            content: None,
            styles: TemplateStyles::default(),
            options: None,
            src: None,
        }
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn with_src(mut self, src: &str) -> Self {
        self.src = Some(src.to_string());
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|o| o.to_string()).collect());
        self
    }

    pub fn with_background(mut self, background: &str) -> Self {
        self.styles.background = Some(background.to_string());
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.styles.color = Some(color.to_string());
        self
    }

    pub fn with_border_radius(mut self, radius: &str) -> Self {
        self.styles.border_radius = Some(radius.to_string());
        self
    }

    pub fn with_font_size(mut self, size: &str) -> Self {
        self.styles.font_size = Some(size.to_string());
        self
    }
}

/// The built-in template for a kind.
pub fn builtin_template(kind: ElementKind) -> ElementTemplate {
    match kind {
        ElementKind::Box => ElementTemplate::new(kind, "Box / Div", 200.0, 100.0)
            .with_content("Box")
            .with_background("#eee")
            .with_color("#222"),
        ElementKind::Button => ElementTemplate::new(kind, "Button", 100.0, 40.0)
            .with_content("Click Me")
            .with_background("#1f6feb")
            .with_color("#fff")
            .with_border_radius("4px"),
        ElementKind::Heading => ElementTemplate::new(kind, "Heading (H2)", 320.0, 50.0)
            .with_content("Heading")
            .with_font_size("24px")
            .with_color("#222"),
        ElementKind::Paragraph => ElementTemplate::new(kind, "Paragraph", 320.0, 80.0)
            .with_content("Lorem ipsum dolor sit.")
            .with_font_size("14px")
            .with_color("#333"),
        ElementKind::TextInput => ElementTemplate::new(kind, "Input Field", 240.0, 36.0)
            .with_content("")
            .with_background("#fff")
            .with_border_radius("4px"),
        ElementKind::TextArea => ElementTemplate::new(kind, "Textarea", 320.0, 90.0)
            .with_content("")
            .with_background("#fff")
            .with_border_radius("4px"),
        ElementKind::Select => ElementTemplate::new(kind, "Select Dropdown", 200.0, 36.0)
            .with_options(&["Option 1", "Option 2"])
            .with_background("#fff")
            .with_border_radius("4px"),
        ElementKind::Checkbox => {
            ElementTemplate::new(kind, "Checkbox", 20.0, 20.0).with_background("transparent")
        }
        ElementKind::Image => ElementTemplate::new(kind, "Image", 320.0, 180.0)
            .with_src("https://picsum.photos/320/180")
            .with_border_radius("6px"),
        ElementKind::Video => ElementTemplate::new(kind, "Video", 360.0, 240.0)
            .with_src("https://www.w3schools.com/html/mov_bbb.mp4")
            .with_border_radius("6px"),
    }
}

/// All built-in templates, in palette order.
pub fn builtin_catalog() -> Vec<ElementTemplate> {
    ElementKind::ALL.iter().map(|&kind| builtin_template(kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_covers_every_kind() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), ElementKind::ALL.len());
        for (template, kind) in catalog.iter().zip(ElementKind::ALL) {
            assert_eq!(template.kind, kind);
            assert!(template.width >= 20.0);
            assert!(template.height >= 20.0);
        }
    }

    #[test]
    fn test_template_from_json() {
        let json = r##"{
            "type": "button",
            "label": "Primary",
            "width": 120,
            "height": 40,
            "content": "Go",
            "styles": { "background": "#000", "borderRadius": "8px" }
        }"##;
        let template: ElementTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.kind, ElementKind::Button);
        assert_eq!(template.styles.border_radius.as_deref(), Some("8px"));
        assert!(template.styles.font_size.is_none());
        assert!(template.options.is_none());
    }
}
