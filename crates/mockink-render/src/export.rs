//! Static HTML export.
//!
//! Serializes a scene into one self-contained document that reproduces the
//! layout. The output depends only on the element sequence, so the same
//! scene always exports to byte-identical markup.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use mockink_core::element::{Background, Element, ElementBody, VideoProps};
use mockink_core::scene::Scene;

use crate::style::{
    DEFAULT_BORDER_RADIUS, ResolvedStyle, escape_html, geometry_declarations, inline_style,
};

/// Web fonts linked from exported documents.
pub const DEFAULT_FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;700&family=Poppins:wght@400;700&family=Roboto:wght@400;700&family=Montserrat:wght@400;700&family=Open+Sans:wght@400;700&family=Lato:wght@400;700&display=swap";

const INDENT: &str = "  ";

/// Places a node over the whole of its positioned container.
const FILL: &str = "position:absolute;left:0;top:0;width:100%;height:100%;";

/// Configuration for HTML export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Document title.
    pub title: String,
    /// Space kept below the lowest element.
    pub margin: f64,
    /// Artboard height floor.
    pub min_height: f64,
    /// Stylesheet URL for web fonts; empty to omit the link.
    pub font_stylesheet: String,
    /// Default file name for exports.
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: "Exported UI".to_string(),
            margin: 100.0,
            min_height: 600.0,
            font_stylesheet: DEFAULT_FONT_STYLESHEET.to_string(),
            file_name: "exported_ui.html".to_string(),
        }
    }
}

/// Exports a [`Scene`] to a standalone HTML document.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    config: ExportConfig,
}

impl HtmlExporter {
    /// Create a new exporter with the given configuration.
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Artboard height: lowest bottom edge plus the margin, floored.
    pub fn artboard_height(&self, scene: &Scene) -> f64 {
        (scene.max_bottom() + self.config.margin).max(self.config.min_height)
    }

    /// Render the whole document.
    pub fn export(&self, scene: &Scene) -> String {
        let mut html = String::new();
        self.write_head(&mut html);

        let _ = writeln!(html, "<body>");
        let _ = writeln!(
            html,
            "{INDENT}<div class=\"artboard\" style=\"height:{}px;\">",
            self.artboard_height(scene)
        );
        for element in scene.elements() {
            write_element(&mut html, element);
        }
        let _ = writeln!(html, "{INDENT}</div>");
        let _ = writeln!(html, "</body>");
        let _ = write!(html, "</html>");

        log::debug!("Exported {} elements ({} bytes)", scene.len(), html.len());
        html
    }

    fn write_head(&self, html: &mut String) {
        let _ = writeln!(html, "<!DOCTYPE html>");
        let _ = writeln!(html, "<html lang=\"en\">");
        let _ = writeln!(html, "<head>");
        let _ = writeln!(html, "{INDENT}<meta charset=\"UTF-8\"/>");
        let _ = writeln!(
            html,
            "{INDENT}<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>"
        );
        if !self.config.font_stylesheet.is_empty() {
            let _ = writeln!(
                html,
                "{INDENT}<link href=\"{}\" rel=\"stylesheet\">",
                escape_html(&self.config.font_stylesheet)
            );
        }
        let _ = writeln!(html, "{INDENT}<title>{}</title>", escape_html(&self.config.title));
        let _ = writeln!(html, "{INDENT}<style>");
        let _ = writeln!(
            html,
            "{INDENT}{INDENT}html,body{{margin:0;padding:0;background:#eceff1;}}"
        );
        let _ = writeln!(
            html,
            "{INDENT}{INDENT}.artboard{{position:relative;min-width:100vw;background:#fff;}}"
        );
        let _ = writeln!(html, "{INDENT}{INDENT}img,video{{max-width:100%;}}");
        let _ = writeln!(html, "{INDENT}</style>");
        let _ = writeln!(html, "</head>");
    }
}

/// Boolean attributes for the set playback flags, each with a leading space.
fn video_attributes(props: &VideoProps) -> String {
    [
        (props.controls, " controls"),
        (props.looping, " loop"),
        (props.muted, " muted"),
        (props.autoplay, " autoplay"),
    ]
    .iter()
    .filter(|(set, _)| *set)
    .map(|(_, attr)| *attr)
    .collect()
}

fn write_element(html: &mut String, element: &Element) {
    let pad = INDENT.repeat(2);

    let background_video = match &element.background {
        Background::Video { src, props } if !src.is_empty() => Some((src, props)),
        _ => None,
    };
    let Some((src, props)) = background_video else {
        let style = escape_html(&inline_style(element));
        write_content(html, element, &pad, &style);
        return;
    };

    // The container carries the geometry; video and content fill it.
    let radius = element.border_radius.as_deref().unwrap_or(DEFAULT_BORDER_RADIUS);
    let container = format!(
        "{}border-radius:{radius};overflow:hidden;",
        geometry_declarations(element)
    );
    let _ = writeln!(html, "{pad}<div style=\"{}\">", escape_html(&container));

    let inner = format!("{pad}{INDENT}");
    let _ = writeln!(
        html,
        "{inner}<video src=\"{}\" style=\"{FILL}object-fit:cover;\"{}></video>",
        escape_html(src),
        video_attributes(props)
    );
    let style = escape_html(&format!("{FILL}{}", ResolvedStyle::resolve(element).declarations()));
    write_content(html, element, &inner, &style);
    let _ = writeln!(html, "{pad}</div>");
}

/// The content node of an element, with its inline style already escaped.
fn write_content(html: &mut String, element: &Element, pad: &str, style: &str) {
    match &element.body {
        ElementBody::Box(t) => {
            let _ = writeln!(html, "{pad}<div style=\"{style}\">{}</div>", escape_html(&t.content));
        }
        ElementBody::Button(t) => {
            let _ = writeln!(
                html,
                "{pad}<button style=\"{style}\">{}</button>",
                escape_html(&t.content)
            );
        }
        ElementBody::Heading(t) => {
            let _ = writeln!(html, "{pad}<h2 style=\"{style}\">{}</h2>", escape_html(&t.content));
        }
        ElementBody::Paragraph(t) => {
            let _ = writeln!(html, "{pad}<p style=\"{style}\">{}</p>", escape_html(&t.content));
        }
        ElementBody::TextInput(t) => {
            let _ = writeln!(
                html,
                "{pad}<input type=\"text\" style=\"{style}\" value=\"{}\"/>",
                escape_html(&t.content)
            );
        }
        ElementBody::TextArea(t) => {
            let _ = writeln!(
                html,
                "{pad}<textarea style=\"{style}\">{}</textarea>",
                escape_html(&t.content)
            );
        }
        ElementBody::Select(s) => {
            let _ = writeln!(html, "{pad}<select style=\"{style}\">");
            for option in &s.options {
                let _ = writeln!(html, "{pad}{INDENT}<option>{}</option>", escape_html(option));
            }
            let _ = writeln!(html, "{pad}</select>");
        }
        ElementBody::Checkbox => {
            let _ = writeln!(html, "{pad}<input type=\"checkbox\" style=\"{style}\"/>");
        }
        ElementBody::Image(i) => {
            let _ = writeln!(
                html,
                "{pad}<img src=\"{}\" alt=\"\" style=\"{style}object-fit:cover;\"/>",
                escape_html(&i.src)
            );
        }
        ElementBody::Video(v) => {
            let _ = writeln!(
                html,
                "{pad}<video src=\"{}\" style=\"{style}object-fit:cover;\"{}></video>",
                escape_html(&v.src),
                video_attributes(&v.props)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::live::project_live;
    use kurbo::Point;
    use mockink_core::catalog::builtin_template;
    use mockink_core::element::{BackgroundType, ElementKind, ElementPatch};

    fn scene_with(kinds: &[(ElementKind, f64, f64)]) -> Scene {
        let mut scene = Scene::new();
        for &(kind, x, y) in kinds {
            scene.create(&builtin_template(kind), Point::new(x, y), 20.0);
        }
        scene
    }

    #[test]
    fn test_empty_scene_document() {
        let html = HtmlExporter::with_defaults().export(&Scene::new());
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Exported UI</title>"));
        assert!(html.contains("<div class=\"artboard\" style=\"height:600px;\">"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_artboard_height_tracks_lowest_element() {
        let scene = scene_with(&[(ElementKind::Video, 0.0, 700.0), (ElementKind::Box, 0.0, 0.0)]);
        let exporter = HtmlExporter::with_defaults();
        assert!((exporter.artboard_height(&scene) - 1040.0).abs() < f64::EPSILON);
        assert!(exporter.export(&scene).contains("style=\"height:1040px;\""));
    }

    /// Opening tags directly inside the artboard.
    fn artboard_nodes(html: &str) -> Vec<&str> {
        html.lines()
            .filter(|line| line.starts_with("    <") && !line.starts_with("    </"))
            .collect()
    }

    #[test]
    fn test_one_node_per_element_in_z_order() {
        let mut scene = scene_with(&[
            (ElementKind::Heading, 0.0, 0.0),
            (ElementKind::Button, 0.0, 60.0),
            (ElementKind::Checkbox, 0.0, 120.0),
            (ElementKind::Select, 0.0, 180.0),
        ]);
        let id = scene.elements()[1].id();
        let patch = ElementPatch::new()
            .with_background_type(BackgroundType::Video)
            .with_background_src("bg.mp4");
        scene.update(id, &patch, 20.0).unwrap();

        let html = HtmlExporter::with_defaults().export(&scene);
        let heading = html.find("<h2").unwrap();
        let button = html.find("<button").unwrap();
        let checkbox = html.find("<input type=\"checkbox\"").unwrap();
        assert!(heading < button && button < checkbox);
        assert_eq!(artboard_nodes(&html).len(), 4);
    }

    #[test]
    fn test_element_markup() {
        let scene = scene_with(&[
            (ElementKind::TextInput, 0.0, 0.0),
            (ElementKind::Select, 0.0, 50.0),
            (ElementKind::Image, 0.0, 100.0),
            (ElementKind::Video, 0.0, 300.0),
        ]);
        let html = HtmlExporter::with_defaults().export(&scene);
        assert!(html.contains("<input type=\"text\" style=\""));
        assert!(html.contains("value=\"\"/>"));
        assert!(html.contains(
            "      <option>Option 1</option>\n      <option>Option 2</option>\n"
        ));
        assert!(html.contains("<img src=\"https://picsum.photos/320/180\" alt=\"\""));
        assert!(html.contains("object-fit:cover;\" controls></video>"));
    }

    #[test]
    fn test_content_is_escaped() {
        let mut scene = scene_with(&[(ElementKind::Paragraph, 0.0, 0.0)]);
        let id = scene.elements()[0].id();
        scene
            .update(id, &ElementPatch::new().with_content("<script>alert(\"x\")</script>"), 20.0)
            .unwrap();
        let html = HtmlExporter::with_defaults().export(&scene);
        assert!(html.contains("<p style=\""));
        assert!(html.contains(">&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;</p>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_background_video_shares_container_with_content() {
        let mut scene = scene_with(&[(ElementKind::Button, 20.0, 20.0)]);
        let id = scene.elements()[0].id();
        let patch = ElementPatch::new()
            .with_background_type(BackgroundType::Video)
            .with_background_src("bg.mp4");
        scene.update(id, &patch, 20.0).unwrap();

        let html = HtmlExporter::with_defaults().export(&scene);
        let nodes = artboard_nodes(&html);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].contains("position:absolute;left:20px;top:20px;width:100px;height:40px;"));
        assert!(nodes[0].contains("overflow:hidden;"));

        let container = html.find("<div style=\"position:absolute;left:20px").unwrap();
        let video = html.find("      <video src=\"bg.mp4\"").unwrap();
        let button = html.find("      <button style=\"position:absolute;left:0;top:0;").unwrap();
        assert!(container < video && video < button);
        assert!(html.contains(" loop muted autoplay></video>"));
        assert!(html.contains(">Click Me</button>\n    </div>\n"));
    }

    #[test]
    fn test_export_is_deterministic() {
        let mut scene = scene_with(&[
            (ElementKind::Box, 0.0, 0.0),
            (ElementKind::Paragraph, 40.0, 120.5),
            (ElementKind::Video, 100.0, 300.0),
        ]);
        let selected = scene.elements()[1].id();
        scene.selection.select(selected);
        let exporter = HtmlExporter::with_defaults();

        let first = exporter.export(&scene);
        let second = exporter.export(&scene);
        assert_eq!(first, second);

        let _live = project_live(&scene, 20.0);
        assert_eq!(exporter.export(&scene), first);
    }

    #[test]
    fn test_export_ignores_selection_and_zoom() {
        let mut scene = scene_with(&[(ElementKind::Box, 0.0, 0.0)]);
        let exporter = HtmlExporter::with_defaults();
        let before = exporter.export(&scene);
        let id = scene.elements()[0].id();
        scene.selection.select(id);
        scene.set_zoom(3.0, 0.1, 10.0);
        assert_eq!(exporter.export(&scene), before);
    }

    #[test]
    fn test_config_from_json() {
        let config: ExportConfig =
            serde_json::from_str(r#"{ "title": "Landing", "margin": 40 }"#).unwrap();
        assert_eq!(config.title, "Landing");
        assert!((config.min_height - 600.0).abs() < f64::EPSILON);
        assert_eq!(config.file_name, "exported_ui.html");

        let exporter = HtmlExporter::new(ExportConfig {
            font_stylesheet: String::new(),
            ..config
        });
        let html = exporter.export(&Scene::new());
        assert!(!html.contains("<link"));
        assert!(html.contains("<title>Landing</title>"));
    }
}
