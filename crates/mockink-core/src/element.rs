//! Element definitions for the layout scene.
//!
//! Every element is an absolutely positioned box. What it carries beyond its
//! geometry depends on its kind: text-bearing kinds own a [`TextStyle`],
//! media kinds own a source, and every kind owns a [`Background`] layer.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::ElementTemplate;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// The closed set of placeable element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Box,
    Button,
    Heading,
    Paragraph,
    TextInput,
    TextArea,
    Select,
    Checkbox,
    Image,
    Video,
}

impl ElementKind {
    /// Every kind, in catalog order.
    pub const ALL: [ElementKind; 10] = [
        ElementKind::Box,
        ElementKind::Button,
        ElementKind::Heading,
        ElementKind::Paragraph,
        ElementKind::TextInput,
        ElementKind::TextArea,
        ElementKind::Select,
        ElementKind::Checkbox,
        ElementKind::Image,
        ElementKind::Video,
    ];

    /// Short name used in layer labels.
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Box => "box",
            ElementKind::Button => "button",
            ElementKind::Heading => "heading",
            ElementKind::Paragraph => "paragraph",
            ElementKind::TextInput => "text-input",
            ElementKind::TextArea => "textarea",
            ElementKind::Select => "select",
            ElementKind::Checkbox => "checkbox",
            ElementKind::Image => "image",
            ElementKind::Video => "video",
        }
    }

    /// Kinds whose `content` is meaningful.
    pub fn has_content(self) -> bool {
        matches!(
            self,
            ElementKind::Box
                | ElementKind::Button
                | ElementKind::Heading
                | ElementKind::Paragraph
                | ElementKind::TextInput
                | ElementKind::TextArea
        )
    }

    /// Kinds that carry a text style.
    pub fn has_text_style(self) -> bool {
        self.has_content() || self == ElementKind::Select
    }

    /// Kinds that carry a media source.
    pub fn is_media(self) -> bool {
        matches!(self, ElementKind::Image | ElementKind::Video)
    }
}

/// Font style for text-bearing elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn css(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

/// Font weight for text-bearing elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn css(self) -> &'static str {
        match self {
            FontWeight::Normal => "400",
            FontWeight::Bold => "700",
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub fn css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Default font family for new elements.
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Text properties of a text-bearing element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    pub font_style: FontStyle,
    pub font_weight: FontWeight,
    pub text_align: TextAlign,
    /// CSS font size; `None` falls back to the render default.
    pub font_size: Option<String>,
}

impl TextStyle {
    /// The fixed initial text style; only the font size comes from a template.
    pub fn initial(font_size: Option<String>) -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_style: FontStyle::Normal,
            font_weight: FontWeight::Normal,
            text_align: TextAlign::Center,
            font_size,
        }
    }
}

/// Playback flags for video content and video backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoProps {
    pub controls: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub muted: bool,
    pub autoplay: bool,
    pub volume: f64,
}

impl VideoProps {
    /// Defaults for a video element's own content.
    pub fn content() -> Self {
        Self {
            controls: true,
            looping: false,
            muted: false,
            autoplay: false,
            volume: 1.0,
        }
    }

    /// Defaults for a video used as a background layer.
    pub fn background() -> Self {
        Self {
            controls: false,
            looping: true,
            muted: true,
            autoplay: true,
            volume: 1.0,
        }
    }
}

impl Default for VideoProps {
    fn default() -> Self {
        Self::content()
    }
}

/// Text content plus its style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBody {
    pub content: String,
    pub style: TextStyle,
}

/// Options of a select dropdown plus its text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectBody {
    pub options: Vec<String>,
    pub style: TextStyle,
}

/// An image element's source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBody {
    pub src: String,
}

/// A video element's source and playback flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoBody {
    pub src: String,
    pub props: VideoProps,
}

/// Kind-specific payload of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementBody {
    Box(TextBody),
    Button(TextBody),
    Heading(TextBody),
    Paragraph(TextBody),
    TextInput(TextBody),
    TextArea(TextBody),
    Select(SelectBody),
    Checkbox,
    Image(ImageBody),
    Video(VideoBody),
}

impl ElementBody {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementBody::Box(_) => ElementKind::Box,
            ElementBody::Button(_) => ElementKind::Button,
            ElementBody::Heading(_) => ElementKind::Heading,
            ElementBody::Paragraph(_) => ElementKind::Paragraph,
            ElementBody::TextInput(_) => ElementKind::TextInput,
            ElementBody::TextArea(_) => ElementKind::TextArea,
            ElementBody::Select(_) => ElementKind::Select,
            ElementBody::Checkbox => ElementKind::Checkbox,
            ElementBody::Image(_) => ElementKind::Image,
            ElementBody::Video(_) => ElementKind::Video,
        }
    }

    fn text_body(&self) -> Option<&TextBody> {
        match self {
            ElementBody::Box(t)
            | ElementBody::Button(t)
            | ElementBody::Heading(t)
            | ElementBody::Paragraph(t)
            | ElementBody::TextInput(t)
            | ElementBody::TextArea(t) => Some(t),
            _ => None,
        }
    }

    fn text_body_mut(&mut self) -> Option<&mut TextBody> {
        match self {
            ElementBody::Box(t)
            | ElementBody::Button(t)
            | ElementBody::Heading(t)
            | ElementBody::Paragraph(t)
            | ElementBody::TextInput(t)
            | ElementBody::TextArea(t) => Some(t),
            _ => None,
        }
    }
}

/// Which background variant an element uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    #[default]
    Color,
    Image,
    Video,
}

/// Background layer, independent of the element's content.
///
/// Only the fields of the active variant exist, so switching variants
/// can never leave a stale source or color behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Background {
    /// Solid color; `None` falls back to the render default.
    Color { color: Option<String> },
    Image { src: String },
    Video { src: String, props: VideoProps },
}

impl Default for Background {
    fn default() -> Self {
        Background::Color { color: None }
    }
}

impl Background {
    pub fn background_type(&self) -> BackgroundType {
        match self {
            Background::Color { .. } => BackgroundType::Color,
            Background::Image { .. } => BackgroundType::Image,
            Background::Video { .. } => BackgroundType::Video,
        }
    }

    /// The neutral layer for a freshly selected background type.
    pub fn neutral(kind: BackgroundType) -> Self {
        match kind {
            BackgroundType::Color => Background::Color {
                color: Some("#ffffff".to_string()),
            },
            BackgroundType::Image => Background::Image { src: String::new() },
            BackgroundType::Video => Background::Video {
                src: String::new(),
                props: VideoProps::background(),
            },
        }
    }
}

/// A partial update to an element, as written by the property panel.
///
/// Fields that are not meaningful for the target's kind are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub content: Option<String>,
    pub src: Option<String>,
    pub options: Option<Vec<String>>,
    pub video_props: Option<VideoProps>,
    pub color: Option<String>,
    pub border_radius: Option<String>,
    pub font_family: Option<String>,
    pub font_style: Option<FontStyle>,
    pub font_weight: Option<FontWeight>,
    pub text_align: Option<TextAlign>,
    pub font_size: Option<String>,
    pub background_type: Option<BackgroundType>,
    pub background_color: Option<String>,
    pub background_src: Option<String>,
    pub background_video_props: Option<VideoProps>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn with_background_type(mut self, kind: BackgroundType) -> Self {
        self.background_type = Some(kind);
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_background_src(mut self, src: impl Into<String>) -> Self {
        self.background_src = Some(src.into());
        self
    }
}

/// One placed object on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub(crate) id: ElementId,
    /// Top-left corner in canvas-space.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub body: ElementBody,
    /// Foreground color; `None` falls back to the render default.
    pub color: Option<String>,
    /// CSS border radius; `None` falls back to the render default.
    pub border_radius: Option<String>,
    pub background: Background,
}

impl Element {
    /// Instantiate a template at `position`.
    ///
    /// Width and height are clamped to `min_size`. The text style always
    /// starts from [`TextStyle::initial`] whatever the template says.
    pub fn from_template(template: &ElementTemplate, position: Point, min_size: f64) -> Self {
        let styles = &template.styles;
        let text = || TextBody {
            content: template.content.clone().unwrap_or_default(),
            style: TextStyle::initial(styles.font_size.clone()),
        };
        let src = || template.src.clone().unwrap_or_default();

        let body = match template.kind {
            ElementKind::Box => ElementBody::Box(text()),
            ElementKind::Button => ElementBody::Button(text()),
            ElementKind::Heading => ElementBody::Heading(text()),
            ElementKind::Paragraph => ElementBody::Paragraph(text()),
            ElementKind::TextInput => ElementBody::TextInput(text()),
            ElementKind::TextArea => ElementBody::TextArea(text()),
            ElementKind::Select => ElementBody::Select(SelectBody {
                options: template.options.clone().unwrap_or_default(),
                style: TextStyle::initial(styles.font_size.clone()),
            }),
            ElementKind::Checkbox => ElementBody::Checkbox,
            ElementKind::Image => ElementBody::Image(ImageBody { src: src() }),
            ElementKind::Video => ElementBody::Video(VideoBody {
                src: src(),
                props: VideoProps::content(),
            }),
        };

        Self {
            id: Uuid::new_v4(),
            position,
            width: template.width.max(min_size),
            height: template.height.max(min_size),
            body,
            color: styles.color.clone(),
            border_radius: styles.border_radius.clone(),
            background: Background::Color {
                color: styles.background.clone(),
            },
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.body.kind()
    }

    /// Bounding box in canvas-space.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Check if a canvas-space point lies on the element body.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Text content, for kinds where it is meaningful.
    pub fn content(&self) -> Option<&str> {
        self.body.text_body().map(|t| t.content.as_str())
    }

    pub fn text_style(&self) -> Option<&TextStyle> {
        match &self.body {
            ElementBody::Select(s) => Some(&s.style),
            body => body.text_body().map(|t| &t.style),
        }
    }

    pub fn text_style_mut(&mut self) -> Option<&mut TextStyle> {
        match &mut self.body {
            ElementBody::Select(s) => Some(&mut s.style),
            body => body.text_body_mut().map(|t| &mut t.style),
        }
    }

    /// Media source of image and video elements.
    pub fn src(&self) -> Option<&str> {
        match &self.body {
            ElementBody::Image(i) => Some(&i.src),
            ElementBody::Video(v) => Some(&v.src),
            _ => None,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match &self.body {
            ElementBody::Select(s) => Some(&s.options),
            _ => None,
        }
    }

    pub fn video_props(&self) -> Option<&VideoProps> {
        match &self.body {
            ElementBody::Video(v) => Some(&v.props),
            _ => None,
        }
    }

    /// Apply a property-panel patch. Sizes are clamped to `min_size`.
    pub fn apply_patch(&mut self, patch: &ElementPatch, min_size: f64) {
        if let Some(x) = patch.x {
            self.position.x = x;
        }
        if let Some(y) = patch.y {
            self.position.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width.max(min_size);
        }
        if let Some(height) = patch.height {
            self.height = height.max(min_size);
        }
        if let Some(color) = &patch.color {
            self.color = Some(color.clone());
        }
        if let Some(radius) = &patch.border_radius {
            self.border_radius = Some(radius.clone());
        }

        if let Some(content) = &patch.content {
            if let Some(text) = self.body.text_body_mut() {
                text.content = content.clone();
            }
        }
        match &mut self.body {
            ElementBody::Image(image) => {
                if let Some(src) = &patch.src {
                    image.src = src.clone();
                }
            }
            ElementBody::Video(video) => {
                if let Some(src) = &patch.src {
                    video.src = src.clone();
                }
                if let Some(props) = patch.video_props {
                    video.props = props;
                }
            }
            ElementBody::Select(select) => {
                if let Some(options) = &patch.options {
                    select.options = options.clone();
                }
            }
            _ => {}
        }

        if let Some(style) = self.text_style_mut() {
            if let Some(family) = &patch.font_family {
                style.font_family = family.clone();
            }
            if let Some(font_style) = patch.font_style {
                style.font_style = font_style;
            }
            if let Some(weight) = patch.font_weight {
                style.font_weight = weight;
            }
            if let Some(align) = patch.text_align {
                style.text_align = align;
            }
            if let Some(size) = &patch.font_size {
                style.font_size = Some(size.clone());
            }
        }

        self.apply_background_patch(patch);
    }

    fn apply_background_patch(&mut self, patch: &ElementPatch) {
        if let Some(kind) = patch.background_type {
            if kind != self.background.background_type() {
                self.background = Background::neutral(kind);
            }
        }
        match &mut self.background {
            Background::Color { color } => {
                if let Some(c) = &patch.background_color {
                    *color = Some(c.clone());
                }
            }
            Background::Image { src } => {
                if let Some(s) = &patch.background_src {
                    *src = s.clone();
                }
            }
            Background::Video { src, props } => {
                if let Some(s) = &patch.background_src {
                    *src = s.clone();
                }
                if let Some(p) = patch.background_video_props {
                    *props = p;
                }
            }
        }
    }
}
