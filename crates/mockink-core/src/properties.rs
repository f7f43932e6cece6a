//! Property panel field sets.

use serde::{Deserialize, Serialize};

use crate::element::{Background, Element};

/// An editable field shown by the property panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyField {
    Content,
    Options,
    Source,
    /// Controls, loop, muted and autoplay toggles of a video element.
    VideoFlags,
    FontFamily,
    TextAlign,
    Bold,
    Italic,
    BackgroundType,
    BackgroundColor,
    BackgroundSource,
    BackgroundVideoFlags,
    Color,
    BorderRadius,
    FontSize,
    X,
    Y,
    Width,
    Height,
}

impl PropertyField {
    pub fn label(self) -> &'static str {
        match self {
            PropertyField::Content => "Content",
            PropertyField::Options => "Options",
            PropertyField::Source => "Source URL",
            PropertyField::VideoFlags => "Video",
            PropertyField::FontFamily => "Font",
            PropertyField::TextAlign => "Align",
            PropertyField::Bold => "Bold",
            PropertyField::Italic => "Italic",
            PropertyField::BackgroundType => "Background",
            PropertyField::BackgroundColor => "Background color",
            PropertyField::BackgroundSource => "Background URL",
            PropertyField::BackgroundVideoFlags => "Background video",
            PropertyField::Color => "Color",
            PropertyField::BorderRadius => "Radius",
            PropertyField::FontSize => "Font size",
            PropertyField::X => "X",
            PropertyField::Y => "Y",
            PropertyField::Width => "W",
            PropertyField::Height => "H",
        }
    }
}

/// Fields that apply to `element`, in panel order.
pub fn property_fields(element: &Element) -> Vec<PropertyField> {
    let kind = element.kind();
    let mut fields = Vec::new();

    if kind.has_content() {
        fields.push(PropertyField::Content);
    }
    if element.options().is_some() {
        fields.push(PropertyField::Options);
    }
    if kind.is_media() {
        fields.push(PropertyField::Source);
    }
    if element.video_props().is_some() {
        fields.push(PropertyField::VideoFlags);
    }
    if kind.has_text_style() {
        fields.extend([
            PropertyField::FontFamily,
            PropertyField::TextAlign,
            PropertyField::Bold,
            PropertyField::Italic,
        ]);
    }

    fields.push(PropertyField::BackgroundType);
    match element.background {
        Background::Color { .. } => fields.push(PropertyField::BackgroundColor),
        Background::Image { .. } => fields.push(PropertyField::BackgroundSource),
        Background::Video { .. } => {
            fields.push(PropertyField::BackgroundSource);
            fields.push(PropertyField::BackgroundVideoFlags);
        }
    }

    fields.extend([PropertyField::Color, PropertyField::BorderRadius]);
    if kind.has_text_style() {
        fields.push(PropertyField::FontSize);
    }
    fields.extend([
        PropertyField::X,
        PropertyField::Y,
        PropertyField::Width,
        PropertyField::Height,
    ]);
    fields
}
