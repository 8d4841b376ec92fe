//! Canvas object model seen by the resize strategies
//!
//! The host's canvas objects are reduced to a closed set of variants plus
//! the transform fields a strategy may touch.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position, size and scale of a canvas object
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectTransform {
    /// Left edge x coordinate
    pub left: f64,
    /// Top edge y coordinate
    pub top: f64,
    /// Unscaled width
    pub width: f64,
    /// Unscaled height
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub stroke_width: f64,
    /// Stroke keeps its width regardless of scale
    pub stroke_uniform: bool,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            stroke_width: 0.0,
            stroke_uniform: false,
        }
    }
}

impl ObjectTransform {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_stroke(mut self, stroke_width: f64, stroke_uniform: bool) -> Self {
        self.stroke_width = stroke_width;
        self.stroke_uniform = stroke_uniform;
        self
    }

    /// Width on the canvas, scale applied
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// Horizontal center on the canvas
    pub fn center_x(&self) -> f64 {
        self.left + self.scaled_width() / 2.0
    }
}

/// A canvas object
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CanvasObject {
    Text { transform: ObjectTransform },
    Image { transform: ObjectTransform },
    Group {
        transform: ObjectTransform,
        children: Vec<CanvasObject>,
    },
    /// Rectangles, paths, lines and anything else without text or pixels
    Shape { transform: ObjectTransform },
}

impl CanvasObject {
    pub fn transform(&self) -> &ObjectTransform {
        match self {
            CanvasObject::Text { transform }
            | CanvasObject::Image { transform }
            | CanvasObject::Group { transform, .. }
            | CanvasObject::Shape { transform } => transform,
        }
    }

    pub fn set_transform(&mut self, new: ObjectTransform) {
        match self {
            CanvasObject::Text { transform }
            | CanvasObject::Image { transform }
            | CanvasObject::Group { transform, .. }
            | CanvasObject::Shape { transform } => *transform = new,
        }
    }

    /// True for text objects and for groups with text anywhere below them
    pub fn contains_text(&self) -> bool {
        match self {
            CanvasObject::Text { .. } => true,
            CanvasObject::Group { children, .. } => children.iter().any(CanvasObject::contains_text),
            CanvasObject::Image { .. } | CanvasObject::Shape { .. } => false,
        }
    }

    /// Whether the object can be scaled without distorting glyphs
    pub fn supports_scale(&self) -> bool {
        !self.contains_text()
    }

    /// Every object can be moved horizontally
    pub fn supports_recenter(&self) -> bool {
        true
    }
}

/// Resize-relevant classification of a canvas object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ObjectCategory {
    Text,
    Image,
    GroupWithText,
    GroupWithoutText,
    Other,
}

impl ObjectCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectCategory::Text => "text",
            ObjectCategory::Image => "image",
            ObjectCategory::GroupWithText => "group-with-text",
            ObjectCategory::GroupWithoutText => "group-without-text",
            ObjectCategory::Other => "other",
        }
    }
}

impl fmt::Display for ObjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Unrecognized names classify as [`ObjectCategory::Other`]
impl FromStr for ObjectCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s {
            "text" => ObjectCategory::Text,
            "image" => ObjectCategory::Image,
            "group-with-text" => ObjectCategory::GroupWithText,
            "group-without-text" => ObjectCategory::GroupWithoutText,
            _ => ObjectCategory::Other,
        })
    }
}

/// Classify an object, scanning group children recursively for text
pub fn classify(object: &CanvasObject) -> ObjectCategory {
    match object {
        CanvasObject::Text { .. } => ObjectCategory::Text,
        CanvasObject::Image { .. } => ObjectCategory::Image,
        CanvasObject::Group { .. } if object.contains_text() => ObjectCategory::GroupWithText,
        CanvasObject::Group { .. } => ObjectCategory::GroupWithoutText,
        CanvasObject::Shape { .. } => ObjectCategory::Other,
    }
}
