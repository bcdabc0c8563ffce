//! Flat vector drawing descriptor produced by the renderer.
//!
//! A [`VectorScene`] is an ordered list of primitives painted bottom to top. It
//! maps 1:1 onto SVG elements (see [`crate::helper::to_svg_string`]) but does not
//! depend on any markup format itself.

use serde::Serialize;

/// How a shape is filled or stroked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Paint {
    None,
    Color(String),
    /// Reference to the scene's [`LinearGradient`] by id.
    Gradient(String),
}

impl Paint {
    /// The paint as an SVG attribute value.
    pub fn to_attribute(&self) -> String {
        match self {
            Paint::None => "none".to_string(),
            Paint::Color(c) => c.clone(),
            Paint::Gradient(id) => format!("url(#{})", id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineCap {
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineJoin {
    Miter,
    Round,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
    pub opacity: f64,
}

/// Two-stop linear gradient; coordinates are kept as given (e.g. `"100%"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    pub id: String,
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
    pub stops: [GradientStop; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Corner radius, used for both axes.
    pub radius: f64,
    pub fill: Paint,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathShape {
    pub d: String,
    pub fill: Paint,
    pub stroke: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleShape {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: Paint,
}

/// Rounded square an image is clipped to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipRect {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub radius: f64,
}

/// Portion of the source image, in image pixels, that stays visible after
/// crop-to-cover scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Externally loaded image, scaled to cover its box and clipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub href: String,
    pub clip: ClipRect,
    /// Known only when the caller supplied the image's intrinsic size.
    pub source_crop: Option<CropRect>,
}

impl ImageShape {
    pub const PRESERVE_ASPECT_RATIO: &'static str = "xMidYMid slice";
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Primitive {
    Rect(RectShape),
    Path(PathShape),
    Circle(CircleShape),
    Image(ImageShape),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// A complete render: canvas geometry, gradient definition and primitives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorScene {
    pub width: f64,
    pub height: f64,
    pub view_box: ViewBox,
    pub gradient: Option<LinearGradient>,
    pub primitives: Vec<Primitive>,
}

impl VectorScene {
    pub fn circles(&self) -> impl Iterator<Item = &CircleShape> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Circle(c) => Some(c),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectShape> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Rect(r) => Some(r),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathShape> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Path(p) => Some(p),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageShape> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Image(i) => Some(i),
            _ => None,
        })
    }
}
