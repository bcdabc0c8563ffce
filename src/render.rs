//! Scene composition: background, body, structural markers, logo.

use crate::config::{Mode, RenderConfig};
use crate::error::RenderResult;
use crate::logo::LogoLayout;
use crate::markers;
use crate::matrix::ModuleMatrix;
use crate::scene::{
    GradientStop, LineCap, LineJoin, LinearGradient, Paint, PathShape, Primitive, RectShape, Stroke,
    VectorScene, ViewBox,
};
use crate::transform::transform;

pub const GRADIENT_ID: &str = "grad";

/// Composes the full scene for `matrix` with the given style.
///
/// Layers, bottom to top: quiet-zone background, body, structural markers,
/// logo. The view box spans `-quiet_zone .. size + quiet_zone` on both axes.
///
/// # Errors
///
/// [`crate::ConfigError`] for invalid geometry, including anchored markers on a
/// matrix that is not a QR symbol.
pub fn render(matrix: &ModuleMatrix, config: &RenderConfig) -> RenderResult<VectorScene> {
    config.validate()?;
    let marker_layout = markers::layout(matrix.dimension(), config.markers)?;

    let size = config.size;
    let qz = config.quiet_zone;
    let extent = size + qz * 2.0;
    // Never -0.0, which would print as "-0".
    let origin = 0.0 - qz;

    let (body_paint, gradient) = body_paint(config);
    let body = transform(matrix, size, config.mode, &body_paint)?;
    let cell_size = body.cell_size;

    let mut primitives = Vec::with_capacity(body.shapes.len() + 12);
    primitives.push(Primitive::Rect(RectShape {
        x: origin,
        y: origin,
        width: extent,
        height: extent,
        radius: 0.0,
        fill: Paint::Color(config.background_color.clone()),
        stroke: None,
    }));

    match config.mode {
        Mode::Square => primitives.push(Primitive::Path(PathShape {
            d: body.path,
            fill: body_paint.clone(),
            stroke: Some(Stroke { paint: body_paint, width: cell_size, cap: LineCap::Butt, join: LineJoin::Miter }),
        })),
        Mode::Dot => primitives.extend(body.shapes.into_iter().map(Primitive::Circle)),
    }

    primitives.extend(markers::to_primitives(&marker_layout, cell_size, &config.marker_colors));

    if let Some(logo) = &config.logo {
        let layout = LogoLayout::compute(size, logo);
        primitives.extend(layout.to_primitives(logo));
    }

    tracing::debug!(
        dimension = matrix.dimension(),
        size,
        quiet_zone = qz,
        mode = ?config.mode,
        primitives = primitives.len(),
        "rendered scene"
    );

    Ok(VectorScene {
        width: size,
        height: size,
        view_box: ViewBox { min_x: origin, min_y: origin, width: extent, height: extent },
        gradient,
        primitives,
    })
}

fn body_paint(config: &RenderConfig) -> (Paint, Option<LinearGradient>) {
    if !config.enable_linear_gradient {
        return (Paint::Color(config.color.clone()), None);
    }
    let [x1, y1, x2, y2] = config.gradient_direction.clone();
    let [from, to] = config.linear_gradient.clone();
    let gradient = LinearGradient {
        id: GRADIENT_ID.to_string(),
        x1,
        y1,
        x2,
        y2,
        stops: [
            GradientStop { offset: 0.0, color: from, opacity: 1.0 },
            GradientStop { offset: 1.0, color: to, opacity: 1.0 },
        ],
    };
    (Paint::Gradient(GRADIENT_ID.to_string()), Some(gradient))
}
