//! Finder and alignment marker overlay.
//!
//! Markers are positioned in module units and anchored to the symbol's edges,
//! so the far-side markers follow the matrix dimension. For a 33x33 (version 4)
//! symbol this gives the ring origins 0.5 / 26.5, core origins 2 / 28 and the
//! alignment marker at 24.5 / 25.75.

use crate::config::{MarkerColors, MarkerPlacement};
use crate::error::ConfigError;
use crate::scene::{LineCap, LineJoin, Paint, Primitive, RectShape, Stroke};

const MIN_DIMENSION: usize = 21;
const MAX_DIMENSION: usize = 177;
/// Smallest symbol with an alignment pattern (version 2).
const MIN_ALIGNMENT_DIMENSION: usize = 25;

/// One marker: a stroked ring and a filled core, in module units.
///
/// Rings are stroke only (`fill="none"`) so the light band between ring and
/// core stays visible; an SVG rect without a fill would paint it black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub ring_origin: (f64, f64),
    pub ring_side: f64,
    pub core_origin: (f64, f64),
    pub core_side: f64,
}

impl Marker {
    fn finder(x: f64, y: f64) -> Self {
        Self { ring_origin: (x + 0.5, y + 0.5), ring_side: 6.0, core_origin: (x + 2.0, y + 2.0), core_side: 3.0 }
    }

    /// `center` is the module index of the alignment pattern's center.
    fn alignment(center: f64) -> Self {
        Self {
            ring_origin: (center - 1.5, center - 1.5),
            ring_side: 4.0,
            core_origin: (center - 0.25, center - 0.25),
            core_side: 1.5,
        }
    }
}

/// Returns whether `n` is the side of a QR Code Model 2 symbol.
pub fn is_symbol_dimension(n: usize) -> bool {
    (MIN_DIMENSION..=MAX_DIMENSION).contains(&n) && (n - MIN_DIMENSION) % 4 == 0
}

/// Marker positions for an `n`x`n` symbol.
///
/// # Errors
///
/// [`ConfigError::MarkerDimension`] when anchored markers are requested for a
/// matrix that is not a QR symbol.
pub fn layout(n: usize, placement: MarkerPlacement) -> Result<Vec<Marker>, ConfigError> {
    if placement == MarkerPlacement::Hidden {
        return Ok(Vec::new());
    }
    if !is_symbol_dimension(n) {
        return Err(ConfigError::MarkerDimension(n));
    }

    let far = (n - 7) as f64;
    let mut markers = vec![Marker::finder(0.0, 0.0), Marker::finder(0.0, far), Marker::finder(far, 0.0)];
    if n >= MIN_ALIGNMENT_DIMENSION {
        markers.push(Marker::alignment((n - 7) as f64));
    }
    Ok(markers)
}

/// Turns markers into scene rects scaled by `cell_size`.
pub fn to_primitives(markers: &[Marker], cell_size: f64, colors: &MarkerColors) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(markers.len() * 2);
    for m in markers {
        out.push(Primitive::Rect(RectShape {
            x: m.ring_origin.0 * cell_size,
            y: m.ring_origin.1 * cell_size,
            width: m.ring_side * cell_size,
            height: m.ring_side * cell_size,
            radius: 0.0,
            fill: Paint::None,
            stroke: Some(Stroke {
                paint: Paint::Color(colors.ring.clone()),
                width: cell_size,
                cap: LineCap::Round,
                join: LineJoin::Round,
            }),
        }));
        out.push(Primitive::Rect(RectShape {
            x: m.core_origin.0 * cell_size,
            y: m.core_origin.1 * cell_size,
            width: m.core_side * cell_size,
            height: m.core_side * cell_size,
            radius: 0.0,
            fill: Paint::Color(colors.core.clone()),
            stroke: None,
        }));
    }
    out
}
