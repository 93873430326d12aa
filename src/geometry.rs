//! Coordinate-space primitives for absolute positioning.
//!
//! Every bounding box in a file shares one canvas coordinate space. Relative
//! coordinates are always derived by subtracting the chosen origin box, never
//! by accumulating per-level deltas, so rounding can't compound down the tree.

use serde::Deserialize;

/// An axis-aligned bounding box in canvas coordinates.
///
/// Deserialized from the upstream `absoluteBoundingBox` payload; any missing
/// component defaults to zero rather than failing the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Rect {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Translate `rect` so that `origin` sits at (0,0); width and height pass
/// through unchanged. Either side being absent degrades to the zero rect, so
/// this never fails and is bit-deterministic for identical input.
pub fn relative(rect: Option<&Rect>, origin: Option<&Rect>) -> Rect {
    let r = rect.copied().unwrap_or_default();
    let o = origin.copied().unwrap_or_default();
    Rect {
        x: r.x - o.x,
        y: r.y - o.y,
        width: r.width,
        height: r.height,
    }
}
