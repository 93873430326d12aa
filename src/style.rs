//! Inline style synthesis for rendered nodes.
//!
//! Each function produces a complete `style` attribute value for one node
//! kind. Missing visual attributes always resolve to documented fallbacks:
//! rendering never aborts over a cosmetic data gap.

use std::fmt::Write;

use crate::geometry::Rect;
use crate::node::{Color, Node, PaintKind, TextStyle};

/// Default font size for text nodes missing an explicit one.
const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Fallback line-height multiplier applied to the font size.
const LINE_HEIGHT_FACTOR: f64 = 1.4;

/// Escape text content for element bodies.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

/// Neutralize an upstream string for a single-quoted CSS string that itself
/// lives inside a double-quoted `style` attribute: backslash-escape the CSS
/// string delimiters, then entity-escape the attribute delimiters.
fn css_quoted(value: &str) -> String {
    escape_attr(&value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Neutralize a resolved URL for `url('…')` inside a `style` attribute.
/// Quotes and backslashes are never required raw in a URL, so they are
/// percent-encoded; the attribute delimiters are entity-escaped.
fn css_url(url: &str) -> String {
    escape_attr(
        &url.replace('\\', "%5C")
            .replace('\'', "%27")
            .replace('"', "%22"),
    )
}

/// Compose a fill color with its opacity into a CSS `rgba()` value.
///
/// The rule is intentionally simple: channels are scaled to 0..=255 and
/// rounded, and the alpha slot carries the fill's own `opacity` field. The
/// paint's embedded alpha channel is not consulted.
pub fn css_color(color: &Color, opacity: f64) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (color.r * 255.0).round() as i64,
        (color.g * 255.0).round() as i64,
        (color.b * 255.0).round() as i64,
        opacity
    )
}

/// Absolute-position declarations for a box already translated into its
/// origin's coordinate space.
pub fn position_style(rect: &Rect) -> String {
    format!(
        "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;",
        rect.x,
        rect.y,
        rect.width,
        rect.height
    )
}

/// Style for the render entry point: relatively positioned so descendants
/// anchor to it, sized to the frame itself.
pub fn root_style(rect: &Rect) -> String {
    format!(
        "position:relative;width:{}px;height:{}px;",
        rect.width,
        rect.height
    )
}

/// First solid fill composed with its opacity, if the node has one.
fn solid_fill_color(node: &Node) -> Option<String> {
    let fill = node.first_fill()?;
    if fill.kind != PaintKind::Solid {
        return None;
    }
    let color = fill.color?;
    Some(css_color(&color, fill.opacity.unwrap_or(1.0)))
}

/// Style for a text node: preserved whitespace, sized type, composed color.
pub fn text_style(rect: &Rect, node: &Node) -> String {
    let fallback = TextStyle::default();
    let ts = node.text_style.as_ref().unwrap_or(&fallback);
    let font_size = ts.font_size.unwrap_or(DEFAULT_FONT_SIZE);
    let line_height = ts
        .line_height_px
        .unwrap_or_else(|| (font_size * LINE_HEIGHT_FACTOR).round());
    let color = solid_fill_color(node).unwrap_or_else(|| "rgba(0, 0, 0, 1)".to_string());

    let mut style = position_style(rect);
    let _ = write!(
        style,
        "white-space:pre-wrap;font-size:{}px;line-height:{}px;color:{};",
        font_size,
        line_height,
        color
    );
    if let Some(family) = &ts.font_family {
        let _ = write!(style, "font-family:'{}';", css_quoted(family));
    }
    if let Some(weight) = ts.font_weight {
        let _ = write!(style, "font-weight:{};", weight);
    }
    if let Some(spacing) = ts.letter_spacing {
        let _ = write!(style, "letter-spacing:{}px;", spacing);
    }
    style
}

/// Background declarations from a node's first fill.
///
/// Solid fills become a `background` color; image fills become a covering
/// `background-image` when the batch resolver produced a URL for this node,
/// and an empty box otherwise (never broken-image markup).
fn fill_style(node: &Node, image_url: Option<&str>) -> String {
    match node.first_fill() {
        Some(fill) if fill.kind == PaintKind::Solid => solid_fill_color(node)
            .map(|c| format!("background:{};", c))
            .unwrap_or_default(),
        Some(fill) if fill.kind == PaintKind::Image => image_url
            .map(|url| {
                format!(
                    "background-image:url('{}');background-size:cover;background-position:center;",
                    css_url(url)
                )
            })
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Style for a rectangle: positioned box, fill, optional uniform rounding.
pub fn rectangle_style(rect: &Rect, node: &Node, image_url: Option<&str>) -> String {
    let mut style = position_style(rect);
    style.push_str(&fill_style(node, image_url));
    if let Some(radius) = node.corner_radius {
        let _ = write!(style, "border-radius:{}px;", radius);
    }
    style
}

/// Style for an ellipse: like a rectangle but fully rounded. Any
/// `cornerRadius` on the node is ignored.
pub fn ellipse_style(rect: &Rect, node: &Node, image_url: Option<&str>) -> String {
    let mut style = position_style(rect);
    style.push_str("border-radius:50%;");
    style.push_str(&fill_style(node, image_url));
    style
}
