//! The recursive tree renderer.
//!
//! Walks the node tree depth-first and emits nested, absolutely positioned
//! markup. Containers re-root the coordinate space: each container's own
//! canvas box becomes the origin its children are positioned against, so
//! relative math is re-derived per level instead of flattened to one global
//! offset.

use std::collections::HashMap;
use std::fmt::Write;

use crate::geometry::{relative, Rect};
use crate::node::{Node, NodeKind};
use crate::style::{self, escape_attr, escape_text};

/// Render one node (and its subtree) against the given origin box.
///
/// `origin` is the canvas box of the ancestor chosen as coordinate zero; the
/// render entry point passes its own box, which is how the root is detected
/// and emitted as the relatively-positioned anchor. `images` maps node ids to
/// resolved bitmap URLs for image fills.
///
/// Missing boxes degrade to zero rects and unknown kinds fall through to an
/// unstyled container, so this never fails: partial visual output always
/// beats an aborted render of a multi-hundred-node tree.
pub fn render_node(node: &Node, origin: Option<&Rect>, images: &HashMap<String, String>) -> String {
    let rel = relative(node.absolute_bounding_box.as_ref(), origin);

    match node.kind {
        // Leaf kinds never recurse, even if they unexpectedly carry children.
        NodeKind::Text => {
            let chars = escape_text(node.characters.as_deref().unwrap_or_default());
            format!(
                "<div style=\"{}\">{}</div>",
                style::text_style(&rel, node),
                chars
            )
        }
        NodeKind::Rectangle => {
            let url = images.get(&node.id).map(String::as_str);
            format!("<div style=\"{}\"></div>", style::rectangle_style(&rel, node, url))
        }
        NodeKind::Ellipse => {
            let url = images.get(&node.id).map(String::as_str);
            format!("<div style=\"{}\"></div>", style::ellipse_style(&rel, node, url))
        }
        // Vector geometry is out of scope; lines and paths keep their box so
        // surrounding layout still reads correctly.
        NodeKind::Line | NodeKind::VectorPath => {
            format!("<div style=\"{}\"></div>", style::position_style(&rel))
        }
        kind if kind.is_container() => {
            let own_box = node.absolute_bounding_box.as_ref();
            // The render entry point is the container whose own box matches
            // the current origin; it anchors the subtree instead of being
            // absolutely placed inside it.
            let is_entry_point = own_box == origin;
            let box_style = if is_entry_point {
                style::root_style(&own_box.copied().unwrap_or_default())
            } else {
                style::position_style(&rel)
            };
            let mut out = format!(
                "<div data-node-id=\"{}\" style=\"{}\">",
                escape_attr(&node.id),
                box_style
            );
            // Children anchor to this container: its box is their origin.
            for child in &node.children {
                let _ = write!(out, "{}", render_node(child, own_box, images));
            }
            out.push_str("</div>");
            out
        }
        // Unrecognized kinds act as a generic container without
        // container-specific styling: descendants are still emitted against
        // the unchanged origin.
        _ => {
            let mut out = format!("<div data-node-id=\"{}\">", escape_attr(&node.id));
            for child in &node.children {
                let _ = write!(out, "{}", render_node(child, origin, images));
            }
            out.push_str("</div>");
            out
        }
    }
}

/// Render a frame as the entry point of its own coordinate space.
pub fn render_root(node: &Node, images: &HashMap<String, String>) -> String {
    render_node(node, node.absolute_bounding_box.as_ref(), images)
}
