//! Frame index extraction: a flat, page-tagged listing of every renderable
//! frame in a file, for listing UIs.

use serde::Serialize;

use crate::node::{FileDocument, Node, NodeKind};

/// One listing entry: a frame or component, tagged with the name of the page
/// that contains it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameInfo {
    pub id: String,
    pub name: String,
    pub page: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

fn walk(node: &Node, page: &str, frames: &mut Vec<FrameInfo>) {
    if matches!(node.kind, NodeKind::Frame | NodeKind::Component) {
        let bounds = node.absolute_bounding_box.as_ref();
        frames.push(FrameInfo {
            id: node.id.clone(),
            name: node.name.clone(),
            page: page.to_string(),
            width: bounds.map(|b| b.width),
            height: bounds.map(|b| b.height),
            preview_url: None,
        });
        // Nested frames and components are independently listable.
    }
    for child in &node.children {
        walk(child, page, frames);
    }
}

/// Flatten a file into its renderable frames, in document order.
///
/// The document root's children are the pages; each page boundary resets the
/// page name tagged onto the entries found beneath it. Output order follows
/// the depth-first traversal (page order, then document order within a page),
/// so identical input yields an identical listing.
pub fn extract_frames(file: &FileDocument) -> Vec<FrameInfo> {
    let mut frames = Vec::new();
    for page in &file.document.children {
        walk(page, &page.name, &mut frames);
    }
    frames
}
