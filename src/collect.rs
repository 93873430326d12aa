//! Pre-render resource collection passes.
//!
//! Both traversals walk the whole subtree once with an explicit work stack,
//! so arbitrarily deep files never blow the call stack. They are pure folds
//! over the tree: the renderer consumes their results, it never threads
//! mutable accumulators through its own recursion.

use std::collections::HashSet;

use crate::node::{Node, PaintKind};

/// Ids of every node whose first fill is an image, i.e. the nodes whose
/// bitmap URLs must be batch-resolved before rendering.
pub fn image_node_ids(root: &Node) -> HashSet<String> {
    let mut ids = HashSet::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if matches!(node.first_fill(), Some(fill) if fill.kind == PaintKind::Image) {
            ids.insert(node.id.clone());
        }
        for child in &node.children {
            stack.push(child);
        }
    }
    ids
}

/// Font families used by text nodes the renderer will actually emit,
/// de-duplicated, in first-seen document order so generated font links are
/// stable. Children of leaf kinds are skipped, matching the renderer's
/// leaf-children-ignored rule: a font only a dropped subtree uses gets no
/// link.
pub fn font_families(root: &Node) -> Vec<String> {
    let mut families = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if let Some(family) = node.text_style.as_ref().and_then(|ts| ts.font_family.as_ref()) {
            if !families.iter().any(|f| f == family) {
                families.push(family.clone());
            }
        }
        if node.kind.is_leaf() {
            continue;
        }
        // Reverse push keeps the pop order equal to document order.
        for child in node.children.iter().rev() {
            stack.push(child);
        }
    }
    families
}
