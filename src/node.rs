//! Data model for the upstream design file JSON.
//!
//! Mirrors the subset of the Figma REST API node payload that the renderer
//! needs. Everything optional in the wire format stays optional here; the
//! renderer supplies fallbacks instead of erroring on gaps.

use serde::Deserialize;

use crate::geometry::Rect;

/// The closed set of node kinds the renderer dispatches on.
///
/// Upstream uses an open string; any value outside this set lands on `Other`
/// so a new upstream kind is an acknowledged case, not a silently-reached
/// default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "TEXT")]
    Text,
    #[serde(rename = "RECTANGLE")]
    Rectangle,
    #[serde(rename = "ELLIPSE")]
    Ellipse,
    #[serde(rename = "LINE")]
    Line,
    #[serde(rename = "VECTOR")]
    VectorPath,
    #[serde(rename = "FRAME")]
    Frame,
    #[serde(rename = "GROUP")]
    Group,
    #[serde(rename = "COMPONENT")]
    Component,
    #[serde(rename = "INSTANCE")]
    ComponentInstance,
    #[serde(rename = "COMPONENT_SET")]
    ComponentSet,
    #[serde(other)]
    Other,
}

impl NodeKind {
    /// Containers wrap their children in a positioned element and become the
    /// coordinate origin for their own subtree.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            NodeKind::Frame
                | NodeKind::Group
                | NodeKind::Component
                | NodeKind::ComponentInstance
                | NodeKind::ComponentSet
        )
    }

    /// Leaf kinds are rendered terminally: any children they unexpectedly
    /// carry are never emitted.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeKind::Text
                | NodeKind::Rectangle
                | NodeKind::Ellipse
                | NodeKind::Line
                | NodeKind::VectorPath
        )
    }
}

/// A normalized color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub r: f64,
    #[serde(default)]
    pub g: f64,
    #[serde(default)]
    pub b: f64,
    /// Paint-level alpha. Deserialized for completeness but ignored by the
    /// compositing rule, which only reads the separate `opacity` field.
    #[serde(default)]
    pub a: Option<f64>,
}

/// Paint kind discriminant. Anything beyond solid colors and images is
/// ignored for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PaintKind {
    #[serde(rename = "SOLID")]
    Solid,
    #[serde(rename = "IMAGE")]
    Image,
    #[serde(other)]
    Other,
}

/// One fill descriptor. Only the first fill of a node is authoritative.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paint {
    #[serde(rename = "type")]
    pub kind: PaintKind,
    pub color: Option<Color>,
    pub opacity: Option<f64>,
}

/// Typography attributes present on text nodes.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: Option<f64>,
    pub line_height_px: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<f64>,
    pub letter_spacing: Option<f64>,
}

/// One visual element of the design tree.
///
/// `children` order is render order: later siblings paint on top of earlier
/// ones under absolute positioning.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<Node>,
    pub absolute_bounding_box: Option<Rect>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    pub characters: Option<String>,
    #[serde(rename = "style")]
    pub text_style: Option<TextStyle>,
    pub corner_radius: Option<f64>,
}

impl Node {
    /// First fill, if any. Later fills are intentionally ignored.
    pub fn first_fill(&self) -> Option<&Paint> {
        self.fills.first()
    }

    /// Depth-first search for the node with the given id.
    ///
    /// Ids are assumed unique within a file; if the upstream ever violates
    /// that, the first match in traversal order wins. `None` is the normal
    /// not-found outcome.
    pub fn find(&self, target_id: &str) -> Option<&Node> {
        if self.id == target_id {
            return Some(self);
        }
        for child in &self.children {
            if let Some(found) = child.find(target_id) {
                return Some(found);
            }
        }
        None
    }
}

/// A whole design file: the document root plus its modification stamp.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDocument {
    pub document: Node,
    #[serde(default)]
    pub last_modified: String,
}
