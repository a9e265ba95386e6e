use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_STICKY_HEIGHT, DEFAULT_STICKY_WIDTH};

/// Level of a node within the scrapbook hierarchy.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum NodeKind {
    Root,
    Category,
    Subcategory,
    Leaf,
}

/// One item of the externally supplied hierarchy. The layout engine only
/// reads this; creation and mutation belong to the node editor.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct TreeNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    /// 0.0 - 1.0, drives the node color.
    pub attention_weight: f64,
    /// Typically 0 - 10.
    pub priority: i32,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            attention_weight: 0.0,
            priority: 0,
            children: Vec::new(),
        }
    }
}

/// A 2D canvas coordinate.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum StickyColor {
    #[default]
    Gray,
    Yellow,
    Blue,
    Green,
    Pink,
}

impl StickyColor {
    /// Backdrop fill used by the renderer.
    pub fn fill(self) -> &'static str {
        match self {
            StickyColor::Gray => "#f1f3f4",
            StickyColor::Yellow => "#fff9c4",
            StickyColor::Blue => "#e3f2fd",
            StickyColor::Green => "#e8f5e9",
            StickyColor::Pink => "#fce4ec",
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Free-floating annotation, independent of the tree. Layered beneath graph
/// nodes.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StickyNote {
    pub id: String,
    pub content: String,
    pub color: StickyColor,
    pub text_align: TextAlign,
    pub position: Point,
    pub width: f64,
    pub height: f64,
}

impl StickyNote {
    /// A fresh note at `position`. The timestamp-derived id keeps notes
    /// unique within a session.
    pub fn new(position: Point, timestamp_ms: i64) -> Self {
        Self {
            id: format!("sticky-{}", timestamp_ms),
            content: String::new(),
            color: StickyColor::default(),
            text_align: TextAlign::default(),
            position,
            width: DEFAULT_STICKY_WIDTH,
            height: DEFAULT_STICKY_HEIGHT,
        }
    }
}

/// Partial sticky-note update; `None` fields are left untouched.
#[derive(Clone, Debug, Default)]
pub struct StickyNotePatch {
    pub content: Option<String>,
    pub color: Option<StickyColor>,
    pub text_align: Option<TextAlign>,
    pub position: Option<Point>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Which layer of the canvas a visual node belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VisualKind {
    Graph,
    Sticky,
}

/// Renderer-facing payload for one node. Derived fresh on every layout pass,
/// never persisted.
#[derive(Clone, PartialEq, Debug)]
pub struct NodeRender {
    pub label: String,
    pub width: f64,
    pub height: f64,
    pub border_color: String,
    pub fill_color: String,
    /// Stacking order; lower values render first.
    pub layer: i32,
}

#[derive(Clone, PartialEq, Debug)]
pub struct VisualNode {
    pub id: String,
    pub kind: VisualKind,
    pub position: Point,
    pub render: NodeRender,
}

/// Which side of a node an edge attaches to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Anchor {
    Top,
    Bottom,
    Left,
    Right,
}

/// Edge between an expanded parent and a visible child.
#[derive(Clone, PartialEq, Debug)]
pub struct VisualEdge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    pub source_anchor: Anchor,
    pub target_anchor: Anchor,
}

/// Per-node entry of the persisted settings document. `position` is null for
/// nodes that are expanded but have never been positioned.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct NodeSettingsEntry {
    pub id: String,
    pub position: Option<Point>,
    pub expanded: bool,
}

/// The serialized union of position store, expansion set, sticky notes and
/// unrelated column/property configuration. Every field defaults so partial
/// or legacy documents deserialize without error.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasSettings {
    pub nodes: Vec<NodeSettingsEntry>,
    pub zoom: Option<f64>,
    pub viewport: Option<Point>,
    pub sticky_notes: Vec<StickyNote>,
    pub custom_properties: Vec<serde_json::Value>,
    pub column_config: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_tolerate_partial_documents() {
        // Only `nodes` present; everything else must fall back to defaults.
        let json = r#"{"nodes":[{"id":"n1","position":{"x":10.0,"y":20.0},"expanded":true},
                                 {"id":"n2","position":null,"expanded":false}]}"#;
        let settings: CanvasSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.nodes.len(), 2);
        assert_eq!(settings.nodes[0].position, Some(Point::new(10.0, 20.0)));
        assert_eq!(settings.nodes[1].position, None);
        assert!(settings.zoom.is_none());
        assert!(settings.viewport.is_none());
        assert!(settings.sticky_notes.is_empty());
        assert!(settings.column_config.is_empty());
    }

    #[test]
    fn settings_empty_object_is_valid() {
        let settings: CanvasSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CanvasSettings::default());
    }

    #[test]
    fn sticky_note_wire_shape() {
        let note = StickyNote::new(Point::new(5.0, 6.0), 1_700_000_000_000);
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["id"], "sticky-1700000000000");
        assert_eq!(value["color"], "gray");
        assert_eq!(value["textAlign"], "top");
        assert_eq!(value["width"], 200.0);
        assert_eq!(value["height"], 150.0);
    }
}
