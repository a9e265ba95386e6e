//! Tree-to-canvas layout engine.
//!
//! [`compute_layout`] flattens the currently visible portion of the tree into
//! positioned visual nodes and edges. It is pure: inputs are never mutated
//! and identical inputs produce identical output.
//!
//! Two modes exist. Manual mode renders saved (or fallback) per-node
//! coordinates and is the default once any position exists. Auto mode is a
//! deterministic recursive placement used by the one-shot auto-layout action;
//! [`auto_layout`] computes coordinates for the full tree, which the reducer
//! then commits into the position store before reverting to manual mode.

use std::collections::{HashMap, HashSet};

use crate::canvas::color::node_colors;
use crate::constants::{
    CATEGORY_LEFT_OFFSET, CATEGORY_ROW_Y, CATEGORY_SPACING, DEFAULT_NODE_HEIGHT,
    DEFAULT_NODE_WIDTH, FALLBACK_COLUMN_SPACING, FALLBACK_ROW_SPACING, GRAPH_LAYER,
    ROOT_CENTERING_OFFSET, ROOT_ROW_Y, STICKY_LAYER, SUBCATEGORY_INDENT, VERTICAL_SPACING,
};
use crate::models::{
    Anchor, NodeRender, Point, StickyNote, TreeNode, VisualEdge, VisualKind, VisualNode,
};
use crate::tree::{count_descendants, count_visible_descendants};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayoutMode {
    /// Saved positions with deterministic fallbacks for unset nodes.
    Manual,
    /// Recomputed auto coordinates that respect the current expansion state.
    /// Secondary path; the one-shot [`auto_layout`] commit is the normal way
    /// auto coordinates reach the canvas.
    Auto,
}

/// Renderer input: everything visible on the canvas for one frame.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Layout {
    pub nodes: Vec<VisualNode>,
    pub edges: Vec<VisualEdge>,
}

/// Flatten the visible tree into positioned nodes and edges.
///
/// A node is visible iff every ancestor is expanded; the root is always
/// visible. Sticky notes are appended on the backdrop layer regardless of
/// tree state.
pub fn compute_layout(
    tree: &TreeNode,
    expansion: &HashSet<String>,
    positions: &HashMap<String, Option<Point>>,
    sticky_notes: &[StickyNote],
    selected: Option<&str>,
    mode: LayoutMode,
) -> Layout {
    let auto_positions = match mode {
        LayoutMode::Manual => None,
        LayoutMode::Auto => Some(auto_layout_visible(tree, expansion)),
    };

    let mut layout = Layout::default();
    let mut visit_index = 0usize;
    walk_visible(
        tree,
        0,
        expansion,
        positions,
        auto_positions.as_ref(),
        selected,
        &mut visit_index,
        &mut layout,
    );

    for note in sticky_notes {
        layout.nodes.push(VisualNode {
            id: note.id.clone(),
            kind: VisualKind::Sticky,
            position: note.position,
            render: NodeRender {
                label: note.content.clone(),
                width: note.width,
                height: note.height,
                border_color: "#d0d0d0".to_string(),
                fill_color: note.color.fill().to_string(),
                layer: STICKY_LAYER,
            },
        });
    }

    layout
}

#[allow(clippy::too_many_arguments)]
fn walk_visible(
    node: &TreeNode,
    depth: usize,
    expansion: &HashSet<String>,
    positions: &HashMap<String, Option<Point>>,
    auto_positions: Option<&HashMap<String, Point>>,
    selected: Option<&str>,
    visit_index: &mut usize,
    layout: &mut Layout,
) {
    let position = match auto_positions {
        Some(auto) => auto
            .get(&node.id)
            .copied()
            .unwrap_or_else(|| fallback_position(depth, *visit_index)),
        None => positions
            .get(&node.id)
            .copied()
            .flatten()
            .unwrap_or_else(|| fallback_position(depth, *visit_index)),
    };
    *visit_index += 1;

    let colors = node_colors(
        node.attention_weight,
        node.priority,
        selected == Some(node.id.as_str()),
    );
    layout.nodes.push(VisualNode {
        id: node.id.clone(),
        kind: VisualKind::Graph,
        position,
        render: NodeRender {
            label: node.label.clone(),
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
            border_color: colors.border,
            fill_color: colors.fill,
            layer: GRAPH_LAYER,
        },
    });

    if !expansion.contains(&node.id) {
        return;
    }
    for child in &node.children {
        layout.edges.push(edge_for(node, child, depth + 1));
        walk_visible(
            child,
            depth + 1,
            expansion,
            positions,
            auto_positions,
            selected,
            visit_index,
            layout,
        );
    }
}

/// Deterministic placement for a node that has never been positioned. Unset
/// nodes along one traversal never collide; cross-branch collisions are
/// tolerated until the user drags.
fn fallback_position(depth: usize, visit_index: usize) -> Point {
    Point::new(
        depth as f64 * FALLBACK_COLUMN_SPACING,
        visit_index as f64 * FALLBACK_ROW_SPACING,
    )
}

/// Anchor sides are fixed by depth: category edges drop from the parent
/// bottom into the child top, deeper edges chain into the child's left side.
fn edge_for(parent: &TreeNode, child: &TreeNode, child_depth: usize) -> VisualEdge {
    let target_anchor = if child_depth <= 1 {
        Anchor::Top
    } else {
        Anchor::Left
    };
    VisualEdge {
        id: format!("edge-{}-{}", parent.id, child.id),
        source_id: parent.id.clone(),
        target_id: child.id.clone(),
        source_anchor: Anchor::Bottom,
        target_anchor,
    }
}

/// One-shot coordinate generator for the whole tree.
///
/// Categories run left-to-right on a fixed row; each deeper level is indented
/// under its parent and siblings advance past the full vertical extent of the
/// previous sibling's subtree, which makes the result collision-free without
/// any iterative relaxation.
pub fn auto_layout(tree: &TreeNode) -> HashMap<String, Point> {
    let mut out = HashMap::new();
    out.insert(tree.id.clone(), Point::new(root_x(tree.children.len()), ROOT_ROW_Y));
    for (i, category) in tree.children.iter().enumerate() {
        let x = CATEGORY_LEFT_OFFSET + i as f64 * CATEGORY_SPACING;
        out.insert(category.id.clone(), Point::new(x, CATEGORY_ROW_Y));
        place_children(category, x, CATEGORY_ROW_Y + VERTICAL_SPACING, &mut out);
    }
    out
}

fn root_x(category_count: usize) -> f64 {
    if category_count == 0 {
        return CATEGORY_LEFT_OFFSET;
    }
    let first = CATEGORY_LEFT_OFFSET;
    let last = CATEGORY_LEFT_OFFSET + (category_count - 1) as f64 * CATEGORY_SPACING;
    (first + last) / 2.0 - ROOT_CENTERING_OFFSET
}

fn place_children(parent: &TreeNode, parent_x: f64, first_y: f64, out: &mut HashMap<String, Point>) {
    let x = parent_x + SUBCATEGORY_INDENT;
    let mut y = first_y;
    for child in &parent.children {
        out.insert(child.id.clone(), Point::new(x, y));
        place_children(child, x, y + VERTICAL_SPACING, out);
        y += VERTICAL_SPACING * (1.0 + count_descendants(child) as f64);
    }
}

/// Expansion-aware variant used by [`LayoutMode::Auto`]: collapsed subtrees
/// take up no vertical space and are not placed.
fn auto_layout_visible(tree: &TreeNode, expansion: &HashSet<String>) -> HashMap<String, Point> {
    let mut out = HashMap::new();
    out.insert(tree.id.clone(), Point::new(root_x(tree.children.len()), ROOT_ROW_Y));
    if !expansion.contains(&tree.id) {
        return out;
    }
    for (i, category) in tree.children.iter().enumerate() {
        let x = CATEGORY_LEFT_OFFSET + i as f64 * CATEGORY_SPACING;
        out.insert(category.id.clone(), Point::new(x, CATEGORY_ROW_Y));
        place_visible_children(category, x, CATEGORY_ROW_Y + VERTICAL_SPACING, expansion, &mut out);
    }
    out
}

fn place_visible_children(
    parent: &TreeNode,
    parent_x: f64,
    first_y: f64,
    expansion: &HashSet<String>,
    out: &mut HashMap<String, Point>,
) {
    if !expansion.contains(&parent.id) {
        return;
    }
    let x = parent_x + SUBCATEGORY_INDENT;
    let mut y = first_y;
    for child in &parent.children {
        out.insert(child.id.clone(), Point::new(x, y));
        place_visible_children(child, x, y + VERTICAL_SPACING, expansion, out);
        y += VERTICAL_SPACING * (1.0 + count_visible_descendants(child, expansion) as f64);
    }
}
