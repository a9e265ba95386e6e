//! Virtualized file-tree model.
//!
//! Flattens a file hierarchy into the row list a VS-Code-style tree view
//! renders: name filtering, single-child directory-chain compression, and
//! visible-range computation for virtualized scrolling. Pure functions, no
//! rendering.

use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct FileNode {
    pub name: String,
    pub is_dir: bool,
    pub children: Vec<FileNode>,
}

impl FileNode {
    pub fn dir(name: impl Into<String>, children: Vec<FileNode>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            children,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            children: Vec::new(),
        }
    }
}

/// One rendered row of the flattened tree.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FlatRow {
    /// Full slash-joined path; also the expansion key.
    pub path: String,
    /// Display label; compressed chains show as "a/b/c".
    pub label: String,
    pub depth: usize,
    pub is_dir: bool,
    pub has_children: bool,
}

/// Flatten the children of `root` into visible rows.
///
/// With an empty filter, a directory's children appear iff its path is in
/// `expansion`. With a non-empty filter the expansion state is ignored and
/// every node whose name matches (case-insensitive substring), or that has a
/// matching descendant, is shown.
///
/// Runs of directories with exactly one child that is itself a directory are
/// compressed into a single row labeled with the joined names.
pub fn flatten(root: &FileNode, expansion: &HashSet<String>, filter: &str) -> Vec<FlatRow> {
    let filter = filter.trim().to_lowercase();
    let mut rows = Vec::new();
    for child in &root.children {
        flatten_node(child, "", 0, expansion, &filter, &mut rows);
    }
    rows
}

fn flatten_node(
    node: &FileNode,
    parent_path: &str,
    depth: usize,
    expansion: &HashSet<String>,
    filter: &str,
    rows: &mut Vec<FlatRow>,
) {
    if !filter.is_empty() && !matches_filter(node, filter) {
        return;
    }

    // Compress single-child directory chains into one row.
    let mut label = node.name.clone();
    let mut tail = node;
    while tail.is_dir && tail.children.len() == 1 && tail.children[0].is_dir {
        tail = &tail.children[0];
        label.push('/');
        label.push_str(&tail.name);
    }

    let path = if parent_path.is_empty() {
        label.clone()
    } else {
        format!("{}/{}", parent_path, label)
    };

    rows.push(FlatRow {
        path: path.clone(),
        label,
        depth,
        is_dir: tail.is_dir,
        has_children: !tail.children.is_empty(),
    });

    let expanded = !filter.is_empty() || expansion.contains(&path);
    if tail.is_dir && expanded {
        for child in &tail.children {
            flatten_node(child, &path, depth + 1, expansion, filter, rows);
        }
    }
}

fn matches_filter(node: &FileNode, filter: &str) -> bool {
    node.name.to_lowercase().contains(filter)
        || node.children.iter().any(|c| matches_filter(c, filter))
}

/// First and one-past-last row index to materialize for the current scroll
/// position, padded by `overscan` rows on each side.
pub fn visible_range(
    row_count: usize,
    scroll_top: f64,
    viewport_height: f64,
    row_height: f64,
    overscan: usize,
) -> (usize, usize) {
    if row_count == 0 || row_height <= 0.0 {
        return (0, 0);
    }
    let first = (scroll_top / row_height).floor().max(0.0) as usize;
    let last = ((scroll_top + viewport_height) / row_height).ceil() as usize;
    let start = first.saturating_sub(overscan);
    let end = (last + overscan).min(row_count);
    (start.min(end), end)
}
