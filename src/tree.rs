//! Tree traversal helpers.
//!
//! All of these are pure recursive functions returning fresh values; nothing
//! here mutates the tree or a shared accumulator, which keeps the layout
//! engine's purity easy to verify.

use std::collections::HashSet;

use crate::models::TreeNode;

/// Every node id in the tree, root included. Used as the precondition for
/// auto-layout, which assumes full visibility.
pub fn expand_all(tree: &TreeNode) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids(tree, &mut ids);
    ids
}

fn collect_ids(node: &TreeNode, ids: &mut HashSet<String>) {
    ids.insert(node.id.clone());
    for child in &node.children {
        collect_ids(child, ids);
    }
}

/// Total number of descendants below `node` (the node itself not counted).
pub fn count_descendants(node: &TreeNode) -> usize {
    node.children
        .iter()
        .map(|c| 1 + count_descendants(c))
        .sum()
}

/// Descendant count bounded by the expansion state: children of a collapsed
/// node are invisible and do not count.
pub fn count_visible_descendants(node: &TreeNode, expansion: &HashSet<String>) -> usize {
    if !expansion.contains(&node.id) {
        return 0;
    }
    node.children
        .iter()
        .map(|c| 1 + count_visible_descendants(c, expansion))
        .sum()
}

/// Resolve a node id back to the full tree node, e.g. when the renderer
/// reports a click on a visual node.
pub fn find_node<'a>(tree: &'a TreeNode, id: &str) -> Option<&'a TreeNode> {
    if tree.id == id {
        return Some(tree);
    }
    tree.children.iter().find_map(|c| find_node(c, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeKind;

    fn sample_tree() -> TreeNode {
        let mut root = TreeNode::new("root", NodeKind::Root, "Theme");
        let mut cat_a = TreeNode::new("a", NodeKind::Category, "A");
        let mut sub_a1 = TreeNode::new("a1", NodeKind::Subcategory, "A1");
        sub_a1
            .children
            .push(TreeNode::new("a1x", NodeKind::Leaf, "A1x"));
        cat_a.children.push(sub_a1);
        let cat_b = TreeNode::new("b", NodeKind::Category, "B");
        root.children.push(cat_a);
        root.children.push(cat_b);
        root
    }

    #[test]
    fn expand_all_collects_every_id() {
        let ids = expand_all(&sample_tree());
        assert_eq!(ids.len(), 5);
        assert!(ids.contains("root"));
        assert!(ids.contains("a1x"));
    }

    #[test]
    fn descendant_counts() {
        let tree = sample_tree();
        assert_eq!(count_descendants(&tree), 4);
        assert_eq!(count_descendants(&tree.children[0]), 2);
        assert_eq!(count_descendants(&tree.children[1]), 0);
    }

    #[test]
    fn visible_descendants_respect_expansion() {
        let tree = sample_tree();
        let mut expansion = HashSet::new();
        // Collapsed root sees nothing.
        assert_eq!(count_visible_descendants(&tree, &expansion), 0);

        expansion.insert("root".to_string());
        assert_eq!(count_visible_descendants(&tree, &expansion), 2);

        expansion.insert("a".to_string());
        assert_eq!(count_visible_descendants(&tree, &expansion), 3);

        expansion.insert("a1".to_string());
        assert_eq!(count_visible_descendants(&tree, &expansion), 4);
    }

    #[test]
    fn find_node_resolves_nested_ids() {
        let tree = sample_tree();
        assert_eq!(find_node(&tree, "a1x").unwrap().label, "A1x");
        assert!(find_node(&tree, "missing").is_none());
    }
}
