//! Session glue: tree + state + synchronizer.
//!
//! The host renderer owns the event loop; it forwards interaction events via
//! [`Session::dispatch`], ticks [`Session::poll`] from its timer, and pulls
//! fresh [`Layout`] output whenever a dispatch reports that a redraw is
//! needed.

use std::time::Instant;

use crate::canvas::layout::{compute_layout, Layout, LayoutMode};
use crate::messages::{Command, Message};
use crate::models::TreeNode;
use crate::state::ScrapbookState;
use crate::storage::SettingsStore;
use crate::sync::SettingsSync;
use crate::tree::find_node;
use crate::update::update;

pub struct Session<S: SettingsStore> {
    tree: TreeNode,
    state: ScrapbookState,
    sync: SettingsSync<S>,
}

impl<S: SettingsStore> Session<S> {
    pub fn new(tree: TreeNode, store: S) -> Self {
        Self {
            tree,
            state: ScrapbookState::new(),
            sync: SettingsSync::new(store),
        }
    }

    /// Perform the initial settings load and merge. Must run before any
    /// interaction is dispatched; until it does, scheduled saves are refused
    /// by the synchronizer's guard anyway.
    pub fn load(&mut self) {
        let settings = self.sync.load();
        update(&mut self.state, &self.tree, Message::SettingsLoaded(settings));
    }

    /// Apply one interaction event. Returns true when the visual output
    /// changed and the renderer should recompute.
    pub fn dispatch(&mut self, msg: Message, now: Instant) -> bool {
        let mut redraw = false;
        for command in update(&mut self.state, &self.tree, msg) {
            match command {
                Command::ScheduleSave => self.sync.schedule_save(now),
                Command::FlushSave => self.sync.flush(&self.state),
                Command::Redraw => redraw = true,
            }
        }
        redraw
    }

    /// Drive the debounce timer. Returns true when a save was attempted.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.sync.poll(&self.state, now)
    }

    /// Current visual node/edge lists for the renderer. Rendering always
    /// happens in manual mode; auto-layout only ever commits coordinates
    /// into the position store.
    pub fn layout(&self) -> Layout {
        compute_layout(
            &self.tree,
            &self.state.expansion,
            &self.state.positions,
            &self.state.sticky_notes,
            self.state.selected_node_id.as_deref(),
            LayoutMode::Manual,
        )
    }

    /// Resolve a clicked visual node back to its tree node.
    pub fn resolve_node(&self, id: &str) -> Option<&TreeNode> {
        find_node(&self.tree, id)
    }

    pub fn state(&self) -> &ScrapbookState {
        &self.state
    }

    /// Swap in a fresh tree from the node editor. Positions and expansion
    /// entries for removed nodes go stale but stay harmless.
    pub fn set_tree(&mut self, tree: TreeNode) {
        self.tree = tree;
    }

    pub fn store(&self) -> &S {
        self.sync.store()
    }

    pub fn into_store(self) -> S {
        self.sync.into_store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::models::{NodeKind, Point};
    use crate::storage::MemoryStore;

    fn tree() -> TreeNode {
        let mut root = TreeNode::new("root", NodeKind::Root, "Theme");
        let mut cat = TreeNode::new("cat", NodeKind::Category, "Cat");
        cat.children
            .push(TreeNode::new("sub", NodeKind::Subcategory, "Sub"));
        root.children.push(cat);
        root
    }

    #[test]
    fn full_session_round_trip() {
        let mut store = MemoryStore::new();

        // First session: interact, let the debounce fire, tear down.
        {
            let mut session = Session::new(tree(), store);
            session.load();
            let start = Instant::now();

            assert!(session.dispatch(
                Message::ToggleNode {
                    node_id: "root".to_string()
                },
                start,
            ));
            session.dispatch(
                Message::NodeDragStopped {
                    node_id: "cat".to_string(),
                    x: 77.0,
                    y: 88.0,
                },
                start,
            );
            assert!(session.poll(start + Duration::from_millis(600)));

            session.dispatch(Message::TeardownView, start + Duration::from_secs(1));
            store = session.into_store();
        }

        // Second session sees the persisted expansion and position.
        let mut session = Session::new(tree(), store);
        session.load();
        assert!(session.state().expansion.contains("root"));
        assert_eq!(
            session.state().positions.get("cat"),
            Some(&Some(Point::new(77.0, 88.0)))
        );

        let layout = session.layout();
        // Root expanded: root + cat visible, sub still collapsed away.
        assert_eq!(layout.nodes.len(), 2);
        assert_eq!(layout.edges.len(), 1);
    }

    #[test]
    fn interaction_before_load_never_saves() {
        let mut session = Session::new(tree(), MemoryStore::new());
        let now = Instant::now();
        session.dispatch(
            Message::ToggleNode {
                node_id: "root".to_string(),
            },
            now,
        );
        assert!(!session.poll(now + Duration::from_secs(10)));
        assert_eq!(session.store().save_count(), 0);
    }

    #[test]
    fn resolve_node_finds_tree_data() {
        let session = Session::new(tree(), MemoryStore::new());
        assert_eq!(session.resolve_node("sub").unwrap().label, "Sub");
        assert!(session.resolve_node("nope").is_none());
    }
}
