//! In-memory canvas session state.
//!
//! Owns the position store, expansion set and sticky note store for one
//! session. No concurrent writers exist within a session; cross-session
//! conflicts resolve last-write-wins at the settings store.

use std::collections::{HashMap, HashSet};

use crate::models::{CanvasSettings, NodeSettingsEntry, Point, StickyNote, StickyNotePatch};

pub struct ScrapbookState {
    /// Per-node coordinates. `None` marks a node restored from settings as
    /// expanded but never positioned. Entries for removed nodes are never
    /// deleted; stale ones are simply unused.
    pub positions: HashMap<String, Option<Point>>,
    /// Ids whose children are currently visible.
    pub expansion: HashSet<String>,
    pub sticky_notes: Vec<StickyNote>,
    pub zoom: f64,
    pub viewport: Point,
    pub selected_node_id: Option<String>,
    // Unrelated column/property configuration rides along in the settings
    // document; the engine persists it untouched.
    pub custom_properties: Vec<serde_json::Value>,
    pub column_config: Vec<serde_json::Value>,
}

impl Default for ScrapbookState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrapbookState {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            expansion: HashSet::new(),
            sticky_notes: Vec::new(),
            zoom: 1.0,
            viewport: Point::default(),
            selected_node_id: None,
            custom_properties: Vec::new(),
            column_config: Vec::new(),
        }
    }

    /// Flip a node's expansion state. Returns true when the node is expanded
    /// afterwards.
    pub fn toggle_expansion(&mut self, node_id: &str) -> bool {
        if self.expansion.remove(node_id) {
            false
        } else {
            self.expansion.insert(node_id.to_string());
            true
        }
    }

    pub fn set_node_position(&mut self, node_id: &str, position: Point) {
        self.positions.insert(node_id.to_string(), Some(position));
    }

    pub fn select_node(&mut self, node_id: Option<String>) {
        self.selected_node_id = node_id;
    }

    /// Create a sticky note at `position` with default size and content.
    pub fn add_sticky_note(&mut self, position: Point) -> &StickyNote {
        let note = StickyNote::new(position, chrono::Utc::now().timestamp_millis());
        self.sticky_notes.push(note);
        self.sticky_notes.last().expect("note just pushed")
    }

    /// Apply a partial update to a note. Returns false for unknown ids.
    pub fn update_sticky_note(&mut self, note_id: &str, patch: &StickyNotePatch) -> bool {
        let Some(note) = self.sticky_notes.iter_mut().find(|n| n.id == note_id) else {
            return false;
        };
        if let Some(content) = &patch.content {
            note.content = content.clone();
        }
        if let Some(color) = patch.color {
            note.color = color;
        }
        if let Some(text_align) = patch.text_align {
            note.text_align = text_align;
        }
        if let Some(position) = patch.position {
            note.position = position;
        }
        if let Some(width) = patch.width {
            note.width = width;
        }
        if let Some(height) = patch.height {
            note.height = height;
        }
        true
    }

    pub fn remove_sticky_note(&mut self, note_id: &str) -> bool {
        let before = self.sticky_notes.len();
        self.sticky_notes.retain(|n| n.id != note_id);
        self.sticky_notes.len() != before
    }

    /// Merge a loaded settings document into this state.
    ///
    /// Every field is optional: positions are recorded unconditionally
    /// (including null ones), expansion comes from the per-node flag, the
    /// viewport is restored only when zoom and viewport are both present, and
    /// missing sections leave the in-memory defaults alone.
    pub fn apply_settings(&mut self, settings: &CanvasSettings) {
        for entry in &settings.nodes {
            self.positions.insert(entry.id.clone(), entry.position);
            if entry.expanded {
                self.expansion.insert(entry.id.clone());
            }
        }
        if let (Some(zoom), Some(viewport)) = (settings.zoom, settings.viewport) {
            self.zoom = zoom;
            self.viewport = viewport;
        }
        if !settings.sticky_notes.is_empty() {
            self.sticky_notes = settings.sticky_notes.clone();
        }
        if !settings.custom_properties.is_empty() {
            self.custom_properties = settings.custom_properties.clone();
        }
        if !settings.column_config.is_empty() {
            self.column_config = settings.column_config.clone();
        }
    }

    /// Reconstruct the full settings document from current state.
    ///
    /// The remote store overwrites wholesale, so this must be the complete
    /// picture: nodes that are expanded but currently unpositioned (e.g. in a
    /// collapsed branch) still get an entry with a null position, otherwise a
    /// future session would lose their expansion state. Entries are sorted by
    /// id so identical state serializes identically.
    pub fn export_settings(&self) -> CanvasSettings {
        let mut ids: Vec<&String> = self
            .positions
            .keys()
            .chain(self.expansion.iter())
            .collect();
        ids.sort();
        ids.dedup();

        let nodes = ids
            .into_iter()
            .map(|id| NodeSettingsEntry {
                id: id.clone(),
                position: self.positions.get(id).copied().flatten(),
                expanded: self.expansion.contains(id),
            })
            .collect();

        CanvasSettings {
            nodes,
            zoom: Some(self.zoom),
            viewport: Some(self.viewport),
            sticky_notes: self.sticky_notes.clone(),
            custom_properties: self.custom_properties.clone(),
            column_config: self.column_config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StickyColor;

    #[test]
    fn settings_round_trip_preserves_expansion_and_positions() {
        let mut state = ScrapbookState::new();
        state.set_node_position("a", Point::new(1.0, 2.0));
        state.expansion.insert("a".to_string());
        // Expanded but never positioned.
        state.expansion.insert("hidden".to_string());
        state.zoom = 1.5;
        state.viewport = Point::new(-40.0, 12.0);

        let doc = state.export_settings();
        let json = serde_json::to_string(&doc).unwrap();
        let reloaded: CanvasSettings = serde_json::from_str(&json).unwrap();

        let mut fresh = ScrapbookState::new();
        fresh.apply_settings(&reloaded);

        assert_eq!(fresh.positions.get("a"), Some(&Some(Point::new(1.0, 2.0))));
        assert_eq!(fresh.positions.get("hidden"), Some(&None));
        assert_eq!(fresh.expansion, state.expansion);
        assert_eq!(fresh.zoom, 1.5);
        assert_eq!(fresh.viewport, Point::new(-40.0, 12.0));
    }

    #[test]
    fn export_is_deterministic() {
        let mut state = ScrapbookState::new();
        state.expansion.insert("b".to_string());
        state.set_node_position("c", Point::new(3.0, 3.0));
        state.expansion.insert("a".to_string());

        let first = serde_json::to_string(&state.export_settings()).unwrap();
        let second = serde_json::to_string(&state.export_settings()).unwrap();
        assert_eq!(first, second);

        let ids: Vec<_> = state.export_settings().nodes.iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn apply_ignores_missing_sections() {
        let mut state = ScrapbookState::new();
        state.sticky_notes.push(StickyNote::new(Point::default(), 7));
        state.zoom = 2.0;

        state.apply_settings(&CanvasSettings::default());
        assert_eq!(state.sticky_notes.len(), 1);
        assert_eq!(state.zoom, 2.0);
    }

    #[test]
    fn viewport_needs_both_fields() {
        let mut state = ScrapbookState::new();
        let settings = CanvasSettings {
            zoom: Some(3.0),
            viewport: None,
            ..Default::default()
        };
        state.apply_settings(&settings);
        assert_eq!(state.zoom, 1.0);
    }

    #[test]
    fn sticky_note_lifecycle() {
        let mut state = ScrapbookState::new();
        let id = state.add_sticky_note(Point::new(9.0, 9.0)).id.clone();
        assert!(id.starts_with("sticky-"));

        let patch = StickyNotePatch {
            content: Some("remember this".to_string()),
            color: Some(StickyColor::Yellow),
            ..Default::default()
        };
        assert!(state.update_sticky_note(&id, &patch));
        assert_eq!(state.sticky_notes[0].content, "remember this");
        assert_eq!(state.sticky_notes[0].color, StickyColor::Yellow);
        // Untouched fields keep their defaults.
        assert_eq!(state.sticky_notes[0].width, 200.0);

        assert!(!state.update_sticky_note("sticky-unknown", &patch));
        assert!(state.remove_sticky_note(&id));
        assert!(state.sticky_notes.is_empty());
    }

    #[test]
    fn toggle_expansion_flips() {
        let mut state = ScrapbookState::new();
        assert!(state.toggle_expansion("n"));
        assert!(state.expansion.contains("n"));
        assert!(!state.toggle_expansion("n"));
        assert!(!state.expansion.contains("n"));
    }
}
