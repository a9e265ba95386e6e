//! Canvas reducer.
//!
//! Pure state transition: applies one [`Message`] to the session state and
//! returns the side effects to run. Every mutation that must survive the
//! session schedules a save; the synchronizer coalesces the bursts.

use crate::canvas::layout::auto_layout;
use crate::messages::{Command, Message};
use crate::models::{Point, TreeNode};
use crate::state::ScrapbookState;
use crate::tree::expand_all;

pub fn update(state: &mut ScrapbookState, tree: &TreeNode, msg: Message) -> Vec<Command> {
    match msg {
        Message::SettingsLoaded(settings) => {
            if let Some(settings) = settings {
                state.apply_settings(&settings);
            }
            vec![Command::Redraw]
        }
        Message::ToggleNode { node_id } => {
            state.toggle_expansion(&node_id);
            vec![Command::Redraw, Command::ScheduleSave]
        }
        Message::NodeDragStopped { node_id, x, y } => {
            state.set_node_position(&node_id, Point::new(x, y));
            vec![Command::Redraw, Command::ScheduleSave]
        }
        Message::SelectNode(node_id) => {
            state.select_node(node_id);
            // Selection is presentation-only; nothing to persist.
            vec![Command::Redraw]
        }
        Message::RunAutoLayout => {
            // Auto-layout assumes full visibility, so expand everything
            // first, then commit the generated coordinates and fall back to
            // manual rendering.
            state.expansion = expand_all(tree);
            for (id, position) in auto_layout(tree) {
                state.positions.insert(id, Some(position));
            }
            vec![Command::Redraw, Command::ScheduleSave]
        }
        Message::PanZoomEnded { zoom, viewport } => {
            state.zoom = zoom;
            state.viewport = viewport;
            vec![Command::ScheduleSave]
        }
        Message::AddStickyNote { position } => {
            state.add_sticky_note(position);
            vec![Command::Redraw, Command::ScheduleSave]
        }
        Message::UpdateStickyNote { note_id, patch } => {
            if state.update_sticky_note(&note_id, &patch) {
                vec![Command::Redraw, Command::ScheduleSave]
            } else {
                log::warn!("update for unknown sticky note {}", note_id);
                vec![]
            }
        }
        Message::RemoveStickyNote { note_id } => {
            if state.remove_sticky_note(&note_id) {
                vec![Command::Redraw, Command::ScheduleSave]
            } else {
                vec![]
            }
        }
        Message::TeardownView => vec![Command::FlushSave],
    }
}
