// src/messages.rs
//
// Interaction events reported by the host renderer, plus the side effects
// the reducer asks the session to perform.

use crate::models::{CanvasSettings, Point, StickyNotePatch};

#[derive(Debug, Clone)]
pub enum Message {
    /// The initial settings fetch finished. `None` means no prior document
    /// existed (or the fetch failed, which is treated the same way).
    SettingsLoaded(Option<CanvasSettings>),

    // Tree interaction
    ToggleNode { node_id: String },
    NodeDragStopped { node_id: String, x: f64, y: f64 },
    SelectNode(Option<String>),
    /// One-shot: expand everything, compute fresh coordinates for the whole
    /// tree and commit them into the position store.
    RunAutoLayout,

    // Canvas view controls
    PanZoomEnded { zoom: f64, viewport: Point },

    // Sticky notes
    AddStickyNote { position: Point },
    UpdateStickyNote { note_id: String, patch: StickyNotePatch },
    RemoveStickyNote { note_id: String },

    /// The view is going away; persist immediately, best effort.
    TeardownView,
}

/// Side effects to execute after the state update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Arm (or re-arm) the debounced save.
    ScheduleSave,
    /// Cancel any pending save and write the current state now,
    /// fire-and-forget.
    FlushSave,
    /// The visual output changed; the renderer should recompute.
    Redraw,
}
