//! Scrapbook canvas engine.
//!
//! Turns a hierarchical node tree into a positioned node-and-edge graph for a
//! manually tunable diagram canvas, and keeps the canvas state (positions,
//! expansion, sticky notes, viewport) synchronized with a remote settings
//! document.
//!
//! The crate is deliberately UI-free: a host renderer consumes the
//! [`canvas::layout::Layout`] output and feeds interaction events back in as
//! [`messages::Message`] values; the settings transport is abstracted behind
//! [`storage::SettingsStore`].

pub mod canvas;
pub mod constants;
pub mod file_tree;
pub mod messages;
pub mod models;
pub mod session;
pub mod state;
pub mod storage;
pub mod sync;
pub mod tree;
pub mod update;
