//! Settings store seam.
//!
//! The engine never talks HTTP itself; the host supplies a [`SettingsStore`]
//! backed by whatever transport it has (the console backend's
//! `/canvas-settings` endpoints in production). [`MemoryStore`] is the
//! transport-free reference implementation used in tests and demos.

use thiserror::Error;

use crate::models::CanvasSettings;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings transport failed: {0}")]
    Transport(String),
    #[error("malformed settings document: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub trait SettingsStore {
    /// Fetch the persisted document. `Ok(None)` means no document exists yet.
    fn load(&self) -> Result<Option<CanvasSettings>, StoreError>;

    /// Persist the full document, overwriting whatever was stored before.
    fn save(&mut self, settings: &CanvasSettings) -> Result<(), StoreError>;

    /// Best-effort write that may outlive the caller (sendBeacon-style).
    /// Hosts without such a primitive fall back to a plain save with the
    /// outcome ignored.
    fn save_fire_and_forget(&mut self, settings: &CanvasSettings) {
        if let Err(e) = self.save(settings) {
            log::warn!("fire-and-forget save failed: {}", e);
        }
    }
}

/// In-memory store keeping the serialized JSON document, so saves and loads
/// exercise the real wire shape.
#[derive(Default)]
pub struct MemoryStore {
    document: Option<String>,
    save_count: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many saves have been issued; used to assert debounce coalescing.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<CanvasSettings>, StoreError> {
        match &self.document {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, settings: &CanvasSettings) -> Result<(), StoreError> {
        self.document = Some(serde_json::to_string(settings)?);
        self.save_count += 1;
        Ok(())
    }
}
