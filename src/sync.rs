//! Settings synchronizer.
//!
//! Sits between the session state and the [`SettingsStore`]: loads the
//! remote document once at session start, coalesces save bursts through a
//! single debounce deadline, and flushes synchronously at teardown.
//!
//! Time is passed in explicitly: the host's event loop calls
//! [`SettingsSync::poll`] from its own tick, which keeps the whole debounce
//! path deterministic and single-threaded.

use std::time::{Duration, Instant};

use crate::constants::SAVE_DEBOUNCE_MS;
use crate::models::CanvasSettings;
use crate::state::ScrapbookState;
use crate::storage::SettingsStore;

pub struct SettingsSync<S: SettingsStore> {
    store: S,
    window: Duration,
    deadline: Option<Instant>,
    loaded: bool,
}

impl<S: SettingsStore> SettingsSync<S> {
    pub fn new(store: S) -> Self {
        Self::with_window(store, Duration::from_millis(SAVE_DEBOUNCE_MS))
    }

    pub fn with_window(store: S, window: Duration) -> Self {
        Self {
            store,
            window,
            deadline: None,
            loaded: false,
        }
    }

    /// One-shot initial load.
    ///
    /// A failed or empty load degrades to "no prior settings" and still
    /// marks the synchronizer loaded: a broken fetch must not permanently
    /// block saving.
    pub fn load(&mut self) -> Option<CanvasSettings> {
        let settings = match self.store.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("settings load failed, starting from defaults: {}", e);
                None
            }
        };
        self.loaded = true;
        settings
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Arm the debounce. Re-arming cancels the previous deadline, so a burst
    /// of mutations collapses into one write after the idle window.
    ///
    /// Refused before the initial load has completed; saving an empty
    /// in-memory state would overwrite a previously saved document.
    pub fn schedule_save(&mut self, now: Instant) {
        if !self.loaded {
            log::debug!("save requested before initial load; ignored");
            return;
        }
        self.deadline = Some(now + self.window);
    }

    pub fn save_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire the pending save if its idle window has elapsed. Returns true
    /// when a write was attempted. Failures are logged, not retried; the
    /// next mutation re-arms the debounce with fresher state anyway.
    pub fn poll(&mut self, state: &ScrapbookState, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                let document = state.export_settings();
                match self.store.save(&document) {
                    Ok(()) => log::debug!("canvas settings saved ({} nodes)", document.nodes.len()),
                    Err(e) => log::warn!("canvas settings save failed: {}", e),
                }
                true
            }
            _ => false,
        }
    }

    /// Teardown path: drop any pending deadline and write the current state
    /// immediately through the fire-and-forget channel.
    pub fn flush(&mut self, state: &ScrapbookState) {
        self.deadline = None;
        if !self.loaded {
            return;
        }
        self.store.save_fire_and_forget(&state.export_settings());
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
