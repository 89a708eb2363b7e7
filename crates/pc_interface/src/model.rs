//! Window identifiers and the window-manager state container.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque window identifier drawn from the window registry (for example `"profile"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Wraps a raw id. Registry membership is checked by the reducer, not here.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Raw id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Window-manager state: instantiation history plus the visible stacking order.
///
/// Both sequences are only mutated through [`crate::reducer::reduce_window_manager`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowManagerState {
    all_windows: Vec<WindowId>,
    active_windows: Vec<WindowId>,
}

impl WindowManagerState {
    /// Every window instantiated this session, in first-open order.
    pub fn all_windows(&self) -> &[WindowId] {
        &self.all_windows
    }

    /// Visible windows, bottom to top.
    pub fn active_windows(&self) -> &[WindowId] {
        &self.active_windows
    }

    /// Returns whether `window_id` is currently visible.
    pub fn is_active(&self, window_id: &WindowId) -> bool {
        self.active_windows.contains(window_id)
    }

    /// Returns whether `window_id` was instantiated this session.
    pub fn was_opened(&self, window_id: &WindowId) -> bool {
        self.all_windows.contains(window_id)
    }

    /// Read-only copy of both sequences.
    pub fn snapshot(&self) -> WindowManagerSnapshot {
        WindowManagerSnapshot {
            all_windows: self.all_windows.clone(),
            active_windows: self.active_windows.clone(),
        }
    }

    pub(crate) fn open(&mut self, window_id: WindowId) {
        if !self.all_windows.contains(&window_id) {
            self.all_windows.push(window_id.clone());
        }
        if !self.active_windows.contains(&window_id) {
            self.active_windows.push(window_id);
        }
    }

    pub(crate) fn close(&mut self, window_id: &WindowId) {
        self.active_windows.retain(|id| id != window_id);
    }

    pub(crate) fn replace(&mut self, active_windows: Vec<WindowId>, all_windows: Vec<WindowId>) {
        self.active_windows = active_windows;
        self.all_windows = all_windows;
    }
}

/// Read-only copy of [`WindowManagerState`] handed to rendering surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowManagerSnapshot {
    /// Instantiation history.
    pub all_windows: Vec<WindowId>,
    /// Visible windows, bottom to top.
    pub active_windows: Vec<WindowId>,
}
