//! Static catalog of windows the simulated PC knows about.
//!
//! The catalog is generated at build time from `windows.manifest.toml` and parsed once. It is the
//! closed id domain every window-manager operation and URL hydration is checked against.

use std::sync::OnceLock;

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::WindowId;

include!(concat!(env!("OUT_DIR"), "/window_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Display metadata for one registered window.
pub struct WindowRegistryEntry {
    /// Stable id used in actions and query parameters.
    pub id: WindowId,
    /// Title shown in the window frame and taskbar.
    pub title: String,
    /// Icon asset URL for the desktop grid.
    pub icon: String,
    /// Hidden entries are registered but not drawn by the desktop icon loop.
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures while loading a window catalog.
pub enum RegistryError {
    /// The catalog payload is not valid JSON for [`WindowRegistryEntry`] records.
    #[error("window catalog is malformed: {0}")]
    Malformed(String),
    /// Two entries share an id.
    #[error("window catalog lists `{0}` more than once")]
    DuplicateId(WindowId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Ordered, immutable window catalog.
pub struct WindowRegistry {
    entries: Vec<WindowRegistryEntry>,
}

impl WindowRegistry {
    /// Builds a registry from entries, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateId`] when an id repeats.
    pub fn new(entries: Vec<WindowRegistryEntry>) -> Result<Self, RegistryError> {
        for (idx, entry) in entries.iter().enumerate() {
            if entries[..idx].iter().any(|prior| prior.id == entry.id) {
                return Err(RegistryError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parses a registry from catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or contains duplicate ids.
    pub fn from_catalog_json(raw: &str) -> Result<Self, RegistryError> {
        let entries: Vec<WindowRegistryEntry> =
            serde_json::from_str(raw).map_err(|e| RegistryError::Malformed(e.to_string()))?;
        Self::new(entries)
    }

    /// Returns the build-time catalog shipped with the crate.
    pub fn builtin() -> &'static WindowRegistry {
        static REGISTRY: OnceLock<WindowRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            WindowRegistry::from_catalog_json(WINDOW_CATALOG_JSON).unwrap_or_else(|err| {
                logging::error!("builtin window catalog rejected: {err}");
                WindowRegistry::default()
            })
        })
    }

    /// All entries in catalog order, hidden ones included.
    pub fn entries(&self) -> &[WindowRegistryEntry] {
        &self.entries
    }

    /// Entries drawn by the desktop icon loop, in catalog order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &WindowRegistryEntry> {
        self.entries.iter().filter(|entry| !entry.hidden)
    }

    /// Entry registered under `id`.
    pub fn get(&self, id: &str) -> Option<&WindowRegistryEntry> {
        self.entries.iter().find(|entry| entry.id.as_str() == id)
    }

    /// Returns whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Maps an untrusted token to a registered id.
    pub fn resolve(&self, token: &str) -> Option<WindowId> {
        self.get(token).map(|entry| entry.id.clone())
    }
}

#[cfg(test)]
pub(crate) fn test_registry() -> WindowRegistry {
    let entry = |id: &str, hidden: bool| WindowRegistryEntry {
        id: WindowId::new(id),
        title: id.to_uppercase(),
        icon: format!("/icons/{id}.png"),
        hidden,
    };
    WindowRegistry::new(vec![
        entry("profile", false),
        entry("skills", false),
        entry("shutdown", true),
    ])
    .expect("test registry")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_catalog_parses_in_manifest_order() {
        let ids: Vec<&str> = WindowRegistry::builtin()
            .entries()
            .iter()
            .map(|entry| entry.id.as_str())
            .collect();
        assert_eq!(ids, vec!["profile", "skills", "shutdown"]);
    }

    #[test]
    fn hidden_entries_are_registered_but_not_visible() {
        let registry = test_registry();
        assert!(registry.contains("shutdown"));
        let visible: Vec<&str> = registry
            .visible_entries()
            .map(|entry| entry.id.as_str())
            .collect();
        assert_eq!(visible, vec!["profile", "skills"]);
    }

    #[test]
    fn resolve_rejects_unknown_and_near_miss_tokens() {
        let registry = test_registry();
        assert_eq!(registry.resolve("skills"), Some(WindowId::new("skills")));
        assert_eq!(registry.resolve("Skills"), None);
        assert_eq!(registry.resolve(" skills"), None);
        assert_eq!(registry.resolve(""), None);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"[
            {"id": "profile", "title": "Profile", "icon": "/p.png"},
            {"id": "profile", "title": "Again", "icon": "/p.png"}
        ]"#;
        assert_eq!(
            WindowRegistry::from_catalog_json(raw),
            Err(RegistryError::DuplicateId(WindowId::new("profile")))
        );
    }

    #[test]
    fn malformed_catalog_is_reported() {
        assert!(matches!(
            WindowRegistry::from_catalog_json("{"),
            Err(RegistryError::Malformed(_))
        ));
    }
}
