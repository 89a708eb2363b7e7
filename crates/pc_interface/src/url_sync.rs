//! One-shot hydration of window-manager state from the page URL.
//!
//! `activeWindows` and `allWindows` are read once on mount. Tokens are matched exactly against
//! the registry, so this is the only place untrusted ids enter the system and nothing outside the
//! registry gets through.

use url::form_urlencoded;

use crate::{
    model::{WindowId, WindowManagerSnapshot},
    reducer::InterfaceAction,
    registry::WindowRegistry,
};

/// Query parameter listing visible windows, bottom to top.
pub const ACTIVE_WINDOWS_PARAM: &str = "activeWindows";
/// Query parameter listing instantiated windows.
pub const ALL_WINDOWS_PARAM: &str = "allWindows";

/// Raw (decoded, unfiltered) window lists found in a query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowQuery {
    /// Decoded `activeWindows` value.
    pub active_windows: Option<String>,
    /// Decoded `allWindows` value.
    pub all_windows: Option<String>,
}

impl WindowQuery {
    /// Parses a `location.search` string. A leading `?` is optional.
    ///
    /// Repeated parameters keep their first value.
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            let slot = match key.as_ref() {
                ACTIVE_WINDOWS_PARAM => &mut parsed.active_windows,
                ALL_WINDOWS_PARAM => &mut parsed.all_windows,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        parsed
    }

    /// Returns `true` when neither parameter was present.
    pub fn is_empty(&self) -> bool {
        self.active_windows.is_none() && self.all_windows.is_none()
    }
}

/// Splits a comma-separated list and keeps registered ids, first occurrence only.
pub fn filter_window_list(raw: Option<&str>, registry: &WindowRegistry) -> Vec<WindowId> {
    let mut ids: Vec<WindowId> = Vec::new();
    for token in raw.unwrap_or_default().split(',') {
        if let Some(id) = registry.resolve(token) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    ids
}

/// Builds the single `ReplaceWindows` action for a query, or `None` when neither parameter is
/// present.
///
/// Active ids missing from the history list are appended to it so the hydrated state satisfies
/// `active ⊆ all`.
pub fn hydration_action(query: &WindowQuery, registry: &WindowRegistry) -> Option<InterfaceAction> {
    if query.is_empty() {
        return None;
    }

    let active_windows = filter_window_list(query.active_windows.as_deref(), registry);
    let mut all_windows = filter_window_list(query.all_windows.as_deref(), registry);
    for id in &active_windows {
        if !all_windows.contains(id) {
            all_windows.push(id.clone());
        }
    }

    Some(InterfaceAction::ReplaceWindows {
        active_windows,
        all_windows,
    })
}

/// Formats a window list the way [`filter_window_list`] reads it.
pub fn format_window_list(ids: &[WindowId]) -> String {
    ids.iter()
        .map(WindowId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds a query string (with leading `?`) that hydrates back into `snapshot`.
pub fn share_query(snapshot: &WindowManagerSnapshot) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(ALL_WINDOWS_PARAM, &format_window_list(&snapshot.all_windows))
        .append_pair(
            ACTIVE_WINDOWS_PARAM,
            &format_window_list(&snapshot.active_windows),
        )
        .finish();
    format!("?{query}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::WindowManagerState, reducer::reduce_window_manager, registry::test_registry,
    };

    fn ids(raw: &[&str]) -> Vec<WindowId> {
        raw.iter().copied().map(WindowId::new).collect()
    }

    fn hydrate(query: &str) -> WindowManagerState {
        let registry = test_registry();
        let mut state = WindowManagerState::default();
        if let Some(action) = hydration_action(&WindowQuery::parse(query), &registry) {
            reduce_window_manager(&mut state, &registry, action).expect("replace accepted");
        }
        state
    }

    #[test]
    fn bogus_tokens_are_dropped_from_both_lists() {
        let state = hydrate("?allWindows=profile,skills,bogus&activeWindows=skills,bogus");
        assert_eq!(state.all_windows(), ids(&["profile", "skills"]).as_slice());
        assert_eq!(state.active_windows(), ids(&["skills"]).as_slice());
    }

    #[test]
    fn missing_parameters_leave_state_empty() {
        assert_eq!(hydrate(""), WindowManagerState::default());
        assert_eq!(hydrate("?pos=1,2,3"), WindowManagerState::default());
        assert_eq!(
            hydration_action(&WindowQuery::parse("?pos=1,2,3"), &test_registry()),
            None
        );
    }

    #[test]
    fn percent_encoded_commas_are_decoded() {
        let state = hydrate("allWindows=profile%2Cskills&activeWindows=profile");
        assert_eq!(state.all_windows(), ids(&["profile", "skills"]).as_slice());
        assert_eq!(state.active_windows(), ids(&["profile"]).as_slice());
    }

    #[test]
    fn active_windows_without_history_are_added_to_history() {
        let state = hydrate("?activeWindows=skills,profile");
        assert_eq!(state.active_windows(), ids(&["skills", "profile"]).as_slice());
        assert_eq!(state.all_windows(), ids(&["skills", "profile"]).as_slice());
    }

    #[test]
    fn empty_parameter_hydrates_to_empty_lists() {
        assert_eq!(
            hydration_action(&WindowQuery::parse("?allWindows="), &test_registry()),
            Some(InterfaceAction::ReplaceWindows {
                active_windows: Vec::new(),
                all_windows: Vec::new(),
            })
        );
    }

    #[test]
    fn duplicate_and_unnormalized_tokens_are_filtered() {
        let registry = test_registry();
        assert_eq!(
            filter_window_list(Some("skills,,skills, profile,PROFILE,profile"), &registry),
            ids(&["skills", "profile"])
        );
    }

    #[test]
    fn first_occurrence_of_repeated_parameter_wins() {
        let query = WindowQuery::parse("?allWindows=profile&allWindows=skills");
        assert_eq!(query.all_windows.as_deref(), Some("profile"));
    }

    #[test]
    fn share_query_hydrates_to_the_same_snapshot() {
        let snapshot = WindowManagerSnapshot {
            all_windows: ids(&["profile", "skills"]),
            active_windows: ids(&["skills"]),
        };
        let query = share_query(&snapshot);
        assert_eq!(query, "?allWindows=profile%2Cskills&activeWindows=skills");
        assert_eq!(hydrate(&query).snapshot(), snapshot);
    }

    #[test]
    fn formatted_lists_parse_back_to_the_same_ids() {
        let registry = test_registry();
        let list = ids(&["skills", "profile"]);
        assert_eq!(format_window_list(&list), "skills,profile");
        assert_eq!(
            filter_window_list(Some(&format_window_list(&list)), &registry),
            list
        );
    }
}
