//! Window-manager actions and transition logic.

use thiserror::Error;

use crate::{
    model::{WindowId, WindowManagerState},
    registry::WindowRegistry,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_window_manager`].
pub enum InterfaceAction {
    /// Instantiate (if needed) and show a window on top of the stack.
    ///
    /// Opening an already-visible window keeps its stack position.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Hide a window. Its instantiation record is kept for the session.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Overwrite both sequences. Callers must pass registered ids with `active ⊆ all`.
    ReplaceWindows {
        /// New visible stack, bottom to top.
        active_windows: Vec<WindowId>,
        /// New instantiation history.
        all_windows: Vec<WindowId>,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected actions. State is left untouched when one is returned.
pub enum ReducerError {
    /// The window id is not part of the registry.
    #[error("unknown window `{0}`")]
    UnknownWindow(WindowId),
}

/// Applies an [`InterfaceAction`] to the window-manager state.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownWindow`] when `OpenWindow` names an id outside `registry`.
pub fn reduce_window_manager(
    state: &mut WindowManagerState,
    registry: &WindowRegistry,
    action: InterfaceAction,
) -> Result<(), ReducerError> {
    match action {
        InterfaceAction::OpenWindow { window_id } => {
            if !registry.contains(window_id.as_str()) {
                return Err(ReducerError::UnknownWindow(window_id));
            }
            state.open(window_id);
        }
        InterfaceAction::CloseWindow { window_id } => {
            state.close(&window_id);
        }
        InterfaceAction::ReplaceWindows {
            active_windows,
            all_windows,
        } => {
            state.replace(active_windows, all_windows);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::WindowManagerSnapshot, registry::test_registry};

    fn ids(raw: &[&str]) -> Vec<WindowId> {
        raw.iter().copied().map(WindowId::new).collect()
    }

    fn apply(state: &mut WindowManagerState, action: InterfaceAction) {
        reduce_window_manager(state, &test_registry(), action).expect("action accepted");
    }

    fn open(state: &mut WindowManagerState, id: &str) {
        apply(
            state,
            InterfaceAction::OpenWindow {
                window_id: WindowId::new(id),
            },
        );
    }

    fn close(state: &mut WindowManagerState, id: &str) {
        apply(
            state,
            InterfaceAction::CloseWindow {
                window_id: WindowId::new(id),
            },
        );
    }

    #[test]
    fn open_appends_to_both_sequences() {
        let mut state = WindowManagerState::default();
        open(&mut state, "profile");
        open(&mut state, "skills");

        assert_eq!(state.all_windows(), ids(&["profile", "skills"]).as_slice());
        assert_eq!(state.active_windows(), ids(&["profile", "skills"]).as_slice());
    }

    #[test]
    fn reopening_active_window_keeps_stack_order() {
        let mut state = WindowManagerState::default();
        open(&mut state, "profile");
        open(&mut state, "skills");
        let before = state.clone();

        open(&mut state, "profile");
        open(&mut state, "profile");

        assert_eq!(state, before);
    }

    #[test]
    fn reopening_closed_window_moves_it_to_top_without_new_history() {
        let mut state = WindowManagerState::default();
        open(&mut state, "profile");
        open(&mut state, "skills");
        close(&mut state, "profile");
        open(&mut state, "profile");

        assert_eq!(state.active_windows(), ids(&["skills", "profile"]).as_slice());
        assert_eq!(state.all_windows(), ids(&["profile", "skills"]).as_slice());
    }

    #[test]
    fn close_keeps_history_and_is_idempotent() {
        let mut state = WindowManagerState::default();
        open(&mut state, "profile");
        open(&mut state, "skills");
        close(&mut state, "profile");

        assert_eq!(state.active_windows(), ids(&["skills"]).as_slice());
        assert_eq!(state.all_windows(), ids(&["profile", "skills"]).as_slice());

        let before = state.clone();
        close(&mut state, "profile");
        close(&mut state, "not-registered");
        assert_eq!(state, before);
    }

    #[test]
    fn unknown_window_is_rejected_and_state_unchanged() {
        let mut state = WindowManagerState::default();
        open(&mut state, "profile");
        let before = state.clone();

        let result = reduce_window_manager(
            &mut state,
            &test_registry(),
            InterfaceAction::OpenWindow {
                window_id: WindowId::new("shutdown-like-unknown-id"),
            },
        );

        assert_eq!(
            result,
            Err(ReducerError::UnknownWindow(WindowId::new(
                "shutdown-like-unknown-id"
            )))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn replace_overwrites_both_sequences() {
        let mut state = WindowManagerState::default();
        open(&mut state, "skills");
        apply(
            &mut state,
            InterfaceAction::ReplaceWindows {
                active_windows: ids(&["profile"]),
                all_windows: ids(&["profile", "skills"]),
            },
        );

        assert_eq!(
            state.snapshot(),
            WindowManagerSnapshot {
                active_windows: ids(&["profile"]),
                all_windows: ids(&["profile", "skills"]),
            }
        );
    }

    #[test]
    fn open_close_sequences_keep_active_within_history() {
        let script = [
            ("open", "skills"),
            ("open", "profile"),
            ("close", "skills"),
            ("open", "shutdown"),
            ("close", "profile"),
            ("open", "skills"),
            ("close", "shutdown"),
            ("open", "profile"),
            ("close", "skills"),
        ];
        let mut state = WindowManagerState::default();
        for (op, id) in script {
            match op {
                "open" => open(&mut state, id),
                _ => close(&mut state, id),
            }
            for active in state.active_windows() {
                assert!(state.was_opened(active), "{active} active without history");
            }
            let mut deduped = state.active_windows().to_vec();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), state.active_windows().len());
        }
        assert_eq!(state.active_windows(), ids(&["profile"]).as_slice());
        assert_eq!(
            state.all_windows(),
            ids(&["skills", "profile", "shutdown"]).as_slice()
        );
    }
}
