//! Runtime provider and context wiring for the PC interface.
//!
//! This module owns the window-manager state container and its dispatch callback. Components
//! receive it through Leptos context and never write the state signal themselves.

use leptos::*;

use crate::{
    model::{WindowId, WindowManagerSnapshot, WindowManagerState},
    reducer::{reduce_window_manager, InterfaceAction},
    registry::WindowRegistry,
    url_sync::{hydration_action, WindowQuery},
};

#[derive(Clone, Copy)]
/// Leptos context for reading window-manager state and dispatching [`InterfaceAction`] values.
pub struct InterfaceRuntimeContext {
    /// Closed catalog every action is validated against.
    pub registry: &'static WindowRegistry,
    /// Reactive window-manager state. Read-only for consumers.
    pub state: ReadSignal<WindowManagerState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<InterfaceAction>,
}

impl InterfaceRuntimeContext {
    /// Sends an action through the reducer.
    pub fn dispatch_action(&self, action: InterfaceAction) {
        self.dispatch.call(action);
    }

    /// Dispatches [`InterfaceAction::OpenWindow`].
    pub fn open_window(&self, window_id: WindowId) {
        self.dispatch_action(InterfaceAction::OpenWindow { window_id });
    }

    /// Dispatches [`InterfaceAction::CloseWindow`].
    pub fn close_window(&self, window_id: WindowId) {
        self.dispatch_action(InterfaceAction::CloseWindow { window_id });
    }

    /// Tracked snapshot for rendering.
    pub fn snapshot(&self) -> WindowManagerSnapshot {
        self.state.with(WindowManagerState::snapshot)
    }
}

fn install_url_hydration(runtime: InterfaceRuntimeContext) {
    let query = WindowQuery::parse(&platform_host_web::current_query_string());
    if let Some(action) = hydration_action(&query, runtime.registry) {
        runtime.dispatch_action(action);
        logging::log!(
            "hydrated windows from url: {:?}",
            runtime.state.with_untracked(WindowManagerState::snapshot)
        );
    }
}

#[component]
/// Provides [`InterfaceRuntimeContext`] to descendants and hydrates state from the URL once.
pub fn InterfaceProvider(
    /// Registry override; defaults to the build-time catalog.
    #[prop(optional)]
    registry: Option<&'static WindowRegistry>,
    children: Children,
) -> impl IntoView {
    let registry = registry.unwrap_or_else(WindowRegistry::builtin);
    let (state, set_state) = create_signal(WindowManagerState::default());

    let dispatch = Callback::new(move |action: InterfaceAction| {
        let previous = state.get_untracked();
        let mut next = previous.clone();
        match reduce_window_manager(&mut next, registry, action) {
            Ok(()) => {
                if next != previous {
                    set_state.set(next);
                }
            }
            Err(err) => logging::warn!("window manager rejected action: {err}"),
        }
    });

    let runtime = InterfaceRuntimeContext {
        registry,
        state,
        dispatch,
    };
    provide_context(runtime);
    install_url_hydration(runtime);

    children().into_view()
}

/// Returns the current [`InterfaceRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`InterfaceProvider`].
pub fn use_interface_runtime() -> InterfaceRuntimeContext {
    use_context::<InterfaceRuntimeContext>().expect("InterfaceRuntimeContext not provided")
}
