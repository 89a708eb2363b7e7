use leptos::*;

use crate::{model::WindowId, runtime_context::use_interface_runtime};

#[component]
/// Lists every window opened this session; closed ones can be reopened from here.
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_interface_runtime();

    view! {
        <nav class="pc-taskbar" data-ui-kind="taskbar">
            <For
                each=move || runtime.state.with(|state| state.all_windows().to_vec())
                key=|window_id| window_id.clone()
                children=move |window_id: WindowId| {
                    let title = runtime
                        .registry
                        .get(window_id.as_str())
                        .map(|entry| entry.title.clone())
                        .unwrap_or_else(|| window_id.to_string());
                    let is_active = {
                        let window_id = window_id.clone();
                        move || runtime.state.with(|state| state.is_active(&window_id))
                    };
                    let click = move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        runtime.open_window(window_id.clone());
                    };
                    view! {
                        <button type="button" class="pc-taskbar-item" class:active=is_active on:click=click>
                            {title}
                        </button>
                    }
                }
            />
        </nav>
    }
}
