use leptos::*;

use crate::{model::WindowId, runtime_context::use_interface_runtime, windows};

#[component]
/// Frame around one active window's contents.
pub(super) fn InterfaceWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_interface_runtime();
    let title = runtime
        .registry
        .get(window_id.as_str())
        .map(|entry| entry.title.clone())
        .unwrap_or_else(|| window_id.to_string());
    let body = windows::render_window_contents(&window_id).unwrap_or_else(|| {
        view! { <div class="pc-window-missing">"Window not found"</div> }.into_view()
    });

    let close = {
        let window_id = window_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            runtime.close_window(window_id.clone());
        }
    };

    view! {
        <section
            class="pc-window"
            data-window-id=window_id.to_string()
            on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
        >
            <header class="pc-window-titlebar">
                <span class="pc-window-title">{title}</span>
                <button type="button" class="pc-window-close" aria-label="Close" on:click=close>
                    "×"
                </button>
            </header>
            <div class="pc-window-body">{body}</div>
        </section>
    }
}
