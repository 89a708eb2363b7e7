use leptos::*;

use crate::{model::WindowId, registry::WindowRegistryEntry};

#[component]
/// Desktop launcher icon. First click selects, a second click (or double-click) opens.
pub(super) fn DesktopIcon(
    entry: WindowRegistryEntry,
    selected: RwSignal<Option<WindowId>>,
    on_open: Callback<WindowId>,
) -> impl IntoView {
    let window_id = entry.id.clone();
    let is_selected = {
        let window_id = window_id.clone();
        move || selected.with(|current| current.as_ref() == Some(&window_id))
    };

    let click = {
        let window_id = window_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            if selected.get_untracked().as_ref() == Some(&window_id) {
                on_open.call(window_id.clone());
            } else {
                selected.set(Some(window_id.clone()));
            }
        }
    };
    let dblclick = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        on_open.call(window_id.clone());
    };

    view! {
        <button
            type="button"
            class="pc-icon"
            class:selected=is_selected
            data-window-id=entry.id.to_string()
            on:click=click
            on:dblclick=dblclick
        >
            <img class="pc-icon-image" src=entry.icon alt="" />
            <span class="pc-icon-label">{entry.title}</span>
        </button>
    }
}
