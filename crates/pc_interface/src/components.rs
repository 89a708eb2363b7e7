//! PC interface shell: status bar, desktop icon grid, window layer, and taskbar.

mod icon;
mod taskbar;
mod window;

use leptos::*;

use self::{icon::DesktopIcon, taskbar::Taskbar, window::InterfaceWindow};
use crate::{
    icon_grid::{compute_icon_grid, ContainerSize},
    model::WindowId,
    runtime_context::use_interface_runtime,
    url_sync::share_query,
};

/// Registry id of the icon that leaves the PC.
pub const SHUTDOWN_WINDOW_ID: &str = "shutdown";
/// Viewport width below which the status bar is hidden.
const SMALL_VIEWPORT_MAX_WIDTH: i32 = 640;

fn measure(element: &web_sys::Element) -> ContainerSize {
    ContainerSize {
        width: element.client_width(),
        height: element.client_height(),
    }
}

#[component]
/// Renders the simulated desktop. Must be mounted inside [`crate::InterfaceProvider`].
pub fn Interface(
    /// Invoked when the shutdown icon is opened.
    on_shutdown: Callback<()>,
) -> impl IntoView {
    let runtime = use_interface_runtime();
    let selected_icon = create_rw_signal(None::<WindowId>);
    let grid_size = create_rw_signal(ContainerSize {
        width: 0,
        height: 0,
    });
    let viewport_width = create_rw_signal(platform_host_web::viewport_size().width);
    let grid_ref = create_node_ref::<html::Div>();

    grid_ref.on_load(move |element| grid_size.set(measure(&element)));

    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport_width.set(platform_host_web::viewport_size().width);
        if let Some(element) = grid_ref.get_untracked() {
            grid_size.set(measure(&element));
        }
    });
    on_cleanup(move || resize_listener.remove());

    let visible_icons: Vec<_> = runtime.registry.visible_entries().cloned().collect();
    // The shutdown icon is drawn after the registry loop.
    let icon_count = visible_icons.len() + 1;
    let grid_layout = create_memo(move |_| compute_icon_grid(grid_size.get(), icon_count));

    let open_icon = Callback::new(move |window_id: WindowId| {
        selected_icon.set(None);
        runtime.open_window(window_id);
    });
    let shutdown = Callback::new(move |_: WindowId| {
        selected_icon.set(None);
        on_shutdown.call(());
    });
    let shutdown_entry = runtime.registry.get(SHUTDOWN_WINDOW_ID).cloned();

    view! {
        <div
            class="pc-interface"
            data-ui-kind="pc-interface"
            on:click=move |_| selected_icon.set(None)
        >
            <Show when=move || { viewport_width.get() >= SMALL_VIEWPORT_MAX_WIDTH } fallback=|| ()>
                <div class="pc-status-bar" data-ui-kind="status-bar">
                    <span class="pc-status-title">"supTE OS"</span>
                    <a
                        class="pc-status-share"
                        href=move || share_query(&runtime.snapshot())
                        title="Link to this desktop"
                    >
                        "Share"
                    </a>
                </div>
            </Show>

            <div
                node_ref=grid_ref
                class="pc-icon-grid"
                data-ui-kind="icon-grid"
                style=move || grid_layout.get().style()
            >
                {visible_icons
                    .into_iter()
                    .map(|entry| {
                        view! { <DesktopIcon entry=entry selected=selected_icon on_open=open_icon /> }
                    })
                    .collect_view()}

                {shutdown_entry
                    .map(|entry| {
                        view! { <DesktopIcon entry=entry selected=selected_icon on_open=shutdown /> }
                    })}
            </div>

            <div class="pc-window-layer" data-ui-kind="window-layer">
                <For
                    each=move || runtime.state.with(|state| state.active_windows().to_vec())
                    key=|window_id| window_id.clone()
                    children=move |window_id| view! { <InterfaceWindow window_id=window_id /> }
                />
            </div>

            <Taskbar />
        </div>
    }
}
