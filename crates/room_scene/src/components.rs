//! Leptos rendering of the room tree.

use std::{f64::consts::PI, time::Duration};

use leptos::*;

use crate::{
    camera::{parse_pos_param, save_camera_position},
    catalog::builtin_scene,
    fan::{BladeSpin, FanSpeed},
    reducer::{reduce_room, RoomAction, RoomEffect, RoomState},
    scene::{node_path, ContentTheme, MeshAction, MeshNode, SceneNode},
};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const ORBIT_STEP: f64 = PI / 8.0;

#[derive(Clone, Copy)]
struct RoomHandles {
    state: ReadSignal<RoomState>,
    dispatch: Callback<RoomAction>,
    spin: RwSignal<BladeSpin>,
}

fn run_room_effect(effect: RoomEffect, on_enter_pc: Callback<()>) {
    match effect {
        RoomEffect::PersistCamera(position) => {
            if let Err(err) =
                save_camera_position(&platform_host_web::key_value_store(), position)
            {
                logging::warn!("failed to persist camera position: {err}");
            }
        }
        RoomEffect::OpenInterface => on_enter_pc.call(()),
    }
}

#[component]
/// Interactive room. Restores the camera from `?pos=x,y,z` once, then clears the query string.
pub fn RoomView(
    /// Invoked after the camera is stored when the visitor logs into the PC.
    #[prop(into)]
    on_enter_pc: Callback<()>,
) -> impl IntoView {
    let scene = builtin_scene();
    let (state, set_state) = create_signal(RoomState::default());

    let dispatch = Callback::new(move |action: RoomAction| {
        let previous = state.get_untracked();
        let mut next = previous.clone();
        match reduce_room(&mut next, scene, action) {
            Ok(effects) => {
                if next != previous {
                    set_state.set(next);
                }
                for effect in effects {
                    run_room_effect(effect, on_enter_pc);
                }
            }
            Err(err) => logging::warn!("room rejected action: {err}"),
        }
    });

    if let Some(position) = parse_pos_param(&platform_host_web::current_query_string()) {
        dispatch.call(RoomAction::PlaceCamera(position));
    }
    if let Err(err) = platform_host_web::clear_query_string() {
        logging::warn!("failed to reset room query: {err}");
    }

    let spin = create_rw_signal(BladeSpin::default());
    match set_interval_with_handle(
        move || {
            let target = state.with_untracked(|state| state.fan_speed);
            spin.update(|spin| spin.advance(target));
        },
        FRAME_INTERVAL,
    ) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("fan animation interval failed: {err:?}"),
    }

    let handles = RoomHandles {
        state,
        dispatch,
        spin,
    };
    let stage_style = move || {
        state.with(|state| format!("transform: rotateY({:.4}rad);", -state.camera.yaw()))
    };
    let hover_text = move || {
        state.with(|state| {
            state
                .hovered
                .as_deref()
                .and_then(|path| scene.mesh_at(path))
                .and_then(|mesh| mesh.hovered_content.clone())
        })
    };

    view! {
        <div class="room" on:click=move |_| dispatch.call(RoomAction::ClearSelection)>
            <InfoBanner handles=handles />
            <div class="room-stage" style=stage_style>
                {render_nodes(scene.roots(), String::new(), handles)}
            </div>
            <p class="room-hover">{hover_text}</p>
            <div class="room-camera">
                <button
                    type="button"
                    aria-label="Orbit left"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        dispatch.call(RoomAction::OrbitCamera { radians: -ORBIT_STEP });
                    }
                >
                    "<"
                </button>
                <button
                    type="button"
                    aria-label="Orbit right"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        dispatch.call(RoomAction::OrbitCamera { radians: ORBIT_STEP });
                    }
                >
                    ">"
                </button>
            </div>
        </div>
    }
}

fn render_nodes(nodes: &'static [SceneNode], parent: String, handles: RoomHandles) -> View {
    nodes
        .iter()
        .map(|node| match node {
            SceneNode::Group {
                group_key,
                children,
            } => {
                let path = node_path(&parent, group_key);
                view! {
                    <div class="room-group" data-group=group_key.clone()>
                        {render_nodes(children, path, handles)}
                    </div>
                }
                .into_view()
            }
            SceneNode::Mesh(mesh) => {
                let path = node_path(&parent, &mesh.model_key);
                view! { <RoomMesh mesh=mesh path=path handles=handles /> }.into_view()
            }
        })
        .collect_view()
}

#[component]
fn RoomMesh(mesh: &'static MeshNode, path: String, handles: RoomHandles) -> impl IntoView {
    let RoomHandles {
        state,
        dispatch,
        spin,
    } = handles;

    let is_selected = {
        let path = path.clone();
        move || state.with(|state| state.selected.as_deref() == Some(path.as_str()))
    };
    let click = {
        let path = path.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            dispatch.call(RoomAction::ClickMesh { path: path.clone() });
        }
    };
    let enter = {
        let path = path.clone();
        move |_: web_sys::MouseEvent| {
            dispatch.call(RoomAction::HoverMesh {
                path: Some(path.clone()),
            })
        }
    };
    let style = move || {
        if mesh.fan_blades {
            spin.with(BladeSpin::style)
        } else {
            String::new()
        }
    };

    view! {
        <button
            type="button"
            class="room-mesh"
            class:selected=is_selected
            class:labeled=mesh.is_labeled()
            data-model=mesh.model_key.clone()
            data-path=path
            style=style
            on:click=click
            on:mouseenter=enter
            on:mouseleave=move |_| dispatch.call(RoomAction::HoverMesh { path: None })
        >
            {mesh.label()}
        </button>
    }
}

#[component]
fn InfoBanner(handles: RoomHandles) -> impl IntoView {
    let RoomHandles {
        state, dispatch, ..
    } = handles;
    let scene = builtin_scene();
    let selected_mesh = move || {
        state.with(|state| state.selected.as_deref().and_then(|path| scene.mesh_at(path)))
    };

    move || {
        selected_mesh().map(|mesh| {
            let offers_login = mesh.action == Some(MeshAction::LogIntoPc);
            view! {
                <div
                    class="info-banner"
                    class:dark=mesh.content_theme == ContentTheme::Dark
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <button
                        type="button"
                        class="info-banner-close"
                        aria-label="Close"
                        on:click=move |_| dispatch.call(RoomAction::ClearSelection)
                    >
                        "x"
                    </button>
                    <span class="info-banner-text">{mesh.clicked_content.clone()}</span>
                    {mesh
                        .coming_soon
                        .then(|| view! { <span class="info-banner-soon">"Coming soon"</span> })}
                    {mesh.fan_blades.then(|| view! { <FanControls handles=handles /> })}
                    {offers_login
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="info-banner-login"
                                    on:click=move |_| dispatch.call(RoomAction::LogIntoPc)
                                >
                                    "Log into this PC"
                                </button>
                            }
                        })}
                </div>
            }
        })
    }
}

#[component]
fn FanControls(handles: RoomHandles) -> impl IntoView {
    let RoomHandles {
        state, dispatch, ..
    } = handles;

    view! {
        <span class="info-banner-hint">{move || state.with(|state| state.fan_speed.hint())}</span>
        <div class="fan-controls">
            {FanSpeed::all()
                .map(|speed| {
                    view! {
                        <button
                            type="button"
                            class="fan-speed"
                            class:active=move || state.with(|state| state.fan_speed == speed)
                            on:click=move |_| {
                                dispatch.call(RoomAction::SetFanSpeed {
                                    speed: speed.get(),
                                })
                            }
                        >
                            {speed.to_string()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
