//! Skills window: one physics ball per skill, with a shake button.

use std::{f64::consts::TAU, time::Duration};

use leptos::*;

use crate::physics::{radius_for_label, skill_color, PhysicsWorld};

/// Animation step interval (~60 fps).
const STEP_INTERVAL: Duration = Duration::from_millis(16);

/// One skill shown as a ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Display name.
    pub name: &'static str,
    /// Icon path under the site root.
    pub icon: &'static str,
}

const fn skill(name: &'static str, icon: &'static str) -> Skill {
    Skill { name, icon }
}

/// Skills in spawn order.
pub const SKILLS: &[Skill] = &[
    skill("Blender", "/skills/blender3d.png"),
    skill("CSS", "/skills/css.png"),
    skill("Express.js", "/skills/expressjs.png"),
    skill("Figma", "/skills/figma.png"),
    skill("Firebase", "/skills/firebase.png"),
    skill("Flutter", "/skills/flutter.png"),
    skill("Git", "/skills/git.png"),
    skill("GitHub", "/skills/github.png"),
    skill("HTML", "/skills/html.png"),
    skill("Jest", "/skills/jest.png"),
    skill("JavaScript", "/skills/js.png"),
    skill("Next.js", "/skills/nextjs.png"),
    skill("Node.js", "/skills/nodejs.png"),
    skill("Postman", "/skills/postman.png"),
    skill("Python", "/skills/python.png"),
    skill("React", "/skills/reactjs.png"),
    skill("Redux", "/skills/redux.png"),
    skill("Sass", "/skills/sass.png"),
    skill("Socket.IO", "/skills/socketio.png"),
    skill("Tailwind CSS", "/skills/tailwindcss.png"),
    skill("Three.js", "/skills/threejs.png"),
    skill("TypeScript", "/skills/typescript.png"),
];

fn random_unit() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0.5
    }
}

fn populate(world: &mut PhysicsWorld) {
    for skill in SKILLS {
        world.spawn(skill.name, radius_for_label(skill.name), random_unit());
    }
}

#[component]
pub(super) fn SkillsWindow() -> impl IntoView {
    let world = create_rw_signal(PhysicsWorld::new(0.0, 0.0));
    let scene_ref = create_node_ref::<html::Div>();

    scene_ref.on_load(move |scene| {
        let (width, height) = (f64::from(scene.client_width()), f64::from(scene.client_height()));
        world.update(|world| {
            world.resize(width, height);
            populate(world);
        });
    });

    let resize_listener = window_event_listener(ev::resize, move |_| {
        if let Some(scene) = scene_ref.get_untracked() {
            let (width, height) =
                (f64::from(scene.client_width()), f64::from(scene.client_height()));
            world.update(|world| world.resize(width, height));
        }
    });
    on_cleanup(move || resize_listener.remove());

    match set_interval_with_handle(move || world.update(PhysicsWorld::step), STEP_INTERVAL) {
        Ok(interval) => on_cleanup(move || interval.clear()),
        Err(err) => logging::warn!("skills animation interval failed: {err:?}"),
    }

    let shake = move |_| {
        world.update(|world| {
            let count = world.len();
            world.shake((0..count).map(|_| random_unit() * TAU));
        });
    };

    view! {
        <div class="skills-window">
            <button type="button" class="skills-shake" on:click=shake>
                "Shake"
            </button>
            <div node_ref=scene_ref class="skills-scene">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(idx, skill)| {
                        let position = move || {
                            world.with(|world| {
                                world.body(idx).map(|body| body.style()).unwrap_or_default()
                            })
                        };
                        view! {
                            <div
                                class="skills-body"
                                style=move || {
                                    format!(
                                        "{}background-color:{};",
                                        position(),
                                        skill_color(skill.name),
                                    )
                                }
                            >
                                <img class="skills-body-icon" src=skill.icon alt="" />
                                <span>{skill.name}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
