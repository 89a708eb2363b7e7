use std::sync::OnceLock;

use leptos::logging;

use crate::scene::SceneTree;

const ROOM_SCENE_JSON: &str = include_str!("../assets/room.scene.json");

/// Room tree embedded at build time, parsed once per page.
///
/// A malformed asset is logged and replaced by an empty room.
pub fn builtin_scene() -> &'static SceneTree {
    static SCENE: OnceLock<SceneTree> = OnceLock::new();
    SCENE.get_or_init(|| {
        SceneTree::from_json(ROOM_SCENE_JSON).unwrap_or_else(|err| {
            logging::error!("builtin room scene rejected: {err}");
            SceneTree::default()
        })
    })
}
