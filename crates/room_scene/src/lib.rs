//! Interactive room scene for the portfolio landing page.
//!
//! The room is described by a data-driven tree of mesh and group records
//! ([`SceneNode`]) loaded from an embedded asset, interpreted by a recursive
//! Leptos renderer ([`RoomView`]). Interaction state (selection, fan speed)
//! flows through [`reduce_room`], and the camera position survives the trip
//! into the simulated PC through a [`platform_host::KeyValueStore`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod camera;
mod catalog;
pub mod components;
pub mod fan;
pub mod reducer;
pub mod scene;

pub use camera::{
    load_camera_position, parse_pos_param, return_href, save_camera_position, CameraPosition,
    CAMERA_POSITION_KEY, DEFAULT_CAMERA_POSITION, POS_PARAM,
};
pub use catalog::builtin_scene;
pub use components::RoomView;
pub use fan::{BladeSpin, FanSpeed};
pub use reducer::{reduce_room, RoomAction, RoomEffect, RoomError, RoomState};
pub use scene::{ContentTheme, MeshAction, MeshNode, SceneError, SceneNode, SceneTree};
