//! Room interaction state and its reducer.

use thiserror::Error;

use crate::{
    camera::CameraPosition,
    fan::FanSpeed,
    scene::{MeshAction, SceneTree},
};

/// Interaction state of the room scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomState {
    /// Path of the mesh whose banner is shown.
    pub selected: Option<String>,
    /// Path of the mesh under the pointer.
    pub hovered: Option<String>,
    /// Current desk fan speed.
    pub fan_speed: FanSpeed,
    /// Current camera position.
    pub camera: CameraPosition,
}

/// Room interactions.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomAction {
    /// A mesh was clicked.
    ClickMesh {
        /// Full mesh path.
        path: String,
    },
    /// The pointer entered a mesh, or left all meshes when `None`.
    HoverMesh {
        /// Full mesh path.
        path: Option<String>,
    },
    /// The banner was dismissed or empty space was clicked.
    ClearSelection,
    /// A fan speed button in the banner was pressed.
    SetFanSpeed {
        /// Requested speed step.
        speed: u8,
    },
    /// Rotate the camera around the room.
    OrbitCamera {
        /// Rotation in radians.
        radians: f64,
    },
    /// Place the camera, e.g. from the `pos` query parameter.
    PlaceCamera(CameraPosition),
    /// The "Log into this PC" button was pressed.
    LogIntoPc,
}

/// Side effects requested by [`reduce_room`] for the UI layer to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomEffect {
    /// Store the camera position for the return trip.
    PersistCamera(CameraPosition),
    /// Navigate to the simulated PC.
    OpenInterface,
}

/// Rejected room interactions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// The path does not name a mesh in the scene.
    #[error("unknown mesh `{0}`")]
    UnknownMesh(String),
    /// The fan has no such speed step.
    #[error("fan speed {0} is out of range")]
    InvalidFanSpeed(u8),
    /// The selected mesh does not offer a PC login.
    #[error("no pc login offered by the current selection")]
    LoginUnavailable,
}

/// Applies a [`RoomAction`] and returns the effects to run.
///
/// # Errors
///
/// Rejected actions leave `state` untouched.
pub fn reduce_room(
    state: &mut RoomState,
    scene: &SceneTree,
    action: RoomAction,
) -> Result<Vec<RoomEffect>, RoomError> {
    match action {
        RoomAction::ClickMesh { path } => {
            let mesh = scene
                .mesh_at(&path)
                .ok_or_else(|| RoomError::UnknownMesh(path.clone()))?;
            if let Some(MeshAction::SetFanSpeed { speed }) = mesh.action {
                state.fan_speed = FanSpeed::new(speed).ok_or(RoomError::InvalidFanSpeed(speed))?;
            }
            if mesh.clicked_content.is_some() {
                state.selected = Some(path);
            }
        }
        RoomAction::HoverMesh { path: None } => state.hovered = None,
        RoomAction::HoverMesh { path: Some(path) } => {
            let mesh = scene
                .mesh_at(&path)
                .ok_or_else(|| RoomError::UnknownMesh(path.clone()))?;
            state.hovered = mesh.hovered_content.as_ref().map(|_| path);
        }
        RoomAction::ClearSelection => state.selected = None,
        RoomAction::SetFanSpeed { speed } => {
            state.fan_speed = FanSpeed::new(speed).ok_or(RoomError::InvalidFanSpeed(speed))?;
        }
        RoomAction::OrbitCamera { radians } => state.camera = state.camera.orbit(radians),
        RoomAction::PlaceCamera(position) => state.camera = position,
        RoomAction::LogIntoPc => {
            let offers_login = state
                .selected
                .as_deref()
                .and_then(|path| scene.mesh_at(path))
                .is_some_and(|mesh| mesh.action == Some(MeshAction::LogIntoPc));
            if !offers_login {
                return Err(RoomError::LoginUnavailable);
            }
            return Ok(vec![
                RoomEffect::PersistCamera(state.camera),
                RoomEffect::OpenInterface,
            ]);
        }
    }
    Ok(Vec::new())
}
