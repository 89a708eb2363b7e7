//! Camera position carried between the room and the simulated PC.
//!
//! Entering the PC stores the camera under [`CAMERA_POSITION_KEY`]; shutting the PC down
//! navigates back to the room with the stored position in the `pos` query parameter.

use std::fmt;

use platform_host::{load_pref_with, save_pref_with, KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Query parameter holding `x,y,z`.
pub const POS_PARAM: &str = "pos";
/// Storage key for the camera position saved when logging into the PC.
pub const CAMERA_POSITION_KEY: &str = "cameraPosition";
/// Camera position used when nothing else is supplied.
pub const DEFAULT_CAMERA_POSITION: CameraPosition = CameraPosition {
    x: 8.0,
    y: 5.0,
    z: 8.0,
};

/// Camera location in room units. Stored as a JSON `[x, y, z]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 3]")]
pub struct CameraPosition {
    /// Horizontal axis.
    pub x: f64,
    /// Vertical axis.
    pub y: f64,
    /// Depth axis.
    pub z: f64,
}

impl CameraPosition {
    /// Builds a position from exactly three finite components.
    pub fn from_components(components: &[f64]) -> Option<Self> {
        match components {
            [x, y, z] if components.iter().all(|value| value.is_finite()) => Some(Self {
                x: *x,
                y: *y,
                z: *z,
            }),
            _ => None,
        }
    }

    /// Parses `x,y,z`. Any other shape, or a non-finite component, yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let components = raw
            .split(',')
            .map(|part| part.trim().parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()?;
        Self::from_components(&components)
    }

    /// Position rotated by `radians` around the vertical axis.
    pub fn orbit(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: self.z * cos - self.x * sin,
        }
    }

    /// Heading of the camera around the vertical axis.
    pub fn yaw(&self) -> f64 {
        self.x.atan2(self.z)
    }
}

impl Default for CameraPosition {
    fn default() -> Self {
        DEFAULT_CAMERA_POSITION
    }
}

impl TryFrom<Vec<f64>> for CameraPosition {
    type Error = String;

    fn try_from(components: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_components(&components)
            .ok_or_else(|| format!("expected 3 finite numbers, got {components:?}"))
    }
}

impl From<CameraPosition> for [f64; 3] {
    fn from(position: CameraPosition) -> Self {
        [position.x, position.y, position.z]
    }
}

impl fmt::Display for CameraPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Reads the first `pos` parameter from a query string (leading `?` optional).
pub fn parse_pos_param(query: &str) -> Option<CameraPosition> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == POS_PARAM)
        .and_then(|(_, value)| CameraPosition::parse(&value))
}

/// Persists the camera position for the trip back from the PC.
pub fn save_camera_position<S: KeyValueStore + ?Sized>(
    store: &S,
    position: CameraPosition,
) -> Result<(), StorageError> {
    save_pref_with(store, CAMERA_POSITION_KEY, &position)
}

/// Loads the stored camera position, if one was saved.
pub fn load_camera_position<S: KeyValueStore + ?Sized>(
    store: &S,
) -> Result<Option<CameraPosition>, StorageError> {
    load_pref_with(store, CAMERA_POSITION_KEY)
}

/// Room URL restoring the stored camera position, or `/` without one.
///
/// Unreadable stored values fall back to `/`.
pub fn return_href<S: KeyValueStore + ?Sized>(store: &S) -> String {
    match load_camera_position(store) {
        Ok(Some(position)) => format!("/?{POS_PARAM}={position}"),
        Ok(None) | Err(_) => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform_host::MemoryKeyValueStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_requires_exactly_three_finite_numbers() {
        assert_eq!(
            CameraPosition::parse("1.5,-2,3"),
            Some(CameraPosition {
                x: 1.5,
                y: -2.0,
                z: 3.0
            })
        );
        assert_eq!(CameraPosition::parse("1,2"), None);
        assert_eq!(CameraPosition::parse("1,2,3,4"), None);
        assert_eq!(CameraPosition::parse("1,two,3"), None);
        assert_eq!(CameraPosition::parse("1,NaN,3"), None);
        assert_eq!(CameraPosition::parse("1,inf,3"), None);
        assert_eq!(CameraPosition::parse(""), None);
    }

    #[test]
    fn pos_param_is_read_from_encoded_query() {
        assert_eq!(
            parse_pos_param("?pos=4%2C5%2C6&other=x"),
            Some(CameraPosition {
                x: 4.0,
                y: 5.0,
                z: 6.0
            })
        );
        assert_eq!(parse_pos_param("pos=1,2,3&pos=9,9,9").map(|p| p.x), Some(1.0));
        assert_eq!(parse_pos_param("?pos=1,2"), None);
        assert_eq!(parse_pos_param(""), None);
    }

    #[test]
    fn stored_position_produces_return_href() {
        let store = MemoryKeyValueStore::default();
        assert_eq!(return_href(&store), "/");

        save_camera_position(
            &store,
            CameraPosition {
                x: 1.25,
                y: 2.0,
                z: -3.5,
            },
        )
        .expect("save");

        assert_eq!(
            store.get(CAMERA_POSITION_KEY).expect("get"),
            Some("[1.25,2.0,-3.5]".to_string())
        );
        assert_eq!(return_href(&store), "/?pos=1.25,2,-3.5");
        assert_eq!(
            parse_pos_param(&return_href(&store)[1..]),
            load_camera_position(&store).expect("load")
        );
    }

    #[test]
    fn malformed_stored_position_falls_back_to_room_root() {
        let store = MemoryKeyValueStore::default();
        store.set(CAMERA_POSITION_KEY, "[]").expect("set");

        assert!(matches!(
            load_camera_position(&store),
            Err(StorageError::Json { .. })
        ));
        assert_eq!(return_href(&store), "/");
    }

    #[test]
    fn orbit_keeps_height_and_distance() {
        let start = CameraPosition {
            x: 0.0,
            y: 2.0,
            z: 5.0,
        };
        let turned = start.orbit(std::f64::consts::FRAC_PI_2);

        assert!((turned.x - 5.0).abs() < 1e-9);
        assert!(turned.z.abs() < 1e-9);
        assert_eq!(turned.y, 2.0);
        assert!((turned.yaw() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }
}
