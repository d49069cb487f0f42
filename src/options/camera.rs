use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Initial camera distance from the globe center along +Z.
    #[schemars(title = "Distance", range(min = 3.0, max = 10.0), extend("step" = 0.1))]
    pub distance: f32,
    /// Closest allowed camera distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed camera distance.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Radians of globe rotation per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Camera distance change per unit of wheel `deltaY`.
    #[schemars(title = "Zoom Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub zoom_speed: f32,
    /// Radians of yaw added per frame while idle.
    #[schemars(title = "Auto-Rotate Speed", range(min = 0.0, max = 0.01), extend("step" = 0.0005))]
    pub auto_rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 50.0,
            znear: 0.1,
            zfar: 1000.0,
            distance: 5.0,
            min_distance: 3.0,
            max_distance: 10.0,
            rotate_speed: 0.005,
            zoom_speed: 0.01,
            auto_rotate_speed: 0.001,
        }
    }
}
