use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::controller::DEFAULT_MOVE_SPEED;
use crate::camera::core::{
    DEFAULT_MAX_PITCH, DEFAULT_MIN_PITCH, DEFAULT_MOUSE_SENSITIVITY,
    DEFAULT_POSITION, DEFAULT_YAW,
};
use crate::error::FlycamError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Starting pose, look limits, and projection for the fly camera.
pub struct CameraOptions {
    /// Initial eye position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial yaw in degrees.
    #[schemars(skip)]
    pub yaw: f32,
    /// Initial pitch in degrees.
    #[schemars(skip)]
    pub pitch: f32,
    /// Lowest allowed pitch in degrees.
    #[schemars(title = "Min Pitch", range(min = -89.9, max = 0.0), extend("step" = 0.5))]
    pub min_pitch: f32,
    /// Highest allowed pitch in degrees.
    #[schemars(title = "Max Pitch", range(min = 0.0, max = 89.9), extend("step" = 0.5))]
    pub max_pitch: f32,
    /// Degrees of rotation per raw pointer unit.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Travel speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub move_speed: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION.to_array(),
            yaw: DEFAULT_YAW,
            pitch: 0.0,
            min_pitch: DEFAULT_MIN_PITCH,
            max_pitch: DEFAULT_MAX_PITCH,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            move_speed: DEFAULT_MOVE_SPEED,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl CameraOptions {
    /// Reject values the camera cannot work with.
    pub fn validate(&self) -> Result<(), FlycamError> {
        let scalars = [
            self.yaw,
            self.pitch,
            self.min_pitch,
            self.max_pitch,
            self.mouse_sensitivity,
            self.move_speed,
            self.fovy,
            self.znear,
            self.zfar,
        ];
        if self.position.iter().chain(&scalars).any(|v| !v.is_finite()) {
            return invalid("camera options must be finite numbers".to_owned());
        }
        if self.min_pitch > self.max_pitch {
            return invalid(format!(
                "min_pitch {} exceeds max_pitch {}",
                self.min_pitch, self.max_pitch
            ));
        }
        if self.min_pitch <= -90.0 || self.max_pitch >= 90.0 {
            return invalid(format!(
                "pitch limits [{}, {}] must stay inside (-90, 90)",
                self.min_pitch, self.max_pitch
            ));
        }
        if self.mouse_sensitivity <= 0.0 {
            return invalid(format!(
                "mouse_sensitivity must be positive, got {}",
                self.mouse_sensitivity
            ));
        }
        if self.move_speed < 0.0 {
            return invalid(format!(
                "move_speed must not be negative, got {}",
                self.move_speed
            ));
        }
        if self.fovy <= 0.0 || self.fovy >= 180.0 {
            return invalid(format!("fovy {} out of (0, 180)", self.fovy));
        }
        if self.znear <= 0.0 || self.znear >= self.zfar {
            return invalid(format!(
                "clip planes need 0 < znear < zfar, got {} / {}",
                self.znear, self.zfar
            ));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> Result<(), FlycamError> {
    Err(FlycamError::InvalidOptions(msg))
}
