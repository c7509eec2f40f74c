use glam::Vec3;

use super::command::CameraCommand;
use super::core::Camera;
use super::projection::{CameraUniform, Projection};
use crate::input::MovementState;
use crate::options::CameraOptions;

/// Default travel speed in world units per second.
pub const DEFAULT_MOVE_SPEED: f32 = 4.0;

/// Drives a [`Camera`] from input commands and per-frame movement.
///
/// Owns the camera, its projection, and the uniform block a renderer
/// uploads each frame.
#[derive(Debug, Clone)]
pub struct CameraController {
    camera: Camera,
    projection: Projection,
    uniform: CameraUniform,
    move_speed: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    /// Controller around a default camera and projection.
    #[must_use]
    pub fn new() -> Self {
        Self::with_camera(Camera::new(), Projection::default())
    }

    /// Controller around an existing camera and projection.
    #[must_use]
    pub fn with_camera(camera: Camera, projection: Projection) -> Self {
        let mut uniform = CameraUniform::new();
        uniform.update(&camera, &projection);
        Self {
            camera,
            projection,
            uniform,
            move_speed: DEFAULT_MOVE_SPEED,
        }
    }

    /// Build camera, projection, and speed from configuration.
    ///
    /// Options are taken as given; call
    /// [`Options::validate`](crate::options::Options::validate) first when
    /// they come from an untrusted file.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let mut camera = Camera::new();
        camera.set_position(Vec3::from_array(options.position));
        camera.set_pitch_limits(options.min_pitch, options.max_pitch);
        camera.set_mouse_sensitivity(options.mouse_sensitivity);
        camera.set_orientation(options.yaw, options.pitch);

        let projection = Projection {
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
            ..Projection::default()
        };

        let mut controller = Self::with_camera(camera, projection);
        controller.move_speed = options.move_speed;
        controller
    }

    /// Apply a discrete command. Returns `false` when the host should stop.
    pub fn execute(&mut self, command: &CameraCommand) -> bool {
        match command {
            CameraCommand::Look { delta } => {
                self.camera.process_mouse_movement(delta.x, delta.y);
                true
            }
            CameraCommand::Quit => {
                log::info!("quit requested");
                false
            }
        }
    }

    /// Advance movement by `dt` seconds for every held direction.
    ///
    /// Returns whether the camera moved. A negative or non-finite `dt`
    /// (clock hiccup) counts as zero.
    pub fn update(&mut self, dt: f32, movement: &MovementState) -> bool {
        if movement.is_idle() {
            return false;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let speed = self.move_speed * dt;

        if movement.forward {
            self.camera.move_forward(speed);
        }
        if movement.backward {
            self.camera.move_backward(speed);
        }
        if movement.left {
            self.camera.move_left(speed);
        }
        if movement.right {
            self.camera.move_right(speed);
        }
        speed > 0.0
    }

    /// Update the projection aspect for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    /// Recompute the uniform block from current state and return it.
    pub fn refresh_uniform(&mut self) -> &CameraUniform {
        self.uniform.update(&self.camera, &self.projection);
        &self.uniform
    }

    /// Uniform block as of the last [`Self::refresh_uniform`].
    #[must_use]
    pub fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// The controlled camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access for direct repositioning.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current projection parameters.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Mutable projection parameters.
    pub fn projection_mut(&mut self) -> &mut Projection {
        &mut self.projection
    }

    /// Travel speed in world units per second.
    #[must_use]
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Set the travel speed in world units per second.
    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::input::MoveAction;

    fn held(actions: &[MoveAction]) -> MovementState {
        let mut movement = MovementState::default();
        for action in actions {
            movement.set(*action, true);
        }
        movement
    }

    #[test]
    fn look_command_turns_camera() {
        let mut controller = CameraController::new();
        let sensitivity = controller.camera().mouse_sensitivity();
        assert!(controller.execute(&CameraCommand::Look {
            delta: Vec2::new(90.0 / sensitivity, 0.0),
        }));
        assert!(controller.camera().forward().abs_diff_eq(Vec3::X, 1e-4));
    }

    #[test]
    fn quit_command_stops_host() {
        let mut controller = CameraController::new();
        assert!(!controller.execute(&CameraCommand::Quit));
    }

    #[test]
    fn update_scales_speed_by_dt() {
        let mut controller = CameraController::new();
        // 4 units/s for a quarter second is one unit.
        assert!(controller.update(0.25, &held(&[MoveAction::Forward])));
        assert!(controller
            .camera()
            .position()
            .abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut controller = CameraController::new();
        let _ = controller.update(0.5, &held(&[
            MoveAction::Forward,
            MoveAction::Backward,
            MoveAction::Left,
            MoveAction::Right,
        ]));
        assert!(controller
            .camera()
            .position()
            .abs_diff_eq(Vec3::new(0.0, 0.0, 6.0), 1e-5));
    }

    #[test]
    fn idle_or_bad_dt_does_not_move() {
        let mut controller = CameraController::new();
        assert!(!controller.update(1.0, &MovementState::default()));
        assert!(!controller.update(-1.0, &held(&[MoveAction::Forward])));
        assert!(!controller.update(f32::NAN, &held(&[MoveAction::Left])));
        assert_eq!(controller.camera().position(), Vec3::new(0.0, 0.0, 6.0));
    }

    #[test]
    fn from_options_applies_everything() {
        let options = CameraOptions {
            position: [1.0, 2.0, 3.0],
            yaw: 0.0,
            pitch: 70.0,
            min_pitch: -60.0,
            max_pitch: 60.0,
            mouse_sensitivity: 0.2,
            move_speed: 10.0,
            fovy: 60.0,
            znear: 0.5,
            zfar: 500.0,
        };
        let controller = CameraController::from_options(&options);
        let camera = controller.camera();
        assert_eq!(camera.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.pitch(), 60.0);
        assert_eq!(camera.pitch_limits(), (-60.0, 60.0));
        assert_eq!(camera.mouse_sensitivity(), 0.2);
        assert_eq!(controller.move_speed(), 10.0);
        assert_eq!(controller.projection().fovy, 60.0);
        assert_eq!(controller.projection().zfar, 500.0);
    }

    #[test]
    fn refresh_uniform_follows_camera() {
        let mut controller = CameraController::new();
        controller.resize(800, 600);
        let _ = controller.update(0.25, &held(&[MoveAction::Right]));
        let uniform = *controller.refresh_uniform();
        assert!(Vec3::from_array(uniform.position)
            .abs_diff_eq(Vec3::new(1.0, 0.0, 6.0), 1e-5));
        assert_eq!(controller.uniform(), &uniform);
        assert!((controller.projection().aspect - 800.0 / 600.0).abs() < 1e-6);
    }
}
