use glam::{Mat4, Vec3};

/// Default eye position: six units back along +Z, looking at the origin.
pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 6.0);
/// Default yaw in degrees. Points the camera down -Z.
pub const DEFAULT_YAW: f32 = -90.0;
/// Default lower pitch limit in degrees.
pub const DEFAULT_MIN_PITCH: f32 = -89.0;
/// Default upper pitch limit in degrees.
pub const DEFAULT_MAX_PITCH: f32 = 89.0;
/// Largest pitch limit magnitude in degrees. At ±90 `forward` would be
/// parallel to the world up axis and `right()` would degenerate.
pub const PITCH_LIMIT_BOUND: f32 = 89.99;
/// Default multiplier applied to raw pointer deltas.
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.07;

/// Free-fly camera with Euler-angle orientation.
///
/// Orientation is stored as `yaw`/`pitch` in degrees; the forward vector is
/// derived from them on every look update. Pitch is kept inside
/// `[min_pitch, max_pitch]` after every mutation so the view never flips at
/// the poles.
///
/// `up` is treated as a fixed world axis. Callers must not make it parallel
/// to `forward`; the cross product in [`Camera::right`] degenerates there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    up: Vec3,
    yaw: f32,
    pitch: f32,
    min_pitch: f32,
    max_pitch: f32,
    mouse_sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera at `(0, 0, 6)` looking down -Z with world +Y up.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: DEFAULT_POSITION,
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: 0.0,
            min_pitch: DEFAULT_MIN_PITCH,
            max_pitch: DEFAULT_MAX_PITCH,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        }
    }

    // -- Queries ---------------------------------------------------------

    /// Unit vector pointing to the camera's right: `normalize(forward × up)`.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up).normalize()
    }

    /// Right-handed look-at transform from `position` toward
    /// `position + forward`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit look direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// World up reference.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Yaw in degrees. Unbounded.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees, always within the pitch limits.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// `(min_pitch, max_pitch)` in degrees.
    #[must_use]
    pub fn pitch_limits(&self) -> (f32, f32) {
        (self.min_pitch, self.max_pitch)
    }

    /// Multiplier applied to raw pointer deltas.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    // -- Setters ---------------------------------------------------------

    /// Move the eye to `position`.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Replace the world up reference. Must not be parallel to `forward`.
    pub fn set_up(&mut self, up: Vec3) {
        self.up = up;
    }

    /// Override the look direction directly.
    ///
    /// This bypasses yaw/pitch: the stored angles no longer describe
    /// `forward` until the next [`Camera::process_mouse_movement`] or
    /// [`Camera::set_orientation`], which will snap `forward` back to the
    /// angles. The vector is normalized; a zero vector is ignored.
    pub fn set_forward(&mut self, forward: Vec3) {
        if let Some(dir) = forward.try_normalize() {
            self.forward = dir;
        }
    }

    /// Set yaw and pitch (degrees) and rederive `forward`.
    ///
    /// Pitch is clamped into the current limits. Non-finite angles are
    /// ignored.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        if !yaw.is_finite() || !pitch.is_finite() {
            log::debug!("ignoring non-finite orientation ({yaw}, {pitch})");
            return;
        }
        self.yaw = yaw;
        self.pitch = pitch.clamp(self.min_pitch, self.max_pitch);
        self.update_forward();
    }

    /// Replace the pitch limits and re-clamp the current pitch.
    ///
    /// Limits given out of order are swapped, and both are clamped into
    /// `[-PITCH_LIMIT_BOUND, PITCH_LIMIT_BOUND]` so the view can never look
    /// straight along `up`. Non-finite limits are ignored. `forward` is
    /// rederived only when the clamp actually moved the pitch.
    pub fn set_pitch_limits(&mut self, min_pitch: f32, max_pitch: f32) {
        if !min_pitch.is_finite() || !max_pitch.is_finite() {
            log::debug!(
                "ignoring non-finite pitch limits ({min_pitch}, {max_pitch})"
            );
            return;
        }
        let (lo, hi) = (min_pitch.min(max_pitch), min_pitch.max(max_pitch));
        self.min_pitch = lo.clamp(-PITCH_LIMIT_BOUND, PITCH_LIMIT_BOUND);
        self.max_pitch = hi.clamp(-PITCH_LIMIT_BOUND, PITCH_LIMIT_BOUND);
        if self.pitch < self.min_pitch || self.pitch > self.max_pitch {
            self.pitch = self.pitch.clamp(self.min_pitch, self.max_pitch);
            self.update_forward();
        }
    }

    /// Set the pointer-delta multiplier.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    // -- Movement --------------------------------------------------------

    /// Offset the eye by `delta` in world space.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Step along `forward`. `speed` is already scaled by frame time.
    pub fn move_forward(&mut self, speed: f32) {
        self.translate(self.forward * speed);
    }

    /// Step against `forward`.
    pub fn move_backward(&mut self, speed: f32) {
        self.translate(self.forward * -speed);
    }

    /// Strafe left. The right vector is renormalized on each call.
    pub fn move_left(&mut self, speed: f32) {
        self.translate(self.right().normalize() * -speed);
    }

    /// Strafe right.
    pub fn move_right(&mut self, speed: f32) {
        self.translate(self.right().normalize() * speed);
    }

    // -- Orientation -----------------------------------------------------

    /// Add `offset` degrees of yaw. No wraparound.
    ///
    /// An offset that would leave yaw non-finite (NaN or infinite input,
    /// or overflow) is dropped. Does not touch `forward`; use
    /// [`Camera::process_mouse_movement`] or [`Camera::set_orientation`] to
    /// rederive it.
    pub fn add_yaw(&mut self, offset: f32) {
        let yaw = self.yaw + offset;
        if yaw.is_finite() {
            self.yaw = yaw;
        } else {
            log::debug!("dropping yaw offset {offset}");
        }
    }

    /// Add `offset` degrees of pitch, hard-clamped to the limits.
    ///
    /// Overshoot is discarded rather than carried into the next call.
    /// Non-finite offsets are dropped.
    pub fn add_pitch(&mut self, offset: f32) {
        if !offset.is_finite() {
            log::debug!("dropping pitch offset {offset}");
            return;
        }
        let proposed = self.pitch + offset;
        self.pitch = if proposed > self.max_pitch {
            log::trace!("pitch {proposed} clamped to {}", self.max_pitch);
            self.max_pitch
        } else if proposed < self.min_pitch {
            log::trace!("pitch {proposed} clamped to {}", self.min_pitch);
            self.min_pitch
        } else {
            proposed
        };
    }

    /// Apply a raw pointer delta: scale by sensitivity, update yaw then
    /// pitch, then rederive `forward` from the clamped angles.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32) {
        self.add_yaw(dx * self.mouse_sensitivity);
        self.add_pitch(dy * self.mouse_sensitivity);
        self.update_forward();
    }

    fn update_forward(&mut self) {
        self.forward = direction_from_angles(self.yaw, self.pitch);
    }
}

/// Unit direction for `yaw`/`pitch` in degrees.
///
/// Yaw 0 looks down +X, yaw -90 down -Z; positive pitch looks up.
#[must_use]
pub fn direction_from_angles(yaw: f32, pitch: f32) -> Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin())
        .normalize()
}
