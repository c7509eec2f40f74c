use glam::{Mat4, Vec3};

use super::core::Camera;

/// Perspective projection parameters paired with a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect: 1.0,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Projection {
    /// Update the aspect ratio for a new viewport size.
    ///
    /// A zero-height viewport (minimized window) leaves the aspect alone.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height == 0 {
            log::debug!("ignoring resize to {width}x0");
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    /// Right-handed perspective matrix with a [0,1] depth range.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Uniform block holding the camera matrices and eye data, laid out for
/// direct upload to a GPU buffer.
pub struct CameraUniform {
    /// Combined projection * view matrix.
    pub view_proj: [[f32; 4]; 4],
    /// View matrix alone, for eye-space lighting.
    pub view: [[f32; 4]; 4],
    /// Eye position in world space.
    pub position: [f32; 3],
    /// Padding for 16-byte alignment.
    pub(crate) _pad0: f32,
    /// Unit look direction.
    pub forward: [f32; 3],
    /// Padding for 16-byte alignment.
    pub(crate) _pad1: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Identity matrices, eye at the origin looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            _pad0: 0.0,
            forward: Vec3::NEG_Z.to_array(),
            _pad1: 0.0,
        }
    }

    /// Refresh every field from the camera and projection.
    pub fn update(&mut self, camera: &Camera, projection: &Projection) {
        let view = camera.view_matrix();
        self.view_proj = (projection.matrix() * view).to_cols_array_2d();
        self.view = view.to_cols_array_2d();
        self.position = camera.position().to_array();
        self.forward = camera.forward().to_array();
    }

    /// Raw bytes for a buffer write.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_aspect() {
        let mut proj = Projection::default();
        proj.resize(1600, 800);
        assert_eq!(proj.aspect, 2.0);
    }

    #[test]
    fn resize_ignores_zero_height() {
        let mut proj = Projection::default();
        proj.resize(1280, 0);
        assert_eq!(proj.aspect, 1.0);
    }

    #[test]
    fn uniform_size_is_gpu_aligned() {
        assert_eq!(size_of::<CameraUniform>(), 160);
        assert_eq!(size_of::<CameraUniform>() % 16, 0);
        assert_eq!(CameraUniform::new().as_bytes().len(), 160);
    }

    #[test]
    fn uniform_tracks_camera() {
        let mut camera = Camera::new();
        camera.move_forward(2.0);
        let projection = Projection::default();

        let mut uniform = CameraUniform::new();
        uniform.update(&camera, &projection);

        assert_eq!(uniform.position, [0.0, 0.0, 4.0]);
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());

        // Origin sits 4 units in front of the eye, inside the near/far range,
        // so it projects to the center of clip space.
        let vp = Mat4::from_cols_array_2d(&uniform.view_proj);
        let ndc = vp.project_point3(Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
