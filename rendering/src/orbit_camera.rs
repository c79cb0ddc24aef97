//! Orbit camera for the 3D scene.
//!
//! The camera is parameterized by spherical coordinates around a target
//! point. The eye is never stored: it is derived from `azimuth`, `polar` and
//! `radius` every time it is queried.

use glam::{Mat4, Vec2, Vec3};
use tracing::debug;

use crate::scene::constants::{MAX_ORBIT_RADIUS, MIN_ORBIT_RADIUS, POLAR_LIMIT};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    azimuth: f32,
    polar: f32,
    radius: f32,
}

impl OrbitCamera {
    pub fn new(target: Vec3, radius: f32) -> Self {
        assert!(target.is_finite(), "non-finite orbit target {target}");
        assert!(radius.is_finite(), "non-finite orbit radius {radius}");
        Self {
            target,
            azimuth: 0.0,
            polar: 0.0,
            radius: radius.clamp(MIN_ORBIT_RADIUS, MAX_ORBIT_RADIUS),
        }
    }

    /// Places the camera at the given angles; `polar` is clamped like [`Self::rotate_up`].
    pub fn with_angles(mut self, azimuth: f32, polar: f32) -> Self {
        assert!(
            azimuth.is_finite() && polar.is_finite(),
            "non-finite orbit angles ({azimuth}, {polar})"
        );
        self.azimuth = azimuth;
        self.polar = polar.clamp(-POLAR_LIMIT, POLAR_LIMIT);
        self
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Unit vector from the target towards the eye.
    pub fn direction(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        Vec3::new(cos_p * cos_a, sin_p, cos_p * sin_a)
    }

    pub fn eye(&self) -> Vec3 {
        self.target + self.radius * self.direction()
    }

    /// Spins around the world up axis. Unbounded, trig takes care of wrapping.
    pub fn rotate_left(&mut self, radians: f32) {
        assert!(radians.is_finite(), "non-finite azimuth delta {radians}");
        self.azimuth += radians;
    }

    /// Tilts towards the poles, stopping just short of them so the view
    /// direction never lines up with world up.
    pub fn rotate_up(&mut self, radians: f32) {
        assert!(radians.is_finite(), "non-finite polar delta {radians}");
        self.polar = (self.polar + radians).clamp(-POLAR_LIMIT, POLAR_LIMIT);
    }

    /// Moves the eye along its direction by `scroll_y * speed * sign`.
    pub fn zoom(&mut self, scroll_y: f32, speed: f32, sign: f32) {
        let delta = scroll_y * speed * sign;
        assert!(delta.is_finite(), "non-finite orbit zoom delta {delta}");
        self.radius = (self.radius + delta).clamp(MIN_ORBIT_RADIUS, MAX_ORBIT_RADIUS);
    }

    /// Look-at view matrix with world up `+Y`.
    ///
    /// Built from the angle-derived direction rather than `target - eye`, so a
    /// zero radius still yields a valid matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye(), -self.direction(), Vec3::Y)
    }
}

/// Perspective projection for the orbit scene (GL clip-space conventions).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    pub fn new(fov_y_degrees: f32, framebuffer: Vec2, near: f32, far: f32) -> Self {
        let mut perspective = Self {
            fov_y: fov_y_degrees.to_radians(),
            aspect: 1.0,
            near,
            far,
        };
        perspective.resize(framebuffer);
        perspective
    }

    pub fn resize(&mut self, framebuffer: Vec2) {
        // A minimized window reports 0x0; keep the last usable aspect.
        if framebuffer.x > 0.0 && framebuffer.y > 0.0 {
            self.aspect = framebuffer.x / framebuffer.y;
        } else {
            debug!(width = framebuffer.x, height = framebuffer.y, "Ignoring degenerate resize");
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct OrbitUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    pub _padding: f32,
}

impl OrbitUniform {
    pub fn new(camera: &OrbitCamera, perspective: &Perspective) -> Self {
        Self {
            view_proj: (perspective.matrix() * camera.view_matrix()).to_cols_array_2d(),
            eye: camera.eye().to_array(),
            _padding: 0.0,
        }
    }
}
