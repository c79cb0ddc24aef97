use glam::{Mat4, Vec2};
use tracing::debug;

/// Screen-space pan camera for the tile view.
///
/// `position` is a pixel offset added to every projected tile, `zoom` scales the
/// tile size relative to the base tile art.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub width: f32,
    pub height: f32,
    pub position: Vec2,
    pub zoom: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32, zoom: f32) -> Self {
        assert!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "framebuffer must be finite and non-empty, got {width}x{height}"
        );
        assert!(
            zoom.is_finite() && zoom > 0.0,
            "camera zoom must be finite and positive, got {zoom}"
        );
        Self {
            width,
            height,
            position: Vec2::new(0.0, 0.0),
            zoom,
        }
    }

    pub fn framebuffer(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        assert!(width.is_finite() && height.is_finite(), "non-finite framebuffer size");
        // A minimized window reports 0x0; keep the last usable size.
        if width > 0.0 && height > 0.0 {
            self.width = width;
            self.height = height;
        } else {
            debug!(width, height, "Ignoring degenerate resize");
        }
    }

    pub fn pan(&mut self, delta: Vec2) {
        assert!(delta.is_finite(), "non-finite pan delta {delta}");
        self.position += delta;
    }

    /// Changes zoom and rescales the pan offset by the same factor, which keeps
    /// whatever sits under the framebuffer center in place.
    pub fn zoom_to(&mut self, zoom: f32) {
        assert!(
            zoom.is_finite() && zoom > 0.0,
            "camera zoom must be finite and positive, got {zoom}"
        );
        self.position *= zoom / self.zoom;
        self.zoom = zoom;
    }

    /// Pixel-space orthographic projection (origin top-left, y down). Tile
    /// positions already carry pan and zoom, so no view transform is applied.
    pub fn build_view_projection_matrix(&self) -> [[f32; 4]; 4] {
        Mat4::orthographic_rh_gl(0.0, self.width, self.height, 0.0, -1.0, 1.0).to_cols_array_2d()
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 2],
    pub zoom: f32,
    pub _padding: f32,
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::default().to_cols_array_2d(),
            position: [0.0; 2],
            zoom: 1.0,
            _padding: 0.0,
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_view_projection_matrix();
        self.position = camera.position.to_array();
        self.zoom = camera.zoom;
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}
