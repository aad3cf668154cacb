use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Orthographic camera for 2D rendering.
/// Produces a projection matrix mapping world units to clip space.
///
/// The camera is a direct function of whatever it is told to look at —
/// there is no damping or interpolation.
pub struct Camera2D {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
    /// Camera center position in world space.
    pub center: Vec2,
    /// Optional bounds for camera clamping (min_x, min_y, max_x, max_y).
    pub bounds: Option<[f32; 4]>,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub projection: [[f32; 4]; 4],
}

impl Camera2D {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Vec2::ZERO,
            bounds: None,
        }
    }

    /// Build an orthographic projection matrix.
    /// Origin at center, Y-up, Z in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let left = self.center.x - half_w;
        let right = self.center.x + half_w;
        let bottom = self.center.y - half_h;
        let top = self.center.y + half_h;
        Mat4::orthographic_rh(left, right, bottom, top, 0.0, 1.0)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            projection: self.projection_matrix().to_cols_array_2d(),
        }
    }

    /// Resize the visible area, e.g. when switching between the fixed UI
    /// view and the world follow view.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Set world bounds for camera clamping.
    pub fn set_bounds(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) {
        self.bounds = Some([min_x, min_y, max_x, max_y]);
    }

    /// Clear camera bounds (allow the camera to move anywhere).
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
    }

    /// Snap the camera center to the target, applying bounds.
    pub fn look_at(&mut self, target: Vec2) {
        self.center = target;
        self.clamp_to_bounds();
    }

    fn clamp_to_bounds(&mut self) {
        if let Some([min_x, min_y, max_x, max_y]) = self.bounds {
            let half_w = self.width / 2.0;
            let half_h = self.height / 2.0;

            self.center.x = self.center.x.clamp(min_x + half_w, max_x - half_w);
            self.center.y = self.center.y.clamp(min_y + half_h, max_y - half_h);

            // Viewport larger than bounds: park in the middle.
            if self.width >= max_x - min_x {
                self.center.x = (min_x + max_x) / 2.0;
            }
            if self.height >= max_y - min_y {
                self.center.y = (min_y + max_y) / 2.0;
            }
        }
    }

    /// Check if a world-space rectangle overlaps the viewport.
    pub fn is_rect_visible(&self, rect_center: Vec2, rect_half_size: Vec2) -> bool {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;

        let cam_left = self.center.x - half_w;
        let cam_right = self.center.x + half_w;
        let cam_bottom = self.center.y - half_h;
        let cam_top = self.center.y + half_h;

        let rect_left = rect_center.x - rect_half_size.x;
        let rect_right = rect_center.x + rect_half_size.x;
        let rect_bottom = rect_center.y - rect_half_size.y;
        let rect_top = rect_center.y + rect_half_size.y;

        rect_right >= cam_left
            && rect_left <= cam_right
            && rect_top >= cam_bottom
            && rect_bottom <= cam_top
    }
}
