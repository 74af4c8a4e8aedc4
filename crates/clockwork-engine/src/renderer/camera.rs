use glam::{Mat4, Vec2, Vec3};

use crate::input::queue::{InputEvent, BUTTON_RIGHT};

/// Perspective camera orbiting a target point.
///
/// Right-drag turns it, the wheel moves it closer or further.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    /// Rotation around the y axis in radians; 0 looks down -z.
    pub azimuth: f32,
    /// Angle above the xz plane in radians.
    pub elevation: f32,
    pub distance: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Last pointer position while right-dragging.
    drag_from: Option<Vec2>,
}

impl OrbitCamera {
    pub const ORBIT_SENSITIVITY: f32 = 0.005;
    pub const ZOOM_STEP: f32 = 0.5;
    pub const MAX_ELEVATION: f32 = 1.5;

    pub fn new(target: Vec3, distance: f32, min_distance: f32, max_distance: f32) -> Self {
        let min_distance = min_distance.max(f32::EPSILON);
        let max_distance = max_distance.max(min_distance);
        Self {
            target,
            azimuth: 0.0,
            elevation: 0.0,
            distance: distance.clamp(min_distance, max_distance),
            fov_y: 45f32.to_radians(),
            near: 0.1,
            far: 100.0,
            min_distance,
            max_distance,
            drag_from: None,
        }
    }

    pub fn with_elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation.clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
        self
    }

    pub fn with_far(mut self, far: f32) -> Self {
        self.far = far;
        self
    }

    /// Turn by a pointer delta in pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * Self::ORBIT_SENSITIVITY;
        self.elevation -= dy * Self::ORBIT_SENSITIVITY;
        self.elevation = self.elevation.clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
    }

    /// Move closer by `ticks` wheel steps (negative moves away).
    pub fn zoom(&mut self, ticks: f32) {
        self.distance = (self.distance - ticks * Self::ZOOM_STEP).clamp(self.min_distance, self.max_distance);
    }

    pub fn follow(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn position(&self) -> Vec3 {
        let (sin_el, cos_el) = self.elevation.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.target + self.distance * Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// OpenGL-style projection (clip z in -1..1). A degenerate aspect
    /// ratio (zero-height viewport) falls back to 1.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far)
    }

    /// Apply a pointer or wheel event. Returns whether the camera used it.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { x, y, button } if button == BUTTON_RIGHT => {
                self.drag_from = Some(Vec2::new(x, y));
                true
            }
            InputEvent::PointerUp { button, .. } if button == BUTTON_RIGHT => {
                self.drag_from = None;
                true
            }
            InputEvent::PointerMove { x, y } => {
                let Some(from) = self.drag_from else {
                    return false;
                };
                let to = Vec2::new(x, y);
                self.orbit(to.x - from.x, to.y - from.y);
                self.drag_from = Some(to);
                true
            }
            InputEvent::Wheel { delta } => {
                self.zoom(delta);
                true
            }
            _ => false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }
}
