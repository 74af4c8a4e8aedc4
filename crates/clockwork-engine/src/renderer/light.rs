use glam::Vec3;

/// Single point light with a flat ambient term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    /// Fraction of the surface color visible with no direct light.
    pub ambient: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::splat(3.0),
            color: [1.0, 1.0, 1.0],
            ambient: 0.2,
        }
    }
}

impl PointLight {
    pub fn at(position: Vec3) -> Self {
        Self { position, ..Self::default() }
    }
}
