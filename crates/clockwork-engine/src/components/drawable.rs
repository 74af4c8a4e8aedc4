use crate::clock::HandKind;
use crate::geometry::{
    clock_box, clock_face, clock_hand, number_marker, orbit_ellipse, pendulum_bob, pendulum_rod,
    skybox_cube, uv_sphere, MeshData,
};

/// Every kind of visual the scenes draw, with its geometry parameters.
///
/// Variants differ only in how their vertices are generated; drawing is
/// the same for all of them (one mesh, one model matrix).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drawable {
    Box { width: f32, height: f32, depth: f32 },
    Face { radius: f32, segments: u32 },
    Hand { kind: HandKind },
    Marker { size: f32 },
    Rod { length: f32, width: f32 },
    Bob { radius: f32, segments: u32 },
    Sphere { radius: f32, sectors: u32, stacks: u32 },
    OrbitLine { semi_major: f32, semi_minor: f32, segments: u32 },
    Skybox,
}

impl Drawable {
    pub fn generate(&self) -> MeshData {
        match *self {
            Drawable::Box { width, height, depth } => clock_box(width, height, depth),
            Drawable::Face { radius, segments } => clock_face(radius, segments),
            Drawable::Hand { kind } => clock_hand(kind.length(), kind.width(), kind.color()),
            Drawable::Marker { size } => number_marker(size),
            Drawable::Rod { length, width } => pendulum_rod(length, width),
            Drawable::Bob { radius, segments } => pendulum_bob(radius, segments),
            Drawable::Sphere { radius, sectors, stacks } => uv_sphere(radius, sectors, stacks),
            Drawable::OrbitLine { semi_major, semi_minor, segments } => {
                orbit_ellipse(semi_major, semi_minor, segments)
            }
            Drawable::Skybox => skybox_cube(),
        }
    }

    /// Whether this drawable is shaded by the point light.
    pub fn lit(&self) -> bool {
        !matches!(self, Drawable::OrbitLine { .. } | Drawable::Skybox)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Drawable::Box { .. } => "box",
            Drawable::Face { .. } => "face",
            Drawable::Hand { .. } => "hand",
            Drawable::Marker { .. } => "marker",
            Drawable::Rod { .. } => "rod",
            Drawable::Bob { .. } => "bob",
            Drawable::Sphere { .. } => "sphere",
            Drawable::OrbitLine { .. } => "orbit_line",
            Drawable::Skybox => "skybox",
        }
    }
}
