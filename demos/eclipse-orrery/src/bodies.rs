/// Body visuals and the texture list.
///
/// Sizes are exaggerated so every body is visible at once; they do not
/// take part in eclipse detection, which only uses centers.

use clockwork_engine::{Drawable, TextureManifest};
use log::warn;

/// Textures the host page loads, one per body plus the star field.
const TEXTURES_JSON: &str = include_str!("../textures.json");

/// Sphere tessellation shared by every body.
const SECTORS: u32 = 36;
const STACKS: u32 = 18;

// ── Bodies ───────────────────────────────────────────────────────────

pub struct BodyVisuals {
    pub tag: &'static str,
    pub radius: f32,
    /// Tint, and the flat color shown while the texture is missing.
    pub color: [f32; 3],
    pub texture: &'static str,
}

impl BodyVisuals {
    pub fn drawable(&self) -> Drawable {
        Drawable::Sphere { radius: self.radius, sectors: SECTORS, stacks: STACKS }
    }
}

pub const SUN: BodyVisuals = BodyVisuals {
    tag: "sun",
    radius: 8.0,
    color: [1.0, 0.9, 0.5],
    texture: "sun",
};
pub const SUN_EMISSIVE: f32 = 1.0;

pub const EARTH: BodyVisuals = BodyVisuals {
    tag: "earth",
    radius: 3.0,
    color: [0.3, 0.5, 0.9],
    texture: "earth",
};

pub const MOON: BodyVisuals = BodyVisuals {
    tag: "moon",
    radius: 1.0,
    color: [0.75, 0.75, 0.75],
    texture: "moon",
};

pub const MARS: BodyVisuals = BodyVisuals {
    tag: "mars",
    radius: 2.4,
    color: [0.8, 0.4, 0.25],
    texture: "mars",
};

// ── Orbit lines and sky ──────────────────────────────────────────────

pub const ORBIT_SEGMENTS: u32 = 128;
pub const EARTH_ORBIT_COLOR: [f32; 3] = [0.3, 0.5, 0.8];
pub const MOON_ORBIT_COLOR: [f32; 3] = [0.6, 0.6, 0.6];
pub const MARS_ORBIT_COLOR: [f32; 3] = [0.7, 0.3, 0.2];

pub const SKY_TEXTURE: &str = "stars";
/// Half-size of the sky cube; must stay inside the camera's far plane.
pub const SKY_SCALE: f32 = 800.0;

pub fn texture_manifest() -> TextureManifest {
    TextureManifest::from_json(TEXTURES_JSON).unwrap_or_else(|err| {
        warn!("eclipse-orrery: {err}; drawing untextured");
        TextureManifest::default()
    })
}
