use glam::Vec3;

use crate::api::types::{EntityId, MeshId, TextureId};
use crate::components::layer::RenderLayer;
use crate::components::transform::Transform;

/// Surface appearance of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Tint multiplied with vertex colors (and the texture, if any).
    pub color: [f32; 3],
    pub texture: Option<TextureId>,
    /// Shaded by the point light. Unlit surfaces show their color as is.
    pub lit: bool,
    /// Added to the shaded color; the Sun glows with 1.0.
    pub emissive: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            texture: None,
            lit: true,
            emissive: 0.0,
        }
    }
}

/// Fat entity: a transform plus an optional mesh.
/// Entities without a mesh are invisible pivots.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// Tag for finding entities by name.
    pub tag: String,
    /// Inactive entities are skipped when drawing.
    pub active: bool,
    pub transform: Transform,
    pub mesh: Option<MeshId>,
    pub material: Material,
    pub layer: RenderLayer,
}

impl Entity {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            transform: Transform::IDENTITY,
            mesh: None,
            material: Material::default(),
            layer: RenderLayer::default(),
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshId) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.material.color = color;
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.material.texture = Some(texture);
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn unlit(mut self) -> Self {
        self.material.lit = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let e = Entity::new(EntityId(7))
            .with_tag("earth")
            .with_position(Vec3::new(60.0, 0.0, 0.0))
            .with_mesh(MeshId(3))
            .with_texture(TextureId(1))
            .with_layer(RenderLayer::Overlay)
            .unlit();
        assert_eq!(e.tag, "earth");
        assert_eq!(e.transform.position.x, 60.0);
        assert_eq!(e.mesh, Some(MeshId(3)));
        assert_eq!(e.material.texture, Some(TextureId(1)));
        assert_eq!(e.layer, RenderLayer::Overlay);
        assert!(!e.material.lit);
        assert!(e.active);
    }
}
