use bytemuck::{Pod, Zeroable};

use crate::assets::registry::TextureRegistry;
use crate::components::entity::Entity;
use crate::components::layer::RenderLayer;
use crate::geometry::Topology;
use crate::renderer::camera::OrbitCamera;
use crate::renderer::light::PointLight;
use crate::renderer::mesh_store::MeshStore;

/// One indexed draw call.
/// Wire format: 24 floats = 96 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawCommand {
    pub mesh_id: f32,
    /// Manifest index of the texture to bind, or -1 for none.
    pub texture_id: f32,
    /// Bit set of `FLAG_*` values.
    pub flags: f32,
    pub layer: f32,
    pub color: [f32; 3],
    pub emissive: f32,
    /// Column-major model matrix.
    pub model: [f32; 16],
}

impl DrawCommand {
    pub const FLOATS: usize = 24;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub const FLAG_LIT: u32 = 1;
    pub const FLAG_DEPTH_TEST: u32 = 2;
    pub const FLAG_LINE_STRIP: u32 = 4;
    pub const NO_TEXTURE: f32 = -1.0;

    pub fn flag_bits(&self) -> u32 {
        self.flags as u32
    }

    pub fn has_flag(&self, flag: u32) -> bool {
        self.flag_bits() & flag != 0
    }
}

/// Camera and light state shared by every command in a frame.
/// Wire format: 44 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view: [f32; 16],
    pub projection: [f32; 16],
    pub camera_position: [f32; 3],
    pub _pad0: f32,
    pub light_position: [f32; 3],
    pub _pad1: f32,
    pub light_color: [f32; 3],
    pub ambient: f32,
}

impl FrameUniforms {
    pub const FLOATS: usize = 44;

    pub fn new(camera: &OrbitCamera, light: &PointLight, aspect: f32) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array(),
            projection: camera.projection_matrix(aspect).to_cols_array(),
            camera_position: camera.position().to_array(),
            _pad0: 0.0,
            light_position: light.position.to_array(),
            _pad1: 0.0,
            light_color: light.color,
            ambient: light.ambient,
        }
    }
}

/// Draw commands for one frame, in submission order.
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    /// Commands per layer, indexed by `RenderLayer::as_u8`.
    pub layer_counts: [u32; RenderLayer::COUNT],
    buckets: [Vec<DrawCommand>; RenderLayer::COUNT],
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
            layer_counts: [0; RenderLayer::COUNT],
            buckets: Default::default(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.layer_counts = [0; RenderLayer::COUNT];
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the frame's draw commands from the scene.
///
/// Inactive entities, entities without a mesh and entities whose mesh was
/// released are skipped. Commands are grouped by layer (background,
/// objects, overlay) and keep scene order within a layer, so depth-tested
/// geometry is always submitted before the overlay.
pub fn build_draw_list<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    meshes: &MeshStore,
    textures: &TextureRegistry,
    list: &mut DrawList,
) {
    list.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }
        let Some(mesh_id) = entity.mesh else {
            continue;
        };
        let Some(mesh) = meshes.get(mesh_id) else {
            continue;
        };

        let mut flags = 0;
        if entity.material.lit {
            flags |= DrawCommand::FLAG_LIT;
        }
        if entity.layer.depth_test() {
            flags |= DrawCommand::FLAG_DEPTH_TEST;
        }
        if mesh.topology == Topology::LineStrip {
            flags |= DrawCommand::FLAG_LINE_STRIP;
        }
        let texture_id = textures
            .resolve(entity.material.texture)
            .map_or(DrawCommand::NO_TEXTURE, |t| t.0 as f32);

        let layer = entity.layer.as_u8() as usize;
        list.buckets[layer].push(DrawCommand {
            mesh_id: mesh_id.0 as f32,
            texture_id,
            flags: flags as f32,
            layer: layer as f32,
            color: entity.material.color,
            emissive: entity.material.emissive,
            model: entity.transform.model_matrix().to_cols_array(),
        });
    }

    for (layer, bucket) in list.buckets.iter().enumerate() {
        list.layer_counts[layer] = bucket.len() as u32;
        list.commands.extend_from_slice(bucket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EntityId, TextureId};
    use crate::assets::manifest::TextureManifest;
    use crate::geometry::{orbit_ellipse, skybox_cube, uv_sphere};
    use glam::Vec3;

    fn textures() -> TextureRegistry {
        let manifest = TextureManifest::from_json(
            r#"{ "textures": [ { "name": "earth", "path": "earth.jpg" } ] }"#,
        )
        .unwrap();
        TextureRegistry::from_manifest(&manifest)
    }

    #[test]
    fn wire_sizes() {
        assert_eq!(std::mem::size_of::<DrawCommand>(), DrawCommand::STRIDE_BYTES);
        assert_eq!(std::mem::size_of::<FrameUniforms>(), FrameUniforms::FLOATS * 4);
    }

    #[test]
    fn overlay_comes_after_depth_tested() {
        let mut meshes = MeshStore::new();
        let sphere = meshes.insert(uv_sphere(1.0, 8, 4));
        let entities = vec![
            Entity::new(EntityId(1)).with_mesh(sphere).with_layer(RenderLayer::Overlay),
            Entity::new(EntityId(2)).with_mesh(sphere),
            Entity::new(EntityId(3)).with_mesh(sphere).with_layer(RenderLayer::Background),
        ];
        let mut list = DrawList::new();
        build_draw_list(entities.iter(), &meshes, &textures(), &mut list);

        let layers: Vec<f32> = list.commands.iter().map(|c| c.layer).collect();
        assert_eq!(layers, vec![0.0, 1.0, 2.0]);
        assert_eq!(list.layer_counts, [1, 1, 1]);
        assert!(list.commands[1].has_flag(DrawCommand::FLAG_DEPTH_TEST));
        assert!(!list.commands[2].has_flag(DrawCommand::FLAG_DEPTH_TEST));
    }

    #[test]
    fn skips_inactive_meshless_and_released() {
        let mut meshes = MeshStore::new();
        let live = meshes.insert(skybox_cube());
        let gone = meshes.insert(skybox_cube());
        meshes.release(gone);
        let mut hidden = Entity::new(EntityId(1)).with_mesh(live);
        hidden.active = false;
        let entities = vec![
            hidden,
            Entity::new(EntityId(2)),
            Entity::new(EntityId(3)).with_mesh(gone),
            Entity::new(EntityId(4)).with_mesh(live),
        ];
        let mut list = DrawList::new();
        build_draw_list(entities.iter(), &meshes, &textures(), &mut list);
        assert_eq!(list.len(), 1);
        assert_eq!(list.commands[0].mesh_id, live.0 as f32);
    }

    #[test]
    fn texture_binds_only_once_loaded() {
        let mut meshes = MeshStore::new();
        let sphere = meshes.insert(uv_sphere(1.0, 8, 4));
        let mut reg = textures();
        let entities = vec![Entity::new(EntityId(1)).with_mesh(sphere).with_texture(TextureId(0))];
        let mut list = DrawList::new();

        build_draw_list(entities.iter(), &meshes, &reg, &mut list);
        assert_eq!(list.commands[0].texture_id, DrawCommand::NO_TEXTURE);

        reg.mark_loaded(TextureId(0));
        build_draw_list(entities.iter(), &meshes, &reg, &mut list);
        assert_eq!(list.commands[0].texture_id, 0.0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn flags_and_model_matrix() {
        let mut meshes = MeshStore::new();
        let line = meshes.insert(orbit_ellipse(60.0, 58.0, 32));
        let entities = vec![Entity::new(EntityId(1))
            .with_mesh(line)
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .unlit()];
        let mut list = DrawList::new();
        build_draw_list(entities.iter(), &meshes, &textures(), &mut list);
        let cmd = list.commands[0];
        assert!(cmd.has_flag(DrawCommand::FLAG_LINE_STRIP));
        assert!(!cmd.has_flag(DrawCommand::FLAG_LIT));
        assert_eq!(&cmd.model[12..15], &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn uniforms_carry_camera_and_light() {
        let cam = OrbitCamera::new(Vec3::ZERO, 3.0, 1.0, 10.0);
        let light = PointLight::default();
        let u = FrameUniforms::new(&cam, &light, 4.0 / 3.0);
        assert_eq!(u.camera_position, [0.0, 0.0, 3.0]);
        assert_eq!(u.light_position, [3.0, 3.0, 3.0]);
        assert_eq!(u.ambient, 0.2);
    }
}
