use glam::Vec3;
use log::info;

use crate::api::types::{EntityId, GameEvent, MeshId};
use crate::assets::manifest::TextureManifest;
use crate::assets::registry::TextureRegistry;
use crate::components::drawable::Drawable;
use crate::components::entity::Entity;
use crate::core::scene::Scene;
use crate::input::keys::KeyState;
use crate::input::queue::InputQueue;
use crate::renderer::camera::OrbitCamera;
use crate::renderer::light::PointLight;
use crate::renderer::mesh_store::MeshStore;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Maximum draw commands per frame (default: 256).
    pub max_draw_commands: usize,
    /// Maximum game events per frame (default: 32).
    pub max_events: usize,
    /// Longest frame delta passed to `update`, in seconds (default: 0.25).
    pub max_dt: f32,
    /// RGBA the host clears to before drawing.
    pub clear_color: [f32; 4],
    /// Initial viewport size in pixels, until the host reports a resize.
    pub viewport: (f32, f32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_draw_commands: 256,
            max_events: 32,
            max_dt: 0.25,
            clear_color: [0.1, 0.1, 0.15, 1.0],
            viewport: (800.0, 600.0),
        }
    }
}

/// The contract every scene fulfills.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Create meshes and entities, place the camera and light.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Advance the simulation by `dt` seconds and update transforms.
    /// `ctx.keys` already reflects this frame's key events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32);
}

/// Mutable access to engine state, passed to `Game::init` and `Game::update`.
pub struct EngineContext {
    pub scene: Scene,
    pub meshes: MeshStore,
    pub textures: TextureRegistry,
    pub camera: OrbitCamera,
    pub light: PointLight,
    pub keys: KeyState,
    pub events: Vec<GameEvent>,
    manifest: TextureManifest,
    viewport: (f32, f32),
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_viewport(GameConfig::default().viewport)
    }

    pub fn with_viewport(viewport: (f32, f32)) -> Self {
        Self {
            scene: Scene::new(),
            meshes: MeshStore::new(),
            textures: TextureRegistry::new(),
            camera: OrbitCamera::new(Vec3::ZERO, 3.0, 1.0, 10.0),
            light: PointLight::default(),
            keys: KeyState::new(),
            events: Vec::new(),
            manifest: TextureManifest::default(),
            viewport,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Generate a drawable's geometry and hand it to the mesh store.
    pub fn create_mesh(&mut self, drawable: &Drawable) -> MeshId {
        self.meshes.insert(drawable.generate())
    }

    /// Spawn `entity` with a fresh mesh for `drawable`. Unlit drawables
    /// (orbit lines, skybox) get an unlit material.
    pub fn spawn_drawable(&mut self, drawable: &Drawable, entity: Entity) -> EntityId {
        let id = entity.id;
        let mesh = self.create_mesh(drawable);
        let mut entity = entity.with_mesh(mesh);
        if !drawable.lit() {
            entity.material.lit = false;
        }
        self.scene.spawn(entity);
        id
    }

    /// Remove an entity and release its mesh.
    pub fn despawn(&mut self, id: EntityId) {
        if let Some(entity) = self.scene.despawn(id) {
            if let Some(mesh) = entity.mesh {
                self.meshes.release(mesh);
            }
        }
    }

    /// Remove every entity and release every mesh.
    pub fn clear_scene(&mut self) {
        let count = self.scene.drain().count();
        self.meshes.release_all();
        info!("scene cleared ({count} entities)");
    }

    /// Register the textures the host should load.
    pub fn load_textures(&mut self, manifest: TextureManifest) {
        self.textures = TextureRegistry::from_manifest(&manifest);
        info!("texture manifest: {} textures", manifest.textures.len());
        self.manifest = manifest;
    }

    pub fn texture_manifest(&self) -> &TextureManifest {
        &self.manifest
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Ignores sizes that are not finite and positive.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            self.viewport = (width, height);
        }
    }

    pub fn aspect(&self) -> f32 {
        self.viewport.0 / self.viewport.1
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
