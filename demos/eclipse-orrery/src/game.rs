/// Eclipse Orrery: Sun, Earth, Moon and Mars on elliptical orbits.
///
/// `E` and `L` fast-forward until the Moon lines up for a solar or lunar
/// eclipse, then freeze the scene. `R` resumes, `F` makes the camera
/// follow the Earth, `Backspace` puts everything back where it started.

use clockwork_engine::*;
use clockwork_engine::input::keys::{KEY_BACKSPACE, KEY_E, KEY_F, KEY_L, KEY_R};
use clockwork_engine::input::queue::InputQueue;
use glam::Vec3;
use log::{debug, info, warn};

use crate::bodies::{self, BodyVisuals};

// ── Camera ───────────────────────────────────────────────────────────

const CAMERA_DISTANCE: f32 = 220.0;
const CAMERA_MIN_DISTANCE: f32 = 20.0;
const CAMERA_MAX_DISTANCE: f32 = 450.0;
const CAMERA_ELEVATION: f32 = 0.6;
const CAMERA_FAR: f32 = 2000.0;

/// Orbit parameters shipped with the demo.
const SCENE_JSON: &str = include_str!("../scene.json");

// ── Game event kinds to the host page ────────────────────────────────

/// a = eclipse kind (1 solar, 2 lunar), b = speed before freezing
const EVENT_ECLIPSE: f32 = 1.0;
/// a = search kind (0 none, 1 solar, 2 lunar), b = eclipse kind, c = time speed
const EVENT_STATUS: f32 = 2.0;
/// a = following the Earth (0/1)
const EVENT_FOLLOW: f32 = 3.0;

/// What the host was last told, to report only changes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Status {
    search: EclipseSearch,
    eclipse: EclipseKind,
    time_speed: f32,
}

pub struct EclipseOrrery {
    system: OrbitalSystem,
    follow_earth: bool,

    sun_id: Option<EntityId>,
    earth_id: Option<EntityId>,
    moon_id: Option<EntityId>,
    mars_id: Option<EntityId>,
    moon_orbit_id: Option<EntityId>,
    sky_id: Option<EntityId>,

    reported: Option<Status>,
}

impl EclipseOrrery {
    pub fn new() -> Self {
        Self::from_json(SCENE_JSON)
    }

    /// Build from a JSON orbit config, falling back to the defaults if it
    /// is malformed or invalid.
    pub fn from_json(json: &str) -> Self {
        let system = OrbitConfig::from_json(json)
            .and_then(OrbitalSystem::new)
            .unwrap_or_else(|err| {
                warn!("eclipse-orrery: {err}; using defaults");
                OrbitalSystem::default()
            });
        Self {
            system,
            follow_earth: false,
            sun_id: None,
            earth_id: None,
            moon_id: None,
            mars_id: None,
            moon_orbit_id: None,
            sky_id: None,
            reported: None,
        }
    }

    pub fn system(&self) -> &OrbitalSystem {
        &self.system
    }

    pub fn is_following(&self) -> bool {
        self.follow_earth
    }

    fn spawn_body(ctx: &mut EngineContext, visuals: &BodyVisuals, position: Vec3) -> EntityId {
        let id = ctx.next_id();
        let mut entity = Entity::new(id)
            .with_tag(visuals.tag)
            .with_position(position)
            .with_color(visuals.color);
        if let Some(texture) = ctx.textures.id(visuals.texture) {
            entity = entity.with_texture(texture);
        }
        ctx.spawn_drawable(&visuals.drawable(), entity)
    }

    fn spawn_orbit_line(ctx: &mut EngineContext, tag: &str, a: f32, b: f32, color: [f32; 3]) -> EntityId {
        let id = ctx.next_id();
        ctx.spawn_drawable(
            &Drawable::OrbitLine { semi_major: a, semi_minor: b, segments: bodies::ORBIT_SEGMENTS },
            Entity::new(id).with_tag(tag).with_color(color),
        )
    }

    fn handle_keys(&mut self, ctx: &mut EngineContext) {
        let keys = &ctx.keys;
        if keys.just_pressed(KEY_E) {
            self.system.toggle_search(EclipseKind::Solar);
        }
        if keys.just_pressed(KEY_L) {
            self.system.toggle_search(EclipseKind::Lunar);
        }
        if keys.just_pressed(KEY_R) {
            self.system.resume();
        }
        if keys.just_pressed(KEY_BACKSPACE) {
            self.system.reset();
        }
        if keys.just_pressed(KEY_F) {
            self.follow_earth = !self.follow_earth;
            if !self.follow_earth {
                ctx.camera.follow(OrbitalSystem::SUN);
            }
            ctx.emit_event(GameEvent::new(EVENT_FOLLOW, self.follow_earth as u8 as f32, 0.0, 0.0));
        }
    }

    fn sync_transforms(&self, ctx: &mut EngineContext) {
        let snap = self.system.snapshot();
        for (id, position) in [
            (self.sun_id, snap.sun),
            (self.earth_id, snap.earth),
            (self.moon_id, snap.moon),
            (self.mars_id, snap.mars),
            (self.moon_orbit_id, snap.earth),
        ] {
            if let Some(id) = id {
                ctx.scene.set_position(id, position);
            }
        }

        if self.follow_earth {
            ctx.camera.follow(snap.earth);
        }
        // The sky is centered on the eye so it never gets closer.
        if let Some(id) = self.sky_id {
            ctx.scene.set_position(id, ctx.camera.position());
        }
    }

    fn report_status(&mut self, ctx: &mut EngineContext) {
        let status = Status {
            search: self.system.search(),
            eclipse: self.system.eclipse().kind,
            time_speed: self.system.time_speed(),
        };
        if self.reported == Some(status) {
            return;
        }
        self.reported = Some(status);
        let search = status.search.kind().map_or(0.0, EclipseKind::code);
        ctx.emit_event(GameEvent::new(EVENT_STATUS, search, status.eclipse.code(), status.time_speed));
    }
}

impl Default for EclipseOrrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for EclipseOrrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_draw_commands: 32,
            clear_color: [0.0, 0.0, 0.02, 1.0],
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.load_textures(bodies::texture_manifest());
        ctx.camera = OrbitCamera::new(OrbitalSystem::SUN, CAMERA_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE)
            .with_elevation(CAMERA_ELEVATION)
            .with_far(CAMERA_FAR);
        ctx.light = PointLight::at(OrbitalSystem::SUN);

        // ── Sky ──────────────────────────────────────────────────────
        let id = ctx.next_id();
        let mut sky = Entity::new(id)
            .with_tag("sky")
            .with_scale(Vec3::splat(bodies::SKY_SCALE))
            .with_layer(RenderLayer::Background);
        if let Some(texture) = ctx.textures.id(bodies::SKY_TEXTURE) {
            sky = sky.with_texture(texture);
        }
        self.sky_id = Some(ctx.spawn_drawable(&Drawable::Skybox, sky));

        // ── Orbit lines ──────────────────────────────────────────────
        let cfg = self.system.config().clone();
        Self::spawn_orbit_line(ctx, "earth_orbit", cfg.earth.semi_major, cfg.earth.semi_minor, bodies::EARTH_ORBIT_COLOR);
        Self::spawn_orbit_line(ctx, "mars_orbit", cfg.mars.semi_major, cfg.mars.semi_minor, bodies::MARS_ORBIT_COLOR);
        self.moon_orbit_id = Some(Self::spawn_orbit_line(
            ctx,
            "moon_orbit",
            cfg.moon.semi_major,
            cfg.moon.semi_minor,
            bodies::MOON_ORBIT_COLOR,
        ));

        // ── Bodies ───────────────────────────────────────────────────
        let snap = self.system.snapshot();
        let sun = Self::spawn_body(ctx, &bodies::SUN, snap.sun);
        if let Some(entity) = ctx.scene.get_mut(sun) {
            entity.material.lit = false;
            entity.material.emissive = bodies::SUN_EMISSIVE;
        }
        self.sun_id = Some(sun);
        self.earth_id = Some(Self::spawn_body(ctx, &bodies::EARTH, snap.earth));
        self.moon_id = Some(Self::spawn_body(ctx, &bodies::MOON, snap.moon));
        self.mars_id = Some(Self::spawn_body(ctx, &bodies::MARS, snap.mars));

        self.sync_transforms(ctx);
        self.report_status(ctx);
        info!("eclipse-orrery: {} entities, {} textures", ctx.scene.len(), ctx.textures.len());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        // ── Handle input ─────────────────────────────────────────────
        for event in input.iter() {
            ctx.camera.handle_input(event);
        }
        self.handle_keys(ctx);

        // ── Simulate ─────────────────────────────────────────────────
        if let Some(kind) = self.system.advance(dt) {
            let frozen = self.system.eclipse().frozen_time_speed;
            debug!("{} eclipse, frozen at speed {frozen}", kind.name());
            ctx.emit_event(GameEvent::new(EVENT_ECLIPSE, kind.code(), frozen, 0.0));
        }

        // ── Sync transforms ──────────────────────────────────────────
        self.sync_transforms(ctx);
        self.report_status(ctx);
    }
}
