/// Pendulum Clock: a wooden case with a dial, twelve hour markers, three
/// hands and a swinging pendulum.
///
/// The pendulum is the only clock: every full swing advances the dial by
/// two seconds. Stopping it freezes the hands.

use clockwork_engine::*;
use clockwork_engine::input::keys::KEY_SPACE;
use clockwork_engine::input::queue::{InputEvent, InputQueue};
use glam::Vec3;
use log::{info, warn};

// ── Layout ───────────────────────────────────────────────────────────

/// Pivot of the pendulum, just below the case.
const PIVOT: Vec3 = Vec3::new(0.0, -0.5, 0.0);
/// Gap between the case front and the dial.
const FACE_OFFSET: f32 = 0.01;
/// Markers sit just above the dial.
const MARKER_OFFSET: f32 = 0.02;
const MARKER_SIZE: f32 = 0.06;
/// Hands stack above the markers in this order.
const HAND_OFFSETS: [(HandKind, f32); 3] = [
    (HandKind::Hour, 0.05),
    (HandKind::Minute, 0.06),
    (HandKind::Second, 0.07),
];
const ROD_WIDTH: f32 = 0.01;
const BOB_SEGMENTS: u32 = 24;

/// Scene configuration shipped with the demo.
const SCENE_JSON: &str = include_str!("../scene.json");

// ── Custom event kinds from the host page ────────────────────────────

/// a = hours, b = minutes, c = seconds
const CUSTOM_SET_TIME: u32 = 1;
const CUSTOM_START: u32 = 2;
const CUSTOM_STOP: u32 = 3;

// ── Game event kinds to the host page ────────────────────────────────

/// a = hours, b = minutes, c = seconds
const EVENT_TIME: f32 = 1.0;
/// a = running (0/1)
const EVENT_PENDULUM: f32 = 2.0;

pub struct PendulumClock {
    config: ClockConfig,
    model: ClockModel,

    hand_ids: [Option<EntityId>; 3],
    rod_id: Option<EntityId>,
    bob_id: Option<EntityId>,

    /// Pendulum state last reported to the host.
    reported_running: Option<bool>,
}

impl PendulumClock {
    pub fn new() -> Self {
        Self::from_json(SCENE_JSON)
    }

    /// Build from a JSON config, falling back to the defaults if it is
    /// malformed or invalid.
    pub fn from_json(json: &str) -> Self {
        let config = ClockConfig::from_json(json).unwrap_or_else(|err| {
            warn!("pendulum-clock: {err}; using defaults");
            ClockConfig::default()
        });
        Self::with_config(config)
    }

    /// Use `config` if it validates, otherwise the defaults.
    pub fn with_config(config: ClockConfig) -> Self {
        let (config, model) = match config.validate().and_then(|()| config.build_model()) {
            Ok(model) => (config, model),
            Err(err) => {
                warn!("pendulum-clock: {err}; using defaults");
                let config = ClockConfig::default();
                let model = Self::default_model(&config);
                (config, model)
            }
        };
        Self {
            config,
            model,
            hand_ids: [None; 3],
            rod_id: None,
            bob_id: None,
            reported_running: None,
        }
    }

    fn default_model(config: &ClockConfig) -> ClockModel {
        let mut model = ClockModel::new(Pendulum::default(), config.start_time);
        if config.autostart {
            model.start_pendulum();
        }
        model
    }

    pub fn model(&self) -> &ClockModel {
        &self.model
    }

    fn front_z(&self) -> f32 {
        self.config.box_depth / 2.0
    }

    /// Bob center for a swing angle: the rod's tip after rotating about z.
    fn bob_position(&self, swing: f32) -> Vec3 {
        let length = self.config.rod_length;
        PIVOT + Vec3::new(length * swing.sin(), -length * swing.cos(), 0.0)
    }

    fn apply_custom(&mut self, kind: u32, a: f32, b: f32, c: f32) {
        match kind {
            CUSTOM_SET_TIME => self.model.set_time(a as i64, b as i64, c as i64),
            CUSTOM_START => self.model.start_pendulum(),
            CUSTOM_STOP => self.model.stop_pendulum(),
            _ => {}
        }
    }

    fn sync_hands(&self, ctx: &mut EngineContext) {
        let angles = self.model.hand_angles();
        for (slot, kind) in HandKind::ALL.iter().enumerate() {
            if let Some(id) = self.hand_ids[slot] {
                ctx.scene.set_rotation(id, Vec3::new(0.0, 0.0, angles.z_rotation(*kind)));
            }
        }
    }

    fn sync_pendulum(&self, ctx: &mut EngineContext) {
        let swing = self.model.swing_angle();
        if let Some(id) = self.rod_id {
            ctx.scene.set_rotation(id, Vec3::new(0.0, 0.0, swing));
        }
        if let Some(id) = self.bob_id {
            ctx.scene.set_position(id, self.bob_position(swing));
        }
    }

    fn emit_time(&self, ctx: &mut EngineContext) {
        let t = self.model.time();
        ctx.emit_event(GameEvent::new(EVENT_TIME, t.hours as f32, t.minutes as f32, t.seconds as f32));
    }
}

impl Default for PendulumClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for PendulumClock {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_draw_commands: 64,
            clear_color: [0.2, 0.3, 0.3, 1.0],
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let cfg = self.config.clone();
        let front = self.front_z();

        ctx.camera = OrbitCamera::new(Vec3::new(0.0, -0.2, 0.0), 3.0, 1.0, 10.0);
        ctx.light = PointLight::at(Vec3::new(3.0, 3.0, 3.0));

        // ── Case and dial ────────────────────────────────────────────
        let id = ctx.next_id();
        ctx.spawn_drawable(
            &Drawable::Box { width: cfg.box_width, height: cfg.box_height, depth: cfg.box_depth },
            Entity::new(id).with_tag("case"),
        );
        let id = ctx.next_id();
        ctx.spawn_drawable(
            &Drawable::Face { radius: cfg.face_radius, segments: cfg.face_segments },
            Entity::new(id)
                .with_tag("face")
                .with_position(Vec3::new(0.0, 0.0, front + FACE_OFFSET)),
        );

        // ── Hour markers ─────────────────────────────────────────────
        for number in 1..=12 {
            let at = geometry::marker_position(number, cfg.face_radius);
            let id = ctx.next_id();
            ctx.spawn_drawable(
                &Drawable::Marker { size: MARKER_SIZE },
                Entity::new(id)
                    .with_tag(format!("marker_{number}"))
                    .with_position(Vec3::new(at.x, at.y, front + MARKER_OFFSET))
                    .with_layer(RenderLayer::Overlay),
            );
        }

        // ── Hands ────────────────────────────────────────────────────
        for (slot, (kind, offset)) in HAND_OFFSETS.iter().enumerate() {
            let id = ctx.next_id();
            ctx.spawn_drawable(
                &Drawable::Hand { kind: *kind },
                Entity::new(id)
                    .with_tag(kind.tag())
                    .with_position(Vec3::new(0.0, 0.0, front + offset))
                    .with_layer(RenderLayer::Overlay),
            );
            self.hand_ids[slot] = Some(id);
        }

        // ── Pendulum ─────────────────────────────────────────────────
        let id = ctx.next_id();
        ctx.spawn_drawable(
            &Drawable::Rod { length: cfg.rod_length, width: ROD_WIDTH },
            Entity::new(id).with_tag("rod").with_position(PIVOT),
        );
        self.rod_id = Some(id);

        let id = ctx.next_id();
        ctx.spawn_drawable(
            &Drawable::Bob { radius: cfg.bob_radius, segments: BOB_SEGMENTS },
            Entity::new(id).with_tag("bob").with_position(self.bob_position(0.0)),
        );
        self.bob_id = Some(id);

        self.sync_hands(ctx);
        self.sync_pendulum(ctx);
        self.emit_time(ctx);
        info!("pendulum-clock: {} entities, time {}", ctx.scene.len(), self.model.time());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        // ── Handle input ─────────────────────────────────────────────
        let mut time_set = false;
        for event in input.iter() {
            if ctx.camera.handle_input(event) {
                continue;
            }
            if let InputEvent::Custom { kind, a, b, c } = *event {
                time_set |= kind == CUSTOM_SET_TIME;
                self.apply_custom(kind, a, b, c);
            }
        }
        if ctx.keys.just_pressed(KEY_SPACE) {
            self.model.toggle_pendulum();
        }

        // ── Simulate ─────────────────────────────────────────────────
        let changed = self.model.update(dt);

        // ── Sync transforms ──────────────────────────────────────────
        if changed || time_set {
            self.sync_hands(ctx);
            self.emit_time(ctx);
        }
        self.sync_pendulum(ctx);

        let running = self.model.is_running();
        if self.reported_running != Some(running) {
            self.reported_running = Some(running);
            ctx.emit_event(GameEvent::new(EVENT_PENDULUM, running as u8 as f32, 0.0, 0.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PendulumClock, EngineContext) {
        let mut game = PendulumClock::new();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        (game, ctx)
    }

    fn tick(game: &mut PendulumClock, ctx: &mut EngineContext, events: &[InputEvent], dt: f32) {
        ctx.clear_frame_data();
        ctx.keys.begin_frame();
        let mut input = InputQueue::new();
        for event in events {
            ctx.keys.apply(event);
            input.push(*event);
        }
        game.update(ctx, &input, dt);
    }

    fn z_rotation(ctx: &EngineContext, tag: &str) -> f32 {
        ctx.scene.find_by_tag(tag).unwrap().transform.rotation.z
    }

    #[test]
    fn init_spawns_every_part() {
        let (_, ctx) = setup();
        // case, face, 12 markers, 3 hands, rod, bob
        assert_eq!(ctx.scene.len(), 19);
        assert_eq!(ctx.meshes.len(), 19);
        assert!(ctx.scene.find_by_tag("marker_12").is_some());
        assert_eq!(ctx.scene.find_by_tag("hand_second").unwrap().layer, RenderLayer::Overlay);
    }

    #[test]
    fn starts_at_half_past_ten() {
        let (game, ctx) = setup();
        assert_eq!(game.model().time(), ClockTime::new(10, 30, 0));
        assert_eq!(ctx.events[0], GameEvent::new(EVENT_TIME, 10.0, 30.0, 0.0));
        // minute hand on 6: dial angle 180°, so -(180 - 90)° about z
        assert!((z_rotation(&ctx, "hand_minute") + 90f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn one_period_advances_two_seconds() {
        let (mut game, mut ctx) = setup();
        for _ in 0..10 {
            tick(&mut game, &mut ctx, &[], 0.2);
        }
        assert_eq!(game.model().time(), ClockTime::new(10, 30, 2));
        let second = z_rotation(&ctx, "hand_second");
        assert!((second - (90.0f32 - 12.0).to_radians()).abs() < 1e-5);
    }

    #[test]
    fn space_toggles_pendulum_once_per_press() {
        let (mut game, mut ctx) = setup();
        let down = InputEvent::KeyDown { key_code: KEY_SPACE };
        tick(&mut game, &mut ctx, &[down], 0.1);
        assert!(!game.model().is_running());
        // still held: no second toggle
        tick(&mut game, &mut ctx, &[], 0.1);
        assert!(!game.model().is_running());
        tick(&mut game, &mut ctx, &[InputEvent::KeyUp { key_code: KEY_SPACE }], 0.1);
        tick(&mut game, &mut ctx, &[down], 0.1);
        assert!(game.model().is_running());
    }

    #[test]
    fn stopped_pendulum_freezes_the_hands() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx, &[InputEvent::Custom { kind: CUSTOM_STOP, a: 0.0, b: 0.0, c: 0.0 }], 0.1);
        for _ in 0..50 {
            tick(&mut game, &mut ctx, &[], 0.2);
        }
        assert_eq!(game.model().time(), ClockTime::new(10, 30, 0));
    }

    #[test]
    fn set_time_event_moves_the_hands() {
        let (mut game, mut ctx) = setup();
        let set = InputEvent::Custom { kind: CUSTOM_SET_TIME, a: 3.0, b: 0.0, c: 0.0 };
        tick(&mut game, &mut ctx, &[set], 0.0);
        assert_eq!(game.model().time(), ClockTime::new(3, 0, 0));
        assert!(ctx.events.contains(&GameEvent::new(EVENT_TIME, 3.0, 0.0, 0.0)));
        // hour hand on 3 points along +x
        assert!(z_rotation(&ctx, "hand_hour").abs() < 1e-5);
    }

    #[test]
    fn bob_follows_the_rod_tip() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx, &[], 0.5);
        let swing = game.model().swing_angle();
        assert!(swing.abs() > 0.1);
        assert!((z_rotation(&ctx, "rod") - swing).abs() < 1e-6);
        let bob = ctx.scene.find_by_tag("bob").unwrap().transform.position;
        assert!(((bob - PIVOT).length() - 0.8).abs() < 1e-5);
        assert!((bob.x - 0.8 * swing.sin()).abs() < 1e-5);
    }

    #[test]
    fn pendulum_state_is_reported_on_change() {
        let (mut game, mut ctx) = setup();
        tick(&mut game, &mut ctx, &[], 0.01);
        assert!(ctx.events.contains(&GameEvent::new(EVENT_PENDULUM, 1.0, 0.0, 0.0)));
        tick(&mut game, &mut ctx, &[], 0.01);
        assert!(ctx.events.iter().all(|e| e.kind != EVENT_PENDULUM));
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let game = PendulumClock::from_json(r#"{ "period": 0 }"#);
        assert_eq!(game.model().pendulum().period(), 2.0);
        let game = PendulumClock::from_json("not json");
        assert_eq!(game.model().time(), ClockTime::new(10, 30, 0));
    }

    #[test]
    fn with_config_rejects_bad_geometry() {
        let config = ClockConfig {
            rod_length: f32::NAN,
            face_segments: 0,
            box_width: -1.0,
            ..ClockConfig::default()
        };
        let mut game = PendulumClock::with_config(config);
        assert_eq!(game.config.rod_length, ClockConfig::default().rod_length);
        assert_eq!(game.config.face_segments, ClockConfig::default().face_segments);

        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        tick(&mut game, &mut ctx, &[], 0.5);
        assert_eq!(ctx.scene.len(), 19);
        for entity in ctx.scene.iter() {
            assert!(entity.transform.position.is_finite(), "{} not finite", entity.tag);
        }
        let bob = ctx.scene.find_by_tag("bob").unwrap().transform.position;
        assert!(((bob - PIVOT).length() - 0.8).abs() < 1e-5);
    }
}
