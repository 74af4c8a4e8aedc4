use clockwork_engine::bridge::protocol::FrameHeader;
use clockwork_engine::{
    build_draw_list, DrawList, EngineContext, FrameClock, FrameData, FrameUniforms, Game,
    GameConfig, InputEvent, InputQueue, MeshData, MeshId, ProtocolLayout, Renderer, TextureId,
};
use log::{info, warn};

/// Generic runner that wires a `Game` to the host.
///
/// Each scene crate creates a `thread_local!` GameRunner through
/// `export_game!`, because wasm-bindgen cannot export generic structs.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    draw_list: DrawList,
    uniforms: FrameUniforms,
    /// Flat frame buffer the host reads after every tick.
    frame_buffer: Vec<f32>,
    /// Meshes the host has yet to upload, oldest first.
    pending_uploads: Vec<MeshId>,
    /// Meshes whose GPU buffers the host has yet to free.
    released: Vec<MeshId>,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        Self {
            ctx: EngineContext::with_viewport(config.viewport),
            clock: FrameClock::new(config.max_dt),
            frame_buffer: vec![0.0; layout.buffer_total_floats],
            game,
            input: InputQueue::new(),
            config,
            layout,
            draw_list: DrawList::new(),
            uniforms: FrameUniforms::default(),
            pending_uploads: Vec::new(),
            released: Vec::new(),
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.build_frame();
        info!(
            "runner ready: {} entities, {} meshes",
            self.ctx.scene.len(),
            self.ctx.meshes.len()
        );
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: key snapshot, game update, frame buffer.
    pub fn tick(&mut self, raw_dt: f32) {
        if !self.initialized {
            return;
        }
        self.ctx.clear_frame_data();
        let dt = self.clock.tick(raw_dt);

        self.ctx.keys.begin_frame();
        for event in self.input.iter() {
            self.ctx.keys.apply(event);
        }

        self.game.update(&mut self.ctx, &self.input, dt);
        self.input.clear();

        self.build_frame();
    }

    fn build_frame(&mut self) {
        build_draw_list(self.ctx.scene.iter(), &self.ctx.meshes, &self.ctx.textures, &mut self.draw_list);
        self.uniforms = FrameUniforms::new(&self.ctx.camera, &self.ctx.light, self.ctx.aspect());
        let header = FrameHeader {
            frame: self.clock.frame(),
            viewport: self.ctx.viewport(),
            clear_color: self.config.clear_color,
            elapsed: self.clock.elapsed(),
        };
        self.layout.pack(
            &mut self.frame_buffer,
            &header,
            &self.uniforms,
            &self.draw_list,
            &self.ctx.events,
        );

        self.pending_uploads.extend(self.ctx.meshes.drain_pending_uploads());
        self.released.extend(self.ctx.meshes.drain_released());
        // A mesh released before the host uploaded it needs neither call.
        let store = &self.ctx.meshes;
        let (live, gone): (Vec<MeshId>, Vec<MeshId>) =
            self.pending_uploads.iter().partition(|&&id| store.contains(id));
        self.pending_uploads = live;
        self.released.retain(|id| !gone.contains(id));
    }

    /// Feed pending uploads, releases and the current frame to a native back-end.
    pub fn present<R: Renderer>(&mut self, renderer: &mut R) {
        for id in self.take_pending_uploads() {
            if let Some(mesh) = self.ctx.meshes.get(id) {
                renderer.upload_mesh(id, mesh);
            }
        }
        for id in self.take_released() {
            renderer.release_mesh(id);
        }
        let frame = FrameData {
            uniforms: &self.uniforms,
            commands: &self.draw_list.commands,
            clear_color: self.config.clear_color,
        };
        renderer.draw(&frame);
    }

    /// Release every mesh; the host frees them on its next `take_released`.
    pub fn shutdown(&mut self) {
        self.ctx.clear_scene();
        self.build_frame();
        self.initialized = false;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.set_viewport(width, height);
    }

    /// Resize for a native back-end that owns its surface.
    pub fn resize_renderer<R: Renderer>(&mut self, renderer: &mut R, width: u32, height: u32) {
        self.resize(width as f32, height as f32);
        let (w, h) = self.ctx.viewport();
        renderer.resize(w as u32, h as u32);
    }

    pub fn texture_loaded(&mut self, index: u32) {
        self.ctx.textures.mark_loaded(TextureId(index));
    }

    pub fn texture_failed(&mut self, index: u32) {
        self.ctx.textures.mark_failed(TextureId(index));
    }

    /// Texture manifest as JSON; `{"textures":[]}` if it cannot be encoded.
    pub fn texture_manifest_json(&self) -> String {
        match self.ctx.texture_manifest().to_json() {
            Ok(json) => json,
            Err(err) => {
                warn!("{err}");
                String::from(r#"{"textures":[]}"#)
            }
        }
    }

    pub fn take_pending_uploads(&mut self) -> Vec<MeshId> {
        std::mem::take(&mut self.pending_uploads)
    }

    pub fn take_released(&mut self) -> Vec<MeshId> {
        std::mem::take(&mut self.released)
    }

    pub fn mesh(&self, id: MeshId) -> Option<&MeshData> {
        self.ctx.meshes.get(id)
    }

    // ---- Accessors for the host ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame_buffer.as_ptr()
    }

    pub fn frame_floats(&self) -> &[f32] {
        &self.frame_buffer
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn max_draw_commands(&self) -> u32 {
        self.layout.max_draw_commands as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn command_count(&self) -> u32 {
        self.draw_list.len().min(self.layout.max_draw_commands) as u32
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clockwork_engine::{Drawable, Entity, GameEvent};

    /// Spawns one skybox and counts frames.
    struct StubGame {
        frames: u32,
        last_dt: f32,
        spawned: Option<clockwork_engine::EntityId>,
    }

    impl Game for StubGame {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            self.spawned = Some(ctx.spawn_drawable(&Drawable::Skybox, Entity::new(id)));
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
            self.frames += 1;
            self.last_dt = dt;
            if ctx.keys.just_pressed(8) {
                if let Some(id) = self.spawned.take() {
                    ctx.despawn(id);
                }
            }
            if !input.is_empty() {
                ctx.emit_event(GameEvent::new(1.0, input.len() as f32, 0.0, 0.0));
            }
        }
    }

    #[derive(Default)]
    struct Recorder {
        uploads: Vec<MeshId>,
        releases: Vec<MeshId>,
        draws: Vec<usize>,
        size: (u32, u32),
    }

    impl Renderer for Recorder {
        fn backend(&self) -> &'static str {
            "recorder"
        }
        fn upload_mesh(&mut self, id: MeshId, _mesh: &MeshData) {
            self.uploads.push(id);
        }
        fn release_mesh(&mut self, id: MeshId) {
            self.releases.push(id);
        }
        fn draw(&mut self, frame: &FrameData) {
            self.draws.push(frame.commands.len());
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.size = (width, height);
        }
    }

    fn runner() -> GameRunner<StubGame> {
        let mut r = GameRunner::new(StubGame { frames: 0, last_dt: 0.0, spawned: None });
        r.init();
        r
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut r = GameRunner::new(StubGame { frames: 0, last_dt: 0.0, spawned: None });
        r.tick(0.016);
        assert_eq!(r.game().frames, 0);
    }

    #[test]
    fn tick_caps_dt_and_clears_input() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown { key_code: 32 });
        r.tick(5.0);
        assert_eq!(r.game().frames, 1);
        assert_eq!(r.game().last_dt, 0.25);
        assert_eq!(r.context().events.len(), 1);
        r.tick(0.016);
        assert!(r.context().events.is_empty());
    }

    #[test]
    fn present_uploads_once_and_draws() {
        let mut r = runner();
        let mut gpu = Recorder::default();
        r.present(&mut gpu);
        r.tick(0.016);
        r.present(&mut gpu);
        assert_eq!(gpu.uploads.len(), 1);
        assert_eq!(gpu.draws, vec![1, 1]);
    }

    #[test]
    fn despawn_reaches_the_renderer_once() {
        let mut r = runner();
        let mut gpu = Recorder::default();
        r.present(&mut gpu);
        r.push_input(InputEvent::KeyDown { key_code: 8 });
        r.tick(0.016);
        r.present(&mut gpu);
        r.tick(0.016);
        r.present(&mut gpu);
        assert_eq!(gpu.releases, gpu.uploads);
        assert_eq!(gpu.draws, vec![1, 0, 0]);
    }

    #[test]
    fn release_before_upload_is_silent() {
        let mut r = runner();
        r.push_input(InputEvent::KeyDown { key_code: 8 });
        r.tick(0.016);
        assert!(r.take_pending_uploads().is_empty());
        assert!(r.take_released().is_empty());
    }

    #[test]
    fn frame_buffer_has_layout_size() {
        let r = runner();
        assert_eq!(r.frame_floats().len() as u32, r.buffer_total_floats());
        assert_eq!(r.command_count(), 1);
    }

    #[test]
    fn shutdown_releases_uploaded_meshes() {
        let mut r = runner();
        let uploaded = r.take_pending_uploads();
        r.shutdown();
        assert_eq!(r.take_released(), uploaded);
    }

    #[test]
    fn resize_reaches_context_and_renderer() {
        let mut r = runner();
        let mut gpu = Recorder::default();
        r.resize_renderer(&mut gpu, 1024, 512);
        assert_eq!(gpu.size, (1024, 512));
        assert_eq!(r.context().aspect(), 2.0);
        // zero height keeps the previous viewport
        r.resize_renderer(&mut gpu, 640, 0);
        assert_eq!(gpu.size, (1024, 512));
    }
}
