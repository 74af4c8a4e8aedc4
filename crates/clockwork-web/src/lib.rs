pub mod runner;

pub use runner::GameRunner;

#[doc(hidden)]
pub use clockwork_engine;
#[doc(hidden)]
pub use js_sys;

/// Log through the browser console before the logger is installed.
#[doc(hidden)]
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper (a call before `game_init()` logs and returns the default)
/// - lifecycle, input, texture-status, frame and mesh exports
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::PendulumClock;
///
/// clockwork_web::export_game!(PendulumClock, "pendulum-clock");
/// ```
///
/// The scene type needs a `new()` constructor. The calling crate must
/// depend on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R: Default>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => f(runner),
                None => {
                    $crate::console_warn(concat!($game_name, ": not initialized, call game_init() first"));
                    R::default()
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn game_shutdown() {
            with_runner(|r| r.shutdown());
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32, button: u8) {
            with_runner(|r| r.push_input($crate::clockwork_engine::InputEvent::PointerDown { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32, button: u8) {
            with_runner(|r| r.push_input($crate::clockwork_engine::InputEvent::PointerUp { x, y, button }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::clockwork_engine::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta: f32) {
            with_runner(|r| r.push_input($crate::clockwork_engine::InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input($crate::clockwork_engine::InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input($crate::clockwork_engine::InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input($crate::clockwork_engine::InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Textures ----

        #[wasm_bindgen]
        pub fn get_texture_manifest() -> String {
            with_runner(|r| r.texture_manifest_json())
        }

        #[wasm_bindgen]
        pub fn game_texture_loaded(index: u32) {
            with_runner(|r| r.texture_loaded(index));
        }

        #[wasm_bindgen]
        pub fn game_texture_failed(index: u32) {
            with_runner(|r| r.texture_failed(index));
        }

        // ---- Frame buffer ----

        #[wasm_bindgen]
        pub fn get_frame_ptr() -> *const f32 {
            RUNNER.with(|cell| match cell.borrow().as_ref() {
                Some(r) => r.frame_ptr(),
                None => std::ptr::null(),
            })
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        #[wasm_bindgen]
        pub fn get_max_draw_commands() -> u32 {
            with_runner(|r| r.max_draw_commands())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_command_count() -> u32 {
            with_runner(|r| r.command_count())
        }

        // ---- Meshes ----

        /// Ids of meshes to upload, oldest first. Each id is returned once.
        #[wasm_bindgen]
        pub fn take_pending_uploads() -> $crate::js_sys::Uint32Array {
            let ids: Vec<u32> = with_runner(|r| r.take_pending_uploads().iter().map(|id| id.0).collect());
            $crate::js_sys::Uint32Array::from(ids.as_slice())
        }

        /// Ids of meshes whose GPU buffers can be freed. Each id is returned once.
        #[wasm_bindgen]
        pub fn take_released_meshes() -> $crate::js_sys::Uint32Array {
            let ids: Vec<u32> = with_runner(|r| r.take_released().iter().map(|id| id.0).collect());
            $crate::js_sys::Uint32Array::from(ids.as_slice())
        }

        /// Interleaved vertices (11 floats each) of a mesh; empty if unknown.
        #[wasm_bindgen]
        pub fn get_mesh_vertices(id: u32) -> $crate::js_sys::Float32Array {
            let floats: Vec<f32> = with_runner(|r| {
                r.mesh($crate::clockwork_engine::MeshId(id)).map(|m| m.vertex_floats().to_vec()).unwrap_or_default()
            });
            $crate::js_sys::Float32Array::from(floats.as_slice())
        }

        #[wasm_bindgen]
        pub fn get_mesh_indices(id: u32) -> $crate::js_sys::Uint32Array {
            let indices: Vec<u32> = with_runner(|r| {
                r.mesh($crate::clockwork_engine::MeshId(id)).map(|m| m.indices.clone()).unwrap_or_default()
            });
            $crate::js_sys::Uint32Array::from(indices.as_slice())
        }

        /// 0 = triangles, 1 = line strip.
        #[wasm_bindgen]
        pub fn get_mesh_topology(id: u32) -> u32 {
            with_runner(|r| r.mesh($crate::clockwork_engine::MeshId(id)).map_or(0, |m| m.topology as u32))
        }
    };
}
