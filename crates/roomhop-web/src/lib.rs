pub mod runner;

pub use runner::GameRunner;

#[doc(hidden)]
pub use js_sys;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates `thread_local!` storage for the [`GameRunner`], a `with_runner()`
/// helper, and the wasm-bindgen exports the host calls: lifecycle
/// (`game_init`, `game_tick`, `game_teardown`), input handlers and data
/// accessors. Calls made before `game_init` are ignored and accessors return
/// zero or null.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use roomhop_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// roomhop_web::export_game!(MyGame, "my-game");
/// ```
///
/// The game type must provide `fn new() -> Self`. Pass `vectors` as a third
/// argument to also export the backdrop and HUD canvas accessors.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
        }

        #[wasm_bindgen]
        pub fn game_init(has_keyboard: bool, is_desktop: bool) -> Result<(), JsValue> {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let device = DeviceInfo { has_keyboard, is_desktop };
            let mut runner = $crate::GameRunner::new(<$game_type>::new(), device);
            let result = runner.init();
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            match result {
                Ok(()) => {
                    log::info!("{}: initialized", $game_name);
                    Ok(())
                }
                Err(err) => {
                    log::error!("{}: init failed: {}", $game_name, err);
                    Err($crate::js_sys::Error::new(&err.to_string()).into())
                }
            }
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_teardown() {
            with_runner(|r| r.teardown());
            log::info!("{}: torn down", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(id: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { id, pos: glam::Vec2::new(x, y) }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(id: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { id, pos: glam::Vec2::new(x, y) }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(id: u32, x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { id, pos: glam::Vec2::new(x, y) }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height()).unwrap_or(0.0)
        }

        // ---- Labels ----

        #[wasm_bindgen]
        pub fn get_labels_json() -> String {
            with_runner(|r| r.labels_json().to_string()).unwrap_or_else(|| String::from("[]"))
        }

        #[wasm_bindgen]
        pub fn get_labels_revision() -> u32 {
            with_runner(|r| r.labels_revision()).unwrap_or(0)
        }

        // ---- Textures ----

        #[wasm_bindgen]
        pub fn get_texture_count() -> u32 {
            with_runner(|r| r.texture_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_texture_width(index: u32) -> u32 {
            with_runner(|r| r.texture_width(index)).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_texture_height(index: u32) -> u32 {
            with_runner(|r| r.texture_height(index)).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_texture_ptr(index: u32) -> *const u8 {
            with_runner(|r| r.texture_ptr(index)).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_texture_len(index: u32) -> u32 {
            with_runner(|r| r.texture_len(index)).unwrap_or(0)
        }
    };

    // Variant with vectors feature
    ($game_type:ty, $game_name:literal, vectors) => {
        $crate::export_game!($game_type, $game_name);

        // ---- Vector canvas accessors (only when vectors feature is enabled) ----

        #[wasm_bindgen]
        pub fn get_backdrop_ptr() -> *const f32 {
            with_runner(|r| r.backdrop_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_backdrop_vertex_count() -> u32 {
            with_runner(|r| r.backdrop_vertex_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_backdrop_revision() -> u32 {
            with_runner(|r| r.backdrop_revision()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_hud_ptr() -> *const f32 {
            with_runner(|r| r.hud_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_hud_vertex_count() -> u32 {
            with_runner(|r| r.hud_vertex_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_hud_revision() -> u32 {
            with_runner(|r| r.hud_revision()).unwrap_or(0)
        }
    };
}
