use roomhop_engine::{
    build_render_buffer, DeviceInfo, EngineContext, FixedTimestep, Game, GameConfig, InitError,
    InputEvent, InputQueue, InputState, RenderBuffer,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export generic
/// structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    input_state: InputState,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
    /// Last serialized label set; refreshed only when labels change.
    labels_json: String,
    labels_revision: u32,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G, device: DeviceInfo) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::new(&config, device),
            input: InputQueue::new(),
            input_state: InputState::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            timestep: FixedTimestep::new(config.fixed_dt),
            config,
            game,
            initialized: false,
            labels_json: String::from("[]"),
            labels_revision: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    ///
    /// On failure the runner stays uninitialized: `tick` is a no-op and the
    /// scene holds whatever the game managed to create before bailing out.
    pub fn init(&mut self) -> Result<(), InitError> {
        self.game.init(&mut self.ctx)?;
        self.initialized = true;
        self.refresh_labels();
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: fold input, run fixed steps, build render buffer.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        // Input stays queued until a frame actually runs a step, otherwise
        // short frames would fold and then discard edges nobody saw.
        let steps = self.timestep.advance(dt);
        if steps > 0 {
            self.input_state.begin_frame(self.input.drain());
        }
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input_state);
            #[cfg(feature = "physics")]
            self.ctx.step_physics();
            self.input_state.end_step();
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.refresh_labels();
    }

    /// Let the game release its entities and stop ticking.
    pub fn teardown(&mut self) {
        if !self.initialized {
            return;
        }
        self.game.teardown(&mut self.ctx);
        self.initialized = false;
        self.refresh_labels();
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
    }

    fn refresh_labels(&mut self) {
        if !self.ctx.text.take_dirty() {
            return;
        }
        match self.ctx.text.to_json() {
            Ok(json) => {
                self.labels_json = json;
                self.labels_revision = self.labels_revision.wrapping_add(1);
            }
            Err(err) => log::error!("failed to serialize labels: {}", err),
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Labels ----

    pub fn labels_json(&self) -> &str {
        &self.labels_json
    }

    pub fn labels_revision(&self) -> u32 {
        self.labels_revision
    }

    // ---- Textures ----

    pub fn texture_count(&self) -> u32 {
        self.ctx.textures.len() as u32
    }

    pub fn texture_width(&self, index: u32) -> u32 {
        self.texture(index).map_or(0, |t| t.width)
    }

    pub fn texture_height(&self, index: u32) -> u32 {
        self.texture(index).map_or(0, |t| t.height)
    }

    pub fn texture_ptr(&self, index: u32) -> *const u8 {
        self.texture(index).map_or(std::ptr::null(), |t| t.rgba.as_ptr())
    }

    pub fn texture_len(&self, index: u32) -> u32 {
        self.texture(index).map_or(0, |t| t.rgba.len() as u32)
    }

    fn texture(&self, index: u32) -> Option<&roomhop_engine::Texture> {
        self.ctx.textures.get(roomhop_engine::TextureId(index))
    }

    // ---- Vector canvases ----

    #[cfg(feature = "vectors")]
    pub fn backdrop_ptr(&self) -> *const f32 {
        self.ctx.backdrop.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn backdrop_vertex_count(&self) -> u32 {
        self.ctx.backdrop.vertex_count() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn backdrop_revision(&self) -> u32 {
        self.ctx.backdrop.revision()
    }

    #[cfg(feature = "vectors")]
    pub fn hud_ptr(&self) -> *const f32 {
        self.ctx.hud.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn hud_vertex_count(&self) -> u32 {
        self.ctx.hud.vertex_count() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn hud_revision(&self) -> u32 {
        self.ctx.hud.revision()
    }
}
