use roomhop_engine::*;
use glam::Vec2;

const WORLD_W: f32 = 1280.0;
const WORLD_H: f32 = 720.0;

/// Shows a single centered line of text and nothing else.
pub struct HelloText {
    label: Option<LabelId>,
}

impl HelloText {
    pub fn new() -> Self {
        Self { label: None }
    }
}

impl Game for HelloText {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: WORLD_W,
            world_height: WORLD_H,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), InitError> {
        let label = TextLabel::new(
            "Hello World",
            Vec2::new(WORLD_W / 2.0, WORLD_H / 2.0),
            32.0,
            Color::WHITE,
        )
        .with_anchor(TextAnchor::Center);
        self.label = Some(ctx.text.add(label));
        log::info!("HelloText: label placed at center");
        Ok(())
    }

    fn update(&mut self, _ctx: &mut EngineContext, _input: &InputState) {}

    fn teardown(&mut self, ctx: &mut EngineContext) {
        if let Some(id) = self.label.take() {
            ctx.text.remove(id);
        }
    }
}
