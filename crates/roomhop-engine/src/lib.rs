pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, DeviceInfo, InitError};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::color::Color;
pub use components::layer::RenderLayer;
pub use components::sprite::{SpriteComponent, TextureId, Tint};
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use input::state::{InputState, KeyCode};
pub use assets::texture::{TextureCanvas, TextureRegistry, Texture};
pub use systems::render::build_render_buffer;
pub use systems::text::{TextState, TextLabel, TextAnchor, LabelId};

#[cfg(feature = "physics")]
pub use core::physics::{
    PhysicsWorld, PhysicsBody, BodyDesc, BodyType,
    ColliderDesc, ColliderMaterial,
};

#[cfg(feature = "vectors")]
pub use systems::vector::{VectorCanvas, VectorVertex};
