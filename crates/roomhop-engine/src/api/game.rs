use std::fmt;

use crate::api::types::{EntityId, GameEvent};
use crate::assets::texture::TextureRegistry;
use crate::core::scene::Scene;
use crate::input::state::InputState;
use crate::systems::text::TextState;
#[cfg(feature = "physics")]
use crate::components::entity::Entity;
#[cfg(feature = "physics")]
use crate::core::physics::{BodyDesc, ColliderMaterial, PhysicsWorld};
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorCanvas;
use glam::Vec2;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units. The viewport shows exactly this much.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Initial capacity of the sprite instance buffer.
    pub max_instances: usize,
    /// Gravity for the physics world. Y points down.
    pub gravity: Vec2,
    /// Typical object size, handed to the physics solver.
    pub length_unit: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 256,
            gravity: Vec2::ZERO,
            length_unit: 100.0,
        }
    }
}

/// What the host device offers, reported by JS at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceInfo {
    pub has_keyboard: bool,
    /// Desktop browsers get no on-screen controls.
    pub is_desktop: bool,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            has_keyboard: true,
            is_desktop: true,
        }
    }
}

/// Fatal problems that stop a game from starting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// The game needs a keyboard and the host has none.
    KeyboardUnavailable,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::KeyboardUnavailable => write!(f, "Keyboard input is unavailable."),
        }
    }
}

impl std::error::Error for InitError {}

/// The contract every game fulfills. The runner owns the game and calls
/// these in order: `config`, `init`, then `update` once per fixed step, and
/// `teardown` when the host shuts the game down.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the initial scene. An error aborts startup.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), InitError>;

    /// One fixed step of game logic. Physics is stepped after this returns.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputState);

    /// Release whatever the game spawned.
    fn teardown(&mut self, _ctx: &mut EngineContext) {}
}

/// Mutable access to engine state, passed to every `Game` hook.
pub struct EngineContext {
    pub scene: Scene,
    pub text: TextState,
    pub textures: TextureRegistry,
    pub device: DeviceInfo,
    pub events: Vec<GameEvent>,
    world_size: Vec2,
    next_id: u32,
    #[cfg(feature = "physics")]
    pub physics: PhysicsWorld,
    /// Retained canvas drawn behind all sprites.
    #[cfg(feature = "vectors")]
    pub backdrop: VectorCanvas,
    /// Retained canvas drawn above all sprites.
    #[cfg(feature = "vectors")]
    pub hud: VectorCanvas,
}

impl EngineContext {
    pub fn new(config: &GameConfig, device: DeviceInfo) -> Self {
        #[cfg(feature = "physics")]
        let physics = {
            let mut world = PhysicsWorld::new(config.gravity);
            world.set_dt(config.fixed_dt);
            world.set_length_unit(config.length_unit);
            world
        };
        Self {
            scene: Scene::new(),
            text: TextState::new(),
            textures: TextureRegistry::new(),
            device,
            events: Vec::new(),
            world_size: Vec2::new(config.world_width, config.world_height),
            next_id: 1,
            #[cfg(feature = "physics")]
            physics,
            #[cfg(feature = "vectors")]
            backdrop: VectorCanvas::new(),
            #[cfg(feature = "vectors")]
            hud: VectorCanvas::new(),
        }
    }

    /// Viewport size in world units.
    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Queue an event for the JS host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    // -- Physics convenience methods --

    /// Spawn an entity together with a physics body. The body starts at the
    /// entity's position.
    #[cfg(feature = "physics")]
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
        material: ColliderMaterial,
    ) -> EntityId {
        let id = entity.id;
        let body = self.physics.create_body(&desc.with_position(entity.pos), material);
        self.scene.spawn(entity.with_body(body));
        id
    }

    /// Despawn an entity, removing its physics body if present.
    #[cfg(feature = "physics")]
    pub fn despawn(&mut self, id: EntityId) {
        if let Some(entity) = self.scene.despawn(id) {
            if let Some(body) = &entity.body {
                self.physics.remove_body(body);
            }
        }
    }

    /// Despawn every entity with `tag`; all their bodies are gone when this
    /// returns.
    #[cfg(feature = "physics")]
    pub fn despawn_tagged(&mut self, tag: &str) -> usize {
        let removed = self.scene.despawn_tagged(tag);
        for body in removed.iter().filter_map(|e| e.body.as_ref()) {
            self.physics.remove_body(body);
        }
        removed.len()
    }

    #[cfg(feature = "physics")]
    pub fn set_velocity(&mut self, id: EntityId, vel: Vec2) {
        if let Some(body) = self.scene.get(id).and_then(|e| e.body) {
            self.physics.set_velocity(&body, vel);
        }
    }

    #[cfg(feature = "physics")]
    pub fn velocity(&self, id: EntityId) -> Vec2 {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.velocity(body))
            .unwrap_or(Vec2::ZERO)
    }

    /// Move an entity and its body to `pos` immediately.
    #[cfg(feature = "physics")]
    pub fn teleport(&mut self, id: EntityId, pos: Vec2) {
        if let Some(entity) = self.scene.get_mut(id) {
            entity.pos = pos;
            if let Some(body) = entity.body {
                self.physics.teleport(&body, pos);
            }
        }
    }

    /// Whether the entity's body rested on something during the last step.
    #[cfg(feature = "physics")]
    pub fn blocked_down(&self, id: EntityId) -> bool {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .is_some_and(|body| self.physics.blocked_down(body))
    }

    /// Step the physics simulation and copy body positions onto entities.
    /// Called by the runner after each `Game::update()`.
    #[cfg(feature = "physics")]
    pub fn step_physics(&mut self) {
        self.physics.step();
        for entity in self.scene.iter_mut() {
            if let Some(body) = &entity.body {
                entity.pos = self.physics.body_position(body);
            }
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default(), DeviceInfo::default())
    }
}

#[cfg(test)]
#[cfg(feature = "physics")]
mod physics_tests {
    use super::*;
    use crate::core::physics::ColliderDesc;

    fn ctx_with_gravity() -> EngineContext {
        let config = GameConfig {
            gravity: Vec2::new(0.0, 1700.0),
            ..GameConfig::default()
        };
        EngineContext::new(&config, DeviceInfo::default())
    }

    fn spawn_box(ctx: &mut EngineContext, tag: &str, pos: Vec2) -> EntityId {
        let id = ctx.next_id();
        ctx.spawn_with_body(
            Entity::new(id).with_tag(tag).with_pos(pos),
            BodyDesc::fixed(ColliderDesc::rect(Vec2::new(20.0, 20.0))),
            ColliderMaterial::ARCADE,
        )
    }

    #[test]
    fn spawn_with_body_places_body_at_entity() {
        let mut ctx = ctx_with_gravity();
        let id = spawn_box(&mut ctx, "platform", Vec2::new(100.0, 200.0));
        let body = ctx.scene.get(id).unwrap().body.unwrap();
        assert_eq!(ctx.physics.body_position(&body), Vec2::new(100.0, 200.0));
        assert_eq!(ctx.physics.body_count(), 1);
    }

    #[test]
    fn despawn_tagged_removes_bodies() {
        let mut ctx = ctx_with_gravity();
        spawn_box(&mut ctx, "platform", Vec2::ZERO);
        spawn_box(&mut ctx, "platform", Vec2::new(50.0, 0.0));
        spawn_box(&mut ctx, "other", Vec2::new(90.0, 0.0));

        assert_eq!(ctx.despawn_tagged("platform"), 2);
        assert_eq!(ctx.physics.body_count(), 1);
        assert_eq!(ctx.scene.len(), 1);
    }

    #[test]
    fn teleport_moves_entity_and_body() {
        let mut ctx = ctx_with_gravity();
        let id = ctx.next_id();
        ctx.spawn_with_body(
            Entity::new(id).with_pos(Vec2::new(10.0, 10.0)),
            BodyDesc::dynamic(ColliderDesc::rect(Vec2::new(10.0, 10.0))),
            ColliderMaterial::ARCADE,
        );
        ctx.teleport(id, Vec2::new(24.0, 300.0));
        assert_eq!(ctx.scene.get(id).unwrap().pos, Vec2::new(24.0, 300.0));
        let body = ctx.scene.get(id).unwrap().body.unwrap();
        assert_eq!(ctx.physics.body_position(&body), Vec2::new(24.0, 300.0));
    }

    #[test]
    fn step_physics_syncs_positions() {
        let mut ctx = ctx_with_gravity();
        let id = ctx.next_id();
        ctx.spawn_with_body(
            Entity::new(id).with_pos(Vec2::new(100.0, 0.0)),
            BodyDesc::dynamic(ColliderDesc::rect(Vec2::new(10.0, 10.0))),
            ColliderMaterial::ARCADE,
        );
        for _ in 0..10 {
            ctx.step_physics();
        }
        assert!(ctx.scene.get(id).unwrap().pos.y > 0.0);
    }
}
