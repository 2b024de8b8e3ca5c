use glam::Vec2;
use rapier2d::prelude::*;

// ---------------------------------------------------------------------------
// Conversion helpers (private) — glam ↔ nalgebra
// ---------------------------------------------------------------------------

fn vec2_to_na(v: Vec2) -> nalgebra::Vector2<f32> {
    nalgebra::Vector2::new(v.x, v.y)
}

fn na_to_vec2(v: &nalgebra::Vector2<f32>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// Minimum downward component of a contact normal (pointing away from the
/// body) for the contact to count as floor.
const FLOOR_NORMAL_MIN: f32 = 0.5;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The kind of rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Dynamic,
    Fixed,
}

impl BodyType {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyType::Dynamic => RigidBodyType::Dynamic,
            BodyType::Fixed => RigidBodyType::Fixed,
        }
    }
}

/// Shape description for a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderDesc {
    Cuboid { half_width: f32, half_height: f32 },
}

impl ColliderDesc {
    /// Axis-aligned box with the given full size.
    pub fn rect(size: Vec2) -> Self {
        ColliderDesc::Cuboid {
            half_width: size.x / 2.0,
            half_height: size.y / 2.0,
        }
    }

    fn build_collider(&self) -> ColliderBuilder {
        match *self {
            ColliderDesc::Cuboid { half_width, half_height } => {
                ColliderBuilder::cuboid(half_width, half_height)
            }
        }
    }
}

/// Physical material properties for a collider.
#[derive(Debug, Clone, Copy)]
pub struct ColliderMaterial {
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

impl ColliderMaterial {
    /// No bounce, no friction: bodies stop dead on landing and slide freely
    /// along walls, like arcade AABB collision.
    pub const ARCADE: Self = Self {
        restitution: 0.0,
        friction: 0.0,
        density: 1.0,
    };
}

impl Default for ColliderMaterial {
    fn default() -> Self {
        Self::ARCADE
    }
}

/// Builder for describing a rigid body before creation.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub body_type: BodyType,
    pub position: Vec2,
    pub gravity_scale: f32,
    pub collider: ColliderDesc,
    /// Collider center relative to the body position.
    pub collider_offset: Vec2,
}

impl BodyDesc {
    pub fn dynamic(collider: ColliderDesc) -> Self {
        Self {
            body_type: BodyType::Dynamic,
            position: Vec2::ZERO,
            gravity_scale: 1.0,
            collider,
            collider_offset: Vec2::ZERO,
        }
    }

    pub fn fixed(collider: ColliderDesc) -> Self {
        Self {
            body_type: BodyType::Fixed,
            position: Vec2::ZERO,
            gravity_scale: 0.0,
            collider,
            collider_offset: Vec2::ZERO,
        }
    }

    pub fn with_position(mut self, pos: Vec2) -> Self {
        self.position = pos;
        self
    }

    pub fn with_collider_offset(mut self, offset: Vec2) -> Self {
        self.collider_offset = offset;
        self
    }
}

/// Handle pair stored on an Entity, referencing Rapier internals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    pub body_handle: RigidBodyHandle,
    pub collider_handle: ColliderHandle,
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// Wraps the Rapier2D pipeline behind the handful of arcade-style operations
/// a platformer needs.
pub struct PhysicsWorld {
    gravity: nalgebra::Vector2<f32>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create a physics world. Y points down, so positive gravity Y falls.
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity: vec2_to_na(gravity),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    pub fn set_dt(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
    }

    /// Typical object size in world units. Rapier scales its contact
    /// tolerances by this, so pixel worlds want something near 100.
    pub fn set_length_unit(&mut self, unit: f32) {
        self.integration_parameters.length_unit = unit;
    }

    /// Create a rigid body with one collider and return both handles.
    pub fn create_body(&mut self, desc: &BodyDesc, material: ColliderMaterial) -> PhysicsBody {
        let rb = RigidBodyBuilder::new(desc.body_type.to_rapier())
            .translation(vec2_to_na(desc.position))
            .gravity_scale(desc.gravity_scale)
            .locked_axes(LockedAxes::ROTATION_LOCKED)
            .build();

        let body_handle = self.bodies.insert(rb);

        let collider = desc
            .collider
            .build_collider()
            .translation(vec2_to_na(desc.collider_offset))
            .restitution(material.restitution)
            .friction(material.friction)
            .density(material.density)
            .build();

        let collider_handle =
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies);

        PhysicsBody {
            body_handle,
            collider_handle,
        }
    }

    /// Remove a body and its collider. Unknown handles are ignored.
    pub fn remove_body(&mut self, body: &PhysicsBody) {
        self.bodies.remove(
            body.body_handle,
            &mut self.island_manager,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    /// Advance the simulation by one `dt`.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    pub fn set_velocity(&mut self, body: &PhysicsBody, vel: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_linvel(vec2_to_na(vel), true);
        }
    }

    pub fn velocity(&self, body: &PhysicsBody) -> Vec2 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_to_vec2(rb.linvel()))
            .unwrap_or(Vec2::ZERO)
    }

    /// Move a body instantly, without sweeping through what lies between.
    pub fn teleport(&mut self, body: &PhysicsBody, pos: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_translation(vec2_to_na(pos), true);
        }
    }

    pub fn body_position(&self, body: &PhysicsBody) -> Vec2 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_to_vec2(rb.translation()))
            .unwrap_or(Vec2::ZERO)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Half extents of a body's box collider, if the collider still exists.
    pub fn collider_half_extents(&self, body: &PhysicsBody) -> Option<Vec2> {
        let collider = self.colliders.get(body.collider_handle)?;
        let cuboid = collider.shape().as_cuboid()?;
        Some(na_to_vec2(&cuboid.half_extents))
    }

    /// World-space center of a body's collider (body position plus offset).
    pub fn collider_center(&self, body: &PhysicsBody) -> Option<Vec2> {
        let collider = self.colliders.get(body.collider_handle)?;
        Some(na_to_vec2(&collider.position().translation.vector))
    }

    /// Whether the body rests on something below it, judged from the
    /// contact manifolds of the most recent step.
    pub fn blocked_down(&self, body: &PhysicsBody) -> bool {
        let own = body.collider_handle;
        self.narrow_phase
            .contact_pairs_with(own)
            .filter(|pair| pair.has_any_active_contact)
            .any(|pair| {
                // Manifold normals point from collider1 toward collider2.
                let sign = if pair.collider1 == own { 1.0 } else { -1.0 };
                pair.manifolds
                    .iter()
                    .filter(|m| !m.points.is_empty())
                    .any(|m| m.data.normal.y * sign > FLOOR_NORMAL_MIN)
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn arcade_world() -> PhysicsWorld {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, 1700.0));
        world.set_dt(1.0 / 60.0);
        world.set_length_unit(100.0);
        world
    }

    fn floor(world: &mut PhysicsWorld) -> PhysicsBody {
        world.create_body(
            &BodyDesc::fixed(ColliderDesc::rect(Vec2::new(400.0, 20.0)))
                .with_position(Vec2::new(0.0, 500.0)),
            ColliderMaterial::ARCADE,
        )
    }

    #[test]
    fn create_and_remove_body() {
        let mut world = arcade_world();
        let body = floor(&mut world);
        assert_eq!(world.body_count(), 1);
        world.remove_body(&body);
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn gravity_pulls_dynamic_body_down() {
        let mut world = arcade_world();
        let body = world.create_body(
            &BodyDesc::dynamic(ColliderDesc::rect(Vec2::new(10.0, 10.0))),
            ColliderMaterial::ARCADE,
        );
        for _ in 0..10 {
            world.step();
        }
        let pos = world.body_position(&body);
        assert!(pos.y > 0.0, "body should fall: y={}", pos.y);
    }

    #[test]
    fn fixed_body_does_not_move() {
        let mut world = arcade_world();
        let body = floor(&mut world);
        for _ in 0..10 {
            world.step();
        }
        assert_eq!(world.body_position(&body), Vec2::new(0.0, 500.0));
    }

    #[test]
    fn rect_collider_has_half_extents() {
        let mut world = arcade_world();
        let body = floor(&mut world);
        assert_eq!(world.collider_half_extents(&body), Some(Vec2::new(200.0, 10.0)));
    }

    #[test]
    fn collider_offset_shifts_collider_center() {
        let mut world = arcade_world();
        let body = world.create_body(
            &BodyDesc::dynamic(ColliderDesc::rect(Vec2::new(34.0, 74.0)))
                .with_position(Vec2::new(100.0, 100.0))
                .with_collider_offset(Vec2::new(0.0, 9.0)),
            ColliderMaterial::ARCADE,
        );
        let center = world.collider_center(&body).unwrap();
        assert!((center.x - 100.0).abs() < 1e-3);
        assert!((center.y - 109.0).abs() < 1e-3);
    }

    #[test]
    fn set_velocity_and_teleport() {
        let mut world = arcade_world();
        let body = world.create_body(
            &BodyDesc::dynamic(ColliderDesc::rect(Vec2::new(10.0, 10.0))),
            ColliderMaterial::ARCADE,
        );
        world.set_velocity(&body, Vec2::new(320.0, -720.0));
        assert_eq!(world.velocity(&body), Vec2::new(320.0, -720.0));

        world.teleport(&body, Vec2::new(24.0, 140.0));
        assert_eq!(world.body_position(&body), Vec2::new(24.0, 140.0));
    }

    #[test]
    fn resting_body_is_blocked_down() {
        let mut world = arcade_world();
        floor(&mut world);
        // Bottom edge starts 13 units above the floor's top at y=490.
        let body = world.create_body(
            &BodyDesc::dynamic(ColliderDesc::rect(Vec2::new(34.0, 74.0)))
                .with_position(Vec2::new(0.0, 440.0)),
            ColliderMaterial::ARCADE,
        );
        for _ in 0..120 {
            world.step();
        }
        assert!(world.blocked_down(&body));
        let pos = world.body_position(&body);
        assert!(pos.y < 460.0, "body should rest on the floor, not sink: y={}", pos.y);
    }

    #[test]
    fn falling_body_is_not_blocked_down() {
        let mut world = arcade_world();
        floor(&mut world);
        let body = world.create_body(
            &BodyDesc::dynamic(ColliderDesc::rect(Vec2::new(34.0, 74.0)))
                .with_position(Vec2::new(0.0, 100.0)),
            ColliderMaterial::ARCADE,
        );
        world.step();
        assert!(!world.blocked_down(&body));
    }

    #[test]
    fn removed_handles_are_ignored() {
        let mut world = arcade_world();
        let body = floor(&mut world);
        world.remove_body(&body);
        world.set_velocity(&body, Vec2::ONE);
        assert_eq!(world.velocity(&body), Vec2::ZERO);
        assert!(world.collider_half_extents(&body).is_none());
        assert!(!world.blocked_down(&body));
    }
}
