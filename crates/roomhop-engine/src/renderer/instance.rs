use bytemuck::{Pod, Zeroable};

use crate::components::entity::Entity;

/// Per-instance sprite data read by the JS renderer.
/// 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Center X in world space.
    pub x: f32,
    /// Center Y in world space.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Index into the texture registry.
    pub texture: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    /// 1.0 when mirrored horizontally.
    pub flip_x: f32,
    pub layer: f32,
    pub _pad: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// Instance for an entity, or `None` if it has nothing to draw.
    pub fn from_entity(entity: &Entity) -> Option<Self> {
        if !entity.active {
            return None;
        }
        let sprite = entity.sprite.as_ref()?;
        Some(Self {
            x: entity.pos.x,
            y: entity.pos.y,
            width: entity.size.x,
            height: entity.size.y,
            texture: sprite.texture.0 as f32,
            r: sprite.tint.r,
            g: sprite.tint.g,
            b: sprite.tint.b,
            a: sprite.tint.a,
            flip_x: if sprite.flip_x { 1.0 } else { 0.0 },
            layer: entity.layer.as_u8() as f32,
            _pad: 0.0,
        })
    }
}

/// Sprite instances for one frame, sorted back-to-front by layer.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for reads from WASM memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
