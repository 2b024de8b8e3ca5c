//! Puts a room on screen: backdrop, platform bodies and the room label.

use roomhop_engine::{
    BodyDesc, Color, ColliderDesc, ColliderMaterial, EngineContext, Entity, LabelId, RenderLayer,
    SpriteComponent, TextLabel, TextureId,
};

use crate::backdrop::{paint, plan_backdrop};
use crate::rooms::RoomDef;
use crate::tuning::{LABEL_COLOR, LABEL_POS, LABEL_SIZE};

pub const PLATFORM_TAG: &str = "platform";

/// Owns the per-room parts of the scene.
#[derive(Debug)]
pub struct RoomView {
    label: LabelId,
    pixel: TextureId,
}

impl RoomView {
    /// Create the (empty) room label. Call once per scene.
    pub fn new(ctx: &mut EngineContext, pixel: TextureId) -> Self {
        let label = ctx.text.add(TextLabel::new(
            "",
            LABEL_POS,
            LABEL_SIZE,
            Color::hex(LABEL_COLOR),
        ));
        Self { label, pixel }
    }

    pub fn label(&self) -> LabelId {
        self.label
    }

    /// Replace whatever room is showing with `room`. All bodies of the old
    /// room are gone before the first new one is created.
    pub fn load(&self, ctx: &mut EngineContext, room: &RoomDef) {
        let viewport = ctx.world_size();
        paint(&mut ctx.backdrop, &plan_backdrop(room, viewport));

        let removed = ctx.despawn_tagged(PLATFORM_TAG);
        for platform in room.platforms {
            let id = ctx.next_id();
            let sprite = SpriteComponent::new(self.pixel)
                .with_tint(Color::hex(room.platform_color(platform)));
            ctx.spawn_with_body(
                Entity::new(id)
                    .with_tag(PLATFORM_TAG)
                    .with_pos(platform.center())
                    .with_size(platform.size())
                    .with_layer(RenderLayer::Terrain)
                    .with_sprite(sprite),
                BodyDesc::fixed(ColliderDesc::rect(platform.size())),
                ColliderMaterial::ARCADE,
            );
        }

        ctx.text.set_text(self.label, format!("ROOM {}", room.label));
        log::info!(
            "loaded room {}: {} platforms ({} removed), {} signs",
            room.label,
            room.platforms.len(),
            removed,
            room.signs.len()
        );
    }

    /// Remove everything `load` created.
    pub fn clear(&self, ctx: &mut EngineContext) {
        ctx.despawn_tagged(PLATFORM_TAG);
        ctx.backdrop.clear();
        ctx.text.remove(self.label);
    }
}
