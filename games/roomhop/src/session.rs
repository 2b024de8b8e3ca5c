use roomhop_engine::{
    BodyDesc, ColliderDesc, ColliderMaterial, EngineContext, Entity, EntityId, RenderLayer,
    SpriteComponent, TextureId,
};

use crate::rooms::{RoomCoord, START_ROOM};
use crate::tuning::{player_collider_offset, PLAYER_BODY_SIZE, PLAYER_SPAWN, PLAYER_SPRITE_SIZE};

pub const PLAYER_TAG: &str = "player";

/// State that outlives a single room: where we are and who is playing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSession {
    pub current_room: RoomCoord,
    pub player: EntityId,
}

impl GameSession {
    /// Spawn the player in the start room.
    pub fn start(ctx: &mut EngineContext, player_texture: TextureId) -> Self {
        let id = ctx.next_id();
        let body = BodyDesc::dynamic(ColliderDesc::rect(PLAYER_BODY_SIZE))
            .with_collider_offset(player_collider_offset());
        ctx.spawn_with_body(
            Entity::new(id)
                .with_tag(PLAYER_TAG)
                .with_pos(PLAYER_SPAWN)
                .with_size(PLAYER_SPRITE_SIZE)
                .with_layer(RenderLayer::Actors)
                .with_sprite(SpriteComponent::new(player_texture)),
            body,
            ColliderMaterial::ARCADE,
        );
        Self {
            current_room: START_ROOM,
            player: id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn player_body_sits_low_in_sprite() {
        let mut ctx = EngineContext::default();
        let session = GameSession::start(&mut ctx, TextureId(1));
        assert_eq!(session.current_room, START_ROOM);

        let player = ctx.scene.get(session.player).unwrap();
        assert_eq!(player.pos, PLAYER_SPAWN);
        assert_eq!(player.size, Vec2::new(64.0, 96.0));

        let body = player.body.unwrap();
        assert_eq!(ctx.physics.collider_half_extents(&body), Some(Vec2::new(17.0, 37.0)));
        let center = ctx.physics.collider_center(&body).unwrap();
        assert!((center - Vec2::new(140.0, 569.0)).length() < 1e-3);
    }
}
