//! Gameplay constants.

use glam::Vec2;

pub const WORLD_W: f32 = 1280.0;
pub const WORLD_H: f32 = 720.0;
pub const VIEWPORT: Vec2 = Vec2::new(WORLD_W, WORLD_H);

/// Downward acceleration, units/s².
pub const GRAVITY_Y: f32 = 1700.0;

pub const PLAYER_SPEED: f32 = 320.0;
pub const PLAYER_JUMP_SPEED: f32 = 720.0;

/// How far past the viewport edge the player's center may travel before the
/// room is left.
pub const EDGE_PADDING: f32 = 24.0;

/// Entry height when arriving through the top edge of a room, measured up
/// from the bottom of the viewport.
pub const ENTRY_FROM_TOP_RISE: f32 = 150.0;
/// Entry height when arriving through the bottom edge of a room.
pub const ENTRY_FROM_BOTTOM_Y: f32 = 140.0;

pub const PLAYER_SPAWN: Vec2 = Vec2::new(140.0, 560.0);
pub const PLAYER_SPRITE_SIZE: Vec2 = Vec2::new(64.0, 96.0);
pub const PLAYER_BODY_SIZE: Vec2 = Vec2::new(34.0, 74.0);
/// Top-left corner of the collision box inside the sprite.
pub const PLAYER_BODY_INSET: Vec2 = Vec2::new(15.0, 20.0);

/// Collider center relative to the sprite center.
pub fn player_collider_offset() -> Vec2 {
    PLAYER_BODY_INSET + PLAYER_BODY_SIZE / 2.0 - PLAYER_SPRITE_SIZE / 2.0
}

// -- Backdrop --

pub const TILE_W: f32 = 260.0;
pub const TILE_H: f32 = 124.0;
pub const MORTAR: f32 = 16.0;
pub const TILE_ROWS: u32 = 5;
/// Extra phase applied to every odd brick row.
pub const ODD_ROW_PHASE: u32 = 120;

pub const GROUND_LINE_Y: f32 = 664.0;
pub const GROUND_LINE_H: f32 = 14.0;

pub const SIGN_FRAME_COLOR: u32 = 0x239f4e;
pub const SIGN_DEFAULT_FACE: u32 = 0x0f5f31;
pub const SIGN_INSET: f32 = 16.0;

// -- Room label --

pub const LABEL_POS: Vec2 = Vec2::new(24.0, 22.0);
pub const LABEL_SIZE: f32 = 20.0;
pub const LABEL_COLOR: u32 = 0x145f33;

// -- Player art --

pub const PLAYER_COLOR: u32 = 0x239f4e;

// -- Touch controls --

pub const BUTTON_FILL_ALPHA: f32 = 0.17;
pub const BUTTON_STROKE_COLOR: u32 = 0x229d4d;
pub const BUTTON_STROKE_ALPHA: f32 = 0.75;
pub const BUTTON_STROKE_WIDTH: f32 = 4.0;
pub const BUTTON_LABEL_COLOR: u32 = 0x14703a;
pub const BUTTON_LABEL_LARGE: f32 = 38.0;
pub const BUTTON_LABEL_SMALL: f32 = 24.0;

// -- Game events to the host --

pub const EVENT_ROOM_CHANGED: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collider_sits_low_in_sprite() {
        assert_eq!(player_collider_offset(), Vec2::new(0.0, 9.0));
    }
}
