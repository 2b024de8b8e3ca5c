//! Placeholder art, rasterized once at startup.

use roomhop_engine::{Color, Texture, TextureCanvas, TextureId, TextureRegistry};

use crate::tuning::PLAYER_COLOR;

pub const PIXEL: &str = "pixel";
pub const PLAYER: &str = "player-placeholder";

/// Ids of the two generated textures.
#[derive(Debug, Clone, Copy)]
pub struct GameTextures {
    pub pixel: TextureId,
    pub player: TextureId,
}

/// A 2×2 white square, stretched and tinted into platforms.
pub fn pixel() -> Texture {
    let mut canvas = TextureCanvas::new(2, 2);
    canvas.fill_style(Color::WHITE).fill_rect(0.0, 0.0, 2.0, 2.0);
    canvas.finish()
}

/// A 64×96 green figure: head, torso, two arms, two legs.
pub fn player() -> Texture {
    let mut canvas = TextureCanvas::new(64, 96);
    canvas
        .fill_style(Color::hex(PLAYER_COLOR))
        .fill_circle(32.0, 14.0, 10.0)
        .fill_rounded_rect(20.0, 28.0, 24.0, 28.0, 7.0)
        .fill_rounded_rect(12.0, 38.0, 20.0, 12.0, 6.0)
        .fill_rounded_rect(32.0, 40.0, 20.0, 12.0, 6.0)
        .fill_rounded_rect(16.0, 54.0, 20.0, 28.0, 6.0)
        .fill_rounded_rect(34.0, 52.0, 16.0, 36.0, 6.0);
    canvas.finish()
}

pub fn register(registry: &mut TextureRegistry) -> GameTextures {
    GameTextures {
        pixel: registry.insert(PIXEL, pixel()),
        player: registry.insert(PLAYER, player()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba_at(tex: &Texture, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * tex.width + x) * 4) as usize;
        [tex.rgba[i], tex.rgba[i + 1], tex.rgba[i + 2], tex.rgba[i + 3]]
    }

    #[test]
    fn pixel_is_opaque_white() {
        let tex = pixel();
        assert_eq!((tex.width, tex.height), (2, 2));
        assert!(tex.rgba.iter().all(|&b| b == 255));
    }

    #[test]
    fn player_has_body_and_empty_corners() {
        let tex = player();
        assert_eq!((tex.width, tex.height), (64, 96));
        let green = [0x23, 0x9f, 0x4e, 0xff];
        assert_eq!(rgba_at(&tex, 32, 14), green, "head");
        assert_eq!(rgba_at(&tex, 32, 40), green, "torso");
        assert_eq!(rgba_at(&tex, 42, 80), green, "leg");
        assert_eq!(rgba_at(&tex, 0, 0), [0, 0, 0, 0]);
        assert_eq!(rgba_at(&tex, 63, 95), [0, 0, 0, 0]);
    }

    #[test]
    fn register_names_both_textures() {
        let mut registry = TextureRegistry::new();
        let ids = register(&mut registry);
        assert_eq!(registry.id(PIXEL), Some(ids.pixel));
        assert_eq!(registry.id(PLAYER), Some(ids.player));
    }
}
