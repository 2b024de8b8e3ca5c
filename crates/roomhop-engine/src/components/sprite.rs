use crate::components::color::Color;

/// Identifies a texture in the [`TextureRegistry`](crate::assets::texture::TextureRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

/// Multiplicative tint applied to a sprite's texture.
pub type Tint = Color;

/// Sprite component — defines how an entity appears visually.
///
/// The sprite is stretched to the entity's `size`, so a 2×2 white texture
/// tinted green renders as a solid green block of any dimensions.
#[derive(Debug, Clone)]
pub struct SpriteComponent {
    pub texture: TextureId,
    pub tint: Tint,
    /// Mirror horizontally (used for facing direction).
    pub flip_x: bool,
}

impl SpriteComponent {
    pub fn new(texture: TextureId) -> Self {
        Self {
            texture,
            tint: Tint::WHITE,
            flip_x: false,
        }
    }

    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self::new(TextureId(0))
    }
}
