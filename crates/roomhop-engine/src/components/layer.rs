/// Render layer — controls draw order.
///
/// Layers are drawn back-to-front: Backdrop first, Controls last.
/// Sprite instances are sorted by layer; the vector canvases are composited
/// by the host at their own layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Backdrop = 0,
    Terrain = 1,
    #[default]
    Actors = 2,
    Hud = 3,
    Controls = 4,
}

impl RenderLayer {
    pub const COUNT: usize = 5;

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Backdrop),
            1 => Some(Self::Terrain),
            2 => Some(Self::Actors),
            3 => Some(Self::Hud),
            4 => Some(Self::Controls),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}
