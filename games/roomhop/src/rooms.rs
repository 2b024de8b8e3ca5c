//! The room grid.
//!
//! Rooms are addressed by `(x, y)` with `y` the row. Rows may differ in
//! length, so any coordinate can be empty; an empty coordinate is a wall, not
//! an error.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomCoord {
    pub x: i32,
    pub y: i32,
}

impl RoomCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

pub const START_ROOM: RoomCoord = RoomCoord::new(0, 1);

/// A solid block: drawn and collidable from the same rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformRect {
    /// Center.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Option<u32>,
}

impl PlatformRect {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Decorative panel drawn into the backdrop. Never collides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Face color inside the frame.
    pub color: Option<u32>,
}

#[derive(Debug, PartialEq)]
pub struct RoomDef {
    pub label: &'static str,
    pub background: u32,
    pub tile: u32,
    pub ground: u32,
    /// Highlight band along the top of the ground.
    pub top_line: u32,
    /// Horizontal phase of the brick pattern.
    pub shift: u32,
    pub platforms: &'static [PlatformRect],
    pub signs: &'static [SignRect],
}

impl RoomDef {
    /// Tint for a platform, falling back to the ground color.
    pub fn platform_color(&self, platform: &PlatformRect) -> u32 {
        platform.color.unwrap_or(self.ground)
    }
}

const fn block(x: f32, y: f32, width: f32, height: f32, color: u32) -> PlatformRect {
    PlatformRect { x, y, width, height, color: Some(color) }
}

const fn sign(x: f32, y: f32, width: f32, height: f32, color: u32) -> SignRect {
    SignRect { x, y, width, height, color: Some(color) }
}

const fn ground(color: u32) -> PlatformRect {
    block(640.0, 696.0, 1280.0, 48.0, color)
}

const LEDGE: u32 = 0x1f9d4b;

static ROW_A: [RoomDef; 3] = [
    RoomDef {
        label: "A-1",
        background: 0xdadada,
        tile: 0xeeeeee,
        ground: 0x0f5f31,
        top_line: 0x20984b,
        shift: 0,
        platforms: &[
            ground(0x0f5f31),
            block(1160.0, 560.0, 26.0, 270.0, 0x0f5f31),
            block(330.0, 492.0, 230.0, 26.0, 0x1d8e47),
            block(640.0, 430.0, 220.0, 26.0, 0x1d8e47),
        ],
        signs: &[sign(1180.0, 330.0, 220.0, 120.0, 0x0f5f31)],
    },
    RoomDef {
        label: "A-2",
        background: 0xd8d8d8,
        tile: 0xededed,
        ground: 0x105f32,
        top_line: 0x239f4e,
        shift: 80,
        platforms: &[
            ground(0x105f32),
            block(200.0, 540.0, 220.0, 26.0, LEDGE),
            block(550.0, 460.0, 220.0, 26.0, LEDGE),
            block(900.0, 380.0, 220.0, 26.0, LEDGE),
        ],
        signs: &[],
    },
    RoomDef {
        label: "A-3",
        background: 0xdadada,
        tile: 0xeeeeee,
        ground: 0x0f5f31,
        top_line: 0x20984b,
        shift: 140,
        platforms: &[
            ground(0x0f5f31),
            block(160.0, 602.0, 240.0, 24.0, LEDGE),
            block(390.0, 510.0, 160.0, 24.0, LEDGE),
            block(620.0, 418.0, 160.0, 24.0, LEDGE),
            block(850.0, 326.0, 160.0, 24.0, LEDGE),
        ],
        signs: &[],
    },
];

static ROW_B: [RoomDef; 3] = [
    RoomDef {
        label: "B-1",
        background: 0xdadada,
        tile: 0xefefef,
        ground: 0x0e5b2f,
        top_line: 0x21994b,
        shift: 40,
        platforms: &[
            ground(0x0e5b2f),
            block(240.0, 430.0, 260.0, 24.0, LEDGE),
            block(690.0, 430.0, 420.0, 24.0, LEDGE),
            block(1080.0, 318.0, 200.0, 24.0, LEDGE),
        ],
        signs: &[sign(1040.0, 220.0, 200.0, 100.0, 0x0f5f31)],
    },
    RoomDef {
        label: "B-2",
        background: 0xd8d8d8,
        tile: 0xededed,
        ground: 0x0f5d31,
        top_line: 0x249f4f,
        shift: 120,
        platforms: &[
            ground(0x0f5d31),
            block(240.0, 530.0, 300.0, 24.0, LEDGE),
            block(610.0, 460.0, 180.0, 24.0, LEDGE),
            block(910.0, 390.0, 180.0, 24.0, LEDGE),
        ],
        signs: &[],
    },
    RoomDef {
        label: "B-3",
        background: 0xdadada,
        tile: 0xefefef,
        ground: 0x0e5b2f,
        top_line: 0x21994b,
        shift: 180,
        platforms: &[
            ground(0x0e5b2f),
            block(260.0, 588.0, 320.0, 24.0, LEDGE),
            block(640.0, 500.0, 320.0, 24.0, LEDGE),
            block(1000.0, 412.0, 320.0, 24.0, LEDGE),
        ],
        signs: &[sign(1060.0, 180.0, 210.0, 120.0, 0x0f5f31)],
    },
];

static GRID: [&[RoomDef]; 2] = [&ROW_A, &ROW_B];

/// The room at `coord`, or `None` where the grid has no room.
pub fn lookup(coord: RoomCoord) -> Option<&'static RoomDef> {
    let row = usize::try_from(coord.y).ok()?;
    let col = usize::try_from(coord.x).ok()?;
    GRID.get(row)?.get(col)
}

/// Every defined room with its coordinate, row by row.
pub fn all() -> impl Iterator<Item = (RoomCoord, &'static RoomDef)> {
    GRID.iter().enumerate().flat_map(|(y, row)| {
        row.iter()
            .enumerate()
            .map(move |(x, room)| (RoomCoord::new(x as i32, y as i32), room))
    })
}
