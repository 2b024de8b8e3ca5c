//! Room backdrop: flat fill, staggered bricks, ground highlight and signs.
//!
//! The backdrop is planned as plain rectangles first and painted second, so
//! the layout can be checked without a canvas.

use glam::Vec2;
use roomhop_engine::{Color, VectorCanvas};

use crate::rooms::RoomDef;
use crate::tuning::{
    GROUND_LINE_H, GROUND_LINE_Y, MORTAR, ODD_ROW_PHASE, SIGN_DEFAULT_FACE, SIGN_FRAME_COLOR,
    SIGN_INSET, TILE_H, TILE_ROWS, TILE_W,
};

/// A filled rectangle given by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: u32,
}

impl BackdropRect {
    fn new(x: f32, y: f32, width: f32, height: f32, color: u32) -> Self {
        Self { x, y, width, height, color }
    }
}

/// Horizontal phase of brick row `row`.
pub fn row_phase(row: u32, shift: u32) -> u32 {
    let pitch = (TILE_W + MORTAR) as u32;
    ((row % 2) * ODD_ROW_PHASE + shift) % pitch
}

/// Everything the backdrop draws, back to front.
pub fn plan_backdrop(room: &RoomDef, viewport: Vec2) -> Vec<BackdropRect> {
    let mut rects = vec![BackdropRect::new(0.0, 0.0, viewport.x, viewport.y, room.background)];

    for row in 0..TILE_ROWS {
        let y = row as f32 * (TILE_H + MORTAR);
        let mut x = -(row_phase(row, room.shift) as f32);
        while x < viewport.x + TILE_W {
            rects.push(BackdropRect::new(x, y, TILE_W, TILE_H, room.tile));
            x += TILE_W + MORTAR;
        }
    }

    rects.push(BackdropRect::new(0.0, GROUND_LINE_Y, viewport.x, GROUND_LINE_H, room.top_line));

    for sign in room.signs {
        let left = sign.x - sign.width / 2.0;
        let top = sign.y - sign.height / 2.0;
        rects.push(BackdropRect::new(left, top, sign.width, sign.height, SIGN_FRAME_COLOR));
        rects.push(BackdropRect::new(
            left + SIGN_INSET,
            top + SIGN_INSET,
            sign.width - 2.0 * SIGN_INSET,
            sign.height - 2.0 * SIGN_INSET,
            sign.color.unwrap_or(SIGN_DEFAULT_FACE),
        ));
    }

    rects
}

/// Replace the canvas contents with `rects`.
pub fn paint(canvas: &mut VectorCanvas, rects: &[BackdropRect]) {
    canvas.clear();
    for r in rects {
        canvas.fill_rect(Vec2::new(r.x, r.y), r.width, r.height, Color::hex(r.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::{all, lookup, RoomCoord};
    use crate::tuning::VIEWPORT;

    fn tiles_in_row(rects: &[BackdropRect], y: f32, color: u32) -> Vec<f32> {
        rects
            .iter()
            .filter(|r| r.y == y && r.height == TILE_H && r.color == color)
            .map(|r| r.x)
            .collect()
    }

    #[test]
    fn phase_staggers_odd_rows() {
        assert_eq!(row_phase(0, 0), 0);
        assert_eq!(row_phase(1, 0), 120);
        assert_eq!(row_phase(1, 180), 24);
        assert_eq!(row_phase(4, 140), 140);
    }

    #[test]
    fn background_comes_first() {
        let room = lookup(RoomCoord::new(1, 0)).unwrap();
        let plan = plan_backdrop(room, VIEWPORT);
        assert_eq!(plan[0], BackdropRect::new(0.0, 0.0, 1280.0, 720.0, 0xd8d8d8));
    }

    #[test]
    fn brick_rows_follow_phase_and_cover_viewport() {
        for (_, room) in all() {
            let plan = plan_backdrop(room, VIEWPORT);
            for row in 0..TILE_ROWS {
                let y = row as f32 * (TILE_H + MORTAR);
                let xs = tiles_in_row(&plan, y, room.tile);
                assert_eq!(xs[0], -(row_phase(row, room.shift) as f32));
                assert!(xs.windows(2).all(|w| w[1] - w[0] == TILE_W + MORTAR));
                let last = *xs.last().unwrap();
                assert!(last < VIEWPORT.x + TILE_W);
                assert!(last + TILE_W + MORTAR >= VIEWPORT.x + TILE_W);
            }
        }
    }

    #[test]
    fn ground_line_spans_viewport() {
        let room = lookup(RoomCoord::new(1, 1)).unwrap();
        let plan = plan_backdrop(room, VIEWPORT);
        assert!(plan.contains(&BackdropRect::new(0.0, 664.0, 1280.0, 14.0, 0x249f4f)));
    }

    #[test]
    fn signs_draw_frame_then_inset_face() {
        let room = lookup(RoomCoord::new(0, 1)).unwrap();
        let plan = plan_backdrop(room, VIEWPORT);
        let n = plan.len();
        assert_eq!(plan[n - 2], BackdropRect::new(940.0, 170.0, 200.0, 100.0, 0x239f4e));
        assert_eq!(plan[n - 1], BackdropRect::new(956.0, 186.0, 168.0, 68.0, 0x0f5f31));
    }

    #[test]
    fn rooms_without_signs_end_with_ground_line() {
        let room = lookup(RoomCoord::new(1, 0)).unwrap();
        let plan = plan_backdrop(room, VIEWPORT);
        assert_eq!(plan.last().unwrap().y, GROUND_LINE_Y);
    }

    #[test]
    fn paint_replaces_previous_room() {
        let mut canvas = VectorCanvas::new();
        let a = plan_backdrop(lookup(RoomCoord::new(0, 1)).unwrap(), VIEWPORT);
        let b = plan_backdrop(lookup(RoomCoord::new(1, 1)).unwrap(), VIEWPORT);
        paint(&mut canvas, &a);
        paint(&mut canvas, &b);
        assert_eq!(canvas.vertex_count(), b.len() * 6);
    }
}
