//! Leaving a room through a viewport edge.
//!
//! The player's center is compared against the viewport grown by
//! [`EDGE_PADDING`](crate::tuning::EDGE_PADDING). Edges are checked left,
//! right, top, bottom and only the first hit is acted on, so a diagonal exit
//! resolves one axis per frame.

use glam::Vec2;

use crate::rooms::{lookup, RoomCoord, RoomDef};
use crate::tuning::{ENTRY_FROM_BOTTOM_Y, ENTRY_FROM_TOP_RISE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Left,
    Right,
    Top,
    Bottom,
}

impl Exit {
    /// Grid step taken when leaving through this edge.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Exit::Left => (-1, 0),
            Exit::Right => (1, 0),
            Exit::Top => (0, -1),
            Exit::Bottom => (0, 1),
        }
    }
}

/// The edge the player has crossed, if any.
pub fn check_exit(pos: Vec2, viewport: Vec2, padding: f32) -> Option<Exit> {
    if pos.x < -padding {
        Some(Exit::Left)
    } else if pos.x > viewport.x + padding {
        Some(Exit::Right)
    } else if pos.y < -padding {
        Some(Exit::Top)
    } else if pos.y > viewport.y + padding {
        Some(Exit::Bottom)
    } else {
        None
    }
}

/// Outcome of trying to leave a room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// A neighbor exists; the player appears at `pos` inside it.
    Entered {
        room: RoomCoord,
        def: &'static RoomDef,
        pos: Vec2,
    },
    /// No neighbor; the player is pushed back onto the crossed edge.
    Blocked { pos: Vec2 },
}

/// Decide where the player ends up after leaving `current` through `exit`.
pub fn attempt_move(
    current: RoomCoord,
    exit: Exit,
    pos: Vec2,
    viewport: Vec2,
    padding: f32,
) -> Transition {
    let (dx, dy) = exit.delta();
    let next = current.offset(dx, dy);

    let Some(def) = lookup(next) else {
        let clamped = match exit {
            Exit::Left => Vec2::new(0.0, pos.y),
            Exit::Right => Vec2::new(viewport.x, pos.y),
            Exit::Top => Vec2::new(pos.x, 0.0),
            Exit::Bottom => Vec2::new(pos.x, viewport.y),
        };
        return Transition::Blocked { pos: clamped };
    };

    let entry = match exit {
        Exit::Left => Vec2::new(viewport.x - padding, pos.y),
        Exit::Right => Vec2::new(padding, pos.y),
        Exit::Top => Vec2::new(pos.x, viewport.y - ENTRY_FROM_TOP_RISE),
        Exit::Bottom => Vec2::new(pos.x, ENTRY_FROM_BOTTOM_Y),
    };
    Transition::Entered { room: next, def, pos: entry }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    /// Only observable from inside a commit.
    Transitioning,
}

/// Marks the span of a room commit.
#[derive(Debug, Default)]
pub struct TransitionController {
    state: TransitionState,
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn begin(&mut self) {
        self.state = TransitionState::Transitioning;
    }

    pub fn finish(&mut self) {
        self.state = TransitionState::Idle;
    }
}
