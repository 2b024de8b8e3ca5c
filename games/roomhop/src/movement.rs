//! Keyboard and touch input → player velocity.

use roomhop_engine::{InputState, KeyCode};

use crate::controls::TouchInputState;
use crate::tuning::{PLAYER_JUMP_SPEED, PLAYER_SPEED};

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::LEFT, KeyCode::A];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::RIGHT, KeyCode::D];
const JUMP_KEYS: [KeyCode; 3] = [KeyCode::UP, KeyCode::W, KeyCode::SPACE];

/// What the player asked for this step, independent of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl MoveIntent {
    /// Merge keys and touch buttons. Consumes the touch jump request whether
    /// or not a jump follows.
    pub fn read(input: &InputState, touch: &mut TouchInputState) -> Self {
        let touch_jump = touch.take_jump();
        Self {
            left: input.any_held(&LEFT_KEYS) || touch.left,
            right: input.any_held(&RIGHT_KEYS) || touch.right,
            jump: input.any_just_pressed(&JUMP_KEYS) || touch_jump,
        }
    }

    /// -1, 0 or 1. Both directions at once cancel out.
    pub fn direction(&self) -> f32 {
        f32::from(u8::from(self.right)) - f32::from(u8::from(self.left))
    }
}

/// Velocity and facing changes for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    pub vx: f32,
    /// Set only when a jump fires.
    pub vy: Option<f32>,
    /// New facing, or `None` to keep the current one.
    pub face_left: Option<bool>,
}

pub fn resolve(intent: MoveIntent, grounded: bool) -> MoveOutcome {
    let direction = intent.direction();
    MoveOutcome {
        vx: direction * PLAYER_SPEED,
        vy: (intent.jump && grounded).then_some(-PLAYER_JUMP_SPEED),
        face_left: (direction != 0.0).then_some(direction < 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomhop_engine::InputEvent;

    fn held(keys: &[KeyCode]) -> InputState {
        let mut input = InputState::new();
        input.begin_frame(keys.iter().map(|k| InputEvent::KeyDown { key_code: k.0 }));
        // Drop the edges so only levels remain.
        input.end_step();
        input
    }

    fn pressed(keys: &[KeyCode]) -> InputState {
        let mut input = InputState::new();
        input.begin_frame(keys.iter().map(|k| InputEvent::KeyDown { key_code: k.0 }));
        input
    }

    #[test]
    fn direction_from_keys() {
        let mut touch = TouchInputState::default();
        assert_eq!(MoveIntent::read(&held(&[KeyCode::LEFT]), &mut touch).direction(), -1.0);
        assert_eq!(MoveIntent::read(&held(&[KeyCode::D]), &mut touch).direction(), 1.0);
        assert_eq!(MoveIntent::read(&held(&[]), &mut touch).direction(), 0.0);
    }

    #[test]
    fn opposite_directions_cancel() {
        let mut touch = TouchInputState::default();
        let intent = MoveIntent::read(&held(&[KeyCode::A, KeyCode::RIGHT]), &mut touch);
        let out = resolve(intent, true);
        assert_eq!(out.vx, 0.0);
        assert_eq!(out.face_left, None);
    }

    #[test]
    fn speed_scales_direction() {
        let left = resolve(MoveIntent { left: true, ..MoveIntent::default() }, false);
        assert_eq!(left.vx, -320.0);
        assert_eq!(left.face_left, Some(true));

        let right = resolve(MoveIntent { right: true, ..MoveIntent::default() }, false);
        assert_eq!(right.vx, 320.0);
        assert_eq!(right.face_left, Some(false));
    }

    #[test]
    fn touch_buttons_move_too() {
        let mut touch = TouchInputState { left: true, ..TouchInputState::default() };
        let intent = MoveIntent::read(&held(&[]), &mut touch);
        assert_eq!(intent.direction(), -1.0);
    }

    #[test]
    fn jump_needs_ground() {
        let jump = MoveIntent { jump: true, ..MoveIntent::default() };
        assert_eq!(resolve(jump, true).vy, Some(-720.0));
        assert_eq!(resolve(jump, false).vy, None);
        assert_eq!(resolve(MoveIntent::default(), true).vy, None);
    }

    #[test]
    fn holding_jump_does_not_repeat() {
        let mut touch = TouchInputState::default();
        for key in JUMP_KEYS {
            assert!(MoveIntent::read(&pressed(&[key]), &mut touch).jump);
            assert!(!MoveIntent::read(&held(&[key]), &mut touch).jump);
        }
    }

    #[test]
    fn touch_jump_is_consumed_even_in_the_air() {
        let mut touch = TouchInputState { jump_requested: true, ..TouchInputState::default() };
        let intent = MoveIntent::read(&held(&[]), &mut touch);
        assert!(intent.jump);
        assert_eq!(resolve(intent, false).vy, None);
        assert!(!touch.jump_requested);
        assert!(!MoveIntent::read(&held(&[]), &mut touch).jump);
    }
}
