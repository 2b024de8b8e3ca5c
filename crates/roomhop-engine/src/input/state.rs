//! Per-frame keyboard and pointer state.
//!
//! The JS host only reports edges (key down / key up). Games want levels
//! ("is held") and one-frame edges ("was just pressed"), so the runner folds
//! each frame's events into an [`InputState`] before calling `Game::update`.

use std::collections::HashSet;

use crate::input::queue::InputEvent;

/// DOM `keyCode` values for the keys the engine names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const SPACE: Self = Self(32);
    pub const LEFT: Self = Self(37);
    pub const UP: Self = Self(38);
    pub const RIGHT: Self = Self(39);
    pub const DOWN: Self = Self(40);
    pub const A: Self = Self(65);
    pub const D: Self = Self(68);
    pub const S: Self = Self(83);
    pub const W: Self = Self(87);
}

/// Keyboard levels and edges plus the pointer events of the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<u32>,
    just_pressed: HashSet<u32>,
    pointer_events: Vec<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a frame's worth of raw events into the state.
    ///
    /// A key pressed and released within the same frame still reads as
    /// just-pressed for that frame, but not as held.
    pub fn begin_frame(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.just_pressed.clear();
        self.pointer_events.clear();
        for event in events {
            match event {
                InputEvent::KeyDown { key_code } => {
                    // Browsers repeat keydown while a key is held.
                    if self.held.insert(key_code) {
                        self.just_pressed.insert(key_code);
                    }
                }
                InputEvent::KeyUp { key_code } => {
                    self.held.remove(&key_code);
                }
                pointer => self.pointer_events.push(pointer),
            }
        }
    }

    /// Forget edges after the first fixed step of a frame so a single key
    /// press never fires twice when the frame runs several steps.
    pub fn end_step(&mut self) {
        self.just_pressed.clear();
        self.pointer_events.clear();
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key.0)
    }

    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key.0)
    }

    pub fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.is_held(*k))
    }

    pub fn any_just_pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.just_pressed(*k))
    }

    /// Pointer events received this frame, in arrival order.
    pub fn pointer_events(&self) -> &[InputEvent] {
        &self.pointer_events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn key_down_is_held_and_just_pressed() {
        let mut input = InputState::new();
        input.begin_frame([InputEvent::KeyDown { key_code: KeyCode::W.0 }]);
        assert!(input.is_held(KeyCode::W));
        assert!(input.just_pressed(KeyCode::W));
    }

    #[test]
    fn just_pressed_lasts_one_frame() {
        let mut input = InputState::new();
        input.begin_frame([InputEvent::KeyDown { key_code: KeyCode::SPACE.0 }]);
        input.begin_frame([]);
        assert!(input.is_held(KeyCode::SPACE));
        assert!(!input.just_pressed(KeyCode::SPACE));
    }

    #[test]
    fn key_repeat_does_not_re_press() {
        let mut input = InputState::new();
        input.begin_frame([InputEvent::KeyDown { key_code: KeyCode::UP.0 }]);
        input.begin_frame([InputEvent::KeyDown { key_code: KeyCode::UP.0 }]);
        assert!(!input.just_pressed(KeyCode::UP));
    }

    #[test]
    fn tap_within_one_frame_is_pressed_not_held() {
        let mut input = InputState::new();
        input.begin_frame([
            InputEvent::KeyDown { key_code: KeyCode::W.0 },
            InputEvent::KeyUp { key_code: KeyCode::W.0 },
        ]);
        assert!(input.just_pressed(KeyCode::W));
        assert!(!input.is_held(KeyCode::W));
    }

    #[test]
    fn end_step_clears_edges_but_not_levels() {
        let mut input = InputState::new();
        input.begin_frame([
            InputEvent::KeyDown { key_code: KeyCode::D.0 },
            InputEvent::PointerDown { id: 0, pos: Vec2::ZERO },
        ]);
        input.end_step();
        assert!(input.is_held(KeyCode::D));
        assert!(!input.just_pressed(KeyCode::D));
        assert!(input.pointer_events().is_empty());
    }

    #[test]
    fn pointer_events_are_kept_in_order() {
        let mut input = InputState::new();
        input.begin_frame([
            InputEvent::PointerDown { id: 1, pos: Vec2::new(1.0, 1.0) },
            InputEvent::KeyDown { key_code: KeyCode::A.0 },
            InputEvent::PointerUp { id: 1, pos: Vec2::new(2.0, 2.0) },
        ]);
        let events = input.pointer_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], InputEvent::PointerDown { .. }));
        assert!(matches!(events[1], InputEvent::PointerUp { .. }));
    }
}
