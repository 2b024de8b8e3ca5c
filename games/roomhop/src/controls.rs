//! On-screen buttons for touch devices.
//!
//! Each button is a circle; pressing `<` or `>` holds a direction until the
//! pointer lifts or slides off the button, and pressing `JUMP` leaves a
//! one-shot request that movement consumes on its next step.

use std::collections::HashMap;

use glam::Vec2;
use roomhop_engine::{
    Color, EngineContext, InputEvent, LabelId, RenderLayer, TextAnchor, TextLabel, VectorCanvas,
};

use crate::tuning::{
    BUTTON_FILL_ALPHA, BUTTON_LABEL_COLOR, BUTTON_LABEL_LARGE, BUTTON_LABEL_SMALL,
    BUTTON_STROKE_ALPHA, BUTTON_STROKE_COLOR, BUTTON_STROKE_WIDTH,
};

/// Touch-driven movement flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchInputState {
    pub left: bool,
    pub right: bool,
    pub jump_requested: bool,
}

impl TouchInputState {
    /// Read and clear the jump request.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_requested)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Left,
    Right,
    Jump,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchButton {
    pub kind: ButtonKind,
    pub center: Vec2,
    pub radius: f32,
    pub label: &'static str,
}

impl TouchButton {
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.distance_squared(self.center) <= self.radius * self.radius
    }

    /// Short glyph labels get the large font.
    pub fn font_size(&self) -> f32 {
        if self.label.chars().count() > 2 {
            BUTTON_LABEL_SMALL
        } else {
            BUTTON_LABEL_LARGE
        }
    }
}

pub const BUTTONS: [TouchButton; 3] = [
    TouchButton { kind: ButtonKind::Left, center: Vec2::new(110.0, 632.0), radius: 58.0, label: "<" },
    TouchButton { kind: ButtonKind::Right, center: Vec2::new(242.0, 632.0), radius: 58.0, label: ">" },
    TouchButton { kind: ButtonKind::Jump, center: Vec2::new(1160.0, 628.0), radius: 64.0, label: "JUMP" },
];

/// Tracks which button each pointer is over and turns pointer events into
/// [`TouchInputState`] changes.
#[derive(Debug, Default)]
pub struct TouchControls {
    over: HashMap<u32, ButtonKind>,
    labels: Vec<LabelId>,
}

impl TouchControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the buttons onto the HUD canvas and add their labels.
    pub fn create(ctx: &mut EngineContext) -> Self {
        draw_buttons(&mut ctx.hud);
        let labels = BUTTONS
            .iter()
            .map(|button| {
                ctx.text.add(
                    TextLabel::new(
                        button.label,
                        button.center,
                        button.font_size(),
                        Color::hex(BUTTON_LABEL_COLOR),
                    )
                    .with_anchor(TextAnchor::Center)
                    .with_layer(RenderLayer::Controls),
                )
            })
            .collect();
        log::info!("touch controls created");
        Self {
            over: HashMap::new(),
            labels,
        }
    }

    /// Erase the buttons and their labels.
    pub fn remove(self, ctx: &mut EngineContext) {
        ctx.hud.clear();
        for label in self.labels {
            ctx.text.remove(label);
        }
    }

    pub fn handle(&mut self, events: &[InputEvent], state: &mut TouchInputState) {
        for event in events {
            match *event {
                InputEvent::PointerDown { id, pos } => {
                    let hit = hit_test(pos);
                    self.move_pointer(id, hit, state);
                    if let Some(kind) = hit {
                        press(kind, state);
                    }
                }
                InputEvent::PointerMove { id, pos } => {
                    self.move_pointer(id, hit_test(pos), state);
                }
                InputEvent::PointerUp { id, pos } => {
                    if let Some(kind) = hit_test(pos) {
                        release(kind, state);
                    }
                    if let Some(kind) = self.over.remove(&id) {
                        release(kind, state);
                    }
                }
                InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } => {}
            }
        }
    }

    /// Track the button under pointer `id`; leaving a button releases it.
    fn move_pointer(&mut self, id: u32, hit: Option<ButtonKind>, state: &mut TouchInputState) {
        let previous = match hit {
            Some(kind) => self.over.insert(id, kind),
            None => self.over.remove(&id),
        };
        if let Some(prev) = previous {
            if Some(prev) != hit {
                release(prev, state);
            }
        }
    }
}

fn hit_test(pos: Vec2) -> Option<ButtonKind> {
    BUTTONS.iter().find(|b| b.contains(pos)).map(|b| b.kind)
}

fn press(kind: ButtonKind, state: &mut TouchInputState) {
    match kind {
        ButtonKind::Left => state.left = true,
        ButtonKind::Right => state.right = true,
        ButtonKind::Jump => state.jump_requested = true,
    }
}

fn release(kind: ButtonKind, state: &mut TouchInputState) {
    match kind {
        ButtonKind::Left => state.left = false,
        ButtonKind::Right => state.right = false,
        // The jump request is cleared by whoever consumes it.
        ButtonKind::Jump => {}
    }
}

fn draw_buttons(canvas: &mut VectorCanvas) {
    let fill = Color::WHITE.with_alpha(BUTTON_FILL_ALPHA);
    let stroke = Color::hex(BUTTON_STROKE_COLOR).with_alpha(BUTTON_STROKE_ALPHA);
    for button in &BUTTONS {
        canvas.fill_circle(button.center, button.radius, fill);
        canvas.stroke_circle(button.center, button.radius, BUTTON_STROKE_WIDTH, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEFT_AT: Vec2 = Vec2::new(110.0, 632.0);
    const RIGHT_AT: Vec2 = Vec2::new(242.0, 632.0);
    const JUMP_AT: Vec2 = Vec2::new(1160.0, 628.0);
    const NOWHERE: Vec2 = Vec2::new(640.0, 200.0);

    fn run(controls: &mut TouchControls, state: &mut TouchInputState, events: &[InputEvent]) {
        controls.handle(events, state);
    }

    #[test]
    fn hit_test_respects_radius() {
        assert_eq!(hit_test(LEFT_AT + Vec2::new(57.0, 0.0)), Some(ButtonKind::Left));
        assert_eq!(hit_test(LEFT_AT + Vec2::new(0.0, 59.0)), None);
        assert_eq!(hit_test(JUMP_AT + Vec2::new(-63.0, 0.0)), Some(ButtonKind::Jump));
        assert_eq!(hit_test(NOWHERE), None);
    }

    #[test]
    fn press_and_release_direction() {
        let mut controls = TouchControls::new();
        let mut state = TouchInputState::default();
        run(&mut controls, &mut state, &[InputEvent::PointerDown { id: 1, pos: RIGHT_AT }]);
        assert!(state.right);
        run(&mut controls, &mut state, &[InputEvent::PointerUp { id: 1, pos: RIGHT_AT }]);
        assert!(!state.right);
    }

    #[test]
    fn sliding_off_releases() {
        let mut controls = TouchControls::new();
        let mut state = TouchInputState::default();
        run(
            &mut controls,
            &mut state,
            &[
                InputEvent::PointerDown { id: 1, pos: LEFT_AT },
                InputEvent::PointerMove { id: 1, pos: LEFT_AT + Vec2::new(10.0, 0.0) },
            ],
        );
        assert!(state.left);
        run(&mut controls, &mut state, &[InputEvent::PointerMove { id: 1, pos: NOWHERE }]);
        assert!(!state.left);
    }

    #[test]
    fn two_fingers_hold_two_buttons() {
        let mut controls = TouchControls::new();
        let mut state = TouchInputState::default();
        run(
            &mut controls,
            &mut state,
            &[
                InputEvent::PointerDown { id: 1, pos: LEFT_AT },
                InputEvent::PointerDown { id: 2, pos: JUMP_AT },
            ],
        );
        assert!(state.left);
        assert!(state.jump_requested);

        run(&mut controls, &mut state, &[InputEvent::PointerUp { id: 2, pos: JUMP_AT }]);
        assert!(state.left, "lifting the jump finger keeps moving");
    }

    #[test]
    fn jump_is_one_shot() {
        let mut controls = TouchControls::new();
        let mut state = TouchInputState::default();
        run(&mut controls, &mut state, &[InputEvent::PointerDown { id: 3, pos: JUMP_AT }]);
        assert!(state.take_jump());
        assert!(!state.take_jump());
        // Keeping the finger down does not re-arm it.
        run(&mut controls, &mut state, &[InputEvent::PointerMove { id: 3, pos: JUMP_AT }]);
        assert!(!state.take_jump());
    }

    #[test]
    fn labels_pick_font_size_by_length() {
        assert_eq!(BUTTONS[0].font_size(), 38.0);
        assert_eq!(BUTTONS[2].font_size(), 24.0);
    }

    #[test]
    fn create_draws_hud_and_labels() {
        let mut ctx = EngineContext::default();
        let controls = TouchControls::create(&mut ctx);
        assert!(ctx.hud.vertex_count() > 0);
        assert_eq!(ctx.text.len(), 3);

        controls.remove(&mut ctx);
        assert_eq!(ctx.hud.vertex_count(), 0);
        assert!(ctx.text.is_empty());
    }
}
