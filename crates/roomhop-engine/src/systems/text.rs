//! Text labels.
//!
//! Glyph rasterization is left to the JS host (it has the browser's fonts);
//! the engine only owns *what* is written *where*. Labels are serialized to
//! JSON whenever they change and the host redraws them.

use glam::Vec2;
use serde::Serialize;

use crate::components::color::Color;
use crate::components::layer::RenderLayer;

/// Identifies a label inside [`TextState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LabelId(pub u32);

/// Which point of the text box `pos` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    #[default]
    TopLeft,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub id: LabelId,
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_family: String,
    pub font_size: f32,
    /// CSS color string, e.g. `#145f33`.
    pub color: String,
    pub anchor: TextAnchor,
    pub layer: u8,
}

impl TextLabel {
    pub fn new(text: impl Into<String>, pos: Vec2, font_size: f32, color: Color) -> Self {
        Self {
            id: LabelId(0),
            text: text.into(),
            x: pos.x,
            y: pos.y,
            font_family: "Verdana, sans-serif".to_string(),
            font_size,
            color: color.to_css(),
            anchor: TextAnchor::TopLeft,
            layer: RenderLayer::Hud.as_u8(),
        }
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer.as_u8();
        self
    }
}

/// All live labels plus a dirty flag for the host.
#[derive(Debug, Default)]
pub struct TextState {
    labels: Vec<TextLabel>,
    next_id: u32,
    dirty: bool,
}

impl TextState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label and return its id.
    pub fn add(&mut self, mut label: TextLabel) -> LabelId {
        let id = LabelId(self.next_id);
        self.next_id += 1;
        label.id = id;
        self.labels.push(label);
        self.dirty = true;
        id
    }

    /// Replace a label's text. Returns false if the label does not exist.
    pub fn set_text(&mut self, id: LabelId, text: impl Into<String>) -> bool {
        match self.labels.iter_mut().find(|l| l.id == id) {
            Some(label) => {
                label.text = text.into();
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: LabelId) -> Option<TextLabel> {
        let idx = self.labels.iter().position(|l| l.id == id)?;
        self.dirty = true;
        Some(self.labels.remove(idx))
    }

    pub fn get(&self, id: LabelId) -> Option<&TextLabel> {
        self.labels.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
        self.dirty = true;
    }

    /// Whether labels changed since the last [`TextState::take_dirty`].
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Serialize every label as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_label() -> TextLabel {
        TextLabel::new("", Vec2::new(24.0, 22.0), 20.0, Color::hex(0x145f33))
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let mut text = TextState::new();
        let a = text.add(room_label());
        let b = text.add(room_label());
        assert_ne!(a, b);
        assert_eq!(text.len(), 2);
    }

    #[test]
    fn set_text_marks_dirty() {
        let mut text = TextState::new();
        let id = text.add(room_label());
        assert!(text.take_dirty());
        assert!(!text.take_dirty());

        assert!(text.set_text(id, "ROOM A-1"));
        assert!(text.take_dirty());
        assert_eq!(text.get(id).unwrap().text, "ROOM A-1");
    }

    #[test]
    fn set_text_on_missing_label_fails() {
        let mut text = TextState::new();
        assert!(!text.set_text(LabelId(7), "nope"));
    }

    #[test]
    fn json_carries_css_color_and_anchor() {
        let mut text = TextState::new();
        text.add(
            TextLabel::new("JUMP", Vec2::new(1160.0, 628.0), 24.0, Color::hex(0x14703a))
                .with_anchor(TextAnchor::Center),
        );
        let json = text.to_json().unwrap();
        assert!(json.contains("\"text\":\"JUMP\""));
        assert!(json.contains("\"color\":\"#14703a\""));
        assert!(json.contains("\"anchor\":\"center\""));
    }
}
