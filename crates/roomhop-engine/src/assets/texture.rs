//! Procedural textures.
//!
//! Games rasterize placeholder art at startup with a tiny software canvas
//! and register the result under a name. The host uploads each texture's
//! RGBA bytes once and sprites refer to them by [`TextureId`].

use std::collections::HashMap;

use crate::components::color::Color;
use crate::components::sprite::TextureId;

/// CPU-side RGBA8 pixel canvas used to author a texture.
///
/// Coverage is decided per pixel center with no anti-aliasing, which is all
/// placeholder silhouettes need.
#[derive(Debug, Clone)]
pub struct TextureCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    fill: [u8; 4],
}

impl TextureCanvas {
    /// A fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
            fill: [255, 255, 255, 255],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set the color used by subsequent fills.
    pub fn fill_style(&mut self, color: Color) -> &mut Self {
        self.fill = color.to_rgba8();
        self
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        self.fill_where(x, y, x + w, y + h, |_, _| true)
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32) -> &mut Self {
        let r2 = r * r;
        self.fill_where(cx - r, cy - r, cx + r, cy + r, |px, py| {
            let (dx, dy) = (px - cx, py - cy);
            dx * dx + dy * dy <= r2
        })
    }

    pub fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32) -> &mut Self {
        let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
        let (x1, y1) = (x + w, y + h);
        self.fill_where(x, y, x1, y1, |px, py| {
            // Distance from the nearest inner corner; zero on the straight bands.
            let dx = (x + r - px).max(px - (x1 - r)).max(0.0);
            let dy = (y + r - py).max(py - (y1 - r)).max(0.0);
            dx * dx + dy * dy <= r * r
        })
    }

    /// RGBA at integer coordinates, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[i..i + 4]);
        Some(out)
    }

    /// Freeze the canvas into a texture.
    pub fn finish(self) -> Texture {
        Texture {
            width: self.width,
            height: self.height,
            rgba: self.pixels,
        }
    }

    fn fill_where(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        covers: impl Fn(f32, f32) -> bool,
    ) -> &mut Self {
        let clamp_x = |v: f32| v.max(0.0).min(self.width as f32) as u32;
        let clamp_y = |v: f32| v.max(0.0).min(self.height as f32) as u32;
        let (left, right) = (clamp_x(x0.floor()), clamp_x(x1.ceil()));
        let (top, bottom) = (clamp_y(y0.floor()), clamp_y(y1.ceil()));

        for py in top..bottom {
            for px in left..right {
                let (cx, cy) = (px as f32 + 0.5, py as f32 + 0.5);
                if cx < x0 || cx > x1 || cy < y0 || cy > y1 || !covers(cx, cy) {
                    continue;
                }
                let i = ((py * self.width + px) * 4) as usize;
                self.pixels[i..i + 4].copy_from_slice(&self.fill);
            }
        }
        self
    }
}

/// An immutable RGBA8 texture.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Name → texture lookup, in registration order.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    textures: Vec<(String, Texture)>,
    by_name: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture under `name`. Re-registering a name replaces the
    /// pixels but keeps the id, so existing sprites pick up the new art.
    pub fn insert(&mut self, name: &str, texture: Texture) -> TextureId {
        if let Some(&id) = self.by_name.get(name) {
            self.textures[id.0 as usize].1 = texture;
            return id;
        }
        let id = TextureId(self.textures.len() as u32);
        self.textures.push((name.to_string(), texture));
        self.by_name.insert(name.to_string(), id);
        log::debug!("texture '{}' registered as {:?}", name, id);
        id
    }

    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id.0 as usize).map(|(_, t)| t)
    }

    pub fn name(&self, id: TextureId) -> Option<&str> {
        self.textures.get(id.0 as usize).map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
