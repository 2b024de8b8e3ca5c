//! Lyon-based retained vector canvas.
//!
//! Shapes are tessellated on the CPU into a flat triangle-list vertex buffer
//! that the JS host uploads and draws. Unlike sprites, a canvas is *retained*:
//! nothing is cleared between frames, so a backdrop drawn once on room load
//! stays on screen until the game calls [`VectorCanvas::clear`].
//!
//! ```ignore
//! ctx.backdrop.clear();
//! ctx.backdrop.fill_rect(Vec2::ZERO, 1280.0, 720.0, Color::hex(0xdadada));
//! ctx.hud.fill_circle(Vec2::new(110.0, 632.0), 58.0, Color::WHITE.with_alpha(0.17));
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::{point, Box2D};
use lyon::path::builder::BorderRadii;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use crate::components::color::Color;

/// Per-vertex data for vector rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn at(x: f32, y: f32, color: Color) -> Self {
        Self { x, y, r: color.r, g: color.g, b: color.b, a: color.a }
    }
}

struct FillVertexCtor {
    color: Color,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        VectorVertex::at(vertex.position().x, vertex.position().y, self.color)
    }
}

struct StrokeVertexCtor {
    color: Color,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex::at(vertex.position().x, vertex.position().y, self.color)
    }
}

/// A retained layer of tessellated shapes.
pub struct VectorCanvas {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    /// Bumped on every change so the host can skip re-uploading.
    revision: u32,
}

impl VectorCanvas {
    pub fn new() -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(4096 * VectorVertex::FLOATS),
            revision: 0,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    pub fn revision(&self) -> u32 {
        self.revision
    }

    /// Raw pointer to the flat float buffer.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
        self.revision = self.revision.wrapping_add(1);
    }

    /// Fill an axis-aligned rectangle given its top-left corner.
    ///
    /// Emitted directly as two triangles; rectangles are the bulk of a
    /// backdrop and need no tessellation.
    pub fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: Color) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let (x0, y0, x1, y1) = (pos.x, pos.y, pos.x + width, pos.y + height);
        for (x, y) in [(x0, y0), (x1, y0), (x1, y1), (x0, y0), (x1, y1), (x0, y1)] {
            let v = VectorVertex::at(x, y, color);
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.revision = self.revision.wrapping_add(1);
    }

    /// Fill a rectangle with rounded corners, given its top-left corner.
    pub fn fill_rounded_rect(&mut self, pos: Vec2, width: f32, height: f32, radius: f32, color: Color) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_rounded_rectangle(
            &Box2D::new(point(pos.x, pos.y), point(pos.x + width, pos.y + height)),
            &BorderRadii::new(radius.max(0.0)),
            Winding::Positive,
        );
        let path = builder.build();
        self.fill_path(&path, color);
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        let path = builder.build();
        self.fill_path(&path, color);
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color) {
        if radius <= 0.0 || line_width <= 0.0 {
            return;
        }
        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        let path = builder.build();
        self.stroke_path(&path, line_width, color);
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(0.5),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => {
                log::warn!("vector fill failed: {:?}", err);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: Color) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => {
                log::warn!("vector stroke failed: {:?}", err);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    /// Flat vertex floats, six per vertex.
    pub fn vertices(&self) -> &[f32] {
        &self.buffer
    }
}

impl Default for VectorCanvas {
    fn default() -> Self {
        Self::new()
    }
}
