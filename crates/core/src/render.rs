//! Drawing capability.
//!
//! Games never talk to a concrete surface. They receive a `&mut dyn Renderer`
//! in their draw pass and issue primitives in logical surface units
//! (276x414, origin top-left).

use crate::types::{Rgb, Sprite, TextAlign, SURFACE_HEIGHT, SURFACE_WIDTH};

/// 2D raster drawing primitives.
pub trait Renderer {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb);

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb);

    /// Draw text with its top edge at `y`, anchored horizontally at `x`.
    fn text(&mut self, x: f32, y: f32, text: &str, align: TextAlign, color: Rgb);

    /// Draw a sprite into the box at `(x, y, w, h)`, rotated about its center.
    fn sprite(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32, rotation_deg: f32);

    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb) {
        self.fill_rect(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT, color);
    }
}

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill { x: f32, y: f32, w: f32, h: f32, color: Rgb },
    Stroke { x: f32, y: f32, w: f32, h: f32, color: Rgb },
    Text { x: f32, y: f32, text: String, align: TextAlign, color: Rgb },
    Sprite { sprite: Sprite, x: f32, y: f32, w: f32, h: f32, rotation_deg: f32 },
}

/// Renderer that records every primitive. Used by tests and headless hosts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// All text drawn, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Sprites drawn, in draw order.
    pub fn sprites(&self) -> Vec<Sprite> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { sprite, .. } => Some(*sprite),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for DrawList {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.commands.push(DrawCommand::Fill { x, y, w, h, color });
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.commands.push(DrawCommand::Stroke { x, y, w, h, color });
    }

    fn text(&mut self, x: f32, y: f32, text: &str, align: TextAlign, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            align,
            color,
        });
    }

    fn sprite(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32, rotation_deg: f32) {
        self.commands.push(DrawCommand::Sprite {
            sprite,
            x,
            y,
            w,
            h,
            rotation_deg,
        });
    }
}
