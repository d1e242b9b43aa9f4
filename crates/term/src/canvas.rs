//! RasterCanvas: the logical 276x414 surface rasterized onto terminal cells.
//!
//! Terminal cells are roughly twice as tall as they are wide, so one cell
//! covers `scale` logical units horizontally and `2 * scale` vertically. The
//! transform is recomputed from the viewport every frame, so resizing the
//! terminal just changes the next frame's scale.

use crate::core::Renderer;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Rgb, Sprite, TextAlign, SURFACE_HEIGHT, SURFACE_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Logical-to-cell mapping for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Logical units per column.
    pub scale: f32,
    /// Cell of the surface's top-left corner.
    pub origin_x: u16,
    pub origin_y: u16,
    /// Size of the surface in cells.
    pub cols: u16,
    pub rows: u16,
}

impl Transform {
    /// Largest centered fit of the surface into `viewport`.
    pub fn fit(viewport: Viewport) -> Self {
        let vw = viewport.width.max(1) as f32;
        let vh = viewport.height.max(1) as f32;
        let scale = (SURFACE_WIDTH / vw).max(SURFACE_HEIGHT / (2.0 * vh));
        let cols = ((SURFACE_WIDTH / scale).floor() as u16).clamp(1, viewport.width.max(1));
        let rows = ((SURFACE_HEIGHT / (2.0 * scale)).floor() as u16).clamp(1, viewport.height.max(1));
        Self {
            scale,
            origin_x: (viewport.width.saturating_sub(cols)) / 2,
            origin_y: (viewport.height.saturating_sub(rows)) / 2,
            cols,
            rows,
        }
    }

    fn unit_w(&self) -> f32 {
        self.scale
    }

    fn unit_h(&self) -> f32 {
        self.scale * 2.0
    }

    /// Column (relative to the surface) holding logical `x`.
    pub fn col(&self, x: f32) -> i32 {
        (x / self.unit_w()).floor() as i32
    }

    /// Row (relative to the surface) holding logical `y`.
    pub fn row(&self, y: f32) -> i32 {
        (y / self.unit_h()).floor() as i32
    }

    /// Cell span whose centers fall inside `[start, start + len)`, never empty.
    fn span(start: f32, len: f32, unit: f32) -> (i32, i32) {
        let first = (start / unit - 0.5).ceil() as i32;
        let last = ((start + len) / unit - 0.5).ceil() as i32 - 1;
        if last < first {
            let mid = ((start + len / 2.0) / unit).floor() as i32;
            return (mid, mid);
        }
        (first, last)
    }

    fn cols_for(&self, x: f32, w: f32) -> (i32, i32) {
        Self::span(x, w, self.unit_w())
    }

    fn rows_for(&self, y: f32, h: f32) -> (i32, i32) {
        Self::span(y, h, self.unit_h())
    }
}

/// Colors and labels used for sprites. The terminal has no images, so each
/// sprite becomes a colored block, some with a short label.
fn sprite_look(sprite: Sprite) -> (Rgb, Option<&'static str>) {
    match sprite {
        Sprite::Background => (Rgb::new(0x7d, 0xd0, 0xa8), None),
        Sprite::PipeTop | Sprite::PipeBottom => (Rgb::new(0x73, 0xbf, 0x2e), None),
        Sprite::Ground => (Rgb::new(0xde, 0xd8, 0x95), None),
        Sprite::Bird { .. } => (Rgb::new(0xf8, 0xc0, 0x30), None),
        Sprite::GetReady => (Rgb::new(0x2a, 0x8a, 0x3e), Some("GET READY")),
        Sprite::GameOver => (Rgb::new(0xc8, 0x3c, 0x1e), Some("GAME OVER")),
        Sprite::Tap { frame: 0 } => (Rgb::new(0xff, 0xff, 0xff), Some("TAP")),
        Sprite::Tap { .. } => (Rgb::new(0xd0, 0xd0, 0xd0), Some("tap")),
    }
}

/// Bird glyph from its tilt.
fn bird_glyph(rotation_deg: f32) -> char {
    if rotation_deg < -10.0 {
        '/'
    } else if rotation_deg > 45.0 {
        'v'
    } else if rotation_deg > 10.0 {
        '\\'
    } else {
        '>'
    }
}

/// `Renderer` that writes into a framebuffer region.
pub struct RasterCanvas<'a> {
    fb: &'a mut FrameBuffer,
    transform: Transform,
}

impl<'a> RasterCanvas<'a> {
    /// Fit the surface into the whole framebuffer.
    pub fn new(fb: &'a mut FrameBuffer) -> Self {
        let viewport = Viewport::new(fb.width(), fb.height());
        Self::with_viewport(fb, viewport)
    }

    /// Fit the surface into the top-left `viewport` of the framebuffer.
    pub fn with_viewport(fb: &'a mut FrameBuffer, viewport: Viewport) -> Self {
        Self {
            fb,
            transform: Transform::fit(viewport),
        }
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable cell at surface-relative `(col, row)`, clipped to the surface.
    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        let t = self.transform;
        if col < 0 || row < 0 || col >= t.cols as i32 || row >= t.rows as i32 {
            return None;
        }
        self.fb
            .get_mut(t.origin_x + col as u16, t.origin_y + row as u16)
    }

    fn paint(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let (c0, c1) = self.transform.cols_for(x, w);
        let (r0, r1) = self.transform.rows_for(y, h);
        for row in r0.max(0)..=r1.min(self.transform.rows as i32 - 1) {
            for col in c0.max(0)..=c1.min(self.transform.cols as i32 - 1) {
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.ch = ' ';
                    cell.style.bg = color;
                }
            }
        }
    }

    fn put_glyph(&mut self, col: i32, row: i32, ch: char, fg: Rgb) {
        if let Some(cell) = self.cell_mut(col, row) {
            cell.ch = ch;
            cell.style.fg = fg;
        }
    }

    fn put_label(&mut self, col: i32, row: i32, text: &str, align: TextAlign, fg: Rgb) {
        let len = text.chars().count() as i32;
        let start = match align {
            TextAlign::Left => col,
            TextAlign::Center => col - len / 2,
            TextAlign::Right => col - len + 1,
        };
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(start + i as i32, row) {
                cell.ch = ch;
                cell.style = CellStyle {
                    fg,
                    bold: true,
                    ..cell.style
                };
            }
        }
    }
}

impl Renderer for RasterCanvas<'_> {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.paint(x, y, w, h, color);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let (c0, c1) = self.transform.cols_for(x, w);
        let (r0, r1) = self.transform.rows_for(y, h);
        for col in c0..=c1 {
            self.put_glyph(col, r0, '─', color);
            self.put_glyph(col, r1, '─', color);
        }
        for row in r0..=r1 {
            self.put_glyph(c0, row, '│', color);
            self.put_glyph(c1, row, '│', color);
        }
        if c0 != c1 && r0 != r1 {
            self.put_glyph(c0, r0, '┌', color);
            self.put_glyph(c1, r0, '┐', color);
            self.put_glyph(c0, r1, '└', color);
            self.put_glyph(c1, r1, '┘', color);
        }
    }

    fn text(&mut self, x: f32, y: f32, text: &str, align: TextAlign, color: Rgb) {
        let col = self.transform.col(x);
        let row = self.transform.row(y);
        self.put_label(col, row, text, align, color);
    }

    fn sprite(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32, rotation_deg: f32) {
        let (color, label) = sprite_look(sprite);
        if !matches!(sprite, Sprite::Tap { .. }) {
            self.paint(x, y, w, h, color);
        }

        let center_col = self.transform.col(x + w / 2.0);
        let center_row = self.transform.row(y + h / 2.0);
        match sprite {
            Sprite::Bird { .. } => {
                self.put_glyph(center_col, center_row, bird_glyph(rotation_deg), Rgb::new(0, 0, 0));
            }
            Sprite::GetReady | Sprite::GameOver => {
                let top_row = self.transform.rows_for(y, h).0;
                if let Some(label) = label {
                    self.put_label(center_col, top_row + 1, label, TextAlign::Center, Rgb::new(0xff, 0xff, 0xff));
                }
            }
            Sprite::Tap { .. } => {
                if let Some(label) = label {
                    self.put_label(center_col, center_row, label, TextAlign::Center, color);
                }
            }
            _ => {}
        }
    }
}
