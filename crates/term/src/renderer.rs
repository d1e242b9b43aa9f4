//! TerminalRenderer: the arcade screen on a real terminal.
//!
//! Every row but the last shows the game canvas; the last row is a status
//! line. Each frame is composed into a back buffer, compared row by row with
//! what the terminal already shows, and only the changed span of each row is
//! rewritten. The first frame and any frame after a resize are repainted in
//! full.

use std::io::{self, Write};
use std::mem;

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::canvas::{RasterCanvas, Viewport};
use crate::core::Renderer;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

pub const STATUS_STYLE: CellStyle = CellStyle {
    fg: Rgb::new(160, 160, 160),
    bg: Rgb::new(0, 0, 0),
    bold: false,
};

/// Terminal size used when the real size can't be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows; `None` forces a full repaint.
    front: Option<FrameBuffer>,
    back: FrameBuffer,
    out: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            front: None,
            back: FrameBuffer::new(0, 0),
            out: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.out.queue(EnableMouseCapture)?;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(DisableMouseCapture)?;
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next frame.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Compose one frame at the current terminal size and flush the changes.
    pub fn present(&mut self, status: &str, draw: impl FnOnce(&mut dyn Renderer)) -> Result<()> {
        let (width, height) = terminal::size().unwrap_or(FALLBACK_SIZE);
        compose(&mut self.back, width, height, status, draw);

        self.out.clear();
        encode_frame(self.front.as_ref(), &self.back, &mut self.out)?;
        self.flush()?;

        match self.front.as_mut() {
            Some(front) => mem::swap(front, &mut self.back),
            None => self.front = Some(mem::replace(&mut self.back, FrameBuffer::new(0, 0))),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lay out a `width x height` frame: the canvas on all rows but the last,
/// `status` on the last.
pub fn compose(
    fb: &mut FrameBuffer,
    width: u16,
    height: u16,
    status: &str,
    draw: impl FnOnce(&mut dyn Renderer),
) {
    fb.resize(width, height);
    fb.clear(Cell::default());

    let status_row = height.saturating_sub(1);
    {
        let mut canvas = RasterCanvas::with_viewport(fb, Viewport::new(width, status_row));
        let canvas: &mut dyn Renderer = &mut canvas;
        draw(canvas);
    }
    if height > 0 {
        fb.put_str(0, status_row, status, STATUS_STYLE);
    }
}

/// Changed columns `[start, end)` between two rows of equal length.
pub fn dirty_span(prev: &[Cell], next: &[Cell]) -> Option<(u16, u16)> {
    let start = prev.iter().zip(next).position(|(a, b)| a != b)?;
    let end = prev.iter().zip(next).rposition(|(a, b)| a != b)?;
    Some((start as u16, end as u16 + 1))
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// With no `prev`, or a `prev` of another size, the screen is cleared and
/// every row is written. Returns the number of rows written.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<u16> {
    let prev = prev.filter(|p| p.same_size(next));
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    let mut written = 0;
    for y in 0..next.height() {
        let Some(row) = next.row(y) else { break };
        let span = match prev.and_then(|p| p.row(y)) {
            Some(old) => dirty_span(old, row),
            None => Some((0, next.width())),
        };
        let Some((start, end)) = span else { continue };

        out.queue(cursor::MoveTo(start, y))?;
        pen.write(out, &row[start as usize..end as usize])?;
        written += 1;
    }

    if written > 0 {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(written)
}

/// Tracks the style last sent so runs of equal style cost one escape.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn write(&mut self, out: &mut Vec<u8>, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            if self.style != Some(cell.style) {
                let s = cell.style;
                out.queue(SetAttribute(Attribute::Reset))?;
                out.queue(SetForegroundColor(color(s.fg)))?;
                out.queue(SetBackgroundColor(color(s.bg)))?;
                if s.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                self.style = Some(s);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
