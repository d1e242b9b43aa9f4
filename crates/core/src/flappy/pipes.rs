//! Pipe stream: spawned at the right edge, scrolled left, dropped off the left.

use std::collections::VecDeque;

use crate::flappy::assets::SpriteMetrics;
use crate::flappy::bird::Bird;
use crate::types::{FLAPPY_SCROLL, PIPE_GAP, PIPE_OFFSET_BASE, PIPE_OFFSET_CAP, SURFACE_WIDTH};

/// A pipe pair. `y` is the top edge of the upper pipe sprite (always
/// negative); the gap starts at `y + pipe height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f32,
    pub y: f32,
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, scored: false }
    }
}

/// Result of testing the bird against the front pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    None,
    Hit,
    /// The bird just cleared the pipe for the first time.
    Passed,
}

/// Vertical offset for a new pair from a uniform sample in `[0, 1)`.
pub fn pipe_offset(u: f32) -> f32 {
    PIPE_OFFSET_BASE * (u + 1.0).min(PIPE_OFFSET_CAP)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipeStream {
    pipes: VecDeque<Pipe>,
}

impl PipeStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, u: f32) {
        self.pipes.push_back(Pipe::new(SURFACE_WIDTH, pipe_offset(u)));
    }

    /// Insert a pipe directly. Pipes must be pushed in increasing `x`.
    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push_back(pipe);
    }

    /// Move every pipe left and drop the front one once fully off screen.
    pub fn scroll(&mut self, pipe_w: f32) {
        for pipe in self.pipes.iter_mut() {
            pipe.x -= FLAPPY_SCROLL;
        }
        if self.pipes.front().is_some_and(|p| p.x < -pipe_w) {
            self.pipes.pop_front();
        }
    }

    /// Test the bird against the front pipe only.
    pub fn contact(&mut self, bird: &Bird, metrics: &SpriteMetrics) -> Contact {
        let Some(pipe) = self.pipes.front_mut() else {
            return Contact::None;
        };
        let r = metrics.bird_hit_radius();
        let roof = pipe.y + metrics.pipe.h;
        let floor = roof + PIPE_GAP;

        if bird.x + r < pipe.x {
            return Contact::None;
        }
        if bird.x + r < pipe.x + metrics.pipe.w {
            if bird.y - r <= roof || bird.y + r >= floor {
                return Contact::Hit;
            }
            return Contact::None;
        }
        if pipe.scored {
            return Contact::None;
        }
        pipe.scored = true;
        Contact::Passed
    }

    pub fn front(&self) -> Option<&Pipe> {
        self.pipes.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn clear(&mut self) {
        self.pipes.clear();
    }
}
