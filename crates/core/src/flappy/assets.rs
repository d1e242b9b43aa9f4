//! Sprite metrics.
//!
//! Physics and collision are derived from sprite dimensions, so the session
//! needs them even though it never touches pixels. Hosts that load real
//! images can pass their measured sizes; the defaults match the stock art.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteMetrics {
    pub bird: Size,
    pub pipe: Size,
    pub ground: Size,
    pub background: Size,
    pub get_ready: Size,
    pub game_over: Size,
    pub tap: Size,
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        Self {
            bird: Size::new(34.0, 26.0),
            pipe: Size::new(52.0, 400.0),
            ground: Size::new(552.0, 112.0),
            background: Size::new(276.0, 228.0),
            get_ready: Size::new(174.0, 160.0),
            game_over: Size::new(188.0, 144.0),
            tap: Size::new(114.0, 98.0),
        }
    }
}

impl SpriteMetrics {
    /// Half the bird's width; used against the ground line.
    pub fn bird_radius(&self) -> f32 {
        self.bird.w / 2.0
    }

    /// Tighter radius used against pipes.
    pub fn bird_hit_radius(&self) -> f32 {
        self.bird.h / 4.0 + self.bird.w / 4.0
    }
}
