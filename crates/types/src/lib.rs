//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used from the game logic, the terminal renderer and the host alike.
//!
//! # Drawing Surface
//!
//! Both games draw onto one logical surface of `SURFACE_WIDTH` x
//! `SURFACE_HEIGHT` units (276x414). Backends scale that surface to whatever
//! physical size they have.
//!
//! # Flappy Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FLAPPY_STEP_MS` | 20 | Fixed physics step |
//! | `FLAPPY_GRAVITY` | 0.125 | Speed gained per step |
//! | `FLAPPY_THRUST` | 3.6 | Upward speed set by a flap |
//! | `FLAPPY_SCROLL` | 2 | Pipe/ground scroll per step |
//! | `PIPE_GAP` | 95 | Vertical gap between pipe halves |
//! | `PIPE_SPAWN_EVERY` | 100 | Steps between pipe spawns |
//!
//! # Tetris Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Columns |
//! | `BOARD_HEIGHT` | 20 | Rows |
//! | `BASE_DROP_MS` | 700 | Gravity interval after reset |
//! | `DROP_STEP_MS` | 40 | Interval reduction per level |
//! | `DROP_FLOOR_MS` | 90 | Fastest gravity interval |
//! | `MAX_LEVEL` | 15 | Level cap |
//!
//! # Examples
//!
//! ```
//! use arcade_types::{PieceKind, Key, InputEvent, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(PieceKind::T.as_str(), "t");
//!
//! let ev = InputEvent::key(Key::Enter);
//! assert!(matches!(ev, InputEvent::Key { key: Key::Enter, shift: false }));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Logical surface width shared by both games.
pub const SURFACE_WIDTH: f32 = 276.0;

/// Logical surface height shared by both games.
pub const SURFACE_HEIGHT: f32 = 414.0;

/// Flappy fixed physics step in milliseconds.
pub const FLAPPY_STEP_MS: u32 = 20;

/// Upper bound on catch-up steps per `advance` call.
pub const FLAPPY_MAX_CATCH_UP: u32 = 5;

/// Speed gained per step while playing.
pub const FLAPPY_GRAVITY: f32 = 0.125;

/// Upward speed applied by a flap.
pub const FLAPPY_THRUST: f32 = 3.6;

/// Horizontal scroll per step for pipes and ground.
pub const FLAPPY_SCROLL: f32 = 2.0;

/// Bird's fixed horizontal position.
pub const BIRD_X: f32 = 50.0;

/// Bird's vertical position after a reset.
pub const BIRD_START_Y: f32 = 100.0;

/// Number of bird animation frames.
pub const BIRD_FRAMES: u8 = 4;

/// Vertical gap between the upper and lower pipe.
pub const PIPE_GAP: f32 = 95.0;

/// A pipe is spawned on every step divisible by this.
pub const PIPE_SPAWN_EVERY: u32 = 100;

/// Base vertical offset of a freshly spawned pipe pair.
pub const PIPE_OFFSET_BASE: f32 = -210.0;

/// Cap on the random offset multiplier.
pub const PIPE_OFFSET_CAP: f32 = 1.8;

/// Longest accepted player name, in characters.
pub const NAME_MAX_CHARS: usize = 16;

/// Number of leaderboard entries kept.
pub const LEADERBOARD_CAP: usize = 5;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Row a freshly spawned piece starts on (above the visible board).
pub const SPAWN_Y: i8 = -2;

/// Gravity interval after a reset.
pub const BASE_DROP_MS: u32 = 700;

/// Gravity interval reduction per level.
pub const DROP_STEP_MS: u32 = 40;

/// Fastest gravity interval.
pub const DROP_FLOOR_MS: u32 = 90;

/// Level after a reset.
pub const START_LEVEL: u32 = 1;

/// Level cap.
pub const MAX_LEVEL: u32 = 15;

/// Lines needed per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table, indexed by rows cleared at once.
///
/// The value is multiplied by `1 + level / 2`.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per row on a hard drop.
pub const HARD_DROP_POINTS: u32 = 2;

/// Points per soft drop key press.
pub const SOFT_DROP_POINTS: u32 = 1;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A keyboard key, reduced to what the games care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A single printable character (space included).
    Char(char),
    Enter,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Escape,
    Tab,
    Other,
}

/// Discrete input delivered to the active game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key { key: Key, shift: bool },
    Click,
}

impl InputEvent {
    /// Key press without modifiers.
    pub fn key(key: Key) -> Self {
        InputEvent::Key { key, shift: false }
    }

    /// Key press with shift held.
    pub fn shifted(key: Key) -> Self {
        InputEvent::Key { key, shift: true }
    }
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Sprites the Flappy game draws. Backends decide how they look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Bird { frame: u8 },
    PipeTop,
    PipeBottom,
    Ground,
    Background,
    GetReady,
    GameOver,
    Tap { frame: u8 },
}

/// Which game a module or event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Flappy,
    Tetris,
}

impl GameKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "flappy" | "bird" => Some(GameKind::Flappy),
            "tetris" => Some(GameKind::Tetris),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Flappy => "flappy",
            GameKind::Tetris => "tetris",
        }
    }

    /// The other game.
    pub fn other(&self) -> Self {
        match self {
            GameKind::Flappy => GameKind::Tetris,
            GameKind::Tetris => GameKind::Flappy,
        }
    }
}

/// Discrete cues emitted by the games.
///
/// These stand in for sound effects and lifecycle notifications; the host
/// decides what to do with them (the default binary logs them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Stopped,
    Reset,
    /// A round begins (or the start prompt is acknowledged).
    StartCue,
    Flap,
    Score { score: u32 },
    Hit,
    Die,
    LeaderboardSaved { name: String, score: u32 },
    LeaderboardCleared,
    PieceLocked { kind: PieceKind },
    LinesCleared { count: u32, points: u32 },
    Paused { paused: bool },
    GameOver { score: u32 },
}

impl GameEvent {
    /// Short snake_case name, used as the `event` field in logs.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Started => "started",
            GameEvent::Stopped => "stopped",
            GameEvent::Reset => "reset",
            GameEvent::StartCue => "start_cue",
            GameEvent::Flap => "flap",
            GameEvent::Score { .. } => "score",
            GameEvent::Hit => "hit",
            GameEvent::Die => "die",
            GameEvent::LeaderboardSaved { .. } => "leaderboard_saved",
            GameEvent::LeaderboardCleared => "leaderboard_cleared",
            GameEvent::PieceLocked { .. } => "piece_locked",
            GameEvent::LinesCleared { .. } => "lines_cleared",
            GameEvent::Paused { .. } => "paused",
            GameEvent::GameOver { .. } => "game_over",
        }
    }
}

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in the order the generator indexes them.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Neon palette color for this kind.
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0x00, 0xf0, 0xff),
            PieceKind::J => Rgb::new(0xff, 0x00, 0xcc),
            PieceKind::L => Rgb::new(0xff, 0xd3, 0x00),
            PieceKind::O => Rgb::new(0x00, 0xff, 0x85),
            PieceKind::S => Rgb::new(0xff, 0x3b, 0x7b),
            PieceKind::T => Rgb::new(0x8e, 0x5d, 0xff),
            PieceKind::Z => Rgb::new(0xff, 0x6b, 0x00),
        }
    }
}

/// A cell on the Tetris board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tetris_timing_defaults() {
        assert_eq!(BASE_DROP_MS, 700);
        assert_eq!(DROP_STEP_MS, 40);
        assert_eq!(DROP_FLOOR_MS, 90);
        assert_eq!(MAX_LEVEL, 15);
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
    }

    #[test]
    fn game_kind_parsing() {
        assert_eq!(GameKind::from_str(" Tetris "), Some(GameKind::Tetris));
        assert_eq!(GameKind::from_str("flappy"), Some(GameKind::Flappy));
        assert_eq!(GameKind::from_str("pong"), None);
        assert_eq!(GameKind::Flappy.other(), GameKind::Tetris);
    }
}
