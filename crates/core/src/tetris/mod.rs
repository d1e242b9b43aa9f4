//! Tetris: a 10x20 grid, seven matrix tetrominoes, classic line scoring.
//!
//! - [`board`]: grid storage, collision, merge and row clearing
//! - [`shape`]: shape matrices and clockwise rotation
//! - [`scoring`]: line points, level and gravity interval
//! - [`session`]: complete game state and the gravity/drop rules
//! - [`view`]: draw pass
//! - [`game`]: lifecycle wrapper and key mapping

pub mod board;
pub mod game;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod view;

pub use board::Board;
pub use game::{action_for_key, TetrisGame};
pub use session::{Piece, TetrisAction, TetrisSession, TickOutcome};
pub use shape::Shape;
