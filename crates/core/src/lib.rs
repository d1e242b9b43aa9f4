//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds both games and the capability seams they are driven
//! through. It has **no dependency** on a terminal, a window or a file system:
//!
//! - **Deterministic**: every session takes a seed; same seed, same game
//! - **Injected capabilities**: drawing goes through [`Renderer`], the
//!   leaderboard goes through [`ScoreStore`]
//! - **One loop contract**: hosts call [`GameModule::advance`] with elapsed
//!   milliseconds, whatever their scheduler looks like
//!
//! # Module Structure
//!
//! - [`render`]: the `Renderer` drawing capability and a recording implementation
//! - [`store`]: the `ScoreStore` persistence capability and an in-memory store
//! - [`module`]: the `GameModule` lifecycle trait and the fixed-step clock
//! - [`flappy`]: bird physics, pipe stream, leaderboard, name entry, 3-state machine
//! - [`tetris`]: board, shapes, collision, line clears, drop timer
//!
//! # Example
//!
//! ```
//! use arcade_core::{GameModule, TetrisGame};
//! use arcade_core::types::{InputEvent, Key};
//!
//! let mut game = TetrisGame::new(12345);
//! game.start();
//! assert!(game.is_active());
//!
//! game.handle_input(InputEvent::key(Key::Char(' ')));
//! assert!(game.session().score() > 0 || game.session().game_over());
//!
//! game.stop();
//! assert!(!game.is_active());
//! ```

pub mod flappy;
pub mod module;
pub mod render;
pub mod store;
pub mod tetris;

pub use arcade_types as types;

pub use flappy::{FlappyGame, FlappySession, FlappyState};
pub use module::{FixedStep, GameModule};
pub use render::{DrawCommand, DrawList, Renderer};
pub use store::{MemoryStore, ScoreRecord, ScoreStore};
pub use tetris::{Board, Piece, Shape, TetrisAction, TetrisGame, TetrisSession, TickOutcome};
