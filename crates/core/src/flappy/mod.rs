//! Flappy: a bird, a stream of pipe pairs and a top-five leaderboard.
//!
//! - [`assets`]: sprite sizes the physics is derived from
//! - [`bird`]: vertical motion, flap, rotation, death fall
//! - [`pipes`]: spawn/scroll/drop and front-pipe collision
//! - [`leaderboard`]: ranked score list over a `ScoreStore`
//! - [`session`]: state machine, name entry, fixed-step update
//! - [`view`]: draw pass
//! - [`game`]: lifecycle wrapper driven by a fixed-step clock

pub mod assets;
pub mod bird;
pub mod game;
pub mod leaderboard;
pub mod pipes;
pub mod session;
pub mod view;

pub use assets::{Size, SpriteMetrics};
pub use bird::Bird;
pub use game::FlappyGame;
pub use leaderboard::Leaderboard;
pub use pipes::{Contact, Pipe, PipeStream};
pub use session::{FlappySession, FlappyState, NameEntry};
