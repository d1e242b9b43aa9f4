//! Terminal input module (host-facing).
//!
//! Maps `crossterm` key and mouse events into [`crate::types::InputEvent`]
//! for the active game, and picks out the few keys the host keeps for itself
//! (quit, switch game).

pub mod map;

pub use arcade_types as types;

pub use map::{host_command, map_key_event, map_mouse_event, should_quit, HostCommand};
