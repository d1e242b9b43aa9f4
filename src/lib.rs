//! Canvas arcade (workspace facade crate).
//!
//! Re-exports the member crates under `canvas_arcade::{core,input,store,term,types}`
//! and adds the host pieces the binary is built from: configuration, the
//! JSONL event log and the two-game [`Arcade`].

pub use arcade_core as core;
pub use arcade_input as input;
pub use arcade_store as store;
pub use arcade_term as term;
pub use arcade_types as types;

pub mod config;
pub mod event_log;
pub mod host;

pub use config::ArcadeConfig;
pub use event_log::EventLog;
pub use host::Arcade;
