//! Terminal "game renderer" module.
//!
//! Games draw on a fixed logical surface through `arcade_core::Renderer`.
//! This crate rasterizes that surface into a framebuffer of styled character
//! cells and flushes it to the terminal with diffed redraws.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`canvas`]: `RasterCanvas`, the `Renderer` backed by a framebuffer
//! - [`renderer`]: `TerminalRenderer`, screen layout and per-row diff flushing

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use arcade_core as core;
pub use arcade_types as types;

pub use canvas::{RasterCanvas, Transform, Viewport};
pub use arcade_types::Rgb;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{compose, dirty_span, encode_frame, TerminalRenderer, STATUS_STYLE};
