//! Terminal display module.
//!
//! A small rendering layer for showing the clock in a terminal. It avoids
//! widget toolkits and instead rasterizes the core's draw ops into a simple
//! framebuffer that is diffed and flushed with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and free of terminal concerns
//! - Allocation-free steady state (reused framebuffer and op buffer)
//! - Adjustable pixel scale to compensate for glyph aspect ratio

pub mod clock_view;
pub mod fb;
pub mod frame_gate;
pub mod renderer;

pub use bin_clock_core as core;
pub use bin_clock_types as types;

pub use clock_view::{status_text, ClockView, PixelBounds, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use frame_gate::{frame_fingerprint, FrameGate};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
