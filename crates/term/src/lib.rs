//! Terminal presentation layer.
//!
//! Everything the core deliberately does not do lives here: a character
//! framebuffer, a crossterm backend that flushes it (full or diffed redraw),
//! the view that composites scene + minimap + status line, and the frame
//! clock that supplies elapsed time.
//!
//! The view is pure (state in, framebuffer out) so it can be unit-tested
//! without a terminal, in the same spirit as the core.

pub mod clock;
pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_fps_core as core;
pub use tui_fps_types as types;

pub use clock::FrameClock;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use view::{facing_glyph, SceneView};
