//! TUI FPS (workspace facade crate).
//!
//! This package keeps the `tui_fps::{core,input,term,types}` public API in
//! one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_fps_core as core;
pub use tui_fps_input as input;
pub use tui_fps_term as term;
pub use tui_fps_types as types;
