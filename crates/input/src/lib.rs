//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::MoveAction`] and tracks
//! which movement keys are currently held. Movement in an FPS is continuous,
//! so the frame loop needs key *state*, not key events; terminals without
//! key-release reporting get a short hold timeout instead.

pub mod held;
pub mod map;

pub use tui_fps_types as types;

pub use held::HeldKeys;
pub use map::{map_key, should_quit};
