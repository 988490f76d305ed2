//! World model and scene renderer - pure, deterministic, and testable
//!
//! This crate contains the ray-casting core: the tile grid, the player pose,
//! movement with collision, and the per-column scene renderer. It has **zero
//! dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: identical world state renders identical frames
//! - **Testable**: every rule has unit tests, no terminal required
//! - **Portable**: runs headless (terminal, tests, benches)
//!
//! # Module structure
//!
//! - [`grid`]: fixed 16x16 tile map with bounds-check-as-wall indexing
//! - [`pose`]: continuous player position and heading
//! - [`world`]: movement and collision (atomic accept/reject)
//! - [`raycast`]: per-column ray march and wall-edge detection
//! - [`shade`]: distance and screen-row shade tier tables
//! - [`scene`]: full-frame renderer producing a shade buffer
//!
//! # Rendering model
//!
//! One ray per output column, marched in fixed steps until it hits a wall or
//! reaches the depth cap. Wall height on screen falls off with distance, and
//! the glyph density encodes depth. Rays that strike very close to a wall
//! corner are flagged as boundaries and drawn blank so adjacent faces read as
//! separate surfaces.
//!
//! # Example
//!
//! ```
//! use tui_fps_core::{render_scene, Grid, Pose, RenderConfig, World};
//!
//! let world = World::new(Grid::default(), Pose::new(8.0, 8.0, 0.0));
//! let cfg = RenderConfig::default();
//! let scene = render_scene(world.grid(), world.pose(), &cfg);
//! assert_eq!(scene.buffer().width(), cfg.width);
//! ```

pub mod grid;
pub mod pose;
pub mod raycast;
pub mod scene;
pub mod shade;
pub mod world;

pub use tui_fps_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use pose::{heading_vector, Pose};
pub use raycast::{cast_ray, Hit};
pub use scene::{render_scene, ColumnProfile, ConfigError, RenderConfig, Scene, SceneBuffer};
pub use shade::{floor_shade, wall_shade};
pub use world::World;
