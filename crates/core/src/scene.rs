//! Scene renderer: one ray per output column, shade buffer out.
//!
//! `render_scene` is a pure function of (grid, pose, config). It keeps no
//! cross-column or cross-frame state, so identical inputs always produce
//! identical frames.

use std::fmt;

use crate::grid::Grid;
use crate::pose::Pose;
use crate::raycast::{cast_ray, Hit};
use crate::shade::{floor_shade, wall_shade};
use crate::types::{
    Shade, BOUNDARY_TOLERANCE, FOV, MAX_DEPTH, RAY_STEP, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Invalid render configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroDimensions,
    NonPositiveFov(f32),
    NonPositiveDepth(f32),
    NonPositiveRayStep(f32),
    NegativeTolerance(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDimensions => write!(f, "output dimensions must be nonzero"),
            ConfigError::NonPositiveFov(v) => write!(f, "field of view must be positive, got {v}"),
            ConfigError::NonPositiveDepth(v) => write!(f, "max depth must be positive, got {v}"),
            ConfigError::NonPositiveRayStep(v) => {
                write!(f, "ray step must be positive, got {v}")
            }
            ConfigError::NegativeTolerance(v) => {
                write!(f, "boundary tolerance must be non-negative, got {v}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Frame configuration for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Output width in columns.
    pub width: u16,
    /// Output height in rows.
    pub height: u16,
    /// Field of view in radians, split evenly across columns.
    pub fov: f32,
    /// Depth cap for rays, in grid units.
    pub max_depth: f32,
    /// Fixed ray-march step, in grid units.
    pub ray_step: f32,
    /// Wall-edge angular tolerance, in radians.
    pub boundary_tolerance: f32,
}

impl RenderConfig {
    /// Build a config, rejecting non-positive dimensions, fov, or depth.
    pub fn new(width: u16, height: u16, fov: f32, max_depth: f32) -> Result<Self, ConfigError> {
        let cfg = Self {
            width,
            height,
            fov,
            max_depth,
            ray_step: RAY_STEP,
            boundary_tolerance: BOUNDARY_TOLERANCE,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_ray_step(mut self, ray_step: f32) -> Self {
        self.ray_step = ray_step;
        self
    }

    pub fn with_boundary_tolerance(mut self, tolerance: f32) -> Self {
        self.boundary_tolerance = tolerance;
        self
    }

    /// Re-check all invariants (useful after builder-style tweaks).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimensions);
        }
        if !(self.fov > 0.0) {
            return Err(ConfigError::NonPositiveFov(self.fov));
        }
        if !(self.max_depth > 0.0) {
            return Err(ConfigError::NonPositiveDepth(self.max_depth));
        }
        if !(self.ray_step > 0.0) {
            return Err(ConfigError::NonPositiveRayStep(self.ray_step));
        }
        if self.boundary_tolerance < 0.0 {
            return Err(ConfigError::NegativeTolerance(self.boundary_tolerance));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fov: FOV,
            max_depth: MAX_DEPTH,
            ray_step: RAY_STEP,
            boundary_tolerance: BOUNDARY_TOLERANCE,
        }
    }
}

/// 2D buffer of shade symbols, row-major, fully rewritten every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneBuffer {
    width: u16,
    height: u16,
    cells: Vec<Shade>,
}

impl SceneBuffer {
    fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Shade::Ceiling; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Shade> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[(y as usize) * (self.width as usize) + (x as usize)])
    }

    fn set(&mut self, x: u16, y: u16, shade: Shade) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.cells[idx] = shade;
    }

    pub fn cells(&self) -> &[Shade] {
        &self.cells
    }
}

/// Per-column result of the cast, retained alongside the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnProfile {
    pub hit: Hit,
    /// First wall row (may be negative when the wall towers off screen).
    pub ceiling: i32,
    /// First floor row (may exceed the frame height).
    pub floor: i32,
    /// Wall shade chosen for this column, after any boundary override.
    pub shade: Shade,
}

/// A rendered frame: the shade buffer plus per-column wall intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    buffer: SceneBuffer,
    columns: Vec<ColumnProfile>,
}

impl Scene {
    pub fn buffer(&self) -> &SceneBuffer {
        &self.buffer
    }

    pub fn columns(&self) -> &[ColumnProfile] {
        &self.columns
    }
}

/// Render one frame of the scene.
///
/// For each column, a ray is cast across the field of view (column 0 at the
/// left edge of the frustum), the wall interval is derived from the hit
/// distance, and the column is filled top to bottom: ceiling blank, wall
/// shade by distance tier, floor shade by screen row. Every cell of the
/// buffer is written exactly once, so no stale frame data can survive.
pub fn render_scene(grid: &Grid, pose: &Pose, cfg: &RenderConfig) -> Scene {
    let mut buffer = SceneBuffer::new(cfg.width, cfg.height);
    let mut columns = Vec::with_capacity(cfg.width as usize);

    let height = cfg.height as f32;

    for x in 0..cfg.width {
        let ray_angle =
            (pose.heading - cfg.fov / 2.0) + (x as f32 / cfg.width as f32) * cfg.fov;
        let hit = cast_ray(grid, pose.x, pose.y, ray_angle, cfg);

        // Truncation toward zero, as the original geometry does. A wall
        // closer than one unit pushes the ceiling negative; the fill loop
        // below is bounded by the frame, which is the required clamp.
        let ceiling = (height / 2.0 - height / hit.distance) as i32;
        let floor = cfg.height as i32 - ceiling;

        let shade = if hit.boundary {
            Shade::WallNone
        } else {
            wall_shade(hit.distance, cfg.max_depth)
        };

        for y in 0..cfg.height {
            let row = y as i32;
            if row < ceiling {
                buffer.set(x, y, Shade::Ceiling);
            } else if row < floor {
                buffer.set(x, y, shade);
            } else {
                buffer.set(x, y, floor_shade(y, cfg.height));
            }
        }

        columns.push(ColumnProfile {
            hit,
            ceiling,
            floor,
            shade,
        });
    }

    Scene { buffer, columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DEFAULT_LAYOUT;

    #[test]
    fn config_rejects_nonsense() {
        assert_eq!(
            RenderConfig::new(0, 40, FOV, 16.0),
            Err(ConfigError::ZeroDimensions)
        );
        assert_eq!(
            RenderConfig::new(120, 0, FOV, 16.0),
            Err(ConfigError::ZeroDimensions)
        );
        assert_eq!(
            RenderConfig::new(120, 40, 0.0, 16.0),
            Err(ConfigError::NonPositiveFov(0.0))
        );
        assert_eq!(
            RenderConfig::new(120, 40, FOV, -1.0),
            Err(ConfigError::NonPositiveDepth(-1.0))
        );
        assert_eq!(
            RenderConfig::new(120, 40, FOV, 16.0)
                .unwrap()
                .with_ray_step(0.0)
                .validate(),
            Err(ConfigError::NonPositiveRayStep(0.0))
        );
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn every_cell_is_written() {
        let grid = Grid::from_layout(&DEFAULT_LAYOUT).unwrap();
        let cfg = RenderConfig::default();
        let scene = render_scene(&grid, &Pose::new(8.0, 8.0, 0.7), &cfg);
        assert_eq!(
            scene.buffer().cells().len(),
            (cfg.width as usize) * (cfg.height as usize)
        );
        for y in 0..cfg.height {
            for x in 0..cfg.width {
                let shade = scene.buffer().get(x, y).unwrap();
                // Above the horizon only ceiling or wall, below only wall or floor.
                if (y as i32) < scene.columns()[x as usize].ceiling {
                    assert_eq!(shade, Shade::Ceiling);
                } else if (y as i32) >= scene.columns()[x as usize].floor {
                    assert!(shade.is_floor());
                } else {
                    assert!(shade.is_wall());
                }
            }
        }
    }

    #[test]
    fn render_is_pure_and_idempotent() {
        let grid = Grid::from_layout(&DEFAULT_LAYOUT).unwrap();
        let pose = Pose::new(8.0, 8.0, 0.0);
        let cfg = RenderConfig::default();
        let a = render_scene(&grid, &pose, &cfg);
        let b = render_scene(&grid, &pose, &cfg);
        assert_eq!(a, b);
        assert_eq!(a.buffer().cells(), b.buffer().cells());
    }

    #[test]
    fn near_wall_clamps_fill_to_frame() {
        // Standing almost inside a wall face: raw ceiling goes negative, the
        // whole column must still come out as wall glyphs.
        let grid = Grid::from_layout(&DEFAULT_LAYOUT).unwrap();
        let cfg = RenderConfig::default();
        let scene = render_scene(&grid, &Pose::new(10.5, 11.85, 0.0), &cfg);
        let mid = cfg.width / 2;
        let profile = scene.columns()[mid as usize];
        assert!(profile.ceiling < 0, "ceiling {}", profile.ceiling);
        for y in 0..cfg.height {
            assert!(scene.buffer().get(mid, y).unwrap().is_wall());
        }
    }

    #[test]
    fn column_zero_is_left_edge_of_frustum() {
        let grid = Grid::from_layout(&DEFAULT_LAYOUT).unwrap();
        let cfg = RenderConfig::default();
        let pose = Pose::new(8.5, 8.5, 0.0);
        let scene = render_scene(&grid, &pose, &cfg);
        let left = scene.columns()[0].hit;
        let expected = cast_ray(&grid, pose.x, pose.y, pose.heading - cfg.fov / 2.0, &cfg);
        assert_eq!(left, expected);
    }
}
