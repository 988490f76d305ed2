//! SceneView: composites a rendered scene, minimap, and status line into a
//! terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::scene::Scene;
use crate::core::{Grid, World};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Shade;

use std::f32::consts::{FRAC_PI_4, TAU};

/// Minimap facing glyph for a heading angle.
///
/// The heading is reduced with remainder semantics (sign of the dividend) and
/// bucketed into quarter turns. Headings at or past three quarter turns fold
/// into `^`, matching the long-standing quirk of the original bucket order.
pub fn facing_glyph(heading: f32) -> char {
    let angle = heading % TAU;
    if (-FRAC_PI_4..FRAC_PI_4).contains(&angle) {
        'v'
    } else if (FRAC_PI_4..3.0 * FRAC_PI_4).contains(&angle) {
        '>'
    } else if angle >= 3.0 * FRAC_PI_4 || angle < -3.0 * FRAC_PI_4 {
        '^'
    } else {
        '<'
    }
}

/// Maps core scene output into a terminal framebuffer.
pub struct SceneView {
    show_minimap: bool,
    show_status: bool,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            show_minimap: true,
            show_status: true,
        }
    }
}

impl SceneView {
    pub fn bare() -> Self {
        Self {
            show_minimap: false,
            show_status: false,
        }
    }

    /// Render one composed frame: scene glyphs, then minimap and status
    /// overlays on top.
    pub fn render(&self, world: &World, scene: &Scene, fps: f32) -> FrameBuffer {
        let buffer = scene.buffer();
        let mut fb = FrameBuffer::new(buffer.width(), buffer.height());

        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                // In-bounds by construction, but stay total.
                let shade = buffer.get(x, y).unwrap_or(Shade::Ceiling);
                fb.put_char(x, y, shade.glyph(), shade_style(shade));
            }
        }

        if self.show_minimap {
            self.draw_minimap(&mut fb, world);
        }
        if self.show_status {
            self.draw_status(&mut fb, world, fps);
        }

        fb
    }

    /// Top-left map overlay, one cell per tile, player glyph on top.
    fn draw_minimap(&self, fb: &mut FrameBuffer, world: &World) {
        let wall = CellStyle::fg(Rgb::new(200, 170, 60));
        let empty = CellStyle {
            fg: Rgb::gray(90),
            bg: Rgb::new(0, 0, 0),
            dim: true,
        };

        // Row 0 is reserved for the status line, so the map starts at row 1.
        for (row, tiles) in world.grid().rows().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                let style = if tile.is_wall() { wall } else { empty };
                fb.put_char(col as u16, row as u16 + 1, tile.as_char(), style);
            }
        }

        let pose = world.pose();
        let (col, row) = Grid::cell_of(pose.x, pose.y);
        if col >= 0 && row >= 0 {
            fb.put_char(
                col as u16,
                row as u16 + 1,
                facing_glyph(pose.heading),
                CellStyle::fg(Rgb::new(120, 220, 120)),
            );
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, world: &World, fps: f32) {
        let pose = world.pose();
        let status = format!(
            "X={:5.2} Y={:5.2} A={:5.2} FPS={:5.1}",
            pose.x, pose.y, pose.heading, fps
        );
        fb.put_str(0, 0, &status, CellStyle::fg(Rgb::gray(240)));
    }
}

fn shade_style(shade: Shade) -> CellStyle {
    match shade {
        Shade::Ceiling => CellStyle::fg(Rgb::gray(0)),
        Shade::WallSolid => CellStyle::fg(Rgb::gray(235)),
        Shade::WallDense => CellStyle::fg(Rgb::gray(190)),
        Shade::WallMedium => CellStyle::fg(Rgb::gray(150)),
        Shade::WallLight => CellStyle::fg(Rgb::gray(110)),
        Shade::WallNone => CellStyle::fg(Rgb::gray(70)),
        Shade::FloorNear => CellStyle::fg(Rgb::new(130, 110, 80)),
        Shade::FloorMid => CellStyle::fg(Rgb::new(110, 95, 70)),
        Shade::FloorFar => CellStyle {
            fg: Rgb::new(95, 85, 65),
            bg: Rgb::new(0, 0, 0),
            dim: true,
        },
        Shade::FloorFaint => CellStyle {
            fg: Rgb::new(80, 75, 60),
            bg: Rgb::new(0, 0, 0),
            dim: true,
        },
        Shade::FloorNone => CellStyle::fg(Rgb::gray(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{render_scene, Pose, RenderConfig};
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn facing_glyph_quarter_turns() {
        assert_eq!(facing_glyph(0.0), 'v');
        assert_eq!(facing_glyph(FRAC_PI_2), '>');
        assert_eq!(facing_glyph(PI), '^');
        assert_eq!(facing_glyph(-FRAC_PI_2), '<');
        // Unbounded headings reduce with the dividend's sign.
        assert_eq!(facing_glyph(TAU), 'v');
        assert_eq!(facing_glyph(TAU + FRAC_PI_2), '>');
        // Kept quirk: positive three-quarter turns read as '^', not '<'.
        assert_eq!(facing_glyph(3.0 * FRAC_PI_2), '^');
    }

    fn composed_frame() -> (World, FrameBuffer) {
        let world = World::new(Grid::default(), Pose::new(8.0, 8.0, 0.0));
        let cfg = RenderConfig::default();
        let scene = render_scene(world.grid(), world.pose(), &cfg);
        let fb = SceneView::default().render(&world, &scene, 60.0);
        (world, fb)
    }

    #[test]
    fn minimap_overlays_top_left() {
        let (world, fb) = composed_frame();
        // Map row 0 lands on frame row 1 and is all wall.
        for col in 0..world.grid().width() {
            assert_eq!(fb.get(col, 1).unwrap().ch, '#');
        }
        // Player glyph at the truncated pose, one row down.
        assert_eq!(fb.get(8, 9).unwrap().ch, 'v');
    }

    #[test]
    fn status_line_reports_pose() {
        let (_, fb) = composed_frame();
        let row: String = (0..40).filter_map(|x| fb.get(x, 0).map(|c| c.ch)).collect();
        assert!(row.starts_with("X= 8.00 Y= 8.00 A= 0.00"), "{row:?}");
    }

    #[test]
    fn bare_view_skips_overlays() {
        let world = World::new(Grid::default(), Pose::new(8.0, 8.0, 0.0));
        let cfg = RenderConfig::default();
        let scene = render_scene(world.grid(), world.pose(), &cfg);
        let fb = SceneView::bare().render(&world, &scene, 60.0);
        // Without overlays, frame cells mirror scene glyphs everywhere.
        for y in 0..cfg.height {
            for x in 0..cfg.width {
                let shade = scene.buffer().get(x, y).unwrap();
                assert_eq!(fb.get(x, y).unwrap().ch, shade.glyph());
            }
        }
    }
}
