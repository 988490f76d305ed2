//! Shade tier tables for walls and floor.
//!
//! Both policies are ordered lookup tables rather than chains of branches so
//! they are tunable and testable on their own.

use crate::types::Shade;

/// Wall tiers as (fraction of max depth, shade), nearest first.
///
/// A distance inside a tier's fraction of the depth produces that tier. The
/// nearest tier is inclusive of its limit; beyond the last tier the wall is
/// at the depth cap and draws blank.
pub const WALL_SHADE_TIERS: [(f32, Shade); 4] = [
    (0.25, Shade::WallSolid),
    (1.0 / 3.0, Shade::WallDense),
    (0.5, Shade::WallMedium),
    (1.0, Shade::WallLight),
];

/// Floor tiers as (upper bound on the row proxy `b`, shade), nearest first.
pub const FLOOR_SHADE_TIERS: [(f32, Shade); 4] = [
    (0.25, Shade::FloorNear),
    (0.5, Shade::FloorMid),
    (0.75, Shade::FloorFar),
    (0.9, Shade::FloorFaint),
];

/// Wall shade for a hit at `distance` with depth cap `max_depth`.
pub fn wall_shade(distance: f32, max_depth: f32) -> Shade {
    for (i, &(fraction, shade)) in WALL_SHADE_TIERS.iter().enumerate() {
        let limit = fraction * max_depth;
        let inside = if i == 0 {
            distance <= limit
        } else {
            distance < limit
        };
        if inside {
            return shade;
        }
    }
    Shade::WallNone
}

/// Floor shade for screen row `row` of a `height`-row frame.
///
/// The proxy `b = 1 - (row - h/2) / (h/2)` runs from 1 at the horizon down
/// to 0 at the bottom edge, so low rows (near floor) get dense glyphs. This
/// is purely a function of the row; the floor is not ray traced.
pub fn floor_shade(row: u16, height: u16) -> Shade {
    let half = height as f32 / 2.0;
    let b = 1.0 - (row as f32 - half) / half;
    for &(limit, shade) in &FLOOR_SHADE_TIERS {
        if b < limit {
            return shade;
        }
    }
    Shade::FloorNone
}
