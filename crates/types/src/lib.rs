//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Scene output dimensions (terminal character cells).
pub const SCREEN_WIDTH: u16 = 120;
pub const SCREEN_HEIGHT: u16 = 40;

/// Map dimensions (grid units).
pub const MAP_WIDTH: u16 = 16;
pub const MAP_HEIGHT: u16 = 16;

/// Field of view in radians.
pub const FOV: f32 = std::f32::consts::FRAC_PI_4;

/// Maximum ray-cast depth (grid units).
pub const MAX_DEPTH: f32 = 16.0;

/// Player movement speed (grid units per second).
pub const MOVE_SPEED: f32 = 5.0;

/// Player turn speed (radians per second).
pub const TURN_SPEED: f32 = 0.8;

/// Fixed ray-march step (grid units).
///
/// Smaller steps sharpen wall-edge precision at proportional cost.
pub const RAY_STEP: f32 = 0.1;

/// Angular tolerance for wall-boundary detection (radians).
pub const BOUNDARY_TOLERANCE: f32 = 0.01;

/// A single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Wall,
}

impl Tile {
    /// Parse a tile from a map-layout glyph.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Empty),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Empty => '.',
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// A discrete shade symbol in the rendered scene.
///
/// One variant per glyph the renderer can emit: blank ceiling, four wall
/// density tiers plus the capped/boundary blank, and four floor density
/// tiers plus the far-floor blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Ceiling,
    WallSolid,
    WallDense,
    WallMedium,
    WallLight,
    WallNone,
    FloorNear,
    FloorMid,
    FloorFar,
    FloorFaint,
    FloorNone,
}

impl Shade {
    /// The display glyph for this shade.
    pub fn glyph(&self) -> char {
        match self {
            Shade::Ceiling => ' ',
            Shade::WallSolid => '█',
            Shade::WallDense => '▓',
            Shade::WallMedium => '▒',
            Shade::WallLight => '░',
            Shade::WallNone => ' ',
            Shade::FloorNear => '#',
            Shade::FloorMid => 'x',
            Shade::FloorFar => '.',
            Shade::FloorFaint => '~',
            Shade::FloorNone => ' ',
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(
            self,
            Shade::WallSolid
                | Shade::WallDense
                | Shade::WallMedium
                | Shade::WallLight
                | Shade::WallNone
        )
    }

    pub fn is_floor(&self) -> bool {
        matches!(
            self,
            Shade::FloorNear
                | Shade::FloorMid
                | Shade::FloorFar
                | Shade::FloorFaint
                | Shade::FloorNone
        )
    }
}

/// Player movement actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAction {
    TurnLeft,
    TurnRight,
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
}

impl MoveAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveAction::TurnLeft => "turnLeft",
            MoveAction::TurnRight => "turnRight",
            MoveAction::Forward => "forward",
            MoveAction::Backward => "backward",
            MoveAction::StrafeLeft => "strafeLeft",
            MoveAction::StrafeRight => "strafeRight",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_glyph_roundtrip() {
        assert_eq!(Tile::from_char('#'), Some(Tile::Wall));
        assert_eq!(Tile::from_char('.'), Some(Tile::Empty));
        assert_eq!(Tile::from_char(' '), None);
        assert_eq!(Tile::Wall.as_char(), '#');
        assert_eq!(Tile::Empty.as_char(), '.');
    }

    #[test]
    fn shade_classification_is_disjoint() {
        let all = [
            Shade::Ceiling,
            Shade::WallSolid,
            Shade::WallDense,
            Shade::WallMedium,
            Shade::WallLight,
            Shade::WallNone,
            Shade::FloorNear,
            Shade::FloorMid,
            Shade::FloorFar,
            Shade::FloorFaint,
            Shade::FloorNone,
        ];
        for shade in all {
            assert!(!(shade.is_wall() && shade.is_floor()), "{shade:?}");
        }
        assert!(!Shade::Ceiling.is_wall());
        assert!(!Shade::Ceiling.is_floor());
    }
}
