//! Grid module - the static tile map
//!
//! The map is a 16x16 grid where each cell is either wall or empty space.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (col, row) with col ranging 0..15 (west to east) and row
//! 0..15 (north to south); continuous positions map to cells by truncation.
//!
//! Every index is bounds-checked, and anything outside the map is treated as
//! blocked. Movement additionally relies on the outer ring of the map being
//! wall cells; the default layout satisfies that.

use std::fmt;

use crate::types::{Tile, MAP_HEIGHT, MAP_WIDTH};

/// Total number of cells on the map
const GRID_SIZE: usize = (MAP_WIDTH as usize) * (MAP_HEIGHT as usize);

/// The stock map layout, a 16x16 arena enclosed by walls.
pub const DEFAULT_LAYOUT: [&str; MAP_HEIGHT as usize] = [
    "################",
    "#..............#",
    "####...##..##..#",
    "#..............#",
    "#..............#",
    "#.........#....#",
    "#..............#",
    "#....###....#..#",
    "#..............#",
    "####...........#",
    "#..............#",
    "#..............#",
    "#.......########",
    "#..............#",
    "#..............#",
    "################",
];

/// Errors raised while parsing a map layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Wrong number of rows, or a row of the wrong length.
    BadDimensions { row: usize, len: usize },
    /// A glyph that is neither `#` nor `.`.
    UnknownGlyph { row: usize, col: usize, glyph: char },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::BadDimensions { row, len } => write!(
                f,
                "map row {row} has length {len}, expected {MAP_WIDTH}x{MAP_HEIGHT}"
            ),
            GridError::UnknownGlyph { row, col, glyph } => {
                write!(f, "unknown map glyph {glyph:?} at row {row}, col {col}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// The tile map - 16x16 cells in flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of tiles, row-major order (row * WIDTH + col)
    tiles: [Tile; GRID_SIZE],
}

impl Grid {
    /// Parse a grid from layout rows (`#` wall, `.` empty).
    pub fn from_layout(rows: &[&str]) -> Result<Self, GridError> {
        if rows.len() != MAP_HEIGHT as usize {
            return Err(GridError::BadDimensions {
                row: rows.len(),
                len: rows.last().map_or(0, |r| r.chars().count()),
            });
        }

        let mut tiles = [Tile::Empty; GRID_SIZE];
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != MAP_WIDTH as usize {
                return Err(GridError::BadDimensions {
                    row,
                    len: line.chars().count(),
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let tile = Tile::from_char(glyph).ok_or(GridError::UnknownGlyph {
                    row,
                    col,
                    glyph,
                })?;
                tiles[row * MAP_WIDTH as usize + col] = tile;
            }
        }
        Ok(Self { tiles })
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i32, row: i32) -> Option<usize> {
        if col < 0 || col >= MAP_WIDTH as i32 || row < 0 || row >= MAP_HEIGHT as i32 {
            return None;
        }
        Some((row as usize) * (MAP_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u16 {
        MAP_WIDTH
    }

    pub fn height(&self) -> u16 {
        MAP_HEIGHT
    }

    /// Get the tile at (col, row), or `None` if out of bounds.
    pub fn tile(&self, col: i32, row: i32) -> Option<Tile> {
        Self::index(col, row).map(|idx| self.tiles[idx])
    }

    /// Truncate a continuous position to its containing cell.
    ///
    /// This is the only world-to-cell conversion; movement and ray casting
    /// both go through it so they can never disagree on cell ownership.
    #[inline]
    pub fn cell_of(x: f32, y: f32) -> (i32, i32) {
        (x as i32, y as i32)
    }

    /// Whether the cell containing (x, y) blocks movement and rays.
    ///
    /// Out-of-bounds positions count as blocked, so callers never need their
    /// own range checks.
    pub fn is_blocked(&self, x: f32, y: f32) -> bool {
        let (col, row) = Self::cell_of(x, y);
        match self.tile(col, row) {
            Some(tile) => tile.is_wall(),
            None => true,
        }
    }

    /// Whether the outer ring of the map is entirely wall cells.
    ///
    /// Movement truncation relies on this to keep the player inside the map.
    pub fn is_enclosed(&self) -> bool {
        let (w, h) = (MAP_WIDTH as i32, MAP_HEIGHT as i32);
        for col in 0..w {
            if self.tile(col, 0) != Some(Tile::Wall) || self.tile(col, h - 1) != Some(Tile::Wall) {
                return false;
            }
        }
        for row in 0..h {
            if self.tile(0, row) != Some(Tile::Wall) || self.tile(w - 1, row) != Some(Tile::Wall) {
                return false;
            }
        }
        true
    }

    /// Iterate rows as tile slices (for minimap overlays).
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks_exact(MAP_WIDTH as usize)
    }
}

impl Default for Grid {
    fn default() -> Self {
        // The stock layout is compile-time constant and known good.
        Self::from_layout(&DEFAULT_LAYOUT).unwrap_or(Self {
            tiles: [Tile::Wall; GRID_SIZE],
        })
    }
}
