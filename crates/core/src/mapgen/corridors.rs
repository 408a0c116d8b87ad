//! L-shaped, wall-bordered corridors between room centers.
//!
//! Floor is never removed here: corridor walls yield to existing floor while
//! corridor floor overwrites anything. Every write goes through the grid's
//! clipping, so spans that leave the grid are harmless.

use crate::types::{Pos, TileKind};

use super::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorridorRoute {
    South,
    North,
    East,
    West,
    SouthEast,
    SouthWest,
    NorthEast,
    NorthWest,
}

impl CorridorRoute {
    /// `None` when both points coincide.
    pub fn classify(from: Pos, to: Pos) -> Option<Self> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        Some(match (dx.signum(), dy.signum()) {
            (0, 0) => return None,
            (0, 1) => Self::South,
            (0, _) => Self::North,
            (1, 0) => Self::East,
            (_, 0) => Self::West,
            (1, 1) => Self::SouthEast,
            (_, 1) => Self::SouthWest,
            (1, _) => Self::NorthEast,
            (_, _) => Self::NorthWest,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Segment {
    /// Row of a horizontal segment, column of a vertical one.
    line: i32,
    from: i32,
    to: i32,
}

impl Segment {
    fn between(line: i32, a: i32, b: i32) -> Self {
        Self { line, from: a.min(b), to: a.max(b) }
    }
}

/// Carves a corridor from `from` to `to` with `width` floor tiles across.
pub fn carve_corridor(grid: &mut Grid, from: Pos, to: Pos, width: u32) {
    let Some(route) = CorridorRoute::classify(from, to) else {
        return;
    };
    let width = width as i32;

    let (horizontal, vertical) = match route {
        CorridorRoute::South | CorridorRoute::North => {
            (None, Some(Segment::between(from.x, from.y, to.y)))
        }
        CorridorRoute::East | CorridorRoute::West => {
            (Some(Segment::between(from.y, from.x, to.x)), None)
        }
        // Pivot at (to.x, from.y).
        CorridorRoute::SouthEast | CorridorRoute::SouthWest => (
            Some(Segment::between(from.y, from.x, to.x)),
            Some(Segment::between(to.x, from.y, to.y)),
        ),
        // Pivot at (from.x, to.y).
        CorridorRoute::NorthEast | CorridorRoute::NorthWest => (
            Some(Segment::between(to.y, from.x, to.x)),
            Some(Segment::between(from.x, from.y, to.y)),
        ),
    };

    if let Some(segment) = horizontal {
        carve_horizontal(grid, segment, width);
    }
    if let Some(segment) = vertical {
        carve_vertical(grid, segment, width);
    }
}

fn carve_horizontal(grid: &mut Grid, segment: Segment, width: i32) {
    let length = segment.to - segment.from + width;
    let start = Pos { y: segment.line, x: segment.from };
    for dx in 0..length {
        grid.raise_wall(start.shifted(dx, -1));
    }
    for row in 0..width {
        grid.draw_row(start.shifted(0, row), TileKind::Floor, length);
    }
    for dx in 0..length {
        grid.raise_wall(start.shifted(dx, width));
    }
}

fn carve_vertical(grid: &mut Grid, segment: Segment, width: i32) {
    let length = segment.to - segment.from + width;
    let start = Pos { y: segment.from, x: segment.line };
    for dy in 0..length {
        grid.raise_wall(start.shifted(-1, dy));
    }
    for column in 0..width {
        grid.draw_col(start.shifted(column, 0), TileKind::Floor, length);
    }
    for dy in 0..length {
        grid.raise_wall(start.shifted(width, dy));
    }
}
