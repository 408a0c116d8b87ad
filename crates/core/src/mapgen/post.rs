//! Seam repair and background fill run after all rooms and corridors are carved.

use crate::types::{Pos, TileKind};

use super::grid::Grid;

/// Forces a cell to floor when both vertical or both horizontal neighbors are floor.
/// Scans the interior (one-cell border excluded) in row-major order, in place.
pub fn merge_seams(grid: &mut Grid) {
    let (width, height) = (grid.width() as i32, grid.height() as i32);
    for y in 1..(height - 1) {
        for x in 1..(width - 1) {
            let pos = Pos { y, x };
            let vertical = grid.is(pos.shifted(0, -1), TileKind::Floor)
                && grid.is(pos.shifted(0, 1), TileKind::Floor);
            let horizontal = grid.is(pos.shifted(-1, 0), TileKind::Floor)
                && grid.is(pos.shifted(1, 0), TileKind::Floor);
            if vertical || horizontal {
                grid.set(pos, TileKind::Floor);
            }
        }
    }
}

/// Walls off every empty cell orthogonally adjacent to floor.
pub fn patch_walls(grid: &mut Grid) {
    for pos in grid.positions_of(TileKind::Floor) {
        for neighbor in pos.neighbors() {
            if grid.is(neighbor, TileKind::Empty) {
                grid.set(neighbor, TileKind::Wall);
            }
        }
    }
}

pub fn fill_background(grid: &mut Grid, background: TileKind) {
    for pos in grid.positions_of(TileKind::Empty) {
        grid.set(pos, background);
    }
}

pub fn post_process(grid: &mut Grid, background: TileKind) {
    merge_seams(grid);
    patch_walls(grid);
    fill_background(grid, background);
}
