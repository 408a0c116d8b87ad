//! The secondary area reached through the locked door.

use crate::mapgen::post::fill_background;
use crate::mapgen::{Grid, RandomSource, Room};
use crate::types::{Pos, TileKind};

const CLOSET_WIDTH: i32 = 7;
const CLOSET_HEIGHT: i32 = 11;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Closet {
    pub(super) grid: Grid,
    pub(super) avatar: Pos,
    pub(super) exit: Pos,
}

impl Closet {
    /// Draws the spawn tile, then the exit tile. `None` when the room does not fit the grid.
    pub(super) fn build(width: usize, height: usize, rng: &mut impl RandomSource) -> Option<Self> {
        if (width as i32) < CLOSET_WIDTH || (height as i32) < CLOSET_HEIGHT {
            return None;
        }
        let mut grid = Grid::new(width, height);
        let room = Room {
            anchor: Pos {
                y: (height as i32 - CLOSET_HEIGHT) / 2,
                x: (width as i32 - CLOSET_WIDTH) / 2,
            },
            width: CLOSET_WIDTH,
            height: CLOSET_HEIGHT,
        };
        room.draw(&mut grid);
        fill_background(&mut grid, TileKind::Grass);

        let mut floor = grid.positions_of(TileKind::Floor);
        let avatar = floor.remove(rng.below(floor.len() as u32) as usize);
        let exit = floor[rng.below(floor.len() as u32) as usize];
        grid.set(avatar, TileKind::Avatar);
        grid.set(exit, TileKind::LockedDoor);

        Some(Self { grid, avatar, exit })
    }
}
