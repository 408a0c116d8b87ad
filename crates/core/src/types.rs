use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn shifted(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.shifted(dx, dy)
    }

    /// Orthogonal neighbors in East, West, North, South order.
    pub fn neighbors(self) -> [Pos; 4] {
        [
            self.step(Direction::East),
            self.step(Direction::West),
            self.step(Direction::North),
            self.step(Direction::South),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Empty,
    Floor,
    Wall,
    Water,
    Grass,
    LockedDoor,
    UnlockedDoor,
    Avatar,
}

impl TileKind {
    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Floor | Self::UnlockedDoor)
    }

    pub fn is_background(self) -> bool {
        matches!(self, Self::Water | Self::Grass)
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Floor => 1,
            Self::Wall => 2,
            Self::Water => 3,
            Self::Grass => 4,
            Self::LockedDoor => 5,
            Self::UnlockedDoor => 6,
            Self::Avatar => 7,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Floor => '.',
            Self::Wall => '#',
            Self::Water => '~',
            Self::Grass => '"',
            Self::LockedDoor => '+',
            Self::UnlockedDoor => '/',
            Self::Avatar => '@',
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_decreases_row_index() {
        let origin = Pos { y: 5, x: 5 };
        assert_eq!(origin.step(Direction::North), Pos { y: 4, x: 5 });
        assert_eq!(origin.step(Direction::South), Pos { y: 6, x: 5 });
        assert_eq!(origin.step(Direction::East), Pos { y: 5, x: 6 });
        assert_eq!(origin.step(Direction::West), Pos { y: 5, x: 4 });
    }

    #[test]
    fn only_floor_and_unlocked_doors_are_walkable() {
        let walkable: Vec<TileKind> = [
            TileKind::Empty,
            TileKind::Floor,
            TileKind::Wall,
            TileKind::Water,
            TileKind::Grass,
            TileKind::LockedDoor,
            TileKind::UnlockedDoor,
            TileKind::Avatar,
        ]
        .into_iter()
        .filter(|tile| tile.is_walkable())
        .collect();
        assert_eq!(walkable, vec![TileKind::Floor, TileKind::UnlockedDoor]);
    }
}
