//! Fixed-size tile grid shared by every generation stage and the gameplay session.

use crate::types::{Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, TileKind::Empty)
    }

    pub fn filled(width: usize, height: usize, tile: TileKind) -> Self {
        Self { width, height, tiles: vec![tile; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Linear index `y * width + x`, or `None` outside the grid.
    pub fn index_of(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }

    pub fn get(&self, pos: Pos) -> Option<TileKind> {
        self.index_of(pos).map(|index| self.tiles[index])
    }

    pub fn is(&self, pos: Pos, tile: TileKind) -> bool {
        self.get(pos) == Some(tile)
    }

    /// Out-of-bounds writes are dropped.
    pub fn set(&mut self, pos: Pos, tile: TileKind) {
        if let Some(index) = self.index_of(pos) {
            self.tiles[index] = tile;
        }
    }

    /// Writes a wall unless the cell already holds floor.
    pub fn raise_wall(&mut self, pos: Pos) {
        if let Some(index) = self.index_of(pos)
            && self.tiles[index] != TileKind::Floor
        {
            self.tiles[index] = TileKind::Wall;
        }
    }

    pub fn draw_row(&mut self, start: Pos, tile: TileKind, length: i32) {
        for dx in 0..length {
            self.set(start.shifted(dx, 0), tile);
        }
    }

    pub fn draw_col(&mut self, start: Pos, tile: TileKind, length: i32) {
        for dy in 0..length {
            self.set(start.shifted(0, dy), tile);
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos { y, x }))
    }

    /// Positions holding `tile`, in row-major order.
    pub fn positions_of(&self, tile: TileKind) -> Vec<Pos> {
        self.positions().filter(|&pos| self.is(pos, tile)).collect()
    }

    pub fn count(&self, tile: TileKind) -> usize {
        self.tiles.iter().filter(|&&candidate| candidate == tile).count()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.tiles.iter().map(|tile| tile.code()));
        bytes
    }

    pub fn render_text(&self) -> String {
        let mut text = String::with_capacity((self.width + 1) * self.height);
        for row in self.tiles.chunks(self.width.max(1)) {
            text.extend(row.iter().map(|tile| tile.glyph()));
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_silently_dropped() {
        let mut grid = Grid::new(4, 3);
        let before = grid.clone();
        grid.set(Pos { y: -1, x: 0 }, TileKind::Floor);
        grid.set(Pos { y: 0, x: 4 }, TileKind::Floor);
        grid.set(Pos { y: 3, x: 3 }, TileKind::Floor);
        grid.draw_row(Pos { y: 1, x: 2 }, TileKind::Wall, 10);
        assert_eq!(grid.get(Pos { y: 1, x: 3 }), Some(TileKind::Wall));
        assert_eq!(grid.count(TileKind::Wall), 2);
        assert_eq!(grid.get(Pos { y: 3, x: 0 }), None);
        assert_ne!(grid, before);
    }

    #[test]
    fn linear_index_is_row_major() {
        let grid = Grid::new(80, 30);
        assert_eq!(grid.index_of(Pos { y: 0, x: 0 }), Some(0));
        assert_eq!(grid.index_of(Pos { y: 2, x: 5 }), Some(165));
        assert_eq!(grid.index_of(Pos { y: 29, x: 79 }), Some(2399));
        assert_eq!(grid.index_of(Pos { y: 0, x: 80 }), None);
    }

    #[test]
    fn raised_walls_never_replace_floor() {
        let mut grid = Grid::new(3, 1);
        grid.set(Pos { y: 0, x: 1 }, TileKind::Floor);
        for x in 0..3 {
            grid.raise_wall(Pos { y: 0, x });
        }
        assert_eq!(grid.tiles(), &[TileKind::Wall, TileKind::Floor, TileKind::Wall]);
    }

    #[test]
    fn positions_of_lists_matches_in_row_major_order() {
        let mut grid = Grid::new(3, 3);
        grid.set(Pos { y: 2, x: 0 }, TileKind::Floor);
        grid.set(Pos { y: 0, x: 2 }, TileKind::Floor);
        grid.set(Pos { y: 1, x: 1 }, TileKind::Floor);
        assert_eq!(
            grid.positions_of(TileKind::Floor),
            vec![Pos { y: 0, x: 2 }, Pos { y: 1, x: 1 }, Pos { y: 2, x: 0 }]
        );
    }
}
