//! World generation parameters. `Default` is the reference 80x30 layout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mapgen::DrawRange;
use crate::types::TileKind;

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 30;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    /// Drawn once per generation to fix the number of placement attempts.
    pub attempts: DrawRange,
    pub anchor_x: DrawRange,
    pub anchor_y: DrawRange,
    /// Room width and height, walls included.
    pub room_size: DrawRange,
    pub footprint_margin: u32,
    pub corridor_width: u32,
    pub background: TileKind,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            attempts: DrawRange::new(19, 20),
            anchor_x: DrawRange::new(0, 70),
            anchor_y: DrawRange::new(0, 18),
            room_size: DrawRange::new(5, 10),
            footprint_margin: 2,
            corridor_width: 2,
            background: TileKind::Water,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 3x3, got {width}x{height}")]
    GridTooSmall { width: usize, height: usize },
    #[error("draw range `{name}` is empty ({start}..{end})")]
    EmptyRange { name: &'static str, start: u32, end: u32 },
    #[error("rooms need at least 3 cells per side to hold floor, got minimum {0}")]
    RoomTooSmall(u32),
    #[error("rooms up to {largest} cells per side do not fit a {width}x{height} grid")]
    RoomTooLarge { largest: u32, width: usize, height: usize },
    /// The smallest room at the last anchor of the range would leave the grid.
    #[error("anchor `{name}` ends at {end}, so a {room}-cell room overruns extent {extent}")]
    AnchorOutsideGrid { name: &'static str, end: u32, room: u32, extent: usize },
    #[error("corridor width must be at least 1")]
    CorridorTooNarrow,
    #[error("background tile must be water or grass, got {0:?}")]
    InvalidBackground(TileKind),
}

impl WorldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 3 || self.height < 3 {
            return Err(ConfigError::GridTooSmall { width: self.width, height: self.height });
        }
        for (name, range) in [
            ("attempts", self.attempts),
            ("anchor_x", self.anchor_x),
            ("anchor_y", self.anchor_y),
            ("room_size", self.room_size),
        ] {
            if range.is_empty() {
                return Err(ConfigError::EmptyRange { name, start: range.start, end: range.end });
            }
        }
        if self.room_size.start < 3 {
            return Err(ConfigError::RoomTooSmall(self.room_size.start));
        }
        let (width, height) = (self.width, self.height);
        let largest = self.room_size.end - 1;
        if largest as usize > width.min(height) {
            return Err(ConfigError::RoomTooLarge { largest, width, height });
        }
        let room = self.room_size.start;
        for (name, range, extent) in
            [("anchor_x", self.anchor_x, width), ("anchor_y", self.anchor_y, height)]
        {
            if (range.end - 1) as usize + room as usize > extent {
                return Err(ConfigError::AnchorOutsideGrid { name, end: range.end, room, extent });
            }
        }
        if self.corridor_width == 0 {
            return Err(ConfigError::CorridorTooNarrow);
        }
        if !self.background.is_background() {
            return Err(ConfigError::InvalidBackground(self.background));
        }
        Ok(())
    }
}
