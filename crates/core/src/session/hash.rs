//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::Session;
use crate::mapgen::Grid;
use crate::types::Pos;

impl Session {
    /// Covers everything a command can change, so two sessions that hash equal render equal.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_i64(self.seed);
        write_grid(&mut hasher, &self.world);
        write_pos(&mut hasher, self.avatar);
        write_pos(&mut hasher, self.door);
        hasher.write_u8(u8::from(self.door_locked));
        hasher.write_u8(u8::from(self.ended));
        match &self.closet {
            None => hasher.write_u8(0),
            Some(closet) => {
                hasher.write_u8(1);
                write_grid(&mut hasher, &closet.grid);
                write_pos(&mut hasher, closet.avatar);
                write_pos(&mut hasher, closet.exit);
            }
        }
        hasher.finish()
    }
}

fn write_grid(hasher: &mut Xxh3, grid: &Grid) {
    hasher.write(&grid.canonical_bytes());
}

fn write_pos(hasher: &mut Xxh3, pos: Pos) {
    hasher.write_i32(pos.x);
    hasher.write_i32(pos.y);
}
