//! Greedy nearest-neighbor chaining of accepted rooms.

use tracing::debug;

use crate::types::Pos;

use super::random::RandomSource;
use super::rooms::Room;

/// Rooms in visiting order; each room links to the one after it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectivityChain {
    order: Vec<usize>,
}

impl ConnectivityChain {
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn successor(&self, room: usize) -> Option<usize> {
        let position = self.order.iter().position(|&visited| visited == room)?;
        self.order.get(position + 1).copied()
    }

    /// `(from, to)` room index pairs, in carving order.
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn link_count(&self) -> usize {
        self.order.len().saturating_sub(1)
    }
}

fn squared_distance(a: Pos, b: Pos) -> i64 {
    let dx = i64::from(a.x - b.x);
    let dy = i64::from(a.y - b.y);
    dx * dx + dy * dy
}

/// Draws the starting room only when at least one room exists.
pub fn build_chain(rooms: &[Room], rng: &mut impl RandomSource) -> ConnectivityChain {
    if rooms.is_empty() {
        return ConnectivityChain::default();
    }

    let mut pool: Vec<usize> = (0..rooms.len()).collect();
    let mut current = pool.remove(rng.below(rooms.len() as u32) as usize);
    let mut order = Vec::with_capacity(rooms.len());
    order.push(current);

    while !pool.is_empty() {
        let current_center = rooms[current].center();
        let mut nearest_slot = 0;
        let mut nearest_distance = i64::MAX;
        for (slot, &candidate) in pool.iter().enumerate() {
            let distance = squared_distance(current_center, rooms[candidate].center());
            if distance < nearest_distance {
                nearest_slot = slot;
                nearest_distance = distance;
            }
        }
        current = pool.remove(nearest_slot);
        order.push(current);
    }

    debug!(rooms = rooms.len(), start = order[0], "built connectivity chain");
    ConnectivityChain { order }
}
