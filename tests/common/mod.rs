//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};

use cgmath::Point3;
use vein_miner::vein::GridAccessor;
use vein_miner::voxels::block::block_type::BlockType;
use vein_miner::voxels::block::direction::Direction;
use vein_miner::voxels::world::World;
use vein_miner::voxels::Position;

/// A world wrapper that records every break request.
#[derive(Default)]
pub struct RecordingGrid {
    pub world: World,
    pub attempts: Vec<Position>,
    pub broken: Vec<Position>,
}

impl RecordingGrid {
    pub fn new(world: World) -> Self {
        RecordingGrid {
            world,
            attempts: Vec::new(),
            broken: Vec::new(),
        }
    }

    pub fn broken_set(&self) -> HashSet<Position> {
        self.broken.iter().copied().collect()
    }
}

impl GridAccessor for RecordingGrid {
    type CellType = BlockType;

    fn get_state(&self, position: Position) -> Option<BlockType> {
        self.world.get_block_type(position)
    }

    fn try_break(&mut self, position: Position) -> bool {
        self.attempts.push(position);
        let ok = self.world.break_block(position);
        if ok {
            self.broken.push(position);
        }
        ok
    }
}

/// Fills the inclusive box `min..=max` with `block_type`.
pub fn fill_box(world: &mut World, min: Position, max: Position, block_type: BlockType) {
    for x in min.x..=max.x {
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                world.set_block(Point3::new(x, y, z), block_type);
            }
        }
    }
}

/// Places a straight run of `len` blocks along +X starting at `start`.
pub fn line_x(world: &mut World, start: Position, len: i32, block_type: BlockType) {
    for dx in 0..len {
        world.set_block(Point3::new(start.x + dx, start.y, start.z), block_type);
    }
}

pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs()
}

/// Graph distance from `origin` to every cell of `cells` reachable through `cells`.
///
/// The origin is always included at distance 0.
pub fn vein_distances(cells: &HashSet<Position>, origin: Position) -> HashMap<Position, usize> {
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();
    distances.insert(origin, 0);
    queue.push_back(origin);
    while let Some(position) = queue.pop_front() {
        let d = distances[&position];
        for next in Direction::neighbours(position) {
            if cells.contains(&next) && !distances.contains_key(&next) {
                distances.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}
