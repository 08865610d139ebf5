//! # Chunk Module
//!
//! This module provides the `Chunk` struct and related functionality for managing
//! 16x16x16 blocks of voxel data. It includes chunk generation algorithms and
//! utilities for reading and mutating individual blocks.
//!
//! ## Storage
//!
//! Chunks keep two parallel views of their contents:
//! - `solid_array`: A bit vector (1 bit per block) indicating which blocks are solid
//! - `blocks`: A dense vector holding every block, air included
//!
//! Both are indexed in row-major order (x, then y, then z). The bit vector answers
//! solidity queries without decoding block data; the dense vector makes reads and
//! writes O(1), which the vein search relies on since it breaks blocks one at a time.

use bitvec::prelude::BitVec;
use bytemuck::Zeroable;
use cgmath::Point3;
use chunk_creation::ChunkCreationIterator;
use noise::NoiseFn;
use noise::Perlin;

use super::block::block_type::{BlockType, ORE_TYPES};
use super::block::Block;

pub mod chunk_creation;

/// The dimension (width, height, depth) of a chunk in blocks.
pub const CHUNK_DIMENSION: i32 = 16;
/// The number of blocks in a single 2D plane of a chunk (CHUNK_DIMENSION²).
pub const CHUNK_PLANE_SIZE: i32 = CHUNK_DIMENSION * CHUNK_DIMENSION;
/// The total number of blocks in a chunk (CHUNK_DIMENSION³).
pub const CHUNK_SIZE: i32 = CHUNK_PLANE_SIZE * CHUNK_DIMENSION;

/// Threshold above which Perlin noise turns stone into ore.
pub const PERLIN_ORE_THRESHOLD: f64 = 0.45;
/// Threshold below which Perlin noise carves a cave.
pub const PERLIN_CAVE_THRESHOLD: f64 = -0.55;
/// Scaling factor applied to world coordinates when sampling Perlin noise.
pub const PERLIN_SCALE_FACTOR: f64 = 0.11;
/// World-space Y coordinate of the bedrock floor.
pub const BEDROCK_LEVEL: i32 = -64;

/// Represents a 16x16x16 collection of voxel blocks in the world.
pub struct Chunk {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    pub position: Point3<i32>,

    /// One bit per block, set when the block is solid.
    pub solid_array: BitVec,

    /// Every block of the chunk in row-major order.
    pub blocks: Vec<Block>,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air).
    pub fn empty(position: &Point3<i32>) -> Self {
        let mut solid_array = BitVec::with_capacity(CHUNK_SIZE as usize);
        solid_array.resize(CHUNK_SIZE as usize, false);
        Chunk {
            position: *position,
            solid_array,
            blocks: vec![Block::zeroed(); CHUNK_SIZE as usize],
        }
    }

    /// Creates a new chunk where every block has the given type.
    pub fn filled(position: &Point3<i32>, block_type: BlockType) -> Self {
        let mut cci = ChunkCreationIterator::new(*position);

        for _ in 0..CHUNK_SIZE {
            cci.push_block_type(block_type);
        }

        cci.return_chunk()
    }

    /// Generates a chunk of stone with Perlin-noise ore pockets and caves.
    ///
    /// The ore type of each pocket is chosen per chunk from a generator seeded by the
    /// chunk position, so regenerating a chunk yields the same blocks.
    ///
    /// # Arguments
    /// * `position` - The chunk coordinates where the chunk will be placed
    pub fn perlin(position: &Point3<i32>) -> Self {
        let perlin = Perlin::new(0);
        let mut rng = fastrand::Rng::with_seed(Self::seed_for(position));
        let ore = ORE_TYPES[rng.usize(..ORE_TYPES.len())];
        let mut cci = ChunkCreationIterator::new(*position);

        for k in 0..CHUNK_DIMENSION {
            for j in 0..CHUNK_DIMENSION {
                for i in 0..CHUNK_DIMENSION {
                    let bposition = Point3::<i32>::new(
                        i + CHUNK_DIMENSION * position.x,
                        j + CHUNK_DIMENSION * position.y,
                        k + CHUNK_DIMENSION * position.z,
                    );
                    let block_type = if bposition.y == BEDROCK_LEVEL {
                        BlockType::Bedrock
                    } else if bposition.y < BEDROCK_LEVEL {
                        BlockType::Air
                    } else {
                        let sample =
                            perlin.get(Self::to_perlin_pos(bposition, PERLIN_SCALE_FACTOR));
                        if sample > PERLIN_ORE_THRESHOLD {
                            ore
                        } else if sample < PERLIN_CAVE_THRESHOLD {
                            BlockType::Air
                        } else {
                            BlockType::Stone
                        }
                    };
                    cci.push_block_type(block_type);
                }
            }
        }

        cci.return_chunk()
    }

    fn seed_for(position: &Point3<i32>) -> u64 {
        let x = position.x as u32 as u64;
        let y = position.y as u32 as u64;
        let z = position.z as u32 as u64;
        x.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ y.rotate_left(21) ^ z.rotate_left(42)
    }

    /// Converts world block coordinates to Perlin noise sampling coordinates.
    fn to_perlin_pos(pos: Point3<i32>, scale_factor: f64) -> [f64; 3] {
        [
            (pos.x as f64 * scale_factor),
            (pos.y as f64 * scale_factor),
            (pos.z as f64 * scale_factor),
        ]
    }

    fn index_of(local: Point3<usize>) -> usize {
        local.x + CHUNK_DIMENSION as usize * local.y + CHUNK_PLANE_SIZE as usize * local.z
    }

    /// Gets the block at the specified chunk-relative coordinates.
    ///
    /// # Returns
    /// `None` if any coordinate is outside `0..CHUNK_DIMENSION`.
    pub fn get_block_at(&self, local: Point3<usize>) -> Option<Block> {
        if !Self::in_bounds(local) {
            return None;
        }
        self.blocks.get(Self::index_of(local)).copied()
    }

    /// Replaces the block at the specified chunk-relative coordinates.
    ///
    /// Keeps `solid_array` in sync with the new block.
    ///
    /// # Returns
    /// The previous block, or `None` if the coordinates are out of bounds.
    pub fn set_block_at(&mut self, local: Point3<usize>, block: Block) -> Option<Block> {
        if !Self::in_bounds(local) {
            return None;
        }
        let index = Self::index_of(local);
        let previous = std::mem::replace(&mut self.blocks[index], block);
        let solid = block.get_type().is_some_and(|t| t.is_solid());
        self.solid_array.set(index, solid);
        Some(previous)
    }

    /// Checks if the block at the specified chunk-relative coordinates is solid.
    ///
    /// # Returns
    /// `true` if the block is solid, `false` if it's air or out of bounds.
    pub fn is_block_solid(&self, local: Point3<usize>) -> bool {
        Self::in_bounds(local)
            && self
                .solid_array
                .get(Self::index_of(local))
                .is_some_and(|bit| *bit)
    }

    /// Number of solid blocks in this chunk.
    pub fn solid_count(&self) -> usize {
        self.solid_array.count_ones()
    }

    fn in_bounds(local: Point3<usize>) -> bool {
        let d = CHUNK_DIMENSION as usize;
        local.x < d && local.y < d && local.z < d
    }
}
