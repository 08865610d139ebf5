//! # World Module
//!
//! This module provides the `World` struct which manages a collection of chunks in the voxel world.
//! It serves as the central coordinator for chunk loading and block access, and is the
//! grid the vein search operates on.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach where only chunks that have been added
//! are kept in memory. Reads from positions in unloaded chunks report no block at all,
//! which the vein search treats as a non-matching cell.
//!
//! ## Chunk Generation
//!
//! Multiple generation strategies are supported (see [`ChunkGeneration`]):
//! - Perlin noise for stone terrain with ore pockets and caves
//! - Solid chunks of one block type
//! - Empty chunks (all blocks air)

use std::collections::{HashMap, HashSet};

use cgmath::Point3;

use crate::vein::GridAccessor;
use crate::voxels::block::block_type::BlockType;
use crate::voxels::block::Block;
use crate::voxels::chunk::{Chunk, CHUNK_DIMENSION};
use crate::voxels::Position;

/// The method used to generate new chunks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChunkGeneration {
    /// Stone terrain with Perlin-noise ore pockets
    Perlin,
    /// Every block has the given type
    Solid(BlockType),
    /// Every block is air
    Empty,
}

/// Represents a voxel world composed of multiple chunks.
///
/// The world is stored as a sparse 3D grid of chunks, where each chunk is a 16x16x16
/// collection of blocks.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use vein_miner::voxels::block::block_type::BlockType;
/// use vein_miner::voxels::world::{ChunkGeneration, World};
///
/// let mut world = World::new();
/// world.add_chunk_at(Point3::new(0, 0, 0), ChunkGeneration::Empty);
/// world.set_block(Point3::new(1, 2, 3), BlockType::IronOre);
/// assert_eq!(world.get_block_type(Point3::new(1, 2, 3)), Some(BlockType::IronOre));
/// assert!(world.break_block(Point3::new(1, 2, 3)));
/// assert_eq!(world.get_block_type(Point3::new(1, 2, 3)), Some(BlockType::Air));
/// ```
#[derive(Default)]
pub struct World {
    /// A mapping from chunk coordinates to chunk data.
    pub chunks: HashMap<Point3<i32>, Chunk>,

    /// Block positions that refuse to be broken regardless of their type.
    protected: HashSet<Position>,
}

impl World {
    /// Creates a new, empty world.
    pub fn new() -> Self {
        World {
            chunks: HashMap::new(),
            protected: HashSet::new(),
        }
    }

    /// Adds a new chunk at the specified chunk coordinates if one doesn't already exist.
    pub fn add_chunk_at(&mut self, position: Point3<i32>, generation: ChunkGeneration) {
        if self.chunks.contains_key(&position) {
            return;
        }

        let chunk = match generation {
            ChunkGeneration::Perlin => Chunk::perlin(&position),
            ChunkGeneration::Solid(block_type) => Chunk::filled(&position, block_type),
            ChunkGeneration::Empty => Chunk::empty(&position),
        };

        self.chunks.insert(position, chunk);
    }

    /// Retrieves a reference to the chunk at the specified chunk coordinates.
    pub fn get_chunk_at(&self, pos: Point3<i32>) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }

    /// Splits a world block position into chunk coordinates and chunk-relative coordinates.
    pub fn to_chunk_coords(position: Position) -> (Point3<i32>, Point3<usize>) {
        let chunk = Point3::new(
            position.x.div_euclid(CHUNK_DIMENSION),
            position.y.div_euclid(CHUNK_DIMENSION),
            position.z.div_euclid(CHUNK_DIMENSION),
        );
        let local = Point3::new(
            position.x.rem_euclid(CHUNK_DIMENSION) as usize,
            position.y.rem_euclid(CHUNK_DIMENSION) as usize,
            position.z.rem_euclid(CHUNK_DIMENSION) as usize,
        );
        (chunk, local)
    }

    /// Reads the block at a world position.
    ///
    /// # Returns
    /// `None` when the containing chunk is not loaded.
    pub fn get_block(&self, position: Position) -> Option<Block> {
        let (chunk_pos, local) = Self::to_chunk_coords(position);
        self.chunks.get(&chunk_pos)?.get_block_at(local)
    }

    /// Reads the decoded block type at a world position.
    pub fn get_block_type(&self, position: Position) -> Option<BlockType> {
        self.get_block(position)?.get_type()
    }

    /// Places a block, loading an empty chunk first if needed.
    ///
    /// # Returns
    /// The type that previously occupied the position, if it was known.
    pub fn set_block(&mut self, position: Position, block_type: BlockType) -> Option<BlockType> {
        let (chunk_pos, local) = Self::to_chunk_coords(position);
        self.add_chunk_at(chunk_pos, ChunkGeneration::Empty);
        self.chunks
            .get_mut(&chunk_pos)?
            .set_block_at(local, Block::new(block_type))?
            .get_type()
    }

    /// Marks a position as unbreakable (e.g. claimed land).
    pub fn protect(&mut self, position: Position) {
        self.protected.insert(position);
    }

    /// Removes a protection added with [`World::protect`].
    pub fn unprotect(&mut self, position: Position) {
        self.protected.remove(&position);
    }

    /// Whether breaking `position` is currently forbidden.
    pub fn is_protected(&self, position: Position) -> bool {
        self.protected.contains(&position)
    }

    /// Breaks the block at `position`, replacing it with air.
    ///
    /// # Returns
    /// `false` when the chunk is not loaded, the position is protected, or the block
    /// is air or otherwise unbreakable.
    pub fn break_block(&mut self, position: Position) -> bool {
        if self.is_protected(position) {
            log::trace!("Refusing to break protected block at {:?}", position);
            return false;
        }
        let (chunk_pos, local) = Self::to_chunk_coords(position);
        let Some(chunk) = self.chunks.get_mut(&chunk_pos) else {
            return false;
        };
        // Air is never solid, so the mask rejects it without decoding the block.
        if !chunk.is_block_solid(local) {
            return false;
        }
        let breakable = chunk
            .get_block_at(local)
            .and_then(|block| block.get_type())
            .is_some_and(|block_type| block_type.is_breakable());
        breakable && chunk.set_block_at(local, Block::AIR).is_some()
    }
}

impl GridAccessor for World {
    type CellType = BlockType;

    fn get_state(&self, position: Position) -> Option<BlockType> {
        self.get_block_type(position)
    }

    fn try_break(&mut self, position: Position) -> bool {
        self.break_block(position)
    }
}
