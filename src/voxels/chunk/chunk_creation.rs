//! # Chunk Creation Module
//!
//! This module provides a builder for populating chunks block by block in storage
//! order. It keeps the solidity bit vector and the dense block vector consistent
//! while blocks are appended.

use bitvec::vec::BitVec;
use cgmath::Point3;

use crate::voxels::block::{block_type::BlockType, Block};

use super::{Chunk, CHUNK_SIZE};

/// A builder that fills a chunk in row-major order (x, then y, then z).
pub struct ChunkCreationIterator {
    /// The chunk coordinates of the chunk being created
    position: Point3<i32>,
    /// One bit per pushed block, set when the block is solid
    solid_array: BitVec,
    /// Every pushed block, air included
    blocks: Vec<Block>,
}

impl ChunkCreationIterator {
    /// Creates a new `ChunkCreationIterator` for building a chunk at the given position.
    pub fn new(position: Point3<i32>) -> Self {
        ChunkCreationIterator {
            position,
            solid_array: BitVec::with_capacity(CHUNK_SIZE as usize),
            blocks: Vec::with_capacity(CHUNK_SIZE as usize),
        }
    }

    /// Finalizes the chunk creation and returns the constructed `Chunk`.
    ///
    /// Positions that were never pushed are filled with air.
    pub fn return_chunk(mut self) -> Chunk {
        while self.blocks.len() < CHUNK_SIZE as usize {
            self.push_block_type(BlockType::Air);
        }
        Chunk {
            position: self.position,
            solid_array: self.solid_array,
            blocks: self.blocks,
        }
    }

    /// Adds a block at the current position and advances the position.
    ///
    /// Blocks pushed past the end of the chunk are ignored.
    pub fn push_block_type(&mut self, block_type: BlockType) {
        if self.blocks.len() >= CHUNK_SIZE as usize {
            log::warn!(
                "Chunk {:?} is full, dropping extra {}",
                self.position,
                block_type
            );
            return;
        }
        self.solid_array.push(block_type.is_solid());
        self.blocks.push(Block::new(block_type));
    }
}
