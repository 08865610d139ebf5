//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel world.
//! It includes block type definitions, face directions, and the stored block record.

use block_type::BlockType;

pub mod block_type;
pub mod direction;

/// The underlying integer type used to represent block types in memory.
/// This is used for efficient storage of block data inside chunks.
pub type BlockTypeSize = u8;

/// Represents a single voxel block in the world.
///
/// This is a lightweight structure that stores only the essential block data.
/// The actual block properties are looked up from the block type.
///
/// # Memory Layout
/// The block type is stored as a compact `BlockTypeSize`. The all-zero block is air,
/// so fresh chunk storage can be allocated zeroed.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Zeroable, Debug, PartialEq, Eq)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// The empty block. Its all-zero encoding is what `Zeroable` produces.
    pub const AIR: Block = Block { block_type: 0 };

    /// Creates a new block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
        }
    }

    /// Decodes the stored type.
    ///
    /// # Returns
    /// `None` if the stored byte does not name a known block type.
    pub fn get_type(&self) -> Option<BlockType> {
        BlockType::from_int(self.block_type)
    }
}

impl Default for Block {
    fn default() -> Self {
        Block::AIR
    }
}
