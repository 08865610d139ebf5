//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world.
//! It provides functionality for block type identification and conversion between the
//! compact integer encoding and registry names.

use std::fmt;

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use super::BlockTypeSize;

/// Namespace used for every built-in block registry name.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Enumerates all possible block types in the voxel world.
///
/// Each variant represents a distinct type of block. The `FromPrimitive` derive allows
/// conversion from the compact `BlockTypeSize` storage format.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block, which is non-solid and cannot be broken.
    Air,
    /// Common filler stone.
    Stone,
    /// A basic dirt block.
    Dirt,
    /// A grass block covering dirt.
    Grass,
    /// Indestructible floor block.
    Bedrock,
    /// Oak tree trunk.
    OakLog,
    /// Birch tree trunk.
    BirchLog,
    /// Nether fungus trunk.
    CrimsonStem,
    /// Nether fungus bark block.
    WarpedHyphae,
    /// Coal ore embedded in stone.
    CoalOre,
    /// Iron ore embedded in stone.
    IronOre,
    /// Gold ore embedded in stone.
    GoldOre,
    /// Diamond ore embedded in stone.
    DiamondOre,
    /// Iron ore embedded in deepslate.
    DeepslateIronOre,
    /// Netherite source block.
    AncientDebris,
    /// Decorative block that is neither a log nor an ore.
    OakPlanks,
}

/// Every block type in declaration order, matching the integer encoding.
pub const ALL_BLOCK_TYPES: [BlockType; 16] = [
    BlockType::Air,
    BlockType::Stone,
    BlockType::Dirt,
    BlockType::Grass,
    BlockType::Bedrock,
    BlockType::OakLog,
    BlockType::BirchLog,
    BlockType::CrimsonStem,
    BlockType::WarpedHyphae,
    BlockType::CoalOre,
    BlockType::IronOre,
    BlockType::GoldOre,
    BlockType::DiamondOre,
    BlockType::DeepslateIronOre,
    BlockType::AncientDebris,
    BlockType::OakPlanks,
];

/// Ore types that generate as pockets inside stone.
pub const ORE_TYPES: [BlockType; 5] = [
    BlockType::CoalOre,
    BlockType::IronOre,
    BlockType::GoldOre,
    BlockType::DiamondOre,
    BlockType::DeepslateIronOre,
];

impl BlockType {
    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// # Returns
    /// The corresponding `BlockType`, or `None` if the value has no variant.
    pub fn from_int(btype: BlockTypeSize) -> Option<Self> {
        FromPrimitive::from_u8(btype)
    }

    /// The registry path of this block, without namespace (e.g. `iron_ore`).
    pub fn path(&self) -> &'static str {
        match self {
            BlockType::Air => "air",
            BlockType::Stone => "stone",
            BlockType::Dirt => "dirt",
            BlockType::Grass => "grass_block",
            BlockType::Bedrock => "bedrock",
            BlockType::OakLog => "oak_log",
            BlockType::BirchLog => "birch_log",
            BlockType::CrimsonStem => "crimson_stem",
            BlockType::WarpedHyphae => "warped_hyphae",
            BlockType::CoalOre => "coal_ore",
            BlockType::IronOre => "iron_ore",
            BlockType::GoldOre => "gold_ore",
            BlockType::DiamondOre => "diamond_ore",
            BlockType::DeepslateIronOre => "deepslate_iron_ore",
            BlockType::AncientDebris => "ancient_debris",
            BlockType::OakPlanks => "oak_planks",
        }
    }

    /// The fully qualified registry name of this block (e.g. `minecraft:iron_ore`).
    pub fn name(&self) -> String {
        format!("{}:{}", DEFAULT_NAMESPACE, self.path())
    }

    /// Whether the block occupies its cell (everything except air).
    pub fn is_solid(&self) -> bool {
        *self != BlockType::Air
    }

    /// Whether players can destroy this block at all.
    pub fn is_breakable(&self) -> bool {
        !matches!(self, BlockType::Air | BlockType::Bedrock)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", DEFAULT_NAMESPACE, self.path())
    }
}
