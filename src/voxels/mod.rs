//! # Voxel World
//!
//! This module contains the voxel storage the vein miner operates on.
//!
//! ## Architecture
//!
//! * **Block**: Defines individual voxel types, their registry names and face directions
//! * **Chunk**: Manages fixed-size 3D arrays of blocks
//! * **World**: Coordinates chunks and provides a unified interface for the entire voxel space
//!
//! ## Data Flow
//!
//! 1. World receives requests for block access or modification
//! 2. World delegates to the appropriate chunk
//! 3. Breaking a block replaces it with air unless the block or position forbids it

use cgmath::Point3;

pub mod block;
pub mod chunk;
pub mod world;

/// A block position in world coordinates.
pub type Position = Point3<i32>;
