//! # Direction Module
//!
//! This module defines the six axis-aligned directions in which a block touches its
//! face neighbours. Traversals that need deterministic results iterate neighbours in
//! the order given by [`Direction::ALL`].

use cgmath::Vector3;

use crate::voxels::Position;

/// One of the six face directions of a voxel block.
///
/// Each variant is assigned a unique integer value for compact storage.
///
/// The enumeration order is: [DOWN, UP, NORTH, SOUTH, WEST, EAST]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Direction {
    /// Towards negative Y
    Down = 0,

    /// Towards positive Y
    Up = 1,

    /// Towards negative Z
    North = 2,

    /// Towards positive Z
    South = 3,

    /// Towards negative X
    West = 4,

    /// Towards positive X
    East = 5,
}

impl Direction {
    /// All six directions in enumeration order.
    ///
    /// Breadth-first searches break distance ties by this order, so it must stay stable.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Returns the unit offset this direction moves by.
    pub fn offset(&self) -> Vector3<i32> {
        match self {
            Direction::Down => Vector3::new(0, -1, 0),
            Direction::Up => Vector3::new(0, 1, 0),
            Direction::North => Vector3::new(0, 0, -1),
            Direction::South => Vector3::new(0, 0, 1),
            Direction::West => Vector3::new(-1, 0, 0),
            Direction::East => Vector3::new(1, 0, 0),
        }
    }

    /// The position adjacent to `position` in this direction.
    pub fn relative(&self, position: Position) -> Position {
        position + self.offset()
    }

    /// Iterates over the six face neighbours of `position` in enumeration order.
    pub fn neighbours(position: Position) -> impl Iterator<Item = Position> {
        Direction::ALL.into_iter().map(move |dir| dir.relative(position))
    }
}
