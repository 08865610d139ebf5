//! # Vein Mining
//!
//! Breaking one block of a connected kind (ore, log, ...) while holding the activation
//! modifier also breaks the contiguous blocks of the same kind around it.
//!
//! ## Components
//!
//! * **Search** (`search`): breadth-first traversal from the origin that breaks
//!   same-type neighbours up to a cap
//! * **Trigger** (`trigger`): decides whether a break event starts a search
//! * **Guard** (`guard`): at most one search per actor; blocks broken by a search
//!   cannot start another one for the same actor
//! * **Miner** (`miner`): dispatcher wiring the three together
//!
//! The search only talks to the grid through [`GridAccessor`], so it works on the
//! voxel [`World`](crate::voxels::world::World) as well as on any other grid.

use crate::voxels::Position;

pub mod guard;
pub mod miner;
pub mod search;
pub mod trigger;

pub use guard::{ActiveActors, ActiveScope, ActorId, ConcurrencyGuard};
pub use miner::{BlockBreakEvent, MineOutcome, VeinMiner};
pub use search::{
    CellOutcome, SearchResult, Termination, VeinSearch, VeinTraversal, DEFAULT_MAX_BLOCKS,
};
pub use trigger::{is_fallback_mineable, TriggerDecision, TriggerPolicy};

/// Read and break access to a grid of cells.
///
/// Implementations may fail individual breaks (protection, unbreakable blocks, ...);
/// callers are expected to tolerate that.
pub trait GridAccessor {
    /// What occupies a cell.
    type CellType: Copy + Eq;

    /// Reads the current type at `position`.
    ///
    /// `None` means the cell could not be read (for example an unloaded chunk).
    fn get_state(&self, position: Position) -> Option<Self::CellType>;

    /// Attempts to break the cell at `position`, returning whether it was broken.
    fn try_break(&mut self, position: Position) -> bool;
}

/// A cell type that carries a namespaced registry name such as `minecraft:iron_ore`.
///
/// Trigger eligibility is decided on names, keeping the policy independent of the
/// concrete cell representation.
pub trait NamedCell {
    /// The fully qualified registry name.
    fn registry_name(&self) -> String;
}

impl NamedCell for crate::voxels::block::block_type::BlockType {
    fn registry_name(&self) -> String {
        self.name()
    }
}
