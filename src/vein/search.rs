//! # Vein Search
//!
//! Breadth-first traversal that breaks the blocks connected to an origin block.
//!
//! ## Algorithm
//!
//! 1. Seed a FIFO queue and a visited set with the origin
//! 2. Pop a position; its type is the captured origin type for the origin itself and
//!    a fresh grid read for everything else
//! 3. Positions whose type no longer matches are dropped without exploring them
//! 4. Every other non-origin position is broken once; a failed break is not retried
//! 5. Face neighbours are marked visited on discovery and queued only if their
//!    current type matches
//! 6. Stop when the queue drains or the break cap is reached
//!
//! A cell that refuses to break still connects its neighbours: connectivity is defined
//! by type adjacency, not by breakability.
//!
//! ## Ordering
//!
//! Breadth-first order means that when the cap cuts a vein short, the broken blocks are
//! the ones closest to the origin by path length. Ties are broken by
//! [`Direction::ALL`](crate::voxels::block::direction::Direction::ALL).
//!
//! ## Cooperative execution
//!
//! [`VeinTraversal`] holds the traversal state between calls so a caller with a tick
//! budget can process a bounded number of cells per tick with
//! [`VeinTraversal::run_for`]. [`VeinSearch::run`] drives a traversal to completion.

use std::collections::{HashSet, VecDeque};

use crate::vein::GridAccessor;
use crate::voxels::block::direction::Direction;
use crate::voxels::Position;

/// Maximum number of extra blocks a single vein mine may break.
pub const DEFAULT_MAX_BLOCKS: usize = 64;

/// Why a traversal stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Every reachable matching block was processed.
    Exhausted,
    /// The break cap was hit while matching blocks were still queued.
    CapReached,
}

/// Outcome of one vein search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Blocks successfully broken, not counting the origin.
    pub broken: usize,
    /// Distinct positions examined, origin included.
    pub visited: usize,
    /// Why the traversal stopped.
    pub termination: Termination,
}

/// What happened to a single dequeued position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellOutcome {
    /// The origin was expanded; it is never broken by the search.
    Origin,
    /// The block was broken.
    Broken,
    /// The grid refused the break. Neighbours were still explored.
    BreakFailed,
    /// The block changed type after being queued and was skipped.
    Discarded,
}

/// Configured vein search with a fixed break cap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VeinSearch {
    cap: usize,
}

impl Default for VeinSearch {
    fn default() -> Self {
        VeinSearch::new(DEFAULT_MAX_BLOCKS)
    }
}

impl VeinSearch {
    /// Creates a search that breaks at most `cap` blocks per run.
    pub fn new(cap: usize) -> Self {
        VeinSearch { cap }
    }

    /// The break cap.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Starts a resumable traversal from `origin`.
    ///
    /// `origin_type` is the type the origin had before the caller removed it.
    pub fn begin<C: Copy + Eq>(&self, origin: Position, origin_type: C) -> VeinTraversal<C> {
        VeinTraversal::new(origin, origin_type, self.cap)
    }

    /// Runs a full search and returns what it did.
    ///
    /// # Examples
    ///
    /// ```
    /// use cgmath::Point3;
    /// use vein_miner::vein::VeinSearch;
    /// use vein_miner::voxels::block::block_type::BlockType;
    /// use vein_miner::voxels::world::World;
    ///
    /// let mut world = World::new();
    /// for x in 0..10 {
    ///     world.set_block(Point3::new(x, 0, 0), BlockType::IronOre);
    /// }
    /// // The player already broke the origin.
    /// world.break_block(Point3::new(0, 0, 0));
    ///
    /// let origin = Point3::new(0, 0, 0);
    /// let result = VeinSearch::default().run(&mut world, origin, BlockType::IronOre);
    /// assert_eq!(result.broken, 9);
    /// ```
    pub fn run<G: GridAccessor>(
        &self,
        grid: &mut G,
        origin: Position,
        origin_type: G::CellType,
    ) -> SearchResult {
        let mut traversal = self.begin(origin, origin_type);
        while traversal.step(grid).is_some() {}
        traversal.finish()
    }
}

/// State of an in-progress vein search.
pub struct VeinTraversal<C> {
    origin: Position,
    target: C,
    cap: usize,
    queue: VecDeque<Position>,
    visited: HashSet<Position>,
    broken: usize,
}

impl<C: Copy + Eq> VeinTraversal<C> {
    /// Creates a traversal seeded with `origin`.
    pub fn new(origin: Position, target: C, cap: usize) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        queue.push_back(origin);
        visited.insert(origin);
        VeinTraversal {
            origin,
            target,
            cap,
            queue,
            visited,
            broken: 0,
        }
    }

    /// Blocks broken so far.
    pub fn broken(&self) -> usize {
        self.broken
    }

    /// Whether another call to [`step`](Self::step) would do any work.
    pub fn is_finished(&self) -> bool {
        self.queue.is_empty() || self.broken >= self.cap
    }

    /// Processes the next queued position.
    ///
    /// # Returns
    /// `None` once the traversal is finished, otherwise what happened to the position.
    pub fn step<G>(&mut self, grid: &mut G) -> Option<(Position, CellOutcome)>
    where
        G: GridAccessor<CellType = C>,
    {
        if self.broken >= self.cap {
            return None;
        }
        let position = self.queue.pop_front()?;

        let is_origin = position == self.origin;
        let state = if is_origin {
            Some(self.target)
        } else {
            grid.get_state(position)
        };
        if state != Some(self.target) {
            log::trace!("Skipping {:?}, type changed since it was queued", position);
            return Some((position, CellOutcome::Discarded));
        }

        let outcome = if is_origin {
            CellOutcome::Origin
        } else if grid.try_break(position) {
            self.broken += 1;
            CellOutcome::Broken
        } else {
            log::trace!("Break refused at {:?}", position);
            CellOutcome::BreakFailed
        };

        for next in Direction::neighbours(position) {
            if !self.visited.insert(next) {
                continue;
            }
            if grid.get_state(next) == Some(self.target) {
                self.queue.push_back(next);
            }
        }

        Some((position, outcome))
    }

    /// Processes at most `budget` positions.
    ///
    /// # Returns
    /// The number of positions processed; less than `budget` only if the traversal finished.
    pub fn run_for<G>(&mut self, grid: &mut G, budget: usize) -> usize
    where
        G: GridAccessor<CellType = C>,
    {
        let mut processed = 0;
        while processed < budget && self.step(grid).is_some() {
            processed += 1;
        }
        processed
    }

    /// Consumes the traversal and summarises it.
    pub fn finish(self) -> SearchResult {
        let termination = if self.broken >= self.cap && !self.queue.is_empty() {
            Termination::CapReached
        } else {
            Termination::Exhausted
        };
        SearchResult {
            broken: self.broken,
            visited: self.visited.len(),
            termination,
        }
    }
}
