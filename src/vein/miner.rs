//! # Vein Miner
//!
//! Dispatcher that turns block break events into vein searches.
//!
//! For each event the miner:
//! 1. Evaluates the trigger policy against the actor's modifier and the broken block
//! 2. Marks the actor active, skipping the event if a search for it is already running
//! 3. Runs the search from the broken block and releases the actor on every exit path
//!
//! Blocks broken by the search may raise break events of their own. Those reach the
//! miner while the actor is still active and are dropped at step 2.

use std::sync::Arc;

use crate::config::VeinMinerConfig;
use crate::vein::guard::{ActiveActors, ActiveScope, ActorId, ConcurrencyGuard};
use crate::vein::search::{SearchResult, VeinSearch};
use crate::vein::trigger::{TriggerDecision, TriggerPolicy};
use crate::vein::{GridAccessor, NamedCell};
use crate::voxels::Position;

/// A block broken directly by an actor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockBreakEvent<C> {
    /// Who broke the block.
    pub actor: ActorId,
    /// Where the block was. It is already gone from the grid.
    pub position: Position,
    /// What the block was before it was broken.
    pub broken_type: C,
    /// Whether the actor held the activation modifier.
    pub modifier_held: bool,
}

/// What the miner did with an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MineOutcome {
    /// The policy rejected the event.
    NotInvoked(TriggerDecision),
    /// A search for the same actor was already running.
    AlreadyActive,
    /// A search ran.
    Mined(SearchResult),
}

impl MineOutcome {
    /// Extra blocks broken, zero if no search ran.
    pub fn broken(&self) -> usize {
        match self {
            MineOutcome::Mined(result) => result.broken,
            _ => 0,
        }
    }
}

/// Coordinates trigger evaluation, per-actor exclusion and the vein search.
///
/// The guard is shared through an `Arc` so several miners, or other dispatchers,
/// can agree on which actors are active.
pub struct VeinMiner<G: ConcurrencyGuard + ?Sized = ActiveActors> {
    search: VeinSearch,
    policy: TriggerPolicy,
    guard: Arc<G>,
}

impl VeinMiner<ActiveActors> {
    /// Creates a miner with its own guard from a configuration.
    pub fn new(config: &VeinMinerConfig) -> Self {
        VeinMiner::with_guard(
            VeinSearch::new(config.max_blocks),
            TriggerPolicy::from_config(config),
            Arc::new(ActiveActors::new()),
        )
    }
}

impl<G: ConcurrencyGuard + ?Sized> VeinMiner<G> {
    /// Creates a miner from explicit parts.
    pub fn with_guard(search: VeinSearch, policy: TriggerPolicy, guard: Arc<G>) -> Self {
        VeinMiner {
            search,
            policy,
            guard,
        }
    }

    /// The guard tracking active actors.
    pub fn guard(&self) -> &Arc<G> {
        &self.guard
    }

    /// The search settings.
    pub fn search(&self) -> &VeinSearch {
        &self.search
    }

    /// The trigger policy.
    pub fn policy(&self) -> &TriggerPolicy {
        &self.policy
    }

    /// Handles a block broken by an actor.
    ///
    /// `grid` must already reflect the removal of the broken block.
    pub fn on_block_broken<W>(
        &self,
        grid: &mut W,
        event: &BlockBreakEvent<W::CellType>,
    ) -> MineOutcome
    where
        W: GridAccessor,
        W::CellType: NamedCell,
    {
        let name = event.broken_type.registry_name();
        let decision = self.policy.evaluate(event.modifier_held, &name);
        log::debug!(
            "Break event: block={} actor={} modifier={} in_tag={} decision={:?}",
            name,
            event.actor,
            event.modifier_held,
            self.policy.in_tag(&name),
            decision
        );
        if !decision.should_activate() {
            return MineOutcome::NotInvoked(decision);
        }

        let Some(_scope) = ActiveScope::enter(&*self.guard, event.actor) else {
            log::trace!("{} is already vein mining, ignoring nested break", event.actor);
            return MineOutcome::AlreadyActive;
        };

        let result = self.search.run(grid, event.position, event.broken_type);
        log::info!(
            "{} broke {} extra {} blocks ({:?})",
            event.actor,
            result.broken,
            name,
            result.termination
        );
        MineOutcome::Mined(result)
    }
}
