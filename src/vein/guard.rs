//! # Concurrency Guard
//!
//! Breaking a block can raise the same break event that started a vein search. The
//! guard marks an actor as active for the duration of a search so that those nested
//! events are ignored instead of starting a second search.
//!
//! Each actor's marker is independent: different actors can vein mine at the same time.

use std::collections::HashSet;
use std::fmt;

use crate::core::MtResource;

/// Identifies the entity performing a break.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Per-actor mutual exclusion.
///
/// `release` must be called exactly once for every successful `try_acquire`.
/// [`ActiveScope`] does that automatically.
pub trait ConcurrencyGuard: Send + Sync {
    /// Marks `actor` active. Returns `false` if it already was.
    fn try_acquire(&self, actor: ActorId) -> bool;

    /// Clears the active marker of `actor`.
    fn release(&self, actor: ActorId);
}

/// The set of actors currently running a vein search.
#[derive(Clone, Debug, Default)]
pub struct ActiveActors {
    active: MtResource<HashSet<ActorId>>,
}

impl ActiveActors {
    /// Creates an empty set.
    pub fn new() -> Self {
        ActiveActors::default()
    }

    /// Whether `actor` currently holds its marker.
    pub fn is_active(&self, actor: ActorId) -> bool {
        self.active.get().contains(&actor)
    }

    /// Number of actors currently holding a marker.
    pub fn len(&self) -> usize {
        self.active.get().len()
    }

    /// Whether no actor holds a marker.
    pub fn is_empty(&self) -> bool {
        self.active.get().is_empty()
    }
}

impl ConcurrencyGuard for ActiveActors {
    fn try_acquire(&self, actor: ActorId) -> bool {
        self.active.get_mut().insert(actor)
    }

    fn release(&self, actor: ActorId) {
        if !self.active.get_mut().remove(&actor) {
            log::warn!("Released {} which was not active", actor);
        }
    }
}

/// Holds an actor's marker and releases it when dropped, including during unwinding.
#[must_use = "the actor is released as soon as the scope is dropped"]
pub struct ActiveScope<'a, G: ConcurrencyGuard + ?Sized> {
    guard: &'a G,
    actor: ActorId,
}

impl<'a, G: ConcurrencyGuard + ?Sized> ActiveScope<'a, G> {
    /// Acquires `actor` on `guard`.
    ///
    /// # Returns
    /// `None` if the actor is already active.
    pub fn enter(guard: &'a G, actor: ActorId) -> Option<Self> {
        // Only construct the scope on success: dropping one releases the actor.
        guard
            .try_acquire(actor)
            .then(|| ActiveScope { guard, actor })
    }

    /// The actor this scope holds.
    pub fn actor(&self) -> ActorId {
        self.actor
    }
}

impl<G: ConcurrencyGuard + ?Sized> Drop for ActiveScope<'_, G> {
    fn drop(&mut self) {
        self.guard.release(self.actor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    fn second_acquire_fails_until_release() {
        let guard = ActiveActors::new();
        let actor = ActorId(7);
        assert!(guard.try_acquire(actor));
        assert!(!guard.try_acquire(actor));
        assert!(guard.try_acquire(ActorId(8)));
        guard.release(actor);
        assert!(guard.try_acquire(actor));
    }

    #[test]
    fn scope_releases_on_drop() {
        let guard = ActiveActors::new();
        {
            let scope = ActiveScope::enter(&guard, ActorId(1));
            assert!(scope.is_some());
            assert!(ActiveScope::enter(&guard, ActorId(1)).is_none());
            // The failed attempt must not release the holder.
            assert!(guard.is_active(ActorId(1)));
        }
        assert!(guard.is_empty());
    }

    #[test]
    fn scope_releases_when_unwinding() {
        let guard = ActiveActors::new();
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            let _scope = ActiveScope::enter(&guard, ActorId(3));
            panic!("search blew up");
        }));
        assert!(result.is_err());
        assert!(!guard.is_active(ActorId(3)));
        assert!(ActiveScope::enter(&guard, ActorId(3)).is_some());
    }

    #[test]
    fn clones_share_the_same_set() {
        let guard = ActiveActors::new();
        let shared = guard.clone();
        assert!(guard.try_acquire(ActorId(5)));
        assert!(shared.is_active(ActorId(5)));
        assert_eq!(shared.len(), 1);
    }
}
