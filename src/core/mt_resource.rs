use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A thread-safe, reference-counted resource container with read-write locking.
///
/// `MtResource` provides synchronized access to a value of type `T` that can be shared
/// across threads. It uses an `Arc<RwLock<T>>` internally to manage concurrent access.
///
/// A panic while a guard is held poisons the lock; `MtResource` recovers the inner value
/// instead of propagating the poison, so holders of the resource keep working after a
/// panicking thread unwinds.
///
/// # Examples
///
/// ```
/// use vein_miner::core::MtResource;
///
/// let counter = MtResource::new(0);
/// let counter_clone = counter.clone();
///
/// std::thread::spawn(move || {
///     *counter_clone.get_mut() += 1;
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(*counter.get(), 1);
/// ```
#[derive(Debug)]
pub struct MtResource<T: Send + Sync> {
    /// The shared, lock-protected value.
    pub resource: Arc<RwLock<T>>,
}

impl<T: Send + Sync> MtResource<T> {
    /// Creates a new `MtResource` containing the given value.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Arc::new(RwLock::new(resource)),
        }
    }

    /// Returns a read-only guard that allows reading the contained value.
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.resource
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a mutable guard that allows modifying the contained value.
    ///
    /// Blocks until every other guard has been released.
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.resource
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Send + Sync> Clone for MtResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}

impl<T: Send + Sync + Default> Default for MtResource<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    fn poisoned_lock_is_recovered() {
        let resource = MtResource::new(vec![1]);
        let poisoner = resource.clone();
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            let mut guard = poisoner.get_mut();
            guard.push(2);
            panic!("poison the lock");
        }));
        assert!(result.is_err());
        assert!(resource.resource.is_poisoned());
        assert_eq!(*resource.get(), vec![1, 2]);
        resource.get_mut().push(3);
        assert_eq!(resource.get().len(), 3);
    }
}
