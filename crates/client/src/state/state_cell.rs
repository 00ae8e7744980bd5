//! StateCell - the plain state holder behind every controller
//!
//! Two operations make up the whole contract: a synchronous `get` that
//! returns the current snapshot, and `subscribe`, which delivers a snapshot
//! on every change. Writes go through `set`/`update`, which notify while
//! holding no state lock, so "last write wins" holds for subscribers the
//! same way it does for readers.

use std::sync::{Arc, Mutex, MutexGuard};

type Subscriber<T> = Box<dyn FnMut(T) + Send + 'static>;

/// Shared snapshot holder. Clones share state and subscribers.
#[derive(Clone)]
pub struct StateCell<T> {
    value: Arc<Mutex<T>>,
    subscribers: Arc<Mutex<Vec<Subscriber<T>>>>,
}

impl<T: Clone + Send + 'static> StateCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: Arc::new(Mutex::new(initial)),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Current state snapshot.
    pub fn get(&self) -> T {
        self.lock_value().clone()
    }

    /// Register a callback invoked with a snapshot after every change.
    pub fn subscribe(&self, callback: impl FnMut(T) + Send + 'static) {
        if let Ok(mut subscribers) = self.subscribers.lock() {
            subscribers.push(Box::new(callback));
        }
    }

    /// Replace the state and notify.
    pub fn set(&self, value: T) {
        *self.lock_value() = value;
        self.notify();
    }

    /// Mutate the state in place and notify. The closure's return value is
    /// passed through so callers can derive a decision from the same lock.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut value = self.lock_value();
            f(&mut value)
        };
        self.notify();
        result
    }

    // Callbacks run with the subscriber list drained, not locked, so a
    // callback may re-enter the cell (subscribe, set) without deadlocking.
    fn notify(&self) {
        let snapshot = self.get();
        let mut subscribers = match self.subscribers.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(_) => return,
        };
        for subscriber in subscribers.iter_mut() {
            subscriber(snapshot.clone());
        }
        if let Ok(mut guard) = self.subscribers.lock() {
            // Keep registration order: anything subscribed during the
            // callbacks goes after the drained originals.
            subscribers.append(&mut guard);
            *guard = subscribers;
        }
    }

    fn lock_value(&self) -> MutexGuard<'_, T> {
        // Callbacks never run under this lock, so poisoning would require a
        // panic inside StateCell itself.
        match self.value.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
