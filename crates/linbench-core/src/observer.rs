//! Observer pattern connecting the harness to presentation layers.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::progress::BatchProgress;

/// Observer trait for receiving batch progress updates.
///
/// Implementations must be cheap: the parallel harness calls this from
/// every worker thread.
pub trait BatchObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &BatchProgress);
}

/// Observer that discards all updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchObserver for NoOpObserver {
    fn on_progress(&self, _update: &BatchProgress) {}
}

/// Subject that fans updates out to registered observers.
pub struct ProgressSubject {
    observers: RwLock<Vec<Arc<dyn BatchObserver>>>,
}

impl ProgressSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn BatchObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Notify all observers of a progress update.
    pub fn notify(&self, update: &BatchProgress) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_progress(update);
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for ProgressSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchObserver for ProgressSubject {
    fn on_progress(&self, update: &BatchProgress) {
        self.notify(update);
    }
}
