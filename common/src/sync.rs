use std::{fmt, panic::Location, sync::Arc};

use log::trace;
use parking_lot::Mutex;

/// Cloneable handle to a single counter or ledger instance.
///
/// Every access holds one exclusive lock for the duration of the closure,
/// so each closure runs as a single transition and mutations on the same
/// instance never interleave.
pub struct Shared<T> {
    init_location: &'static Location<'static>,
    inner: Arc<Mutex<T>>,
}

impl<T> Shared<T> {
    #[track_caller]
    pub fn new(value: T) -> Self {
        Self {
            init_location: Location::caller(),
            inner: Arc::new(Mutex::new(value)),
        }
    }

    /// Run a read-only closure against the instance
    #[track_caller]
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let location = Location::caller();
        let guard = self.inner.lock();
        if log::log_enabled!(log::Level::Trace) {
            trace!("Shared {} locked for read at {}", self.init_location, location);
        }
        f(&*guard)
    }

    /// Run a mutating closure against the instance
    #[track_caller]
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let location = Location::caller();
        let mut guard = self.inner.lock();
        if log::log_enabled!(log::Level::Trace) {
            trace!("Shared {} locked for write at {}", self.init_location, location);
        }
        f(&mut *guard)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> T
    where
        T: Clone,
    {
        self.inner.lock().clone()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            init_location: self.init_location,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Shared");
        debug.field("init_location", &self.init_location);
        // never block here, the caller may be inside `with` on this instance
        match self.inner.try_lock() {
            Some(guard) => debug.field("inner", &*guard),
            None => debug.field("inner", &format_args!("<locked>")),
        };
        debug.finish()
    }
}
