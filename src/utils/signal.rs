use core::task::Waker;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use slab::Slab;
use smallvec::SmallVec;

/// A one-shot, multi-reader completion event.
///
/// The flag only ever moves from `false` to `true`. Listeners park their
/// waker in a slab slot keyed by the listener, so repeated polls of the same
/// listener reuse one slot instead of piling up wakers.
#[derive(Debug, Default)]
pub(crate) struct Signal {
    fired: AtomicBool,
    listeners: Mutex<Slab<Waker>>,
}

impl Signal {
    /// Create a new, unfired signal.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The process-wide signal shared by every promise created already
    /// completed. It is fired once on first access and never written again.
    pub(crate) fn fired() -> Arc<Self> {
        static FIRED: OnceLock<Arc<Signal>> = OnceLock::new();
        FIRED
            .get_or_init(|| {
                let signal = Signal::new();
                signal.fire();
                Arc::new(signal)
            })
            .clone()
    }

    /// Returns `true` once the signal has fired.
    #[inline]
    pub(crate) fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Fire the signal and wake every parked listener.
    ///
    /// Returns `false` if the signal had already fired.
    pub(crate) fn fire(&self) -> bool {
        if self.fired.swap(true, Ordering::AcqRel) {
            return false;
        }

        // Wake outside the lock: a woken task may poll us straight away.
        let wakers: SmallVec<[Waker; 4]> = self.lock().drain().collect();
        for waker in wakers {
            waker.wake();
        }
        true
    }

    /// Park `waker` under `key` until the signal fires.
    ///
    /// Returns `true` if the signal has already fired, in which case nothing
    /// is parked and any slot held by `key` is released.
    pub(crate) fn register(&self, key: &mut Option<usize>, waker: &Waker) -> bool {
        let mut listeners = self.lock();

        // Checked under the lock so a concurrent `fire` either sees our
        // waker when draining or we see its flag here.
        if self.is_fired() {
            if let Some(key) = key.take() {
                listeners.try_remove(key);
            }
            return true;
        }

        match *key {
            Some(slot) if listeners.contains(slot) => listeners[slot].clone_from(waker),
            _ => *key = Some(listeners.insert(waker.clone())),
        }
        false
    }

    /// Release the slot held by a listener that stopped waiting.
    pub(crate) fn unregister(&self, key: usize) {
        self.lock().try_remove(key);
    }

    /// Number of parked listeners.
    #[cfg(test)]
    pub(crate) fn listeners(&self) -> usize {
        self.lock().len()
    }

    // Nothing panics while the lock is held, but recover anyway rather than
    // turn one poisoned lock into a panic in every waiter.
    fn lock(&self) -> MutexGuard<'_, Slab<Waker>> {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
