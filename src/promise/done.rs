use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::sync::Arc;

use futures_core::future::FusedFuture;

use crate::utils::Signal;

/// A handle onto a promise's completion signal.
///
/// `Done` is a [`Future`] which resolves once the promise it came from has
/// resolved or rejected, and stays resolved from then on. It carries no
/// value: read the outcome from the promise itself afterwards. This makes it
/// the building block for waiting on a promise alongside something else,
/// such as a cancellation signal.
///
/// Handles are cheap to clone, and every clone waits independently.
///
/// This `struct` is created by the [`done`] method on [`Promise`]. See its
/// documentation for more.
///
/// [`done`]: crate::Promise::done
/// [`Promise`]: crate::Promise
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Done {
    signal: Arc<Signal>,
    /// Our parked waker's slot in the signal, if any.
    key: Option<usize>,
    terminated: bool,
}

impl Done {
    pub(crate) fn new(signal: Arc<Signal>) -> Self {
        Self {
            signal,
            key: None,
            terminated: false,
        }
    }

    /// Returns `true` if the promise has completed, without waiting.
    pub fn is_done(&self) -> bool {
        self.signal.is_fired()
    }

    /// Block the current thread until the promise has completed.
    pub fn wait(&self) {
        if !self.is_done() {
            futures_lite::future::block_on(self.clone());
        }
    }
}

impl Future for Done {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if this.signal.is_fired() || this.signal.register(&mut this.key, cx.waker()) {
            if let Some(key) = this.key.take() {
                this.signal.unregister(key);
            }
            this.terminated = true;
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}

impl FusedFuture for Done {
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl Clone for Done {
    fn clone(&self) -> Self {
        Self::new(self.signal.clone())
    }
}

/// Two handles are equal if they watch the same signal.
impl PartialEq for Done {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.signal, &other.signal)
    }
}

impl Eq for Done {}

impl fmt::Debug for Done {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Done")
            .field("done", &self.is_done())
            .finish()
    }
}

impl Drop for Done {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            self.signal.unregister(key);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::DummyWaker;

    #[test]
    fn pending_until_fired() {
        let signal = Arc::new(Signal::new());
        let dummy = Arc::new(DummyWaker::default());
        let waker = dummy.clone().into();
        let mut cx = Context::from_waker(&waker);

        let mut done = Done::new(signal.clone());
        assert!(Pin::new(&mut done).poll(&mut cx).is_pending());
        assert!(Pin::new(&mut done).poll(&mut cx).is_pending());
        assert_eq!(signal.listeners(), 1);

        signal.fire();
        assert_eq!(dummy.count(), 1);
        assert!(Pin::new(&mut done).poll(&mut cx).is_ready());
        assert!(done.is_terminated());

        // Completion is permanent.
        assert!(Pin::new(&mut done).poll(&mut cx).is_ready());
    }

    #[test]
    fn drop_releases_slot() {
        let signal = Arc::new(Signal::new());
        let waker = Arc::new(DummyWaker::default()).into();
        let mut cx = Context::from_waker(&waker);

        let mut done = Done::new(signal.clone());
        assert!(Pin::new(&mut done).poll(&mut cx).is_pending());
        assert_eq!(signal.listeners(), 1);
        drop(done);
        assert_eq!(signal.listeners(), 0);
    }

    #[test]
    fn clones_wait_independently() {
        let signal = Arc::new(Signal::new());
        let done = Done::new(signal.clone());
        let other = done.clone();
        assert_eq!(done, other);

        let handle = std::thread::spawn(move || other.wait());
        signal.fire();
        handle.join().unwrap();
        futures_lite::future::block_on(done);
    }
}
