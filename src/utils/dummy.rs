use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::Wake;

/// A waker that counts how often it was woken.
#[derive(Debug, Default)]
pub(crate) struct DummyWaker {
    count: AtomicUsize,
}

impl DummyWaker {
    pub(crate) fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Wake for DummyWaker {
    fn wake(self: std::sync::Arc<Self>) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
