use core::fmt;
use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project::pin_project;

use super::{Done, Promise};

/// A future which waits for a promise to complete and yields a copy of its
/// outcome.
///
/// This `struct` is created by `.await`ing a [`Promise`] or a reference to
/// one. Awaiting suspends the current task rather than blocking the thread.
///
/// # Examples
///
/// ```
/// use promise_concurrency::Promise;
///
/// # futures_lite::future::block_on(async {
/// let p: Promise<_> = Promise::spawn(async { Ok(42) });
/// assert_eq!((&p).await, Ok(42));
/// assert_eq!(p.await, Ok(42));
/// # });
/// ```
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct Await<T, E> {
    promise: Promise<T, E>,
    #[pin]
    done: Done,
}

impl<T, E> Await<T, E> {
    fn new(promise: Promise<T, E>) -> Self {
        let done = promise.done();
        Self { promise, done }
    }
}

impl<T, E> Future for Await<T, E>
where
    T: Clone,
    E: Clone,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        ready!(this.done.poll(cx));
        Poll::Ready(this.promise.settled().clone())
    }
}

impl<T, E> FusedFuture for Await<T, E>
where
    T: Clone,
    E: Clone,
{
    fn is_terminated(&self) -> bool {
        self.done.is_terminated()
    }
}

impl<T, E> fmt::Debug for Await<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Await").field(&self.promise).finish()
    }
}

impl<T, E> IntoFuture for Promise<T, E>
where
    T: Clone,
    E: Clone,
{
    type Output = Result<T, E>;
    type IntoFuture = Await<T, E>;

    fn into_future(self) -> Self::IntoFuture {
        Await::new(self)
    }
}

impl<T, E> IntoFuture for &Promise<T, E>
where
    T: Clone,
    E: Clone,
{
    type Output = Result<T, E>;
    type IntoFuture = Await<T, E>;

    fn into_future(self) -> Self::IntoFuture {
        Await::new(self.clone())
    }
}
