use crate::Promise;

pub(crate) mod array;
pub(crate) mod vec;

/// Wait for the first promise to complete.
///
/// Returns a promise which completes with the outcome of whichever input
/// completes first, whether it resolved or rejected. The other inputs keep
/// running; their outcomes are discarded.
pub trait Race {
    /// The value type of the promises.
    type Output;

    /// The error type of the promises.
    type Error;

    /// Wait for the first promise to complete.
    ///
    /// The winner is decided by the order in which the inputs complete, not
    /// by their position. If several complete at the same moment, which one
    /// wins is up to the scheduler, but only ever one does.
    ///
    /// Racing an empty set of promises is a caller mistake, since there is
    /// nothing that could ever win. Rather than return a promise that never
    /// completes, the race rejects right away with [`Error::EmptyRace`].
    ///
    /// Losing promises are not cancelled: their work runs to completion in
    /// the background.
    ///
    /// # Examples
    ///
    /// ```
    /// use async_std::task;
    /// use promise_concurrency::prelude::*;
    /// use promise_concurrency::Promise;
    /// use std::time::Duration;
    ///
    /// let fast: Promise<_> = Promise::resolved(1);
    /// let slow = Promise::spawn(async {
    ///     task::sleep(Duration::from_secs(1)).await;
    ///     Ok(2)
    /// });
    ///
    /// assert_eq!(vec![fast, slow].race().wait(), Ok(1));
    /// ```
    ///
    /// Combined with [`timeout`] to bound the wait for a slow promise:
    ///
    /// ```
    /// use async_std::task;
    /// use promise_concurrency::future::timeout;
    /// use promise_concurrency::prelude::*;
    /// use promise_concurrency::{Error, Promise};
    /// use std::time::Duration;
    ///
    /// let slow: Promise<_> = Promise::spawn(async {
    ///     task::sleep(Duration::from_secs(1)).await;
    ///     Ok(2)
    /// });
    /// let deadline = timeout(Duration::from_millis(10));
    ///
    /// assert_eq!([slow, deadline].race().wait(), Err(Error::DeadlineExceeded));
    /// ```
    ///
    /// [`Error::EmptyRace`]: crate::Error::EmptyRace
    /// [`timeout`]: crate::future::timeout
    fn race(self) -> Promise<Self::Output, Self::Error>;
}
