use crate::Promise;

pub(crate) mod array;
pub(crate) mod vec;

/// Wait for all promises to resolve, or reject early on the first error.
pub trait All {
    /// The collection of values the returned promise resolves with.
    type Output;

    /// The error type of the promises.
    type Error;

    /// Wait for all promises to resolve, or reject early on the first error.
    ///
    /// On success the values are in the same order as the inputs, no matter
    /// in which order the inputs completed. As soon as any input is seen to
    /// reject, the returned promise rejects with that error without waiting
    /// for the rest; if several inputs reject, the first to complete wins.
    /// The remaining inputs are not cancelled.
    ///
    /// # Examples
    ///
    /// ```
    /// use async_std::task;
    /// use promise_concurrency::prelude::*;
    /// use promise_concurrency::{Error, Promise};
    /// use std::time::Duration;
    ///
    /// let slow: Promise<_> = Promise::spawn(async {
    ///     task::sleep(Duration::from_millis(30)).await;
    ///     Ok(42)
    /// });
    /// let fast = Promise::spawn(async {
    ///     task::sleep(Duration::from_millis(10)).await;
    ///     Ok(55)
    /// });
    /// assert_eq!([slow.clone(), fast.clone()].all().wait(), Ok([42, 55]));
    ///
    /// let failed = Promise::rejected(Error::task("blerg"));
    /// let err = vec![slow, fast, failed].all().wait().unwrap_err();
    /// assert_eq!(err.to_string(), "blerg");
    /// ```
    fn all(self) -> Promise<Self::Output, Self::Error>;
}
