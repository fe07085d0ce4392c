//! Single-assignment, thread-safe promises.
//!
//! A [`Promise`] starts its unit of work the moment it is created, and hands
//! the outcome to any number of consumers later on. Consumers can block on
//! it, `.await` it, chain onto it, or watch its completion signal; the work
//! itself runs exactly once and every consumer sees the same outcome.
//!
//! # Operations
//!
//! This library provides the following operations:
//!
//! - [`Promise::spawn`] / [`Promise::from_fn`]: Run a unit of work on its own task.
//! - [`Promise::resolved`] / [`Promise::rejected`]: Create an already completed promise.
//! - [`Promise::wait`] / `.await`: Wait for the outcome of a promise.
//! - [`Promise::then`]: Chain a transformation onto a promise.
//! - [`Promise::done`]: Watch the completion signal, e.g. alongside a cancellation signal.
//! - [`future::Race`]: Wait for the first promise to complete.
//! - [`future::All`]: Wait for all promises to resolve, or reject early on error.
//! - [`future::timeout`]: Reject once a duration has passed.
//!
//! # Examples
//!
//! Launch work now, collect the results later:
//!
//! ```rust
//! use promise_concurrency::prelude::*;
//! use promise_concurrency::Promise;
//!
//! let squares: Vec<Promise<u64>> = (1..=4)
//!     .map(|n| Promise::spawn(async move { Ok(n * n) }))
//!     .collect();
//!
//! // <do other work concurrently>
//!
//! assert_eq!(squares.all().wait(), Ok(vec![1, 4, 9, 16]));
//! ```
//!
//! Bound a slow operation with a deadline:
//!
//! ```rust
//! use promise_concurrency::future::timeout;
//! use promise_concurrency::prelude::*;
//! use promise_concurrency::{Error, Promise};
//! use std::time::Duration;
//!
//! # futures_lite::future::block_on(async {
//! let slow: Promise<&str> = Promise::spawn(async {
//!     async_std::task::sleep(Duration::from_secs(1)).await;
//!     Ok("done")
//! });
//! let res = [slow, timeout(Duration::from_millis(10))].race().await;
//! assert_eq!(res, Err(Error::DeadlineExceeded));
//! # });
//! ```
//!
//! # Limitations
//!
//! There is no way to cancel the work behind a promise. When a promise loses
//! a race, or is simply dropped, its task keeps running until it finishes on
//! its own, and any side effects it has still take place. Units of work
//! should report their results through the promise instead of writing to
//! state shared with the caller.
//!
//! Tasks run on the `async-std` runtime, which starts on first use.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod error;
mod promise;
mod utils;

/// The promise concurrency prelude.
pub mod prelude {
    pub use super::future::All as _;
    pub use super::future::Race as _;
}

pub mod future;

pub use error::Error;
pub use promise::{Await, Done, Promise};
