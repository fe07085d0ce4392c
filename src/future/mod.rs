//! Composition of promises.
//!
//! Every operation here is built on the public contract of [`Promise`]: it
//! spawns a new promise whose task watches the inputs' completion signals and
//! reads their outcomes. None of them cancel anything; inputs that are no
//! longer needed keep running in the background.
//!
//! # Examples
//!
//! ```
//! use promise_concurrency::future::{all, race, timeout};
//! use promise_concurrency::{Error, Promise};
//! use std::time::Duration;
//!
//! let values = all((1..=3).map(Promise::<u32>::resolved));
//! assert_eq!(values.wait(), Ok(vec![1, 2, 3]));
//!
//! let never: Promise<u32> = Promise::spawn(futures_lite::future::pending());
//! let bounded = race([never, timeout(Duration::from_millis(10))]);
//! assert_eq!(bounded.wait(), Err(Error::DeadlineExceeded));
//! ```
//!
//! # Operations
//!
//! | Name      | Resolves with | When does it complete?                        |
//! | ---       | ---           | ---                                           |
//! | `Race`    | `T`           | As soon as any input completes                |
//! | `All`     | `[T]`         | When all inputs resolve, or on the first error |
//! | `timeout` | never         | Rejects once the duration has passed          |

pub use all::All;
pub use race::Race;
pub use timeout::timeout;

use crate::{Error, Promise};

mod all;
mod race;
mod timeout;

/// Wait for the first of `promises` to complete.
///
/// See [`Race`] for details.
pub fn race<I, T, E>(promises: I) -> Promise<T, E>
where
    I: IntoIterator<Item = Promise<T, E>>,
    T: Clone + Send + Sync + 'static,
    E: Clone + From<Error> + Send + Sync + 'static,
{
    race::vec::race(promises.into_iter().collect())
}

/// Wait for all of `promises` to resolve, or reject on the first error.
///
/// See [`All`] for details.
pub fn all<I, T, E>(promises: I) -> Promise<Vec<T>, E>
where
    I: IntoIterator<Item = Promise<T, E>>,
    T: Clone + Send + Sync + 'static,
    E: Clone + From<Error> + Send + Sync + 'static,
{
    all::vec::all(promises.into_iter().collect())
}
