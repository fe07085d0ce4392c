//! The promise primitive.
//!
//! A [`Promise`] is a handle to the outcome of a unit of work which is
//! produced at most once. The work starts running the moment the promise is
//! created; any number of consumers can then wait for it, chain onto it, or
//! watch its completion signal, and all of them observe the same outcome.
//!
//! # Examples
//!
//! ```
//! use promise_concurrency::{Error, Promise};
//!
//! let greeting = Promise::<_, Error>::spawn(async { Ok("Hello") })
//!     .then(|res| res.map(|s| format!("{s} World")))
//!     .then(|res| res.map(|s| s + "!"));
//!
//! assert_eq!(greeting.wait(), Ok("Hello World!".to_owned()));
//! ```

use core::any::type_name;
use core::fmt;
use core::future::Future;
use std::sync::{Arc, OnceLock};

use crate::utils::{self, Signal};
use crate::Error;

mod done;
mod into_future;
mod then;

pub use done::Done;
pub use into_future::Await;

/// A single-assignment, thread-safe handle to the outcome of a unit of work.
///
/// Cloning a promise is cheap and yields another handle onto the same
/// outcome. See the [module documentation][self] for more.
///
/// # Cancellation
///
/// Dropping every handle to a promise does not stop the work behind it. A
/// task keeps running until it finishes on its own, and any side effects it
/// has happen whether or not anyone is still waiting. Units of work should
/// hand their results back through the promise rather than write to state
/// shared with the caller.
pub struct Promise<T, E = Error> {
    inner: Arc<Inner<T, E>>,
}

struct Inner<T, E> {
    outcome: OnceLock<Result<T, E>>,
    signal: Arc<Signal>,
}

impl<T, E> Promise<T, E> {
    /// Create a promise which has already resolved with `value`.
    ///
    /// No task is scheduled.
    ///
    /// # Examples
    ///
    /// ```
    /// use promise_concurrency::Promise;
    ///
    /// let p: Promise<_> = Promise::resolved(42);
    /// assert!(p.is_done());
    /// assert_eq!(p.wait(), Ok(42));
    /// ```
    pub fn resolved(value: T) -> Self {
        Self::completed(Ok(value))
    }

    /// Create a promise which has already rejected with `err`.
    ///
    /// No task is scheduled. Since there is no value to infer it from, the
    /// value type usually has to be spelled out.
    ///
    /// # Examples
    ///
    /// ```
    /// use promise_concurrency::{Error, Promise};
    ///
    /// let p = Promise::<String>::rejected(Error::task("something went wrong"));
    /// assert_eq!(p.wait().unwrap_err().to_string(), "something went wrong");
    /// ```
    pub fn rejected(err: E) -> Self {
        Self::completed(Err(err))
    }

    fn completed(outcome: Result<T, E>) -> Self {
        Self {
            inner: Arc::new(Inner {
                outcome: OnceLock::from(outcome),
                signal: Signal::fired(),
            }),
        }
    }

    /// Create a promise which has not completed yet.
    pub(crate) fn pending() -> Self {
        Self {
            inner: Arc::new(Inner {
                outcome: OnceLock::new(),
                signal: Arc::new(Signal::new()),
            }),
        }
    }

    /// Complete the promise with `outcome`.
    ///
    /// Only the first call has any effect; later calls leave the stored
    /// outcome alone and return `false`.
    pub(crate) fn complete(&self, outcome: Result<T, E>) -> bool {
        match self.inner.outcome.set(outcome) {
            Ok(()) => {
                self.inner.signal.fire();
                true
            }
            Err(_) => {
                log::debug!("{self:?} already completed, ignoring outcome");
                false
            }
        }
    }

    /// Returns a handle to the completion signal of this promise.
    ///
    /// Every call returns a handle onto the same signal. Use it to wait for
    /// the promise together with something else, and read the outcome with
    /// [`wait`][Promise::wait] or [`outcome`][Promise::outcome] once it fires.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures_lite::future;
    /// use promise_concurrency::{Error, Promise};
    ///
    /// let work: Promise<u32> = Promise::spawn(future::pending());
    /// let cancel: Promise<()> = Promise::resolved(());
    ///
    /// let cancelled = future::block_on(future::or(
    ///     async { work.done().await; false },
    ///     async { cancel.done().await; true },
    /// ));
    /// assert!(cancelled);
    /// assert!(!work.is_done());
    /// ```
    pub fn done(&self) -> Done {
        Done::new(self.inner.signal.clone())
    }

    /// Returns `true` if the promise has resolved or rejected.
    pub fn is_done(&self) -> bool {
        self.inner.signal.is_fired()
    }

    /// Returns the outcome if the promise has completed, without waiting.
    pub fn outcome(&self) -> Option<&Result<T, E>> {
        // The outcome is stored before the signal fires, so this never sees
        // a fired signal without an outcome.
        self.inner.outcome.get()
    }

    /// The outcome of a promise whose signal is known to have fired.
    pub(crate) fn settled(&self) -> &Result<T, E> {
        match self.outcome() {
            Some(outcome) => outcome,
            None => unreachable!("completion signal fired before the outcome was stored"),
        }
    }
}

impl<T, E> Promise<T, E>
where
    T: Send + Sync + 'static,
    E: From<Error> + Send + Sync + 'static,
{
    /// Schedule `future` on its own task and return a promise for its
    /// output.
    ///
    /// The future starts running immediately and this call never blocks.
    /// If the future panics, the promise rejects with [`Error::Panicked`].
    ///
    /// # Examples
    ///
    /// ```
    /// use promise_concurrency::Promise;
    ///
    /// let p: Promise<_> = Promise::spawn(async { Ok(1 + 1) });
    /// assert_eq!(p.wait(), Ok(2));
    /// ```
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let promise = Self::pending();
        let completer = promise.clone();
        log::trace!("spawning {promise:?}");
        utils::detach(future, move |outcome| {
            completer.complete(outcome);
            log::trace!("{completer:?} completed");
        });
        promise
    }

    /// Run the blocking closure `f` on a thread set aside for blocking work
    /// and return a promise for its result.
    ///
    /// # Examples
    ///
    /// ```
    /// use promise_concurrency::Promise;
    ///
    /// let p: Promise<_> = Promise::from_fn(|| {
    ///     std::thread::sleep(std::time::Duration::from_millis(10));
    ///     Ok("Hello world")
    /// });
    /// assert_eq!(p.wait(), Ok("Hello world"));
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
    {
        Self::spawn(utils::blocking(f))
    }
}

impl<T, E> Promise<T, E>
where
    T: Clone,
    E: Clone,
{
    /// Block the current thread until the promise completes and return its
    /// outcome.
    ///
    /// Every call, from any thread, returns the same outcome. There is no
    /// built-in timeout: race the promise against
    /// [`timeout`][crate::future::timeout] to bound the wait. Inside async
    /// code, `.await` the promise instead.
    pub fn wait(&self) -> Result<T, E> {
        self.done().wait();
        self.settled().clone()
    }
}

impl<T, E> Clone for Promise<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Promise<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_done() { "done" } else { "pending" };
        write!(f, "Promise<{}>({state})", type_name::<T>())
    }
}
