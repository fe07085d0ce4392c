use std::io;
use std::sync::Arc;

/// The error type of promises created by this crate.
///
/// Apart from [`Error::Task`], every variant originates inside the crate.
/// The type is cheap to clone so every reader of a rejected promise can
/// receive its own copy.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Returned by [`timeout`][crate::future::timeout] once its deadline has
    /// passed.
    #[error("deadline exceeded")]
    DeadlineExceeded,
    /// The unit of work behind the promise panicked.
    #[error("promise task panicked")]
    Panicked,
    /// [`race`][crate::future::race] was called without any promises.
    #[error("cannot race an empty set of promises")]
    EmptyRace,
    /// An error reported by the unit of work itself.
    #[error(transparent)]
    Task(Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an error reported by a unit of work.
    ///
    /// # Examples
    ///
    /// ```
    /// use promise_concurrency::Error;
    ///
    /// let err = Error::task("connection reset");
    /// assert_eq!(err.to_string(), "connection reset");
    /// ```
    pub fn task<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Task(Arc::from(err.into()))
    }

    /// Returns `true` if this is [`Error::DeadlineExceeded`].
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, Error::DeadlineExceeded)
    }
}

/// Task errors compare by identity: two `Error::Task` values are equal only
/// if they are clones of the same error.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::DeadlineExceeded, Error::DeadlineExceeded)
            | (Error::Panicked, Error::Panicked)
            | (Error::EmptyRace, Error::EmptyRace) => true,
            (Error::Task(a), Error::Task(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::task(err)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::DeadlineExceeded => io::Error::new(io::ErrorKind::TimedOut, err),
            Error::EmptyRace => io::Error::new(io::ErrorKind::InvalidInput, err),
            err => io::Error::new(io::ErrorKind::Other, err),
        }
    }
}
