use std::time::{Duration, Instant};

use async_io::Timer;

use crate::{Error, Promise};

/// Returns a promise which rejects with [`Error::DeadlineExceeded`] once
/// `duration` has passed.
///
/// The clock starts when this function is called. A duration too large to
/// represent as a deadline never elapses.
///
/// Race the returned promise against other promises to bound how long to
/// wait for them. Note that winning the race does not stop the other work:
/// a timed-out unit of work keeps running, and any side effects it has
/// still happen later on.
///
/// # Examples
///
/// ```
/// use promise_concurrency::future::timeout;
/// use promise_concurrency::{Error, Promise};
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let deadline: Promise<u32> = timeout(Duration::from_millis(50));
/// assert_eq!(deadline.wait(), Err(Error::DeadlineExceeded));
/// assert!(start.elapsed() >= Duration::from_millis(50));
/// ```
pub fn timeout<T, E>(duration: Duration) -> Promise<T, E>
where
    T: Send + Sync + 'static,
    E: From<Error> + Send + Sync + 'static,
{
    let deadline = Instant::now().checked_add(duration);
    Promise::spawn(async move {
        match deadline {
            Some(deadline) => Timer::at(deadline).await,
            None => Timer::never().await,
        };
        Err(Error::DeadlineExceeded.into())
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_after_duration() {
        let start = Instant::now();
        let p: Promise<u32> = timeout(Duration::from_millis(100));
        assert!(!p.is_done());
        assert_eq!(p.wait(), Err(Error::DeadlineExceeded));
        assert!(start.elapsed() >= Duration::from_millis(100));
    }

    #[test]
    fn measured_from_creation() {
        let p: Promise<u32> = timeout(Duration::from_millis(50));
        std::thread::sleep(Duration::from_millis(100));
        let start = Instant::now();
        assert_eq!(p.wait(), Err(Error::DeadlineExceeded));
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn unrepresentable_duration_never_fires() {
        let never: Promise<u32> = timeout(Duration::MAX);
        let res = crate::future::race([never.clone(), Promise::resolved(1)]).wait();
        assert_eq!(res, Ok(1));

        std::thread::sleep(Duration::from_millis(50));
        assert!(!never.is_done());
        assert_eq!(never.outcome(), None);
    }

    #[test]
    fn into_io_error() {
        let p: Promise<u32, std::io::Error> = timeout(Duration::from_millis(1));
        futures_lite::future::block_on(p.done());
        match p.outcome() {
            Some(Err(err)) => assert_eq!(err.kind(), std::io::ErrorKind::TimedOut),
            _ => panic!("expected a timed out error"),
        }
    }
}
