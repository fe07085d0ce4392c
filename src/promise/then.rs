use super::Promise;
use crate::utils;
use crate::Error;

impl<T, E> Promise<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + From<Error> + Send + Sync + 'static,
{
    /// Chain a transformation onto this promise.
    ///
    /// Returns a new promise whose task waits for this one to complete, then
    /// calls `f` with its outcome and completes with whatever `f` returns.
    /// `f` sees errors too, and decides whether to pass them on, replace
    /// them, or recover from them. This call never blocks.
    ///
    /// `f` runs on a thread set aside for blocking work, so it may sleep or
    /// [`wait`][Promise::wait] on other promises without holding up the
    /// rest. If `f` panics, the chained promise rejects with
    /// [`Error::Panicked`].
    ///
    /// A promise can be chained onto any number of times; every chained
    /// promise sees the same outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use promise_concurrency::{Error, Promise};
    ///
    /// let forty_two: Promise<_> = Promise::spawn(async { Ok(42) });
    /// let bigger = forty_two.then(|res| res.map(|n| n * 10));
    /// let recovered = Promise::<u32>::rejected(Error::DeadlineExceeded).then(|res| match res {
    ///     Err(err) if err.is_deadline_exceeded() => Ok(0),
    ///     res => res,
    /// });
    ///
    /// assert_eq!(bigger.wait(), Ok(420));
    /// assert_eq!(recovered.wait(), Ok(0));
    /// ```
    pub fn then<U, F>(&self, f: F) -> Promise<U, E>
    where
        U: Send + Sync + 'static,
        F: FnOnce(Result<T, E>) -> Result<U, E> + Send + 'static,
    {
        let parent = self.clone();
        Promise::spawn(async move {
            let outcome = parent.await;
            utils::blocking(move || f(outcome)).await
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_io::Timer;

    #[test]
    fn chain_runs_in_order() {
        let stage = Arc::new(AtomicUsize::new(0));
        let (s0, s1, s2) = (stage.clone(), stage.clone(), stage.clone());

        let p: Promise<u32> = Promise::spawn(async move {
            assert_eq!(s0.fetch_add(1, Ordering::SeqCst), 0);
            Ok(42)
        });
        let p = p
            .then(move |res| {
                assert_eq!(s1.fetch_add(1, Ordering::SeqCst), 1);
                res.map(|n| n + 10)
            })
            .then(move |res| {
                assert_eq!(s2.fetch_add(1, Ordering::SeqCst), 2);
                res.map(|n| n + 100)
            });

        assert_eq!(p.wait(), Ok(152));
        assert_eq!(stage.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn errors_reach_the_closure() {
        let p = Promise::<u32>::rejected(Error::task("something went wrong"))
            .then(|res| match res {
                Ok(_) => Ok("ok"),
                Err(err) => Err(Error::task(format!("saw: {err}"))),
            });
        assert_eq!(
            p.wait().unwrap_err().to_string(),
            "saw: something went wrong"
        );
    }

    #[test]
    fn panicking_closure_rejects() {
        let p = Promise::<u32>::resolved(1).then(|_| -> Result<u32, Error> { panic!("oh no") });
        assert_eq!(p.wait(), Err(Error::Panicked));
    }

    #[test]
    fn closure_may_wait_on_other_promises() {
        let other: Promise<u32> = Promise::spawn(async {
            Timer::after(Duration::from_millis(50)).await;
            Ok(5)
        });
        let p = Promise::<u32>::resolved(1).then(move |res| Ok(res? + other.wait()?));
        assert_eq!(p.wait(), Ok(6));
    }

    #[test]
    fn blocked_closures_leave_tasks_running() {
        let gate: Promise<()> = Promise::spawn(async {
            Timer::after(Duration::from_secs(1)).await;
            Ok(())
        });
        let blocked: Vec<Promise<()>> = (0..32)
            .map(|_| {
                let gate = gate.clone();
                Promise::<()>::resolved(()).then(move |_| gate.wait())
            })
            .collect();

        // Every closure is parked on `gate`, yet plain tasks still get to run.
        let quick: Promise<u32> = Promise::spawn(async { Ok(5) });
        assert_eq!(quick.wait(), Ok(5));
        assert!(!gate.is_done());

        assert_eq!(crate::future::all(blocked).wait(), Ok(vec![(); 32]));
    }
}
