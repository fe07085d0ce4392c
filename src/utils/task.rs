use core::future::Future;
use std::panic::{self, AssertUnwindSafe};

use async_std::channel::Sender;
use async_std::task;
use futures_lite::FutureExt;

use crate::promise::Done;
use crate::Error;

/// Run `future` on its own task, handing its output to `complete`.
///
/// A panic inside `future` is caught at the task boundary and reported as
/// [`Error::Panicked`], so a promise never stays pending because its work
/// blew up.
pub(crate) fn detach<F, T, E, C>(future: F, complete: C)
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: From<Error> + Send + 'static,
    C: FnOnce(Result<T, E>) + Send + 'static,
{
    task::spawn(async move {
        let outcome = match AssertUnwindSafe(future).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(_) => {
                log::warn!("promise task panicked, rejecting");
                Err(Error::Panicked.into())
            }
        };
        complete(outcome);
    });
}

/// Run the blocking closure `f` on the blocking thread pool and return its
/// result.
///
/// Closures handed to us may sleep or wait on other promises, so they never
/// run on an executor thread. A panic inside `f` is reported as
/// [`Error::Panicked`].
pub(crate) async fn blocking<F, T, E>(f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: From<Error> + Send + 'static,
{
    // Catch on the blocking thread so the panic reaches us as a value.
    match task::spawn_blocking(move || panic::catch_unwind(AssertUnwindSafe(f))).await {
        Ok(outcome) => outcome,
        Err(_) => {
            log::warn!("blocking promise task panicked, rejecting");
            Err(Error::Panicked.into())
        }
    }
}

/// Wait for `done` and report `index` on `sender`.
///
/// The channel is sized so a report never blocks. Once the receiving side has
/// what it needs it drops the receiver, and late reports are discarded.
pub(crate) fn observe(index: usize, done: Done, sender: Sender<usize>) {
    task::spawn(async move {
        done.await;
        let _ = sender.send(index).await;
    });
}
