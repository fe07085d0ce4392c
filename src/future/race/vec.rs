use super::Race as RaceTrait;
use crate::utils;
use crate::{Error, Promise};

use async_std::channel;

/// Race a list of promises. Shared by every [`Race`][RaceTrait] impl.
///
/// An empty list rejects with [`Error::EmptyRace`] instead of never
/// completing.
pub(crate) fn race<T, E>(promises: Vec<Promise<T, E>>) -> Promise<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + From<Error> + Send + Sync + 'static,
{
    Promise::spawn(async move {
        if promises.is_empty() {
            return Err(Error::EmptyRace.into());
        }

        // Observers report the index of their promise, never its value: only
        // the first report is read, and the winner's outcome is read from the
        // winner itself.
        let (sender, receiver) = channel::bounded(promises.len());
        for (index, promise) in promises.iter().enumerate() {
            utils::observe(index, promise.done(), sender.clone());
        }
        drop(sender);

        match receiver.recv().await {
            Ok(index) => {
                log::trace!("race won by promise {index} of {}", promises.len());
                promises[index].settled().clone()
            }
            Err(_) => unreachable!("race observers hung up without reporting"),
        }
    })
}

impl<T, E> RaceTrait for Vec<Promise<T, E>>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + From<Error> + Send + Sync + 'static,
{
    type Output = T;
    type Error = E;

    fn race(self) -> Promise<Self::Output, Self::Error> {
        race(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use async_io::Timer;
    use std::time::Duration;

    #[test]
    fn first_to_complete_wins() {
        let slow: Promise<_> = Promise::spawn(async {
            Timer::after(Duration::from_millis(300)).await;
            Ok("slow")
        });
        let fast = Promise::spawn(async {
            Timer::after(Duration::from_millis(10)).await;
            Ok("fast")
        });
        assert_eq!(vec![slow, fast].race().wait(), Ok("fast"));
    }

    #[test]
    fn rejection_can_win() {
        let ok: Promise<u8> = Promise::spawn(futures_lite::future::pending());
        let err = Promise::rejected(Error::task("oh no"));
        assert_eq!(
            vec![ok, err].race().wait().unwrap_err().to_string(),
            "oh no"
        );
    }

    #[test]
    fn empty() {
        let promises: Vec<Promise<u8>> = vec![];
        assert_eq!(promises.race().wait(), Err(Error::EmptyRace));
    }

    #[test]
    fn one_winner_among_many() {
        let promises: Vec<Promise<usize>> = (0..100).map(Promise::resolved).collect();
        let winner = promises.race().wait().unwrap();
        assert!(winner < 100);
    }
}
