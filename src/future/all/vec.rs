use super::All as AllTrait;
use crate::utils;
use crate::{Error, Promise};

use async_std::channel;

/// Wait on a list of promises. Shared by every [`All`][AllTrait] impl.
pub(crate) fn all<T, E>(promises: Vec<Promise<T, E>>) -> Promise<Vec<T>, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + From<Error> + Send + Sync + 'static,
{
    Promise::spawn(async move {
        let len = promises.len();
        if len == 0 {
            return Ok(Vec::new());
        }

        let (sender, receiver) = channel::bounded(len);
        for (index, promise) in promises.iter().enumerate() {
            utils::observe(index, promise.done(), sender.clone());
        }
        drop(sender);

        // Indexes arrive in completion order; values are slotted back into
        // input order.
        let mut items: Vec<Option<T>> = vec![None; len];
        for _ in 0..len {
            let index = match receiver.recv().await {
                Ok(index) => index,
                Err(_) => unreachable!("all observers hung up without reporting"),
            };
            match promises[index].settled() {
                Ok(value) => items[index] = Some(value.clone()),
                Err(err) => {
                    log::trace!("all rejected by promise {index} of {len}");
                    return Err(err.clone());
                }
            }
        }

        debug_assert!(items.iter().all(Option::is_some));
        Ok(items.into_iter().flatten().collect())
    })
}

impl<T, E> AllTrait for Vec<Promise<T, E>>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + From<Error> + Send + Sync + 'static,
{
    type Output = Vec<T>;
    type Error = E;

    fn all(self) -> Promise<Self::Output, Self::Error> {
        all(self)
    }
}
