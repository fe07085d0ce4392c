use super::All as AllTrait;
use crate::{Error, Promise};

impl<T, E, const N: usize> AllTrait for [Promise<T, E>; N]
where
    T: Clone + Send + Sync + 'static,
    E: Clone + From<Error> + Send + Sync + 'static,
{
    type Output = [T; N];
    type Error = E;

    fn all(self) -> Promise<Self::Output, Self::Error> {
        super::vec::all(Vec::from(self)).then(|res| {
            res.map(|items| match <[T; N]>::try_from(items) {
                Ok(items) => items,
                Err(_) => unreachable!("all resolved with the wrong number of values"),
            })
        })
    }
}
