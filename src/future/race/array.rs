use super::Race as RaceTrait;
use crate::{Error, Promise};

impl<T, E, const N: usize> RaceTrait for [Promise<T, E>; N]
where
    T: Clone + Send + Sync + 'static,
    E: Clone + From<Error> + Send + Sync + 'static,
{
    type Output = T;
    type Error = E;

    fn race(self) -> Promise<Self::Output, Self::Error> {
        super::vec::race(Vec::from(self))
    }
}
