//! Utilities to implement the promises of this crate.

mod signal;
mod task;

#[cfg(test)]
mod dummy;

pub(crate) use signal::Signal;
pub(crate) use task::{blocking, detach, observe};

#[cfg(test)]
pub(crate) use dummy::DummyWaker;
