//! Promises run on their own runtime, so they can be awaited from any
//! executor.

use promise_concurrency::future::timeout;
use promise_concurrency::prelude::*;
use promise_concurrency::{Error, Promise};
use tokio::time::{sleep, Duration};

#[tokio::test]
async fn await_from_tokio() {
    let p: Promise<_> = Promise::spawn(async { Ok(42) });
    assert_eq!(p.await, Ok(42));
}

#[tokio::test]
async fn race_from_tokio() {
    let slow: Promise<u32> = Promise::spawn(futures_lite::future::pending());
    let res = vec![slow, timeout(Duration::from_millis(20))].race().await;
    assert_eq!(res, Err(Error::DeadlineExceeded));
}

#[tokio::test]
async fn done_in_select() {
    let p: Promise<u32> = timeout(Duration::from_millis(10));
    tokio::select! {
        _ = p.done() => {}
        _ = sleep(Duration::from_secs(5)) => panic!("promise did not complete"),
    }
    assert_eq!(p.outcome(), Some(&Err(Error::DeadlineExceeded)));
}

#[test]
fn fused_in_futures_select() {
    use futures::future::FusedFuture;
    use futures::{executor::block_on, select};
    use std::future::IntoFuture;

    let work: Promise<u32> = Promise::spawn(futures_lite::future::pending());
    let deadline: Promise<u32> = timeout(Duration::from_millis(10));

    let mut work_done = work.done();
    let mut res = deadline.into_future();
    let winner = block_on(async {
        select! {
            _ = work_done => None,
            out = res => Some(out),
        }
    });
    assert_eq!(winner, Some(Err(Error::DeadlineExceeded)));
    assert!(res.is_terminated());
    assert!(!work_done.is_terminated());
}
