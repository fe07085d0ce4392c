//! Fetch a handful of "mirrors" concurrently and take the fastest answer,
//! giving up if none of them answers in time.

use async_std::task;
use promise_concurrency::future::timeout;
use promise_concurrency::prelude::*;
use promise_concurrency::{Error, Promise};
use std::time::Duration;

fn main() -> Result<(), Error> {
    let latencies = [250, 120, 400];

    let mut attempts: Vec<Promise<String>> = latencies
        .iter()
        .enumerate()
        .map(|(mirror, &millis)| fetch(mirror, millis))
        .collect();
    attempts.push(timeout(Duration::from_millis(200)));

    let fastest = attempts.race().wait()?;
    println!("{fastest}");

    // The slower mirrors are still running; their answers are simply ignored.
    let everything = latencies
        .iter()
        .enumerate()
        .map(|(mirror, &millis)| fetch(mirror, millis))
        .collect::<Vec<_>>()
        .all()
        .then(|res| res.map(|pages| pages.join(", ")));
    println!("{}", everything.wait()?);

    Ok(())
}

fn fetch(mirror: usize, millis: u64) -> Promise<String> {
    Promise::spawn(async move {
        task::sleep(Duration::from_millis(millis)).await;
        Ok(format!("page from mirror {mirror} after {millis}ms"))
    })
}
