// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fixed-interval readiness polling with a wall-clock deadline.

use crate::error::Result;
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{error, warn};

/// Outcome of a polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The condition reported ready before the deadline
    Ready,
    /// The deadline elapsed without the condition reporting ready
    TimedOut,
}

/// Poll `condition` every `interval` until it returns ready or `deadline` elapses.
///
/// The first check happens one interval after the call. A condition error is
/// logged and treated as "not yet ready"; only the deadline ends the loop.
pub async fn poll_until<F, Fut>(
    what: &str,
    interval: Duration,
    deadline: Duration,
    mut condition: F,
) -> PollOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let start = Instant::now();

    loop {
        sleep(interval).await;

        match condition().await {
            Ok(true) => return PollOutcome::Ready,
            Ok(false) => {}
            Err(err) => error!("error during get {}: {}", what, err),
        }

        if start.elapsed() >= deadline {
            warn!(
                "{} did not become ready within {}s",
                what,
                deadline.as_secs()
            );
            return PollOutcome::TimedOut;
        }
    }
}
