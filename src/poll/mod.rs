//! Bounded polling against the remote service.
//!
//! # Responsibilities
//! - Repeat a status query until it resolves to a terminal state
//! - Absorb transient faults into an error budget instead of aborting
//! - Enforce a wall-clock deadline so no wait is unbounded
//!
//! # Design Decisions
//! - One primitive, parameterized by a fetch-and-classify closure; the
//!   job poller and the inclusion watcher are thin wrappers over it
//! - "Remote says failed" and "budget ran out" are distinct outcomes:
//!   the first is definitive, the second leaves the true state unknown
//! - Cooperative waits via `tokio::time::sleep`, never a busy loop

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::{sleep, Instant};

use crate::error::Result;

/// Bounds for one polling loop: fixed interval between queries, a ceiling
/// on tolerated transport errors, and an overall wall-clock deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PollSettings {
    /// Pause between consecutive polls, in milliseconds.
    pub interval_ms: u64,

    /// Stop after this many transport errors.
    pub max_errors: u32,

    /// Stop once this much wall-clock time has elapsed.
    pub deadline_secs: u64,
}

impl PollSettings {
    /// Cadence for proving jobs: queue latency is minutes, so poll every
    /// 10 seconds for up to 10 minutes.
    pub fn proof_jobs() -> Self {
        Self {
            interval_ms: 10_000,
            max_errors: 100,
            deadline_secs: 600,
        }
    }

    /// Cadence for block inclusion: confirmation latency is measured in
    /// blocks, so poll every 30 seconds for up to 5 hours.
    pub fn inclusion() -> Self {
        Self {
            interval_ms: 30_000,
            max_errors: 100,
            deadline_secs: 5 * 60 * 60,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_secs(self.deadline_secs)
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self::proof_jobs()
    }
}

/// Classification of a single poll response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll<T> {
    /// Not resolved yet; keep polling.
    Pending,
    /// Terminal success. Never poll this subject again.
    Ready(T),
    /// Terminal failure reported by the service. Never retried: this is a
    /// business outcome, not a transport fault.
    Failed(String),
}

/// Terminal result of a polling loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome<T> {
    /// The subject resolved successfully.
    Ready(T),
    /// The service reported a definitive failure.
    Failed(String),
    /// The error budget or deadline ran out first. The subject may still
    /// resolve server-side; the caller can re-query out of band.
    Exhausted { errors: u32, elapsed: Duration },
}

impl<T> PollOutcome<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, PollOutcome::Ready(_))
    }
}

/// Poll until `fetch` classifies the subject as terminal or the budget in
/// `settings` runs out.
///
/// Transient errors from `fetch` (transport faults, non-2xx responses) are
/// logged and counted against `max_errors`; any other error aborts the
/// loop immediately.
pub async fn poll_until<T, F, Fut>(settings: &PollSettings, mut fetch: F) -> Result<PollOutcome<T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Poll<T>>>,
{
    let started = Instant::now();
    let deadline = settings.deadline();
    let mut errors: u32 = 0;

    loop {
        match fetch().await {
            Ok(Poll::Ready(value)) => return Ok(PollOutcome::Ready(value)),
            Ok(Poll::Failed(reason)) => return Ok(PollOutcome::Failed(reason)),
            Ok(Poll::Pending) => {}
            Err(err) if err.is_transient() => {
                errors += 1;
                tracing::warn!(
                    error = %err,
                    errors,
                    max_errors = settings.max_errors,
                    "poll attempt failed"
                );
                if errors >= settings.max_errors {
                    return Ok(PollOutcome::Exhausted {
                        errors,
                        elapsed: started.elapsed(),
                    });
                }
            }
            Err(err) => return Err(err),
        }

        sleep(settings.interval()).await;

        if started.elapsed() >= deadline {
            return Ok(PollOutcome::Exhausted {
                errors,
                elapsed: started.elapsed(),
            });
        }
    }
}
