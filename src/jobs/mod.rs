//! Proving-job polling.
//!
//! A submitted prove request is processed asynchronously server-side; the
//! client holds only a [`JobHandle`] and polls the result endpoint until
//! the job resolves. Job failure is an expected outcome and is returned as
//! data, not raised; only protocol-level surprises (an unknown status
//! string) abort the wait.

use std::time::Duration;

use crate::api::gateway::Gateway;
use crate::api::types::{JobHandle, JobResultRequest, JobResultResponse, TransactionHash};
use crate::error::{Error, Result};
use crate::poll::{poll_until, Poll, PollOutcome, PollSettings};

/// Status of a proving job as reported by the service. A closed set: a
/// status string outside it is an error, not "pending forever".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Created,
    Pending,
    Started,
    /// The proof was produced and consumed; the transaction was sent.
    Used,
    Failed,
}

impl JobStatus {
    /// Parse a wire status string. Returns `None` for anything outside
    /// the known set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "created" => Some(JobStatus::Created),
            "pending" => Some(JobStatus::Pending),
            "started" => Some(JobStatus::Started),
            "used" => Some(JobStatus::Used),
            "failed" => Some(JobStatus::Failed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Used | JobStatus::Failed)
    }
}

/// Terminal outcome of waiting on a proving job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// One transaction hash per submitted transaction, in input order.
    Proved(Vec<TransactionHash>),
    /// The service reported the job as failed. Definitive; never retried.
    Failed { reason: String },
    /// The poll budget ran out first. The job may still resolve
    /// server-side; distinct from [`JobOutcome::Failed`] on purpose.
    Exhausted { errors: u32, elapsed: Duration },
}

impl JobOutcome {
    /// The proved hashes, if any.
    pub fn hashes(&self) -> Option<&[TransactionHash]> {
        match self {
            JobOutcome::Proved(hashes) => Some(hashes),
            _ => None,
        }
    }
}

/// Poll the result endpoint until the job yields its hash(es), reports
/// failure, or the budget in `settings` runs out.
pub async fn wait_for_proofs(
    gateway: &Gateway,
    settings: &PollSettings,
    handle: &JobHandle,
) -> Result<JobOutcome> {
    tracing::info!(job_id = %handle, "waiting for proving job");

    let request = JobResultRequest {
        job_id: handle.clone(),
    };

    let outcome = poll_until(settings, || {
        let request = request.clone();
        async move {
            let response: JobResultResponse = gateway.call("result", &request).await?;
            classify(&request.job_id, response)
        }
    })
    .await?;

    Ok(match outcome {
        PollOutcome::Ready(hashes) => {
            tracing::info!(job_id = %handle, count = hashes.len(), "proving job succeeded");
            JobOutcome::Proved(hashes)
        }
        PollOutcome::Failed(reason) => {
            tracing::warn!(job_id = %handle, %reason, "proving job failed");
            JobOutcome::Failed { reason }
        }
        PollOutcome::Exhausted { errors, elapsed } => {
            tracing::warn!(job_id = %handle, errors, ?elapsed, "proving job unresolved");
            JobOutcome::Exhausted { errors, elapsed }
        }
    })
}

/// Classify one job-result response. A populated hash field wins over the
/// status string; a terminal status without a hash keeps the poll alive
/// (the hash lands shortly after the status flips).
fn classify(handle: &JobHandle, response: JobResultResponse) -> Result<Poll<Vec<TransactionHash>>> {
    if let Some(hashes) = response.hashes {
        if !hashes.is_empty() {
            return Ok(Poll::Ready(hashes));
        }
    }
    if let Some(hash) = response.hash {
        return Ok(Poll::Ready(vec![hash]));
    }

    let status = JobStatus::parse(&response.job_status).ok_or_else(|| Error::UnknownJobStatus {
        job_id: handle.to_string(),
        status: response.job_status.clone(),
    })?;

    if status == JobStatus::Failed {
        Ok(Poll::Failed(
            response
                .error
                .unwrap_or_else(|| "proving job failed".to_string()),
        ))
    } else {
        Ok(Poll::Pending)
    }
}
