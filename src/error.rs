//! Crate-wide error taxonomy.
//!
//! # Responsibilities
//! - Distinguish transport faults (retryable by the pollers) from remote
//!   business failures (never retried) and budget exhaustion
//! - Carry enough context (hash, job id, confirmed receipts) for callers
//!   to reconcile partial batches
//!
//! # Design Decisions
//! - Transport faults and non-2xx API responses both count against the
//!   poll error budget; everything else aborts immediately
//! - Unrecognized status strings are loud errors, never "pending forever"

use std::time::Duration;
use thiserror::Error;

use crate::api::types::TransactionHash;
use crate::config::ConfigError;
use crate::lifecycle::SignError;
use crate::watch::InclusionReceipt;

/// Errors produced by the client.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure talking to the service.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid or rejected client configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The external signer refused or failed to sign a payload.
    #[error(transparent)]
    Sign(#[from] SignError),

    /// A job-status response carried a status string this client does not know.
    #[error("unrecognized status {status:?} for job {job_id}")]
    UnknownJobStatus { job_id: String, status: String },

    /// A tx-status response carried a status string this client does not know.
    #[error("unrecognized status {status:?} for transaction {hash}")]
    UnknownTxStatus { hash: TransactionHash, status: String },

    /// The proving job reported a definitive failure.
    #[error("proving job {job_id} failed: {reason}")]
    JobFailed { job_id: String, reason: String },

    /// The job poll budget ran out with the job still unresolved. The job
    /// may yet complete server-side; callers can re-query out of band.
    #[error("proving job {job_id} unresolved after {elapsed:?} ({errors} transport errors)")]
    JobUnresolved {
        job_id: String,
        errors: u32,
        elapsed: Duration,
    },

    /// A batch proving job returned a different number of hashes than
    /// transactions submitted.
    #[error("job {job_id} returned {got} transaction hashes, expected {expected}")]
    HashCountMismatch {
        job_id: String,
        expected: usize,
        got: usize,
    },

    /// The transaction failed on-chain. Not retryable.
    #[error("transaction {hash} failed: {reason}")]
    TransactionFailed {
        hash: TransactionHash,
        reason: String,
    },

    /// The inclusion poll budget ran out with the transaction still
    /// unconfirmed. Distinct from [`Error::TransactionFailed`]: the true
    /// state remains unknown.
    #[error("transaction {hash} not included after {elapsed:?} ({errors} transport errors)")]
    InclusionTimeout {
        hash: TransactionHash,
        errors: u32,
        elapsed: Duration,
    },

    /// A batch stopped partway through confirmation. Carries the receipts
    /// confirmed before the halt; reconciliation is left to the caller.
    #[error("batch halted after {confirmed_count} of {total} confirmations: {source}", confirmed_count = .confirmed.len())]
    BatchHalted {
        confirmed: Vec<InclusionReceipt>,
        total: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Whether a polling loop should absorb this error into its error
    /// budget and keep going. Mirrors how the service is actually flaky:
    /// transient network faults and gateway-side 5xx/4xx blips recover on
    /// a later poll, while everything else is a programming or protocol
    /// error that retrying cannot fix.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Api { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
