//! Transaction inclusion watching.
//!
//! After a proving job yields a transaction hash, the transaction still
//! has to land in a block. This watcher polls the tx-status endpoint at a
//! coarse cadence until the ledger reports `applied` or `failed`. Unlike
//! job failure, a failed transaction aborts the wait with an error that
//! embeds the hash: there is nothing further polling can do with it.

use serde::{Deserialize, Serialize};

use crate::api::gateway::Gateway;
use crate::api::types::{
    TransactionHash, TransactionStatusRequest, TransactionStatusResponse, TxDetails,
};
use crate::error::{Error, Result};
use crate::poll::{poll_until, Poll, PollOutcome, PollSettings};

/// Inclusion status reported by the ledger. A closed set: a status string
/// outside it is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InclusionState {
    /// Not seen in a block yet.
    Pending,
    /// Accepted into a canonical block. Terminal.
    Applied,
    /// Rejected by the ledger. Terminal.
    Failed,
    /// The indexer has no record of the hash yet. Not terminal: freshly
    /// submitted transactions routinely show up as unknown for a while.
    Unknown,
}

impl InclusionState {
    /// Parse a wire status string. Returns `None` for anything outside
    /// the known set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(InclusionState::Pending),
            "applied" => Some(InclusionState::Applied),
            "failed" => Some(InclusionState::Failed),
            "unknown" => Some(InclusionState::Unknown),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, InclusionState::Applied | InclusionState::Failed)
    }
}

/// Proof of inclusion: the hash plus whatever block detail the service
/// attached to the final poll.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InclusionReceipt {
    pub hash: TransactionHash,
    pub details: Option<TxDetails>,
}

/// Poll the tx-status endpoint until `hash` is applied, failed, or the
/// budget in `settings` runs out.
///
/// Returns the receipt on `applied`; `failed` maps to
/// [`Error::TransactionFailed`] and an exhausted budget to
/// [`Error::InclusionTimeout`] so callers can tell a definitive failure
/// from an unknown state.
pub async fn wait_for_inclusion(
    gateway: &Gateway,
    settings: &PollSettings,
    hash: &TransactionHash,
) -> Result<InclusionReceipt> {
    tracing::info!(hash = %hash, "waiting for transaction inclusion");

    let request = TransactionStatusRequest { hash: hash.clone() };

    let outcome = poll_until(settings, || {
        let request = request.clone();
        async move {
            let response: TransactionStatusResponse = gateway.call("tx-status", &request).await?;
            classify(response)
        }
    })
    .await?;

    match outcome {
        PollOutcome::Ready(receipt) => {
            tracing::info!(hash = %hash, "transaction included in a block");
            Ok(receipt)
        }
        PollOutcome::Failed(reason) => Err(Error::TransactionFailed {
            hash: hash.clone(),
            reason,
        }),
        PollOutcome::Exhausted { errors, elapsed } => Err(Error::InclusionTimeout {
            hash: hash.clone(),
            errors,
            elapsed,
        }),
    }
}

fn classify(response: TransactionStatusResponse) -> Result<Poll<InclusionReceipt>> {
    let state =
        InclusionState::parse(&response.status).ok_or_else(|| Error::UnknownTxStatus {
            hash: response.hash.clone(),
            status: response.status.clone(),
        })?;

    match state {
        InclusionState::Applied => Ok(Poll::Ready(InclusionReceipt {
            hash: response.hash,
            details: response.details,
        })),
        InclusionState::Failed => Ok(Poll::Failed(describe_failure(&response))),
        InclusionState::Pending | InclusionState::Unknown => Ok(Poll::Pending),
    }
}

/// Best human-readable account of why a transaction failed: the service's
/// error message if present, else the per-account failure reasons from the
/// block details.
fn describe_failure(response: &TransactionStatusResponse) -> String {
    if let Some(error) = &response.error {
        return error.clone();
    }
    if let Some(details) = &response.details {
        if !details.failures.is_empty() {
            return details
                .failures
                .iter()
                .map(|f| f.failure_reason.as_str())
                .collect::<Vec<_>>()
                .join("; ");
        }
    }
    "transaction failed".to_string()
}
