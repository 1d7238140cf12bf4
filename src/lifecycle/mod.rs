//! Transaction lifecycle orchestration.
//!
//! # Responsibilities
//! - Sequence build → sign → prove → poll-job → poll-inclusion
//! - Batch submissions: one hash per input, confirmed sequentially
//! - Surface partial-batch progress to the caller; no compensation
//!
//! # Design Decisions
//! - Signing is delegated to a [`Signer`] the caller provides; the client
//!   never holds key material
//! - One logical thread of control per workflow; all suspension points
//!   are awaits, so independent workflows interleave under the runtime
//! - A batch halted at hash *k* returns the first *k-1* receipts inside
//!   the error; reconciliation is the caller's concern

use thiserror::Error;

use crate::api::client::TokenClient;
use crate::api::types::{BuiltTransaction, SignedTransaction, SignerPayload, TransactionHash};
use crate::error::{Error, Result};
use crate::jobs::JobOutcome;
use crate::watch::InclusionReceipt;

/// Signing failure reported by the external signer.
#[derive(Debug, Clone, Error)]
#[error("signer error: {0}")]
pub struct SignError(pub String);

/// External signing collaborator. Implementations hold the key material;
/// the orchestrator only passes payloads through.
pub trait Signer: Send + Sync {
    /// Sign the canonical payload, returning the serialized signed data
    /// the prove endpoint expects.
    fn sign(&self, payload: &SignerPayload) -> std::result::Result<String, SignError>;
}

fn sign_one(tx: BuiltTransaction, signer: &dyn Signer) -> Result<SignedTransaction> {
    let signed_data = signer.sign(&tx.payload)?;
    Ok(SignedTransaction { tx, signed_data })
}

impl TokenClient {
    /// Run one built transaction through sign → prove → poll → confirm.
    pub async fn execute(
        &self,
        built: BuiltTransaction,
        signer: &dyn Signer,
    ) -> Result<InclusionReceipt> {
        let signed = sign_one(built, signer)?;
        let handle = self.prove(&signed).await?;
        let mut hashes = self.proved_hashes(&handle, 1).await?;
        // Length checked by proved_hashes.
        let hash = hashes.remove(0);
        self.wait_for_inclusion(&hash).await
    }

    /// Run an ordered batch through sign → prove (as one job) → poll →
    /// confirm each hash sequentially.
    ///
    /// The batch is complete only when every hash is individually
    /// confirmed. If confirmation fails or times out partway through, the
    /// receipts already confirmed come back inside
    /// [`Error::BatchHalted`].
    pub async fn execute_batch(
        &self,
        built: Vec<BuiltTransaction>,
        signer: &dyn Signer,
    ) -> Result<Vec<InclusionReceipt>> {
        if built.is_empty() {
            return Ok(Vec::new());
        }

        let expected = built.len();
        let mut signed = Vec::with_capacity(expected);
        for tx in built {
            signed.push(sign_one(tx, signer)?);
        }

        let handle = self.prove_batch(signed).await?;
        let hashes = self.proved_hashes(&handle, expected).await?;

        let mut confirmed = Vec::with_capacity(expected);
        for hash in &hashes {
            match self.wait_for_inclusion(hash).await {
                Ok(receipt) => confirmed.push(receipt),
                Err(source) => {
                    tracing::warn!(
                        hash = %hash,
                        confirmed = confirmed.len(),
                        total = expected,
                        "batch confirmation halted"
                    );
                    return Err(Error::BatchHalted {
                        confirmed,
                        total: expected,
                        source: Box::new(source),
                    });
                }
            }
        }

        Ok(confirmed)
    }

    /// Wait for the job and insist on exactly `expected` hashes, mapping
    /// the negative outcomes onto their error variants.
    async fn proved_hashes(
        &self,
        handle: &crate::api::types::JobHandle,
        expected: usize,
    ) -> Result<Vec<TransactionHash>> {
        match self.wait_for_proofs(handle).await? {
            JobOutcome::Proved(hashes) => {
                if hashes.len() != expected {
                    return Err(Error::HashCountMismatch {
                        job_id: handle.to_string(),
                        expected,
                        got: hashes.len(),
                    });
                }
                Ok(hashes)
            }
            JobOutcome::Failed { reason } => Err(Error::JobFailed {
                job_id: handle.to_string(),
                reason,
            }),
            JobOutcome::Exhausted { errors, elapsed } => Err(Error::JobUnresolved {
                job_id: handle.to_string(),
                errors,
                elapsed,
            }),
        }
    }
}
