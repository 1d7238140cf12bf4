//! Wire types for the service endpoints.
//!
//! Everything here is plain data marshalling: request bodies the client
//! sends and response payloads the service returns, camelCase on the wire.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Opaque identifier of an accepted proving job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobHandle {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for JobHandle {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for JobHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a submitted transaction on the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TransactionHash(String);

impl TransactionHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TransactionHash {
    fn from(hash: String) -> Self {
        Self(hash)
    }
}

impl From<&str> for TransactionHash {
    fn from(hash: &str) -> Self {
        Self(hash.to_string())
    }
}

impl Display for TransactionHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fee payer block inside a signer payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeePayer {
    pub fee: u64,
    #[serde(default)]
    pub memo: String,
}

/// The canonical payload an external signer signs. Produced by the build
/// endpoints; the client never inspects or alters it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerPayload {
    pub nonce: u64,
    pub transaction: String,
    pub only_sign: bool,
    pub fee_payer: FeePayer,
}

/// An unsigned transaction returned by any of the build endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuiltTransaction {
    pub serialized_transaction: String,
    pub transaction: String,
    pub token_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_contract_address: Option<String>,
    /// Only present on deploy: key for the freshly created token contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_contract_private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_contract_private_key: Option<String>,
    /// Only present on offer builds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_address: Option<String>,
    /// Only present on bid builds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    pub payload: SignerPayload,
}

/// A built transaction paired with its externally produced signature.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    pub tx: BuiltTransaction,
    pub signed_data: String,
}

/// Batch prove submission: an ordered list of signed transactions that
/// resolves to one hash per entry, in matching order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProveBatchRequest {
    pub txs: Vec<SignedTransaction>,
}

/// Response of the prove endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProveResponse {
    pub job_id: JobHandle,
}

/// Request body for the job-result endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResultRequest {
    pub job_id: JobHandle,
}

/// Response of the job-result endpoint. A populated `hash`/`hashes` field
/// means the job succeeded regardless of the status string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResultResponse {
    pub job_status: String,
    #[serde(default)]
    pub hash: Option<TransactionHash>,
    #[serde(default)]
    pub hashes: Option<Vec<TransactionHash>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request body for the tx-status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransactionStatusRequest {
    pub hash: TransactionHash,
}

/// Per-account failure entry inside transaction details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TxFailure {
    pub index: u32,
    pub failure_reason: String,
}

/// Block-level detail attached to a looked-up transaction.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TxDetails {
    pub block_height: u64,
    pub state_hash: String,
    pub block_status: String,
    pub timestamp: u64,
    pub tx_hash: String,
    pub tx_status: String,
    pub failures: Vec<TxFailure>,
    pub memo: String,
    pub fee_payer_address: String,
    pub fee: f64,
    pub nonce: u64,
    pub block_confirmations_count: u32,
}

/// Response of the tx-status endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStatusResponse {
    pub hash: TransactionHash,
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<TxDetails>,
}

/// A whitelisted address with its permitted amount.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistEntry {
    pub address: String,
    pub amount: u64,
}

/// Parameters for deploying a new token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployTokenParams {
    pub admin_address: String,
    pub symbol: String,
    pub decimals: u8,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<Vec<WhitelistEntry>>,
}

/// Kind of a basic token transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Mint,
    Transfer,
}

/// Parameters for a mint or transfer build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTxParams {
    pub tx_type: TxKind,
    pub sender_address: String,
    pub token_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_contract_address: Option<String>,
    pub to: String,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Parameters for offering tokens for sale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferParams {
    pub sender: String,
    pub token_address: String,
    pub amount: u64,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<Vec<WhitelistEntry>>,
}

/// Parameters for bidding on tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidParams {
    pub sender: String,
    pub token_address: String,
    pub amount: u64,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitelist: Option<Vec<WhitelistEntry>>,
}

/// Parameters for buying from an existing offer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyParams {
    pub sender: String,
    pub token_address: String,
    pub offer_address: String,
    pub amount: u64,
}

/// Parameters for selling into an existing bid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellParams {
    pub sender: String,
    pub token_address: String,
    pub bid_address: String,
    pub amount: u64,
}

/// Parameters for withdrawing tokens from an offer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawParams {
    pub sender: String,
    pub token_address: String,
    pub offer_address: String,
    pub amount: u64,
}

/// One airdrop recipient.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirdropRecipient {
    pub address: String,
    pub amount: u64,
}

/// Parameters for building an airdrop batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirdropParams {
    pub sender: String,
    pub token_address: String,
    pub recipients: Vec<AirdropRecipient>,
}

/// Response of the airdrop build endpoint: one transaction per recipient,
/// in recipient order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AirdropResponse {
    pub txs: Vec<BuiltTransaction>,
}

/// On-chain state of a deployed token.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenState {
    pub token_address: String,
    pub token_id: String,
    pub admin_contract_address: String,
    pub admin_address: String,
    pub admin_token_balance: u64,
    pub total_supply: u64,
    pub is_paused: bool,
    pub decimals: u8,
    pub token_symbol: String,
    pub verification_key_hash: String,
    pub uri: String,
    pub version: u32,
}

/// Request body for the token-info endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfoRequest {
    pub token_address: String,
}

/// Request body for the NFT-info endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NftInfoRequest {
    pub contract_address: String,
    pub nft_address: String,
}

/// Root of an NFT's off-chain metadata commitment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetadataRoot {
    pub data: String,
    pub kind: String,
}

/// NFT state as reported by the service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NftInfo {
    pub contract_address: String,
    pub nft_address: String,
    pub token_id: String,
    pub token_symbol: String,
    #[serde(default)]
    pub contract_uri: Option<String>,
    pub name: String,
    pub metadata_root: MetadataRoot,
    pub storage: String,
    pub owner: String,
    pub price: u64,
    pub version: u32,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Request body for the balance endpoint. Omitting `token_address` asks
/// for the native-coin balance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
    pub address: String,
}

/// Response of the balance endpoint; `balance` is absent for accounts the
/// indexer has not seen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BalanceResponse {
    #[serde(default)]
    pub balance: Option<u64>,
}

/// Request body for the faucet endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FaucetRequest {
    pub address: String,
}

/// Response of the faucet endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FaucetResponse {
    pub success: bool,
    #[serde(default)]
    pub hash: Option<TransactionHash>,
}

/// Request body for the nonce endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NonceRequest {
    pub address: String,
}

/// Response of the nonce endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NonceResponse {
    pub nonce: u64,
}
