//! Caller-facing client: one method per endpoint plus the polling waits.

use crate::api::gateway::Gateway;
use crate::api::types::{
    AirdropParams, AirdropResponse, BalanceRequest, BalanceResponse, BidParams, BuiltTransaction,
    BuyParams, DeployTokenParams, FaucetRequest, FaucetResponse, JobHandle, JobResultRequest,
    JobResultResponse, NftInfo, NftInfoRequest, NonceRequest, NonceResponse, OfferParams,
    ProveBatchRequest, ProveResponse, SellParams, SignedTransaction, TokenInfoRequest,
    TokenState, TokenTxParams, TransactionHash, TransactionStatusRequest,
    TransactionStatusResponse, WithdrawParams,
};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::jobs::{self, JobOutcome};
use crate::watch::{self, InclusionReceipt};

/// Client for the token service. Cheap to clone; the network selection is
/// fixed at construction.
#[derive(Debug, Clone)]
pub struct TokenClient {
    config: ClientConfig,
    gateway: Gateway,
}

impl TokenClient {
    /// Build a client from a validated configuration. Rejects mainnet and
    /// other invalid configurations up front.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let gateway = Gateway::new(&config)?;
        Ok(Self { config, gateway })
    }

    /// Build a client from a TOML configuration file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let config = crate::config::load_config(path)?;
        Self::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// On-chain state of a deployed token.
    pub async fn token_info(&self, token_address: &str) -> Result<TokenState> {
        let request = TokenInfoRequest {
            token_address: token_address.to_string(),
        };
        self.gateway.call("info", &request).await
    }

    /// State of a minted NFT.
    pub async fn nft_info(&self, request: &NftInfoRequest) -> Result<NftInfo> {
        self.gateway.call("nft", request).await
    }

    /// Token or native-coin balance of an account.
    pub async fn balance(&self, request: &BalanceRequest) -> Result<BalanceResponse> {
        self.gateway.call("balance", request).await
    }

    /// Request devnet funds for an address.
    pub async fn faucet(&self, address: &str) -> Result<FaucetResponse> {
        let request = FaucetRequest {
            address: address.to_string(),
        };
        self.gateway.call("faucet", &request).await
    }

    /// Current account nonce.
    pub async fn nonce(&self, address: &str) -> Result<NonceResponse> {
        let request = NonceRequest {
            address: address.to_string(),
        };
        self.gateway.call("nonce", &request).await
    }

    /// Build an unsigned token-deploy transaction.
    pub async fn build_deploy(&self, params: &DeployTokenParams) -> Result<BuiltTransaction> {
        self.gateway.call("deploy", params).await
    }

    /// Build an unsigned mint or transfer transaction.
    pub async fn build_token_tx(&self, params: &TokenTxParams) -> Result<BuiltTransaction> {
        self.gateway.call("transaction", params).await
    }

    /// Build an unsigned offer transaction.
    pub async fn build_offer(&self, params: &OfferParams) -> Result<BuiltTransaction> {
        self.gateway.call("offer", params).await
    }

    /// Build an unsigned bid transaction.
    pub async fn build_bid(&self, params: &BidParams) -> Result<BuiltTransaction> {
        self.gateway.call("bid", params).await
    }

    /// Build an unsigned buy-from-offer transaction.
    pub async fn build_buy(&self, params: &BuyParams) -> Result<BuiltTransaction> {
        self.gateway.call("buy", params).await
    }

    /// Build an unsigned sell-into-bid transaction.
    pub async fn build_sell(&self, params: &SellParams) -> Result<BuiltTransaction> {
        self.gateway.call("sell", params).await
    }

    /// Build an unsigned withdraw-from-offer transaction.
    pub async fn build_withdraw(&self, params: &WithdrawParams) -> Result<BuiltTransaction> {
        self.gateway.call("withdraw", params).await
    }

    /// Build one unsigned transaction per airdrop recipient, in recipient
    /// order.
    pub async fn build_airdrop(&self, params: &AirdropParams) -> Result<Vec<BuiltTransaction>> {
        let response: AirdropResponse = self.gateway.call("airdrop", params).await?;
        Ok(response.txs)
    }

    /// Submit one signed transaction for proving.
    pub async fn prove(&self, signed: &SignedTransaction) -> Result<JobHandle> {
        let response: ProveResponse = self.gateway.call("prove", signed).await?;
        tracing::info!(job_id = %response.job_id, "prove accepted");
        Ok(response.job_id)
    }

    /// Submit an ordered batch of signed transactions for proving as one
    /// job. The job's success yields one hash per entry, in this order.
    pub async fn prove_batch(&self, txs: Vec<SignedTransaction>) -> Result<JobHandle> {
        let request = ProveBatchRequest { txs };
        let response: ProveResponse = self.gateway.call("prove", &request).await?;
        tracing::info!(job_id = %response.job_id, count = request.txs.len(), "batch prove accepted");
        Ok(response.job_id)
    }

    /// One job-status lookup, no polling.
    pub async fn job_result(&self, handle: &JobHandle) -> Result<JobResultResponse> {
        let request = JobResultRequest {
            job_id: handle.clone(),
        };
        self.gateway.call("result", &request).await
    }

    /// One inclusion-status lookup, no polling.
    pub async fn tx_status(&self, hash: &TransactionHash) -> Result<TransactionStatusResponse> {
        let request = TransactionStatusRequest { hash: hash.clone() };
        self.gateway.call("tx-status", &request).await
    }

    /// Block until the proving job resolves or its poll budget runs out.
    pub async fn wait_for_proofs(&self, handle: &JobHandle) -> Result<JobOutcome> {
        jobs::wait_for_proofs(&self.gateway, &self.config.job_poll, handle).await
    }

    /// Block until the transaction is applied, fails, or the inclusion
    /// poll budget runs out.
    pub async fn wait_for_inclusion(&self, hash: &TransactionHash) -> Result<InclusionReceipt> {
        watch::wait_for_inclusion(&self.gateway, &self.config.inclusion_poll, hash).await
    }
}
