//! Async client for the zkTokens token & NFT platform API.
//!
//! The service builds unsigned transactions, proves them asynchronously,
//! and submits them to the ledger. This crate wraps that flow: build a
//! transaction, sign it with your own [`Signer`], submit it for proving,
//! then block on [`TokenClient::wait_for_proofs`] and
//! [`TokenClient::wait_for_inclusion`] until the transaction is applied.
//! [`TokenClient::execute`] and [`TokenClient::execute_batch`] run the
//! whole lifecycle in one call.
//!
//! ```no_run
//! use zktokens::{ClientConfig, Network, TokenClient};
//! use zktokens::api::types::DeployTokenParams;
//!
//! # async fn run(signer: &dyn zktokens::Signer) -> zktokens::Result<()> {
//! let client = TokenClient::new(ClientConfig::new("my-api-key", Network::Devnet))?;
//!
//! let built = client
//!     .build_deploy(&DeployTokenParams {
//!         admin_address: "B62qouKM...".into(),
//!         symbol: "TEST".into(),
//!         decimals: 9,
//!         uri: "https://example.com/token.json".into(),
//!         memo: None,
//!         whitelist: None,
//!     })
//!     .await?;
//!
//! let receipt = client.execute(built, signer).await?;
//! println!("included: {}", receipt.hash);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod jobs;
pub mod lifecycle;
pub mod poll;
pub mod testdata;
pub mod watch;

pub use api::client::TokenClient;
pub use api::gateway::Gateway;
pub use api::types::{JobHandle, TransactionHash};
pub use config::{ClientConfig, Network};
pub use error::{Error, Result};
pub use jobs::{JobOutcome, JobStatus};
pub use lifecycle::{SignError, Signer};
pub use poll::{Poll, PollOutcome, PollSettings};
pub use watch::{InclusionReceipt, InclusionState};
